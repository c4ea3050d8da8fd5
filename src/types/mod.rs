mod category;
mod error;
mod evaluation;
mod operands;
mod range;
mod rules;

pub use category::{PluralCategory, UnknownCategory};
pub use error::{OperandsError, RulesError};
pub use evaluation::{EvalWarning, Evaluation};
pub use operands::{Operand, PluralOperands};
pub use rules::{PluralRules, PluralRulesBuilder};

pub(crate) use range::{RangeItem, RangeList};
