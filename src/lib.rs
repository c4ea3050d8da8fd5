//! Evaluation of CLDR plural rules such as `n % 10 = 1 and n % 100 != 11`.
//!
//! ```
//! use cldr_plural::evaluate;
//!
//! assert!(evaluate("n in 1,3..5", 3).unwrap());
//! assert!(!evaluate("n within 1..5", 5).unwrap());
//! assert!(evaluate("i = 0 and v = 0 @integer 0", 0).unwrap());
//! ```

mod error;
mod evaluate;
mod parse;
mod types;

pub use error::PluralError;
pub use evaluate::{PluralRuleEvaluator, evaluate, evaluate_detailed};
pub use parse::ParseError;
pub use types::{
    EvalWarning, Evaluation, Operand, OperandsError, PluralCategory, PluralOperands, PluralRules,
    PluralRulesBuilder, RulesError, UnknownCategory,
};
