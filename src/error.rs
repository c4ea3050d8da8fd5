use std::convert::Infallible;

use thiserror::Error;

use crate::parse::ParseError;
use crate::{OperandsError, RulesError};

/// Unified error type covering rule parsing, number decomposition, and
/// rule-set construction.
///
/// Returned by [`evaluate()`](crate::evaluate()),
/// [`PluralRuleEvaluator::evaluate()`](crate::PluralRuleEvaluator::evaluate)
/// and [`PluralRules::select()`](crate::PluralRules::select).
#[derive(Debug, Error)]
pub enum PluralError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Operands(#[from] OperandsError),

    #[error(transparent)]
    Rules(#[from] RulesError),
}

impl From<Infallible> for PluralError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
