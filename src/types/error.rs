use thiserror::Error;

use crate::parse::ParseError;

use super::category::PluralCategory;

/// Errors produced when turning a source number into plural operands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperandsError {
    #[error("invalid decimal number '{input}'")]
    InvalidDecimal { input: String },

    #[error("number is not finite")]
    NotFinite,
}

/// Errors produced when building a [`PluralRules`](super::PluralRules) set.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("duplicate rule for plural category '{category}'")]
    DuplicateCategory { category: PluralCategory },

    #[error("invalid rule for plural category '{category}'")]
    InvalidRule {
        category: PluralCategory,
        #[source]
        source: ParseError,
    },
}
