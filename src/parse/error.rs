use std::fmt;

/// Errors produced when a plural rule cannot be parsed.
///
/// Carries the byte position where the parser stopped and the rule text it
/// was working on (with any `@integer`/`@decimal` samples already removed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    rule: String,
    position: usize,
    message: String,
}

impl ParseError {
    pub(crate) fn new(rule: impl Into<String>, position: usize, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            position,
            message: message.into(),
        }
    }

    /// Byte offset into [`rule()`](Self::rule) where parsing stopped.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn rule(&self) -> &str {
        &self.rule
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parse error at position {} in rule '{}': {}",
            self.position, self.rule, self.message
        )
    }
}

impl std::error::Error for ParseError {}
