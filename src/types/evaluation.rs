use std::fmt;

/// Non-fatal diagnostics produced while evaluating a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalWarning {
    /// The rule evaluated, but the parser stopped before the end of the text.
    /// The ignored suffix does not affect the result.
    IncompleteParse { position: usize, unparsed: String },
}

impl fmt::Display for EvalWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalWarning::IncompleteParse { position, unparsed } => write!(
                f,
                "rule not parsed completely: stopped at position {position}, ignored '{unparsed}'"
            ),
        }
    }
}

/// Detailed result returned by
/// [`PluralRuleEvaluator::evaluate_detailed()`](crate::PluralRuleEvaluator::evaluate_detailed).
///
/// Carries the boolean outcome, how much of the rule text (after the sample
/// section was stripped) the parser consumed, and any warning raised.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Evaluation {
    result: bool,
    consumed: usize,
    warning: Option<EvalWarning>,
}

impl Evaluation {
    pub(crate) fn new(result: bool, consumed: usize, warning: Option<EvalWarning>) -> Self {
        Self {
            result,
            consumed,
            warning,
        }
    }

    /// Whether the number satisfies the rule.
    #[must_use]
    pub fn result(&self) -> bool {
        self.result
    }

    /// Bytes of rule text consumed by the parser.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    #[must_use]
    pub fn warning(&self) -> Option<&EvalWarning> {
        self.warning.as_ref()
    }

    /// `true` when the whole rule was parsed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.warning.is_none()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "result: {}, consumed: {}", self.result, self.consumed)?;
        if let Some(warning) = &self.warning {
            write!(f, ", warning: {warning}")?;
        }
        Ok(())
    }
}
