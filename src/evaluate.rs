use crate::parse::{self, ParseError};
use crate::{EvalWarning, Evaluation, PluralError, PluralOperands};

const LOG_TARGET: &str = "cldr_plural";

/// Evaluates CLDR plural rules against numbers.
///
/// The grammar is fixed, so an evaluator only carries configuration and is
/// cheap to copy. Each call parses the rule afresh with its own cursor;
/// nothing is shared between calls, so one evaluator can serve any number of
/// threads.
///
/// By default the evaluator is lenient: if a rule evaluates but text remains
/// after the last relation, the remainder is ignored and a warning is logged.
/// [`strict(true)`](Self::strict) turns that case into a [`ParseError`].
///
/// # Example
///
/// ```
/// use cldr_plural::PluralRuleEvaluator;
///
/// let evaluator = PluralRuleEvaluator::new();
/// assert!(evaluator.evaluate("i = 1 and v = 0", 1).unwrap());
/// assert!(!evaluator.evaluate("i = 1 and v = 0", "1.0").unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PluralRuleEvaluator {
    strict: bool,
}

impl PluralRuleEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject rules with unparsed trailing text instead of warning about them.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Test whether `number` satisfies `rule`.
    ///
    /// `number` may be an integer, a float, decimal text such as `"1.20"`, or
    /// ready-made [`PluralOperands`].
    ///
    /// # Errors
    ///
    /// Returns [`PluralError`] if the number cannot be decomposed into
    /// operands or the rule cannot be parsed.
    pub fn evaluate<N>(&self, rule: &str, number: N) -> Result<bool, PluralError>
    where
        N: TryInto<PluralOperands>,
        PluralError: From<N::Error>,
    {
        Ok(self.evaluate_detailed(rule, number)?.result())
    }

    /// Like [`evaluate()`](Self::evaluate), but returns an [`Evaluation`]
    /// with the number of bytes consumed and any warning.
    ///
    /// # Errors
    ///
    /// Returns [`PluralError`] if the number cannot be decomposed into
    /// operands or the rule cannot be parsed.
    pub fn evaluate_detailed<N>(&self, rule: &str, number: N) -> Result<Evaluation, PluralError>
    where
        N: TryInto<PluralOperands>,
        PluralError: From<N::Error>,
    {
        let operands: PluralOperands = number.try_into()?;
        Ok(self.evaluate_operands(rule, &operands)?)
    }

    /// Evaluate `rule` against already decomposed operands.
    ///
    /// The `@integer`/`@decimal` sample section is stripped first. A rule that
    /// is empty after stripping always matches: it is the implicit `other`
    /// rule.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if no condition can be parsed from the rule, or,
    /// in strict mode, if text remains after the condition.
    pub fn evaluate_operands(
        &self,
        rule: &str,
        operands: &PluralOperands,
    ) -> Result<Evaluation, ParseError> {
        let rule = parse::strip_samples(rule);
        if rule.is_empty() {
            return Ok(Evaluation::new(true, 0, None));
        }

        let parsed = parse::parse_condition(rule, operands)?;
        if parsed.consumed == rule.len() {
            return Ok(Evaluation::new(parsed.result, parsed.consumed, None));
        }

        let unparsed = &rule[parsed.consumed..];
        if self.strict {
            return Err(ParseError::new(
                rule,
                parsed.consumed,
                format!("unexpected trailing input '{unparsed}'"),
            ));
        }

        let warning = EvalWarning::IncompleteParse {
            position: parsed.consumed,
            unparsed: unparsed.to_owned(),
        };
        log::warn!(target: LOG_TARGET, "{warning} (rule '{rule}')");
        Ok(Evaluation::new(parsed.result, parsed.consumed, Some(warning)))
    }

    /// Check that `rule` parses.
    ///
    /// Whether a rule parses does not depend on the number it is tested
    /// against, so this evaluates it once against zero.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] under the same conditions as
    /// [`evaluate_operands()`](Self::evaluate_operands).
    pub fn check(&self, rule: &str) -> Result<(), ParseError> {
        self.evaluate_operands(rule, &PluralOperands::default())
            .map(|_| ())
    }
}

/// Test whether `number` satisfies the CLDR plural `rule`, using the default
/// (lenient) [`PluralRuleEvaluator`].
///
/// ```
/// assert!(cldr_plural::evaluate("n % 10 = 1 and n % 100 != 11", 21).unwrap());
/// assert!(!cldr_plural::evaluate("n % 10 = 1 and n % 100 != 11", 11).unwrap());
/// assert!(cldr_plural::evaluate("@integer 0, 2~16", 7).unwrap());
/// ```
///
/// # Errors
///
/// Returns [`PluralError`] if the number cannot be decomposed into operands
/// or the rule cannot be parsed.
pub fn evaluate<N>(rule: &str, number: N) -> Result<bool, PluralError>
where
    N: TryInto<PluralOperands>,
    PluralError: From<N::Error>,
{
    PluralRuleEvaluator::new().evaluate(rule, number)
}

/// Like [`evaluate()`], but returns the detailed [`Evaluation`].
///
/// # Errors
///
/// Returns [`PluralError`] if the number cannot be decomposed into operands
/// or the rule cannot be parsed.
pub fn evaluate_detailed<N>(rule: &str, number: N) -> Result<Evaluation, PluralError>
where
    N: TryInto<PluralOperands>,
    PluralError: From<N::Error>,
{
    PluralRuleEvaluator::new().evaluate_detailed(rule, number)
}
