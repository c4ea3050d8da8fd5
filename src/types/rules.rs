use std::fmt;

use crate::parse::ParseError;
use crate::{PluralError, PluralRuleEvaluator};

use super::category::PluralCategory;
use super::error::RulesError;
use super::operands::PluralOperands;

/// Builder for constructing a [`PluralRules`] set.
///
/// # Example
///
/// ```
/// use cldr_plural::{PluralCategory, PluralRules};
///
/// let russian = PluralRules::builder()
///     .rule(PluralCategory::One, "v = 0 and i % 10 = 1 and i % 100 != 11")
///     .rule(PluralCategory::Few, "v = 0 and i % 10 = 2..4 and i % 100 != 12..14")
///     .rule(
///         PluralCategory::Many,
///         "v = 0 and i % 10 = 0 or v = 0 and i % 10 = 5..9 or v = 0 and i % 100 = 11..14",
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(russian.select(21).unwrap(), PluralCategory::One);
/// assert_eq!(russian.select(3).unwrap(), PluralCategory::Few);
/// assert_eq!(russian.select(11).unwrap(), PluralCategory::Many);
/// assert_eq!(russian.select("1.5").unwrap(), PluralCategory::Other);
/// ```
#[derive(Debug, Default)]
pub struct PluralRulesBuilder {
    rules: Vec<(PluralCategory, String)>,
    evaluator: PluralRuleEvaluator,
}

impl PluralRulesBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a rule to a category. Sample sections (`@integer …`) may be
    /// left in place.
    #[must_use]
    pub fn rule(mut self, category: PluralCategory, rule: impl Into<String>) -> Self {
        self.rules.push((category, rule.into()));
        self
    }

    /// Use a strict evaluator, rejecting rules with unparsed trailing text.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.evaluator = self.evaluator.strict(strict);
        self
    }

    /// Validate the rules and build an immutable `PluralRules`.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] if a category is given twice or a rule does
    /// not parse.
    pub fn build(self) -> Result<PluralRules, RulesError> {
        let mut rules: Vec<(PluralCategory, String)> = Vec::with_capacity(self.rules.len());
        for (category, rule) in self.rules {
            if rules.iter().any(|(existing, _)| *existing == category) {
                return Err(RulesError::DuplicateCategory { category });
            }
            self.evaluator
                .check(&rule)
                .map_err(|source| RulesError::InvalidRule { category, source })?;
            rules.push((category, rule));
        }
        rules.sort_by_key(|(category, _)| *category);

        Ok(PluralRules {
            rules,
            evaluator: self.evaluator,
        })
    }
}

/// The plural rules of one locale. Immutable and thread-safe once built.
///
/// Rules are tested in CLDR category order (`zero`, `one`, `two`, `few`,
/// `many`); the first that matches decides the category. `other` needs no
/// rule and is the fallback.
#[derive(Debug, Clone)]
pub struct PluralRules {
    rules: Vec<(PluralCategory, String)>,
    evaluator: PluralRuleEvaluator,
}

impl PluralRules {
    #[must_use]
    pub fn builder() -> PluralRulesBuilder {
        PluralRulesBuilder::new()
    }

    /// Select the plural category for `number`.
    ///
    /// # Errors
    ///
    /// Returns [`PluralError`] if the number cannot be decomposed into
    /// operands.
    pub fn select<N>(&self, number: N) -> Result<PluralCategory, PluralError>
    where
        N: TryInto<PluralOperands>,
        PluralError: From<N::Error>,
    {
        let operands: PluralOperands = number.try_into()?;
        Ok(self.select_operands(&operands)?)
    }

    /// Select the plural category for already decomposed operands.
    ///
    /// # Errors
    ///
    /// Rules are validated when the set is built, so this only fails if that
    /// validation and evaluation disagree.
    pub fn select_operands(&self, operands: &PluralOperands) -> Result<PluralCategory, ParseError> {
        for (category, rule) in &self.rules {
            if *category == PluralCategory::Other {
                continue;
            }
            if self.evaluator.evaluate_operands(rule, operands)?.result() {
                return Ok(*category);
            }
        }
        Ok(PluralCategory::Other)
    }

    /// Categories this locale distinguishes, in CLDR order. Always ends with
    /// `other`.
    #[must_use]
    pub fn categories(&self) -> Vec<PluralCategory> {
        let mut categories: Vec<PluralCategory> =
            self.rules.iter().map(|(category, _)| *category).collect();
        if categories.last() != Some(&PluralCategory::Other) {
            categories.push(PluralCategory::Other);
        }
        categories
    }

    /// The rule text attached to `category`, as given to the builder.
    #[must_use]
    pub fn rule(&self, category: PluralCategory) -> Option<&str> {
        self.rules
            .iter()
            .find(|(existing, _)| *existing == category)
            .map(|(_, rule)| rule.as_str())
    }
}

impl fmt::Display for PluralRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self
            .categories()
            .into_iter()
            .map(PluralCategory::as_str)
            .collect();
        write!(f, "PluralRules({})", names.join(", "))
    }
}
