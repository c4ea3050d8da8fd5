use std::fmt;
use std::str::FromStr;

/// CLDR plural categories, in CLDR order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    /// The fallback category. Its rule, if any, is empty and always matches.
    Other,
}

/// Returned when a string names no plural category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plural category '{0}'")]
pub struct UnknownCategory(pub String);

impl PluralCategory {
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl FromStr for PluralCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PluralCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_every_category() {
        for category in PluralCategory::ALL {
            assert_eq!(category.as_str().parse::<PluralCategory>(), Ok(category));
        }
    }

    #[test]
    fn parse_unknown_category() {
        assert_eq!(
            "several".parse::<PluralCategory>(),
            Err(UnknownCategory("several".into()))
        );
        assert_eq!(
            UnknownCategory("One".into()).to_string(),
            "unknown plural category 'One'"
        );
    }

    #[test]
    fn cldr_order() {
        let mut shuffled = vec![
            PluralCategory::Other,
            PluralCategory::Few,
            PluralCategory::Zero,
            PluralCategory::Many,
            PluralCategory::One,
            PluralCategory::Two,
        ];
        shuffled.sort();
        assert_eq!(shuffled, PluralCategory::ALL);
    }

    #[test]
    fn display() {
        assert_eq!(PluralCategory::Many.to_string(), "many");
    }
}
