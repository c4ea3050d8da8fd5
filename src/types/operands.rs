use std::fmt;
use std::str::FromStr;

use super::error::OperandsError;

/// One of the six numeric facets a plural rule can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// Absolute value of the source number.
    N,
    /// Integer digits.
    I,
    /// Visible fraction digits, with trailing zeros.
    F,
    /// Visible fraction digits, without trailing zeros.
    T,
    /// Number of visible fraction digits, with trailing zeros.
    V,
    /// Number of visible fraction digits, without trailing zeros.
    W,
}

impl Operand {
    pub const ALL: [Operand; 6] = [
        Operand::N,
        Operand::I,
        Operand::F,
        Operand::T,
        Operand::V,
        Operand::W,
    ];

    /// The letter naming this operand in rule text.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Operand::N => 'n',
            Operand::I => 'i',
            Operand::F => 'f',
            Operand::T => 't',
            Operand::V => 'v',
            Operand::W => 'w',
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A source number decomposed into its plural operands.
///
/// The decomposition happens once, when the value is constructed, so every
/// operand is a plain lookup during evaluation. Visible fraction digits are
/// taken from decimal text: `"1.20"` has two (`v = 2`, `f = 20`) while `"1.2"`
/// has one. Integers have none. Floats are rendered with their shortest
/// round-trip representation first, so `2.0_f64` behaves like `"2"` and
/// `0.1_f64` like `"0.1"`.
///
/// ```
/// use cldr_plural::{Operand, PluralOperands};
///
/// let ops: PluralOperands = "1.20".parse().unwrap();
/// assert_eq!(ops.get(Operand::I), 1.0);
/// assert_eq!(ops.get(Operand::V), 2.0);
/// assert_eq!(ops.get(Operand::W), 1.0);
/// assert_eq!(ops.get(Operand::F), 20.0);
/// assert_eq!(ops.get(Operand::T), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PluralOperands {
    negative: bool,
    n: f64,
    i: f64,
    f: f64,
    t: f64,
    v: usize,
    w: usize,
}

impl PluralOperands {
    /// Look up the value of a single operand.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn get(&self, operand: Operand) -> f64 {
        match operand {
            Operand::N => self.n,
            Operand::I => self.i,
            Operand::F => self.f,
            Operand::T => self.t,
            Operand::V => self.v as f64,
            Operand::W => self.w as f64,
        }
    }

    /// Whether the source number carried a minus sign. Operands themselves
    /// are always taken from the absolute value.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Number of visible fraction digits, with trailing zeros.
    #[must_use]
    pub fn visible_fraction_digits(&self) -> usize {
        self.v
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_integer(negative: bool, magnitude: u64) -> Self {
        let value = magnitude as f64;
        Self {
            negative,
            n: value,
            i: value,
            ..Self::default()
        }
    }

    fn from_decimal(text: &str) -> Result<Self, OperandsError> {
        let invalid = || OperandsError::InvalidDecimal {
            input: text.to_owned(),
        };

        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (unsigned, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if integer.is_empty()
            || !all_digits(integer)
            || !all_digits(fraction)
            || (unsigned.contains('.') && fraction.is_empty())
        {
            return Err(invalid());
        }

        let trimmed = fraction.trim_end_matches('0');
        let digits_value = |s: &str| -> Result<f64, OperandsError> {
            if s.is_empty() {
                Ok(0.0)
            } else {
                s.parse::<f64>().map_err(|_| invalid())
            }
        };

        Ok(Self {
            negative,
            n: unsigned.parse::<f64>().map_err(|_| invalid())?,
            i: digits_value(integer)?,
            f: digits_value(fraction)?,
            t: digits_value(trimmed)?,
            v: fraction.len(),
            w: trimmed.len(),
        })
    }

    /// Decompose a float from its rendered magnitude. Float `Display` is the
    /// shortest round-trip text and never switches to exponent notation, so
    /// `0.1_f32` stays `"0.1"`.
    fn from_float(
        magnitude: impl fmt::Display,
        finite: bool,
        negative: bool,
    ) -> Result<Self, OperandsError> {
        if !finite {
            return Err(OperandsError::NotFinite);
        }
        let mut operands = Self::from_decimal(&magnitude.to_string())?;
        operands.negative = negative;
        Ok(operands)
    }
}

impl FromStr for PluralOperands {
    type Err = OperandsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s.trim())
    }
}

impl TryFrom<&str> for PluralOperands {
    type Error = OperandsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&String> for PluralOperands {
    type Error = OperandsError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<f64> for PluralOperands {
    type Error = OperandsError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_float(
            value.abs(),
            value.is_finite(),
            value.is_sign_negative() && value != 0.0,
        )
    }
}

impl TryFrom<f32> for PluralOperands {
    type Error = OperandsError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::from_float(
            value.abs(),
            value.is_finite(),
            value.is_sign_negative() && value != 0.0,
        )
    }
}

impl From<i64> for PluralOperands {
    fn from(value: i64) -> Self {
        Self::from_integer(value < 0, value.unsigned_abs())
    }
}

impl From<i32> for PluralOperands {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<u64> for PluralOperands {
    fn from(value: u64) -> Self {
        Self::from_integer(false, value)
    }
}

impl From<u32> for PluralOperands {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<usize> for PluralOperands {
    fn from(value: usize) -> Self {
        // usize is at most 64 bits on every supported target.
        Self::from(value as u64)
    }
}

impl fmt::Display for PluralOperands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} i={} f={} t={} v={} w={}",
            self.n, self.i, self.f, self.t, self.v, self.w
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops(text: &str) -> PluralOperands {
        text.parse().unwrap()
    }

    #[test]
    fn integer_text_has_no_fraction() {
        let o = ops("42");
        assert_eq!(o.get(Operand::N), 42.0);
        assert_eq!(o.get(Operand::I), 42.0);
        assert_eq!(o.get(Operand::V), 0.0);
        assert_eq!(o.get(Operand::W), 0.0);
        assert_eq!(o.get(Operand::F), 0.0);
        assert_eq!(o.get(Operand::T), 0.0);
    }

    #[test]
    fn trailing_zeros_are_visible() {
        let o = ops("1.20");
        assert_eq!(o.get(Operand::N), 1.2);
        assert_eq!(o.get(Operand::I), 1.0);
        assert_eq!(o.get(Operand::V), 2.0);
        assert_eq!(o.get(Operand::W), 1.0);
        assert_eq!(o.get(Operand::F), 20.0);
        assert_eq!(o.get(Operand::T), 2.0);
    }

    #[test]
    fn all_zero_fraction() {
        let o = ops("3.000");
        assert_eq!(o.get(Operand::V), 3.0);
        assert_eq!(o.get(Operand::W), 0.0);
        assert_eq!(o.get(Operand::F), 0.0);
        assert_eq!(o.get(Operand::T), 0.0);
    }

    #[test]
    fn leading_fraction_zeros_kept() {
        let o = ops("0.050");
        assert_eq!(o.get(Operand::F), 50.0);
        assert_eq!(o.get(Operand::T), 5.0);
        assert_eq!(o.get(Operand::V), 3.0);
        assert_eq!(o.get(Operand::W), 2.0);
    }

    #[test]
    fn negative_text_uses_absolute_value() {
        let o = ops("-5.5");
        assert!(o.is_negative());
        assert_eq!(o.get(Operand::N), 5.5);
        assert_eq!(o.get(Operand::I), 5.0);
    }

    #[test]
    fn integers_convert() {
        assert_eq!(PluralOperands::from(7_i32).get(Operand::I), 7.0);
        assert_eq!(PluralOperands::from(-7_i64).get(Operand::N), 7.0);
        assert!(PluralOperands::from(-7_i64).is_negative());
        assert_eq!(PluralOperands::from(9_u32).get(Operand::V), 0.0);
        assert_eq!(PluralOperands::from(u64::MAX).get(Operand::I), u64::MAX as f64);
        assert_eq!(PluralOperands::from(3_usize).get(Operand::N), 3.0);
    }

    #[test]
    fn floats_use_shortest_representation() {
        let two = PluralOperands::try_from(2.0_f64).unwrap();
        assert_eq!(two.get(Operand::V), 0.0);

        let tenth = PluralOperands::try_from(0.1_f64).unwrap();
        assert_eq!(tenth.get(Operand::V), 1.0);
        assert_eq!(tenth.get(Operand::F), 1.0);

        let tenth32 = PluralOperands::try_from(0.1_f32).unwrap();
        assert_eq!(tenth32.get(Operand::V), 1.0);

        let tiny = PluralOperands::try_from(1e-7_f64).unwrap();
        assert_eq!(tiny.get(Operand::V), 7.0);
        assert_eq!(tiny.get(Operand::F), 1.0);
    }

    #[test]
    fn f32_and_f64_share_decomposition() {
        let wide = PluralOperands::try_from(-2.5_f64).unwrap();
        let narrow = PluralOperands::try_from(-2.5_f32).unwrap();
        assert_eq!(wide, narrow);
        assert!(narrow.is_negative());
        assert!(!PluralOperands::try_from(-0.0_f32).unwrap().is_negative());
        assert_eq!(
            PluralOperands::try_from(f32::NEG_INFINITY),
            Err(OperandsError::NotFinite)
        );
    }

    #[test]
    fn negative_zero_is_not_negative() {
        let o = PluralOperands::try_from(-0.0_f64).unwrap();
        assert!(!o.is_negative());
        assert_eq!(o.get(Operand::N), 0.0);
    }

    #[test]
    fn non_finite_floats_rejected() {
        assert_eq!(
            PluralOperands::try_from(f64::NAN),
            Err(OperandsError::NotFinite)
        );
        assert_eq!(
            PluralOperands::try_from(f64::INFINITY),
            Err(OperandsError::NotFinite)
        );
    }

    #[test]
    fn malformed_text_rejected() {
        for bad in ["", "-", ".5", "1.", "1.2.3", "1e5", "abc", "1,5", "--1"] {
            assert_eq!(
                bad.parse::<PluralOperands>(),
                Err(OperandsError::InvalidDecimal {
                    input: bad.to_owned()
                }),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert_eq!(ops(" 1.5 "), ops("1.5"));
    }

    #[test]
    fn operand_letters() {
        let letters: String = Operand::ALL.iter().map(|o| o.letter()).collect();
        assert_eq!(letters, "niftvw");
        assert_eq!(Operand::W.to_string(), "w");
    }

    #[test]
    fn display_lists_operands() {
        assert_eq!(ops("1.20").to_string(), "n=1.2 i=1 f=20 t=2 v=2 w=1");
    }
}
