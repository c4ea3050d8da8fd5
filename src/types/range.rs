use std::fmt;

/// A single entry in a range list: either one integer or an inclusive
/// interval `lo..hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum RangeItem {
    Value(f64),
    Range(f64, f64),
}

impl RangeItem {
    /// Smallest and largest integer member, or `None` for a reversed
    /// interval, which has no members.
    fn members(self) -> Option<(f64, f64)> {
        match self {
            RangeItem::Value(v) => Some((v, v)),
            RangeItem::Range(lo, hi) if lo <= hi => Some((lo, hi)),
            RangeItem::Range(..) => None,
        }
    }
}

/// Comma-separated integers and intervals, e.g. `0,2..4,11..19`.
///
/// Intervals are kept as endpoint pairs. Membership for `in` is the same as
/// testing against the fully expanded list of integers: the value must be an
/// integer lying inside one of the entries. `within` only looks at the first
/// and last member of that expanded list.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RangeList {
    items: Vec<RangeItem>,
}

impl RangeList {
    pub(crate) fn new(items: Vec<RangeItem>) -> Self {
        Self { items }
    }

    /// Integer membership, as used by `in`, `=`, `not in` and `!=`.
    pub(crate) fn contains(&self, value: f64) -> bool {
        if value.fract() != 0.0 {
            return false;
        }
        self.items
            .iter()
            .filter_map(|item| item.members())
            .any(|(lo, hi)| lo <= value && value <= hi)
    }

    /// Continuous bound test used by `within`: `first <= value < last`,
    /// where `first` and `last` are the outermost members of the list.
    /// Entries between them are not consulted.
    pub(crate) fn within(&self, value: f64) -> bool {
        let mut members = self.items.iter().filter_map(|item| item.members());
        let Some((first, hi)) = members.next() else {
            return false;
        };
        let last = members.last().map_or(hi, |(_, hi)| hi);
        first <= value && value < last
    }
}

impl fmt::Display for RangeItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeItem::Value(v) => write!(f, "{v}"),
            RangeItem::Range(lo, hi) => write!(f, "{lo}..{hi}"),
        }
    }
}

impl fmt::Display for RangeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
