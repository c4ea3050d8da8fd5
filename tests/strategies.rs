use proptest::prelude::*;

// --- Fixed rule vocabulary ---
// operands : n i f t v w
// modulus  : none, 10, 100
// values   : 0..=20, ranges lo..hi with lo <= hi

const OPERANDS: &[&str] = &["n", "i", "f", "t", "v", "w"];

/// Generate exact decimal text, with or without a fraction.
pub fn arb_decimal() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,6}",
        "[0-9]{1,6}\\.[0-9]{1,4}",
        "-[0-9]{1,4}(\\.[0-9]{1,3})?",
    ]
}

/// Generate an operand expression, optionally reduced by a modulus.
pub fn arb_expr() -> impl Strategy<Value = String> {
    (
        prop::sample::select(OPERANDS),
        prop::sample::select(&["", " % 10", " mod 10", " % 100"][..]),
    )
        .prop_map(|(operand, modulus)| format!("{operand}{modulus}"))
}

/// Generate a single range list entry.
fn arb_range_item() -> impl Strategy<Value = String> {
    prop_oneof![
        (0_u32..=20).prop_map(|v| v.to_string()),
        (0_u32..=20, 0_u32..=20).prop_map(|(a, b)| format!("{}..{}", a.min(b), a.max(b))),
    ]
}

/// Generate a comma-separated range list.
pub fn arb_range_list() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_range_item(), 1..4).prop_map(|items| items.join(","))
}

/// Generate a well-formed relation.
pub fn arb_relation() -> impl Strategy<Value = String> {
    let ops = &["is", "is not", "in", "not in", "=", "!=", "within", "not within"][..];
    (arb_expr(), prop::sample::select(ops), arb_range_list(), 0_u32..=20).prop_map(
        |(expr, op, ranges, value)| {
            if op.starts_with("is") {
                format!("{expr} {op} {value}")
            } else {
                format!("{expr} {op} {ranges}")
            }
        },
    )
}

/// Generate a well-formed condition of up to three `or` terms, each with up
/// to three `and`ed relations.
pub fn arb_condition() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::collection::vec(arb_relation(), 1..4).prop_map(|rels| rels.join(" and ")),
        1..4,
    )
    .prop_map(|terms| terms.join(" or "))
}
