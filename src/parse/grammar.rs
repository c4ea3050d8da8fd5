use std::cell::Cell;

use winnow::combinator::{alt, cut_err, opt, preceded, repeat, separated};
use winnow::error::{ContextError, ErrMode, ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::stream::Stateful;
use winnow::token::take_while;

use crate::types::{Operand, PluralOperands, RangeItem, RangeList};

/// Rule text being parsed, carrying a [`State`].
///
/// Every production evaluates as it parses, so the result of a successful
/// parse is already the boolean outcome of the rule.
pub(crate) type Input<'i, 's> = Stateful<&'i str, &'s State<'s>>;

const LOG_TARGET: &str = "cldr_plural";

/// Per-call parser state: the operands of the number under test, and how far
/// into the rule any production got.
#[derive(Debug)]
pub(crate) struct State<'o> {
    operands: &'o PluralOperands,
    /// Shortest remaining input after a successful token.
    shortest_rest: Cell<usize>,
}

impl<'o> State<'o> {
    pub(crate) fn new(rule: &str, operands: &'o PluralOperands) -> Self {
        Self {
            operands,
            shortest_rest: Cell::new(rule.len()),
        }
    }

    /// Byte offset of the furthest point any token reached in `rule`.
    ///
    /// A failed alternative does not restore the stream, so on failure this,
    /// not the stream position, is where the rule broke.
    pub(crate) fn furthest(&self, rule: &str) -> usize {
        rule.len() - self.shortest_rest.get()
    }

    fn reached(&self, rest: usize) {
        self.shortest_rest.set(self.shortest_rest.get().min(rest));
    }
}

/// Run `parser`, recording the progress it makes.
fn tracked<'i, 's, O>(
    mut parser: impl Parser<Input<'i, 's>, O, ErrMode<ContextError>>,
) -> impl Parser<Input<'i, 's>, O, ErrMode<ContextError>> {
    move |input: &mut Input<'i, 's>| -> ModalResult<O> {
        let output = parser.parse_next(input)?;
        input.state.reached(input.input.len());
        Ok(output)
    }
}

// -- Whitespace -------------------------------------------------------------

fn ws(input: &mut Input<'_, '_>) -> ModalResult<()> {
    tracked(take_while(1.., |c: char| c.is_whitespace()).void()).parse_next(input)
}

// -- Values -----------------------------------------------------------------

fn integer(input: &mut Input<'_, '_>) -> ModalResult<f64> {
    tracked(take_while(1.., |c: char| c.is_ascii_digit()))
        .try_map(|digits: &str| digits.parse::<f64>())
        .context(StrContext::Expected(StrContextValue::Description(
            "integer",
        )))
        .parse_next(input)
}

fn range_item(input: &mut Input<'_, '_>) -> ModalResult<RangeItem> {
    let lo = integer(input)?;
    if opt(tracked("..")).parse_next(input)?.is_none() {
        return Ok(RangeItem::Value(lo));
    }
    // An opened interval must be closed; no other production can use the `..`.
    let hi = cut_err(integer)
        .context(StrContext::Expected(StrContextValue::Description(
            "range end",
        )))
        .parse_next(input)?;
    Ok(RangeItem::Range(lo, hi))
}

fn range_list(input: &mut Input<'_, '_>) -> ModalResult<RangeList> {
    let items: Vec<RangeItem> = separated(1.., range_item, tracked(',')).parse_next(input)?;
    Ok(RangeList::new(items))
}

// -- Operands & expressions -------------------------------------------------

fn operand(input: &mut Input<'_, '_>) -> ModalResult<f64> {
    let operand = tracked(alt((
        'n'.value(Operand::N),
        'i'.value(Operand::I),
        'f'.value(Operand::F),
        't'.value(Operand::T),
        'v'.value(Operand::V),
        'w'.value(Operand::W),
    )))
    .context(StrContext::Expected(StrContextValue::Description(
        "operand",
    )))
    .parse_next(input)?;
    Ok(input.state.operands.get(operand))
}

fn expr(input: &mut Input<'_, '_>) -> ModalResult<f64> {
    let value = operand(input)?;
    let modulus =
        opt(preceded((ws, tracked(alt(("mod", "%"))), ws), integer)).parse_next(input)?;
    // f64 `%` keeps the sign of the dividend; modulo zero is NaN.
    Ok(modulus.map_or(value, |m| value % m))
}

// -- Relations --------------------------------------------------------------

#[allow(clippy::float_cmp)]
fn is_relation(input: &mut Input<'_, '_>) -> ModalResult<bool> {
    let lhs = expr(input)?;
    let negated = preceded(ws, tracked(alt(("is not".value(true), "is".value(false)))))
        .parse_next(input)?;
    ws.parse_next(input)?;
    let rhs = integer(input)?;

    let result = (lhs == rhs) != negated;
    let op = if negated { "is not" } else { "is" };
    log::trace!(target: LOG_TARGET, "{lhs} {op} {rhs} -> {result}");
    Ok(result)
}

fn in_relation(input: &mut Input<'_, '_>) -> ModalResult<bool> {
    let lhs = expr(input)?;
    let negated = alt((
        preceded(ws, tracked("!=")).value(true),
        (opt(preceded(ws, tracked("not"))), ws, tracked(alt(("in", "="))))
            .map(|(not, (), _)| not.is_some()),
    ))
    .parse_next(input)?;
    ws.parse_next(input)?;
    let ranges = range_list(input)?;

    let result = ranges.contains(lhs) != negated;
    let op = if negated { "not in" } else { "in" };
    log::trace!(target: LOG_TARGET, "{lhs} {op} {ranges} -> {result}");
    Ok(result)
}

fn within_relation(input: &mut Input<'_, '_>) -> ModalResult<bool> {
    let lhs = expr(input)?;
    let negated = opt(preceded(ws, tracked("not")))
        .parse_next(input)?
        .is_some();
    (ws, tracked("within"), ws).void().parse_next(input)?;
    let ranges = range_list(input)?;

    let result = ranges.within(lhs) != negated;
    let op = if negated { "not within" } else { "within" };
    log::trace!(target: LOG_TARGET, "{lhs} {op} {ranges} -> {result}");
    Ok(result)
}

fn relation(input: &mut Input<'_, '_>) -> ModalResult<bool> {
    alt((is_relation, in_relation, within_relation))
        .context(StrContext::Label("relation"))
        .parse_next(input)
}

// -- Conditions (precedence: OR < AND < relation) ---------------------------

fn and_condition(input: &mut Input<'_, '_>) -> ModalResult<bool> {
    let first = relation(input)?;
    let rest: Vec<bool> =
        repeat(0.., preceded((ws, tracked("and"), ws), relation)).parse_next(input)?;
    Ok(first && rest.into_iter().all(|r| r))
}

/// `condition = and_condition ('or' and_condition)*`
///
/// All terms are parsed before the results are combined, so a rule either
/// consumes as much text as the grammar allows or fails outright.
pub(crate) fn condition(input: &mut Input<'_, '_>) -> ModalResult<bool> {
    let first = and_condition(input)?;
    let rest: Vec<bool> =
        repeat(0.., preceded((ws, tracked("or"), ws), and_condition)).parse_next(input)?;
    Ok(first || rest.into_iter().any(|r| r))
}
