mod error;
mod grammar;

pub use error::ParseError;

use winnow::error::{ContextError, ErrMode};

use crate::types::PluralOperands;

/// Outcome of running the grammar over a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Parsed {
    pub(crate) result: bool,
    /// Bytes of the rule consumed by the grammar.
    pub(crate) consumed: usize,
}

/// Drop the `@integer`/`@decimal` sample section and surrounding whitespace.
/// Samples document a rule; they are never evaluated.
pub(crate) fn strip_samples(rule: &str) -> &str {
    rule.split_once('@').map_or(rule, |(head, _)| head).trim()
}

/// Parse and evaluate `condition` from the start of `rule`.
///
/// Succeeds when the grammar derives a result, even if text remains after
/// it. `rule` must already have its samples stripped.
///
/// # Errors
///
/// Returns [`ParseError`] if no condition can be derived.
pub(crate) fn parse_condition(
    rule: &str,
    operands: &PluralOperands,
) -> Result<Parsed, ParseError> {
    let state = grammar::State::new(rule, operands);
    let mut input = grammar::Input {
        input: rule,
        state: &state,
    };
    let outcome = grammar::condition(&mut input);
    let stopped = rule.len() - input.input.len();

    match outcome {
        Ok(result) => Ok(Parsed {
            result,
            consumed: stopped,
        }),
        Err(err) => {
            let position = state.furthest(rule).max(stopped);
            let message = format!("{}, found {}", describe(&err), found(&rule[position..]));
            Err(ParseError::new(rule, position, message))
        }
    }
}

fn describe(err: &ErrMode<ContextError>) -> String {
    let message = match err {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e.to_string().replace('\n', "; "),
        ErrMode::Incomplete(_) => String::new(),
    };
    if message.is_empty() {
        "no valid relation".to_owned()
    } else {
        message
    }
}

/// The word the parser could not get past.
fn found(rest: &str) -> String {
    rest.split_whitespace()
        .next()
        .map_or_else(|| "end of rule".to_owned(), |word| format!("'{word}'"))
}
