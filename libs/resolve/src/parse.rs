//! External identifier parsing.

use serde::Serialize;

/// A parsed external identifier: optional entity-type prefix plus body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedId<'a> {
    /// The entity-type prefix, when the identifier carried one.
    pub prefix: Option<&'a str>,
    /// The encoded identifier body.
    pub body: &'a str,
}

/// Parses an external identifier into prefix and body.
///
/// Splits on the first `_`: `prod_430418220146` parses to prefix `prod` and
/// body `430418220146`. An identifier without `_` has no prefix; the whole
/// string is the body. Empty prefix or body segments are still valid parse
/// results (they fail downstream at decode, not here). Empty input yields
/// `None`.
pub fn parse(raw: &str) -> Option<ParsedId<'_>> {
    if raw.is_empty() {
        return None;
    }

    match raw.split_once('_') {
        Some((prefix, body)) => Some(ParsedId {
            prefix: Some(prefix),
            body,
        }),
        None => Some(ParsedId {
            prefix: None,
            body: raw,
        }),
    }
}
