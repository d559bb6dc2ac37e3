//! Groups the non-blank lines of a TLE file into named entries

use nom::{
    bytes::complete::take_till,
    character::complete::char,
    combinator::{eof, not, opt, verify},
    error::ErrorKind,
    multi::{fold_many0, many0, many0_count},
};
use omm_types::prelude::*;

pub type Result<I, O, E = ParseError<I>> = std::result::Result<(I, O), nom::Err<E>>;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ParseError<I> {
    #[error("Parse error ({1:?})")]
    Nom(I, ErrorKind),
}

/// Parse complete name/line1/line2 entries, in input order.
///
/// Stops in front of a trailing partial entry, see [`trailing_lines`].
pub fn parse_unstructured_tle_set(set: &str) -> Result<&str, Vec<UnstructuredTle>> {
    let (s, tle_set) = fold_many0(
        tle,
        Vec::new,
        |mut tle_set: Vec<UnstructuredTle>, tle| {
            tle_set.push(tle);
            tle_set
        },
    )(set)?;
    Ok((s, tle_set))
}

/// The remaining non-blank lines, consuming the rest of the input
pub fn trailing_lines(s: &str) -> Result<&str, Vec<&str>> {
    let (s, lines) = many0(text_line)(s)?;
    let (s, _) = many0_count(blank_line)(s)?;
    let (s, _) = eof(s)?;
    Ok((s, lines))
}

fn tle(s: &str) -> Result<&str, UnstructuredTle> {
    let (s, name) = text_line(s)?;
    let (s, line1) = text_line(s)?;
    let (s, line2) = text_line(s)?;
    Ok((s, UnstructuredTle::new(name, line1, line2)))
}

/// Next non-blank line, trimmed
fn text_line(s: &str) -> Result<&str, &str> {
    let (s, _) = many0_count(blank_line)(s)?;
    let (s, line) = verify(raw_line, |l: &str| !l.trim().is_empty())(s)?;
    Ok((s, line.trim()))
}

/// Empty or whitespace-only, any Unicode whitespace
fn blank_line(s: &str) -> Result<&str, &str> {
    verify(raw_line, |l: &str| l.trim().is_empty())(s)
}

/// Everything up to and including the next '\n'.
///
/// A '\r' is kept in the line and left for trimming.
fn raw_line(s: &str) -> Result<&str, &str> {
    let (s, _) = not(eof)(s)?;
    let (s, line) = take_till(|c: char| c == '\n')(s)?;
    let (s, _) = opt(char('\n'))(s)?;
    Ok((s, line))
}

impl<I> nom::error::ParseError<I> for ParseError<I> {
    fn from_error_kind(s: I, kind: ErrorKind) -> Self {
        ParseError::Nom(s, kind)
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}
