//! Line-oriented parsing helpers
//!
//! Solvers build per-line errors with `anyhow` and convert them to a
//! [`ParseError`] once, tagged with the 1-based line number.

use anyhow::{Context, anyhow};
use aoc_solver::ParseError;
use std::str::FromStr;

/// Parse every non-blank line of `input` with `f`.
pub fn parse_lines<T, F>(input: &str, f: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&str) -> anyhow::Result<T>,
{
    parse_numbered_lines(input.lines().enumerate(), f)
}

/// Like [`parse_lines`], for lines already paired with their 0-based index.
pub fn parse_numbered_lines<'a, T, F>(
    lines: impl Iterator<Item = (usize, &'a str)>,
    mut f: F,
) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&str) -> anyhow::Result<T>,
{
    lines
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| f(line.trim()).map_err(|e| anyhow!("(line {}) {:#}", idx + 1, e)))
        .collect::<anyhow::Result<Vec<_>>>()
        .map_err(invalid)
}

/// Split on `sep` and parse every field.
pub fn separated<T>(s: &str, sep: char) -> anyhow::Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.split(sep)
        .map(|field| {
            let field = field.trim();
            field
                .parse()
                .with_context(|| format!("invalid number {:?}", field))
        })
        .collect()
}

/// Parse exactly `N` `sep`-separated numbers.
pub fn fixed<T, const N: usize>(s: &str, sep: char) -> anyhow::Result<[T; N]>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let values = separated(s, sep)?;
    let found = values.len();
    values
        .try_into()
        .map_err(|_| anyhow!("expected {} values, found {}", N, found))
}

pub fn invalid(err: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("{:#}", err))
}
