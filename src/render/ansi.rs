//! ANSI-aware text measurement and fitting
//!
//! Every cell of the report carries embedded color escapes, so widths are
//! always measured on the visible text only. An escape sequence is ESC
//! followed by anything except another ESC, up to and including the first
//! `m`.

use std::borrow::Cow;

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// ANSI bold sequence
pub const ANSI_BOLD: &str = "\x1b[1m";

const ESC: char = '\x1b';

/// Printable stand-in for an ESC that does not open an escape sequence.
const ESC_SYMBOL: &str = "\u{241b}";

/// Byte length of the escape sequence at the start of `s`, if there is one.
///
/// An ESC that is not closed by an `m` before the next ESC is not an escape
/// sequence and counts as a visible character.
fn escape_len(s: &str) -> Option<usize> {
    let body = s.strip_prefix(ESC)?;
    for (i, c) in body.char_indices() {
        match c {
            'm' => return Some(ESC.len_utf8() + i + 1),
            ESC => return None,
            _ => {}
        }
    }
    None
}

/// Visible segments of a string: escape sequences are yielded with
/// `is_escape == true`, printable characters one at a time.
struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = (&'a str, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.rest.chars().next()?;
        let (len, is_escape) = match escape_len(self.rest) {
            Some(len) => (len, true),
            None => (c.len_utf8(), false),
        };
        let (segment, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some((segment, is_escape))
    }
}

fn segments(s: &str) -> Segments<'_> {
    Segments { rest: s }
}

fn is_bare_esc((segment, is_escape): &(&str, bool)) -> bool {
    !is_escape && segment.starts_with(ESC)
}

/// Number of printable code points in `s`, ignoring color escapes.
pub fn visible_width(s: &str) -> usize {
    segments(s).filter(|(_, is_escape)| !is_escape).count()
}

/// Remove every color escape from `s`.
pub fn strip(s: &str) -> String {
    segments(s)
        .filter(|(_, is_escape)| !is_escape)
        .map(|(segment, _)| segment)
        .collect()
}

/// Replace every ESC that does not open an escape sequence with a visible
/// `␛`, so escapes appended later cannot complete it.
///
/// Visible width is unchanged.
pub fn neutralize(s: &str) -> Cow<'_, str> {
    if !segments(s).any(|segment| is_bare_esc(&segment)) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        segments(s)
            .map(|segment| {
                if is_bare_esc(&segment) {
                    ESC_SYMBOL
                } else {
                    segment.0
                }
            })
            .collect(),
    )
}

/// Fit `s` to exactly `width` visible characters.
///
/// Short strings get a reset followed by space padding so no color bleeds
/// into the padding. Long strings are cut after `width` visible characters,
/// never inside an escape, and closed with a reset. Strings that already
/// fit are returned unchanged, which makes the operation idempotent. Stray
/// ESC characters are neutralized first.
pub fn pad_to(s: &str, width: usize) -> String {
    let s = neutralize(s);
    let visible = visible_width(&s);
    if visible < width {
        let mut padded = String::with_capacity(s.len() + ANSI_RESET.len() + width - visible);
        padded.push_str(&s);
        padded.push_str(ANSI_RESET);
        padded.push_str(&" ".repeat(width - visible));
        padded
    } else if visible > width {
        truncate(&s, width)
    } else {
        s.into_owned()
    }
}

/// Single forward scan keeping escapes and at most `width` visible characters.
fn truncate(s: &str, width: usize) -> String {
    let mut out = String::with_capacity(s.len() + ANSI_RESET.len());
    let mut taken = 0;

    for (segment, is_escape) in segments(s) {
        if is_escape {
            out.push_str(segment);
            continue;
        }
        if taken == width {
            break;
        }
        out.push_str(segment);
        taken += 1;
    }

    out.push_str(ANSI_RESET);
    out
}
