//! `scanf` emulation for the input lecture
//!
//! Reads one line of simulated keyboard input against a template:
//! - whitespace in the template matches any run of input whitespace (including none)
//! - `%d`, `%f`, `%s` skip leading whitespace; `%c` does not
//! - a width limits how many characters a conversion may consume
//! - any other template character must match the input exactly
//!
//! Scanning stops at the first mismatch, and the count of assigned values is what
//! `scanf` itself would return.

use super::directive::parse_directive;
use super::{float_prefix, int_prefix, RawValue};

/// Why scanning stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    /// Every directive of the template was satisfied
    Complete,
    /// The input did not match the template at input byte `position`
    MatchingFailure { position: usize },
    /// The input ran out before the template did
    InputExhausted,
}

/// Values read by [`scan`]
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub values: Vec<RawValue>,
    pub status: ScanStatus,
}

impl ScanResult {
    /// What `scanf` returns: the number of assigned conversions
    pub fn assigned(&self) -> usize {
        self.values.len()
    }
}

/// Scan `input` with `template`
pub fn scan(template: &str, input: &str) -> ScanResult {
    let mut values = Vec::new();
    let mut pos = 0;
    let mut chars = template.chars().peekable();

    let stop = |values: Vec<RawValue>, status| ScanResult { values, status };

    while let Some(ch) = chars.next() {
        if ch.is_whitespace() {
            pos = skip_ws(input, pos);
            continue;
        }

        if ch != '%' {
            if input[pos..].starts_with(ch) {
                pos += ch.len_utf8();
                continue;
            }
            return stop(values, failure_or_eof(input, pos));
        }

        if chars.peek() == Some(&'%') {
            chars.next();
            pos = skip_ws(input, pos);
            if input[pos..].starts_with('%') {
                pos += 1;
                continue;
            }
            return stop(values, failure_or_eof(input, pos));
        }

        let directive = parse_directive(&mut chars);
        let Some(conversion) = directive.conversion else {
            break;
        };

        if conversion != 'c' {
            pos = skip_ws(input, pos);
        }
        if pos >= input.len() {
            return stop(values, ScanStatus::InputExhausted);
        }

        let limit = directive.width.filter(|&w| w > 0);
        let window = limited(&input[pos..], limit);

        match conversion {
            'd' | 'i' => match int_prefix(window) {
                Some((n, used)) => {
                    values.push(RawValue::Int(n));
                    pos += used;
                }
                None => return stop(values, ScanStatus::MatchingFailure { position: pos }),
            },
            'f' | 'F' | 'e' | 'g' => match float_prefix(window) {
                Some((f, used)) => {
                    values.push(RawValue::Float(f));
                    pos += used;
                }
                None => return stop(values, ScanStatus::MatchingFailure { position: pos }),
            },
            's' => {
                let word: String = window.chars().take_while(|c| !c.is_whitespace()).collect();
                pos += word.len();
                values.push(RawValue::Text(word));
            }
            'c' => {
                let count = limit.unwrap_or(1);
                let taken: String = window.chars().take(count).collect();
                pos += taken.len();
                values.push(RawValue::Text(taken));
            }
            _ => {
                tracing::debug!(directive = %directive.source, "unsupported scanf conversion");
                return stop(values, ScanStatus::MatchingFailure { position: pos });
            }
        }
    }

    stop(values, ScanStatus::Complete)
}

fn skip_ws(input: &str, pos: usize) -> usize {
    let rest = &input[pos..];
    pos + (rest.len() - rest.trim_start().len())
}

fn failure_or_eof(input: &str, pos: usize) -> ScanStatus {
    if pos >= input.len() {
        ScanStatus::InputExhausted
    } else {
        ScanStatus::MatchingFailure { position: pos }
    }
}

/// The first `limit` characters of `s` (all of it without a limit)
fn limited(s: &str, limit: Option<usize>) -> &str {
    match limit {
        Some(n) => match s.char_indices().nth(n) {
            Some((end, _)) => &s[..end],
            None => s,
        },
        None => s,
    }
}
