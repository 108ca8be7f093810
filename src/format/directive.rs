//! Parsing of `%` conversion specifications shared by `printf` and `scanf`

use std::iter::Peekable;
use std::str::Chars;

/// A parsed `%[flags][width][.precision][length]conversion` specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub left_justify: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    /// `None` when the template ended inside the directive
    pub conversion: Option<char>,
    /// The directive exactly as written, including the leading `%`
    pub source: String,
}

/// Parse a directive whose `%` has already been consumed from `chars`
///
/// Flags other than `-` are accepted and ignored, since the widgets only pad with
/// spaces. Length modifiers (`h`, `l`, `ll`, `L`, `z`) are skipped.
pub fn parse_directive(chars: &mut Peekable<Chars<'_>>) -> Directive {
    let mut source = String::from("%");
    let mut left_justify = false;

    while let Some(&flag @ ('-' | '+' | ' ' | '0' | '#')) = chars.peek() {
        if flag == '-' {
            left_justify = true;
        }
        source.push(flag);
        chars.next();
    }

    let width = read_number(chars, &mut source);

    let precision = if chars.peek() == Some(&'.') {
        source.push('.');
        chars.next();
        // A bare '.' means precision 0
        Some(read_number(chars, &mut source).unwrap_or(0))
    } else {
        None
    };

    while let Some(&modifier @ ('h' | 'l' | 'L' | 'z')) = chars.peek() {
        source.push(modifier);
        chars.next();
    }

    let conversion = chars.next();
    if let Some(c) = conversion {
        source.push(c);
    }

    Directive {
        left_justify,
        width,
        precision,
        conversion,
        source,
    }
}

fn read_number(chars: &mut Peekable<Chars<'_>>, source: &mut String) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(&c) = chars.peek() {
        let Some(digit) = c.to_digit(10) else {
            break;
        };
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit as usize),
        );
        source.push(c);
        chars.next();
    }
    value
}
