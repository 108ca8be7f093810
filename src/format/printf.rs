//! Whole-template `printf` rendering
//!
//! Supported conversions: `%d`, `%i`, `%u`, `%x`, `%X`, `%c`, `%s`, `%f`, `%%`.
//! Escape sequences written as two characters (`\n`, `\t`, `\r`, `\\`, `\"`) are
//! expanded, since widget templates are typed by hand.
//!
//! A missing argument renders as the directive's zero value and an unknown
//! conversion is copied to the output as written.

use super::directive::{parse_directive, Directive};
use super::{format_value, pad, FormatKind, FormatSpec, RawValue};
use crate::constants::C_FLOAT_PRECISION;

/// Render `template` with `args` the way `printf` would print it
pub fn render(template: &str, args: &[RawValue]) -> String {
    let mut output = String::new();
    let mut chars = template.chars().peekable();
    let mut arg_index = 0;
    let zero = RawValue::default();

    while let Some(ch) = chars.next() {
        if ch == '%' {
            if chars.peek() == Some(&'%') {
                chars.next();
                output.push('%');
                continue;
            }

            let directive = parse_directive(&mut chars);
            let Some(conversion) = directive.conversion else {
                output.push_str(&directive.source);
                continue;
            };
            if !is_supported(conversion) {
                tracing::debug!(directive = %directive.source, "unsupported printf conversion");
                output.push_str(&directive.source);
                continue;
            }

            let arg = args.get(arg_index).unwrap_or(&zero);
            arg_index += 1;
            output.push_str(&render_directive(&directive, conversion, arg));
        } else if ch == '\\' {
            if let Some(&next_ch) = chars.peek() {
                chars.next();
                match next_ch {
                    'n' => output.push('\n'),
                    't' => output.push('\t'),
                    'r' => output.push('\r'),
                    '\\' => output.push('\\'),
                    '"' => output.push('"'),
                    _ => {
                        output.push('\\');
                        output.push(next_ch);
                    }
                }
            } else {
                output.push('\\');
            }
        } else {
            output.push(ch);
        }
    }

    output
}

fn is_supported(conversion: char) -> bool {
    matches!(conversion, 'd' | 'i' | 'u' | 'x' | 'X' | 'c' | 's' | 'f' | 'F')
}

fn render_directive(directive: &Directive, conversion: char, arg: &RawValue) -> String {
    let width = directive.width.unwrap_or(0);
    let left = directive.left_justify;

    match conversion {
        'd' | 'i' => format_value(arg, &spec(FormatKind::Integer, directive)).text,
        'f' | 'F' => {
            let mut spec = spec(FormatKind::Float, directive);
            spec.precision = Some(directive.precision.unwrap_or(C_FLOAT_PRECISION));
            format_value(arg, &spec).text
        }
        's' => format_value(arg, &spec(FormatKind::String, directive)).text,
        // int-sized, as the lecture examples use plain int
        'u' => pad(&(arg.to_int() as u32).to_string(), width, left),
        'x' => pad(&format!("{:x}", arg.to_int() as u32), width, left),
        'X' => pad(&format!("{:X}", arg.to_int() as u32), width, left),
        'c' => {
            let c = match arg {
                RawValue::Text(s) => s.chars().next().unwrap_or('\0'),
                other => (other.to_int() as u8) as char,
            };
            pad(&c.to_string(), width, left)
        }
        _ => directive.source.clone(),
    }
}

fn spec(kind: FormatKind, directive: &Directive) -> FormatSpec {
    FormatSpec {
        kind,
        width: directive.width.unwrap_or(0),
        precision: directive.precision,
        left_justify: directive.left_justify,
    }
}
