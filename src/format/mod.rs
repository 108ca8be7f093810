//! `printf`/`scanf` emulation for the I/O lectures
//!
//! This module reproduces what a conforming C `printf` prints for a single
//! conversion, so the widgets can show the exact padded text next to the format
//! directive that produced it:
//! - [`FormatSpec`]: one directive (kind, width, precision, `-` flag)
//! - [`format_value`]: apply a directive to a [`RawValue`]
//! - [`printf`]: render a whole template string with arguments
//! - [`scanf`]: read values out of an input line the way `scanf` would
//!
//! # Leniency
//!
//! Nothing here fails. Numeric text is read like `strtol`/`strtod` read it (leading
//! whitespace, sign, longest numeric prefix) and text without a numeric prefix is
//! zero. Padding is always spaces and never truncates; only precision shortens
//! content.

pub mod directive;
pub mod printf;
pub mod scanf;

use crate::constants::WIDGET_FLOAT_PRECISION;
use std::fmt;

/// Conversion kind of an emulated directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Integer,
    Float,
    String,
}

impl FormatKind {
    /// The conversion character used when rebuilding the directive text
    pub fn conversion_char(self) -> char {
        match self {
            FormatKind::Integer => 'd',
            FormatKind::Float => 'f',
            FormatKind::String => 's',
        }
    }

    /// Next kind in widget order (used by the kind selector)
    pub fn next(self) -> Self {
        match self {
            FormatKind::Integer => FormatKind::Float,
            FormatKind::Float => FormatKind::String,
            FormatKind::String => FormatKind::Integer,
        }
    }
}

/// A raw input value, as typed into a widget or passed as a `printf` argument
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Default for RawValue {
    fn default() -> Self {
        RawValue::Int(0)
    }
}

impl RawValue {
    /// Integer reading of the value; floats truncate toward zero like a C cast
    pub fn to_int(&self) -> i64 {
        match self {
            RawValue::Int(n) => *n,
            RawValue::Float(f) if f.is_finite() => *f as i64,
            RawValue::Float(_) => 0,
            RawValue::Text(s) => parse_int_prefix(s),
        }
    }

    /// Floating-point reading of the value
    pub fn to_float(&self) -> f64 {
        match self {
            RawValue::Int(n) => *n as f64,
            RawValue::Float(f) => *f,
            RawValue::Text(s) => parse_float_prefix(s),
        }
    }

    /// Text reading of the value
    pub fn to_text(&self) -> String {
        match self {
            RawValue::Int(n) => n.to_string(),
            RawValue::Float(f) => f.to_string(),
            RawValue::Text(s) => s.clone(),
        }
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Int(n)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Int(n as i64)
    }
}

impl From<f64> for RawValue {
    fn from(f: f64) -> Self {
        RawValue::Float(f)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

/// One emulated format directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    pub kind: FormatKind,
    pub width: usize,
    /// `None` means "not written in the directive"; integers ignore it either way
    pub precision: Option<usize>,
    pub left_justify: bool,
}

impl FormatSpec {
    pub fn new(kind: FormatKind) -> Self {
        FormatSpec {
            kind,
            width: 0,
            precision: None,
            left_justify: false,
        }
    }

    pub fn integer() -> Self {
        Self::new(FormatKind::Integer)
    }

    /// A float directive with the widget's default precision (`%.2f`)
    pub fn float() -> Self {
        Self::new(FormatKind::Float).with_precision(WIDGET_FLOAT_PRECISION)
    }

    pub fn string() -> Self {
        Self::new(FormatKind::String)
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn left(mut self, left_justify: bool) -> Self {
        self.left_justify = left_justify;
        self
    }

    /// Precision that actually applies to the content
    ///
    /// Floats default to the widget precision; integers never use one; strings
    /// only truncate for a positive precision.
    pub fn effective_precision(&self) -> Option<usize> {
        match self.kind {
            FormatKind::Integer => None,
            FormatKind::Float => Some(self.precision.unwrap_or(WIDGET_FLOAT_PRECISION)),
            FormatKind::String => self.precision.filter(|&p| p > 0),
        }
    }

    /// Rebuild the literal directive text, e.g. `%-8.2f`
    pub fn directive(&self) -> String {
        let mut out = String::from("%");
        if self.left_justify {
            out.push('-');
        }
        if self.width > 0 {
            out.push_str(&self.width.to_string());
        }
        if self.kind != FormatKind::Integer {
            if let Some(p) = self.precision {
                out.push('.');
                out.push_str(&p.to_string());
            }
        }
        out.push(self.kind.conversion_char());
        out
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.directive())
    }
}

/// Result of emulating one directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    /// The padded output, exactly as `printf` would print it
    pub text: String,
    /// The directive that produced it, e.g. `%8.2f`
    pub directive: String,
}

/// Apply `spec` to `value`
pub fn format_value(value: &RawValue, spec: &FormatSpec) -> Formatted {
    let content = match spec.kind {
        FormatKind::Integer => value.to_int().to_string(),
        FormatKind::Float => format_float(
            value.to_float(),
            spec.effective_precision().unwrap_or(WIDGET_FLOAT_PRECISION),
        ),
        FormatKind::String => {
            let text = value.to_text();
            match spec.effective_precision() {
                Some(p) => text.chars().take(p).collect(),
                None => text,
            }
        }
    };

    Formatted {
        text: pad(&content, spec.width, spec.left_justify),
        directive: spec.directive(),
    }
}

/// `%.{precision}f` of a double
pub fn format_float(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    format!("{:.*}", precision, value)
}

/// Pad `content` with spaces up to `width` characters
///
/// Content that is already at least `width` long is returned unchanged.
pub fn pad(content: &str, width: usize, left_justify: bool) -> String {
    let len = content.chars().count();
    if len >= width {
        return content.to_string();
    }
    let fill = " ".repeat(width - len);
    if left_justify {
        format!("{}{}", content, fill)
    } else {
        format!("{}{}", fill, content)
    }
}

/// Read an integer the way `strtol(s, NULL, 10)` does; no digits reads as 0
///
/// Values beyond the `i64` range saturate.
pub fn parse_int_prefix(s: &str) -> i64 {
    int_prefix(s).map(|(n, _)| n).unwrap_or(0)
}

/// Read a double the way `strtod` does; no digits reads as 0.0
pub fn parse_float_prefix(s: &str) -> f64 {
    float_prefix(s).map(|(f, _)| f).unwrap_or(0.0)
}

/// Integer prefix and the number of bytes consumed, `None` when no digit was found
pub(crate) fn int_prefix(s: &str) -> Option<(i64, usize)> {
    let bytes = s.as_bytes();
    let mut i = skip_whitespace(s);
    let negative = match bytes.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let digits_start = i;
    let mut value: i64 = 0;
    while let Some(&b) = bytes.get(i) {
        if !b.is_ascii_digit() {
            break;
        }
        let digit = (b - b'0') as i64;
        value = value
            .checked_mul(10)
            .and_then(|v| {
                if negative {
                    v.checked_sub(digit)
                } else {
                    v.checked_add(digit)
                }
            })
            .unwrap_or(if negative { i64::MIN } else { i64::MAX });
        i += 1;
    }

    if i == digits_start {
        return None;
    }
    Some((value, i))
}

/// Float prefix and the number of bytes consumed, `None` when no digit was found
pub(crate) fn float_prefix(s: &str) -> Option<(f64, usize)> {
    let bytes = s.as_bytes();
    let mut i = skip_whitespace(s);
    let mut normalized = String::new();

    if let Some(&sign @ (b'-' | b'+')) = bytes.get(i) {
        normalized.push(sign as char);
        i += 1;
    }

    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let int_digits = &s[int_start..i];

    let mut frac_digits = "";
    if bytes.get(i) == Some(&b'.') {
        let frac_start = i + 1;
        let mut j = frac_start;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if !int_digits.is_empty() || j > frac_start {
            frac_digits = &s[frac_start..j];
            i = j;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    normalized.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    normalized.push('.');
    normalized.push_str(if frac_digits.is_empty() { "0" } else { frac_digits });

    // Exponent only counts when at least one digit follows it
    if let Some(b'e' | b'E') = bytes.get(i) {
        let mut j = i + 1;
        let mut exponent = String::from("e");
        if let Some(&sign @ (b'-' | b'+')) = bytes.get(j) {
            exponent.push(sign as char);
            j += 1;
        }
        let exp_start = j;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > exp_start {
            exponent.push_str(&s[exp_start..j]);
            normalized.push_str(&exponent);
            i = j;
        }
    }

    normalized.parse::<f64>().ok().map(|f| (f, i))
}

fn skip_whitespace(s: &str) -> usize {
    s.len() - s.trim_start().len()
}
