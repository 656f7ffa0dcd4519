//! printf-style formatting of a single value.
//!
//! Supported verbs: `%v` (any value), `%s` (string, optional `.N`
//! truncation), `%d` (integer), `%f` (float, optional `.N` precision, 6 by
//! default), `%t` (bool), `%q` (quoted string), `%x` (hex integer or string
//! bytes) and the `%%` escape. A verb that does not match the value's kind,
//! a second verb, or a missing verb produces an inline marker such as
//! `%!d(string=abc)` rather than an error.

use std::iter::Peekable;
use std::str::Chars;

use serde_json::{Number, Value};

use crate::value::ValueKind;

const DEFAULT_FLOAT_PRECISION: usize = 6;

/// Format `input` into `template`.
pub(super) fn sprintf(template: &str, input: &Value) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut consumed = false;

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        let precision = take_precision(&mut chars);
        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
        } else if consumed {
            out.push_str(&format!("%!{verb}(MISSING)"));
        } else {
            consumed = true;
            out.push_str(&format_verb(verb, precision, input));
        }
    }

    if !consumed {
        out.push_str(&format!("%!(EXTRA {})", describe(input)));
    }
    out
}

fn take_precision(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    chars.next_if_eq(&'.')?;
    let mut digits = String::new();
    while let Some(digit) = chars.next_if(char::is_ascii_digit) {
        digits.push(digit);
    }
    Some(digits.parse().unwrap_or(0))
}

fn format_verb(verb: char, precision: Option<usize>, input: &Value) -> String {
    match (verb, input) {
        ('v', _) => plain(input),
        ('s', Value::String(s)) => {
            precision.map_or_else(|| s.clone(), |p| s.chars().take(p).collect())
        }
        ('d', Value::Number(n)) if is_integer(n) => n.to_string(),
        ('f', Value::Number(n)) if !is_integer(n) => n.as_f64().map_or_else(
            || degraded(verb, input),
            |f| format!("{f:.prec$}", prec = precision.unwrap_or(DEFAULT_FLOAT_PRECISION)),
        ),
        ('t', Value::Bool(b)) => b.to_string(),
        ('q', Value::String(s)) => format!("{s:?}"),
        ('x', Value::String(s)) => s.bytes().map(|b| format!("{b:02x}")).collect(),
        ('x', Value::Number(n)) if is_integer(n) => hex_integer(n),
        _ => degraded(verb, input),
    }
}

fn is_integer(n: &Number) -> bool {
    n.is_i64() || n.is_u64()
}

fn hex_integer(n: &Number) -> String {
    match (n.as_i64(), n.as_u64()) {
        (Some(i), _) if i < 0 => format!("-{:x}", i.unsigned_abs()),
        (_, Some(u)) => format!("{u:x}"),
        _ => n.to_string(),
    }
}

fn plain(input: &Value) -> String {
    match input {
        Value::Null => "<nil>".to_owned(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn describe(input: &Value) -> String {
    format!("{}={}", ValueKind::of(input), plain(input))
}

fn degraded(verb: char, input: &Value) -> String {
    format!("%!{verb}({})", describe(input))
}
