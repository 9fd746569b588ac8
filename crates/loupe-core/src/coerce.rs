//! Coercion rules backing the `get_as_*` / `find_as_*` getter family.
//!
//! The rule set is fixed and deterministic, and evaluation order matters:
//!
//! | Target | Rule |
//! |---|---|
//! | int | bools never coerce; ints pass; strings and floats must read in full as a base-10 integer literal |
//! | bool | bools pass; exactly `"true"`/`"false"` map; otherwise the int rule decides, `1` → true, `0` → false |
//! | string | strings pass; ints render canonical base-10; everything else fails |
//!
//! List coercion lives in the accessor layer: list shape first, then one of
//! these rules independently per element, any element failure failing the
//! whole list.

use crate::value::Value;

/// Coerce to an integer. Bools are refused outright; floats are routed
/// through their canonical decimal rendering, so `2.0` reads as `2` while
/// `2.5`, non-finite values, and out-of-`i64`-range magnitudes all fail.
pub(crate) fn to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Bool(_) => None,
        Value::Int(i) => Some(*i),
        Value::Float(f) => int_literal(&f.to_string()),
        Value::String(s) => int_literal(s),
        _ => None,
    }
}

/// Coerce to a boolean: passthrough, the exact strings `"true"`/`"false"`,
/// then the int rule with only `1` and `0` accepted.
pub(crate) fn to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => return Some(*b),
        Value::String(s) if s == "true" => return Some(true),
        Value::String(s) if s == "false" => return Some(false),
        _ => {}
    }

    match to_int(value) {
        Some(1) => Some(true),
        Some(0) => Some(false),
        _ => None,
    }
}

/// Coerce to a string: passthrough, or an int's canonical base-10 form.
pub(crate) fn to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Int(i) => Some(i.to_string()),
        _ => None,
    }
}

/// Accept the full content of `s` as a base-10 integer literal: an optional
/// leading `-` followed by ASCII digits only, nothing else — no `+`, no
/// whitespace. Range is enforced by the `i64` parse.
fn int_literal(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
