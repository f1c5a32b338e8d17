use crate::calculators::{Calculator, FieldKind};
use crate::form::FormState;
use serde_json::{Map, Number, Value};

/// Builds the upstream request body. Parse failures are sent as `null`
/// rather than blocking the submission; the upstream owns validation.
pub fn build_payload(calc: &Calculator, form: &FormState) -> Map<String, Value> {
    calc.fields
        .iter()
        .map(|field| {
            let raw = form.get(field.name).unwrap_or_default();
            let value = match field.kind {
                FieldKind::Float => parse_float_prefix(raw)
                    .and_then(Number::from_f64)
                    .map_or(Value::Null, Value::Number),
                FieldKind::Integer => parse_int_prefix(raw).map_or(Value::Null, Value::from),
                FieldKind::Text => Value::String(raw.to_string()),
            };
            (field.name.to_string(), value)
        })
        .collect()
}

/// Parses the longest leading decimal literal, skipping leading whitespace,
/// so `"12abc"` reads as 12.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().ok()
}

/// Parses a leading `[+-]digits` run; `"10.9"` reads as 10.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    text[..sign + digits].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}
