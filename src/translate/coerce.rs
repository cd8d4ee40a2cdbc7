//! Loose handling of form values.
//!
//! The demo front-end posts whatever it has, so request fields are kept as raw
//! JSON and turned into text the way a browser would print them: `null` stays
//! `"null"`, numbers lose a trailing `.0`, arrays are comma-joined.

use serde_json::Value;

/// Falsy values are `null`, `false`, `0` and `""`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn to_display(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(format_float).unwrap_or_else(|| n.to_string())
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_display(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn format_float(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }

    let magnitude = f.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        // 1e21 -> "1e+21", 1.5e-7 -> "1.5e-7"
        let exp = format!("{:e}", f);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        }
    } else if f.fract() == 0.0 {
        format!("{:.0}", f)
    } else {
        f.to_string()
    }
}

/// Value of a field that defaults only when the key is missing.
pub fn or_default_if_absent(value: Option<&Value>, default: &str) -> String {
    value.map(to_display).unwrap_or_else(|| default.to_string())
}

/// Value of a field that defaults when missing or falsy.
pub fn or_default_if_falsy(value: Option<&Value>, default: &str) -> String {
    value
        .filter(|v| is_truthy(v))
        .map(to_display)
        .unwrap_or_else(|| default.to_string())
}
