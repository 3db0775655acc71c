use crate::error::{Error, Result};

/// Turns a human-readable benchmark figure such as `"$1.2K"`, `"3.4M"` or
/// `"0.45%"` into a float.
///
/// The magnitude comes from the last character (`k` or `m`, any case). The
/// numeric part is the leading run of digits and dots once `$` signs are
/// dropped, so anything after it (`%`, `K`, a thousands comma) ends the
/// number. `"$1,200"` therefore reads as `1.0`.
pub fn normalize(raw: &str) -> Result<f64> {
    let Some(last) = raw.chars().last() else {
        return Ok(0.0);
    };

    let multiplier = match last.to_ascii_lowercase() {
        'k' => 1_000.0,
        'm' => 1_000_000.0,
        _ => 1.0,
    };

    let mut literal = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == '$' {
            continue;
        }
        if c != '.' && !c.is_ascii_digit() {
            break;
        }
        literal.push(c);
    }

    if literal.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = literal.parse().map_err(|_| Error::InvalidNumber {
        raw: raw.to_string(),
    })?;
    Ok(value * multiplier)
}
