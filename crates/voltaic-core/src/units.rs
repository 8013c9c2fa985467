//! Engineering-unit value parsing and display.

/// Parse a netlist value with an optional SPICE SI suffix.
///
/// Plain numbers (including scientific notation) parse as-is. Otherwise
/// the trailing alphabetic suffix selects a multiplier: `T`, `G`, `MEG`,
/// `K`, `M` (milli), `MIL`, `U`, `N`, `P`, `F`. Suffixes are
/// case-insensitive, so `1k` and `1K` are both 1000.
pub fn parse_value(s: &str) -> Option<f64> {
    let s = s.trim().to_uppercase();

    if let Ok(v) = s.parse::<f64>() {
        return Some(v);
    }

    // Split at the start of the suffix. 'E' stays with the number so
    // exponents like 1E-3 survive.
    let num_end = s
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-' && c != '+' && c != 'E')
        .unwrap_or(s.len());
    if num_end == 0 {
        return None;
    }

    let (num, suffix) = s.split_at(num_end);
    let value: f64 = num.parse().ok()?;

    let multiplier = match suffix {
        "T" => 1e12,
        "G" => 1e9,
        "MEG" => 1e6,
        "K" => 1e3,
        "" => 1.0,
        "M" => 1e-3,
        "MIL" => 25.4e-6,
        "U" => 1e-6,
        "N" => 1e-9,
        "P" => 1e-12,
        "F" => 1e-15,
        _ => return None,
    };

    Some(value * multiplier)
}

/// Format a value with an SI prefix for display.
pub fn format_value(value: f64) -> String {
    const SCALES: &[(f64, &str)] = &[
        (1e12, "T"),
        (1e9, "G"),
        (1e6, "M"),
        (1e3, "k"),
        (1.0, ""),
        (1e-3, "m"),
        (1e-6, "u"),
        (1e-9, "n"),
        (1e-12, "p"),
        (1e-15, "f"),
    ];

    let abs = value.abs();
    if abs == 0.0 {
        return "0.0000".to_string();
    }
    for &(scale, suffix) in SCALES {
        if abs >= scale {
            return format!("{:.4}{}", value / scale, suffix);
        }
    }
    format!("{:.4}", value)
}
