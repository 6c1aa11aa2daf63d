//! Number and duration formatting for reports and logs

/// Group digits in thousands: `100000000` -> `100,000,000`
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Milliseconds with two decimals: `12.345` -> `12.35 ms`
pub fn format_milliseconds(ms: f64) -> String {
    format!("{:.2} ms", ms)
}

/// Comma-separated samples with two decimals
pub fn format_samples(samples: &[f64]) -> String {
    samples
        .iter()
        .map(|s| format!("{:.2}", s))
        .collect::<Vec<_>>()
        .join(", ")
}
