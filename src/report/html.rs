//! HTML rendering of a result set

use chrono::{DateTime, Utc};

use crate::{
    models::{ResultSet, SizeRecord, StrategyResult},
    selection::SelectionMethod,
    utils::format::{format_count, format_milliseconds, format_samples},
};

const STYLE: &str = r#"
  body { font-family: Arial, sans-serif; padding: 20px; background: #fafafa; }
  table { border-collapse: collapse; width: 100%; }
  th, td { border: 1px solid #333; padding: 8px 12px; text-align: center; }
  th { background: #e3e3e3; font-weight: bold; }
  tr:nth-child(even) { background: #f9f9f9; }
  tr.mismatch td { background: #f8d7da; }
  .value, .spread { color: #555; font-size: 0.9em; }
"#;

/// Render a standalone HTML document for `result_set`
pub fn render_html(result_set: &ResultSet, generated_at: DateTime<Utc>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n");
    html.push_str("<title>6th-largest selection benchmark</title>\n");
    html.push_str(&format!("<style>{}</style>\n", STYLE));
    html.push_str("</head>\n<body>\n<h2>6th-largest selection benchmark</h2>\n");
    html.push_str(&format!(
        "<p>Generated {}</p>\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    html.push_str("<table>\n  <tr>\n    <th>Array size</th>\n");
    for method in SelectionMethod::ALL {
        html.push_str(&format!("    <th>{}</th>\n", method.label()));
    }
    html.push_str("  </tr>\n");

    for record in &result_set.records {
        html.push_str(&render_row(record));
    }

    html.push_str("</table>\n</body>\n</html>\n");
    html
}

fn render_row(record: &SizeRecord) -> String {
    let class = if record.is_consistent() {
        ""
    } else {
        " class=\"mismatch\""
    };

    let mut row = format!(
        "  <tr{}>\n    <td>{}</td>\n",
        class,
        format_count(record.size)
    );
    for method in SelectionMethod::ALL {
        let cell = record
            .results
            .iter()
            .find(|r| r.strategy == method.name())
            .map(render_cell)
            .unwrap_or_else(|| "&mdash;".to_string());
        row.push_str(&format!("    <td>{}</td>\n", cell));
    }
    row.push_str("  </tr>\n");
    row
}

fn render_cell(result: &StrategyResult) -> String {
    format!(
        "{}<br>({})<br><span class=\"spread\">min {:.2} / max {:.2}</span>\
         <br><span class=\"value\">value: {}</span>",
        format_milliseconds(result.average_ms),
        format_samples(&result.durations_ms),
        result.fastest_ms(),
        result.slowest_ms(),
        result.value
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn result(strategy: &str, durations_ms: Vec<f64>, value: i32) -> StrategyResult {
        let average_ms = durations_ms.iter().sum::<f64>() / durations_ms.len() as f64;
        StrategyResult {
            strategy: strategy.to_string(),
            durations_ms,
            average_ms,
            value,
        }
    }

    fn sample_set(last_value: i32) -> ResultSet {
        ResultSet {
            records: vec![SizeRecord {
                size: 10_000,
                results: vec![
                    result("full_sort", vec![1.0, 2.0, 3.0], 9_994),
                    result("top_k", vec![0.5, 0.5, 0.5], 9_994),
                    result("six_pass", vec![0.25, 0.5, 0.75], last_value),
                ],
            }],
        }
    }

    #[test]
    fn test_render_contains_rows_and_headers() {
        let at = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
        let html = render_html(&sample_set(9_994), at);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<th>Method 1: full sort</th>"));
        assert!(html.contains("<th>Method 3: six max passes</th>"));
        assert!(html.contains("<td>10,000</td>"));
        assert!(html.contains("2.00 ms<br>(1.00, 2.00, 3.00)"));
        assert!(html.contains("min 1.00 / max 3.00"));
        assert!(html.contains("min 0.25 / max 0.75"));
        assert!(html.contains("value: 9994"));
        assert!(html.contains("Generated 2026-10-15 12:00:00 UTC"));
        assert!(!html.contains("class=\"mismatch\""));
    }

    #[test]
    fn test_render_marks_mismatch() {
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let html = render_html(&sample_set(1), at);
        assert!(html.contains("<tr class=\"mismatch\">"));
    }

    #[test]
    fn test_render_missing_strategy() {
        let mut set = sample_set(9_994);
        set.records[0].results.pop();
        let html = render_html(&set, Utc::now());
        assert!(html.contains("<td>&mdash;</td>"));
    }
}
