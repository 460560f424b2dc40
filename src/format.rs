use crate::types::QuotaInfo;

/// Render quota records as a markdown report for `project_id`.
///
/// Produces a level-3 heading plus a Metric/Limit/Unit table with one
/// row per record in input order, or a fixed "nothing found" note when
/// `stats` is empty. Pure and total: no I/O, no failure mode.
pub fn format_quota_markdown(project_id: &str, stats: &[QuotaInfo]) -> String {
    if stats.is_empty() {
        return format!(
            "### Gemini Quota Status (Project: {})\n\nNo quota information found or API not enabled.",
            project_id
        );
    }

    let mut table = format!("### Gemini Quota Status (Project: {})\n\n", project_id);
    table.push_str("| Metric | Limit | Unit |\n");
    table.push_str("| :--- | :--- | :--- |\n");

    for stat in stats {
        table.push_str(&format!(
            "| {} | {} | {} |\n",
            escape_cell(&stat.metric),
            group_thousands(stat.limit),
            escape_cell(&stat.unit)
        ));
    }

    table
}

/// Neutralize characters that would break a table cell: pipes are
/// backslash-escaped, line breaks collapse to a space.
fn escape_cell(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '|' => out.push_str("\\|"),
            '\r' => {}
            '\n' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

/// Format a number with thousands separators.
fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, c);
    }
    if n < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quota(metric: &str, limit: i64, unit: &str) -> QuotaInfo {
        QuotaInfo {
            metric: metric.to_string(),
            limit,
            usage: None,
            unit: unit.to_string(),
        }
    }

    #[test]
    fn empty_list_renders_fixed_message() {
        let out = format_quota_markdown("proj1", &[]);
        assert_eq!(
            out,
            "### Gemini Quota Status (Project: proj1)\n\nNo quota information found or API not enabled."
        );
    }

    #[test]
    fn one_row_per_record_in_input_order() {
        let stats = vec![
            quota("Requests per day", 5000, "count"),
            quota("Requests per minute", 120, "count"),
            quota("Tokens per minute", 32000, "tokens"),
        ];
        let out = format_quota_markdown("proj1", &stats);
        let rows: Vec<&str> = out
            .lines()
            .filter(|l| l.starts_with('|') && !l.starts_with("| Metric") && !l.starts_with("| :---"))
            .collect();
        assert_eq!(rows.len(), stats.len());
        assert_eq!(rows[0], "| Requests per day | 5,000 | count |");
        assert_eq!(rows[1], "| Requests per minute | 120 | count |");
        assert_eq!(rows[2], "| Tokens per minute | 32,000 | tokens |");
    }

    #[test]
    fn example_report_layout() {
        let out = format_quota_markdown("proj1", &[quota("Requests per day", 5000, "count")]);
        assert_eq!(
            out,
            "### Gemini Quota Status (Project: proj1)\n\n\
             | Metric | Limit | Unit |\n\
             | :--- | :--- | :--- |\n\
             | Requests per day | 5,000 | count |\n"
        );
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
        assert_eq!(group_thousands(-1_234_567), "-1,234,567");
    }

    #[test]
    fn table_breaking_characters_are_escaped() {
        let out = format_quota_markdown("p", &[quota("a|b\nc", 1, "req|min")]);
        let row = out.lines().last().unwrap();
        assert_eq!(row, "| a\\|b c | 1 | req\\|min |");
    }
}
