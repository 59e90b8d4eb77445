//! Summary display formatting

/// Format the all-time total
pub fn format_total(total: i64) -> String {
    format!("Total expenses: {}€", total)
}

/// Format the total for a single month
pub fn format_month_total(month_name: &str, total: i64) -> String {
    format!("Total expenses in {}: {}€", month_name, total)
}
