use chrono::NaiveDate;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// en-US short form used in the selection summary, e.g. `10/20/2024`
pub fn format_selected_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%-m/%-d/%Y").to_string())
        .unwrap_or_default()
}

/// Accessible label for a day tile, e.g. `Sunday, October 20, 2024`
pub fn tile_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
