use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Form text → non-negative integer. Anything unparsable becomes 0.
pub(crate) fn parse_count(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

/// Form text → non-negative amount, or `None` when blank or invalid.
pub(crate) fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Form text → foreign key / year, or `None` when blank or invalid.
pub(crate) fn parse_optional_int<T: std::str::FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse::<T>().ok()
}

/// Comma-separated form text → ordered list, trimmed, empty entries dropped.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// `12500.0` → `$12.5K`
pub(crate) fn format_thousands(amount: f64) -> String {
    format!("${:.1}K", amount / 1000.0)
}

pub(crate) fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

const AVATAR_PALETTE: [&str; 6] = [
    "#3f51b5", "#f50057", "#4caf50", "#ff9800", "#9c27b0", "#00bcd4",
];

/// Stable per-label avatar color.
pub(crate) fn avatar_color(label: &str) -> &'static str {
    let mut hasher = DefaultHasher::new();
    label.hash(&mut hasher);
    AVATAR_PALETTE[(hasher.finish() % AVATAR_PALETTE.len() as u64) as usize]
}

pub(crate) fn initial(label: &str) -> String {
    label
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_count_falls_back_to_zero() {
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count(" 4 "), 4);
        assert_eq!(parse_count("four"), 0);
        assert_eq!(parse_count("-2"), 0);
    }

    #[test]
    fn parse_amount_rejects_blank_negative_and_garbage() {
        assert_eq!(parse_amount("1500.5"), Some(1500.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("-10"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn parse_optional_int_for_keys_and_years() {
        assert_eq!(parse_optional_int::<i64>("12"), Some(12));
        assert_eq!(parse_optional_int::<i64>(""), None);
        assert_eq!(parse_optional_int::<i32>("19x5"), None);
    }

    #[test]
    fn split_list_trims_and_drops_empty() {
        assert_eq!(
            split_list(" Math, ,Physics ,"),
            vec!["Math".to_string(), "Physics".to_string()]
        );
        assert!(split_list("").is_empty());
        assert_eq!(join_list(&split_list("a,b")), "a, b");
    }

    #[test]
    fn money_formats() {
        assert_eq!(format_thousands(300.0), "$0.3K");
        assert_eq!(format_thousands(12500.0), "$12.5K");
        assert_eq!(format_money(99.5), "$99.50");
    }

    #[test]
    fn avatar_helpers_are_stable() {
        assert_eq!(avatar_color("MIT"), avatar_color("MIT"));
        assert!(AVATAR_PALETTE.contains(&avatar_color("anything")));
        assert_eq!(initial("  stanford"), "S");
        assert_eq!(initial(""), "?");
    }
}
