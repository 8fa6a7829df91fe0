/// Shared formatting utilities for the UI layer.
///
/// All functions accept ISO-8601 date strings (e.g. "2024-09-15")
/// and produce human-readable output without external crate dependencies.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO date string as "Sep 15, 2024" (date-only, human-readable).
///
/// Falls back to the first 10 characters if parsing fails.
pub fn format_date_human(date_str: &str) -> String {
    if date_str.len() < 10 {
        return date_str.to_string();
    }
    let year = &date_str[..4];
    let month = &date_str[5..7];
    let day = &date_str[8..10];

    if let Some(m) = parse_month(month) {
        let day_num: u32 = day.parse().unwrap_or(0);
        format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year)
    } else {
        date_str[..10].to_string()
    }
}

/// "Sep 15" portion of an ISO date, without the year.
fn format_month_day(date_str: &str) -> Option<String> {
    if date_str.len() < 10 {
        return None;
    }
    let m = parse_month(&date_str[5..7])?;
    let day_num: u32 = date_str[8..10].parse().ok()?;
    Some(format!("{} {}", MONTH_NAMES[m - 1], day_num))
}

/// Format a check-in/check-out pair as "Sep 15 - Sep 20, 2024".
///
/// When the two dates fall in different years, both years are shown.
pub fn format_date_range(start: &str, end: &str) -> String {
    match (format_month_day(start), format_month_day(end)) {
        (Some(s), Some(e)) => {
            let start_year = &start[..4];
            let end_year = &end[..4];
            if start_year == end_year {
                format!("{} - {}, {}", s, e, end_year)
            } else {
                format!("{}, {} - {}, {}", s, start_year, e, end_year)
            }
        }
        _ => format!("{} - {}", start, end),
    }
}

/// Format a ruble amount with thousands separators, e.g. "₽15,000".
pub fn format_rub(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-₽{}", grouped)
    } else {
        format!("₽{}", grouped)
    }
}

/// Compact ruble amount for stat cards, e.g. "₽245K" or "₽1.2M".
pub fn format_rub_compact(amount: i64) -> String {
    if amount >= 1_000_000 {
        let whole = amount / 1_000_000;
        let tenths = (amount % 1_000_000) / 100_000;
        if tenths == 0 {
            format!("₽{}M", whole)
        } else {
            format!("₽{}.{}M", whole, tenths)
        }
    } else if amount >= 1_000 {
        format!("₽{}K", amount / 1_000)
    } else {
        format_rub(amount)
    }
}

/// Render a 0-5 rating as filled and empty stars, e.g. "★★★★☆".
pub fn rating_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Uppercase initials for avatar fallbacks, at most two characters.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect()
}
