// templates/format.rs

use chrono::NaiveDate;

/// Groups thousands with non-breaking spaces, the way Norwegian prices are written.
pub fn format_nok(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(ch);
    }
    out
}

/// "today", "yesterday", "3 days ago", "2 months ago" ...
pub fn posted_relative(posted_on: NaiveDate, today: NaiveDate) -> String {
    let days = (today - posted_on).num_days();
    match days {
        d if d < 0 => "soon".to_string(),
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=29 => format!("{days} days ago"),
        30..=59 => "about a month ago".to_string(),
        60..=364 => format!("{} months ago", days / 30),
        365..=729 => "about a year ago".to_string(),
        _ => format!("{} years ago", days / 365),
    }
}
