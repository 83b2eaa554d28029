//! Output formatting utilities

use crate::domain::Week;

/// Format the week collection for display, one line per week
pub fn format_week_list(weeks: &[Week]) -> String {
    if weeks.is_empty() {
        return "No weeks found".to_string();
    }

    let mut output = String::new();
    for week in weeks {
        output.push_str(&format!(
            "{}  {} ({})\n",
            week.id,
            week.title,
            word_count(week.words.len())
        ));
    }
    output
}

/// Format a single week: title line, then one word per line
pub fn format_week(week: &Week) -> String {
    let mut output = format!("{}\nid: {}\n", week.title, week.id);
    if week.words.is_empty() {
        output.push_str("(no words)\n");
    }
    for (index, word) in week.words.iter().enumerate() {
        output.push_str(&format!("{:>3}. {}\n", index + 1, word));
    }
    output
}

fn word_count(n: usize) -> String {
    if n == 1 {
        "1 word".to_string()
    } else {
        format!("{} words", n)
    }
}
