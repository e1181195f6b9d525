use crate::types::FeedbackEntry;

/// Section headers every briefing carries, in order.
pub const SECTION_HEADERS: [&str; 6] = [
    "TOP THEMES",
    "SENTIMENT WEATHER",
    "HOTTEST COMPLAINT",
    "WHAT WE FIX THIS WEEK",
    "A RISKY BET",
    "METRICS TO WATCH",
];

const PREAMBLE: &str = r#"You are "Feedback DJ", a product manager who turns raw customer feedback into a catchy daily briefing.

Given the feedback below, produce a short briefing with EXACT sections in this order:

1) TOP THEMES (max 3 bullets)
2) SENTIMENT WEATHER (one line: "Sunny", "Cloudy", "Stormy", etc + one sentence why)
3) HOTTEST COMPLAINT (one short quote, verbatim from the feedback)
4) WHAT WE FIX THIS WEEK (one concrete fix)
5) A RISKY BET (one experiment idea)
6) METRICS TO WATCH (exactly 3 metrics)

Keep it punchy. Use plain text (NOT JSON). Do not mention you are an AI."#;

/// `"<n>. [<source>] <text>"` lines for the newest `max` entries.
pub fn format_feedback(entries: &[FeedbackEntry], max: usize) -> String {
    entries
        .iter()
        .take(max)
        .enumerate()
        .map(|(i, e)| format!("{}. [{}] {}", i + 1, e.source, e.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full instruction prompt with the feedback block embedded.
pub fn build_prompt(entries: &[FeedbackEntry], max: usize) -> String {
    format!(
        "\n{}\n\nFEEDBACK:\n{}\n",
        PREAMBLE,
        format_feedback(entries, max)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<FeedbackEntry> {
        (0..n)
            .map(|i| FeedbackEntry::new(format!("src{}", i), format!("text {}", i), i as i64))
            .collect()
    }

    #[test]
    fn test_format_is_one_based_and_newline_joined() {
        let block = format_feedback(&entries(2), 20);
        assert_eq!(block, "1. [src0] text 0\n2. [src1] text 1");
    }

    #[test]
    fn test_format_caps_at_max() {
        let block = format_feedback(&entries(30), 20);
        assert_eq!(block.lines().count(), 20);
        assert!(block.ends_with("20. [src19] text 19"));
        assert!(!block.contains("[src20]"));
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_feedback(&[], 20), "");
    }

    #[test]
    fn test_prompt_names_sections_in_order() {
        let prompt = build_prompt(&entries(1), 20);
        let mut cursor = 0;
        for header in SECTION_HEADERS {
            let pos = prompt[cursor..]
                .find(header)
                .unwrap_or_else(|| panic!("missing {}", header));
            cursor += pos + header.len();
        }
        assert!(prompt.contains("NOT JSON"));
        assert!(prompt.contains("Do not mention you are an AI"));
        assert!(prompt.ends_with("FEEDBACK:\n1. [src0] text 0\n"));
    }
}
