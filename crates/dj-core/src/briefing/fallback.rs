/// Canned briefing served whenever generation fails.
pub const FALLBACK_BRIEFING: &str = "TOP THEMES
- Onboarding/docs confusion
- Tooling errors lack clarity
- Model selection uncertainty

SENTIMENT WEATHER
Cloudy — users like performance but struggle to get started.

HOTTEST COMPLAINT
\"Wrangler deploy errors didn’t tell me which binding was missing.\"

WHAT WE FIX THIS WEEK
Add an end-to-end \"first build\" doc with exact binding names + expected outputs.

A RISKY BET
Ship a \"Feedback DJ\" template app in the dashboard to bootstrap common prototypes.

METRICS TO WATCH
- Time-to-first-successful-deploy
- Docs search exits / bounce rate
- Error-to-resolution time";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::briefing::prompt::SECTION_HEADERS;

    #[test]
    fn test_fallback_has_all_sections_in_order() {
        let positions: Vec<usize> = SECTION_HEADERS
            .iter()
            .map(|h| FALLBACK_BRIEFING.find(h).unwrap_or_else(|| panic!("missing {}", h)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
    }

    #[test]
    fn test_fallback_has_three_metrics() {
        let metrics = FALLBACK_BRIEFING
            .split("METRICS TO WATCH")
            .nth(1)
            .unwrap()
            .lines()
            .filter(|l| l.starts_with("- "))
            .count();
        assert_eq!(metrics, 3);
    }
}
