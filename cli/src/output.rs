//! Console output formatter for quiz outcomes

use colored::Colorize;
use quiz_application::QuizOutcome;
use quiz_domain::Category;

/// Formats quiz outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete outcome: per-category totals plus the result
    pub fn format(outcome: &QuizOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Your Scores"));
        let leader = outcome.totals.leader();
        for category in Category::ORDER {
            let total = outcome.totals.get(category);
            let line = format!("  {:<14} {}", category.to_string(), total);
            if category == leader {
                output.push_str(&format!("{}\n", line.green().bold()));
            } else {
                output.push_str(&format!("{}\n", line));
            }
        }

        output.push_str(&Self::format_result_only(outcome));
        output
    }

    /// Format only the recommendation card
    pub fn format_result_only(outcome: &QuizOutcome) -> String {
        let recommendation = &outcome.recommendation;
        let mut output = String::new();

        output.push_str(&Self::section_header("Our Recommendation"));
        output.push_str(&format!(
            "{}\n\n{}\n\n",
            recommendation.package_name.cyan().bold(),
            recommendation.description
        ));
        output.push_str(&format!(
            "{} {}\n",
            format!("{}:", recommendation.link_text).yellow().bold(),
            recommendation.link
        ));
        output
    }

    /// Format the outcome as JSON
    pub fn format_json(outcome: &QuizOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.bold(), "─".repeat(40).dimmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::{AnswerTrace, Recommendation, ScoreVector};

    fn outcome() -> QuizOutcome {
        QuizOutcome {
            recommendation: Recommendation::new(
                "Starter Plan",
                "Focused automation for essential processes.",
                "https://example.com/book",
                "Get Started",
            ),
            totals: ScoreVector::new(10, 21, 14, 5),
            trace: AnswerTrace::from_selections(vec![1, 1, 0, 1, 1]),
        }
    }

    #[test]
    fn test_format_contains_totals_and_recommendation() {
        let text = ConsoleFormatter::format(&outcome());
        assert!(text.contains("consultation"));
        assert!(text.contains("21"));
        assert!(text.contains("Starter Plan"));
        assert!(text.contains("https://example.com/book"));
    }

    #[test]
    fn test_format_result_only_skips_totals() {
        let text = ConsoleFormatter::format_result_only(&outcome());
        assert!(text.contains("Starter Plan"));
        assert!(!text.contains("Your Scores"));
    }

    #[test]
    fn test_format_json_round_trips() {
        let json = ConsoleFormatter::format_json(&outcome());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["recommendation"]["package_name"], "Starter Plan");
        assert_eq!(value["totals"]["starter"], 21);
        assert_eq!(value["trace"]["selections"][0], 1);
    }
}
