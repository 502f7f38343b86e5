//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain types after
//! validation. The built-in defaults carry the standard service
//! recommendation quiz: five questions, four weighted choices each, and
//! one recommendation record per category.

use quiz_domain::{
    CHOICES_PER_QUESTION, Choice, DomainError, Question, QuestionSet, Recommendation,
    RecommendationCatalog, ScoreVector,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity of a configuration issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Suspicious but usable
    Warning,
    /// The config cannot be converted into domain types
    Error,
}

/// A single problem detected during config validation
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending field (e.g. "quiz.questions[2].choices")
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{tag}: {}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Quiz questions and choices
    pub quiz: FileQuizConfig,
    /// Per-category recommendation records
    pub recommendations: FileRecommendationsConfig,
    /// Analytics settings
    pub analytics: FileAnalyticsConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// `Error`-severity issues mean `to_question_set` would fail; warnings
    /// flag content that converts fine but is probably a mistake.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.quiz.questions.is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                field: "quiz.questions".to_string(),
                message: "at least one question is required".to_string(),
            });
        }

        for (i, question) in self.quiz.questions.iter().enumerate() {
            if question.prompt.trim().is_empty() {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    field: format!("quiz.questions[{i}].prompt"),
                    message: "prompt must not be empty".to_string(),
                });
            }
            if question.choices.len() != CHOICES_PER_QUESTION {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    field: format!("quiz.questions[{i}].choices"),
                    message: format!(
                        "expected {CHOICES_PER_QUESTION} choices, found {}",
                        question.choices.len()
                    ),
                });
            }
            for (j, choice) in question.choices.iter().enumerate() {
                if choice.text.trim().is_empty() {
                    issues.push(ConfigIssue {
                        severity: Severity::Warning,
                        field: format!("quiz.questions[{i}].choices[{j}].text"),
                        message: "choice text is empty".to_string(),
                    });
                }
            }
        }

        for (category, record) in [
            ("consultation", &self.recommendations.consultation),
            ("starter", &self.recommendations.starter),
            ("blueprint", &self.recommendations.blueprint),
            ("advisor", &self.recommendations.advisor),
        ] {
            if record.package_name.trim().is_empty() {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    field: format!("recommendations.{category}.package_name"),
                    message: "package name must not be empty".to_string(),
                });
            }
            if record.link.trim().is_empty() {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    field: format!("recommendations.{category}.link"),
                    message: "call-to-action link is empty".to_string(),
                });
            }
        }

        issues
    }

    /// Whether validation found any `Error`-severity issue
    pub fn has_errors(&self) -> bool {
        self.validate()
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }

    /// Convert the raw quiz section into the domain question set.
    pub fn to_question_set(&self) -> Result<QuestionSet, DomainError> {
        let questions = self
            .quiz
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let choices = q
                    .choices
                    .iter()
                    .map(|c| Choice::new(&c.text, c.score.to_score_vector()))
                    .collect();
                Question::try_new((i + 1) as u32, &q.prompt, choices)
            })
            .collect::<Result<Vec<_>, _>>()?;
        QuestionSet::try_new(questions)
    }

    /// Convert the raw recommendations section into the domain catalog.
    pub fn to_catalog(&self) -> RecommendationCatalog {
        RecommendationCatalog::new(
            self.recommendations.consultation.to_recommendation(),
            self.recommendations.starter.to_recommendation(),
            self.recommendations.blueprint.to_recommendation(),
            self.recommendations.advisor.to_recommendation(),
        )
    }
}

/// Quiz section: the ordered question list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    pub questions: Vec<FileQuestion>,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            questions: default_questions(),
        }
    }
}

/// One question: a prompt and its choices
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestion {
    pub prompt: String,
    pub choices: Vec<FileChoice>,
}

/// One choice: display text and its score contribution
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChoice {
    pub text: String,
    pub score: FileScore,
}

/// Per-category weights for a choice.
///
/// Missing keys default to zero; unknown keys are rejected so typos in
/// category names fail loudly instead of silently scoring nothing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileScore {
    pub consultation: u32,
    pub starter: u32,
    pub blueprint: u32,
    pub advisor: u32,
}

impl FileScore {
    pub fn to_score_vector(self) -> ScoreVector {
        ScoreVector::new(self.consultation, self.starter, self.blueprint, self.advisor)
    }
}

/// Recommendations section: one record per category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRecommendationsConfig {
    pub consultation: FileRecommendation,
    pub starter: FileRecommendation,
    pub blueprint: FileRecommendation,
    pub advisor: FileRecommendation,
}

impl Default for FileRecommendationsConfig {
    fn default() -> Self {
        Self {
            consultation: FileRecommendation::new(
                "Free 30-Minute Consultation",
                "Based on your answers, we recommend starting with our free consultation \
                 to explore your needs and discover the potential of AI automation for \
                 your specific situation.",
                "https://calendar.app.google/MYPE1kzDMy6sDv2n6",
                "Book Your Free Consultation",
            ),
            starter: FileRecommendation::new(
                "Starter Plan",
                "Based on your answers, our Starter Plan is ideal for your needs. It \
                 provides focused automation recommendations for your most essential \
                 business processes.",
                "https://calendar.app.google/MYPE1kzDMy6sDv2n6",
                "Get Started",
            ),
            blueprint: FileRecommendation::new(
                "AI Automation Blueprint",
                "Based on your answers, our comprehensive AI Automation Blueprint is the \
                 perfect match for your needs. You'll get a detailed strategy and \
                 implementation roadmap.",
                "https://calendar.app.google/MYPE1kzDMy6sDv2n6",
                "Get Your Blueprint",
            ),
            advisor: FileRecommendation::new(
                "Ongoing Advisor",
                "Based on your answers, our Ongoing Advisor service is ideal for your \
                 situation. You'll benefit from continuous support and optimization of \
                 your AI automation systems.",
                "https://calendar.app.google/MYPE1kzDMy6sDv2n6",
                "Contact for Details",
            ),
        }
    }
}

/// One recommendation record as written in the config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRecommendation {
    pub package_name: String,
    pub description: String,
    pub link: String,
    pub link_text: String,
}

impl FileRecommendation {
    fn new(package_name: &str, description: &str, link: &str, link_text: &str) -> Self {
        Self {
            package_name: package_name.to_string(),
            description: description.to_string(),
            link: link.to_string(),
            link_text: link_text.to_string(),
        }
    }

    pub fn to_recommendation(&self) -> Recommendation {
        Recommendation::new(
            &self.package_name,
            &self.description,
            &self.link,
            &self.link_text,
        )
    }
}

/// Analytics section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnalyticsConfig {
    /// Master switch; when off, events go nowhere
    pub enabled: bool,
    /// Optional JSONL file to append events to
    pub events_file: Option<PathBuf>,
}

impl Default for FileAnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            events_file: None,
        }
    }
}

fn choice(text: &str, consultation: u32, starter: u32, blueprint: u32, advisor: u32) -> FileChoice {
    FileChoice {
        text: text.to_string(),
        score: FileScore {
            consultation,
            starter,
            blueprint,
            advisor,
        },
    }
}

/// The standard service recommendation quiz
fn default_questions() -> Vec<FileQuestion> {
    vec![
        FileQuestion {
            prompt: "What is your current stage with AI automation?".to_string(),
            choices: vec![
                choice("Just starting to explore the possibilities", 5, 3, 1, 0),
                choice("I know I need it but not sure where to start", 3, 5, 2, 0),
                choice("I've tried some tools but need a comprehensive strategy", 1, 3, 5, 2),
                choice("I have systems in place but need optimization", 0, 1, 3, 5),
            ],
        },
        FileQuestion {
            prompt: "What is your business size?".to_string(),
            choices: vec![
                choice("Solopreneur or very small team (1-3 people)", 4, 5, 2, 1),
                choice("Small business (4-20 employees)", 2, 4, 5, 3),
                choice("Medium business (21-100 employees)", 1, 2, 5, 4),
                choice("Large business (100+ employees)", 0, 1, 3, 5),
            ],
        },
        FileQuestion {
            prompt: "What's your timeline for implementing AI automation?".to_string(),
            choices: vec![
                choice("I want to explore options first, no immediate timeline", 5, 3, 1, 0),
                choice("Within the next 1-3 months", 2, 5, 4, 2),
                choice("Within the next quarter", 1, 3, 5, 3),
                choice("Ongoing optimization of existing systems", 0, 1, 3, 5),
            ],
        },
        FileQuestion {
            prompt: "What's your primary goal with AI automation?".to_string(),
            choices: vec![
                choice("Save time on repetitive tasks", 3, 5, 4, 2),
                choice("Improve data analysis and business insights", 2, 3, 5, 4),
                choice("Enhance customer experience", 2, 4, 5, 3),
                choice("Comprehensive digital transformation", 1, 1, 4, 5),
            ],
        },
        FileQuestion {
            prompt: "What's your budget for AI tools and consulting?".to_string(),
            choices: vec![
                choice("Minimal/exploring options first", 5, 3, 0, 0),
                choice("$500-$2,000", 2, 5, 2, 0),
                choice("$2,000-$5,000", 0, 2, 5, 2),
                choice("$5,000+", 0, 1, 4, 5),
            ],
        },
    ]
}
