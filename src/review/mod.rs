//! Scoring a learner's review against the known problems
//!
//! CDD Principle: Aggregate Root - ReviewSession owns the attempts for one problem set
//! - An attempt is scored by matching error names mentioned in the review text
//! - A session ends after a complete review or when attempts run out

use crate::domain::{ErrorType, ProblemSet, SelectedError, TrainerError, TrainerResult};
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

lazy_static! {
    static ref ACRONYM_BOUNDARY: Regex = Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap();
    static ref CAMEL_BOUNDARY: Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Lowercase words of `text`, with camel case split apart
fn normalize(text: &str) -> String {
    let text = ACRONYM_BOUNDARY.replace_all(text, "$1 $2");
    let text = CAMEL_BOUNDARY.replace_all(&text, "$1 $2");
    let lower = text.to_lowercase();
    NON_ALNUM.replace_all(&lower, " ").trim().to_string()
}

/// Normalised words padded with spaces, so whole-word matches are substring checks
struct NormalizedText {
    words: String,
}

impl NormalizedText {
    fn new(text: &str) -> Self {
        Self {
            words: format!(" {} ", normalize(text)),
        }
    }

    /// Whether `name` appears as whole words, or glued together as a single word
    fn mentions(&self, name: &NormalizedText) -> bool {
        let name_words = name.words.trim();
        if name_words.is_empty() {
            return false;
        }
        if self.words.contains(&name.words) {
            return true;
        }
        let glued = format!(" {} ", name_words.replace(' ', ""));
        name_words.contains(' ') && self.words.contains(&glued)
    }
}

/// Result of scoring one review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAnalysis {
    pub total_problems: usize,
    pub identified_count: usize,
    /// 0.0 when there are no known problems
    pub identified_percentage: f64,
    pub identified: Vec<SelectedError>,
    pub missed: Vec<SelectedError>,
    /// Every known problem was identified
    pub review_sufficient: bool,
}

/// Score a review against the known problems
pub fn analyze_review(review_text: &str, known: &[SelectedError]) -> ReviewAnalysis {
    let review = NormalizedText::new(review_text);
    let (identified, missed): (Vec<SelectedError>, Vec<SelectedError>) = known
        .iter()
        .cloned()
        .partition(|problem| review.mentions(&NormalizedText::new(&problem.name)));

    let total_problems = known.len();
    let identified_count = identified.len();
    let identified_percentage = if total_problems == 0 {
        0.0
    } else {
        identified_count as f64 * 100.0 / total_problems as f64
    };

    tracing::debug!(
        "Review identified {} of {} problems",
        identified_count,
        total_problems
    );

    ReviewAnalysis {
        total_problems,
        identified_count,
        identified_percentage,
        identified,
        review_sufficient: missed.is_empty(),
        missed,
    }
}

/// One submitted review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewAttempt {
    /// 1-based attempt number
    pub iteration: usize,
    pub review_text: String,
    pub submitted_at: DateTime<Utc>,
    pub analysis: ReviewAnalysis,
}

/// Review attempts for one problem set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSession {
    problem_set: ProblemSet,
    max_iterations: usize,
    attempts: Vec<ReviewAttempt>,
}

impl ReviewSession {
    pub fn new(problem_set: ProblemSet, max_iterations: usize) -> TrainerResult<Self> {
        if max_iterations == 0 {
            return Err(TrainerError::validation("max_iterations must be at least 1"));
        }
        Ok(Self {
            problem_set,
            max_iterations,
            attempts: Vec::new(),
        })
    }

    /// Score a review and record it as the next attempt
    pub fn submit(&mut self, review_text: &str) -> TrainerResult<&ReviewAttempt> {
        if review_text.trim().is_empty() {
            return Err(TrainerError::validation(
                "Please enter your review before submitting.",
            ));
        }
        if self.is_complete() {
            return Err(TrainerError::validation(format!(
                "Review session is complete after {} attempt{}",
                self.attempts.len(),
                if self.attempts.len() == 1 { "" } else { "s" }
            )));
        }

        let attempt = ReviewAttempt {
            iteration: self.attempts.len() + 1,
            review_text: review_text.to_string(),
            submitted_at: Utc::now(),
            analysis: analyze_review(review_text, &self.problem_set.errors),
        };
        tracing::info!(
            "Attempt {} of {}: identified {} of {} problems",
            attempt.iteration,
            self.max_iterations,
            attempt.analysis.identified_count,
            attempt.analysis.total_problems
        );

        self.attempts.push(attempt);
        Ok(&self.attempts[self.attempts.len() - 1])
    }

    /// Attempt number of the next (or last, once complete) submission
    pub fn current_iteration(&self) -> usize {
        (self.attempts.len() + 1).min(self.max_iterations)
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Complete after a sufficient review or once all attempts are used
    pub fn is_complete(&self) -> bool {
        self.attempts.len() >= self.max_iterations
            || self.latest().is_some_and(|a| a.analysis.review_sufficient)
    }

    pub fn latest(&self) -> Option<&ReviewAttempt> {
        self.attempts.last()
    }

    pub fn attempts(&self) -> &[ReviewAttempt] {
        &self.attempts
    }

    pub fn problem_set(&self) -> &ProblemSet {
        &self.problem_set
    }

    /// Hints for the next attempt naming where the missed problems are, not what they are
    pub fn targeted_guidance(&self) -> Option<String> {
        let latest = self.latest()?;
        if latest.analysis.missed.is_empty() {
            return None;
        }

        let mut areas: Vec<(ErrorType, &str)> = Vec::new();
        for problem in &latest.analysis.missed {
            let key = (problem.error_type, problem.category.as_str());
            if !areas.contains(&key) {
                areas.push(key);
            }
        }

        let hints: Vec<String> = areas
            .iter()
            .map(|(error_type, category)| match error_type {
                ErrorType::Build => format!("build errors in {category}"),
                ErrorType::Checkstyle => format!("checkstyle issues in {category}"),
            })
            .collect();

        let missed = latest.analysis.missed.len();
        Some(format!(
            "You missed {} issue{}. Look again for {}.",
            missed,
            if missed == 1 { "" } else { "s" },
            hints.join(" and ")
        ))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TrainerResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let session: Self = serde_json::from_str(&contents)
            .map_err(|e| TrainerError::data(path, format!("Failed to parse review session: {e}")))?;

        if session.max_iterations == 0 {
            return Err(TrainerError::data(path, "max_iterations must be at least 1"));
        }
        if session.attempts.len() > session.max_iterations {
            return Err(TrainerError::data(
                path,
                format!(
                    "{} attempts recorded but only {} allowed",
                    session.attempts.len(),
                    session.max_iterations
                ),
            ));
        }
        Ok(session)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> TrainerResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| {
                TrainerError::validation(format!("Failed to serialize review session: {e}"))
            })?;
        fs::write(path, json)?;
        Ok(())
    }
}
