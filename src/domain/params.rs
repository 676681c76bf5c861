//! Code generation parameters chosen by the learner

use crate::domain::error::{TrainerError, TrainerResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How subtle the seeded errors should be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// One-line explanation shown next to the selected level
    pub fn explanation(self) -> &'static str {
        match self {
            Self::Easy => "Basic errors that are relatively obvious, suitable for beginners",
            Self::Medium => "More subtle errors requiring careful code reading, good for practice",
            Self::Hard => "Complex, hard-to-spot errors that might require deeper Java knowledge",
        }
    }

    /// Number of errors to seed for a requested base count.
    ///
    /// Easy never drops below two errors.
    pub fn adjusted_count(self, count: usize) -> usize {
        match self {
            Self::Easy => count.saturating_sub(2).max(2),
            Self::Medium => count,
            Self::Hard => count.saturating_add(2),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = TrainerError;

    fn from_str(s: &str) -> TrainerResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(TrainerError::validation(format!(
                "Unknown difficulty '{other}'. Expected one of: easy, medium, hard"
            ))),
        }
    }
}

/// Size of the code snippet to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl CodeLength {
    pub const ALL: [CodeLength; 3] = [Self::Short, Self::Medium, Self::Long];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    pub fn explanation(self) -> &'static str {
        match self {
            Self::Short => "~50 lines of code, typically 1 class with a few methods",
            Self::Medium => "~100-150 lines, 1-2 classes with multiple methods",
            Self::Long => "~200+ lines, multiple classes with complex relationships",
        }
    }
}

impl fmt::Display for CodeLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeLength {
    type Err = TrainerError;

    fn from_str(s: &str) -> TrainerResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(TrainerError::validation(format!(
                "Unknown code length '{other}'. Expected one of: short, medium, long"
            ))),
        }
    }
}

/// Parameters passed along with a problem set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodeParams {
    pub difficulty: Difficulty,
    pub code_length: CodeLength,
}
