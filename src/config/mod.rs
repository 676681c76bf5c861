//! Configuration loading and management for the Java review trainer
//!
//! Architecture: Anti-Corruption Layer - Configuration translates external YAML formats
//! - Raw YAML structures are converted to clean domain objects
//! - Default problem areas and data locations are embedded, not read from disk
//! - Configuration acts as a repository for problem area mappings

use crate::domain::{CategorySelection, CodeLength, Difficulty, TrainerError, TrainerResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file names looked up in the working directory, in order
pub const DEFAULT_CONFIG_FILES: [&str; 3] = [
    "java_review_trainer.yaml",
    "java_review_trainer.yml",
    ".java_review_trainer.yaml",
];

/// Main configuration structure for the trainer
#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Configuration format version
    pub version: String,
    /// Where the taxonomy files live
    #[serde(default)]
    pub data: DataConfig,
    /// Defaults for problem set generation
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Review iteration settings
    #[serde(default)]
    pub review: ReviewConfig,
    /// Problem areas offered in standard selection mode
    #[serde(default = "default_problem_areas")]
    pub problem_areas: Vec<ProblemAreaDef>,
}

/// Taxonomy file locations
#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct DataConfig {
    /// Build error taxonomy file name or path
    #[serde(default = "default_build_errors_file")]
    pub build_errors_file: PathBuf,
    /// Checkstyle taxonomy file name or path
    #[serde(default = "default_checkstyle_errors_file")]
    pub checkstyle_errors_file: PathBuf,
    /// Extra directories searched before the built-in fallbacks
    #[serde(default)]
    pub search_dirs: Vec<PathBuf>,
    /// Fail instead of warning when a taxonomy cannot be loaded
    #[serde(default)]
    pub strict: bool,
}

/// Problem set generation defaults
#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Base number of errors before difficulty adjustment
    #[serde(default = "default_error_count")]
    pub error_count: usize,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub code_length: CodeLength,
    /// Categories used when a category request selects nothing
    #[serde(default = "default_generation_categories")]
    pub default_categories: CategorySelection,
}

/// Review iteration settings
#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Attempts allowed per problem set
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

/// A user-facing problem area and the categories it maps to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProblemAreaDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub build: Vec<String>,
    #[serde(default)]
    pub checkstyle: Vec<String>,
}

impl ProblemAreaDef {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            build: Vec::new(),
            checkstyle: Vec::new(),
        }
    }

    pub fn with_build(mut self, categories: &[&str]) -> Self {
        self.build = categories.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_checkstyle(mut self, categories: &[&str]) -> Self {
        self.checkstyle = categories.iter().map(|c| c.to_string()).collect();
        self
    }

    /// The categories this area maps to
    pub fn mapping(&self) -> CategorySelection {
        CategorySelection::from_lists(self.build.iter().cloned(), self.checkstyle.iter().cloned())
    }
}

impl TrainerConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TrainerResult<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            TrainerError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            TrainerError::config(format!(
                "Failed to parse config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from string content
    pub fn load_from_str(content: &str) -> TrainerResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| TrainerError::config(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Load the first default config file found in `dir`, or the built-in defaults
    pub fn discover_in<P: AsRef<Path>>(dir: P) -> TrainerResult<Self> {
        for name in DEFAULT_CONFIG_FILES {
            let candidate = dir.as_ref().join(name);
            if candidate.is_file() {
                tracing::debug!("Using configuration from {}", candidate.display());
                return Self::load_from_file(candidate);
            }
        }
        Ok(Self::default())
    }

    /// Get default configuration with built-in problem areas
    pub fn with_defaults() -> Self {
        Self {
            version: "1.0".to_string(),
            data: DataConfig::default(),
            generation: GenerationConfig::default(),
            review: ReviewConfig::default(),
            problem_areas: default_problem_areas(),
        }
    }

    /// Validate the configuration for consistency and correctness
    pub fn validate(&self) -> TrainerResult<()> {
        if !["1.0"].contains(&self.version.as_str()) {
            return Err(TrainerError::config(format!(
                "Unsupported configuration version: {}. Supported versions: 1.0",
                self.version
            )));
        }

        if self.data.build_errors_file.as_os_str().is_empty()
            || self.data.checkstyle_errors_file.as_os_str().is_empty()
        {
            return Err(TrainerError::config("Taxonomy file names must not be empty"));
        }

        if self.generation.error_count == 0 {
            return Err(TrainerError::config("generation.error_count must be at least 1"));
        }

        if self.review.max_iterations == 0 {
            return Err(TrainerError::config("review.max_iterations must be at least 1"));
        }

        let mut seen = HashSet::new();
        for area in &self.problem_areas {
            let key = area.name.trim().to_lowercase();
            if key.is_empty() {
                return Err(TrainerError::config("Problem area names must not be empty"));
            }
            if !seen.insert(key) {
                return Err(TrainerError::config(format!(
                    "Duplicate problem area '{}'",
                    area.name
                )));
            }
        }

        Ok(())
    }

    /// Look up a problem area by name, ignoring case
    pub fn problem_area(&self, name: &str) -> Option<&ProblemAreaDef> {
        let name = name.trim();
        self.problem_areas
            .iter()
            .find(|area| area.name.eq_ignore_ascii_case(name))
    }

    /// Convert to JSON for serialization
    pub fn to_json(&self) -> TrainerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TrainerError::config(format!("Failed to serialize config: {e}")))
    }

    /// Create a fingerprint of the configuration
    pub fn fingerprint(&self) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        format!("{:x}", hasher.finish())
    }
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            build_errors_file: default_build_errors_file(),
            checkstyle_errors_file: default_checkstyle_errors_file(),
            search_dirs: Vec::new(),
            strict: false,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            error_count: default_error_count(),
            difficulty: Difficulty::default(),
            code_length: CodeLength::default(),
            default_categories: default_generation_categories(),
        }
    }
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
        }
    }
}

fn default_build_errors_file() -> PathBuf {
    PathBuf::from("build_errors.json")
}

fn default_checkstyle_errors_file() -> PathBuf {
    PathBuf::from("checkstyle_error.json")
}

fn default_error_count() -> usize {
    4
}

fn default_max_iterations() -> usize {
    3
}

fn default_generation_categories() -> CategorySelection {
    CategorySelection::from_lists(
        ["CompileTimeErrors", "RuntimeErrors", "LogicalErrors"],
        ["NamingConventionChecks", "WhitespaceAndFormattingChecks"],
    )
}

/// Built-in problem areas and their category mappings
fn default_problem_areas() -> Vec<ProblemAreaDef> {
    vec![
        ProblemAreaDef::new(
            "Style",
            "Naming conventions, whitespace, formatting, and documentation issues",
        )
        .with_checkstyle(&[
            "NamingConventionChecks",
            "WhitespaceAndFormattingChecks",
            "JavadocChecks",
        ]),
        ProblemAreaDef::new(
            "Logical",
            "Logic flaws, incorrect conditionals, off-by-one errors, and algorithm issues",
        )
        .with_build(&["LogicalErrors"]),
        ProblemAreaDef::new(
            "Performance",
            "Inefficient code, unnecessary operations, resource leaks, and optimization issues",
        )
        .with_build(&["RuntimeErrors"])
        .with_checkstyle(&["MetricsChecks"]),
        ProblemAreaDef::new(
            "Security",
            "Potential vulnerabilities, input validation issues, and unsafe operations",
        )
        .with_build(&["RuntimeErrors", "LogicalErrors"])
        .with_checkstyle(&["CodeQualityChecks"]),
        ProblemAreaDef::new(
            "Design",
            "Poor class design, code organization, and maintainability problems",
        )
        .with_build(&["LogicalErrors"])
        .with_checkstyle(&["MiscellaneousChecks", "FileStructureChecks", "BlockChecks"]),
    ]
}

/// Configuration builder for programmatic construction
pub struct ConfigBuilder {
    config: TrainerConfig,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self { config: TrainerConfig::default() }
    }

    /// Add a directory searched for taxonomy files
    pub fn add_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.data.search_dirs.push(dir.into());
        self
    }

    pub fn build_errors_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data.build_errors_file = path.into();
        self
    }

    pub fn checkstyle_errors_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data.checkstyle_errors_file = path.into();
        self
    }

    /// Fail on missing or malformed taxonomy files
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.data.strict = strict;
        self
    }

    pub fn error_count(mut self, count: usize) -> Self {
        self.config.generation.error_count = count;
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.config.generation.difficulty = difficulty;
        self
    }

    pub fn max_iterations(mut self, max: usize) -> Self {
        self.config.review.max_iterations = max;
        self
    }

    /// Add or replace a problem area
    pub fn add_problem_area(mut self, area: ProblemAreaDef) -> Self {
        self.config
            .problem_areas
            .retain(|existing| !existing.name.eq_ignore_ascii_case(&area.name));
        self.config.problem_areas.push(area);
        self
    }

    /// Build the final configuration
    pub fn build(self) -> TrainerResult<TrainerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
