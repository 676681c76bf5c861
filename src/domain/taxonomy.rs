//! Core domain models for Java error taxonomies and problem sets
//!
//! Architecture: Rich Domain Models - taxonomies own their lookup behavior
//! - Taxonomy keeps categories in source order and answers name lookups
//! - SelectedError is the tagged form handed between sampling, display and review
//! - ProblemSet is the aggregate a learner reviews

use crate::domain::error::{TrainerError, TrainerResult};
use crate::domain::params::CodeParams;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use uuid::Uuid;

/// Which taxonomy an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorType {
    /// Compiler and runtime level defects
    Build,
    /// Style and convention defects
    Checkstyle,
}

impl ErrorType {
    pub const ALL: [ErrorType; 2] = [Self::Build, Self::Checkstyle];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Checkstyle => "checkstyle",
        }
    }

    /// Label used in problem descriptions
    pub fn label(self) -> &'static str {
        match self {
            Self::Build => "Build Error",
            Self::Checkstyle => "Checkstyle Error",
        }
    }

    /// Key holding the error name in the source JSON
    pub fn name_key(self) -> &'static str {
        match self {
            Self::Build => "error_name",
            Self::Checkstyle => "check_name",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorType {
    type Err = TrainerError;

    fn from_str(s: &str) -> TrainerResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "build" => Ok(Self::Build),
            "checkstyle" => Ok(Self::Checkstyle),
            other => Err(TrainerError::validation(format!(
                "Unknown error type '{other}'. Expected 'build' or 'checkstyle'"
            ))),
        }
    }
}

/// A single error entry as stored in a taxonomy file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// `error_name` in build files, `check_name` in checkstyle files
    #[serde(alias = "error_name", alias = "check_name")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_guide: Option<String>,
}

impl ErrorRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            implementation_guide: None,
        }
    }

    pub fn with_guide(mut self, guide: impl Into<String>) -> Self {
        self.implementation_guide = Some(guide.into());
        self
    }

    /// Case-insensitive match on name or description; `needle` must be lowercase
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// A named group of errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub errors: Vec<ErrorRecord>,
}

/// One taxonomy loaded from a JSON file, categories in file order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taxonomy {
    pub error_type: ErrorType,
    pub categories: Vec<Category>,
    /// File the taxonomy was loaded from, if any
    pub source: Option<PathBuf>,
}

impl Taxonomy {
    /// Create an empty taxonomy
    pub fn empty(error_type: ErrorType) -> Self {
        Self {
            error_type,
            categories: Vec::new(),
            source: None,
        }
    }

    /// Parse a taxonomy from JSON text of the form `{ "Category": [record, ...] }`
    pub fn from_json_str(
        error_type: ErrorType,
        content: &str,
        origin: &Path,
    ) -> TrainerResult<Self> {
        let root: JsonValue = serde_json::from_str(content)
            .map_err(|e| TrainerError::data(origin, format!("invalid JSON: {e}")))?;

        let JsonValue::Object(entries) = root else {
            return Err(TrainerError::data(
                origin,
                "expected a JSON object mapping category names to error lists",
            ));
        };

        let mut categories = Vec::with_capacity(entries.len());
        for (name, value) in entries {
            let errors: Vec<ErrorRecord> = serde_json::from_value(value).map_err(|e| {
                TrainerError::data(
                    origin,
                    format!(
                        "invalid errors in category '{name}' (records need '{}'): {e}",
                        error_type.name_key()
                    ),
                )
            })?;
            categories.push(Category { name, errors });
        }

        Ok(Self {
            error_type,
            categories,
            source: Some(origin.to_path_buf()),
        })
    }

    /// Category names in file order
    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Iterate all records with their category name
    pub fn records(&self) -> impl Iterator<Item = (&str, &ErrorRecord)> {
        self.categories
            .iter()
            .flat_map(|c| c.errors.iter().map(move |e| (c.name.as_str(), e)))
    }

    /// First record with the given name, scanning categories in order
    pub fn find(&self, name: &str) -> Option<(&str, &ErrorRecord)> {
        self.records().find(|(_, record)| record.name == name)
    }

    pub fn total_errors(&self) -> usize {
        self.categories.iter().map(|c| c.errors.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// An error tagged with its taxonomy and category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedError {
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    pub category: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub implementation_guide: String,
}

impl SelectedError {
    /// Tag a record, carrying its implementation guide
    pub fn from_record(
        error_type: ErrorType,
        category: impl Into<String>,
        record: &ErrorRecord,
    ) -> Self {
        Self {
            error_type,
            category: category.into(),
            name: record.name.clone(),
            description: record.description.clone(),
            implementation_guide: record.implementation_guide.clone().unwrap_or_default(),
        }
    }

    /// Tag a record without its implementation guide
    pub fn summary(
        error_type: ErrorType,
        category: impl Into<String>,
        record: &ErrorRecord,
    ) -> Self {
        Self {
            implementation_guide: String::new(),
            ..Self::from_record(error_type, category, record)
        }
    }

    /// `"<Build|Checkstyle> Error - <name>: <description> (Category: <category>)"`
    pub fn problem_description(&self) -> String {
        format!(
            "{} - {}: {} (Category: {})",
            self.error_type.label(),
            self.name,
            self.description,
            self.category
        )
    }
}

/// Category names per taxonomy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryListing {
    pub build: Vec<String>,
    pub checkstyle: Vec<String>,
}

/// Records grouped per taxonomy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorsByType {
    pub build: Vec<ErrorRecord>,
    pub checkstyle: Vec<ErrorRecord>,
}

impl ErrorsByType {
    pub fn total(&self) -> usize {
        self.build.len() + self.checkstyle.len()
    }
}

/// Categories chosen per taxonomy, kept in first-insertion order without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategorySelection {
    #[serde(default)]
    pub build: Vec<String>,
    #[serde(default)]
    pub checkstyle: Vec<String>,
}

impl CategorySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from two lists, dropping duplicates
    pub fn from_lists<B, C>(build: B, checkstyle: C) -> Self
    where
        B: IntoIterator,
        B::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let mut selection = Self::new();
        for category in build {
            selection.add(ErrorType::Build, category);
        }
        for category in checkstyle {
            selection.add(ErrorType::Checkstyle, category);
        }
        selection
    }

    /// Add a category; returns false if it was already selected
    pub fn add(&mut self, error_type: ErrorType, category: impl Into<String>) -> bool {
        let category = category.into();
        let list = self.list_mut(error_type);
        if list.contains(&category) {
            return false;
        }
        list.push(category);
        true
    }

    pub fn get(&self, error_type: ErrorType) -> &[String] {
        match error_type {
            ErrorType::Build => &self.build,
            ErrorType::Checkstyle => &self.checkstyle,
        }
    }

    /// Union with another selection, keeping this selection's order first
    pub fn merge(&mut self, other: &CategorySelection) {
        for error_type in ErrorType::ALL {
            for category in other.get(error_type) {
                self.add(error_type, category.clone());
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.build.is_empty() && self.checkstyle.is_empty()
    }

    fn list_mut(&mut self, error_type: ErrorType) -> &mut Vec<String> {
        match error_type {
            ErrorType::Build => &mut self.build,
            ErrorType::Checkstyle => &mut self.checkstyle,
        }
    }
}

/// A set of known errors a learner is asked to find
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemSet {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub params: CodeParams,
    pub errors: Vec<SelectedError>,
    pub problem_descriptions: Vec<String>,
}

impl ProblemSet {
    pub fn new(
        params: CodeParams,
        errors: Vec<SelectedError>,
        problem_descriptions: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            params,
            errors,
            problem_descriptions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn to_json(&self) -> TrainerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TrainerError::validation(format!("Failed to serialize problem set: {e}")))
    }

    /// Load a problem set previously written by `save_to_file`
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TrainerResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            TrainerError::data(path, format!("Failed to read problem set: {e}"))
        })?;
        serde_json::from_str(&contents)
            .map_err(|e| TrainerError::data(path, format!("Failed to parse problem set: {e}")))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> TrainerResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
