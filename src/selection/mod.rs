//! Turning learner choices into category selections
//!
//! CDD Principle: Domain Services - selection rules independent of any front end
//! - Standard mode maps problem areas onto taxonomy categories
//! - Advanced mode takes categories directly
//! - Specific picks form an ordered list without duplicates

use crate::config::ProblemAreaDef;
use crate::domain::{
    CategorySelection, ErrorRecord, ErrorType, SelectedError, TrainerError, TrainerResult,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use crate::domain::{CodeLength, CodeParams, Difficulty};

/// How the learner chooses what goes into a problem set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Broad problem areas mapped to categories
    #[default]
    Standard,
    /// Explicit taxonomy categories
    Advanced,
}

impl SelectionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Advanced => "advanced",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            Self::Standard => {
                "Select general problem areas like Style, Logic, or Performance. \
                 They are mapped to specific error categories."
            }
            Self::Advanced => {
                "Select specific error categories like LogicalErrors or NamingConventionChecks. \
                 Errors are picked at random from these categories."
            }
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMode {
    type Err = TrainerError;

    fn from_str(s: &str) -> TrainerResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "advanced" => Ok(Self::Advanced),
            other => Err(TrainerError::validation(format!(
                "Unknown selection mode '{other}'. Expected 'standard' or 'advanced'"
            ))),
        }
    }
}

/// Union of the categories mapped by the named problem areas.
///
/// Names match ignoring case. Categories keep first-seen order.
pub fn map_problem_areas<S: AsRef<str>>(
    areas: &[ProblemAreaDef],
    names: &[S],
) -> TrainerResult<CategorySelection> {
    let mut selection = CategorySelection::new();

    for name in names {
        let name = name.as_ref().trim();
        let area = areas
            .iter()
            .find(|area| area.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                let known: Vec<&str> = areas.iter().map(|a| a.name.as_str()).collect();
                TrainerError::not_found(format!(
                    "problem area '{}'. Available: {}",
                    name,
                    known.join(", ")
                ))
            })?;

        selection.merge(&area.mapping());
    }

    if selection.is_empty() {
        tracing::warn!("No problem areas selected; no errors will be included");
    }

    Ok(selection)
}

/// Keep records whose name or description contains `term`, ignoring case
pub fn filter_records<'a>(records: &'a [ErrorRecord], term: &str) -> Vec<&'a ErrorRecord> {
    let needle = term.trim().to_lowercase();
    records
        .iter()
        .filter(|record| needle.is_empty() || record.matches_lowercase(&needle))
        .collect()
}

/// Ordered list of explicitly chosen errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificErrorSelection {
    errors: Vec<SelectedError>,
}

impl SpecificErrorSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error; returns false if one with the same type and name is present
    pub fn add(&mut self, error: SelectedError) -> bool {
        if self.contains(error.error_type, &error.name) {
            return false;
        }
        self.errors.push(error);
        true
    }

    pub fn contains(&self, error_type: ErrorType, name: &str) -> bool {
        self.errors
            .iter()
            .any(|e| e.error_type == error_type && e.name == name)
    }

    /// Remove by position; out-of-range indexes return `None`
    pub fn remove(&mut self, index: usize) -> Option<SelectedError> {
        (index < self.errors.len()).then(|| self.errors.remove(index))
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn errors(&self) -> &[SelectedError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<SelectedError> {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrainerConfig;
    use crate::repository::tests::sample_repository;
    use rstest::rstest;

    #[rstest]
    #[case(
        &["Style"],
        &[],
        &["NamingConventionChecks", "WhitespaceAndFormattingChecks", "JavadocChecks"]
    )]
    #[case(&["logical"], &["LogicalErrors"], &[])]
    #[case(
        &["Performance", "Security"],
        &["RuntimeErrors", "LogicalErrors"],
        &["MetricsChecks", "CodeQualityChecks"]
    )]
    #[case(
        &["Design", "Logical", "Security"],
        &["LogicalErrors", "RuntimeErrors"],
        &["MiscellaneousChecks", "FileStructureChecks", "BlockChecks", "CodeQualityChecks"]
    )]
    fn test_map_problem_areas(
        #[case] names: &[&str],
        #[case] build: &[&str],
        #[case] checkstyle: &[&str],
    ) {
        let config = TrainerConfig::default();
        let selection = map_problem_areas(&config.problem_areas, names).unwrap();
        assert_eq!(selection.build, build);
        assert_eq!(selection.checkstyle, checkstyle);
    }

    #[test]
    fn test_map_problem_areas_edge_cases() {
        let config = TrainerConfig::default();

        let empty: [&str; 0] = [];
        assert!(map_problem_areas(&config.problem_areas, &empty).unwrap().is_empty());

        let err = map_problem_areas(&config.problem_areas, &["Readability"]).unwrap_err();
        assert!(matches!(err, TrainerError::NotFound { .. }));
        assert!(err.to_string().contains("Style, Logical, Performance, Security, Design"));
    }

    #[test]
    fn test_selection_mode_parse() {
        assert_eq!("Advanced".parse::<SelectionMode>().unwrap(), SelectionMode::Advanced);
        assert!("expert".parse::<SelectionMode>().is_err());
        assert_eq!(SelectionMode::default(), SelectionMode::Standard);
    }

    #[test]
    fn test_filter_records() {
        let repo = sample_repository();
        let records = repo.category_errors(ErrorType::Build, "CompileTimeErrors");

        assert_eq!(filter_records(records, "").len(), 3);
        let filtered = filter_records(records, "DECLARATION");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Undefined variable");
        assert!(filter_records(records, "lambda").is_empty());
    }

    #[test]
    fn test_specific_selection() {
        let repo = sample_repository();
        let npe = repo.error_by_name(ErrorType::Build, "NullPointerException").unwrap();
        let member = repo.error_by_name(ErrorType::Checkstyle, "MemberName").unwrap();

        let mut picks = SpecificErrorSelection::new();
        assert!(picks.add(npe.clone()));
        assert!(!picks.add(npe.clone()));
        assert!(picks.add(member));
        assert_eq!(picks.len(), 2);
        assert!(picks.contains(ErrorType::Checkstyle, "MemberName"));
        assert!(!picks.contains(ErrorType::Build, "MemberName"));

        assert_eq!(picks.remove(5), None);
        assert_eq!(picks.remove(0), Some(npe));
        assert_eq!(picks.errors()[0].name, "MemberName");

        picks.clear();
        assert!(picks.is_empty());
    }
}
