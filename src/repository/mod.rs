//! JSON-backed repository of Java build and checkstyle errors
//!
//! CDD Principle: Repository - the only component that touches taxonomy files
//! - Files are located once through the fallback search and never written back
//! - Queries return borrowed records or tagged `SelectedError` copies
//! - Randomness always comes from a caller-supplied `Rng`

pub mod locator;

use crate::config::{DataConfig, GenerationConfig};
use crate::domain::{
    CategoryListing, CategorySelection, Difficulty, ErrorRecord, ErrorType, ErrorsByType,
    SelectedError, Taxonomy, TrainerError, TrainerResult,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub use locator::DataLocator;

/// Which taxonomy files were loaded, and from where
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadStatus {
    pub build: Option<PathBuf>,
    pub checkstyle: Option<PathBuf>,
}

impl LoadStatus {
    /// True only when both taxonomies were loaded from files
    pub fn is_fully_loaded(&self) -> bool {
        self.build.is_some() && self.checkstyle.is_some()
    }
}

/// Category name with its number of errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub error_count: usize,
}

/// Inputs for choosing the errors to seed into a code snippet
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Category-based selection; `Some` with nothing selected uses `fallback_categories`
    pub categories: Option<CategorySelection>,
    /// Explicit picks; take precedence over `categories` when non-empty
    pub specific_errors: Vec<SelectedError>,
    /// Base error count before difficulty adjustment
    pub count: usize,
    pub difficulty: Difficulty,
    pub fallback_categories: CategorySelection,
}

impl GenerationRequest {
    /// Request errors sampled from categories
    pub fn from_categories(
        categories: CategorySelection,
        count: usize,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            categories: Some(categories),
            specific_errors: Vec::new(),
            count,
            difficulty,
            fallback_categories: GenerationConfig::default().default_categories,
        }
    }

    /// Request exactly the given errors
    pub fn from_specific(errors: Vec<SelectedError>) -> Self {
        Self {
            categories: None,
            specific_errors: errors,
            count: 0,
            difficulty: Difficulty::default(),
            fallback_categories: CategorySelection::default(),
        }
    }

    /// Replace the categories used when the selection is empty
    pub fn with_fallback(mut self, fallback: CategorySelection) -> Self {
        self.fallback_categories = fallback;
        self
    }
}

/// Errors chosen for generation and their problem descriptions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationOutcome {
    pub errors: Vec<SelectedError>,
    pub problem_descriptions: Vec<String>,
}

impl GenerationOutcome {
    fn new(errors: Vec<SelectedError>) -> Self {
        let problem_descriptions = errors.iter().map(SelectedError::problem_description).collect();
        Self { errors, problem_descriptions }
    }
}

/// Read-only access to the build and checkstyle taxonomies
#[derive(Debug, Clone)]
pub struct JsonErrorRepository {
    build: Taxonomy,
    checkstyle: Taxonomy,
}

impl JsonErrorRepository {
    /// Load both taxonomies using the default fallback search
    pub fn load(config: &DataConfig) -> TrainerResult<Self> {
        let locator = DataLocator::new(config.search_dirs.clone());
        Self::load_with_locator(config, &locator)
    }

    /// Load both taxonomies with a custom locator
    pub fn load_with_locator(config: &DataConfig, locator: &DataLocator) -> TrainerResult<Self> {
        let build =
            load_taxonomy(ErrorType::Build, &config.build_errors_file, locator, config.strict)?;
        let checkstyle = load_taxonomy(
            ErrorType::Checkstyle,
            &config.checkstyle_errors_file,
            locator,
            config.strict,
        )?;

        Ok(Self { build, checkstyle })
    }

    /// Build a repository from in-memory JSON; malformed input is an error
    pub fn from_json_strs(build_json: &str, checkstyle_json: &str) -> TrainerResult<Self> {
        Ok(Self {
            build: Taxonomy::from_json_str(ErrorType::Build, build_json, Path::new("<build>"))?,
            checkstyle: Taxonomy::from_json_str(
                ErrorType::Checkstyle,
                checkstyle_json,
                Path::new("<checkstyle>"),
            )?,
        })
    }

    /// Build a repository from already parsed taxonomies
    pub fn from_taxonomies(build: Taxonomy, checkstyle: Taxonomy) -> Self {
        Self { build, checkstyle }
    }

    pub fn taxonomy(&self, error_type: ErrorType) -> &Taxonomy {
        match error_type {
            ErrorType::Build => &self.build,
            ErrorType::Checkstyle => &self.checkstyle,
        }
    }

    pub fn load_status(&self) -> LoadStatus {
        LoadStatus {
            build: self.build.source.clone(),
            checkstyle: self.checkstyle.source.clone(),
        }
    }

    pub fn is_fully_loaded(&self) -> bool {
        self.load_status().is_fully_loaded()
    }

    /// Category names of both taxonomies in file order
    pub fn all_categories(&self) -> CategoryListing {
        CategoryListing {
            build: self.build.category_names(),
            checkstyle: self.checkstyle.category_names(),
        }
    }

    pub fn category_summaries(&self, error_type: ErrorType) -> Vec<CategorySummary> {
        self.taxonomy(error_type)
            .categories
            .iter()
            .map(|c| CategorySummary {
                name: c.name.clone(),
                error_count: c.errors.len(),
            })
            .collect()
    }

    /// Errors of one category; empty for an unknown category
    pub fn category_errors(&self, error_type: ErrorType, category: &str) -> &[ErrorRecord] {
        self.taxonomy(error_type)
            .category(category)
            .map(|c| c.errors.as_slice())
            .unwrap_or(&[])
    }

    /// Errors of all selected categories, concatenated in selection order
    pub fn errors_by_categories(&self, selection: &CategorySelection) -> ErrorsByType {
        let collect = |error_type: ErrorType| -> Vec<ErrorRecord> {
            selection
                .get(error_type)
                .iter()
                .flat_map(|name| self.category_errors(error_type, name).iter().cloned())
                .collect()
        };

        ErrorsByType {
            build: collect(ErrorType::Build),
            checkstyle: collect(ErrorType::Checkstyle),
        }
    }

    /// First record with an exactly matching name
    pub fn error_details(&self, error_type: ErrorType, name: &str) -> Option<&ErrorRecord> {
        self.taxonomy(error_type).find(name).map(|(_, record)| record)
    }

    /// Like `error_details`, tagged with type and category
    pub fn error_by_name(&self, error_type: ErrorType, name: &str) -> Option<SelectedError> {
        self.taxonomy(error_type)
            .find(name)
            .map(|(category, record)| SelectedError::summary(error_type, category, record))
    }

    /// Implementation guide of a named error within one category
    pub fn implementation_guide(
        &self,
        error_type: ErrorType,
        name: &str,
        category: &str,
    ) -> Option<&str> {
        self.category_errors(error_type, category)
            .iter()
            .find(|record| record.name == name)
            .and_then(|record| record.implementation_guide.as_deref())
    }

    /// Case-insensitive search over names and descriptions, build errors first
    pub fn search_errors(&self, term: &str) -> Vec<SelectedError> {
        let needle = term.to_lowercase();
        let mut results = Vec::new();

        for error_type in ErrorType::ALL {
            for (category, record) in self.taxonomy(error_type).records() {
                if record.matches_lowercase(&needle) {
                    results.push(SelectedError::summary(error_type, category, record));
                }
            }
        }

        results
    }

    /// Uniformly sample `count` errors from the selected categories.
    ///
    /// Returns every selected error when there are no more than `count`.
    pub fn random_errors_by_categories<R: Rng>(
        &self,
        selection: &CategorySelection,
        count: usize,
        rng: &mut R,
    ) -> Vec<SelectedError> {
        let pool = self.selected_pool(selection);
        if pool.len() <= count {
            return pool;
        }

        pool.choose_multiple(rng, count).cloned().collect()
    }

    /// Choose the errors to seed into a generated snippet.
    ///
    /// Specific picks are used as given with refreshed implementation guides.
    /// Otherwise one or two errors are drawn from each selected category and the
    /// pool is cut down to the difficulty-adjusted count.
    pub fn errors_for_generation<R: Rng>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> GenerationOutcome {
        if !request.specific_errors.is_empty() {
            let errors = request
                .specific_errors
                .iter()
                .cloned()
                .map(|mut error| {
                    if let Some(guide) =
                        self.implementation_guide(error.error_type, &error.name, &error.category)
                    {
                        if !guide.is_empty() {
                            error.implementation_guide = guide.to_string();
                        }
                    }
                    error
                })
                .collect();
            return GenerationOutcome::new(errors);
        }

        let Some(selection) = &request.categories else {
            return GenerationOutcome::default();
        };

        let selection = if selection.is_empty() {
            tracing::debug!("Empty category selection, using fallback categories");
            &request.fallback_categories
        } else {
            selection
        };

        let mut pool = Vec::new();
        for error_type in ErrorType::ALL {
            for name in selection.get(error_type) {
                let Some(category) = self.taxonomy(error_type).category(name) else {
                    tracing::debug!("Skipping unknown {} category '{}'", error_type, name);
                    continue;
                };

                let take = category.errors.len().min(rng.gen_range(1..=2));
                pool.extend(
                    category
                        .errors
                        .choose_multiple(rng, take)
                        .map(|record| SelectedError::from_record(error_type, name.clone(), record)),
                );
            }
        }

        let adjusted = request.difficulty.adjusted_count(request.count);
        let errors = if pool.len() > adjusted {
            pool.choose_multiple(rng, adjusted).cloned().collect()
        } else {
            pool
        };

        tracing::debug!(
            "Selected {} errors for generation (difficulty {}, target {})",
            errors.len(),
            request.difficulty,
            adjusted
        );

        GenerationOutcome::new(errors)
    }

    fn selected_pool(&self, selection: &CategorySelection) -> Vec<SelectedError> {
        let mut pool = Vec::new();
        for error_type in ErrorType::ALL {
            for name in selection.get(error_type) {
                pool.extend(
                    self.category_errors(error_type, name)
                        .iter()
                        .map(|record| SelectedError::from_record(error_type, name.clone(), record)),
                );
            }
        }
        pool
    }
}

/// Locate and parse one taxonomy; in lenient mode failures leave it empty
fn load_taxonomy(
    error_type: ErrorType,
    file_name: &Path,
    locator: &DataLocator,
    strict: bool,
) -> TrainerResult<Taxonomy> {
    let Some(path) = locator.locate(file_name) else {
        if strict {
            return Err(TrainerError::data(
                file_name,
                format!("could not find {error_type} errors file"),
            ));
        }
        tracing::warn!(
            "Could not find {} errors file: {}",
            error_type,
            file_name.display()
        );
        return Ok(Taxonomy::empty(error_type));
    };

    let loaded = fs::read_to_string(&path)
        .map_err(|e| TrainerError::data(&path, format!("failed to read file: {e}")))
        .and_then(|content| Taxonomy::from_json_str(error_type, &content, &path));

    match loaded {
        Ok(taxonomy) => {
            tracing::info!(
                "Loaded {} errors from {} with {} categories and {} errors",
                error_type,
                path.display(),
                taxonomy.categories.len(),
                taxonomy.total_errors()
            );
            Ok(taxonomy)
        }
        Err(e) if !strict => {
            tracing::error!("Error loading {} errors: {}", error_type, e);
            Ok(Taxonomy::empty(error_type))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use tempfile::TempDir;

    pub(crate) const BUILD_JSON: &str = r#"{
        "CompileTimeErrors": [
            {"error_name": "Missing semicolon", "description": "Statement lacks a terminating semicolon"},
            {"error_name": "Undefined variable", "description": "Variable used before declaration"},
            {"error_name": "Incompatible types", "description": "Assigning a String to an int"}
        ],
        "RuntimeErrors": [
            {"error_name": "NullPointerException", "description": "Dereferencing a null reference",
             "implementation_guide": "Call a method on a field that is never initialised"},
            {"error_name": "ArrayIndexOutOfBoundsException", "description": "Index past the array end"}
        ],
        "LogicalErrors": [
            {"error_name": "Off-by-one error", "description": "Loop runs one iteration too many"},
            {"error_name": "String comparison with ==", "description": "Comparing strings by reference"}
        ]
    }"#;

    pub(crate) const CHECKSTYLE_JSON: &str = r#"{
        "NamingConventionChecks": [
            {"check_name": "MemberName", "description": "Member fields must be camelCase"},
            {"check_name": "MethodName", "description": "Method names must be camelCase",
             "implementation_guide": "Name a method in PascalCase"}
        ],
        "WhitespaceAndFormattingChecks": [
            {"check_name": "WhitespaceAround", "description": "Operators need surrounding whitespace"}
        ],
        "JavadocChecks": []
    }"#;

    pub(crate) fn sample_repository() -> JsonErrorRepository {
        JsonErrorRepository::from_json_strs(BUILD_JSON, CHECKSTYLE_JSON).unwrap()
    }

    fn names(errors: &[SelectedError]) -> Vec<&str> {
        errors.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_all_categories_in_file_order() {
        let repo = sample_repository();
        let listing = repo.all_categories();
        assert_eq!(listing.build, vec!["CompileTimeErrors", "RuntimeErrors", "LogicalErrors"]);
        assert_eq!(
            listing.checkstyle,
            vec!["NamingConventionChecks", "WhitespaceAndFormattingChecks", "JavadocChecks"]
        );
        assert!(repo.is_fully_loaded());
    }

    #[test]
    fn test_category_errors() {
        let repo = sample_repository();
        assert_eq!(repo.category_errors(ErrorType::Build, "RuntimeErrors").len(), 2);
        assert!(repo.category_errors(ErrorType::Build, "NamingConventionChecks").is_empty());
        assert!(repo.category_errors(ErrorType::Checkstyle, "Unknown").is_empty());
    }

    #[test]
    fn test_errors_by_categories_skips_unknown() {
        let repo = sample_repository();
        let selection = CategorySelection::from_lists(
            ["LogicalErrors", "Nope", "RuntimeErrors"],
            ["WhitespaceAndFormattingChecks"],
        );
        let errors = repo.errors_by_categories(&selection);
        assert_eq!(errors.build.len(), 4);
        assert_eq!(errors.build[0].name, "Off-by-one error");
        assert_eq!(errors.build[2].name, "NullPointerException");
        assert_eq!(errors.checkstyle.len(), 1);
        assert_eq!(errors.total(), 5);
    }

    #[test]
    fn test_error_lookups() {
        let repo = sample_repository();

        let details = repo.error_details(ErrorType::Build, "NullPointerException").unwrap();
        assert_eq!(details.description, "Dereferencing a null reference");
        assert!(repo.error_details(ErrorType::Checkstyle, "NullPointerException").is_none());

        let tagged = repo.error_by_name(ErrorType::Checkstyle, "MethodName").unwrap();
        assert_eq!(tagged.category, "NamingConventionChecks");
        assert!(tagged.implementation_guide.is_empty());

        assert_eq!(
            repo.implementation_guide(
                ErrorType::Checkstyle,
                "MethodName",
                "NamingConventionChecks"
            ),
            Some("Name a method in PascalCase")
        );
        assert_eq!(
            repo.implementation_guide(ErrorType::Checkstyle, "MethodName", "JavadocChecks"),
            None
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let repo = sample_repository();

        let results = repo.search_errors("CAMELCASE");
        assert_eq!(names(&results), vec!["MemberName", "MethodName"]);
        assert!(results.iter().all(|e| e.error_type == ErrorType::Checkstyle));

        let results = repo.search_errors("exception");
        assert_eq!(names(&results), vec!["NullPointerException", "ArrayIndexOutOfBoundsException"]);

        assert!(repo.search_errors("kotlin").is_empty());
    }

    #[test]
    fn test_random_errors_returns_all_when_few() {
        let repo = sample_repository();
        let mut rng = StdRng::seed_from_u64(7);
        let selection =
            CategorySelection::from_lists(["RuntimeErrors"], ["WhitespaceAndFormattingChecks"]);

        let errors = repo.random_errors_by_categories(&selection, 4, &mut rng);
        assert_eq!(
            names(&errors),
            vec!["NullPointerException", "ArrayIndexOutOfBoundsException", "WhitespaceAround"]
        );
        assert_eq!(
            errors[0].implementation_guide,
            "Call a method on a field that is never initialised"
        );
    }

    #[test]
    fn test_random_errors_samples_without_repeats() {
        let repo = sample_repository();
        let selection = CategorySelection::from_lists(
            ["CompileTimeErrors", "RuntimeErrors", "LogicalErrors"],
            ["NamingConventionChecks"],
        );

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let errors = repo.random_errors_by_categories(&selection, 3, &mut rng);
            assert_eq!(errors.len(), 3);
            let unique: HashSet<_> = errors.iter().map(|e| (&e.category, &e.name)).collect();
            assert_eq!(unique.len(), 3);
        }

        let mut rng = StdRng::seed_from_u64(1);
        assert!(repo
            .random_errors_by_categories(&CategorySelection::new(), 3, &mut rng)
            .is_empty());
    }

    #[test]
    fn test_generation_with_specific_errors_refreshes_guides() {
        let repo = sample_repository();
        let mut rng = StdRng::seed_from_u64(3);

        let mut pick = repo.error_by_name(ErrorType::Checkstyle, "MethodName").unwrap();
        pick.implementation_guide = "stale".to_string();
        let unknown = SelectedError {
            error_type: ErrorType::Build,
            category: "CustomErrors".to_string(),
            name: "Shadowed field".to_string(),
            description: "Local variable hides a field".to_string(),
            implementation_guide: String::new(),
        };

        let outcome = repo.errors_for_generation(
            &GenerationRequest::from_specific(vec![pick, unknown]),
            &mut rng,
        );
        assert_eq!(outcome.errors.len(), 2);
        assert_eq!(outcome.errors[0].implementation_guide, "Name a method in PascalCase");
        assert!(outcome.errors[1].implementation_guide.is_empty());
        assert_eq!(
            outcome.problem_descriptions[1],
            "Build Error - Shadowed field: Local variable hides a field (Category: CustomErrors)"
        );
    }

    #[test]
    fn test_generation_takes_one_or_two_per_category() {
        let repo = sample_repository();
        let selection = CategorySelection::from_lists(
            ["CompileTimeErrors", "LogicalErrors"],
            Vec::<String>::new(),
        );

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let request =
                GenerationRequest::from_categories(selection.clone(), 10, Difficulty::Medium);
            let outcome = repo.errors_for_generation(&request, &mut rng);

            let in_category =
                |name: &str| outcome.errors.iter().filter(|e| e.category == name).count();
            let compile = in_category("CompileTimeErrors");
            let logical = in_category("LogicalErrors");
            assert!((1..=2).contains(&compile));
            assert!((1..=2).contains(&logical));
            assert_eq!(outcome.problem_descriptions.len(), outcome.errors.len());
        }
    }

    #[test]
    fn test_generation_caps_at_adjusted_count() {
        let repo = sample_repository();
        let selection = CategorySelection::from_lists(
            ["CompileTimeErrors", "RuntimeErrors", "LogicalErrors"],
            ["NamingConventionChecks", "WhitespaceAndFormattingChecks"],
        );

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            // easy with count 4 targets max(2, 4 - 2) = 2; five categories give 5+ candidates
            let request =
                GenerationRequest::from_categories(selection.clone(), 4, Difficulty::Easy);
            assert_eq!(repo.errors_for_generation(&request, &mut rng).errors.len(), 2);
        }
    }

    #[test]
    fn test_generation_empty_selection_uses_fallback() {
        let repo = sample_repository();
        let mut rng = StdRng::seed_from_u64(11);

        let fallback = CategorySelection::from_lists(["RuntimeErrors"], Vec::<String>::new());
        let request =
            GenerationRequest::from_categories(CategorySelection::new(), 4, Difficulty::Hard)
                .with_fallback(fallback);
        let outcome = repo.errors_for_generation(&request, &mut rng);
        assert!(!outcome.errors.is_empty());
        assert!(outcome.errors.iter().all(|e| e.category == "RuntimeErrors"));
    }

    #[test]
    fn test_generation_without_any_selection() {
        let repo = sample_repository();
        let mut rng = StdRng::seed_from_u64(5);
        let request = GenerationRequest {
            categories: None,
            ..GenerationRequest::from_specific(Vec::new())
        };
        assert_eq!(repo.errors_for_generation(&request, &mut rng), GenerationOutcome::default());
    }

    #[test]
    fn test_load_from_search_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("trainer_build.json"), BUILD_JSON).unwrap();
        fs::write(temp_dir.path().join("trainer_checkstyle.json"), CHECKSTYLE_JSON).unwrap();

        let config = DataConfig {
            build_errors_file: PathBuf::from("trainer_build.json"),
            checkstyle_errors_file: PathBuf::from("trainer_checkstyle.json"),
            search_dirs: vec![temp_dir.path().to_path_buf()],
            strict: true,
        };

        let repo = JsonErrorRepository::load(&config).unwrap();
        let status = repo.load_status();
        assert!(status.is_fully_loaded());
        assert_eq!(status.build, Some(temp_dir.path().join("trainer_build.json")));
        assert_eq!(repo.all_categories().build.len(), 3);
    }

    #[test]
    fn test_lenient_load_leaves_missing_taxonomy_empty() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("trainer_build.json"), BUILD_JSON).unwrap();
        fs::write(temp_dir.path().join("trainer_broken.json"), "{ not json").unwrap();

        let locator = DataLocator::new(vec![temp_dir.path().to_path_buf()]).with_anchor(None);
        let mut config = DataConfig {
            build_errors_file: PathBuf::from("trainer_build.json"),
            checkstyle_errors_file: PathBuf::from("trainer_missing.json"),
            search_dirs: Vec::new(),
            strict: false,
        };

        let repo = JsonErrorRepository::load_with_locator(&config, &locator).unwrap();
        assert!(!repo.is_fully_loaded());
        assert_eq!(repo.all_categories().build.len(), 3);
        assert!(repo.all_categories().checkstyle.is_empty());

        config.checkstyle_errors_file = PathBuf::from("trainer_broken.json");
        let repo = JsonErrorRepository::load_with_locator(&config, &locator).unwrap();
        assert!(repo.load_status().checkstyle.is_none());
    }

    #[test]
    fn test_strict_load_reports_failures() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("trainer_build.json"), BUILD_JSON).unwrap();
        fs::write(temp_dir.path().join("trainer_broken.json"), "[]").unwrap();

        let locator = DataLocator::new(vec![temp_dir.path().to_path_buf()]).with_anchor(None);
        let mut config = DataConfig {
            build_errors_file: PathBuf::from("trainer_build.json"),
            checkstyle_errors_file: PathBuf::from("trainer_missing.json"),
            search_dirs: Vec::new(),
            strict: true,
        };

        let err = JsonErrorRepository::load_with_locator(&config, &locator).unwrap_err();
        assert!(err.to_string().contains("could not find checkstyle errors file"));

        config.checkstyle_errors_file = PathBuf::from("trainer_broken.json");
        let err = JsonErrorRepository::load_with_locator(&config, &locator).unwrap_err();
        assert!(matches!(err, TrainerError::Data { .. }));
    }

    #[test]
    fn test_category_summaries() {
        let repo = sample_repository();
        let summaries = repo.category_summaries(ErrorType::Checkstyle);
        assert_eq!(
            summaries[0],
            CategorySummary {
                name: "NamingConventionChecks".to_string(),
                error_count: 2,
            }
        );
        assert_eq!(summaries[2].error_count, 0);
    }
}
