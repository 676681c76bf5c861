//! Java Review Trainer - Practice reviewing Java code with known, seeded problems
//!
//! Architecture: Clean Architecture - Library interface serves as the application layer
//! - Pure domain logic separated from file discovery and terminal concerns
//! - The repository is the only component reading taxonomy files
//! - The Trainer facade ties configuration, sampling and review scoring together

pub mod config;
pub mod display;
pub mod domain;
pub mod repository;
pub mod review;
pub mod selection;

// Re-export main types for convenient access
pub use domain::{
    CategoryListing, CategorySelection, CodeLength, CodeParams, Difficulty, ErrorRecord,
    ErrorType, ProblemSet, SelectedError, Taxonomy, TrainerError, TrainerResult,
};

pub use config::{ConfigBuilder, ProblemAreaDef, TrainerConfig};

pub use repository::{
    CategorySummary, DataLocator, GenerationOutcome, GenerationRequest, JsonErrorRepository,
    LoadStatus,
};

pub use selection::{map_problem_areas, SelectionMode, SpecificErrorSelection};

pub use review::{analyze_review, ReviewAnalysis, ReviewAttempt, ReviewSession};

pub use display::{add_line_numbers, DisplayFormatter, DisplayOptions, OutputFormat};

use rand::Rng;
use std::path::Path;

/// Main entry point: a loaded repository with the configuration it was built from
pub struct Trainer {
    config: TrainerConfig,
    repository: JsonErrorRepository,
    formatter: DisplayFormatter,
}

impl Trainer {
    /// Create a trainer with the given configuration, loading the taxonomies it names
    pub fn new_with_config(config: TrainerConfig) -> TrainerResult<Self> {
        config.validate()?;
        let repository = JsonErrorRepository::load(&config.data)?;
        Self::with_repository(config, repository)
    }

    /// Create a trainer around an already loaded repository
    pub fn with_repository(
        config: TrainerConfig,
        repository: JsonErrorRepository,
    ) -> TrainerResult<Self> {
        config.validate()?;
        if !repository.is_fully_loaded() {
            tracing::warn!("Not all taxonomy files were loaded; some categories will be missing");
        }

        Ok(Self {
            config,
            repository,
            formatter: DisplayFormatter::default(),
        })
    }

    /// Create a trainer with default configuration
    pub fn new() -> TrainerResult<Self> {
        Self::new_with_config(TrainerConfig::default())
    }

    /// Create a trainer loading configuration from file
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> TrainerResult<Self> {
        let config = TrainerConfig::load_from_file(path)?;
        Self::new_with_config(config)
    }

    /// Create a trainer from the first default config file in the working directory
    pub fn discover() -> TrainerResult<Self> {
        let config = TrainerConfig::discover_in(std::env::current_dir()?)?;
        Self::new_with_config(config)
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn repository(&self) -> &JsonErrorRepository {
        &self.repository
    }

    /// Categories mapped by the named problem areas
    pub fn selection_for_areas<S: AsRef<str>>(
        &self,
        areas: &[S],
    ) -> TrainerResult<CategorySelection> {
        map_problem_areas(&self.config.problem_areas, areas)
    }

    /// Category request using the configured count, difficulty and fallback categories
    pub fn category_request(&self, selection: CategorySelection) -> GenerationRequest {
        let generation = &self.config.generation;
        GenerationRequest::from_categories(selection, generation.error_count, generation.difficulty)
            .with_fallback(generation.default_categories.clone())
    }

    /// Category request for problem areas.
    ///
    /// Selecting no areas selects no errors; the fallback categories are not used.
    pub fn area_request<S: AsRef<str>>(&self, areas: &[S]) -> TrainerResult<GenerationRequest> {
        let selection = self.selection_for_areas(areas)?;
        let nothing_selected = selection.is_empty();
        let request = self.category_request(selection);
        Ok(if nothing_selected {
            request.with_fallback(CategorySelection::new())
        } else {
            request
        })
    }

    /// Choose errors for a request and wrap them in a new problem set
    pub fn sample_problem_set<R: Rng>(
        &self,
        request: &GenerationRequest,
        code_length: CodeLength,
        rng: &mut R,
    ) -> ProblemSet {
        let outcome = self.repository.errors_for_generation(request, rng);
        let params = CodeParams {
            difficulty: request.difficulty,
            code_length,
        };

        let set = ProblemSet::new(params, outcome.errors, outcome.problem_descriptions);
        tracing::info!("Created problem set {} with {} errors", set.id, set.errors.len());
        set
    }

    /// Start reviewing a problem set with the configured number of attempts
    pub fn start_review(&self, problem_set: ProblemSet) -> TrainerResult<ReviewSession> {
        ReviewSession::new(problem_set, self.config.review.max_iterations)
    }

    /// Replace the options used by [`Trainer::format_problem_set`]
    pub fn with_display_options(mut self, options: DisplayOptions) -> Self {
        self.formatter = DisplayFormatter::new(options);
        self
    }

    /// Format a problem set for output
    pub fn format_problem_set(
        &self,
        set: &ProblemSet,
        format: OutputFormat,
    ) -> TrainerResult<String> {
        self.formatter.format_problem_set(set, format)
    }
}

/// Convenience function to create a trainer with default settings
pub fn create_trainer() -> TrainerResult<Trainer> {
    Trainer::new()
}

/// Convenience function to sample a problem set for problem areas with default settings
pub fn sample_for_areas<S: AsRef<str>, R: Rng>(
    areas: &[S],
    rng: &mut R,
) -> TrainerResult<ProblemSet> {
    let trainer = Trainer::new()?;
    let request = trainer.area_request(areas)?;
    Ok(trainer.sample_problem_set(&request, trainer.config().generation.code_length, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::tests::sample_repository;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn trainer() -> Trainer {
        Trainer::with_repository(TrainerConfig::default(), sample_repository()).unwrap()
    }

    #[test]
    fn test_trainer_rejects_invalid_config() {
        let mut config = TrainerConfig::default();
        config.review.max_iterations = 0;
        assert!(Trainer::with_repository(config, sample_repository()).is_err());
    }

    #[test]
    fn test_category_request_uses_configuration() {
        let config = ConfigBuilder::new()
            .error_count(6)
            .difficulty(Difficulty::Hard)
            .build()
            .unwrap();
        let trainer = Trainer::with_repository(config, sample_repository()).unwrap();

        let request = trainer.category_request(CategorySelection::new());
        assert_eq!(request.count, 6);
        assert_eq!(request.difficulty, Difficulty::Hard);
        assert_eq!(request.fallback_categories, trainer.config().generation.default_categories);
    }

    #[test]
    fn test_sample_problem_set_for_areas() {
        let trainer = trainer();
        let selection = trainer.selection_for_areas(&["Logical", "Style"]).unwrap();
        let request = trainer.category_request(selection);

        let mut rng = StdRng::seed_from_u64(42);
        let set = trainer.sample_problem_set(&request, CodeLength::Short, &mut rng);

        assert!(!set.is_empty());
        assert_eq!(set.params.code_length, CodeLength::Short);
        assert_eq!(set.params.difficulty, Difficulty::Medium);
        assert_eq!(set.errors.len(), set.problem_descriptions.len());
        assert!(set
            .errors
            .iter()
            .all(|e| e.category == "LogicalErrors" || e.error_type == ErrorType::Checkstyle));

        let json = trainer.format_problem_set(&set, OutputFormat::Json).unwrap();
        assert!(json.contains(&set.id.to_string()));
    }

    #[test]
    fn test_no_areas_selects_no_errors() {
        let trainer = trainer();
        let request = trainer.area_request::<&str>(&[]).unwrap();
        assert!(request.fallback_categories.is_empty());

        let mut rng = StdRng::seed_from_u64(1);
        let set = trainer.sample_problem_set(&request, CodeLength::Medium, &mut rng);
        assert!(set.is_empty());

        let set = sample_for_areas::<&str, _>(&[], &mut rng).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_display_options_reach_problem_set_output() {
        let trainer = trainer().with_display_options(DisplayOptions {
            use_colors: false,
            ..Default::default()
        });
        let request = trainer.area_request(&["Logical"]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let set = trainer.sample_problem_set(&request, CodeLength::Short, &mut rng);

        let human = trainer.format_problem_set(&set, OutputFormat::Human).unwrap();
        assert!(!human.contains("\x1b["));
    }

    #[test]
    fn test_unknown_area_is_reported() {
        let trainer = trainer();
        let err = trainer.selection_for_areas(&["Concurrency"]).unwrap_err();
        assert!(matches!(err, TrainerError::NotFound { .. }));
    }

    #[test]
    fn test_review_round_trip() {
        let trainer = trainer();
        let npe = trainer
            .repository()
            .error_by_name(ErrorType::Build, "NullPointerException")
            .unwrap();
        let request = GenerationRequest::from_specific(vec![npe]);
        let mut rng = StdRng::seed_from_u64(0);
        let set = trainer.sample_problem_set(&request, CodeLength::Medium, &mut rng);

        let mut session = trainer.start_review(set).unwrap();
        assert_eq!(session.max_iterations(), 3);
        let attempt = session.submit("Possible null pointer exception in getName").unwrap();
        assert!(attempt.analysis.review_sufficient);
        assert!(session.is_complete());
    }

    #[test]
    fn test_bundled_taxonomies_load() {
        // cargo runs tests from the package root, where data/ holds the bundled files
        let mut config = TrainerConfig::default();
        config.data.strict = true;
        let trainer = Trainer::new_with_config(config).unwrap();

        assert!(trainer.repository().is_fully_loaded());
        let listing = trainer.repository().all_categories();
        assert_eq!(listing.build, vec!["CompileTimeErrors", "RuntimeErrors", "LogicalErrors"]);
        for area in &trainer.config().problem_areas {
            for category in area.mapping().checkstyle {
                assert!(listing.checkstyle.contains(&category), "missing {category}");
            }
        }
    }

    #[test]
    fn test_convenience_functions() {
        let mut rng = StdRng::seed_from_u64(9);
        let set = sample_for_areas(&["Design"], &mut rng).unwrap();
        assert!(!set.is_empty());
        assert!(create_trainer().is_ok());
    }
}
