//! Java Review Trainer CLI - Command-line interface for code review practice
//!
//! CDD Principle: Application Layer - CLI coordinates user interactions with domain services
//! - Translates user commands to repository, selection and review operations
//! - Handles external concerns like file I/O, process exit codes, and terminal output
//! - Provides clean separation between user interface and business logic

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use java_review_trainer::display::{snippet_fingerprint, DOWNLOAD_FILE_NAME};
use java_review_trainer::selection::filter_records;
use java_review_trainer::{
    CategorySelection, CodeLength, Difficulty, DisplayFormatter, DisplayOptions, ErrorType,
    GenerationRequest, ProblemSet, ReviewSession, SelectedError, SelectionMode,
    SpecificErrorSelection, Trainer, TrainerConfig, TrainerError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

/// Java Review Trainer - Practice finding seeded problems in Java code
#[derive(Parser)]
#[command(name = "java-review-trainer")]
#[command(version = "0.1.0")]
#[command(about = "Practice Java code review against known build and checkstyle errors")]
#[command(long_about = "Java Review Trainer picks known Java build and checkstyle errors from JSON taxonomies, shows code with line numbers, and scores reviews against the problems that were seeded into the code.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List error categories with their error counts
    Categories {
        /// Only show one taxonomy
        #[arg(short = 't', long = "type", value_enum)]
        error_type: Option<ErrorTypeArg>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// List the errors of one category
    Errors {
        /// Taxonomy the category belongs to
        #[arg(value_enum)]
        error_type: ErrorTypeArg,

        /// Category name
        category: String,

        /// Only keep errors whose name or description contains this text
        #[arg(long)]
        filter: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Explain a specific error
    Explain {
        /// Taxonomy the error belongs to
        #[arg(value_enum)]
        error_type: ErrorTypeArg,

        /// Error name
        name: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Search error names and descriptions
    Search {
        /// Search term, case-insensitive
        term: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Show problem areas and the categories they map to
    Areas {
        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Build a problem set of known errors
    Sample {
        /// Problem areas (standard mode)
        #[arg(short, long = "area", action = clap::ArgAction::Append)]
        areas: Vec<String>,

        /// Build error categories (advanced mode)
        #[arg(long, action = clap::ArgAction::Append, conflicts_with = "areas")]
        build: Vec<String>,

        /// Checkstyle categories (advanced mode)
        #[arg(long, action = clap::ArgAction::Append, conflicts_with = "areas")]
        checkstyle: Vec<String>,

        /// Specific errors as NAME or TYPE:NAME
        #[arg(short = 'e', long = "error", action = clap::ArgAction::Append)]
        specific: Vec<String>,

        /// Base number of errors before difficulty adjustment
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Difficulty level
        #[arg(short, long, value_enum)]
        difficulty: Option<DifficultyArg>,

        /// Code length
        #[arg(short, long, value_enum)]
        length: Option<LengthArg>,

        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Show implementation guides
        #[arg(long)]
        guides: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Save the problem set as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show a Java file with line numbers
    Show {
        /// Java source file
        code: PathBuf,

        /// Problem set JSON for the instructor view
        #[arg(short, long)]
        problems: Option<PathBuf>,

        /// List the known problems below the code
        #[arg(long, requires = "problems")]
        instructor: bool,

        /// Copy the code into this directory for download
        #[arg(long)]
        download: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Score a review against the known problems
    Review {
        /// Problem set JSON; required unless the session file already exists
        #[arg(short, long)]
        problems: Option<PathBuf>,

        /// Review text file (reads stdin when omitted)
        #[arg(short, long)]
        review: Option<PathBuf>,

        /// Session file carrying attempts across runs
        #[arg(short, long)]
        session: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Validate configuration file
    ValidateConfig {
        /// Configuration file to validate
        config_file: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, ValueEnum, PartialEq)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for java_review_trainer::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => Self::Human,
            OutputFormatArg::Json => Self::Json,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum ErrorTypeArg {
    Build,
    Checkstyle,
}

impl From<ErrorTypeArg> for ErrorType {
    fn from(arg: ErrorTypeArg) -> Self {
        match arg {
            ErrorTypeArg::Build => ErrorType::Build,
            ErrorTypeArg::Checkstyle => ErrorType::Checkstyle,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum LengthArg {
    Short,
    Medium,
    Long,
}

impl From<LengthArg> for CodeLength {
    fn from(arg: LengthArg) -> Self {
        match arg {
            LengthArg::Short => CodeLength::Short,
            LengthArg::Medium => CodeLength::Medium,
            LengthArg::Long => CodeLength::Long,
        }
    }
}

/// Choices for the `sample` command
struct SampleArgs {
    areas: Vec<String>,
    build: Vec<String>,
    checkstyle: Vec<String>,
    specific: Vec<String>,
    count: Option<usize>,
    difficulty: Option<DifficultyArg>,
    length: Option<LengthArg>,
    seed: Option<u64>,
    guides: bool,
    format: OutputFormatArg,
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Run the command and handle the result
    match run_command(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run_command(cli: Cli) -> Result<i32> {
    let use_colors = !cli.no_color;

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Categories { error_type, format } => {
            let trainer = load_trainer(config_path)?;
            run_categories(&trainer, error_type.map(Into::into), format, use_colors)
        }
        Commands::Errors { error_type, category, filter, format } => {
            let trainer = load_trainer(config_path)?;
            run_errors(
                &trainer,
                error_type.into(),
                &category,
                filter.as_deref(),
                format,
                use_colors,
            )
        }
        Commands::Explain { error_type, name, format } => {
            let trainer = load_trainer(config_path)?;
            run_explain(&trainer, error_type.into(), &name, format, use_colors)
        }
        Commands::Search { term, format } => {
            run_search(&load_trainer(config_path)?, &term, format, use_colors)
        }
        Commands::Areas { format } => run_areas(&load_config(config_path)?, format, use_colors),
        Commands::Sample {
            areas,
            build,
            checkstyle,
            specific,
            count,
            difficulty,
            length,
            seed,
            guides,
            format,
            output,
        } => {
            let args = SampleArgs {
                areas,
                build,
                checkstyle,
                specific,
                count,
                difficulty,
                length,
                seed,
                guides,
                format,
                output,
            };
            run_sample(&load_trainer(config_path)?, args, use_colors)
        }
        Commands::Show { code, problems, instructor, download, format } => run_show(
            &code,
            problems.as_deref(),
            instructor,
            download.as_deref(),
            format,
            use_colors,
        ),
        Commands::Review { problems, review, session, format } => {
            let review_text = read_review_text(review.as_deref())?;
            run_review(
                &load_trainer(config_path)?,
                problems.as_deref(),
                &review_text,
                session.as_deref(),
                format,
                use_colors,
            )
        }
        Commands::ValidateConfig { config_file } => {
            run_validate_config(config_file.or_else(|| config_path.map(Path::to_path_buf)))
        }
    }
}

fn load_config(config_path: Option<&Path>) -> Result<TrainerConfig> {
    let config = match config_path {
        Some(path) => TrainerConfig::load_from_file(path)?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read the working directory")?;
            TrainerConfig::discover_in(cwd)?
        }
    };
    Ok(config)
}

fn load_trainer(config_path: Option<&Path>) -> Result<Trainer> {
    let trainer = match config_path {
        Some(path) => Trainer::from_config_file(path),
        None => Trainer::discover(),
    }
    .context("Failed to load error taxonomies")?;

    let status = trainer.repository().load_status();
    let sources = [
        (ErrorType::Build, &status.build),
        (ErrorType::Checkstyle, &status.checkstyle),
    ];
    for (error_type, source) in sources {
        match source {
            Some(path) => tracing::debug!("{} taxonomy loaded from {}", error_type, path.display()),
            None => tracing::warn!("{} taxonomy is empty", error_type),
        }
    }

    Ok(trainer)
}

fn formatter(format: OutputFormatArg, use_colors: bool) -> DisplayFormatter {
    DisplayFormatter::new(DisplayOptions {
        use_colors: use_colors && format == OutputFormatArg::Human,
        ..Default::default()
    })
}

fn emit(output: &str) {
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
}

fn run_categories(
    trainer: &Trainer,
    error_type: Option<ErrorType>,
    format: OutputFormatArg,
    use_colors: bool,
) -> Result<i32> {
    let types: Vec<ErrorType> = match error_type {
        Some(error_type) => vec![error_type],
        None => ErrorType::ALL.to_vec(),
    };

    let sections: Vec<_> = types
        .into_iter()
        .map(|error_type| (error_type, trainer.repository().category_summaries(error_type)))
        .collect();

    emit(&formatter(format, use_colors).format_categories(&sections, format.into())?);
    Ok(0)
}

fn run_errors(
    trainer: &Trainer,
    error_type: ErrorType,
    category: &str,
    filter: Option<&str>,
    format: OutputFormatArg,
    use_colors: bool,
) -> Result<i32> {
    let repository = trainer.repository();
    if repository.taxonomy(error_type).category(category).is_none() {
        eprintln!("❌ Unknown {} category '{}'", error_type, category);
        eprintln!("Available: {}", repository.taxonomy(error_type).category_names().join(", "));
        return Ok(1);
    }

    let records = filter_records(
        repository.category_errors(error_type, category),
        filter.unwrap_or(""),
    );
    let errors: Vec<_> = records
        .into_iter()
        .map(|record| SelectedError::from_record(error_type, category, record))
        .collect();

    emit(&formatter(format, use_colors).format_errors(&errors, format.into())?);
    Ok(0)
}

fn run_explain(
    trainer: &Trainer,
    error_type: ErrorType,
    name: &str,
    format: OutputFormatArg,
    use_colors: bool,
) -> Result<i32> {
    let repository = trainer.repository();
    let Some(mut error) = repository.error_by_name(error_type, name) else {
        eprintln!("❌ {} '{}' not found", error_type.label(), name);
        let suggestions = repository.search_errors(name);
        if !suggestions.is_empty() {
            println!();
            println!("Similar errors:");
            for suggestion in suggestions.iter().take(5) {
                println!("  - {} ({})", suggestion.name, suggestion.category);
            }
        }
        return Ok(1);
    };

    if let Some(guide) = repository.implementation_guide(error_type, &error.name, &error.category) {
        error.implementation_guide = guide.to_string();
    }

    emit(&formatter(format, use_colors).format_error_details(&error, format.into())?);
    Ok(0)
}

fn run_search(
    trainer: &Trainer,
    term: &str,
    format: OutputFormatArg,
    use_colors: bool,
) -> Result<i32> {
    let results = trainer.repository().search_errors(term);
    emit(&formatter(format, use_colors).format_errors(&results, format.into())?);
    Ok(if results.is_empty() { 1 } else { 0 })
}

fn run_areas(config: &TrainerConfig, format: OutputFormatArg, use_colors: bool) -> Result<i32> {
    if format == OutputFormatArg::Human {
        println!("{}\n", SelectionMode::Standard.help());
    }
    let output = formatter(format, use_colors)
        .format_problem_areas(&config.problem_areas, format.into())?;
    emit(&output);
    Ok(0)
}

fn run_sample(trainer: &Trainer, args: SampleArgs, use_colors: bool) -> Result<i32> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generation = &trainer.config().generation;
    let difficulty = args.difficulty.map(Difficulty::from).unwrap_or(generation.difficulty);
    let code_length = args.length.map(CodeLength::from).unwrap_or(generation.code_length);

    let request = if !args.specific.is_empty() {
        let picks = resolve_specific_errors(trainer, &args.specific)?;
        let mut request = GenerationRequest::from_specific(picks.into_errors());
        request.difficulty = difficulty;
        request
    } else {
        let mode = if args.build.is_empty() && args.checkstyle.is_empty() {
            SelectionMode::Standard
        } else {
            SelectionMode::Advanced
        };
        tracing::debug!("Sampling in {} mode", mode);

        let mut request = match mode {
            SelectionMode::Standard => trainer.area_request(args.areas.as_slice())?,
            SelectionMode::Advanced => trainer
                .category_request(CategorySelection::from_lists(args.build, args.checkstyle)),
        };
        request.difficulty = difficulty;
        if let Some(count) = args.count {
            if count == 0 {
                return Err(TrainerError::selection("--count must be at least 1").into());
            }
            request.count = count;
        }
        request
    };

    let set = trainer.sample_problem_set(&request, code_length, &mut rng);

    if let Some(output) = &args.output {
        set.save_to_file(output)
            .with_context(|| format!("Failed to write problem set to {}", output.display()))?;
        eprintln!("💾 Problem set saved to {}", output.display());
    }

    let formatter = DisplayFormatter::new(DisplayOptions {
        use_colors: use_colors && args.format == OutputFormatArg::Human,
        show_implementation_guides: args.guides,
        ..Default::default()
    });
    emit(&formatter.format_problem_set(&set, args.format.into())?);

    Ok(if set.is_empty() { 1 } else { 0 })
}

/// Resolve `NAME` or `TYPE:NAME` arguments; bare names are looked up in build errors first
fn resolve_specific_errors(trainer: &Trainer, specs: &[String]) -> Result<SpecificErrorSelection> {
    let repository = trainer.repository();
    let mut picks = SpecificErrorSelection::new();

    for spec in specs {
        let typed = spec
            .split_once(':')
            .and_then(|(prefix, name)| prefix.parse::<ErrorType>().ok().map(|t| (t, name.trim())));

        let found = match typed {
            Some((error_type, name)) => repository.error_by_name(error_type, name),
            None => ErrorType::ALL
                .into_iter()
                .find_map(|error_type| repository.error_by_name(error_type, spec.trim())),
        };

        let error = found.ok_or_else(|| TrainerError::not_found(format!("error '{spec}'")))?;
        if !picks.add(error) {
            tracing::warn!("Ignoring duplicate error '{}'", spec);
        }
    }

    Ok(picks)
}

fn run_show(
    code_path: &Path,
    problems: Option<&Path>,
    instructor: bool,
    download: Option<&Path>,
    format: OutputFormatArg,
    use_colors: bool,
) -> Result<i32> {
    let code = fs::read_to_string(code_path)
        .with_context(|| format!("Failed to read code file {}", code_path.display()))?;
    let set = problems
        .map(ProblemSet::load_from_file)
        .transpose()
        .context("Failed to load problem set")?;

    tracing::debug!("Showing snippet {}", snippet_fingerprint(&code));

    let formatter = DisplayFormatter::new(DisplayOptions {
        use_colors: use_colors && format == OutputFormatArg::Human,
        show_known_problems: instructor,
        show_implementation_guides: false,
    });
    emit(&formatter.format_code(&code, set.as_ref(), format.into())?);

    if let Some(dir) = download {
        fs::create_dir_all(dir)?;
        let target = dir.join(DOWNLOAD_FILE_NAME);
        fs::write(&target, &code).with_context(|| format!("Failed to write {}", target.display()))?;
        eprintln!("💾 Code saved to {}", target.display());
    }

    Ok(0)
}

fn read_review_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read review file {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("Failed to read review from stdin")?;
            Ok(text)
        }
    }
}

fn run_review(
    trainer: &Trainer,
    problems: Option<&Path>,
    review_text: &str,
    session_path: Option<&Path>,
    format: OutputFormatArg,
    use_colors: bool,
) -> Result<i32> {
    let existing = session_path.filter(|path| path.is_file());

    let mut session = match (existing, problems) {
        (Some(path), _) => ReviewSession::load_from_file(path)?,
        (None, Some(problems)) => trainer.start_review(ProblemSet::load_from_file(problems)?)?,
        (None, None) => bail!("--problems is required to start a new review session"),
    };

    if let Some(problems) = problems.filter(|_| existing.is_some()) {
        let set = ProblemSet::load_from_file(problems)?;
        if set.id != session.problem_set().id {
            bail!(
                "Session {} belongs to a different problem set",
                session_path.map(|p| p.display().to_string()).unwrap_or_default()
            );
        }
    }

    if let Err(e) = session.submit(review_text) {
        eprintln!("❌ {e}");
        return Ok(1);
    }

    if let Some(path) = session_path {
        session
            .save_to_file(path)
            .with_context(|| format!("Failed to save review session to {}", path.display()))?;
    }

    emit(&formatter(format, use_colors).format_review(&session, format.into())?);

    let sufficient = session.latest().is_some_and(|a| a.analysis.review_sufficient);
    Ok(if sufficient { 0 } else { 1 })
}

fn run_validate_config(config_path: Option<PathBuf>) -> Result<i32> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from("java_review_trainer.yaml"));

    println!("Validating configuration: {}", config_path.display());

    match TrainerConfig::load_from_file(&config_path) {
        Ok(config) => {
            println!("✅ Configuration is valid");

            println!("📊 Configuration summary:");
            println!("  Problem areas: {}", config.problem_areas.len());
            println!("  Build errors file: {}", config.data.build_errors_file.display());
            println!("  Checkstyle errors file: {}", config.data.checkstyle_errors_file.display());
            println!(
                "  Errors per problem set: {} ({})",
                config.generation.error_count, config.generation.difficulty
            );
            println!("  Review attempts: {}", config.review.max_iterations);
            println!("  Fingerprint: {}", config.fingerprint());

            Ok(0)
        }
        Err(e) => {
            eprintln!("❌ Configuration validation failed: {e}");
            Ok(1)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
