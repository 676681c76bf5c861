//! Terminal and JSON rendering of taxonomies, problem sets and reviews
//!
//! CDD Principle: Anti-Corruption Layer - Formatters translate domain objects to external formats
//! - Problem sets, code snippets and review sessions become human text or JSON
//! - Each output format is handled in one place
//! - Domain logic remains pure while supporting multiple presentation needs

use crate::config::ProblemAreaDef;
use crate::domain::{ErrorType, ProblemSet, SelectedError, TrainerError, TrainerResult};
use crate::repository::CategorySummary;
use crate::review::ReviewSession;
use serde_json::Value as JsonValue;
use sha2::{Digest, Sha256};

/// File name used when the code snippet is saved for download
pub const DOWNLOAD_FILE_NAME: &str = "java_review_problem.java";

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format with colors
    Human,
    /// JSON format for programmatic consumption
    Json,
}

/// Options for customizing output
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    /// Whether to use colored output (for human format)
    pub use_colors: bool,
    /// Instructor view: list the known problems next to the code
    pub show_known_problems: bool,
    /// Whether to print implementation guides
    pub show_implementation_guides: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            use_colors: true,
            show_known_problems: false,
            show_implementation_guides: false,
        }
    }
}

/// Prefix each line with a right-aligned 1-based line number
pub fn add_line_numbers(code: &str) -> String {
    let lines: Vec<&str> = code.lines().collect();
    let width = lines.len().to_string().len();

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>width$} | {}", i + 1, line, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Short content hash identifying a code snippet
pub fn snippet_fingerprint(code: &str) -> String {
    let digest = Sha256::digest(code.as_bytes());
    digest.iter().take(6).map(|b| format!("{b:02x}")).collect()
}

/// `"<Build|Checkstyle> Error - <name>: <description> (Category: <category>)"`
pub fn problem_description(error: &SelectedError) -> String {
    error.problem_description()
}

/// Renders domain objects in the requested format
pub struct DisplayFormatter {
    options: DisplayOptions,
}

impl DisplayFormatter {
    pub fn new(options: DisplayOptions) -> Self {
        Self { options }
    }

    /// Category names with error counts, one section per taxonomy
    pub fn format_categories(
        &self,
        sections: &[(ErrorType, Vec<CategorySummary>)],
        format: OutputFormat,
    ) -> TrainerResult<String> {
        if format == OutputFormat::Json {
            let mut json = serde_json::Map::new();
            for (error_type, summaries) in sections {
                json.insert(
                    error_type.as_str().to_string(),
                    serde_json::to_value(summaries).map_err(json_error)?,
                );
            }
            return to_pretty_json(&JsonValue::Object(json));
        }

        let mut output = String::new();
        for (error_type, summaries) in sections {
            let heading = format!(
                "📂 {}s ({} categories)",
                error_type.label(),
                summaries.len()
            );
            output.push_str(&self.paint("1", &heading));
            output.push('\n');
            if summaries.is_empty() {
                output.push_str("  (none loaded)\n");
            }
            for summary in summaries {
                output.push_str(&format!(
                    "  - {} {}\n",
                    summary.name,
                    self.paint("2", &format!("({} errors)", summary.error_count))
                ));
            }
            output.push('\n');
        }
        Ok(output)
    }

    /// A list of tagged errors
    pub fn format_errors(
        &self,
        errors: &[SelectedError],
        format: OutputFormat,
    ) -> TrainerResult<String> {
        if format == OutputFormat::Json {
            return to_pretty_json(&serde_json::to_value(errors).map_err(json_error)?);
        }

        if errors.is_empty() {
            return Ok("No matching errors found\n".to_string());
        }

        let mut output = String::new();
        for error in errors {
            output.push_str(&self.format_error_line(error));
        }
        output.push_str(&format!(
            "\n{} error{}\n",
            errors.len(),
            if errors.len() == 1 { "" } else { "s" }
        ));
        Ok(output)
    }

    /// Full details of one error, including its implementation guide
    pub fn format_error_details(
        &self,
        error: &SelectedError,
        format: OutputFormat,
    ) -> TrainerResult<String> {
        if format == OutputFormat::Json {
            return to_pretty_json(&serde_json::to_value(error).map_err(json_error)?);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "📖 {}: {}\n",
            error.error_type.label(),
            self.paint("1", &error.name)
        ));
        output.push_str(&format!("📂 Category: {}\n\n", error.category));
        output.push_str("📝 Description:\n");
        output.push_str(&format!("   {}\n", error.description));
        if !error.implementation_guide.is_empty() {
            output.push_str("\n🛠  Implementation guide:\n");
            output.push_str(&format!("   {}\n", error.implementation_guide));
        }
        Ok(output)
    }

    /// A sampled problem set
    pub fn format_problem_set(
        &self,
        set: &ProblemSet,
        format: OutputFormat,
    ) -> TrainerResult<String> {
        if format == OutputFormat::Json {
            return set.to_json();
        }

        let mut output = String::new();
        output.push_str(&self.paint("1", &format!("🧩 Problem set {}", set.id)));
        output.push('\n');
        output.push_str(&format!(
            "   Difficulty: {} - {}\n",
            set.params.difficulty,
            set.params.difficulty.explanation()
        ));
        output.push_str(&format!(
            "   Length: {} - {}\n\n",
            set.params.code_length,
            set.params.code_length.explanation()
        ));

        if set.is_empty() {
            output.push_str(
                "⚠️  No errors selected. Choose at least one problem area or category.\n",
            );
            return Ok(output);
        }

        for (i, description) in set.problem_descriptions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, description));
            if self.options.show_implementation_guides {
                if let Some(error) = set.errors.get(i) {
                    if !error.implementation_guide.is_empty() {
                        let guide = format!("   💡 {}", error.implementation_guide);
                        output.push_str(&self.paint("32", &guide));
                        output.push('\n');
                    }
                }
            }
        }
        Ok(output)
    }

    /// Code with line numbers, followed by the known problems in instructor view
    pub fn format_code(
        &self,
        code: &str,
        problems: Option<&ProblemSet>,
        format: OutputFormat,
    ) -> TrainerResult<String> {
        let known: Vec<&str> = match problems {
            Some(set) if self.options.show_known_problems => {
                set.problem_descriptions.iter().map(String::as_str).collect()
            }
            _ => Vec::new(),
        };

        if format == OutputFormat::Json {
            let json = serde_json::json!({
                "fingerprint": snippet_fingerprint(code),
                "line_count": code.lines().count(),
                "numbered_code": add_line_numbers(code),
                "known_problems": known,
            });
            return to_pretty_json(&json);
        }

        if code.trim().is_empty() {
            return Ok("No code to review yet. Generate a Java snippet first.\n".to_string());
        }

        let mut output = String::new();
        output.push_str(&self.paint("1", "Java Code to Review:"));
        output.push_str("\n\n");
        output.push_str(&add_line_numbers(code));
        output.push('\n');

        if !known.is_empty() {
            output.push('\n');
            output.push_str(&self.paint("1", "Known Problems:"));
            output.push('\n');
            for (i, problem) in known.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, problem));
            }
        }
        Ok(output)
    }

    /// Latest attempt of a review session with guidance for the next one
    pub fn format_review(
        &self,
        session: &ReviewSession,
        format: OutputFormat,
    ) -> TrainerResult<String> {
        let Some(attempt) = session.latest() else {
            return Err(TrainerError::validation("No review has been submitted yet"));
        };
        let guidance = session.targeted_guidance();

        if format == OutputFormat::Json {
            let json = serde_json::json!({
                "iteration": attempt.iteration,
                "max_iterations": session.max_iterations(),
                "complete": session.is_complete(),
                "analysis": attempt.analysis,
                "targeted_guidance": guidance,
            });
            return to_pretty_json(&json);
        }

        let analysis = &attempt.analysis;
        let mut output = String::new();
        output.push_str(&self.paint(
            "1",
            &format!("📝 Attempt {} of {}", attempt.iteration, session.max_iterations()),
        ));
        output.push('\n');
        output.push_str(&format!(
            "You identified {} of {} issues ({:.1}%).\n",
            analysis.identified_count, analysis.total_problems, analysis.identified_percentage
        ));

        if !analysis.identified.is_empty() {
            output.push('\n');
            for error in &analysis.identified {
                let line = format!("  ✅ {} ({})", error.name, error.category);
                output.push_str(&self.paint("32", &line));
                output.push('\n');
            }
        }

        if analysis.review_sufficient {
            output.push_str(&self.paint("32", "\nAll known problems found. Well done!"));
            output.push('\n');
            return Ok(output);
        }

        if session.is_complete() {
            output.push_str("\nNo attempts left. The problems you missed:\n");
            for error in &analysis.missed {
                let line = format!("  ❌ {}", problem_description(error));
                output.push_str(&self.paint("31", &line));
                output.push('\n');
            }
        } else if let Some(guidance) = guidance {
            output.push('\n');
            output.push_str(&self.paint("33", &format!("💡 {guidance}")));
            output.push('\n');
        }
        Ok(output)
    }

    /// Problem areas with the categories they map to
    pub fn format_problem_areas(
        &self,
        areas: &[ProblemAreaDef],
        format: OutputFormat,
    ) -> TrainerResult<String> {
        if format == OutputFormat::Json {
            return to_pretty_json(&serde_json::to_value(areas).map_err(json_error)?);
        }

        let mut output = String::new();
        for area in areas {
            output.push_str(&self.paint("1", &area.name));
            output.push_str(&format!(" - {}\n", area.description));
            if area.build.is_empty() && area.checkstyle.is_empty() {
                output.push_str("  No specific error categories\n");
            }
            if !area.build.is_empty() {
                output.push_str(&format!("  Build error categories: {}\n", area.build.join(", ")));
            }
            if !area.checkstyle.is_empty() {
                output.push_str(&format!(
                    "  Checkstyle categories: {}\n",
                    area.checkstyle.join(", ")
                ));
            }
            output.push('\n');
        }
        Ok(output)
    }

    fn format_error_line(&self, error: &SelectedError) -> String {
        let mut line = format!(
            "  [{}] {} {} {}\n",
            self.paint(type_color(error.error_type), error.error_type.as_str()),
            self.paint("1", &error.name),
            self.paint("2", &format!("({})", error.category)),
            error.description
        );
        if self.options.show_implementation_guides && !error.implementation_guide.is_empty() {
            line.push_str(&self.paint("32", &format!("    💡 {}", error.implementation_guide)));
            line.push('\n');
        }
        line
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.options.use_colors {
            format!("\x1b[{color}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

impl Default for DisplayFormatter {
    fn default() -> Self {
        Self::new(DisplayOptions::default())
    }
}

fn type_color(error_type: ErrorType) -> &'static str {
    match error_type {
        ErrorType::Build => "31",
        ErrorType::Checkstyle => "36",
    }
}

fn json_error(e: serde_json::Error) -> TrainerError {
    TrainerError::validation(format!("JSON serialization failed: {e}"))
}

fn to_pretty_json(value: &JsonValue) -> TrainerResult<String> {
    serde_json::to_string_pretty(value).map_err(json_error)
}
