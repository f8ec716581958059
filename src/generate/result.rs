//! Generation result types.
//!
//! Contains types for representing the outcome of generating sprite sheets.

use std::path::PathBuf;
use std::time::Duration;

/// Status of a single sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetStatus {
    /// Sheet and stylesheet were written
    Generated,
    /// Nothing to do (up to date, empty or missing folder)
    Skipped(String),
    /// Generation failed with error
    Failed(String),
}

impl SheetStatus {
    /// Check if the status indicates success.
    pub fn is_success(&self) -> bool {
        matches!(self, SheetStatus::Generated | SheetStatus::Skipped(_))
    }

    /// Check if the status indicates failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, SheetStatus::Failed(_))
    }
}

impl std::fmt::Display for SheetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetStatus::Generated => write!(f, "generated"),
            SheetStatus::Skipped(reason) => write!(f, "skipped: {}", reason),
            SheetStatus::Failed(err) => write!(f, "failed: {}", err),
        }
    }
}

/// Result of generating one sprite sheet.
#[derive(Debug, Clone)]
pub struct SheetResult {
    /// Sheet name (the sprite folder's name)
    pub sheet: String,
    pub status: SheetStatus,
    /// Files written
    pub outputs: Vec<PathBuf>,
    pub duration: Duration,
    /// Layout warnings (if any)
    pub warnings: Vec<String>,
}

impl SheetResult {
    /// Create a successful result.
    pub fn generated(sheet: String, outputs: Vec<PathBuf>, duration: Duration) -> Self {
        Self { sheet, status: SheetStatus::Generated, outputs, duration, warnings: vec![] }
    }

    /// Create a skipped result.
    pub fn skipped(sheet: String, reason: impl Into<String>) -> Self {
        Self {
            sheet,
            status: SheetStatus::Skipped(reason.into()),
            outputs: vec![],
            duration: Duration::ZERO,
            warnings: vec![],
        }
    }

    /// Create a failed result.
    pub fn failed(sheet: String, error: String, duration: Duration) -> Self {
        Self { sheet, status: SheetStatus::Failed(error), outputs: vec![], duration, warnings: vec![] }
    }

    /// Add warnings to the result.
    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Result of a complete generation run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Results for each sheet, in folder-name order
    pub sheets: Vec<SheetResult>,
    pub total_duration: Duration,
}

impl GenerateReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: SheetResult) {
        self.sheets.push(result);
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.total_duration = duration;
        self
    }

    pub fn generated_count(&self) -> usize {
        self.sheets.iter().filter(|r| matches!(r.status, SheetStatus::Generated)).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.sheets.iter().filter(|r| matches!(r.status, SheetStatus::Skipped(_))).count()
    }

    pub fn failed_count(&self) -> usize {
        self.sheets.iter().filter(|r| r.status.is_failure()).count()
    }

    /// Check if the overall run succeeded (no failures).
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    /// Format a summary of the run: a headline, then one line per sheet.
    pub fn summary(&self) -> String {
        let total = self.sheets.len();
        let failed = self.failed_count();

        let mut lines = if failed > 0 {
            vec![format!("Failed to generate {} of {} sprite-sheets", failed, total)]
        } else {
            vec![format!(
                "Generated {} sprite-sheets, {} skipped, in {:?}",
                self.generated_count(),
                self.skipped_count(),
                self.total_duration
            )]
        };
        lines.extend(self.sheets.iter().map(sheet_line));

        lines.join("\n")
    }
}

fn sheet_line(result: &SheetResult) -> String {
    let mut line = format!("  {}: {}", result.sheet, result.status);
    if !result.outputs.is_empty() {
        let files: Vec<String> = result.outputs.iter().map(|p| p.display().to_string()).collect();
        line.push_str(&format!(" ({})", files.join(", ")));
    }
    match result.warnings.len() {
        0 => {}
        1 => line.push_str(", 1 warning"),
        n => line.push_str(&format!(", {} warnings", n)),
    }
    line
}
