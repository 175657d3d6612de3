//! Runs CommonMark-style JSON examples through a [`MarkdownEngine`].
//!
//! The input is the array format of the CommonMark `spec.json`: each entry has
//! `markdown`, `html`, `example`, `start_line`, `end_line` and `section`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::io::{self, IoError};
use crate::pipeline::MarkdownEngine;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceCase {
    pub markdown: String,
    pub html: String,
    pub example: u32,
    pub start_line: u32,
    pub end_line: u32,
    pub section: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConformanceError {
    #[error("Failed to read test cases at {path}: {source}")]
    Read { path: PathBuf, source: IoError },
    #[error("Failed to parse test cases at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("No example numbered {0}")]
    UnknownExample(u32),
    #[error("Failed to write debug output: {0}")]
    DebugOutput(#[from] IoError),
}

pub fn parse_cases(json: &str) -> Result<Vec<ConformanceCase>, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn load_cases(path: &Path) -> Result<Vec<ConformanceCase>, ConformanceError> {
    let json = io::read_markdown(path).map_err(|source| ConformanceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_cases(&json).map_err(|source| ConformanceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Carriage returns and surrounding newlines are not significant.
fn normalize(html: &str) -> String {
    html.replace('\r', "").trim_matches('\n').to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    pub example: u32,
    pub section: String,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
}

#[derive(Debug, Default)]
pub struct ConformanceReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl ConformanceReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// `(passed, total)` per section, sorted by section name.
    pub fn by_section(&self) -> BTreeMap<&str, (usize, usize)> {
        let mut sections: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for outcome in &self.outcomes {
            let entry = sections.entry(outcome.section.as_str()).or_default();
            entry.0 += usize::from(outcome.passed);
            entry.1 += 1;
        }
        sections
    }
}

pub struct ConformanceRunner<'a> {
    engine: &'a MarkdownEngine,
    debug_dir: Option<PathBuf>,
}

impl<'a> ConformanceRunner<'a> {
    pub fn new(engine: &'a MarkdownEngine) -> Self {
        Self {
            engine,
            debug_dir: None,
        }
    }

    /// Also write `myout{N}` (actual) and `out{N}` (expected) into `dir`.
    pub fn with_debug_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.debug_dir = Some(dir.into());
        self
    }

    pub fn run_case(&self, case: &ConformanceCase) -> Result<CaseOutcome, ConformanceError> {
        let actual = self.engine.markdown_to_html(&case.markdown);
        let passed = normalize(&actual) == normalize(&case.html);
        log::debug!(
            "example {} ({}): {}",
            case.example,
            case.section,
            if passed { "pass" } else { "fail" }
        );

        if let Some(dir) = &self.debug_dir {
            io::write_html(&dir.join(format!("myout{}", case.example)), &actual)?;
            io::write_html(&dir.join(format!("out{}", case.example)), &case.html)?;
        }

        Ok(CaseOutcome {
            example: case.example,
            section: case.section.clone(),
            expected: case.html.clone(),
            actual,
            passed,
        })
    }

    pub fn run_example(
        &self,
        cases: &[ConformanceCase],
        example: u32,
    ) -> Result<CaseOutcome, ConformanceError> {
        let case = cases
            .iter()
            .find(|case| case.example == example)
            .ok_or(ConformanceError::UnknownExample(example))?;
        self.run_case(case)
    }

    /// Runs every case, or only those in `section` when given.
    pub fn run(
        &self,
        cases: &[ConformanceCase],
        section: Option<&str>,
    ) -> Result<ConformanceReport, ConformanceError> {
        let mut report = ConformanceReport::default();
        for case in cases
            .iter()
            .filter(|case| section.is_none_or(|s| s == case.section))
        {
            report.outcomes.push(self.run_case(case)?);
        }
        Ok(report)
    }
}
