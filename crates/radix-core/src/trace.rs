//! Step trace: the narrative lines that explain a conversion.
//!
//! Renderers consume the lines directly and tell them apart by prefix:
//!
//! ```text
//! Step 1: Convert 1010 (base 2) to decimal        <- Header
//!    1 × 2^3 = 8 + 0 × 2^2 = 0 + ...              <- Detail
//!                                                 <- Blank
//! Step 2: Convert 10 (decimal) to base 16         <- Header
//!    10 ÷ 16 = 0 remainder A                      <- Detail
//! ```
//!
//! A trace may instead be a single free-standing `Note` line (used when the
//! value is zero).

use serde::{Deserialize, Serialize};

/// Prefix of every header line
pub const STEP_PREFIX: &str = "Step ";

/// Indentation of every detail line
pub const DETAIL_INDENT: &str = "   ";

/// Category of a single trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepLine {
    Header,
    Blank,
    Detail,
    Note,
}

impl StepLine {
    pub fn classify(line: &str) -> Self {
        if line.is_empty() {
            StepLine::Blank
        } else if line.starts_with(STEP_PREFIX) {
            StepLine::Header
        } else if line.starts_with(DETAIL_INDENT) {
            StepLine::Detail
        } else {
            StepLine::Note
        }
    }
}

/// One titled step with its detail lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    title: String,
    details: Vec<String>,
}

impl Step {
    pub fn new(title: impl Into<String>) -> Self {
        Step {
            title: title.into(),
            details: Vec::new(),
        }
    }

    /// Append a detail line (indentation is added on output)
    pub fn detail(mut self, line: impl Into<String>) -> Self {
        self.push_detail(line);
        self
    }

    pub fn push_detail(&mut self, line: impl Into<String>) {
        self.details.push(line.into());
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }
}

/// Ordered steps, numbered from 1 when rendered to lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepTrace {
    steps: Vec<Step>,
    note: Option<String>,
}

impl StepTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// A trace made of one free-standing line
    pub fn note(text: impl Into<String>) -> Self {
        StepTrace {
            steps: Vec::new(),
            note: Some(text.into()),
        }
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Move all steps of `other` after ours; numbering continues.
    pub fn append(&mut self, other: StepTrace) {
        self.steps.extend(other.steps);
        if self.note.is_none() {
            self.note = other.note;
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.note.is_none()
    }

    /// Render to lines: a note wins over steps.
    pub fn lines(&self) -> Vec<String> {
        if let Some(note) = &self.note {
            return vec![note.clone()];
        }

        let mut out = Vec::new();
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                out.push(String::new());
            }
            out.push(format!("{}{}: {}", STEP_PREFIX, i + 1, step.title));
            out.extend(step.details.iter().map(|d| format!("{}{}", DETAIL_INDENT, d)));
        }
        out
    }
}
