//! Check display state
//!
//! One line per scheduled puzzle, in schedule order. Lines move through
//! `pending -> running -> passed | failed | errored`; a settled line never
//! changes again.

use crate::executor::RunStatus;
use console::style;

/// Spinner frames shown for running lines
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineState {
    Pending,
    Running,
    Passed,
    Failed(String),
    Errored(String),
}

impl LineState {
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Passed | Self::Failed(_) | Self::Errored(_))
    }
}

impl From<RunStatus> for LineState {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Passed => Self::Passed,
            RunStatus::Failed { detail } => Self::Failed(detail),
            RunStatus::Errored { reason } => Self::Errored(reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckLine {
    pub label: String,
    pub state: LineState,
}

#[derive(Debug, Clone)]
pub struct Board {
    lines: Vec<CheckLine>,
    frame: usize,
}

impl Board {
    pub fn new(labels: impl IntoIterator<Item = String>) -> Self {
        Self {
            lines: labels
                .into_iter()
                .map(|label| CheckLine {
                    label,
                    state: LineState::Pending,
                })
                .collect(),
            frame: 0,
        }
    }

    pub fn lines(&self) -> &[CheckLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<CheckLine> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Mark a pending line as running
    pub fn start(&mut self, index: usize) {
        if let Some(line) = self.lines.get_mut(index) {
            if line.state == LineState::Pending {
                line.state = LineState::Running;
            }
        }
    }

    /// Freeze a line to its final state; later reports for it are ignored
    pub fn settle(&mut self, index: usize, state: LineState) {
        if let Some(line) = self.lines.get_mut(index) {
            if !line.state.is_settled() {
                line.state = state;
            }
        }
    }

    /// Settle every unfinished line as errored
    pub fn abandon(&mut self, reason: &str) {
        for line in &mut self.lines {
            if !line.state.is_settled() {
                line.state = LineState::Errored(reason.to_string());
            }
        }
    }

    /// Advance the spinner
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    pub fn is_complete(&self) -> bool {
        self.lines.iter().all(|line| line.state.is_settled())
    }

    /// Styled text of one line
    pub fn render_line(&self, index: usize) -> String {
        let Some(line) = self.lines.get(index) else {
            return String::new();
        };

        match &line.state {
            LineState::Pending => format!("{} {}", style("·").dim(), style(&line.label).dim()),
            LineState::Running => format!(
                "{} {}",
                style(SPINNER[self.frame % SPINNER.len()]).cyan(),
                line.label
            ),
            LineState::Passed => format!("{} {}", style("✓").green(), line.label),
            LineState::Failed(detail) => format!(
                "{} {} {}",
                style("✗").red(),
                line.label,
                style(detail).red()
            ),
            LineState::Errored(reason) => format!(
                "{} {} {}",
                style("!").yellow(),
                line.label,
                style(reason).yellow()
            ),
        }
    }

    /// Every line, in schedule order
    pub fn render(&self) -> Vec<String> {
        (0..self.lines.len()).map(|i| self.render_line(i)).collect()
    }
}
