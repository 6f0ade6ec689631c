//! Task model - the atomic unit of study work.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::time::{format_date, DateInput, Time};
use crate::title::normalize_title;

/// Default label for tasks built without a title.
pub(crate) const DEFAULT_TASK_TITLE: &str = "Task";

/// Lifecycle of a study task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started yet
    #[default]
    NotStarted,
    /// Being studied
    InProgress,
    /// Finished
    Completed,
}

impl TaskStatus {
    /// Parse a status label, coercing anything unknown to `NotStarted`.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "not_started" | "todo" => Self::NotStarted,
            "in_progress" | "started" => Self::InProgress,
            "completed" | "done" => Self::Completed,
            _ => {
                warn!("Unknown task status '{}', using not started", label);
                Self::NotStarted
            }
        }
    }

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State shared by every task kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskCore {
    title: String,
    description: Option<String>,
    completed_at: Option<Time>,
    status: TaskStatus,
    #[serde(skip, default = "default_task_title")]
    default_title: String,
}

fn default_task_title() -> String {
    DEFAULT_TASK_TITLE.to_string()
}

impl TaskCore {
    /// Create a not-started task state titled `title` ("Task" when empty).
    pub fn new(title: &str) -> Self {
        Self::with_default_title(title, DEFAULT_TASK_TITLE)
    }

    /// Create a task state with a kind-specific fallback title.
    pub fn with_default_title(title: &str, default: &str) -> Self {
        Self {
            title: normalize_title(title, default),
            description: None,
            completed_at: None,
            status: TaskStatus::NotStarted,
            default_title: default.to_string(),
        }
    }

    /// Fallback title used when the task is renamed to an empty string.
    pub fn default_title(&self) -> &str {
        &self.default_title
    }

    /// Change the fallback title.
    pub fn set_default_title(&mut self, default: &str) {
        self.default_title = normalize_title(default, DEFAULT_TASK_TITLE);
    }

    /// Task title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rename the task. An empty title falls back to the default title.
    pub fn set_title(&mut self, title: &str) {
        self.title = normalize_title(title, &self.default_title);
    }

    /// Free-text note.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Replace the note.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// When the task was completed, if recorded.
    pub fn completed_at(&self) -> Option<Time> {
        self.completed_at
    }

    /// Record or clear the completion instant.
    pub fn set_completed_at(&mut self, at: Option<Time>) {
        self.completed_at = at;
    }

    /// Record the completion instant from caller input.
    ///
    /// Unparseable text leaves the instant unset.
    pub fn set_completed_on(&mut self, input: impl Into<DateInput>) {
        self.completed_at = input.into().resolve_or_warn("completion date");
    }

    /// Current status.
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Change status.
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Whether the status is `Completed`.
    pub fn is_complete(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Common summary lines.
    pub(crate) fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Task: {}", self.title)];
        if let Some(description) = &self.description {
            lines.push(format!("Description: {}", description));
        }
        lines.push(format!("Status: {}", self.status));
        let completed = self
            .completed_at
            .as_ref()
            .map(format_date)
            .unwrap_or_else(|| "No date set".to_string());
        lines.push(format!("Completed on: {}", completed));
        lines
    }
}

/// Capability shared by every study task, decorated or not.
pub trait StudyTask: fmt::Debug {
    /// Shared task state.
    fn core(&self) -> &TaskCore;

    /// Shared task state, mutable.
    fn core_mut(&mut self) -> &mut TaskCore;

    /// Kind label, e.g. "Reading".
    fn kind(&self) -> &'static str;

    /// Completion fraction in `[0, 1]`.
    fn progress(&self) -> f64;

    /// Kind-specific summary lines (counters, extra settings).
    fn details(&self) -> Vec<String>;

    /// Completion hook, run after the status flips to `Completed`.
    fn on_complete(&mut self, at: Time) {
        self.core_mut().set_completed_at(Some(at));
    }

    /// Mark completed at `at`.
    fn complete_at(&mut self, at: Time) {
        debug!("Completing {} task '{}'", self.kind(), self.title());
        self.core_mut().set_status(TaskStatus::Completed);
        self.on_complete(at);
    }

    /// Mark completed now.
    fn complete(&mut self) {
        self.complete_at(Utc::now());
    }

    /// Mark in progress.
    fn start(&mut self) {
        debug!("Starting {} task '{}'", self.kind(), self.title());
        self.core_mut().set_status(TaskStatus::InProgress);
    }

    /// Change status without running lifecycle hooks.
    fn set_status(&mut self, status: TaskStatus) {
        self.core_mut().set_status(status);
    }

    /// Record or clear the completion instant.
    fn set_completed_at(&mut self, at: Option<Time>) {
        self.core_mut().set_completed_at(at);
    }

    /// Task title.
    fn title(&self) -> &str {
        self.core().title()
    }

    /// Free-text note.
    fn description(&self) -> Option<&str> {
        self.core().description()
    }

    /// Completion instant.
    fn completed_at(&self) -> Option<Time> {
        self.core().completed_at()
    }

    /// Current status.
    fn status(&self) -> TaskStatus {
        self.core().status()
    }

    /// Whether the task is completed.
    fn is_complete(&self) -> bool {
        self.core().is_complete()
    }

    /// Two tasks are the same study item when title and completion instant match.
    fn same_item(&self, other: &dyn StudyTask) -> bool {
        self.title() == other.title() && self.completed_at() == other.completed_at()
    }

    /// Multi-line description.
    fn summary(&self) -> String {
        let mut lines = self.core().summary_lines();
        lines.extend(self.details());
        lines.join("\n")
    }

    /// Attach a note.
    fn with_description(mut self, description: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.core_mut().set_description(Some(description.into()));
        self
    }

    /// Start from a given status.
    fn with_status(mut self, status: TaskStatus) -> Self
    where
        Self: Sized,
    {
        self.set_status(status);
        self
    }

    /// Start with a recorded completion instant.
    fn with_completed_on(mut self, input: impl Into<DateInput>) -> Self
    where
        Self: Sized,
    {
        let at = input.into().resolve_or_warn("completion date");
        self.set_completed_at(at);
        self
    }
}

impl<'a> fmt::Display for dyn StudyTask + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} [{}]", self.kind(), self.title(), self.status())
    }
}

/// Render a fraction as a whole percentage, e.g. `0.3` → `"30%"`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}
