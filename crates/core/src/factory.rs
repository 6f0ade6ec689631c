//! Task construction from a kind tag and loosely typed arguments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{BuildError, Result};
use crate::practice::PracticeTask;
use crate::project::ProjectTask;
use crate::quiz::{QuizTask, DEFAULT_MAX_SCORE};
use crate::reading::ReadingTask;
use crate::task::{StudyTask, TaskCore, TaskStatus};

/// The closed set of task kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// [`ReadingTask`]
    Reading,
    /// [`QuizTask`]
    Quiz,
    /// [`PracticeTask`]
    Practice,
    /// [`ProjectTask`]
    Project,
}

impl TaskKind {
    /// Every kind, in display order.
    pub const ALL: [TaskKind; 4] = [Self::Reading, Self::Quiz, Self::Practice, Self::Project];

    /// Lower-case tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reading => "reading",
            Self::Quiz => "quiz",
            Self::Practice => "practice",
            Self::Project => "project",
        }
    }

    /// Title used when the arguments carry none.
    pub fn default_title(&self) -> &'static str {
        match self {
            Self::Reading => "Reading",
            Self::Quiz => "Quiz",
            Self::Practice => "Practice",
            Self::Project => "Project",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskKind {
    type Err = BuildError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        if tag.is_empty() {
            return Err(BuildError::MissingKind);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == tag)
            .ok_or(BuildError::UnknownKind(s.trim().to_string()))
    }
}

/// A number that may arrive as a JSON number or numeric string.
///
/// Anything else deserializes to an invalid value, which the constructors
/// replace with the field's default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Lenient(Option<f64>);

impl Lenient {
    /// Wrap a known value. Non-finite values are invalid.
    pub fn new(value: f64) -> Self {
        Self(Some(value).filter(|v| v.is_finite()))
    }

    /// An invalid value.
    pub fn invalid() -> Self {
        Self(None)
    }

    /// Interpret a JSON value.
    pub fn from_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(number) => number.as_f64().map(Self::new).unwrap_or_default(),
            serde_json::Value::String(text) => {
                text.trim().parse::<f64>().map(Self::new).unwrap_or_default()
            }
            _ => Self::invalid(),
        }
    }

    /// The value, if valid.
    pub fn value(&self) -> Option<f64> {
        self.0
    }

    fn count_or(&self, default: i64) -> i64 {
        self.0.map(|v| v.trunc() as i64).unwrap_or(default)
    }

    fn float_or(&self, default: f64) -> f64 {
        self.0.unwrap_or(default)
    }
}

impl From<f64> for Lenient {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<i64> for Lenient {
    fn from(value: i64) -> Self {
        Self::new(value as f64)
    }
}

impl<'de> Deserialize<'de> for Lenient {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Arguments for [`build_task`]. Each kind reads only its own counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskArgs {
    /// Title; the kind's default title when absent
    pub title: Option<String>,
    /// Free-text note
    pub description: Option<String>,
    /// Status label; unknown labels mean not started
    pub status: Option<String>,
    /// Completion date, `dd-mm-YYYY[ HH:MM]`
    pub completed_on: Option<String>,

    /// Reading: total pages (required)
    pub total_pages: Option<Lenient>,
    /// Reading: pages read
    pub pages_read: Option<Lenient>,

    /// Quiz: score obtained (required)
    pub score: Option<Lenient>,
    /// Quiz: highest possible score, 10 by default
    pub max_score: Option<Lenient>,

    /// Practice: total steps (required)
    pub total_steps: Option<Lenient>,
    /// Practice: steps finished
    pub steps_done: Option<Lenient>,

    /// Project: expected deliverables (required)
    pub total_deliverables: Option<Lenient>,
    /// Project: approved deliverables
    pub deliverables_approved: Option<Lenient>,
}

fn required(kind: TaskKind, field: &'static str, value: Option<Lenient>) -> Result<Lenient> {
    value.ok_or_else(|| BuildError::MissingField { kind, field }.into())
}

/// Build a task of `kind` from `args`.
///
/// Fails only when the kind's required counter is missing altogether; present
/// but invalid numbers fall back to field defaults.
pub fn build_task(kind: TaskKind, args: &TaskArgs) -> Result<Box<dyn StudyTask>> {
    let title = args
        .title
        .as_deref()
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .unwrap_or(kind.default_title());
    let progress = |value: Option<Lenient>| value.unwrap_or_default().count_or(0);

    let mut task: Box<dyn StudyTask> = match kind {
        TaskKind::Reading => {
            let total = required(kind, "total_pages", args.total_pages)?;
            Box::new(ReadingTask::new(title, total.count_or(1), progress(args.pages_read)))
        }
        TaskKind::Quiz => {
            let score = required(kind, "score", args.score)?;
            let max_score = args
                .max_score
                .map(|max| max.float_or(DEFAULT_MAX_SCORE))
                .unwrap_or(DEFAULT_MAX_SCORE);
            Box::new(QuizTask::new(title, score.float_or(0.0), max_score))
        }
        TaskKind::Practice => {
            let total = required(kind, "total_steps", args.total_steps)?;
            Box::new(PracticeTask::new(title, total.count_or(1), progress(args.steps_done)))
        }
        TaskKind::Project => {
            let total = required(kind, "total_deliverables", args.total_deliverables)?;
            Box::new(ProjectTask::new(
                title,
                total.count_or(1),
                progress(args.deliverables_approved),
            ))
        }
    };

    apply_common(task.core_mut(), kind, args);
    Ok(task)
}

fn apply_common(core: &mut TaskCore, kind: TaskKind, args: &TaskArgs) {
    core.set_default_title(kind.default_title());
    core.set_description(args.description.clone());
    if let Some(label) = &args.status {
        core.set_status(TaskStatus::from_label(label));
    }
    if let Some(date) = &args.completed_on {
        core.set_completed_on(date.as_str());
    }
}
