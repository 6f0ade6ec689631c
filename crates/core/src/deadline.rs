//! Deadline decorator - penalizes tasks completed after their deadline.

use std::fmt;

use tracing::debug;

use crate::task::{format_percent, StudyTask, TaskCore, TaskStatus};
use crate::time::{format_date_time, DateInput, Time};

/// Wraps any task and discounts its progress when it was completed late.
///
/// The wrapped task decides how much of the work is done; this type only
/// decides whether it was done on time. The lateness check uses the
/// decorator's own completion instant, which [`StudyTask::complete_at`]
/// keeps in step with the wrapped task. Decorators can wrap decorators.
#[derive(Debug)]
pub struct DeadlineTask {
    core: TaskCore,
    inner: Box<dyn StudyTask>,
    deadline: Option<Time>,
    penalty: f64,
}

impl DeadlineTask {
    /// Wrap `inner`.
    ///
    /// An unparseable deadline is logged and treated as no deadline. The
    /// penalty is clamped to `[0, 1]`; NaN becomes 0.
    pub fn new(inner: impl StudyTask + 'static, deadline: Option<DateInput>, penalty: f64) -> Self {
        Self::wrap(Box::new(inner), deadline, penalty)
    }

    /// Wrap an already boxed task.
    pub fn wrap(inner: Box<dyn StudyTask>, deadline: Option<DateInput>, penalty: f64) -> Self {
        let mut task = Self {
            core: inner.core().clone(),
            inner,
            deadline: None,
            penalty: 0.0,
        };
        if let Some(deadline) = deadline {
            task.set_deadline(deadline);
        }
        task.set_penalty(penalty);
        task
    }

    /// The wrapped task.
    pub fn inner(&self) -> &(dyn StudyTask + 'static) {
        self.inner.as_ref()
    }

    /// The wrapped task, mutable (for adjusting its counters).
    pub fn inner_mut(&mut self) -> &mut (dyn StudyTask + 'static) {
        self.inner.as_mut()
    }

    /// Unwrap, returning the wrapped task.
    pub fn into_inner(self) -> Box<dyn StudyTask> {
        self.inner
    }

    /// Deadline, if any.
    pub fn deadline(&self) -> Option<Time> {
        self.deadline
    }

    /// Set the deadline. Unparseable input clears it.
    pub fn set_deadline(&mut self, deadline: impl Into<DateInput>) {
        self.deadline = deadline.into().resolve_or_warn("deadline");
    }

    /// Remove the deadline.
    pub fn clear_deadline(&mut self) {
        self.deadline = None;
    }

    /// Fraction removed from progress when late.
    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    /// Set the late penalty, clamped to `[0, 1]`.
    pub fn set_penalty(&mut self, penalty: f64) {
        self.penalty = if penalty.is_nan() { 0.0 } else { penalty.clamp(0.0, 1.0) };
    }

    /// Whether the penalty currently applies.
    pub fn is_late(&self) -> bool {
        match (self.deadline, self.core.completed_at()) {
            (Some(deadline), Some(completed_at)) => {
                self.core.is_complete() && completed_at > deadline
            }
            _ => false,
        }
    }
}

impl StudyTask for DeadlineTask {
    fn core(&self) -> &TaskCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut TaskCore {
        &mut self.core
    }

    fn kind(&self) -> &'static str {
        self.inner.kind()
    }

    fn progress(&self) -> f64 {
        let mut progress = self.inner.progress();
        if self.is_late() {
            progress *= (1.0 - self.penalty).max(0.0);
        }
        progress.clamp(0.0, 1.0)
    }

    fn complete_at(&mut self, at: Time) {
        self.inner.complete_at(at);
        debug!("Completing deadline task '{}'", self.core.title());
        self.core.set_completed_at(Some(at));
        self.core.set_status(TaskStatus::Completed);
    }

    fn start(&mut self) {
        self.inner.start();
        self.core.set_status(TaskStatus::InProgress);
    }

    fn set_status(&mut self, status: TaskStatus) {
        self.inner.set_status(status);
        self.core.set_status(status);
    }

    fn set_completed_at(&mut self, at: Option<Time>) {
        self.inner.set_completed_at(at);
        self.core.set_completed_at(at);
    }

    fn details(&self) -> Vec<String> {
        let deadline = self
            .deadline
            .as_ref()
            .map(format_date_time)
            .unwrap_or_else(|| "No deadline".to_string());
        vec![
            "Deadline task".to_string(),
            format!("Deadline: {}", deadline),
            format!("Late penalty: {}", format_percent(self.penalty)),
            format!("Progress (with deadline): {}", format_percent(self.progress())),
        ]
    }

    fn summary(&self) -> String {
        let mut lines = vec![self.inner.summary()];
        lines.extend(self.details());
        lines.join("\n")
    }
}

impl fmt::Display for DeadlineTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self as &dyn StudyTask, f)?;
        match &self.deadline {
            Some(deadline) => write!(f, " (due {})", format_date_time(deadline)),
            None => Ok(()),
        }
    }
}
