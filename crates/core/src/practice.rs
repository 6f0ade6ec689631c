//! Practice task - progress measured in exercise steps.

use std::fmt;

use crate::counter::BoundedCount;
use crate::task::{format_percent, StudyTask, TaskCore};

/// Hands-on exercise split into steps.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeTask {
    core: TaskCore,
    steps: BoundedCount,
}

impl PracticeTask {
    /// Create a practice task.
    pub fn new(title: &str, total_steps: i64, steps_done: i64) -> Self {
        Self {
            core: TaskCore::new(title),
            steps: BoundedCount::new(total_steps, steps_done),
        }
    }

    /// Total steps.
    pub fn total_steps(&self) -> u32 {
        self.steps.total()
    }

    /// Change the step count.
    pub fn set_total_steps(&mut self, total_steps: i64) {
        self.steps.set_total(total_steps);
    }

    /// Steps finished.
    pub fn steps_done(&self) -> u32 {
        self.steps.done()
    }

    /// Record finished steps.
    pub fn set_steps_done(&mut self, steps_done: i64) {
        self.steps.set_done(steps_done);
    }
}

impl StudyTask for PracticeTask {
    fn core(&self) -> &TaskCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut TaskCore {
        &mut self.core
    }

    fn kind(&self) -> &'static str {
        "Practice"
    }

    fn progress(&self) -> f64 {
        self.steps.fraction()
    }

    fn details(&self) -> Vec<String> {
        vec![
            "Type: Practice".to_string(),
            format!("Steps done: {}/{}", self.steps_done(), self.total_steps()),
            format!("Progress: {}", format_percent(self.progress())),
        ]
    }
}

impl fmt::Display for PracticeTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self as &dyn StudyTask, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_practice_progress() {
        let task = PracticeTask::new("borrow checker drills", 8, 2);
        assert_eq!(task.progress(), 0.25);
        assert_eq!(task.kind(), "Practice");
    }

    #[test]
    fn test_practice_lowering_total() {
        let mut task = PracticeTask::new("drills", 8, 6);
        task.set_total_steps(4);
        assert_eq!(task.steps_done(), 4);
        assert_eq!(task.progress(), 1.0);

        task.set_steps_done(-1);
        assert_eq!(task.steps_done(), 0);
        assert_eq!(task.progress(), 0.0);
    }
}
