//! Lesson - an ordered group of study tasks.

use std::fmt;

use crate::task::{format_percent, StudyTask};
use crate::title::normalize_title;

/// An ordered group of tasks. Progress is the plain mean of task progress.
#[derive(Debug)]
pub struct Lesson {
    title: String,
    tasks: Vec<Box<dyn StudyTask>>,
}

impl Lesson {
    /// Create an empty lesson ("Lesson" when the title is empty).
    pub fn new(title: &str) -> Self {
        Self {
            title: normalize_title(title, "Lesson"),
            tasks: Vec::new(),
        }
    }

    /// Lesson title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rename the lesson.
    pub fn set_title(&mut self, title: &str) {
        self.title = normalize_title(title, "Lesson");
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Box<dyn StudyTask>] {
        &self.tasks
    }

    /// Task at `index`, mutable.
    pub fn task_mut(&mut self, index: usize) -> Option<&mut (dyn StudyTask + 'static)> {
        self.tasks.get_mut(index).map(|task| task.as_mut())
    }

    /// Append a task.
    pub fn add_task(&mut self, task: impl StudyTask + 'static) {
        self.tasks.push(Box::new(task));
    }

    /// Append an already boxed task. `None` is ignored.
    pub fn add_boxed_task(&mut self, task: Option<Box<dyn StudyTask>>) {
        if let Some(task) = task {
            self.tasks.push(task);
        }
    }

    /// Mean task progress; 0.0 without tasks.
    pub fn progress(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        let total: f64 = self.tasks.iter().map(|task| task.progress()).sum();
        total / self.tasks.len() as f64
    }

    /// Multi-line description.
    pub fn summary(&self) -> String {
        [
            format!("Lesson: {}", self.title),
            format!("Tasks: {}", self.tasks.len()),
            format!("Lesson progress: {}", format_percent(self.progress())),
        ]
        .join("\n")
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lesson: {} ({} tasks)", self.title, self.tasks.len())
    }
}
