//! Course - an ordered group of lessons with a duration.

use std::fmt;

use crate::lesson::Lesson;
use crate::task::format_percent;
use crate::title::normalize_title;

/// An ordered group of lessons. The duration weights the course inside a track.
#[derive(Debug)]
pub struct Course {
    title: String,
    duration_hours: u32,
    lessons: Vec<Lesson>,
}

impl Course {
    /// Create an empty course. Negative durations become 0.
    pub fn new(title: &str, duration_hours: i64) -> Self {
        let mut course = Self {
            title: normalize_title(title, "Course"),
            duration_hours: 0,
            lessons: Vec::new(),
        };
        course.set_duration_hours(duration_hours);
        course
    }

    /// Course title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rename the course.
    pub fn set_title(&mut self, title: &str) {
        self.title = normalize_title(title, "Course");
    }

    /// Duration in hours.
    pub fn duration_hours(&self) -> u32 {
        self.duration_hours
    }

    /// Change the duration; negative values become 0.
    pub fn set_duration_hours(&mut self, duration_hours: i64) {
        self.duration_hours = duration_hours.clamp(0, i64::from(u32::MAX)) as u32;
    }

    /// Lessons in insertion order.
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Lesson at `index`, mutable.
    pub fn lesson_mut(&mut self, index: usize) -> Option<&mut Lesson> {
        self.lessons.get_mut(index)
    }

    /// Append a lesson. `None` is ignored.
    pub fn add_lesson(&mut self, lesson: impl Into<Option<Lesson>>) {
        if let Some(lesson) = lesson.into() {
            self.lessons.push(lesson);
        }
    }

    /// Mean lesson progress; 0.0 without lessons.
    pub fn progress(&self) -> f64 {
        if self.lessons.is_empty() {
            return 0.0;
        }
        let total: f64 = self.lessons.iter().map(Lesson::progress).sum();
        total / self.lessons.len() as f64
    }

    /// Multi-line description.
    pub fn summary(&self) -> String {
        [
            format!("Course: {}", self.title),
            format!("Duration: {}h", self.duration_hours),
            format!("Lessons: {}", self.lessons.len()),
            format!("Course progress: {}", format_percent(self.progress())),
        ]
        .join("\n")
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course: {} ({} lessons, {}h)",
            self.title,
            self.lessons.len(),
            self.duration_hours
        )
    }
}
