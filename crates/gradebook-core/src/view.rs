//! Pure record → presentation mappings.
//!
//! Nothing in here knows about the terminal. The TUI draws these models
//! verbatim, so every formatting rule lives here and is tested here.

use crate::models::{CourseStatistics, CourseSummary, GradeBreakdown, GradeDetail, Student};

pub const NO_GRADE_RECORDS: &str = "No grade records";
pub const NO_GRADES: &str = "No grades";

/// Fixed-point formatting with `decimals` digits.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Average to 2 dp, `"0.00"` when there is nothing to average.
pub fn format_average(average: Option<f64>) -> String {
    format_fixed(average.unwrap_or(0.0), 2)
}

/// Shortest natural rendering (`90`, `85.5`), `"-"` when absent.
pub fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => "-".to_string(),
    }
}

// ============================================================================
// Student cards
// ============================================================================

/// Where a card is shown; decides which row actions it offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardScope {
    /// Global student list.
    Global,
    /// Students enrolled in the selected course.
    Course,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    ViewGrades,
    Delete,
    RemoveFromCourse,
}

impl CardAction {
    /// Key hint and label shown next to a card.
    pub fn hint(self) -> (&'static str, &'static str) {
        match self {
            CardAction::ViewGrades => ("v", "View Grades"),
            CardAction::Delete => ("d", "Delete"),
            CardAction::RemoveFromCourse => ("r", "Remove from Course"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentCard {
    pub rank: usize,
    pub student_id: String,
    pub average: String,
    pub grade_count: usize,
    pub actions: Vec<CardAction>,
}

impl StudentCard {
    pub fn title(&self) -> String {
        format!("#{} {}", self.rank, self.student_id)
    }

    pub fn summary(&self) -> String {
        format!(
            "Average Grade: {}  Grade Count: {}",
            self.average, self.grade_count
        )
    }
}

/// Maps a student to its card. `rank` is 1-based.
pub fn student_card(student: &Student, rank: usize, scope: CardScope) -> StudentCard {
    let actions = match scope {
        CardScope::Global => vec![CardAction::ViewGrades, CardAction::Delete],
        CardScope::Course => vec![CardAction::RemoveFromCourse],
    };
    StudentCard {
        rank,
        student_id: student.student_id.clone(),
        average: format_average(student.average()),
        grade_count: student.grade_count(),
        actions,
    }
}

pub fn student_cards(students: &[Student], scope: CardScope) -> Vec<StudentCard> {
    students
        .iter()
        .enumerate()
        .map(|(i, s)| student_card(s, i + 1, scope))
        .collect()
}

// ============================================================================
// Courses
// ============================================================================

/// Label of a course in the selector: `CS101 (2024) - 3 students`.
pub fn course_label(summary: &CourseSummary) -> String {
    format!(
        "{} ({}) - {} students",
        summary.course.course_id, summary.course.academic_year, summary.student_count
    )
}

/// Summary lines for the selected course's statistics panel.
pub fn course_statistics_lines(stats: &CourseStatistics) -> Vec<(&'static str, String)> {
    vec![
        ("Students", stats.student_count.to_string()),
        ("Class Average", format_fixed(stats.class_average, 2)),
        ("Highest Average", format_fixed(stats.highest_average, 2)),
        ("Lowest Average", format_fixed(stats.lowest_average, 2)),
    ]
}

/// Confirmation text for deleting a course; lists what goes with it.
pub fn delete_course_prompt(course_id: &str) -> Vec<String> {
    vec![
        format!("Delete course {course_id}?"),
        "This also deletes:".to_string(),
        "  - all grade records of this course".to_string(),
        "  - all enrollment records of this course".to_string(),
    ]
}

pub fn delete_student_prompt(student_id: &str) -> Vec<String> {
    vec![format!("Delete student {student_id}?")]
}

// ============================================================================
// Grade detail
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeGroupView {
    /// Course id; `None` for an ungrouped list.
    pub heading: Option<String>,
    /// Grades formatted to 1 dp. Empty renders as [`NO_GRADES`].
    pub grades: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeDetailView {
    pub student_id: String,
    pub summary: Vec<(&'static str, String)>,
    /// Empty renders as [`NO_GRADE_RECORDS`].
    pub groups: Vec<GradeGroupView>,
}

impl GradeDetailView {
    pub fn title(&self) -> String {
        format!("Grades - {}", self.student_id)
    }
}

fn format_grades(grades: &[f64]) -> Vec<String> {
    grades.iter().map(|g| format_fixed(*g, 1)).collect()
}

pub fn grade_detail_view(student_id: &str, detail: &GradeDetail) -> GradeDetailView {
    let stats = &detail.statistics;
    let summary = vec![
        ("Grade Count", stats.grade_count.to_string()),
        ("Average Grade", format_average(stats.calculated_average)),
        ("Highest Grade", format_number(stats.highest_grade)),
        ("Lowest Grade", format_number(stats.lowest_grade)),
    ];

    let groups = match &detail.breakdown {
        GradeBreakdown::ByCourse(by_course) => by_course
            .iter()
            .map(|(course, grades)| GradeGroupView {
                heading: Some(course.clone()),
                grades: format_grades(grades),
            })
            .collect(),
        GradeBreakdown::Flat(grades) if grades.is_empty() => Vec::new(),
        GradeBreakdown::Flat(grades) => vec![GradeGroupView {
            heading: None,
            grades: format_grades(grades),
        }],
    };

    GradeDetailView {
        student_id: student_id.to_string(),
        summary,
        groups,
    }
}
