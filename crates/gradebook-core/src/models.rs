//! Wire and domain models for the grade-record backend.
//!
//! All entities are owned by the backend. These types are a read-through copy
//! of the latest fetch and are never patched locally.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Student
// ============================================================================

/// One grade entry as returned inside a student object.
///
/// The backend serializes grade entities as objects (`{"gradeValue": 90.0, ...}`),
/// but some endpoints return bare numbers. Both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GradeEntry {
    Value(f64),
    Record {
        #[serde(rename = "gradeValue")]
        grade_value: f64,
    },
}

impl GradeEntry {
    pub fn value(&self) -> f64 {
        match self {
            GradeEntry::Value(v) | GradeEntry::Record { grade_value: v } => *v,
        }
    }
}

/// A student record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: String,
    #[serde(default)]
    pub grades: Vec<GradeEntry>,
    /// Average as stored by the backend. Display code uses [`Student::average`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_grade: Option<f64>,
}

impl Student {
    pub fn new(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            grades: Vec::new(),
            average_grade: None,
        }
    }

    #[must_use]
    pub fn with_grades(mut self, grades: &[f64]) -> Self {
        self.grades = grades.iter().copied().map(GradeEntry::Value).collect();
        self
    }

    pub fn grade_values(&self) -> Vec<f64> {
        self.grades.iter().map(GradeEntry::value).collect()
    }

    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }

    /// Average derived from the grade list. `None` when there are no grades.
    pub fn average(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        let sum: f64 = self.grades.iter().map(GradeEntry::value).sum();
        Some(sum / self.grades.len() as f64)
    }
}

// ============================================================================
// Course
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_id: String,
    pub academic_year: String,
}

/// Entry of `GET /courses`: a course plus its enrollment count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub course: Course,
    #[serde(default)]
    pub student_count: u32,
}

impl CourseSummary {
    pub fn course_id(&self) -> &str {
        &self.course.course_id
    }
}

/// Aggregate figures for one course (`GET /courses/{id}/statistics`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStatistics {
    pub course_id: String,
    #[serde(default)]
    pub academic_year: String,
    #[serde(default)]
    pub student_count: u32,
    #[serde(default)]
    pub class_average: f64,
    #[serde(default)]
    pub highest_average: f64,
    #[serde(default)]
    pub lowest_average: f64,
}

// ============================================================================
// Grade detail
// ============================================================================

/// Per-student statistics block of the grade detail response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStatistics {
    #[serde(default)]
    pub grade_count: u32,
    #[serde(default)]
    pub calculated_average: Option<f64>,
    #[serde(default)]
    pub highest_grade: Option<f64>,
    #[serde(default)]
    pub lowest_grade: Option<f64>,
}

/// How a student's grades are grouped in the detail view.
#[derive(Debug, Clone, PartialEq)]
pub enum GradeBreakdown {
    /// Grades grouped by course id.
    ByCourse(BTreeMap<String, Vec<f64>>),
    /// Ungrouped grade list.
    Flat(Vec<f64>),
}

/// Normalized grade detail for one student.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeDetail {
    pub breakdown: GradeBreakdown,
    pub statistics: StudentStatistics,
}

/// Raw `GET /students/{id}/grades` body.
///
/// The backend has shipped both `gradesByCourse` (object) and `grades`
/// (array) under otherwise identical endpoints. [`GradeDetail`] is the single
/// shape the rest of the client consumes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeDetailResponse {
    #[serde(default)]
    pub grades_by_course: Option<BTreeMap<String, Vec<GradeEntry>>>,
    #[serde(default)]
    pub grades: Option<Vec<GradeEntry>>,
    #[serde(default)]
    pub statistics: StudentStatistics,
}

impl From<GradeDetailResponse> for GradeDetail {
    fn from(raw: GradeDetailResponse) -> Self {
        let breakdown = match (raw.grades_by_course, raw.grades) {
            (Some(groups), _) => GradeBreakdown::ByCourse(
                groups
                    .into_iter()
                    .map(|(course, grades)| (course, grades.iter().map(GradeEntry::value).collect()))
                    .collect(),
            ),
            (None, Some(grades)) => {
                GradeBreakdown::Flat(grades.iter().map(GradeEntry::value).collect())
            }
            (None, None) => GradeBreakdown::ByCourse(BTreeMap::new()),
        };
        Self {
            breakdown,
            statistics: raw.statistics,
        }
    }
}

// ============================================================================
// Health / statistics snapshot
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

/// System-wide figures shown on the statistics tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsSnapshot {
    pub total_courses: usize,
    pub total_enrollments: u64,
    pub courses: Vec<CourseSummary>,
    pub health: Health,
}

impl StatisticsSnapshot {
    pub fn from_parts(courses: Vec<CourseSummary>, health: Health) -> Self {
        let total_enrollments = courses.iter().map(|c| u64::from(c.student_count)).sum();
        Self {
            total_courses: courses.len(),
            total_enrollments,
            courses,
            health,
        }
    }
}
