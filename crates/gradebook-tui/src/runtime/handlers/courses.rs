use gradebook_core::api::ApiClient;

use crate::events::{CourseUiEvent, UiEvent};

/// Loads the course list with enrollment counts.
///
/// Pure async function - runtime spawns and sends result to inbox.
pub async fn courses_load(client: ApiClient) -> UiEvent {
    let result = client.list_courses().await.map_err(|e| e.to_string());
    UiEvent::Course(CourseUiEvent::ListLoaded(result))
}

pub async fn course_create(client: ApiClient, course_id: String, academic_year: String) -> UiEvent {
    let result = client
        .create_course(&course_id, &academic_year)
        .await
        .map(|_| ())
        .map_err(|e| e.to_string());
    UiEvent::Course(CourseUiEvent::Created { course_id, result })
}

/// Deletes a course. The backend removes its grades and enrollments too.
pub async fn course_delete(client: ApiClient, course_id: String) -> UiEvent {
    let result = client
        .delete_course(&course_id)
        .await
        .map_err(|e| e.to_string());
    UiEvent::Course(CourseUiEvent::Deleted { course_id, result })
}

pub async fn course_students_load(client: ApiClient, course_id: String) -> UiEvent {
    let result = client
        .course_students(&course_id)
        .await
        .map_err(|e| e.to_string());
    UiEvent::Course(CourseUiEvent::StudentsLoaded { course_id, result })
}

pub async fn course_statistics_load(client: ApiClient, course_id: String) -> UiEvent {
    let result = client
        .course_statistics(&course_id)
        .await
        .map_err(|e| e.to_string());
    UiEvent::Course(CourseUiEvent::StatisticsLoaded { course_id, result })
}

pub async fn course_enroll(client: ApiClient, course_id: String, student_id: String) -> UiEvent {
    let result = client
        .enroll_student(&course_id, &student_id)
        .await
        .map_err(|e| e.to_string());
    UiEvent::Course(CourseUiEvent::StudentEnrolled {
        course_id,
        student_id,
        result,
    })
}

pub async fn course_remove_student(
    client: ApiClient,
    course_id: String,
    student_id: String,
) -> UiEvent {
    let result = client
        .remove_student(&course_id, &student_id)
        .await
        .map_err(|e| e.to_string());
    UiEvent::Course(CourseUiEvent::StudentRemoved {
        course_id,
        student_id,
        result,
    })
}

/// Replaces a student's grades within one course.
pub async fn course_grades_update(
    client: ApiClient,
    course_id: String,
    student_id: String,
    grades: Vec<f64>,
) -> UiEvent {
    let result = client
        .update_course_grades(&course_id, &student_id, &grades)
        .await
        .map_err(|e| e.to_string());
    UiEvent::Course(CourseUiEvent::GradesUpdated {
        course_id,
        student_id,
        result,
    })
}
