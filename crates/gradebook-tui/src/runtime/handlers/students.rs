use gradebook_core::api::ApiClient;

use crate::events::{StudentUiEvent, UiEvent};

/// Loads the global student list.
///
/// Pure async function - runtime spawns and sends result to inbox.
pub async fn students_load(client: ApiClient) -> UiEvent {
    let result = client.list_students().await.map_err(|e| e.to_string());
    UiEvent::Student(StudentUiEvent::ListLoaded(result))
}

/// Creates a student.
///
/// Pure async function - runtime spawns and sends result to inbox.
pub async fn student_create(client: ApiClient, student_id: String) -> UiEvent {
    let result = client
        .create_student(&student_id)
        .await
        .map(|_| ())
        .map_err(|e| e.to_string());
    UiEvent::Student(StudentUiEvent::Created { student_id, result })
}

/// Deletes a student.
///
/// Pure async function - runtime spawns and sends result to inbox.
pub async fn student_delete(client: ApiClient, student_id: String) -> UiEvent {
    let result = client
        .delete_student(&student_id)
        .await
        .map_err(|e| e.to_string());
    UiEvent::Student(StudentUiEvent::Deleted { student_id, result })
}

/// Adds one grade to a student.
///
/// Pure async function - runtime spawns and sends result to inbox.
pub async fn grade_add(client: ApiClient, student_id: String, grade: f64) -> UiEvent {
    let result = client
        .add_grade(&student_id, grade)
        .await
        .map(|_| ())
        .map_err(|e| e.to_string());
    UiEvent::Student(StudentUiEvent::GradeAdded {
        student_id,
        grade,
        result,
    })
}

/// Fetches a student's grade detail for the overlay.
///
/// Pure async function - runtime spawns and sends result to inbox.
pub async fn grades_load(client: ApiClient, student_id: String) -> UiEvent {
    let result = client
        .student_grades(&student_id)
        .await
        .map_err(|e| e.to_string());
    UiEvent::Student(StudentUiEvent::GradesLoaded { student_id, result })
}
