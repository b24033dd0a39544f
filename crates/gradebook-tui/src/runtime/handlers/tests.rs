//! Handler tests against a mock backend.

use gradebook_core::api::ApiClient;
use gradebook_core::models::GradeBreakdown;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::events::{CourseUiEvent, StatisticsUiEvent, StudentUiEvent, UiEvent};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

async fn setup() -> Option<(MockServer, ApiClient)> {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return None;
    }
    let server = MockServer::start().await;
    let client = ApiClient::new(&format!("{}/api", server.uri())).unwrap();
    Some((server, client))
}

#[tokio::test]
async fn test_students_load_returns_list() {
    let Some((server, client)) = setup().await else {
        return;
    };
    Mock::given(method("GET"))
        .and(path("/api/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"studentId": "S1", "grades": [{"gradeValue": 90.0}]}
        ])))
        .mount(&server)
        .await;

    let UiEvent::Student(StudentUiEvent::ListLoaded(Ok(students))) = students_load(client).await
    else {
        panic!("expected loaded student list");
    };
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].student_id, "S1");
}

#[tokio::test]
async fn test_student_create_failure_carries_status_text() {
    let Some((server, client)) = setup().await else {
        return;
    };
    Mock::given(method("POST"))
        .and(path("/api/students"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let event = student_create(client, "S1".to_string()).await;

    let UiEvent::Student(StudentUiEvent::Created { student_id, result }) = event else {
        panic!("expected created event");
    };
    assert_eq!(student_id, "S1");
    assert_eq!(result, Err("HTTP error! status: 409".to_string()));
}

#[tokio::test]
async fn test_grade_add_posts_value() {
    let Some((server, client)) = setup().await else {
        return;
    };
    Mock::given(method("POST"))
        .and(path("/api/students/S1/grades"))
        .and(body_json(json!({"gradeValue": 92.5})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"studentId": "S1", "grades": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let event = grade_add(client, "S1".to_string(), 92.5).await;

    assert!(matches!(
        event,
        UiEvent::Student(StudentUiEvent::GradeAdded { result: Ok(()), .. })
    ));
}

#[tokio::test]
async fn test_grades_load_returns_grouped_detail() {
    let Some((server, client)) = setup().await else {
        return;
    };
    Mock::given(method("GET"))
        .and(path("/api/students/S1/grades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "gradesByCourse": {"CS101": [88.0]},
            "statistics": {"gradeCount": 1, "calculatedAverage": 88.0}
        })))
        .mount(&server)
        .await;

    let UiEvent::Student(StudentUiEvent::GradesLoaded {
        result: Ok(detail), ..
    }) = grades_load(client, "S1".to_string()).await
    else {
        panic!("expected grade detail");
    };
    assert!(matches!(detail.breakdown, GradeBreakdown::ByCourse(_)));
    assert_eq!(detail.statistics.grade_count, 1);
}

#[tokio::test]
async fn test_course_delete_accepts_empty_body() {
    let Some((server, client)) = setup().await else {
        return;
    };
    Mock::given(method("DELETE"))
        .and(path("/api/courses/CS101"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let event = course_delete(client, "CS101".to_string()).await;

    assert!(matches!(
        event,
        UiEvent::Course(CourseUiEvent::Deleted { result: Ok(()), .. })
    ));
}

#[tokio::test]
async fn test_course_grades_update_sends_array() {
    let Some((server, client)) = setup().await else {
        return;
    };
    Mock::given(method("PUT"))
        .and(path("/api/courses/CS101/students/S1/grades"))
        .and(body_json(json!([70.0, 85.5, 100.0])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let event = course_grades_update(
        client,
        "CS101".to_string(),
        "S1".to_string(),
        vec![70.0, 85.5, 100.0],
    )
    .await;

    let UiEvent::Course(CourseUiEvent::GradesUpdated {
        course_id,
        student_id,
        result,
    }) = event
    else {
        panic!("expected grades updated event");
    };
    assert_eq!((course_id.as_str(), student_id.as_str()), ("CS101", "S1"));
    assert_eq!(result, Ok(()));
}

#[tokio::test]
async fn test_statistics_load_combines_courses_and_health() {
    let Some((server, client)) = setup().await else {
        return;
    };
    Mock::given(method("GET"))
        .and(path("/api/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"course": {"courseId": "CS101", "academicYear": "2024"}, "studentCount": 3},
            {"course": {"courseId": "MA201", "academicYear": "2024"}, "studentCount": 2}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "UP", "version": "1.0.0"})),
        )
        .mount(&server)
        .await;

    let UiEvent::Statistics(StatisticsUiEvent::Loaded(Ok(snapshot))) =
        statistics_load(client).await
    else {
        panic!("expected statistics snapshot");
    };
    assert_eq!(snapshot.total_courses, 2);
    assert_eq!(snapshot.total_enrollments, 5);
    assert_eq!(snapshot.health.version, "1.0.0");
}

#[tokio::test]
async fn test_statistics_load_fails_when_health_fails() {
    let Some((server, client)) = setup().await else {
        return;
    };
    Mock::given(method("GET"))
        .and(path("/api/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let event = statistics_load(client).await;

    let UiEvent::Statistics(StatisticsUiEvent::Loaded(Err(error))) = event else {
        panic!("expected failure");
    };
    assert_eq!(error, "HTTP error! status: 503");
}
