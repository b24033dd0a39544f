use gradebook_core::api::ApiClient;
use gradebook_core::models::StatisticsSnapshot;

use crate::events::{StatisticsUiEvent, UiEvent};

/// Loads the course list and backend health together.
///
/// Pure async function - runtime spawns and sends result to inbox.
pub async fn statistics_load(client: ApiClient) -> UiEvent {
    let (courses, health) = tokio::join!(client.list_courses(), client.health());
    let result = match (courses, health) {
        (Ok(courses), Ok(health)) => Ok(StatisticsSnapshot::from_parts(courses, health)),
        (Err(e), _) | (_, Err(e)) => Err(e.to_string()),
    };
    UiEvent::Statistics(StatisticsUiEvent::Loaded(result))
}
