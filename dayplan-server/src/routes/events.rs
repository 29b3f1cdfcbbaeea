//! Event CRUD and overlap endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};
use serde::{Deserialize, Serialize};

use dayplan_core::overlap::find_overlapping;
use dayplan_core::repository::EventList;
use dayplan_core::validation::validate_form;
use dayplan_core::{Event, EventForm};

use crate::routes::AppError;
use crate::routes::extract::ApiJson;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route("/api/events/{id}", put(update_event).delete(delete_event))
        .route("/api/events/overlaps", post(find_overlaps))
}

/// GET /api/events - List all events
async fn list_events(State(state): State<AppState>) -> Json<EventList> {
    let events = state.events.read().await.list();
    Json(EventList { events })
}

/// POST /api/events - Create a new event
async fn create_event(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<EventForm>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    validate_form(&form)?;

    let event = state.events.write().await.create(form)?;
    tracing::info!(id = %event.id, "event created");

    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/events/:id - Replace an event, keeping its id
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(form): ApiJson<EventForm>,
) -> Result<Json<Event>, AppError> {
    validate_form(&form)?;

    let event = state.events.write().await.update(&id, form)?;
    tracing::info!(id = %event.id, "event updated");

    Ok(Json(event))
}

/// DELETE /api/events/:id - Delete an event
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.events.write().await.delete(&id)?;
    tracing::info!(id = %id, "event deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Request body for an overlap check: a form, plus the id when editing
#[derive(Deserialize)]
pub struct OverlapRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub event: EventForm,
}

#[derive(Serialize)]
pub struct OverlapResponse {
    pub overlapping: Vec<Event>,
}

/// POST /api/events/overlaps - Existing events that collide with a candidate
async fn find_overlaps(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<OverlapRequest>,
) -> Result<Json<OverlapResponse>, AppError> {
    let existing = state.events.read().await.list();

    let overlapping = match req.id {
        Some(id) => find_overlapping(&req.event.into_event(id), &existing),
        None => find_overlapping(&req.event, &existing),
    };

    Ok(Json(OverlapResponse {
        overlapping: overlapping.into_iter().cloned().collect(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use dayplan_core::holiday::HolidayTable;
    use dayplan_core::repository::InMemoryEventRepository;
    use dayplan_core::Event;

    use crate::app;
    use crate::state::AppState;

    fn seeded_state() -> AppState {
        let events: Vec<Event> = serde_json::from_value(json!([
            {
                "id": "1",
                "title": "기존 회의",
                "date": "2024-10-15",
                "startTime": "09:00",
                "endTime": "10:00",
                "description": "기존 팀 미팅",
                "location": "회의실 B",
                "category": "업무",
                "repeat": { "type": "none", "interval": 0 },
                "notificationTime": 10
            }
        ]))
        .unwrap();

        AppState::new(
            InMemoryEventRepository::with_events(events),
            HolidayTable::korean_2024(),
        )
    }

    async fn send(
        state: &AppState,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let request = match body {
            Some(body) => request.body(Body::from(body.to_string())).unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn new_event() -> Value {
        json!({
            "title": "새 회의",
            "date": "2024-10-16",
            "startTime": "11:00",
            "endTime": "12:00",
            "description": "새로운 팀 미팅",
            "location": "회의실 A",
            "category": "업무",
            "repeat": { "type": "none", "interval": 0 },
            "notificationTime": 5
        })
    }

    #[tokio::test]
    async fn test_list_events() {
        let state = seeded_state();
        let (status, json) = send(&state, Method::GET, "/api/events", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["events"].as_array().unwrap().len(), 1);
        assert_eq!(json["events"][0]["startTime"], "09:00");
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let state = seeded_state();
        let (status, json) = send(&state, Method::POST, "/api/events", Some(new_event())).await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(json["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert_eq!(json["title"], "새 회의");

        let (_, list) = send(&state, Method::GET, "/api/events", None).await;
        assert_eq!(list["events"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_times() {
        let state = seeded_state();
        let mut body = new_event();
        body["endTime"] = json!("10:00");

        let (status, json) = send(&state, Method::POST, "/api/events", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("시작 시간"));
    }

    #[tokio::test]
    async fn test_create_missing_title_is_json_400() {
        let state = seeded_state();
        let mut body = new_event();
        body.as_object_mut().unwrap().remove("title");

        let (status, json) = send(&state, Method::POST, "/api/events", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().is_some_and(|msg| !msg.is_empty()));
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_400() {
        let state = seeded_state();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/events")
            .header("content-type", "application/json")
            .body(Body::from("not json"))
            .unwrap();

        let response = app(state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_update_existing_event() {
        let state = seeded_state();
        let mut body = new_event();
        body["title"] = json!("수정된 회의");

        let (status, json) = send(&state, Method::PUT, "/api/events/1", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["id"], "1");
        assert_eq!(json["title"], "수정된 회의");
    }

    #[tokio::test]
    async fn test_update_unknown_event_is_404() {
        let state = seeded_state();
        let (status, _) = send(&state, Method::PUT, "/api/events/999", Some(new_event())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_event() {
        let state = seeded_state();
        let (status, _) = send(&state, Method::DELETE, "/api/events/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, list) = send(&state, Method::GET, "/api/events", None).await;
        assert!(list["events"].as_array().unwrap().is_empty());

        let (status, _) = send(&state, Method::DELETE, "/api/events/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_overlap_check() {
        let state = seeded_state();
        let candidate = json!({
            "title": "겹치는 회의",
            "date": "2024-10-15",
            "startTime": "09:30",
            "endTime": "10:30"
        });

        let (status, json) =
            send(&state, Method::POST, "/api/events/overlaps", Some(candidate)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["overlapping"][0]["id"], "1");
    }

    #[tokio::test]
    async fn test_overlap_check_ignores_the_edited_event() {
        let state = seeded_state();
        let candidate = json!({
            "id": "1",
            "title": "기존 회의",
            "date": "2024-10-15",
            "startTime": "09:00",
            "endTime": "11:00"
        });

        let (_, json) = send(&state, Method::POST, "/api/events/overlaps", Some(candidate)).await;
        assert!(json["overlapping"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_adjacent_events_do_not_overlap() {
        let state = seeded_state();
        let candidate = json!({
            "title": "다음 회의",
            "date": "2024-10-15",
            "startTime": "10:00",
            "endTime": "11:00"
        });

        let (_, json) = send(&state, Method::POST, "/api/events/overlaps", Some(candidate)).await;
        assert!(json["overlapping"].as_array().unwrap().is_empty());
    }
}
