//! Router tests, driven in-process with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use petclinic_core::{Database, VisitRepository};
use petclinic_web::{router, AppState};
use serde_json::Value;
use tower::ServiceExt;

fn seeded_state() -> AppState {
    let db = Database::open_in_memory().unwrap();
    db.seed_sample_data().unwrap();
    AppState::new(db)
}

async fn get(state: &AppState, uri: &str) -> Response {
    router(state.clone())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(state: &AppState, uri: &str, body: &str) -> Response {
    router(state.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}

fn visit_count(state: &AppState) -> i64 {
    state.db.lock().unwrap().count_visits().unwrap()
}

#[tokio::test]
async fn new_visit_form_renders_model() {
    let state = seeded_state();

    let response = get(&state, "/owners/*/pets/7/visits/new").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["view"], "pets/createOrUpdateVisitForm");
    assert_eq!(body["pet"]["name"], "Samantha");
    assert_eq!(body["visit"]["id"], Value::Null);
    assert_eq!(body["visit"]["pet_id"], 7);
    assert_eq!(body["vets"].as_array().unwrap().len(), 6);
    assert_eq!(body["errors"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn new_visit_form_for_missing_pet_is_404() {
    let state = seeded_state();

    let response = get(&state, "/owners/1/pets/999/visits/new").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["error"], "pet 999 not found");
}

#[tokio::test]
async fn create_visit_redirects_to_owner() {
    let state = seeded_state();

    let response = post_form(
        &state,
        "/owners/6/pets/7/visits/new",
        "date=2024-01-05&description=checkup&petId=7&vetId=2",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/owners/6");
    assert_eq!(visit_count(&state), 5);

    let db = state.db.lock().unwrap();
    let created = db.find_visit(5).unwrap().unwrap();
    assert_eq!(created.description, "checkup");
    assert_eq!(created.vet_id(), Some(2));
}

#[tokio::test]
async fn create_ignores_submitted_id() {
    let state = seeded_state();

    let response = post_form(
        &state,
        "/owners/6/pets/7/visits/new",
        "id=99&description=checkup&vetId=2",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let db = state.db.lock().unwrap();
    assert!(db.find_visit(99).unwrap().is_none());
    assert!(db.find_visit(5).unwrap().is_some());
}

#[tokio::test]
async fn invalid_create_rerenders_form() {
    let state = seeded_state();

    let response = post_form(
        &state,
        "/owners/6/pets/7/visits/new",
        "date=2024-01-05&description=&vetId=2",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["view"], "pets/createOrUpdateVisitForm");
    assert_eq!(body["visit"]["date"], "2024-01-05");
    assert_eq!(body["errors"][0]["field"], "description");
    assert_eq!(body["errors"][0]["code"], "NotEmpty");
    assert_eq!(visit_count(&state), 4);
}

#[tokio::test]
async fn create_without_vet_id_is_400() {
    let state = seeded_state();

    let response = post_form(&state, "/owners/6/pets/7/visits/new", "description=checkup").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(visit_count(&state), 4);
}

#[tokio::test]
async fn create_with_unknown_vet_is_404() {
    let state = seeded_state();

    let response = post_form(
        &state,
        "/owners/6/pets/7/visits/new",
        "description=checkup&vetId=77",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(visit_count(&state), 4);
}

#[tokio::test]
async fn edit_form_shows_stored_visit() {
    let state = seeded_state();

    let response = get(&state, "/owners/6/pets/7/visits/4/edit").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["visit"]["id"], 4);
    assert_eq!(body["visit"]["description"], "spayed");
    assert_eq!(body["pets"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn edit_form_for_missing_visit_is_404() {
    let state = seeded_state();
    let response = get(&state, "/owners/6/pets/7/visits/404/edit").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_replaces_visit() {
    let state = seeded_state();

    let response = post_form(
        &state,
        "/owners/6/pets/7/visits/4/edit",
        "date=2013-01-04&description=spayed+%28follow-up%29&vetId=3",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/owners/6");

    let db = state.db.lock().unwrap();
    assert!(db.find_visit(4).unwrap().is_none());
    let replacement = db.find_visit(5).unwrap().unwrap();
    assert_eq!(replacement.description, "spayed (follow-up)");
    assert_eq!(replacement.vet_id(), Some(3));
    assert_eq!(replacement.pet_id, 7);
}

#[tokio::test]
async fn invalid_update_keeps_original() {
    let state = seeded_state();

    let response = post_form(
        &state,
        "/owners/6/pets/7/visits/4/edit",
        "date=yesterday&description=spayed&vetId=3",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["errors"][0]["field"], "date");
    assert_eq!(body["errors"][0]["rejected_value"], "yesterday");

    let db = state.db.lock().unwrap();
    assert_eq!(db.find_visit(4).unwrap().unwrap().description, "spayed");
}

#[tokio::test]
async fn cancel_toggles_flag() {
    let state = seeded_state();

    let response = post_form(&state, "/owners/6/pets/7/visits/1/canceled", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/owners/6");
    assert!(state.db.lock().unwrap().find_visit(1).unwrap().unwrap().canceled);

    post_form(&state, "/owners/6/pets/7/visits/1/canceled", "").await;
    assert!(!state.db.lock().unwrap().find_visit(1).unwrap().unwrap().canceled);
}

#[tokio::test]
async fn cancel_missing_visit_is_404() {
    let state = seeded_state();
    let response = post_form(&state, "/owners/6/pets/7/visits/12/canceled", "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_pet_wins_over_missing_vet_id() {
    let state = seeded_state();

    let response = post_form(&state, "/owners/6/pets/999/visits/new", "description=checkup").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_form(&state, "/owners/6/pets/999/visits/4/edit", "description=spayed").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(visit_count(&state), 4);
}

#[tokio::test]
async fn update_moves_visit_to_selected_pet() {
    let state = seeded_state();

    let response = post_form(
        &state,
        "/owners/6/pets/7/visits/4/edit",
        "description=spayed&petId=8&vetId=3",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let db = state.db.lock().unwrap();
    assert_eq!(db.find_visit(5).unwrap().unwrap().pet_id, 8);
}
