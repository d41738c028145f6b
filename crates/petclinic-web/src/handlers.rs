//! Visit form handlers.
//!
//! Each handler locks the store, builds a [`VisitController`], prepares the
//! per-request context from the path's pet ID before reading any other
//! request parameter, and turns the resulting
//! [`FormOutcome`] into a response: the form model as JSON, or a
//! `303 See Other` to the owner page.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use petclinic_core::workflow::{bind_visit, validate_visit, FormOutcome, VisitController};

use crate::error::{Result, WebError};
use crate::AppState;

/// Request parameter carrying the selected vet.
pub const VET_ID_PARAM: &str = "vetId";

fn respond(outcome: FormOutcome) -> Response {
    match outcome {
        FormOutcome::Render(view) => Json(view).into_response(),
        FormOutcome::Redirect(location) => Redirect::to(&location).into_response(),
    }
}

/// Read a required integer request parameter.
fn required_id(params: &HashMap<String, String>, name: &str) -> Result<i64> {
    let raw = params
        .get(name)
        .ok_or_else(|| WebError::BadRequest(format!("Required parameter '{name}' is not present")))?;
    raw.trim()
        .parse()
        .map_err(|_| WebError::BadRequest(format!("Parameter '{name}' must be a number, got '{raw}'")))
}

// =========================================================================
// GET /owners/*/pets/{petId}/visits/new
// =========================================================================

pub async fn init_new_visit_form(
    State(state): State<AppState>,
    Path((_owner, pet_id)): Path<(String, i64)>,
) -> Result<Response> {
    state.with_store(|db| {
        let controller = VisitController::new(db);
        let ctx = controller.prepare_context(pet_id)?;
        Ok(respond(controller.show_create_form(ctx)))
    })
}

// =========================================================================
// POST /owners/{ownerId}/pets/{petId}/visits/new
// =========================================================================

pub async fn process_new_visit_form(
    State(state): State<AppState>,
    Path((owner_id, pet_id)): Path<(i64, i64)>,
    Form(params): Form<HashMap<String, String>>,
) -> Result<Response> {
    state.with_store(|db| {
        let controller = VisitController::new(db);
        let mut ctx = controller.prepare_context(pet_id)?;
        let vet_id = required_id(&params, VET_ID_PARAM)?;
        let mut binding = bind_visit(&params, &mut ctx.visit);
        validate_visit(&ctx.visit, &mut binding);
        Ok(respond(controller.submit_create(ctx, &binding, vet_id, owner_id)?))
    })
}

// =========================================================================
// GET /owners/{ownerId}/pets/{petId}/visits/{visitId}/edit
// =========================================================================

pub async fn init_update_form(
    State(state): State<AppState>,
    Path((owner_id, pet_id, visit_id)): Path<(i64, i64, i64)>,
) -> Result<Response> {
    state.with_store(|db| {
        let controller = VisitController::new(db);
        let ctx = controller.prepare_context(pet_id)?;
        Ok(respond(controller.show_edit_form(ctx, visit_id, owner_id)?))
    })
}

// =========================================================================
// POST /owners/{ownerId}/pets/{petId}/visits/{visitId}/edit
// =========================================================================

pub async fn process_update_form(
    State(state): State<AppState>,
    Path((owner_id, pet_id, visit_id)): Path<(i64, i64, i64)>,
    Form(params): Form<HashMap<String, String>>,
) -> Result<Response> {
    state.with_store(|db| {
        let controller = VisitController::new(db);
        let mut ctx = controller.prepare_context(pet_id)?;
        let vet_id = required_id(&params, VET_ID_PARAM)?;
        let mut binding = bind_visit(&params, &mut ctx.visit);
        validate_visit(&ctx.visit, &mut binding);
        Ok(respond(controller.submit_update(ctx, &binding, vet_id, visit_id, owner_id)?))
    })
}

// =========================================================================
// POST /owners/{ownerId}/pets/{petId}/visits/{visitId}/canceled
// =========================================================================

pub async fn process_canceled_visit(
    State(state): State<AppState>,
    Path((owner_id, pet_id, visit_id)): Path<(i64, i64, i64)>,
    Form(params): Form<HashMap<String, String>>,
) -> Result<Response> {
    state.with_store(|db| {
        let controller = VisitController::new(db);
        let mut ctx = controller.prepare_context(pet_id)?;
        // Bound for type errors only; the form is not validated here.
        let binding = bind_visit(&params, &mut ctx.visit);
        Ok(respond(controller.toggle_cancellation(ctx, &binding, visit_id, owner_id)?))
    })
}
