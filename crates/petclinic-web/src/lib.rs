//! HTTP surface for the pet clinic visit forms.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET  | `/owners/*/pets/{petId}/visits/new` | [`handlers::init_new_visit_form`] |
//! | POST | `/owners/{ownerId}/pets/{petId}/visits/new` | [`handlers::process_new_visit_form`] |
//! | GET  | `/owners/{ownerId}/pets/{petId}/visits/{visitId}/edit` | [`handlers::init_update_form`] |
//! | POST | `/owners/{ownerId}/pets/{petId}/visits/{visitId}/edit` | [`handlers::process_update_form`] |
//! | POST | `/owners/{ownerId}/pets/{petId}/visits/{visitId}/canceled` | [`handlers::process_canceled_visit`] |

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use petclinic_core::Database;
use tower_http::trace::TraceLayer;

use crate::error::WebError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Database>>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    /// Run `f` with the store locked. The lock is released before returning.
    pub fn with_store<T>(
        &self,
        f: impl FnOnce(&Database) -> Result<T, WebError>,
    ) -> Result<T, WebError> {
        let db = self
            .db
            .lock()
            .map_err(|e| WebError::Internal(format!("Lock poisoned: {e}")))?;
        f(&*db)
    }
}

/// Build the visit form router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/owners/:owner_id/pets/:pet_id/visits/new",
            get(handlers::init_new_visit_form).post(handlers::process_new_visit_form),
        )
        .route(
            "/owners/:owner_id/pets/:pet_id/visits/:visit_id/edit",
            get(handlers::init_update_form).post(handlers::process_update_form),
        )
        .route(
            "/owners/:owner_id/pets/:pet_id/visits/:visit_id/canceled",
            post(handlers::process_canceled_visit),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
