//! Visit lifecycle workflow.
//!
//! Flow: prepare context → bind fields → validate → create / update /
//! toggle cancellation. A form with errors is shown again
//! ([`FormOutcome::Render`]); a missing pet, vet or visit is an error
//! ([`WorkflowError::NotFound`]).

mod binding;
mod controller;

pub use binding::*;
pub use controller::*;

use crate::db::DbError;
use thiserror::Error;

/// Workflow errors.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

pub type WorkflowResult<T> = Result<T, WorkflowError>;
