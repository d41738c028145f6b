//! Pet Clinic Core Library
//!
//! Visit form workflow for the pet clinic, with a SQLite store behind it.
//!
//! # Architecture
//!
//! ```text
//!   Request (petId, form fields)
//!            │
//!            ▼
//!   prepare_context ── find pet + visits, attach fresh Visit, list vets
//!            │
//!            ▼
//!   bind_visit / validate_visit ──► BindingResult
//!            │
//!     ┌──────┴─────────────┬──────────────────────┐
//!     ▼                    ▼                      ▼
//! submit_create       submit_update        toggle_cancellation
//! (insert)            (delete + insert)    (flip flag, save)
//!     │                    │                      │
//!     └──────────┬─────────┴──────────────────────┘
//!                ▼
//!   FormOutcome::Render (errors)  |  FormOutcome::Redirect("/owners/{id}")
//! ```
//!
//! # Modules
//!
//! - [`db`]: SQLite database layer (schema, CRUD, sample data)
//! - [`models`]: Domain types (Visit, Pet, Vet, Owner)
//! - [`repository`]: Store traits the workflow depends on
//! - [`workflow`]: Binding, validation and the visit controller

pub mod db;
pub mod models;
pub mod repository;
pub mod workflow;

// Re-export commonly used types
pub use db::{Database, DbError, DbResult};
pub use models::{Owner, Pet, Vet, Visit};
pub use repository::{ClinicStore, PetRepository, VetRepository, VisitRepository};
pub use workflow::{
    bind_visit, validate_visit, BindingResult, FieldError, FormOutcome, FormView,
    VisitContext, VisitController, WorkflowError, WorkflowResult, VISIT_FORM_VIEW,
};
