//! Domain models for the pet clinic.

mod owner;
mod pet;
mod vet;
mod visit;

pub use owner::*;
pub use pet::*;
pub use vet::*;
pub use visit::*;
