//! The visit form workflow.
//!
//! Every operation consumes a [`VisitContext`] built by
//! [`VisitController::prepare_context`], so the pet and the fresh working
//! visit are always loaded before anything else happens.

use serde::Serialize;
use tracing::{debug, info, instrument};

use super::binding::BindingResult;
use super::{WorkflowError, WorkflowResult};
use crate::models::{Pet, Vet, Visit};
use crate::repository::ClinicStore;

/// View used for both creating and editing a visit.
pub const VISIT_FORM_VIEW: &str = "pets/createOrUpdateVisitForm";

/// Location of the owner detail page.
pub fn owner_redirect(owner_id: i64) -> String {
    format!("/owners/{owner_id}")
}

/// Per-request setup: the pet, its history, and the visit being edited.
#[derive(Debug, Clone)]
pub struct VisitContext {
    /// The pet, with its stored visits plus the new working visit
    pub pet: Pet,
    /// The working form object; bind request fields onto this
    pub visit: Visit,
    /// Vets offered in the selection control
    pub vets: Vec<Vet>,
}

impl VisitContext {
    fn into_view(mut self, visit: Visit, pets: Vec<Pet>, errors: BindingResult) -> FormView {
        // Keep the unsaved history entry in step with what was bound.
        for pending in self.pet.visits.iter_mut().filter(|v| v.is_new()) {
            *pending = self.visit.clone();
        }

        FormView {
            view: VISIT_FORM_VIEW,
            visit,
            pet: self.pet,
            vets: self.vets,
            pets,
            errors,
        }
    }

    fn into_working_view(self, pets: Vec<Pet>, errors: BindingResult) -> FormView {
        let visit = self.visit.clone();
        self.into_view(visit, pets, errors)
    }
}

/// Everything a form template needs.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub view: &'static str,
    pub visit: Visit,
    pub pet: Pet,
    pub vets: Vec<Vet>,
    /// The owner's pets, for the pet selection control on the edit form
    pub pets: Vec<Pet>,
    pub errors: BindingResult,
}

/// What the caller should do next.
#[derive(Debug, Clone)]
pub enum FormOutcome {
    /// Show the form, with the contained model.
    Render(FormView),
    /// Redirect the browser to this location.
    Redirect(String),
}

impl FormOutcome {
    pub fn view(&self) -> Option<&FormView> {
        match self {
            FormOutcome::Render(view) => Some(view),
            FormOutcome::Redirect(_) => None,
        }
    }

    pub fn redirect_location(&self) -> Option<&str> {
        match self {
            FormOutcome::Render(_) => None,
            FormOutcome::Redirect(location) => Some(location),
        }
    }
}

/// Orchestrates the visit lifecycle against a store.
pub struct VisitController<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: ClinicStore + ?Sized> VisitController<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Load the pet with its history and attach a fresh visit to it.
    #[instrument(skip(self))]
    pub fn prepare_context(&self, pet_id: i64) -> WorkflowResult<VisitContext> {
        let mut pet = self
            .store
            .find_pet(pet_id)?
            .ok_or(WorkflowError::NotFound { entity: "pet", id: pet_id })?;
        pet.visits = self.store.find_visits_by_pet(pet_id)?;

        let mut visit = Visit::new();
        pet.add_visit(&mut visit);

        let vets = self.store.find_all_vets()?;
        Ok(VisitContext { pet, visit, vets })
    }

    /// Show the empty create form.
    pub fn show_create_form(&self, ctx: VisitContext) -> FormOutcome {
        FormOutcome::Render(ctx.into_working_view(Vec::new(), BindingResult::new()))
    }

    /// Persist the visit bound onto `ctx.visit`.
    #[instrument(skip(self, ctx, binding))]
    pub fn submit_create(
        &self,
        ctx: VisitContext,
        binding: &BindingResult,
        vet_id: i64,
        owner_id: i64,
    ) -> WorkflowResult<FormOutcome> {
        if binding.has_errors() {
            debug!(errors = binding.errors().len(), "create form has errors");
            return Ok(FormOutcome::Render(
                ctx.into_working_view(Vec::new(), binding.clone()),
            ));
        }

        let mut visit = ctx.visit;
        let mut pet = self
            .store
            .find_pet(visit.pet_id)?
            .ok_or(WorkflowError::NotFound { entity: "pet", id: visit.pet_id })?;
        let vet = self
            .store
            .find_vet(vet_id)?
            .ok_or(WorkflowError::NotFound { entity: "vet", id: vet_id })?;

        let vet_name = vet.full_name();
        visit.vet = Some(vet);
        pet.add_visit(&mut visit);
        self.store.save_visit(&mut visit)?;

        info!(visit_id = ?visit.id(), pet = %pet.name, vet = %vet_name, "visit created");
        Ok(FormOutcome::Redirect(owner_redirect(owner_id)))
    }

    /// Show a stored visit for editing.
    #[instrument(skip(self, ctx))]
    pub fn show_edit_form(
        &self,
        ctx: VisitContext,
        visit_id: i64,
        owner_id: i64,
    ) -> WorkflowResult<FormOutcome> {
        let visit = self
            .store
            .find_visit(visit_id)?
            .ok_or(WorkflowError::NotFound { entity: "visit", id: visit_id })?;
        let pets = self.store.find_pets_by_owner(owner_id)?;

        Ok(FormOutcome::Render(ctx.into_view(visit, pets, BindingResult::new())))
    }

    /// Replace a stored visit with the one bound onto `ctx.visit`.
    ///
    /// The visit belongs to the pet bound from the form, which defaults to the
    /// path pet loaded by [`Self::prepare_context`]. The old record is deleted
    /// and the new one inserted, so the visit comes back with a different ID.
    #[instrument(skip(self, ctx, binding))]
    pub fn submit_update(
        &self,
        ctx: VisitContext,
        binding: &BindingResult,
        vet_id: i64,
        visit_id: i64,
        owner_id: i64,
    ) -> WorkflowResult<FormOutcome> {
        if binding.has_errors() {
            debug!(errors = binding.errors().len(), "edit form has errors");
            let pets = self.store.find_pets_by_owner(owner_id)?;
            return Ok(FormOutcome::Render(ctx.into_working_view(pets, binding.clone())));
        }

        // Both lookups happen before the delete so a bad reference leaves the
        // stored visit alone.
        let mut visit = ctx.visit;
        let pet = self
            .store
            .find_pet(visit.pet_id)?
            .ok_or(WorkflowError::NotFound { entity: "pet", id: visit.pet_id })?;
        let vet = self
            .store
            .find_vet(vet_id)?
            .ok_or(WorkflowError::NotFound { entity: "vet", id: vet_id })?;

        if !self.store.delete_visit(visit_id)? {
            return Err(WorkflowError::NotFound { entity: "visit", id: visit_id });
        }

        let vet_name = vet.full_name();
        visit.vet = Some(vet);
        visit.pet_id = pet.id;
        self.store.save_visit(&mut visit)?;

        info!(
            old_id = visit_id,
            new_id = ?visit.id(),
            pet = %pet.name,
            vet = %vet_name,
            "visit replaced"
        );
        Ok(FormOutcome::Redirect(owner_redirect(owner_id)))
    }

    /// Flip the canceled flag of a stored visit.
    ///
    /// `binding` is the outcome of binding the request onto `ctx.visit`;
    /// only type mismatches can make it fail.
    #[instrument(skip(self, ctx, binding))]
    pub fn toggle_cancellation(
        &self,
        ctx: VisitContext,
        binding: &BindingResult,
        visit_id: i64,
        owner_id: i64,
    ) -> WorkflowResult<FormOutcome> {
        if binding.has_errors() {
            debug!(errors = binding.errors().len(), "cancel request has errors");
            return Ok(FormOutcome::Render(
                ctx.into_working_view(Vec::new(), binding.clone()),
            ));
        }

        let mut visit = self
            .store
            .find_visit(visit_id)?
            .ok_or(WorkflowError::NotFound { entity: "visit", id: visit_id })?;
        visit.toggle_canceled();
        self.store.save_visit(&mut visit)?;

        info!(visit_id, canceled = visit.canceled, "visit cancellation toggled");
        Ok(FormOutcome::Redirect(owner_redirect(owner_id)))
    }
}
