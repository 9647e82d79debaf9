// src/screens/suppliers.rs

use std::sync::Arc;

use validator::{Validate, ValidationErrors};

use crate::api::client::ApiClient;
use crate::api::images::ImageApi;
use crate::api::repository::{ResourceRepository, RestRepository};
use crate::controllers::form::{FormController, ResourceForm, SubmitOutcome};
use crate::controllers::list::{ListController, ListOutcome};
use crate::models::session::Session;
use crate::models::supplier::{CreateSupplierPayload, Supplier, UpdateSupplierPayload};

#[derive(Debug, Default, Validate)]
pub struct SupplierForm {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    pub nombre: String,
    pub telefono: String,
    #[validate(email(message = "El correo no es válido."))]
    pub email: String,
    pub direccion: String,
    // RUC livre neste núcleo.
    pub ruc: String,
}

impl ResourceForm for SupplierForm {
    type Resource = Supplier;

    fn blank() -> Self {
        Self::default()
    }

    fn from_entity(entity: &Supplier) -> Self {
        Self {
            nombre: entity.nombre.clone(),
            telefono: entity.telefono.clone(),
            email: entity.email.clone(),
            direccion: entity.direccion.clone(),
            ruc: entity.ruc.clone(),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validate::validate(self)
    }

    fn create_payload(&self) -> CreateSupplierPayload {
        CreateSupplierPayload {
            nombre: self.nombre.clone(),
            telefono: self.telefono.clone(),
            email: self.email.clone(),
            direccion: self.direccion.clone(),
            ruc: self.ruc.clone(),
        }
    }

    fn update_payload(&self, id: i64) -> Option<UpdateSupplierPayload> {
        Some(UpdateSupplierPayload {
            id,
            nombre: self.nombre.clone(),
            telefono: self.telefono.clone(),
            email: self.email.clone(),
            direccion: self.direccion.clone(),
            ruc: self.ruc.clone(),
        })
    }
}

pub struct SuppliersScreen {
    repo: Arc<dyn ResourceRepository<Supplier>>,
    images: ImageApi,
    session: Session,
    pub list: ListController<Supplier>,
    form: Option<FormController<SupplierForm>>,
    search: String,
}

impl SuppliersScreen {
    pub fn new(client: &ApiClient, session: Session) -> Self {
        let repo: Arc<dyn ResourceRepository<Supplier>> =
            Arc::new(RestRepository::new(client.clone()));
        Self {
            list: ListController::new(repo.clone(), session.clone()),
            images: ImageApi::new(client.clone()),
            repo,
            session,
            form: None,
            search: String::new(),
        }
    }

    pub async fn enter(&mut self) -> ListOutcome {
        self.list.load().await
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn visible(&self) -> Vec<&Supplier> {
        self.list.search(&self.search)
    }

    pub fn open_create(&mut self) -> bool {
        if !self.list.can_add() {
            return false;
        }
        self.form = Some(FormController::create(
            self.repo.clone(),
            self.images.clone(),
            self.session.clone(),
        ));
        true
    }

    pub fn open_edit(&mut self, entity: &Supplier) -> bool {
        if !self.list.can_edit() {
            return false;
        }
        self.form = Some(FormController::edit(
            self.repo.clone(),
            self.images.clone(),
            self.session.clone(),
            entity,
        ));
        true
    }

    pub fn close_modal(&mut self) {
        self.form = None;
    }

    pub fn form_mut(&mut self) -> Option<&mut FormController<SupplierForm>> {
        self.form.as_mut()
    }

    pub async fn save(&mut self) -> ListOutcome {
        let Some(form) = self.form.as_mut() else {
            return ListOutcome::Stay;
        };
        match form.submit().await {
            SubmitOutcome::Saved => {
                self.form = None;
                self.list.refresh().await
            }
            SubmitOutcome::Invalid | SubmitOutcome::Failed => ListOutcome::Stay,
        }
    }

    pub async fn toggle_status(&mut self, id: i64) -> ListOutcome {
        if !self.list.can_toggle() {
            return ListOutcome::Stay;
        }
        self.list.toggle_status(id).await
    }
}
