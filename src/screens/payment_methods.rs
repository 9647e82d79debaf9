// src/screens/payment_methods.rs

use std::sync::Arc;

use validator::{Validate, ValidationErrors};

use crate::api::client::ApiClient;
use crate::api::images::ImageApi;
use crate::api::repository::{ResourceRepository, RestRepository};
use crate::controllers::form::{FormController, ResourceForm, SubmitOutcome};
use crate::controllers::list::{ListController, ListOutcome};
use crate::models::payment::{
    CreatePaymentMethodPayload, PaymentMethod, UpdatePaymentMethodPayload,
};
use crate::models::session::Session;

#[derive(Debug, Default, Validate)]
pub struct PaymentMethodForm {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    pub nombre: String,
}

impl ResourceForm for PaymentMethodForm {
    type Resource = PaymentMethod;

    fn blank() -> Self {
        Self::default()
    }

    fn from_entity(entity: &PaymentMethod) -> Self {
        Self {
            nombre: entity.nombre.clone(),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validate::validate(self)
    }

    fn create_payload(&self) -> CreatePaymentMethodPayload {
        CreatePaymentMethodPayload {
            nombre: self.nombre.clone(),
        }
    }

    fn update_payload(&self, id: i64) -> Option<UpdatePaymentMethodPayload> {
        Some(UpdatePaymentMethodPayload {
            id,
            nombre: self.nombre.clone(),
        })
    }
}

pub struct PaymentMethodsScreen {
    repo: Arc<dyn ResourceRepository<PaymentMethod>>,
    images: ImageApi,
    session: Session,
    pub list: ListController<PaymentMethod>,
    form: Option<FormController<PaymentMethodForm>>,
    search: String,
}

impl PaymentMethodsScreen {
    pub fn new(client: &ApiClient, session: Session) -> Self {
        let repo: Arc<dyn ResourceRepository<PaymentMethod>> =
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

    pub fn visible(&self) -> Vec<&PaymentMethod> {
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

    pub fn open_edit(&mut self, entity: &PaymentMethod) -> bool {
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

    pub fn form_mut(&mut self) -> Option<&mut FormController<PaymentMethodForm>> {
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
