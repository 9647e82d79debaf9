// src/screens/categories.rs

use std::sync::Arc;

use validator::{Validate, ValidationErrors};

use crate::api::client::ApiClient;
use crate::api::images::ImageApi;
use crate::api::repository::{ResourceRepository, RestRepository};
use crate::controllers::form::{FormController, ResourceForm, SubmitOutcome};
use crate::controllers::list::{ListController, ListOutcome};
use crate::models::catalog::{Category, CreateCategoryPayload, UpdateCategoryPayload};
use crate::models::session::Session;

#[derive(Debug, Default, Validate)]
pub struct CategoryForm {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    pub nombre: String,
    pub descripcion: String,
}

impl ResourceForm for CategoryForm {
    type Resource = Category;

    fn blank() -> Self {
        Self::default()
    }

    fn from_entity(entity: &Category) -> Self {
        Self {
            nombre: entity.nombre.clone(),
            descripcion: entity.descripcion.clone(),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validate::validate(self)
    }

    fn create_payload(&self) -> CreateCategoryPayload {
        CreateCategoryPayload {
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone(),
        }
    }

    fn update_payload(&self, id: i64) -> Option<UpdateCategoryPayload> {
        Some(UpdateCategoryPayload {
            id,
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone(),
        })
    }
}

// Tela de categorias: listagem pública (GET sem bearer), mas um 403
// aqui expulsa o usuário da área administrativa.
pub struct CategoriesScreen {
    repo: Arc<dyn ResourceRepository<Category>>,
    images: ImageApi,
    session: Session,
    pub list: ListController<Category>,
    form: Option<FormController<CategoryForm>>,
    search: String,
}

impl CategoriesScreen {
    pub fn new(client: &ApiClient, session: Session) -> Self {
        let repo: Arc<dyn ResourceRepository<Category>> =
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

    pub fn visible(&self) -> Vec<&Category> {
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

    pub fn open_edit(&mut self, entity: &Category) -> bool {
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

    // A seleção morre com o modal; nada é retido entre sessões.
    pub fn close_modal(&mut self) {
        self.form = None;
    }

    pub fn form_mut(&mut self) -> Option<&mut FormController<CategoryForm>> {
        self.form.as_mut()
    }

    // Submete o modal; em caso de sucesso fecha e refaz a listagem,
    // sequenciado estritamente depois do ack da mutação.
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
