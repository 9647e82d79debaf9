// src/screens/products.rs

use std::sync::Arc;

use validator::{Validate, ValidationErrors};

use crate::api::client::ApiClient;
use crate::api::images::ImageApi;
use crate::api::repository::{ResourceRepository, RestRepository};
use crate::controllers::form::{FormController, ResourceForm, SubmitOutcome};
use crate::controllers::list::{ListController, ListOutcome};
use crate::images::ImageSlot;
use crate::models::catalog::{Category, CreateProductPayload, Product, UpdateProductPayload};
use crate::models::session::Session;

#[derive(Debug, Default, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    pub nombre: String,
    pub descripcion: String,
    #[validate(required(message = "Seleccione una categoría."))]
    pub id_categoria: Option<i64>,
    pub imagen: ImageSlot,
}

impl ResourceForm for ProductForm {
    type Resource = Product;

    fn blank() -> Self {
        Self::default()
    }

    fn from_entity(entity: &Product) -> Self {
        Self {
            nombre: entity.nombre.clone(),
            descripcion: entity.descripcion.clone(),
            // Resolve a referência estrangeira embutida para o valor que
            // o desplegable manipula.
            id_categoria: entity.categoria.as_ref().map(|c| c.id),
            // Sem arquivo novo, a referência já persistida fica como está.
            imagen: ImageSlot::from_existing(entity.imagen.clone()),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validate::validate(self)
    }

    fn image_slot_mut(&mut self) -> Option<&mut ImageSlot> {
        Some(&mut self.imagen)
    }

    fn create_payload(&self) -> CreateProductPayload {
        CreateProductPayload {
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone(),
            // Só uma referência Persisted chega aqui; o preview local
            // jamais entra no payload.
            imagen: self.imagen.reference().map(str::to_string),
            // A validação garante Some antes de qualquer submissão.
            id_categoria: self.id_categoria.unwrap_or_default(),
        }
    }

    fn update_payload(&self, id: i64) -> Option<UpdateProductPayload> {
        Some(UpdateProductPayload {
            id,
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone(),
            imagen: self.imagen.reference().map(str::to_string),
            id_categoria: self.id_categoria.unwrap_or_default(),
        })
    }
}

// Tela de produtos: além do par genérico, carrega as categorias para o
// desplegable do formulário.
pub struct ProductsScreen {
    repo: Arc<dyn ResourceRepository<Product>>,
    categories_repo: Arc<dyn ResourceRepository<Category>>,
    images: ImageApi,
    session: Session,
    pub list: ListController<Product>,
    categories: Vec<Category>,
    form: Option<FormController<ProductForm>>,
    search: String,
}

impl ProductsScreen {
    pub fn new(client: &ApiClient, session: Session) -> Self {
        let repo: Arc<dyn ResourceRepository<Product>> =
            Arc::new(RestRepository::new(client.clone()));
        Self {
            list: ListController::new(repo.clone(), session.clone()),
            categories_repo: Arc::new(RestRepository::<Category>::new(client.clone())),
            images: ImageApi::new(client.clone()),
            repo,
            session,
            categories: Vec::new(),
            form: None,
            search: String::new(),
        }
    }

    pub async fn enter(&mut self) -> ListOutcome {
        let outcome = self.list.load().await;

        // As opções do desplegable; uma falha aqui não derruba a tela.
        match self.categories_repo.list(&self.session).await {
            Ok(categories) => self.categories = categories,
            Err(error) => {
                tracing::error!(%error, "falha ao carregar categorias do formulário");
            }
        }

        outcome
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn visible(&self) -> Vec<&Product> {
        self.list.search(&self.search)
    }

    // Só categorias ativas aparecem como opção.
    pub fn category_options(&self) -> Vec<&Category> {
        self.categories.iter().filter(|c| c.estado).collect()
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

    pub fn open_edit(&mut self, entity: &Product) -> bool {
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

    pub fn form_mut(&mut self) -> Option<&mut FormController<ProductForm>> {
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
