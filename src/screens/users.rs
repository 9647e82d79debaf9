// src/screens/users.rs

use std::sync::Arc;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::api::client::ApiClient;
use crate::api::images::ImageApi;
use crate::api::repository::{ResourceRepository, RestRepository};
use crate::api::users::UserApi;
use crate::controllers::form::{FormController, ResourceForm, SubmitOutcome};
use crate::controllers::list::{ListController, ListOutcome};
use crate::controllers::role_assignment::RoleAssignmentController;
use crate::images::ImageSlot;
use crate::models::rbac::Role;
use crate::models::session::Session;
use crate::models::user::{NoUserUpdate, RegisterUserPayload, User};

// ---
// Validações customizadas (comprimento exato + só dígitos)
// ---

fn validate_dni(dni: &str) -> Result<(), ValidationError> {
    if dni.len() == 8 && dni.chars().all(|c| c.is_ascii_digit()) {
        return Ok(());
    }
    let mut err = ValidationError::new("dni");
    err.message = Some("El DNI debe tener exactamente 8 dígitos".into());
    Err(err)
}

fn validate_telefono(telefono: &str) -> Result<(), ValidationError> {
    if telefono.len() == 9 && telefono.chars().all(|c| c.is_ascii_digit()) {
        return Ok(());
    }
    let mut err = ValidationError::new("telefono");
    err.message = Some("El teléfono debe tener exactamente 9 dígitos".into());
    Err(err)
}

// ---
// Formulário de registro
// ---

#[derive(Debug, Default, Validate)]
pub struct RegistrationForm {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    pub nombre: String,
    #[validate(length(min = 1, message = "Los apellidos son obligatorios."))]
    pub apellidos: String,
    #[validate(email(message = "El correo no es válido."))]
    pub email: String,
    #[validate(custom(function = "validate_dni"))]
    pub dni: String,
    #[validate(custom(function = "validate_telefono"))]
    pub telefono: String,
    #[validate(length(min = 1, message = "La contraseña es obligatoria."))]
    pub contrasena: String,
    #[validate(must_match(other = "contrasena", message = "Las contraseñas no coinciden."))]
    pub confirmar_contrasena: String,
    #[validate(required(message = "Seleccione un rol."))]
    pub rol_id: Option<i64>,
    pub imagen: ImageSlot,
}

impl ResourceForm for RegistrationForm {
    type Resource = User;

    fn blank() -> Self {
        Self::default()
    }

    // Registro é sempre criação; o pré-preenchimento existe só para
    // cumprir o contrato (a tela nunca abre este form em modo edição).
    fn from_entity(user: &User) -> Self {
        Self {
            nombre: user.nombre.clone(),
            apellidos: user.apellidos.clone(),
            email: user.email.clone(),
            dni: user.dni.clone(),
            telefono: user.telefono.clone(),
            rol_id: Some(user.rol.id),
            imagen: ImageSlot::from_existing(user.imagen.clone()),
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut result = Validate::validate(self);

        // O must_match marca só o campo de confirmação; a tela original
        // pinta os dois campos de senha, então marcamos o outro também.
        if self.contrasena != self.confirmar_contrasena {
            let mut errors = match result {
                Err(errors) => errors,
                Ok(()) => ValidationErrors::new(),
            };
            let mut err = ValidationError::new("must_match");
            err.message = Some("Las contraseñas no coinciden.".into());
            errors.add("contrasena", err);
            result = Err(errors);
        }

        result
    }

    fn image_slot_mut(&mut self) -> Option<&mut ImageSlot> {
        Some(&mut self.imagen)
    }

    fn create_payload(&self) -> RegisterUserPayload {
        RegisterUserPayload {
            nombre: self.nombre.clone(),
            apellidos: self.apellidos.clone(),
            email: self.email.clone(),
            dni: self.dni.clone(),
            telefono: self.telefono.clone(),
            contrasena: self.contrasena.clone(),
            // A validação garante Some antes de qualquer submissão.
            rol_id: self.rol_id.unwrap_or_default(),
            // Sem arquivo escolhido, a API espera o placeholder.
            imagen: self
                .imagen
                .reference()
                .unwrap_or("default.png")
                .to_string(),
        }
    }

    fn update_payload(&self, _id: i64) -> Option<NoUserUpdate> {
        None
    }
}

// ---
// Tela de usuários
// ---

// Além do par genérico: registro (com mensagem inline em caso de
// falha), troca de rol pelo modal dedicado e filtro extra por rol.
pub struct UsersScreen {
    repo: Arc<dyn ResourceRepository<User>>,
    roles_repo: Arc<dyn ResourceRepository<Role>>,
    user_api: UserApi,
    images: ImageApi,
    session: Session,
    pub list: ListController<User>,
    roles: Vec<Role>,
    register: Option<FormController<RegistrationForm>>,
    role_modal: Option<RoleAssignmentController>,
    search: String,
    role_filter: Option<String>,
    register_error: Option<String>,
}

impl UsersScreen {
    pub fn new(client: &ApiClient, session: Session) -> Self {
        let repo: Arc<dyn ResourceRepository<User>> = Arc::new(RestRepository::new(client.clone()));
        Self {
            list: ListController::new(repo.clone(), session.clone()),
            roles_repo: Arc::new(RestRepository::<Role>::new(client.clone())),
            user_api: UserApi::new(client.clone()),
            images: ImageApi::new(client.clone()),
            repo,
            session,
            roles: Vec::new(),
            register: None,
            role_modal: None,
            search: String::new(),
            role_filter: None,
            register_error: None,
        }
    }

    pub async fn enter(&mut self) -> ListOutcome {
        let outcome = self.list.load().await;

        // Opções de rol para o registro e a troca de rol.
        match self.roles_repo.list(&self.session).await {
            Ok(roles) => self.roles = roles,
            Err(error) => {
                tracing::error!(%error, "falha ao carregar roles do formulário");
            }
        }

        outcome
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    // Filtro adicional por nome exato de rol ("ADMIN", "VENDEDOR"...).
    pub fn set_role_filter(&mut self, role_name: Option<String>) {
        self.role_filter = role_name;
    }

    // Busca por nombre OU DNI, combinada com o filtro de rol.
    pub fn visible(&self) -> Vec<&User> {
        self.list
            .search(&self.search)
            .into_iter()
            .filter(|user| match &self.role_filter {
                Some(role_name) => user.rol.nombre == *role_name,
                None => true,
            })
            .collect()
    }

    pub fn role_options(&self) -> Vec<&Role> {
        self.roles.iter().filter(|r| r.estado).collect()
    }

    // --- Registro ---

    pub fn open_register(&mut self) -> bool {
        if !self.list.can_add() {
            return false;
        }
        self.register_error = None;
        self.register = Some(FormController::create(
            self.repo.clone(),
            self.images.clone(),
            self.session.clone(),
        ));
        true
    }

    pub fn close_register(&mut self) {
        self.register = None;
        self.register_error = None;
    }

    pub fn register_form_mut(&mut self) -> Option<&mut FormController<RegistrationForm>> {
        self.register.as_mut()
    }

    // Este fluxo não usa o caminho silencioso: a falha de rede aparece
    // inline, como no form original.
    pub async fn submit_registration(&mut self) -> ListOutcome {
        let Some(form) = self.register.as_mut() else {
            return ListOutcome::Stay;
        };
        match form.submit().await {
            SubmitOutcome::Saved => {
                self.register = None;
                self.register_error = None;
                self.list.refresh().await
            }
            SubmitOutcome::Invalid => ListOutcome::Stay,
            SubmitOutcome::Failed => {
                self.register_error = Some("Error en el registro.".to_string());
                ListOutcome::Stay
            }
        }
    }

    pub fn registration_error(&self) -> Option<&str> {
        self.register_error.as_deref()
    }

    // --- Troca de rol ---

    pub fn open_role_modal(&mut self, user: &User) -> bool {
        if !self.list.can_edit() {
            return false;
        }
        self.role_modal = Some(RoleAssignmentController::open(
            self.user_api.clone(),
            self.session.clone(),
            user,
        ));
        true
    }

    pub fn close_role_modal(&mut self) {
        self.role_modal = None;
    }

    pub fn role_modal_mut(&mut self) -> Option<&mut RoleAssignmentController> {
        self.role_modal.as_mut()
    }

    pub async fn submit_role_change(&mut self) -> ListOutcome {
        let Some(modal) = self.role_modal.as_mut() else {
            return ListOutcome::Stay;
        };
        match modal.submit().await {
            SubmitOutcome::Saved => {
                self.role_modal = None;
                self.list.refresh().await
            }
            // A mensagem inline fica no controlador; o modal segue aberto.
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
