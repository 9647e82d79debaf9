// src/controllers/role_assignment.rs

use crate::api::users::UserApi;
use crate::controllers::form::SubmitOutcome;
use crate::models::session::Session;
use crate::models::user::{ChangeRolePayload, User};

// Irmão estreito do FormController, só para usuários: quatro campos de
// contexto somente-leitura e um único campo editável, o rol. A falha
// aqui sempre aparece inline — este fluxo não usa o caminho silencioso.
pub struct RoleAssignmentController {
    api: UserApi,
    session: Session,
    user_id: i64,
    // Contexto exibido ao lado do seletor de rol.
    pub nombre: String,
    pub email: String,
    pub dni: String,
    pub telefono: String,
    pub selected_role: i64,
    error_message: Option<String>,
}

impl RoleAssignmentController {
    pub fn open(api: UserApi, session: Session, user: &User) -> Self {
        Self {
            api,
            session,
            user_id: user.id,
            nombre: user.nombre.clone(),
            email: user.email.clone(),
            dni: user.dni.clone(),
            telefono: user.telefono.clone(),
            selected_role: user.rol.id,
            error_message: None,
        }
    }

    pub fn select_role(&mut self, role_id: i64) {
        self.selected_role = role_id;
    }

    // PUT usuarios/rol; em caso de sucesso a tela fecha o modal e refaz
    // a listagem de usuários.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let payload = ChangeRolePayload {
            id_usuario: self.user_id,
            id_rol: self.selected_role,
        };

        match self.api.change_role(&payload, &self.session).await {
            Ok(()) => {
                self.error_message = None;
                SubmitOutcome::Saved
            }
            Err(error) => {
                tracing::error!(%error, id_usuario = self.user_id, "falha ao trocar rol");
                self.error_message =
                    Some("No se pudo cambiar el rol. Intente nuevamente.".to_string());
                SubmitOutcome::Failed
            }
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}
