// src/api/users.rs

use crate::api::client::ApiClient;
use crate::common::error::Result;
use crate::models::session::Session;
use crate::models::user::ChangeRolePayload;

// Endpoint dedicado de troca de rol (PUT usuarios/rol), separado do
// update genérico de propósito: é a única mutação permitida sobre um
// usuário existente.
#[derive(Clone)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn change_role(&self, payload: &ChangeRolePayload, session: &Session) -> Result<()> {
        tracing::debug!(
            id_usuario = payload.id_usuario,
            id_rol = payload.id_rol,
            "trocando rol do usuário"
        );
        self.client
            .put_no_content("usuarios/rol", payload, session)
            .await
    }
}
