// src/models/session.rs

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::models::rbac::Role;

// Usuário autenticado, como chega do fluxo de login (fora desta crate).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub nombre: String,
    pub rol: Role,
}

#[derive(Debug, Default)]
struct SessionState {
    user: Option<SessionUser>,
    token: Option<String>,
}

// Handle compartilhado e somente-leitura (do ponto de vista do núcleo)
// para o contexto de sessão. O shell é dono do ciclo de vida: login e
// logout acontecem lá fora e ficam visíveis aqui através do mesmo Arc.
#[derive(Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<SessionState>>,
}

impl Session {
    // Sessão sem usuário nem token (visitante).
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: SessionUser, token: impl Into<String>) -> Self {
        let session = Self::default();
        session.sign_in(user, token);
        session
    }

    // Chamado pelo shell após o login; re-disparar os `load()` das telas
    // dependentes é responsabilidade dele.
    pub fn sign_in(&self, user: SessionUser, token: impl Into<String>) {
        let mut state = self.inner.write().expect("lock da sessão envenenado");
        state.user = Some(user);
        state.token = Some(token.into());
    }

    pub fn sign_out(&self) {
        let mut state = self.inner.write().expect("lock da sessão envenenado");
        state.user = None;
        state.token = None;
    }

    pub fn token(&self) -> Option<String> {
        let state = self.inner.read().expect("lock da sessão envenenado");
        state.token.clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        let state = self.inner.read().expect("lock da sessão envenenado");
        state.user.clone()
    }

    // Nome do rol do usuário atual ("ADMIN", "VENDEDOR"...), se houver
    // sessão. É isso que alimenta a PermissionPolicy.
    pub fn role_name(&self) -> Option<String> {
        let state = self.inner.read().expect("lock da sessão envenenado");
        state.user.as_ref().map(|u| u.rol.nombre.clone())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("role", &self.role_name())
            .field("has_token", &self.token().is_some())
            .finish()
    }
}
