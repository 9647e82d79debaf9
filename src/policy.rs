// src/policy.rs

// A tabela declarativa de permissões que as seis telas consultavam de
// forma espalhada (`user?.rol.nombreRol === 'ADMIN'`...). É um portão de
// apresentação: decide quais botões aparecem. A autorização de verdade
// continua sendo do servidor, que responde 403 quando discorda.

use crate::models::rbac::{ROLE_ADMIN, ROLE_VENDEDOR};
use crate::models::resource::ResourceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Create,
    Edit,
    ToggleStatus,
}

// Pura e total sobre 6 recursos × 4 ações. `role = None` (sem sessão)
// nega tudo.
pub fn allows(role: Option<&str>, resource: ResourceKind, action: Action) -> bool {
    let Some(role) = role else {
        return false;
    };

    match action {
        // Com sessão presente, qualquer rol enxerga as listagens.
        Action::View => true,

        Action::Create => match resource {
            // Roles e usuários só nascem pela mão de um ADMIN.
            ResourceKind::Role | ResourceKind::User => role == ROLE_ADMIN,
            _ => role == ROLE_ADMIN || role == ROLE_VENDEDOR,
        },

        Action::Edit | Action::ToggleStatus => role == ROLE_ADMIN,
    }
}
