// src/models/rbac.rs

use serde::{Deserialize, Serialize};

use crate::models::resource::{Resource, ResourceKind};

// Vocabulário fixo de roles, comparado caso-sensível.
pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_VENDEDOR: &str = "VENDEDOR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    #[serde(rename = "nombreRol")]
    pub nombre: String,
    pub estado: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateRolePayload {
    #[serde(rename = "nombreRol")]
    pub nombre: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateRolePayload {
    pub id: i64,
    #[serde(rename = "nombreRol")]
    pub nombre: String,
}

impl Resource for Role {
    const KIND: ResourceKind = ResourceKind::Role;

    type CreatePayload = CreateRolePayload;
    type UpdatePayload = UpdateRolePayload;

    fn id(&self) -> i64 {
        self.id
    }

    fn estado(&self) -> bool {
        self.estado
    }

    fn search_text(&self) -> String {
        self.nombre.clone()
    }
}
