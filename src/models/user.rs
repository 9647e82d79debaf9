// src/models/user.rs

use serde::{Deserialize, Serialize};

use crate::models::rbac::Role;
use crate::models::resource::{Resource, ResourceKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub nombre: String,
    pub apellidos: String,
    pub email: String,
    pub dni: String,
    pub telefono: String,
    pub imagen: Option<String>,
    pub rol: Role,
    pub estado: bool,
}

// Payload do registro (POST usuarios, sem bearer). Quando nenhum arquivo
// foi escolhido a API espera `imagen: "default.png"`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterUserPayload {
    pub nombre: String,
    pub apellidos: String,
    pub email: String,
    pub dni: String,
    pub telefono: String,
    pub contrasena: String,
    #[serde(rename = "rolId")]
    pub rol_id: i64,
    pub imagen: String,
}

// Payload do endpoint dedicado PUT usuarios/rol.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeRolePayload {
    #[serde(rename = "idUsuario")]
    pub id_usuario: i64,
    #[serde(rename = "idRol")]
    pub id_rol: i64,
}

// A API não expõe um PUT usuarios genérico: a única mutação de um
// usuário existente é a troca de rol, pelo endpoint dedicado. Um enum
// vazio torna `update` inchamável para este recurso.
#[derive(Debug, Clone, Serialize)]
pub enum NoUserUpdate {}

impl Resource for User {
    const KIND: ResourceKind = ResourceKind::User;

    type CreatePayload = RegisterUserPayload;
    type UpdatePayload = NoUserUpdate;

    fn id(&self) -> i64 {
        self.id
    }

    fn estado(&self) -> bool {
        self.estado
    }

    // A tela de usuários busca por nome OU DNI.
    fn search_text(&self) -> String {
        format!("{} {}", self.nombre, self.dni)
    }
}
