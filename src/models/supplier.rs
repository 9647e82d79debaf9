// src/models/supplier.rs

use serde::{Deserialize, Serialize};

use crate::models::resource::{Resource, ResourceKind};

// Fornecedores (`proveedores` na API). O RUC é livre neste núcleo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "idProveedor")]
    pub id: i64,
    #[serde(rename = "nombreProveedor")]
    pub nombre: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
    pub ruc: String,
    pub estado: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateSupplierPayload {
    #[serde(rename = "nombreProveedor")]
    pub nombre: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
    pub ruc: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateSupplierPayload {
    pub id: i64,
    #[serde(rename = "nombreProveedor")]
    pub nombre: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
    pub ruc: String,
}

impl Resource for Supplier {
    const KIND: ResourceKind = ResourceKind::Supplier;

    type CreatePayload = CreateSupplierPayload;
    type UpdatePayload = UpdateSupplierPayload;

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
