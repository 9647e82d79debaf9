// src/models/catalog.rs

use serde::{Deserialize, Serialize};

use crate::models::resource::{Resource, ResourceKind};

// --- 1. Categorias ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategoria")]
    pub id: i64,
    pub nombre: String,
    pub descripcion: String,
    pub estado: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateCategoryPayload {
    pub nombre: String,
    pub descripcion: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateCategoryPayload {
    pub id: i64,
    pub nombre: String,
    pub descripcion: String,
}

impl Resource for Category {
    const KIND: ResourceKind = ResourceKind::Category;

    type CreatePayload = CreateCategoryPayload;
    type UpdatePayload = UpdateCategoryPayload;

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

// --- 2. Produtos ---

// A listagem devolve a categoria embutida; os payloads de escrita levam
// só o `idCategoria`, como a API espera.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "idProducto")]
    pub id: i64,
    pub nombre: String,
    pub descripcion: String,
    // Referência opaca persistida no servidor de arquivos, nunca o
    // preview local.
    pub imagen: Option<String>,
    pub categoria: Option<Category>,
    pub estado: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateProductPayload {
    pub nombre: String,
    pub descripcion: String,
    pub imagen: Option<String>,
    #[serde(rename = "idCategoria")]
    pub id_categoria: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateProductPayload {
    pub id: i64,
    pub nombre: String,
    pub descripcion: String,
    pub imagen: Option<String>,
    #[serde(rename = "idCategoria")]
    pub id_categoria: i64,
}

impl Resource for Product {
    const KIND: ResourceKind = ResourceKind::Product;

    type CreatePayload = CreateProductPayload;
    type UpdatePayload = UpdateProductPayload;

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
