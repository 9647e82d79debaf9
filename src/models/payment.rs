// src/models/payment.rs

use serde::{Deserialize, Serialize};

use crate::models::resource::{Resource, ResourceKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(rename = "idMetodoPago")]
    pub id: i64,
    #[serde(rename = "nombreMetodo")]
    pub nombre: String,
    pub estado: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePaymentMethodPayload {
    #[serde(rename = "nombreMetodo")]
    pub nombre: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdatePaymentMethodPayload {
    pub id: i64,
    #[serde(rename = "nombreMetodo")]
    pub nombre: String,
}

impl Resource for PaymentMethod {
    const KIND: ResourceKind = ResourceKind::PaymentMethod;

    type CreatePayload = CreatePaymentMethodPayload;
    type UpdatePayload = UpdatePaymentMethodPayload;

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
