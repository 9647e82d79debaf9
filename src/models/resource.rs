// src/models/resource.rs

use serde::de::DeserializeOwned;
use serde::Serialize;

// Os seis recursos administráveis. A tabela abaixo concentra tudo o que
// varia entre eles no nível do transporte (caminho REST e quais chamadas
// são públicas), para que o repositório genérico não precise de casos
// especiais espalhados.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Category,
    Product,
    Supplier,
    Role,
    PaymentMethod,
    User,
}

impl ResourceKind {
    // Caminho base do recurso na API do mercado.
    pub fn path(self) -> &'static str {
        match self {
            ResourceKind::Category => "categorias",
            ResourceKind::Product => "productos",
            ResourceKind::Supplier => "proveedores",
            ResourceKind::Role => "roles",
            ResourceKind::PaymentMethod => "metodos-pago",
            ResourceKind::User => "usuarios",
        }
    }

    // GET categorias é o único listado público (sem bearer).
    pub fn list_is_public(self) -> bool {
        matches!(self, ResourceKind::Category)
    }

    // POST usuarios é o registro, também sem bearer.
    pub fn create_is_public(self) -> bool {
        matches!(self, ResourceKind::User)
    }

    // Um 403 ao listar categorias ou roles expulsa o usuário da área
    // administrativa; nos demais recursos a tela apenas fica como está.
    pub fn exits_admin_on_denied(self) -> bool {
        matches!(self, ResourceKind::Category | ResourceKind::Role)
    }

    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Category,
        ResourceKind::Product,
        ResourceKind::Supplier,
        ResourceKind::Role,
        ResourceKind::PaymentMethod,
        ResourceKind::User,
    ];
}

// O contrato que cada entidade administrável cumpre para participar do
// par genérico ListController/FormController.
pub trait Resource: Clone + Send + Sync + DeserializeOwned + 'static {
    const KIND: ResourceKind;

    type CreatePayload: Serialize + Send + Sync;
    type UpdatePayload: Serialize + Send + Sync;

    fn id(&self) -> i64;

    // A flag única de ciclo de vida (`estado`): true = ativo.
    fn estado(&self) -> bool;

    // Texto sobre o qual a busca client-side faz substring
    // case-insensitive. Usuário devolve nome + DNI, os demais o nome.
    fn search_text(&self) -> String;
}
