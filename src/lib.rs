// src/lib.rs

// Núcleo reutilizável da administração do mini-market: política de
// permissões, repositórios REST, pipeline de imagens e os controladores
// de listagem/formulário que as seis telas repetem.
//
// O shell que embute esta crate (GUI/TUI/Web) é dono do loop de eventos,
// da navegação e do fluxo de autenticação; aqui a sessão chega pronta.

pub mod api;
pub mod common;
pub mod config;
pub mod controllers;
pub mod images;
pub mod models;
pub mod policy;
pub mod screens;

// Reexportações principais
pub use api::{ApiClient, ImageApi, ResourceRepository, RestRepository, UserApi};
pub use common::error::{AdminError, Result};
pub use config::ApiConfig;
pub use controllers::{
    FormController, FormMode, ListController, ListOutcome, ListState,
    ResourceForm, RoleAssignmentController, SubmitOutcome,
};
pub use images::ImageSlot;
pub use models::{Resource, ResourceKind, Session, SessionUser};
pub use policy::{allows, Action};
