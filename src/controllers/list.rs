// src/controllers/list.rs

use std::sync::Arc;

use crate::api::repository::ResourceRepository;
use crate::common::error::AdminError;
use crate::models::resource::Resource;
use crate::models::session::Session;
use crate::policy::{allows, Action};

// A máquina de estados que toda listagem repete. Loading não guarda o
// snapshot anterior de propósito: a tela mostra um indicador bloqueante,
// nunca uma lista velha (sem stale-while-revalidate).
#[derive(Debug)]
pub enum ListState<R> {
    Idle,
    Loading,
    Ready(Vec<R>),
    Errored,
}

// O que o shell deve fazer depois de uma operação de listagem. ExitAdmin
// reproduz o `navigate('/')` das telas de categorias e roles diante de
// um 403: abandonar a área administrativa inteira.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutcome {
    Stay,
    ExitAdmin,
}

pub struct ListController<R: Resource> {
    repo: Arc<dyn ResourceRepository<R>>,
    session: Session,
    state: ListState<R>,
}

impl<R: Resource> ListController<R> {
    pub fn new(repo: Arc<dyn ResourceRepository<R>>, session: Session) -> Self {
        Self {
            repo,
            session,
            state: ListState::Idle,
        }
    }

    pub fn state(&self) -> &ListState<R> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    // O snapshot atual; vazio fora de Ready.
    pub fn items(&self) -> &[R] {
        match &self.state {
            ListState::Ready(items) => items,
            _ => &[],
        }
    }

    // Projeção pura sobre o último snapshot: substring case-insensitive,
    // sem nova consulta ao backend.
    pub fn search(&self, term: &str) -> Vec<&R> {
        let needle = term.to_lowercase();
        self.items()
            .iter()
            .filter(|item| item.search_text().to_lowercase().contains(&needle))
            .collect()
    }

    // Portões de apresentação, recalculados a cada consulta a partir da
    // política e do rol da sessão. A autorização real é do servidor.
    pub fn can_add(&self) -> bool {
        allows(self.session.role_name().as_deref(), R::KIND, Action::Create)
    }

    pub fn can_edit(&self) -> bool {
        allows(self.session.role_name().as_deref(), R::KIND, Action::Edit)
    }

    pub fn can_toggle(&self) -> bool {
        allows(
            self.session.role_name().as_deref(),
            R::KIND,
            Action::ToggleStatus,
        )
    }

    // Busca autoritativa da coleção (montagem da tela e refresh após
    // cada mutação confirmada). O snapshot é substituído por inteiro,
    // nunca remendado localmente.
    pub async fn load(&mut self) -> ListOutcome {
        self.state = ListState::Loading;

        match self.repo.list(&self.session).await {
            Ok(items) => {
                self.state = ListState::Ready(items);
                ListOutcome::Stay
            }
            Err(AdminError::AccessDenied) if R::KIND.exits_admin_on_denied() => {
                tracing::warn!(
                    recurso = R::KIND.path(),
                    "acesso negado à listagem; saindo da área administrativa"
                );
                self.state = ListState::Errored;
                ListOutcome::ExitAdmin
            }
            Err(error) => {
                tracing::error!(recurso = R::KIND.path(), %error, "falha ao listar recurso");
                self.state = ListState::Errored;
                ListOutcome::Stay
            }
        }
    }

    pub async fn refresh(&mut self) -> ListOutcome {
        self.load().await
    }

    // Soft-delete/reativação. Só refaz a listagem depois do ack do
    // servidor; em caso de falha loga e deixa a tela como está.
    pub async fn toggle_status(&mut self, id: i64) -> ListOutcome {
        match self.repo.toggle_status(id, &self.session).await {
            Ok(()) => self.refresh().await,
            Err(error) => {
                tracing::error!(recurso = R::KIND.path(), id, %error, "falha ao alternar estado");
                ListOutcome::Stay
            }
        }
    }
}
