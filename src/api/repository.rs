// src/api/repository.rs

use std::marker::PhantomData;

use async_trait::async_trait;

use crate::api::client::ApiClient;
use crate::common::error::Result;
use crate::models::resource::Resource;
use crate::models::session::Session;

// O contrato de acesso a um recurso administrável. Fica atrás de um
// trait para os controladores poderem rodar contra fakes nos testes.
#[async_trait]
pub trait ResourceRepository<R: Resource>: Send + Sync {
    // GET: a coleção inteira, sem paginação.
    async fn list(&self, session: &Session) -> Result<Vec<R>>;

    // POST: payload sem id; devolve a entidade criada.
    async fn create(&self, payload: &R::CreatePayload, session: &Session) -> Result<R>;

    // PUT: payload com id; devolve a entidade atualizada.
    async fn update(&self, payload: &R::UpdatePayload, session: &Session) -> Result<R>;

    // DELETE <recurso>/<id>: flip do `estado` no servidor. Duas chamadas
    // devolvem a linha ao estado original; nenhuma linha é destruída.
    async fn toggle_status(&self, id: i64, session: &Session) -> Result<()>;
}

// Implementação REST genérica: a tabela em ResourceKind concentra tudo o
// que varia por recurso, então uma única struct serve para os seis.
pub struct RestRepository<R: Resource> {
    client: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> RestRepository<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> Clone for RestRepository<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> ResourceRepository<R> for RestRepository<R> {
    async fn list(&self, session: &Session) -> Result<Vec<R>> {
        tracing::debug!(recurso = R::KIND.path(), "listando coleção");
        self.client
            .get_json(R::KIND.path(), session, R::KIND.list_is_public())
            .await
    }

    async fn create(&self, payload: &R::CreatePayload, session: &Session) -> Result<R> {
        tracing::debug!(recurso = R::KIND.path(), "criando entidade");
        self.client
            .post_json(R::KIND.path(), payload, session, R::KIND.create_is_public())
            .await
    }

    async fn update(&self, payload: &R::UpdatePayload, session: &Session) -> Result<R> {
        tracing::debug!(recurso = R::KIND.path(), "atualizando entidade");
        self.client.put_json(R::KIND.path(), payload, session).await
    }

    async fn toggle_status(&self, id: i64, session: &Session) -> Result<()> {
        tracing::debug!(recurso = R::KIND.path(), id, "alternando estado");
        self.client
            .delete(&format!("{}/{}", R::KIND.path(), id), session)
            .await
    }
}
