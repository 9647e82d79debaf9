// src/controllers/form.rs

use std::sync::Arc;

use validator::ValidationErrors;

use crate::api::images::ImageApi;
use crate::api::repository::ResourceRepository;
use crate::common::error::Result;
use crate::images::ImageSlot;
use crate::models::resource::Resource;
use crate::models::session::Session;

// O que cada tela fornece ao controlador genérico de formulário: como
// nascem os campos (em branco ou a partir da entidade selecionada),
// como se validam e como viram payload de rede.
pub trait ResourceForm: Send {
    type Resource: Resource;

    fn blank() -> Self;

    // Pré-preenchimento no modo edição, resolvendo referências
    // estrangeiras (ex.: o idCategoria de um produto).
    fn from_entity(entity: &Self::Resource) -> Self;

    fn validate(&self) -> std::result::Result<(), ValidationErrors>;

    // Recursos com imagem (produtos, usuários) expõem o slot; os demais
    // ficam com o default.
    fn image_slot_mut(&mut self) -> Option<&mut ImageSlot> {
        None
    }

    fn create_payload(&self) -> <Self::Resource as Resource>::CreatePayload;

    // `None` para recursos sem edição genérica (usuários só trocam de
    // rol, pelo endpoint dedicado).
    fn update_payload(&self, id: i64) -> Option<<Self::Resource as Resource>::UpdatePayload>;
}

// Criar ou editar: decidido por ter ou não uma entidade selecionada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    // Mutação confirmada pelo servidor; a tela fecha o modal e dispara
    // o refresh da listagem.
    Saved,
    // Validação local reprovou; campos marcados, nenhuma chamada feita.
    Invalid,
    // Upload ou mutação falharam; o modal continua aberto com os campos
    // intactos. Surfacear ou não é decisão da tela.
    Failed,
}

// O ciclo de vida do modal de criar/editar, genérico sobre o formulário
// concreto. Morre junto com o modal: nada sobrevive entre sessões.
pub struct FormController<F: ResourceForm> {
    repo: Arc<dyn ResourceRepository<F::Resource>>,
    images: ImageApi,
    session: Session,
    mode: FormMode,
    pub fields: F,
    errors: Option<ValidationErrors>,
}

impl<F: ResourceForm> FormController<F> {
    pub fn create(
        repo: Arc<dyn ResourceRepository<F::Resource>>,
        images: ImageApi,
        session: Session,
    ) -> Self {
        Self {
            repo,
            images,
            session,
            mode: FormMode::Create,
            fields: F::blank(),
            errors: None,
        }
    }

    pub fn edit(
        repo: Arc<dyn ResourceRepository<F::Resource>>,
        images: ImageApi,
        session: Session,
        entity: &F::Resource,
    ) -> Self {
        Self {
            repo,
            images,
            session,
            mode: FormMode::Edit(entity.id()),
            fields: F::from_entity(entity),
            errors: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    // Fase local do pipeline de imagem: preview imediato, sem rede.
    pub fn select_image(&mut self, file_name: &str, bytes: Vec<u8>) -> Result<()> {
        match self.fields.image_slot_mut() {
            Some(slot) => slot.select_file(file_name, bytes),
            None => Err(anyhow::anyhow!("recurso sem campo de imagem").into()),
        }
    }

    // O protocolo de submissão:
    //   1. validação local; 2. upload da imagem pendente; 3. create ou
    //   update; 4/5. o desfecho diz à tela se fecha o modal e refaz a
    //   listagem ou se fica onde está.
    pub async fn submit(&mut self) -> SubmitOutcome {
        // 1. Qualquer reprovação bloqueia antes de tocar a rede.
        if let Err(errors) = self.fields.validate() {
            self.errors = Some(errors);
            return SubmitOutcome::Invalid;
        }
        self.errors = None;

        // 2. Imagem pendente sobe primeiro; se o upload falhar a
        // entidade não é gravada com referência faltando ou velha.
        if let Some(slot) = self.fields.image_slot_mut() {
            if slot.is_pending() {
                if let Err(error) = slot.upload(&self.images, &self.session).await {
                    tracing::error!(%error, "upload de imagem falhou; gravação abortada");
                    return SubmitOutcome::Failed;
                }
            }
        }

        // 3. Payload completo (a referência persistida já está no slot).
        let result = match self.mode {
            FormMode::Create => self
                .repo
                .create(&self.fields.create_payload(), &self.session)
                .await
                .map(drop),
            FormMode::Edit(id) => match self.fields.update_payload(id) {
                Some(payload) => self.repo.update(&payload, &self.session).await.map(drop),
                None => {
                    tracing::error!("recurso sem edição genérica; submissão ignorada");
                    return SubmitOutcome::Failed;
                }
            },
        };

        match result {
            Ok(()) => SubmitOutcome::Saved,
            Err(error) => {
                tracing::error!(%error, "falha ao gravar entidade");
                SubmitOutcome::Failed
            }
        }
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.errors.as_ref()
    }

    // Marca inline de erro por campo, para a tela pintar o input.
    pub fn field_error(&self, field: &str) -> bool {
        self.errors
            .as_ref()
            .is_some_and(|errors| errors.field_errors().contains_key(field))
    }
}
