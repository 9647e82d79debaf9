// src/images.rs

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::api::images::ImageApi;
use crate::common::error::{AdminError, Result};
use crate::config::ApiConfig;
use crate::models::session::Session;

// O pipeline de imagem em duas fases, como máquina de estados explícita:
//
//   Empty → LocalPending → Persisted
//
// Selecionar um arquivo gera na hora um preview local (data URI), sem
// rede nenhuma. O upload só acontece na gravação, e enquanto ele não
// devolve a referência opaca o payload da entidade não é montado — a
// regra "upload falhou, gravação abortada" sai de graça do tipo.
#[derive(Debug, Clone, Default)]
pub enum ImageSlot {
    #[default]
    Empty,
    LocalPending {
        file_name: String,
        mime: String,
        bytes: Vec<u8>,
        preview_data_uri: String,
    },
    Persisted {
        reference: String,
    },
}

impl ImageSlot {
    pub fn empty() -> Self {
        ImageSlot::Empty
    }

    // Ponto de partida no modo edição: a referência já persistida da
    // entidade, que permanece intocada se nenhum arquivo novo for
    // escolhido.
    pub fn from_existing(reference: Option<String>) -> Self {
        match reference {
            Some(reference) if !reference.is_empty() => ImageSlot::Persisted { reference },
            _ => ImageSlot::Empty,
        }
    }

    // Fase local do pipeline: valida que os bytes são uma imagem
    // decodificável e monta o preview. Funciona offline.
    pub fn select_file(&mut self, file_name: &str, bytes: Vec<u8>) -> Result<()> {
        let format = image::guess_format(&bytes).map_err(|_| AdminError::InvalidImage)?;
        let mime = format.to_mime_type().to_string();
        let preview_data_uri = format!("data:{};base64,{}", mime, BASE64.encode(&bytes));

        *self = ImageSlot::LocalPending {
            file_name: file_name.to_string(),
            mime,
            bytes,
            preview_data_uri,
        };
        Ok(())
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ImageSlot::LocalPending { .. })
    }

    // A referência que entra no campo `imagen` da entidade. Só um slot
    // Persisted tem uma; o preview local jamais é gravado.
    pub fn reference(&self) -> Option<&str> {
        match self {
            ImageSlot::Persisted { reference } => Some(reference),
            _ => None,
        }
    }

    // O que a tela mostra: o data URI otimista enquanto pendente, a URL
    // do servidor de arquivos depois de persistido.
    pub fn preview(&self, config: &ApiConfig) -> Option<String> {
        match self {
            ImageSlot::Empty => None,
            ImageSlot::LocalPending { preview_data_uri, .. } => Some(preview_data_uri.clone()),
            ImageSlot::Persisted { reference } => Some(config.file_url(reference)),
        }
    }

    // Fase remota: envia o arquivo pendente e avança para Persisted.
    // Empty e Persisted são no-ops; um erro aqui deixa o slot como está
    // e aborta a gravação inteira no chamador.
    pub async fn upload(&mut self, api: &ImageApi, session: &Session) -> Result<()> {
        if let ImageSlot::LocalPending {
            file_name,
            mime,
            bytes,
            ..
        } = self
        {
            let reference = api.upload(file_name, mime, bytes.clone(), session).await?;
            *self = ImageSlot::Persisted { reference };
        }
        Ok(())
    }
}
