// src/api/images.rs

use reqwest::multipart::{Form, Part};

use crate::api::client::ApiClient;
use crate::common::error::Result;
use crate::models::session::Session;

// Fase remota do pipeline de imagens: POST images com o arquivo bruto
// num multipart (parte "image"); a resposta é a referência opaca que o
// servidor de arquivos conhece.
#[derive(Clone)]
pub struct ImageApi {
    client: ApiClient,
}

impl ImageApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn upload(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
        session: &Session,
    ) -> Result<String> {
        tracing::debug!(file_name, mime, tamanho = bytes.len(), "enviando imagem");

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)?;
        let form = Form::new().part("image", part);

        let reference = self
            .client
            .post_multipart_text("images", form, session)
            .await?;
        Ok(reference.trim().to_string())
    }
}
