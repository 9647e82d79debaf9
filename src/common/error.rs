// src/common/error.rs

use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// A API do mercado não devolve uma taxonomia estruturada: qualquer falha
// de mutação chega aqui como uma destas variantes e cada tela decide se
// mostra algo ou apenas loga.
#[derive(Debug, Error)]
pub enum AdminError {
    // Validação local, antes de qualquer chamada de rede.
    #[error("Erro de validação")]
    Validation(#[from] validator::ValidationErrors),

    // HTTP 403. Nas listagens de categorias e roles isso expulsa o
    // usuário da área administrativa; no resto é só diagnóstico.
    #[error("Acesso negado pelo servidor")]
    AccessDenied,

    // Falha de rede/transporte (DNS, conexão recusada, timeout...).
    #[error("Falha de transporte: {0}")]
    Transport(#[from] reqwest::Error),

    // O servidor respondeu, mas com um status de erro que não é 403.
    #[error("O servidor respondeu com status {status}")]
    Server { status: u16 },

    // O arquivo selecionado não pôde ser decodificado como imagem.
    #[error("O arquivo selecionado não é uma imagem válida")]
    InvalidImage,

    // Variante genérica para qualquer outro erro inesperado.
    #[error("Erro interno inesperado")]
    Unexpected(#[from] anyhow::Error),
}

impl AdminError {
    pub fn is_access_denied(&self) -> bool {
        matches!(self, AdminError::AccessDenied)
    }
}

pub type Result<T> = std::result::Result<T, AdminError>;
