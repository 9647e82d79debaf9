// src/config.rs

use std::env;

// Endereços da API do mercado e do servidor de arquivos estáticos.
// Equivalente ao `ApiPath`/`ApiFiles` do front original.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    api_base_url: String,
    files_base_url: String,
}

impl ApiConfig {
    pub fn new(api_base_url: impl Into<String>, files_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize(api_base_url.into()),
            files_base_url: normalize(files_base_url.into()),
        }
    }

    // Carrega a configuração do ambiente, com defaults de desenvolvimento.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("MARKET_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api/".to_string());
        let files_base_url = env::var("MARKET_FILES_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080/files/".to_string());

        tracing::info!(%api_base_url, %files_base_url, "Configuração da API carregada");

        Ok(Self::new(api_base_url, files_base_url))
    }

    // Monta a URL de um endpoint relativo, ex.: `endpoint("categorias")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path.trim_start_matches('/'))
    }

    // Resolve a URL de exibição de uma referência de imagem persistida.
    pub fn file_url(&self, reference: &str) -> String {
        format!("{}{}", self.files_base_url, reference.trim_start_matches('/'))
    }
}

fn normalize(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normaliza_barras() {
        let config = ApiConfig::new("http://localhost:8080/api", "http://localhost:8080/files/");
        assert_eq!(config.endpoint("categorias"), "http://localhost:8080/api/categorias");
        assert_eq!(config.endpoint("/roles"), "http://localhost:8080/api/roles");
        assert_eq!(config.file_url("foto.png"), "http://localhost:8080/files/foto.png");
    }
}
