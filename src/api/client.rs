// src/api/client.rs

use reqwest::multipart;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::common::error::{AdminError, Result};
use crate::config::ApiConfig;
use crate::models::session::Session;

// Envelope fino sobre o reqwest: monta URLs a partir do ApiConfig,
// anexa o bearer da sessão e traduz status HTTP para o AdminError.
// Tudo acima dele (repositórios, upload de imagem) fala só em termos de
// caminhos relativos.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // `public = true` reproduz as duas chamadas sem bearer do sistema:
    // GET categorias e POST usuarios (registro).
    fn request(&self, method: Method, path: &str, session: &Session, public: bool) -> RequestBuilder {
        let mut builder = self.http.request(method, self.config.endpoint(path));
        if !public {
            if let Some(token) = session.token() {
                builder = builder.bearer_auth(token);
            }
        }
        builder
    }

    async fn execute(builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        check_status(response)
    }

    pub async fn get_json<T>(&self, path: &str, session: &Session, public: bool) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = Self::execute(self.request(Method::GET, path, session, public)).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        session: &Session,
        public: bool,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response =
            Self::execute(self.request(Method::POST, path, session, public).json(body)).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B, session: &Session) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response =
            Self::execute(self.request(Method::PUT, path, session, false).json(body)).await?;
        Ok(response.json::<T>().await?)
    }

    // PUT cujo corpo de resposta não interessa (usuarios/rol).
    pub async fn put_no_content<B>(&self, path: &str, body: &B, session: &Session) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        Self::execute(self.request(Method::PUT, path, session, false).json(body)).await?;
        Ok(())
    }

    // DELETE com formato de exclusão mas efeito de flip de `estado`.
    pub async fn delete(&self, path: &str, session: &Session) -> Result<()> {
        Self::execute(self.request(Method::DELETE, path, session, false)).await?;
        Ok(())
    }

    // POST multipart que devolve o corpo como texto puro (a referência
    // opaca do upload de imagem).
    pub async fn post_multipart_text(
        &self,
        path: &str,
        form: multipart::Form,
        session: &Session,
    ) -> Result<String> {
        let response =
            Self::execute(self.request(Method::POST, path, session, false).multipart(form)).await?;
        Ok(response.text().await?)
    }
}

// 403 vira AccessDenied; qualquer outro status de erro vira Server.
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status == StatusCode::FORBIDDEN {
        return Err(AdminError::AccessDenied);
    }
    if !status.is_success() {
        return Err(AdminError::Server {
            status: status.as_u16(),
        });
    }
    Ok(response)
}
