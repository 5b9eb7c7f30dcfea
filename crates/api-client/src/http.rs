//! HTTP Client
//!
//! Thin wrapper over reqwest that prefixes the API base path, injects the
//! bearer token from the session, and maps non-2xx statuses to ApiError.

use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::session::Session;

/// REST client bound to one backend base path and one session scope
#[derive(Clone)]
pub struct ApiClient {
    base: &'static str,
    session: Session,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: &'static str, session: Session) -> Self {
        Self {
            base,
            session,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn with_auth(&self, req: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn ok(resp: Response) -> Result<Response, ApiError> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let code = resp.status().as_u16();
        let detail = resp.text().await.unwrap_or_default();
        Err(ApiError::from_status(code, detail))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.with_auth(self.http.get(self.url(path))).send().await?;
        Ok(Self::ok(resp).await?.json().await?)
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self
            .with_auth(self.http.post(self.url(path)))
            .json(body)
            .send()
            .await?;
        Ok(Self::ok(resp).await?.json().await?)
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self
            .with_auth(self.http.put(self.url(path)))
            .json(body)
            .send()
            .await?;
        Ok(Self::ok(resp).await?.json().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let resp = self
            .with_auth(self.http.delete(self.url(path)))
            .send()
            .await?;
        Self::ok(resp).await?;
        Ok(())
    }

    /// Upload one file as multipart form data (used by /upload/* endpoints)
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        field: &str,
        filename: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<T, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let form = Form::new().part(field.to_string(), part);
        let resp = self
            .with_auth(self.http.post(self.url(path)))
            .multipart(form)
            .send()
            .await?;
        Ok(Self::ok(resp).await?.json().await?)
    }
}
