// SPDX-License-Identifier: MPL-2.0
//! Supabase-compatible backend adapter.
//!
//! One client implements the sign-in, record and storage ports over the
//! backend's REST API. Reads use the public key; writes carry the admin's
//! bearer token so row-level security applies.

mod routes;
mod rows;

pub use routes::{object_name, Endpoint};

use crate::application::port::{
    Authenticator, InfoPageStore, MediaStorage, ProjectCatalog, ServiceError, Session,
};
use crate::domain::portfolio::{InfoPage, Project, ProjectId, ProjectPatch, UploadFile};
use crate::infrastructure::http;
use reqwest::header::CONTENT_TYPE;
use rows::{Credentials, InfoPageBody, InfoPageRow, ProjectBody, ProjectRow, TokenResponse};
use std::sync::Arc;

/// HTTP client for one backend project. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    endpoint: Option<Arc<Endpoint>>,
}

impl SupabaseClient {
    /// Creates the adapter. Without an endpoint every call fails with
    /// [`ServiceError::NotConfigured`].
    #[must_use]
    pub fn new(http: reqwest::Client, endpoint: Option<Endpoint>) -> Self {
        Self {
            http,
            endpoint: endpoint.map(Arc::new),
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    fn endpoint(&self) -> Result<&Endpoint, ServiceError> {
        self.endpoint.as_deref().ok_or(ServiceError::NotConfigured)
    }

    /// Request with the public key only.
    fn public(
        &self,
        method: reqwest::Method,
        url: String,
    ) -> Result<reqwest::RequestBuilder, ServiceError> {
        let endpoint = self.endpoint()?;
        Ok(self
            .http
            .request(method, url)
            .header("apikey", endpoint.anon_key())
            .bearer_auth(endpoint.anon_key()))
    }

    /// Request on behalf of the signed-in admin.
    fn authed(
        &self,
        method: reqwest::Method,
        url: String,
        session: &Session,
    ) -> Result<reqwest::RequestBuilder, ServiceError> {
        let endpoint = self.endpoint()?;
        Ok(self
            .http
            .request(method, url)
            .header("apikey", endpoint.anon_key())
            .bearer_auth(&session.access_token))
    }
}

/// First row of a `return=representation` answer.
fn single<T>(rows: Vec<T>) -> Result<T, ServiceError> {
    rows.into_iter()
        .next()
        .ok_or_else(|| ServiceError::Decode("empty representation".into()))
}

impl Authenticator for SupabaseClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, ServiceError> {
        let url = self.endpoint()?.sign_in();
        let request = self
            .public(reqwest::Method::POST, url)?
            .json(&Credentials { email, password });

        // The auth service answers bad credentials with 400.
        let response: TokenResponse = match http::send_json(request).await {
            Err(ServiceError::Rejected {
                status: Some(400), ..
            }) => return Err(ServiceError::Unauthorized),
            other => other?,
        };
        let session = response.into_session(email);
        tracing::info!(email = %session.email, "signed in");
        Ok(session)
    }
}

impl ProjectCatalog for SupabaseClient {
    async fn list_projects(&self) -> Result<Vec<Project>, ServiceError> {
        let url = self.endpoint()?.list_projects();
        let request = self.public(reqwest::Method::GET, url)?;
        let rows: Vec<ProjectRow> = http::send_json(request).await?;
        tracing::debug!(count = rows.len(), "projects fetched");
        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn create_project(
        &self,
        session: &Session,
        patch: &ProjectPatch,
    ) -> Result<Project, ServiceError> {
        let url = self.endpoint()?.projects();
        let request = self
            .authed(reqwest::Method::POST, url, session)?
            .header("Prefer", "return=representation")
            .json(&ProjectBody::from(patch));
        let rows: Vec<ProjectRow> = http::send_json(request).await?;
        single(rows).map(Project::from)
    }

    async fn update_project(
        &self,
        session: &Session,
        id: ProjectId,
        patch: &ProjectPatch,
    ) -> Result<Project, ServiceError> {
        let url = self.endpoint()?.project(id);
        let request = self
            .authed(reqwest::Method::PATCH, url, session)?
            .header("Prefer", "return=representation")
            .json(&ProjectBody::from(patch));
        let rows: Vec<ProjectRow> = http::send_json(request).await?;
        // Row-level security filters refused updates out silently.
        single(rows).map(Project::from).map_err(|_| ServiceError::Rejected {
            status: None,
            message: format!("project {id} was not updated"),
        })
    }

    async fn delete_project(&self, session: &Session, id: ProjectId) -> Result<(), ServiceError> {
        let url = self.endpoint()?.project(id);
        http::send(self.authed(reqwest::Method::DELETE, url, session)?).await?;
        Ok(())
    }
}

impl InfoPageStore for SupabaseClient {
    async fn current_info_page(&self) -> Result<Option<InfoPage>, ServiceError> {
        let url = self.endpoint()?.current_info_page();
        let request = self.public(reqwest::Method::GET, url)?;
        let rows: Vec<InfoPageRow> = http::send_json(request).await?;
        Ok(InfoPage::current(
            rows.into_iter().filter_map(InfoPageRow::into_page).collect(),
        ))
    }

    async fn create_info_page(
        &self,
        session: &Session,
        image_url: &str,
    ) -> Result<InfoPage, ServiceError> {
        let url = self.endpoint()?.info_pages();
        let request = self
            .authed(reqwest::Method::POST, url, session)?
            .header("Prefer", "return=representation")
            .json(&InfoPageBody { image_url });
        let rows: Vec<InfoPageRow> = http::send_json(request).await?;
        single(rows)?
            .into_page()
            .ok_or_else(|| ServiceError::Decode("info page without image".into()))
    }

    async fn clear_info_pages(&self, session: &Session) -> Result<(), ServiceError> {
        let url = self.endpoint()?.all_info_pages();
        http::send(self.authed(reqwest::Method::DELETE, url, session)?).await?;
        Ok(())
    }
}

impl MediaStorage for SupabaseClient {
    async fn upload(&self, session: &Session, file: &UploadFile) -> Result<String, ServiceError> {
        let endpoint = self.endpoint()?;
        let object = object_name(file);
        let request = self
            .authed(reqwest::Method::POST, endpoint.upload(&object), session)?
            .header(CONTENT_TYPE, file.content_type.as_str())
            .header("x-upsert", "true")
            .body(file.bytes.clone());
        http::send(request).await?;

        tracing::debug!(file = %file.file_name, %object, "image uploaded");
        Ok(endpoint.public_url(&object))
    }
}
