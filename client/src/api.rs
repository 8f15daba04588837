//! Typed access to the REST surface.

use crate::{
    credentials::CredentialProvider,
    error::{ApiError, ErrorBody},
    filter::SolicitationFilter,
    model::{
        Comment, Document, NewComment, SolicitationDetail, SolicitationItem, SolicitationUpdate,
        Student,
    },
    validation::StudentForm,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

/// Which list endpoint a solicitation listing reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Open,
    Finished,
}

#[async_trait]
pub trait Api: Send + Sync {
    async fn documents(&self) -> Result<Vec<Document>, ApiError>;

    async fn solicitations(
        &self,
        scope: Scope,
        filter: &SolicitationFilter,
    ) -> Result<Vec<SolicitationItem>, ApiError>;

    async fn solicitation(&self, id: i32) -> Result<SolicitationDetail, ApiError>;

    async fn update_solicitation(
        &self,
        id: i32,
        update: &SolicitationUpdate,
    ) -> Result<(), ApiError>;

    async fn comments(&self, solicitation_id: i32) -> Result<Vec<Comment>, ApiError>;

    async fn create_comment(
        &self,
        solicitation_id: i32,
        comment: &NewComment,
    ) -> Result<Comment, ApiError>;

    async fn delete_comment(&self, id: i32) -> Result<(), ApiError>;

    async fn student(&self, id: i32) -> Result<Student, ApiError>;

    async fn update_student(&self, id: i32, student: &StudentForm) -> Result<(), ApiError>;
}

#[async_trait]
impl<T: Api + ?Sized> Api for Arc<T> {
    async fn documents(&self) -> Result<Vec<Document>, ApiError> {
        (**self).documents().await
    }

    async fn solicitations(
        &self,
        scope: Scope,
        filter: &SolicitationFilter,
    ) -> Result<Vec<SolicitationItem>, ApiError> {
        (**self).solicitations(scope, filter).await
    }

    async fn solicitation(&self, id: i32) -> Result<SolicitationDetail, ApiError> {
        (**self).solicitation(id).await
    }

    async fn update_solicitation(
        &self,
        id: i32,
        update: &SolicitationUpdate,
    ) -> Result<(), ApiError> {
        (**self).update_solicitation(id, update).await
    }

    async fn comments(&self, solicitation_id: i32) -> Result<Vec<Comment>, ApiError> {
        (**self).comments(solicitation_id).await
    }

    async fn create_comment(
        &self,
        solicitation_id: i32,
        comment: &NewComment,
    ) -> Result<Comment, ApiError> {
        (**self).create_comment(solicitation_id, comment).await
    }

    async fn delete_comment(&self, id: i32) -> Result<(), ApiError> {
        (**self).delete_comment(id).await
    }

    async fn student(&self, id: i32) -> Result<Student, ApiError> {
        (**self).student(id).await
    }

    async fn update_student(&self, id: i32, student: &StudentForm) -> Result<(), ApiError> {
        (**self).update_student(id, student).await
    }
}

/// [`Api`] over HTTP.
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>, credentials: Arc<dyn CredentialProvider>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        HttpApi {
            client: Client::new(),
            base_url,
            credentials,
        }
    }

    /// Base URL from `SSDA_API_URL`, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env(credentials: Arc<dyn CredentialProvider>) -> Self {
        let base_url =
            std::env::var("SSDA_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());

        Self::new(base_url, credentials)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = match self.credentials.bearer_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.json::<ErrorBody>().await.ok();
        debug!(%status, code = ?body.as_ref().map(|body| &body.code), "request rejected");

        Err(ApiError::Status { status, body })
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        Ok(self.send(request).await?.json().await?)
    }
}

#[async_trait]
impl Api for HttpApi {
    async fn documents(&self) -> Result<Vec<Document>, ApiError> {
        self.json(self.client.get(self.url("/documents"))).await
    }

    async fn solicitations(
        &self,
        scope: Scope,
        filter: &SolicitationFilter,
    ) -> Result<Vec<SolicitationItem>, ApiError> {
        let path = match scope {
            Scope::Open => "/solicitations",
            Scope::Finished => "/finished-solicitations",
        };
        let url = format!("{}?{}", self.url(path), filter.to_query());

        self.json(self.client.get(url)).await
    }

    async fn solicitation(&self, id: i32) -> Result<SolicitationDetail, ApiError> {
        self.json(self.client.get(self.url(&format!("/solicitations/{id}"))))
            .await
    }

    async fn update_solicitation(
        &self,
        id: i32,
        update: &SolicitationUpdate,
    ) -> Result<(), ApiError> {
        let request = self
            .client
            .put(self.url(&format!("/solicitations/{id}")))
            .json(update);

        self.send(request).await?;
        Ok(())
    }

    async fn comments(&self, solicitation_id: i32) -> Result<Vec<Comment>, ApiError> {
        self.json(
            self.client
                .get(self.url(&format!("/comments/{solicitation_id}"))),
        )
        .await
    }

    async fn create_comment(
        &self,
        solicitation_id: i32,
        comment: &NewComment,
    ) -> Result<Comment, ApiError> {
        let request = self
            .client
            .post(self.url(&format!("/comments/{solicitation_id}")))
            .json(comment);

        self.json(request).await
    }

    async fn delete_comment(&self, id: i32) -> Result<(), ApiError> {
        self.send(self.client.delete(self.url(&format!("/comments/{id}"))))
            .await?;
        Ok(())
    }

    async fn student(&self, id: i32) -> Result<Student, ApiError> {
        self.json(self.client.get(self.url(&format!("/students/{id}"))))
            .await
    }

    async fn update_student(&self, id: i32, student: &StudentForm) -> Result<(), ApiError> {
        let request = self
            .client
            .put(self.url(&format!("/students/{id}")))
            .json(student);

        self.send(request).await?;
        Ok(())
    }
}
