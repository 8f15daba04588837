use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use ssda_client::{
    api::{Api, Scope},
    error::{ApiError, ErrorBody},
    model::{
        Comment, Document, NewComment, SolicitationDetail, SolicitationItem, SolicitationUpdate,
        Student,
    },
    validation::StudentForm,
    SolicitationFilter,
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tokio::sync::Notify;

/// A request as the service would have received it.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Documents,
    Solicitations { scope: Scope, query: String },
    Solicitation(i32),
    UpdateSolicitation { id: i32, body: Value },
    Comments(i32),
    CreateComment { solicitation_id: i32, body: Value },
    DeleteComment(i32),
    Student(i32),
    UpdateStudent { id: i32, body: Value },
}

impl Call {
    pub fn kind(&self) -> &'static str {
        match self {
            Call::Documents => "documents",
            Call::Solicitations { .. } => "solicitations",
            Call::Solicitation(_) => "solicitation",
            Call::UpdateSolicitation { .. } => "update_solicitation",
            Call::Comments(_) => "comments",
            Call::CreateComment { .. } => "create_comment",
            Call::DeleteComment(_) => "delete_comment",
            Call::Student(_) => "student",
            Call::UpdateStudent { .. } => "update_student",
        }
    }

    /// Name a gate is registered under: the query for list requests, the
    /// changed field for solicitation updates, the call kind otherwise.
    fn gate_key(&self) -> String {
        match self {
            Call::Solicitations { query, .. } => query.clone(),
            Call::UpdateSolicitation { body, .. } => {
                match body.as_object().and_then(|body| body.keys().next()) {
                    Some(field) => format!("update_solicitation:{field}"),
                    None => self.kind().to_owned(),
                }
            }
            call => call.kind().to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Transport,
    Status(StatusCode, &'static str),
}

/// In-memory service that records every call it receives.
#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<Call>>,
    failure: Mutex<Option<Failure>>,
    failing: Mutex<HashMap<&'static str, Failure>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    pub detail: Mutex<Option<SolicitationDetail>>,
    pub comments: Mutex<Vec<Comment>>,
    pub documents: Mutex<Vec<Document>>,
    pub lists: Mutex<HashMap<String, Vec<SolicitationItem>>>,
    pub student: Mutex<Option<Student>>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Every following call fails.
    pub fn fail(&self, failure: Failure) {
        *self.failure.lock().unwrap() = Some(failure);
    }

    /// Only calls of `kind` fail.
    pub fn fail_kind(&self, kind: &'static str, failure: Failure) {
        self.failing.lock().unwrap().insert(kind, failure);
    }

    /// Holds the next call registered under `key` until the returned gate is
    /// notified. The response is prepared before the call is held.
    pub fn gate(&self, key: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert(key.to_owned(), gate.clone());
        gate
    }

    pub fn set_list(&self, query: &str, items: Vec<SolicitationItem>) {
        self.lists.lock().unwrap().insert(query.to_owned(), items);
    }

    /// Yields until `call` was received.
    pub async fn received(&self, call: &Call) {
        while !self.calls().contains(call) {
            tokio::task::yield_now().await;
        }
    }

    async fn hold(&self, call: &Call) {
        let gate = self.gates.lock().unwrap().remove(&call.gate_key());
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }

    fn record(&self, call: &Call) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call.clone());

        let failure = self
            .failing
            .lock()
            .unwrap()
            .get(call.kind())
            .copied()
            .or(*self.failure.lock().unwrap());

        match failure {
            None => Ok(()),
            Some(Failure::Transport) => Err(ApiError::Transport("connection refused".to_owned())),
            Some(Failure::Status(status, code)) => Err(ApiError::Status {
                status,
                body: Some(ErrorBody {
                    code: code.to_owned(),
                    error: "rejected".to_owned(),
                }),
            }),
        }
    }

    fn not_found() -> ApiError {
        ApiError::Status {
            status: StatusCode::NOT_FOUND,
            body: None,
        }
    }
}

#[async_trait]
impl Api for FakeApi {
    async fn documents(&self) -> Result<Vec<Document>, ApiError> {
        let call = Call::Documents;
        self.record(&call)?;

        let documents = self.documents.lock().unwrap().clone();
        self.hold(&call).await;
        Ok(documents)
    }

    async fn solicitations(
        &self,
        scope: Scope,
        filter: &SolicitationFilter,
    ) -> Result<Vec<SolicitationItem>, ApiError> {
        let query = filter.to_query();
        let call = Call::Solicitations {
            scope,
            query: query.clone(),
        };
        self.record(&call)?;

        let items = self
            .lists
            .lock()
            .unwrap()
            .get(&query)
            .cloned()
            .unwrap_or_default();
        self.hold(&call).await;
        Ok(items)
    }

    async fn solicitation(&self, id: i32) -> Result<SolicitationDetail, ApiError> {
        let call = Call::Solicitation(id);
        self.record(&call)?;

        let detail = self.detail.lock().unwrap().clone();
        self.hold(&call).await;
        detail.ok_or_else(Self::not_found)
    }

    async fn update_solicitation(
        &self,
        id: i32,
        update: &SolicitationUpdate,
    ) -> Result<(), ApiError> {
        let call = Call::UpdateSolicitation {
            id,
            body: serde_json::to_value(update).unwrap(),
        };
        self.record(&call)?;

        self.hold(&call).await;
        Ok(())
    }

    async fn comments(&self, solicitation_id: i32) -> Result<Vec<Comment>, ApiError> {
        let call = Call::Comments(solicitation_id);
        self.record(&call)?;

        let comments = self.comments.lock().unwrap().clone();
        self.hold(&call).await;
        Ok(comments)
    }

    async fn create_comment(
        &self,
        solicitation_id: i32,
        comment: &NewComment,
    ) -> Result<Comment, ApiError> {
        self.record(&Call::CreateComment {
            solicitation_id,
            body: serde_json::to_value(comment).unwrap(),
        })?;

        let mut comments = self.comments.lock().unwrap();
        let id = comments.iter().map(|comment| comment.id).max().unwrap_or(0) + 1;
        let created = super::comment(id, &comment.description);
        comments.push(created.clone());

        Ok(created)
    }

    async fn delete_comment(&self, id: i32) -> Result<(), ApiError> {
        self.record(&Call::DeleteComment(id))?;
        self.comments.lock().unwrap().retain(|comment| comment.id != id);
        Ok(())
    }

    async fn student(&self, id: i32) -> Result<Student, ApiError> {
        self.record(&Call::Student(id))?;
        self.student.lock().unwrap().clone().ok_or_else(Self::not_found)
    }

    async fn update_student(&self, id: i32, student: &StudentForm) -> Result<(), ApiError> {
        self.record(&Call::UpdateStudent {
            id,
            body: serde_json::to_value(student).unwrap(),
        })
    }
}
