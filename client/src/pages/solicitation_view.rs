use super::failure;
use crate::{
    api::Api,
    model::{Comment, SolicitationDetail},
    notification::{Notification, SERVER_ERROR},
    sequence::Sequence,
};
use tokio::sync::Mutex;

/// Read-only solicitation page: the detail record and its comments.
pub struct SolicitationView<A> {
    pub(crate) api: A,
    pub(crate) id: i32,
    pub(crate) state: Mutex<ViewState>,
    pub(crate) loads: Sequence,
    pub(crate) comment_loads: Sequence,
}

#[derive(Debug, Default)]
pub(crate) struct ViewState {
    pub(crate) detail: Option<SolicitationDetail>,
    pub(crate) comments: Vec<Comment>,
}

impl<A: Api> SolicitationView<A> {
    pub fn new(api: A, id: i32) -> Self {
        SolicitationView {
            api,
            id,
            state: Mutex::default(),
            loads: Sequence::default(),
            comment_loads: Sequence::default(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    /// Fetches the detail record, then the comments.
    pub async fn load(&self) -> Result<(), Notification> {
        let ticket = self.loads.issue();
        let detail = self.api.solicitation(self.id).await;

        let detail = detail.map_err(|error| failure(&error, SERVER_ERROR))?;

        {
            let mut state = self.state.lock().await;
            if self.loads.apply(ticket) {
                state.detail = Some(detail);
            } else {
                debug!(solicitation = self.id, "discarding stale detail");
            }
        }

        self.reload_comments().await
    }

    pub async fn reload_comments(&self) -> Result<(), Notification> {
        let ticket = self.comment_loads.issue();
        let comments = self
            .api
            .comments(self.id)
            .await
            .map_err(|error| failure(&error, SERVER_ERROR))?;

        let mut state = self.state.lock().await;
        if self.comment_loads.apply(ticket) {
            state.comments = comments;
        } else {
            debug!(solicitation = self.id, "discarding stale comments");
        }

        Ok(())
    }

    pub async fn detail(&self) -> Option<SolicitationDetail> {
        self.state.lock().await.detail.clone()
    }

    pub async fn comments(&self) -> Vec<Comment> {
        self.state.lock().await.comments.clone()
    }
}
