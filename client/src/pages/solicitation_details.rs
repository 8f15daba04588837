use super::{failure, SolicitationView};
use crate::{
    api::Api,
    date::{self, Clock, DateError, SystemClock},
    model::{NewComment, SolicitationUpdate, Status},
    notification::{Notification, SERVER_ERROR},
    sequence::Sequence,
};
use tokio::sync::Mutex;

const NO_STATUS: Notification = Notification::error("Status").with_description("Selecione um status");
const STATUS_NOT_ALLOWED: Notification =
    Notification::error("Status").with_description("Mudança de status não permitida");
const INVALID_DATE: Notification =
    Notification::error("Data inválida").with_description("Informe uma data no formato dd/mm/aaaa");
const DATE_BEFORE_TODAY: Notification =
    Notification::error("Data inválida").with_description("A data não pode ser anterior a hoje");
const EMPTY_COMMENT: Notification =
    Notification::error("Comentário").with_description("O comentário não pode ser vazio");

/// Employee solicitation page: the read-only view plus status, estimated date
/// and comment actions.
pub struct SolicitationDetails<A> {
    view: SolicitationView<A>,
    clock: Box<dyn Clock>,
    inputs: Mutex<Inputs>,
    status_updates: Sequence,
    date_updates: Sequence,
}

#[derive(Debug, Default)]
struct Inputs {
    status: Option<Status>,
    estimated_date: String,
    comment: String,
}

impl<A: Api> SolicitationDetails<A> {
    pub fn new(api: A, id: i32) -> Self {
        Self::with_clock(api, id, SystemClock)
    }

    pub fn with_clock(api: A, id: i32, clock: impl Clock + 'static) -> Self {
        SolicitationDetails {
            view: SolicitationView::new(api, id),
            clock: Box::new(clock),
            inputs: Mutex::default(),
            status_updates: Sequence::default(),
            date_updates: Sequence::default(),
        }
    }

    pub fn view(&self) -> &SolicitationView<A> {
        &self.view
    }

    pub async fn load(&self) -> Result<(), Notification> {
        self.view.load().await
    }

    /// Statuses offered in the status select for the loaded record.
    pub async fn status_options(&self) -> &'static [Status] {
        match self.view.detail().await {
            Some(detail) => detail.status.next(),
            None => &[],
        }
    }

    pub async fn select_status(&self, status: Option<Status>) {
        self.inputs.lock().await.status = status;
    }

    pub async fn set_estimated_date(&self, input: impl Into<String>) {
        self.inputs.lock().await.estimated_date = input.into();
    }

    pub async fn set_comment(&self, input: impl Into<String>) {
        self.inputs.lock().await.comment = input.into();
    }

    pub async fn status_input(&self) -> Option<Status> {
        self.inputs.lock().await.status
    }

    pub async fn estimated_date_input(&self) -> String {
        self.inputs.lock().await.estimated_date.clone()
    }

    pub async fn comment_input(&self) -> String {
        self.inputs.lock().await.comment.clone()
    }

    pub async fn submit_status(&self) -> Notification {
        let Some(status) = self.status_input().await else {
            return NO_STATUS;
        };

        match self.view.detail().await {
            Some(detail) if detail.status.can_transition_to(status) => {}
            _ => return STATUS_NOT_ALLOWED,
        }

        let ticket = self.status_updates.issue();
        if let Err(error) = self
            .view
            .api
            .update_solicitation(self.view.id, &SolicitationUpdate::status(status))
            .await
        {
            return failure(&error, SERVER_ERROR);
        }

        let mut state = self.view.state.lock().await;
        if self.status_updates.apply(ticket) {
            // detail loads still in flight predate this update
            self.view.loads.supersede();

            if let Some(detail) = state.detail.as_mut() {
                detail.status = status;
                detail.conclusion_date = match status {
                    Status::Finished => Some(self.clock.today()),
                    _ => None,
                };
            }
            self.inputs.lock().await.status = None;
        }
        drop(state);

        info!(solicitation = self.view.id, %status, "status updated");
        Notification::success("Status atualizado")
    }

    pub async fn submit_estimated_date(&self) -> Notification {
        let input = self.estimated_date_input().await;

        let date = match date::validate_estimated_date(&input, self.clock.today()) {
            Ok(date) => date,
            Err(DateError::Invalid) => return INVALID_DATE,
            Err(DateError::BeforeToday) => return DATE_BEFORE_TODAY,
        };

        let ticket = self.date_updates.issue();
        if let Err(error) = self
            .view
            .api
            .update_solicitation(
                self.view.id,
                &SolicitationUpdate::estimated_completion_date(date),
            )
            .await
        {
            return failure(&error, SERVER_ERROR);
        }

        let mut state = self.view.state.lock().await;
        if self.date_updates.apply(ticket) {
            self.view.loads.supersede();

            if let Some(detail) = state.detail.as_mut() {
                detail.estimated_completion_date = Some(date);
            }
            self.inputs.lock().await.estimated_date.clear();
        }
        drop(state);

        Notification::success("Data prevista atualizada")
    }

    /// Posts the comment input, then reloads the list from the server.
    pub async fn submit_comment(&self) -> Notification {
        let description = self.comment_input().await.trim().to_owned();
        if description.is_empty() {
            return EMPTY_COMMENT;
        }

        let comment = NewComment { description };
        if let Err(error) = self.view.api.create_comment(self.view.id, &comment).await {
            return failure(&error, Notification::error("Erro ao comentar"));
        }

        self.inputs.lock().await.comment.clear();

        if let Err(notification) = self.view.reload_comments().await {
            return notification;
        }

        Notification::success("Comentário adicionado")
    }

    pub async fn delete_comment(&self, id: i32) -> Notification {
        if let Err(error) = self.view.api.delete_comment(id).await {
            return failure(&error, Notification::error("Erro ao deletar"));
        }

        let mut state = self.view.state.lock().await;
        // lists fetched before the delete still hold the comment
        self.view.comment_loads.supersede();
        state.comments.retain(|comment| comment.id != id);
        drop(state);

        Notification::success("Comentário removido")
    }
}
