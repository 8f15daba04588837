use super::failure;
use crate::{
    api::{Api, Scope},
    error::ApiError,
    filter::SolicitationFilter,
    model::{Document, SolicitationItem},
    notification::{Notification, SERVER_ERROR},
    sequence::Sequence,
};
use tokio::sync::Mutex;

const DOCUMENTS_ERROR: Notification = Notification::error("Erro ao carregar documentos")
    .with_description("Atualize a página e tente novamente");

/// Open or finished solicitation listing with its filter form.
pub struct SolicitationList<A> {
    api: A,
    scope: Scope,
    state: Mutex<ListState>,
    loads: Sequence,
}

#[derive(Debug, Default)]
struct ListState {
    solicitations: Vec<SolicitationItem>,
    documents: Vec<Document>,
    filter: SolicitationFilter,
}

impl<A: Api> SolicitationList<A> {
    pub fn new(api: A, scope: Scope) -> Self {
        SolicitationList {
            api,
            scope,
            state: Mutex::default(),
            loads: Sequence::default(),
        }
    }

    pub fn finished(api: A) -> Self {
        Self::new(api, Scope::Finished)
    }

    pub fn open(api: A) -> Self {
        Self::new(api, Scope::Open)
    }

    /// Loads the document names for the filter select and the unfiltered
    /// list. One failing does not stop the other; each failure yields its own
    /// notification.
    pub async fn load(&self) -> Vec<Notification> {
        let documents = self.load_documents().await.err();
        let list = self
            .fetch(SolicitationFilter::new())
            .await
            .map_err(|error| failure(&error, SERVER_ERROR))
            .err();

        documents.into_iter().chain(list).collect()
    }

    pub async fn load_documents(&self) -> Result<(), Notification> {
        let documents = self.api.documents().await.map_err(|error| {
            warn!(%error, "failed to load documents");
            DOCUMENTS_ERROR
        })?;

        self.state.lock().await.documents = documents;
        Ok(())
    }

    /// Replaces the displayed list with the rows matching `filter`.
    pub async fn filter(&self, filter: SolicitationFilter) -> Notification {
        match self.fetch(filter).await {
            Ok(()) => Notification::info("Filtro realizado com sucesso"),
            Err(error) => failure(&error, Notification::error("Erro ao filtrar")),
        }
    }

    async fn fetch(&self, filter: SolicitationFilter) -> Result<(), ApiError> {
        let ticket = self.loads.issue();
        let solicitations = self.api.solicitations(self.scope, &filter).await?;

        let mut state = self.state.lock().await;
        if self.loads.apply(ticket) {
            state.solicitations = solicitations;
            state.filter = filter;
        } else {
            debug!(query = %filter.to_query(), "discarding stale list");
        }

        Ok(())
    }

    pub async fn solicitations(&self) -> Vec<SolicitationItem> {
        self.state.lock().await.solicitations.clone()
    }

    pub async fn documents(&self) -> Vec<Document> {
        self.state.lock().await.documents.clone()
    }

    /// Filter behind the displayed list.
    pub async fn current_filter(&self) -> SolicitationFilter {
        self.state.lock().await.filter.clone()
    }
}
