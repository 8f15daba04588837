use super::failure;
use crate::{
    api::Api,
    notification::{Notification, SERVER_ERROR},
    sequence::Sequence,
    validation::{field_errors, FieldErrors, StudentForm},
};
use tokio::sync::Mutex;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent.
    Invalid(FieldErrors),
    Done(Notification),
}

pub struct EditStudent<A> {
    api: A,
    id: i32,
    form: Mutex<Option<StudentForm>>,
    loads: Sequence,
    saves: Sequence,
}

impl<A: Api> EditStudent<A> {
    pub fn new(api: A, id: i32) -> Self {
        EditStudent {
            api,
            id,
            form: Mutex::default(),
            loads: Sequence::default(),
            saves: Sequence::default(),
        }
    }

    pub async fn load(&self) -> Result<(), Notification> {
        let ticket = self.loads.issue();
        let student = self
            .api
            .student(self.id)
            .await
            .map_err(|error| failure(&error, SERVER_ERROR))?;

        let mut form = self.form.lock().await;
        if self.loads.apply(ticket) {
            *form = Some(student.into());
        }

        Ok(())
    }

    /// Last loaded or saved record.
    pub async fn form(&self) -> Option<StudentForm> {
        self.form.lock().await.clone()
    }

    pub async fn submit(&self, form: StudentForm) -> SubmitOutcome {
        if let Err(errors) = form.validate() {
            return SubmitOutcome::Invalid(field_errors(&errors));
        }

        let ticket = self.saves.issue();
        if let Err(error) = self.api.update_student(self.id, &form).await {
            return SubmitOutcome::Done(failure(
                &error,
                Notification::error("Erro na atualização"),
            ));
        }

        let mut saved = self.form.lock().await;
        if self.saves.apply(ticket) {
            // a load still in flight carries the record from before this save
            self.loads.supersede();
            *saved = Some(form);
        }
        drop(saved);

        info!(student = self.id, "student updated");
        SubmitOutcome::Done(Notification::success("Aluno atualizado com sucesso"))
    }
}
