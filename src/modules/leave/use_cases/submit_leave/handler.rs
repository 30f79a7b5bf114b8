use crate::modules::leave::adapters::outbound::leave_store::{LeaveStore, LeaveStoreError};
use crate::modules::leave::core::leave_request::LeaveRequest;
use crate::modules::leave::use_cases::submit_leave::command::{LeaveValidationError, SubmitLeave};
use crate::shared::core::toast::Toast;
use crate::shared::infrastructure::notifier::Notifier;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument};

#[derive(Debug, Error)]
pub enum SubmitLeaveError {
    #[error(transparent)]
    Validation(#[from] LeaveValidationError),

    #[error(transparent)]
    Store(#[from] LeaveStoreError),
}

pub struct SubmitLeaveHandler<TStore>
where
    TStore: LeaveStore + 'static,
{
    store: Arc<TStore>,
    notifier: Arc<dyn Notifier>,
}

impl<TStore> SubmitLeaveHandler<TStore>
where
    TStore: LeaveStore + 'static,
{
    pub fn new(store: Arc<TStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    #[instrument(name = "leave_submit", skip(self, command), fields(user_id = %command.user_id))]
    pub async fn handle(&self, command: SubmitLeave) -> Result<LeaveRequest, SubmitLeaveError> {
        let request = match command.validate() {
            Ok(request) => request,
            Err(e) => {
                info!(error = %e, "leave form rejected");
                self.notifier.notify(match e {
                    LeaveValidationError::MissingFields => Toast::incomplete_form(),
                    _ => Toast::destructive("Form Tidak Valid", e.to_string()),
                });
                return Err(e.into());
            }
        };

        let created = self.store.insert(request).await.map_err(|e| {
            error!(error = %e, "leave submission failed");
            self.notifier.notify(Toast::destructive(
                "Error",
                "Gagal mengirim pengajuan cuti",
            ));
            SubmitLeaveError::Store(e)
        })?;

        info!(leave_id = %created.id, "leave request submitted");
        self.notifier.notify(Toast::success(
            "Pengajuan Cuti Berhasil",
            "Pengajuan cuti Anda telah dikirim untuk disetujui",
        ));
        Ok(created)
    }
}

#[cfg(test)]
mod submit_leave_handler_tests {
    use super::*;
    use crate::modules::leave::adapters::outbound::leave_store_in_memory::InMemoryLeaveStore;
    use crate::modules::leave::core::leave_request::LeaveStatus;
    use crate::shared::core::primitives::FixedClock;
    use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
    use crate::tests::fixtures::commands::submit_leave::SubmitLeaveBuilder;
    use crate::tests::fixtures::records::at;
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (
        Arc<InMemoryLeaveStore>,
        Arc<InMemoryNotifier>,
        SubmitLeaveHandler<InMemoryLeaveStore>,
    );

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let store = Arc::new(InMemoryLeaveStore::new(Arc::new(FixedClock::new(at(8, 0)))));
        let notifier = Arc::new(InMemoryNotifier::new());
        let handler = SubmitLeaveHandler::new(store.clone(), notifier.clone());
        (store, notifier, handler)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_create_a_pending_request_and_toast(before_each: BeforeEachReturn) {
        let (store, notifier, handler) = before_each;

        let created = handler
            .handle(SubmitLeaveBuilder::new().build())
            .await
            .expect("submit failed");

        assert_eq!(created.status, LeaveStatus::Pending);
        assert_eq!(store.list_by_user("2").await.unwrap(), vec![created]);
        assert_eq!(notifier.toasts()[0].title, "Pengajuan Cuti Berhasil");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_toast_an_incomplete_form_without_writing(before_each: BeforeEachReturn) {
        let (store, notifier, handler) = before_each;

        let result = handler
            .handle(SubmitLeaveBuilder::new().reason("").build())
            .await;

        assert!(matches!(
            result,
            Err(SubmitLeaveError::Validation(LeaveValidationError::MissingFields))
        ));
        assert!(store.list_by_user("2").await.unwrap().is_empty());
        assert_eq!(notifier.toasts()[0].title, "Form Tidak Lengkap");
        assert_eq!(
            notifier.toasts()[0].description,
            "Harap isi semua field yang required"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_store_is_offline(before_each: BeforeEachReturn) {
        let (store, _, handler) = before_each;
        store.toggle_offline();

        let result = handler.handle(SubmitLeaveBuilder::new().build()).await;

        assert!(matches!(result, Err(SubmitLeaveError::Store(_))));
    }
}
