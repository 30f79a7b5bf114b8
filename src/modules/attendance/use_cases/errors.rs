use crate::modules::attendance::adapters::outbound::attendance_store::StoreError;
use crate::modules::attendance::core::decision::DecideError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),
}
