use crate::modules::auth::adapters::outbound::user_directory::{DirectoryError, UserDirectory};
use crate::modules::auth::core::user::User;
use crate::modules::auth::use_cases::signup::command::{Signup, SignupValidationError};
use crate::shared::core::toast::Toast;
use crate::shared::infrastructure::notifier::Notifier;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument};

#[derive(Debug, Error)]
pub enum SignupError {
    #[error(transparent)]
    Validation(#[from] SignupValidationError),

    #[error("email already registered")]
    EmailTaken,

    #[error(transparent)]
    Directory(DirectoryError),
}

/// Creates an account. The caller still has to log in afterwards.
pub struct SignupHandler<TDirectory>
where
    TDirectory: UserDirectory + 'static,
{
    directory: Arc<TDirectory>,
    notifier: Arc<dyn Notifier>,
}

impl<TDirectory> SignupHandler<TDirectory>
where
    TDirectory: UserDirectory + 'static,
{
    pub fn new(directory: Arc<TDirectory>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            directory,
            notifier,
        }
    }

    #[instrument(
        name = "auth_signup",
        skip(self, command),
        fields(email = %command.email, role = %command.role)
    )]
    pub async fn handle(&self, command: Signup) -> Result<User, SignupError> {
        let account = match command.validate() {
            Ok(account) => account,
            Err(e) => {
                info!(error = %e, "validation failed");
                self.notifier.notify(Toast::incomplete_form());
                return Err(e.into());
            }
        };

        match self.directory.register(account).await {
            Ok(user) => {
                info!(user_id = %user.id, employee_id = %user.employee_id, "account created");
                self.notifier.notify(Toast::success(
                    "Registrasi Berhasil",
                    "Akun berhasil dibuat. Silakan login.",
                ));
                Ok(user)
            }
            Err(DirectoryError::EmailTaken(email)) => {
                info!(%email, "email already registered");
                self.notifier.notify(Toast::destructive(
                    "Registrasi Gagal",
                    "Terjadi kesalahan saat membuat akun",
                ));
                Err(SignupError::EmailTaken)
            }
            Err(e) => {
                error!(error = %e, "directory error during signup");
                self.notifier.notify(Toast::destructive(
                    "Error",
                    "Terjadi kesalahan saat registrasi",
                ));
                Err(SignupError::Directory(e))
            }
        }
    }
}
