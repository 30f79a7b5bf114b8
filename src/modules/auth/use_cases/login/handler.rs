use crate::modules::auth::adapters::outbound::user_directory::{DirectoryError, UserDirectory};
use crate::modules::auth::core::session::SessionStore;
use crate::modules::auth::core::user::User;
use crate::modules::auth::use_cases::login::command::{Login, LoginValidationError};
use crate::shared::core::toast::Toast;
use crate::shared::infrastructure::notifier::Notifier;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, instrument};

#[derive(Debug, Error)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] LoginValidationError),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

pub struct LoginHandler<TDirectory>
where
    TDirectory: UserDirectory + 'static,
{
    directory: Arc<TDirectory>,
    session: Arc<SessionStore>,
    notifier: Arc<dyn Notifier>,
}

impl<TDirectory> LoginHandler<TDirectory>
where
    TDirectory: UserDirectory + 'static,
{
    pub fn new(
        directory: Arc<TDirectory>,
        session: Arc<SessionStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            directory,
            session,
            notifier,
        }
    }

    #[instrument(name = "auth_login", skip(self, command), fields(email = %command.email))]
    pub async fn handle(&self, command: Login) -> Result<User, LoginError> {
        if let Err(e) = command.validate() {
            info!(error = %e, "validation failed");
            self.notifier.notify(Toast::incomplete_form());
            return Err(e.into());
        }

        debug!("authenticating");
        self.session.set_loading(true);
        let outcome = self
            .directory
            .authenticate(&command.email, &command.password)
            .await;
        self.session.set_loading(false);

        match outcome {
            Ok(Some(user)) => {
                self.session.sign_in(user.clone(), command.remember);
                self.notifier.notify(Toast::success(
                    "Login Berhasil",
                    "Selamat datang di Inside Fruithub!",
                ));
                Ok(user)
            }
            Ok(None) => {
                info!("invalid credentials");
                self.notifier.notify(Toast::destructive(
                    "Login Gagal",
                    "Email atau password tidak valid",
                ));
                Err(LoginError::InvalidCredentials)
            }
            Err(e) => {
                error!(error = %e, "directory error during login");
                self.notifier
                    .notify(Toast::destructive("Error", "Terjadi kesalahan saat login"));
                Err(e.into())
            }
        }
    }
}
