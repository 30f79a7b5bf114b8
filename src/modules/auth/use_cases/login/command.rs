use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Login {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoginValidationError {
    #[error("email is required")]
    MissingEmail,

    #[error("password is required")]
    MissingPassword,
}

impl Login {
    pub fn validate(&self) -> Result<(), LoginValidationError> {
        if self.email.trim().is_empty() {
            return Err(LoginValidationError::MissingEmail);
        }
        if self.password.is_empty() {
            return Err(LoginValidationError::MissingPassword);
        }
        Ok(())
    }
}
