use crate::modules::auth::core::user::{NewAccount, Role};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignupValidationError {
    #[error("name is required")]
    MissingName,

    #[error("email is required")]
    MissingEmail,

    #[error("password is required")]
    MissingPassword,
}

impl Signup {
    pub fn validate(self) -> Result<NewAccount, SignupValidationError> {
        if self.name.trim().is_empty() {
            return Err(SignupValidationError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(SignupValidationError::MissingEmail);
        }
        if self.password.is_empty() {
            return Err(SignupValidationError::MissingPassword);
        }
        Ok(NewAccount {
            name: self.name,
            email: self.email,
            password: self.password,
            role: self.role,
        })
    }
}
