// Shared builders and canned values for in-crate tests.

pub mod app;
pub mod commands {
    pub mod submit_leave;
}
pub mod leave;
pub mod records;
pub mod users;
