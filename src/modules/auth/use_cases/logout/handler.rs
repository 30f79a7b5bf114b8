use crate::modules::auth::core::session::SessionStore;
use std::sync::Arc;

/// Clears the session and the remembered user. Subscribers of the session
/// (the attendance binding) see the change and unmount.
pub struct LogoutHandler {
    session: Arc<SessionStore>,
}

impl LogoutHandler {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }

    pub fn handle(&self) {
        self.session.sign_out();
    }
}
