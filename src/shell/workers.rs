// Background workers spawned by `main`.
//
// The session binding keeps the attendance sync mounted for whoever is signed
// in: employees get a live sync, admins and anonymous sessions get none.

use crate::modules::attendance::adapters::outbound::attendance_store::AttendanceStore;
use crate::modules::attendance::sync::attendance_sync::AttendanceSync;
use crate::modules::auth::core::user::{Role, User};
use crate::shell::state::AppState;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

pub fn spawn_session_binding(state: &AppState) -> JoinHandle<()> {
    tokio::spawn(bind_attendance_to_session(
        state.session.subscribe(),
        state.attendance.clone(),
    ))
}

/// Runs until the session store is dropped.
pub async fn bind_attendance_to_session<TStore>(
    mut changes: watch::Receiver<Option<User>>,
    sync: Arc<AttendanceSync<TStore>>,
) where
    TStore: AttendanceStore + 'static,
{
    let initial = changes.borrow_and_update().clone();
    apply(&sync, initial).await;

    while changes.changed().await.is_ok() {
        let user = changes.borrow_and_update().clone();
        apply(&sync, user).await;
    }
    info!("session closed, stopping attendance binding");
}

async fn apply<TStore>(sync: &Arc<AttendanceSync<TStore>>, user: Option<User>)
where
    TStore: AttendanceStore + 'static,
{
    match user {
        Some(user) if user.role == Role::Employee => sync.ensure_mounted(&user).await,
        other => {
            if sync.current_user().await.is_some() {
                sync.unmount().await;
            }
            debug!(
                user_id = other.as_ref().map(|u| u.id.as_str()).unwrap_or("-"),
                "no attendance binding for this session"
            );
        }
    }
}
