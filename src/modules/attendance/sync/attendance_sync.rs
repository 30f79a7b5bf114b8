// Local view of one user's attendance, kept in step with the store.
//
// A sync is bound to at most one user at a time. `mount` issues a new token,
// resets the caches, subscribes to that user's attendance changes and loads
// today plus recent history. Every asynchronous step captures the token it
// started with; a result is applied only if that token is still current, so
// a slow read for a previous user never lands in the new user's view.

use crate::modules::attendance::adapters::outbound::attendance_store::AttendanceStore;
use crate::modules::attendance::core::day::AttendanceDay;
use crate::modules::attendance::core::policy::ReclockPolicy;
use crate::modules::attendance::core::record::{ATTENDANCE_TABLE, AttendanceRecord};
use crate::modules::attendance::core::summary::{HistorySummary, summarize};
use crate::modules::attendance::sync::refresh_loop::{self, Refresh};
use crate::modules::attendance::use_cases::clock_in::command::ClockIn;
use crate::modules::attendance::use_cases::clock_in::handler::ClockInHandler;
use crate::modules::attendance::use_cases::clock_out::command::ClockOut;
use crate::modules::attendance::use_cases::clock_out::handler::ClockOutHandler;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::modules::attendance::use_cases::fetch_history::handler::FetchHistoryHandler;
use crate::modules::attendance::use_cases::fetch_today::handler::{
    FetchTodayHandler, TodayOutcome,
};
use crate::modules::auth::core::user::User;
use crate::shared::core::primitives::{Clock, Location};
use crate::shared::core::toast::Toast;
use crate::shared::infrastructure::change_feed::{ChangeFeed, ChangeFilter};
use crate::shared::infrastructure::notifier::Notifier;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::join;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};

pub const DEFAULT_HISTORY_LIMIT: usize = 30;
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSettings {
    pub history_limit: usize,
    pub debounce: Duration,
    pub reclock_policy: ReclockPolicy,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            debounce: DEFAULT_DEBOUNCE,
            reclock_policy: ReclockPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttendanceSnapshot {
    pub user_id: Option<String>,
    pub today: Option<AttendanceRecord>,
    pub history: Vec<AttendanceRecord>,
    pub is_loading: bool,
}

impl AttendanceSnapshot {
    pub fn day(&self) -> AttendanceDay {
        AttendanceDay::of(self.today.as_ref())
    }

    pub fn summary(&self) -> HistorySummary {
        summarize(&self.history)
    }
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("no signed-in user")]
    NoSession,

    #[error(transparent)]
    Application(#[from] ApplicationError),
}

#[derive(Default)]
struct SyncState {
    token: u64,
    user: Option<User>,
    today: Option<AttendanceRecord>,
    history: Vec<AttendanceRecord>,
    is_loading: bool,
}

pub struct AttendanceSync<TStore>
where
    TStore: AttendanceStore + 'static,
{
    state: RwLock<SyncState>,
    generation: AtomicU64,
    listener: Mutex<Option<JoinHandle<()>>>,
    feed: Arc<dyn ChangeFeed>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn Notifier>,
    settings: SyncSettings,
    fetch_today: FetchTodayHandler<TStore>,
    fetch_history: FetchHistoryHandler<TStore>,
    clock_in: ClockInHandler<TStore>,
    clock_out: ClockOutHandler<TStore>,
}

impl<TStore> AttendanceSync<TStore>
where
    TStore: AttendanceStore + 'static,
{
    pub fn new(
        store: Arc<TStore>,
        feed: Arc<dyn ChangeFeed>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
        settings: SyncSettings,
    ) -> Self {
        Self {
            state: RwLock::new(SyncState::default()),
            generation: AtomicU64::new(0),
            listener: Mutex::new(None),
            feed,
            clock,
            notifier,
            settings,
            fetch_today: FetchTodayHandler::new(store.clone()),
            fetch_history: FetchHistoryHandler::new(store.clone(), settings.history_limit),
            clock_in: ClockInHandler::new(store.clone(), settings.reclock_policy),
            clock_out: ClockOutHandler::new(store, settings.reclock_policy),
        }
    }

    pub fn settings(&self) -> SyncSettings {
        self.settings
    }

    /// Binds to `user` and waits for the first load. Any previous binding is
    /// torn down first.
    #[instrument(name = "attendance_mount", skip(self, user), fields(user_id = %user.id))]
    pub async fn mount(self: &Arc<Self>, user: User) {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let filter = ChangeFilter::new(ATTENDANCE_TABLE, user.id.clone());
        {
            let mut state = self.state.write().await;
            *state = SyncState {
                token,
                user: Some(user),
                is_loading: true,
                ..SyncState::default()
            };
        }

        // Subscribe before the first read so a write racing the load still
        // triggers a refresh.
        let subscription = self.feed.subscribe(filter);
        let listener = tokio::spawn(refresh_loop::run(
            Arc::downgrade(self),
            token,
            subscription,
            self.settings.debounce,
        ));
        self.replace_listener(Some(listener));
        info!(token, "attendance sync mounted");

        self.load(token).await;
    }

    /// Mounts `user` unless the sync is already bound to them.
    pub async fn ensure_mounted(self: &Arc<Self>, user: &User) {
        let bound = self.state.read().await.user.as_ref().map(|u| u.id.clone());
        if bound.as_deref() != Some(user.id.as_str()) {
            self.mount(user.clone()).await;
        }
    }

    pub async fn unmount(&self) {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.replace_listener(None);
        let mut state = self.state.write().await;
        if let Some(user) = state.user.take() {
            info!(user_id = %user.id, "attendance sync unmounted");
        }
        *state = SyncState {
            token,
            ..SyncState::default()
        };
    }

    pub async fn snapshot(&self) -> AttendanceSnapshot {
        let state = self.state.read().await;
        AttendanceSnapshot {
            user_id: state.user.as_ref().map(|user| user.id.clone()),
            today: state.today.clone(),
            history: state.history.clone(),
            is_loading: state.is_loading,
        }
    }

    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    /// Re-reads today's record. A missing row clears the cache, a failed read
    /// leaves it as it was.
    pub async fn fetch_today(&self) -> Result<(), SyncError> {
        let (token, user, _) = self.bound().await?;
        let outcome = self.fetch_today.handle(&user.id, self.clock.today()).await;
        let mut state = self.state.write().await;
        if state.token == token {
            apply_today(&mut state, outcome);
        }
        Ok(())
    }

    /// Re-reads recent history. A failed read leaves the cache as it was.
    pub async fn fetch_history(&self) -> Result<(), SyncError> {
        let (token, user, _) = self.bound().await?;
        let history = self.fetch_history.handle(&user.id).await;
        let mut state = self.state.write().await;
        if state.token == token {
            if let Ok(history) = history {
                state.history = history;
            }
        }
        Ok(())
    }

    /// Today and history, read concurrently.
    pub async fn refetch(&self) -> Result<(), SyncError> {
        let (token, _, _) = self.bound().await?;
        self.load(token).await;
        Ok(())
    }

    #[instrument(name = "attendance_clock_in", skip(self, location))]
    pub async fn clock_in(&self, location: Option<Location>) -> Result<AttendanceRecord, SyncError> {
        let (token, user, _) = self.bound().await?;
        let at = self.clock.now();
        let command = ClockIn {
            user_id: user.id.clone(),
            date: self.clock.today(),
            at,
            location,
        };
        match self.clock_in.handle(command).await {
            Ok(record) => {
                self.apply_record(token, &record).await;
                self.notifier
                    .notify(Toast::success("Absen Masuk Berhasil", recorded_at(at)));
                Ok(record)
            }
            Err(e) => {
                error!(user_id = %user.id, error = %e, "clock in error");
                self.notifier.notify(attendance_failed());
                Err(e.into())
            }
        }
    }

    #[instrument(name = "attendance_clock_out", skip(self, location))]
    pub async fn clock_out(
        &self,
        location: Option<Location>,
    ) -> Result<AttendanceRecord, SyncError> {
        let (token, user, today) = self.bound().await?;
        let at = self.clock.now();
        let command = ClockOut { at, location };
        match self.clock_out.handle(today.as_ref(), command).await {
            Ok(record) => {
                self.apply_record(token, &record).await;
                self.notifier
                    .notify(Toast::success("Absen Keluar Berhasil", recorded_at(at)));
                Ok(record)
            }
            Err(e) => {
                error!(user_id = %user.id, error = %e, "clock out error");
                self.notifier.notify(attendance_failed());
                Err(e.into())
            }
        }
    }

    async fn bound(&self) -> Result<(u64, User, Option<AttendanceRecord>), SyncError> {
        let state = self.state.read().await;
        match &state.user {
            Some(user) => Ok((state.token, user.clone(), state.today.clone())),
            None => Err(SyncError::NoSession),
        }
    }

    /// Returns `false` when `token` no longer identifies the current mount.
    async fn load(&self, token: u64) -> bool {
        let user_id = {
            let state = self.state.read().await;
            match (&state.user, state.token == token) {
                (Some(user), true) => user.id.clone(),
                _ => return false,
            }
        };

        let (today, history) = join!(
            self.fetch_today.handle(&user_id, self.clock.today()),
            self.fetch_history.handle(&user_id)
        );

        let mut state = self.state.write().await;
        if state.token != token {
            debug!(token, current = state.token, "discarding stale attendance fetch");
            return false;
        }
        apply_today(&mut state, today);
        if let Ok(history) = history {
            state.history = history;
        }
        state.is_loading = false;
        true
    }

    async fn apply_record(&self, token: u64, record: &AttendanceRecord) {
        let mut state = self.state.write().await;
        if state.token == token {
            state.today = Some(record.clone());
        } else {
            debug!(token, record_id = %record.id, "mount changed during write, cache not updated");
        }
    }

    fn replace_listener(&self, next: Option<JoinHandle<()>>) {
        let mut listener = self.listener.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = listener.take() {
            previous.abort();
        }
        *listener = next;
    }
}

#[async_trait]
impl<TStore> Refresh for AttendanceSync<TStore>
where
    TStore: AttendanceStore + 'static,
{
    async fn refresh(&self, token: u64) -> bool {
        self.load(token).await
    }
}

impl<TStore> Drop for AttendanceSync<TStore>
where
    TStore: AttendanceStore + 'static,
{
    fn drop(&mut self) {
        self.replace_listener(None);
    }
}

fn apply_today(state: &mut SyncState, outcome: TodayOutcome) {
    match outcome {
        TodayOutcome::Found(record) => state.today = Some(record),
        TodayOutcome::NotFound => state.today = None,
        TodayOutcome::Failed(_) => {}
    }
}

fn recorded_at(at: DateTime<Utc>) -> String {
    format!("Tercatat pada {}", at.format("%H.%M.%S"))
}

fn attendance_failed() -> Toast {
    Toast::destructive("Error", "Gagal melakukan absensi")
}
