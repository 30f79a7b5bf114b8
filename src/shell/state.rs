use crate::modules::admin::use_cases::dashboard_stats::handler::DashboardStatsHandler;
use crate::modules::admin::use_cases::recent_activity::handler::{
    DEFAULT_ACTIVITY_LIMIT, RecentActivityHandler,
};
use crate::modules::attendance::adapters::outbound::attendance_store_in_memory::InMemoryAttendanceStore;
use crate::modules::attendance::sync::attendance_sync::AttendanceSync;
use crate::modules::auth::adapters::outbound::user_directory_in_memory::InMemoryUserDirectory;
use crate::modules::auth::core::session::SessionStore;
use crate::modules::auth::use_cases::login::handler::LoginHandler;
use crate::modules::auth::use_cases::logout::handler::LogoutHandler;
use crate::modules::auth::use_cases::signup::handler::SignupHandler;
use crate::modules::leave::adapters::outbound::leave_store_in_memory::InMemoryLeaveStore;
use crate::modules::leave::use_cases::review_leave::handler::ReviewLeaveHandler;
use crate::modules::leave::use_cases::submit_leave::handler::SubmitLeaveHandler;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::change_feed::ChangeFeed;
use crate::shared::infrastructure::change_feed::in_memory::InMemoryChangeFeed;
use crate::shared::infrastructure::durable_storage::DurableStorage;
use crate::shared::infrastructure::geolocation::GeolocationProvider;
use crate::shared::infrastructure::geolocation::fixed::FixedGeolocation;
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use crate::shell::config::AppConfig;
use std::sync::Arc;

pub type Dashboard =
    DashboardStatsHandler<InMemoryUserDirectory, InMemoryAttendanceStore, InMemoryLeaveStore>;

pub type ActivityFeed =
    RecentActivityHandler<InMemoryUserDirectory, InMemoryAttendanceStore, InMemoryLeaveStore>;

#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
    pub session: Arc<SessionStore>,
    pub notifier: Arc<InMemoryNotifier>,
    pub directory: Arc<InMemoryUserDirectory>,
    pub login_handler: Arc<LoginHandler<InMemoryUserDirectory>>,
    pub logout_handler: Arc<LogoutHandler>,
    pub signup_handler: Arc<SignupHandler<InMemoryUserDirectory>>,
    pub change_feed: Arc<InMemoryChangeFeed>,
    pub attendance_store: Arc<InMemoryAttendanceStore>,
    pub attendance: Arc<AttendanceSync<InMemoryAttendanceStore>>,
    pub geolocation: Arc<dyn GeolocationProvider>,
    pub leave_store: Arc<InMemoryLeaveStore>,
    pub submit_leave_handler: Arc<SubmitLeaveHandler<InMemoryLeaveStore>>,
    pub review_leave_handler: Arc<ReviewLeaveHandler<InMemoryLeaveStore>>,
    pub dashboard_handler: Arc<Dashboard>,
    pub recent_activity_handler: Arc<ActivityFeed>,
}

impl AppState {
    /// Wires the in-memory adapters. The session is hydrated from `storage`.
    pub fn new(
        config: &AppConfig,
        storage: Arc<dyn DurableStorage>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, serde_json::Error> {
        let session = Arc::new(SessionStore::hydrate(storage));
        let notifier = Arc::new(InMemoryNotifier::new());
        let directory = Arc::new(InMemoryUserDirectory::with_demo_users()?);
        let change_feed = Arc::new(InMemoryChangeFeed::new());
        let feed: Arc<dyn ChangeFeed> = change_feed.clone();

        let attendance_store = Arc::new(
            InMemoryAttendanceStore::new(clock.clone()).with_change_feed(feed.clone()),
        );
        let leave_store =
            Arc::new(InMemoryLeaveStore::new(clock.clone()).with_change_feed(feed.clone()));

        let attendance = Arc::new(AttendanceSync::new(
            attendance_store.clone(),
            feed,
            clock.clone(),
            notifier.clone(),
            config.sync_settings(),
        ));
        let geolocation: Arc<dyn GeolocationProvider> = match config.site_location {
            Some(site) => Arc::new(FixedGeolocation::at(site)),
            None => Arc::new(FixedGeolocation::unavailable()),
        };

        Ok(Self {
            login_handler: Arc::new(LoginHandler::new(
                directory.clone(),
                session.clone(),
                notifier.clone(),
            )),
            logout_handler: Arc::new(LogoutHandler::new(session.clone())),
            signup_handler: Arc::new(SignupHandler::new(directory.clone(), notifier.clone())),
            submit_leave_handler: Arc::new(SubmitLeaveHandler::new(
                leave_store.clone(),
                notifier.clone(),
            )),
            review_leave_handler: Arc::new(ReviewLeaveHandler::new(
                leave_store.clone(),
                clock.clone(),
            )),
            dashboard_handler: Arc::new(DashboardStatsHandler::new(
                directory.clone(),
                attendance_store.clone(),
                leave_store.clone(),
            )),
            recent_activity_handler: Arc::new(RecentActivityHandler::new(
                directory.clone(),
                attendance_store.clone(),
                leave_store.clone(),
                DEFAULT_ACTIVITY_LIMIT,
            )),
            clock,
            session,
            notifier,
            directory,
            change_feed,
            attendance_store,
            attendance,
            geolocation,
            leave_store,
        })
    }
}
