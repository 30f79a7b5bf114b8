use crate::shared::core::primitives::FixedClock;
use crate::shared::infrastructure::durable_storage::in_memory::InMemoryStorage;
use crate::shell::config::AppConfig;
use crate::shell::state::AppState;
use crate::tests::fixtures::records::at;
use std::sync::Arc;
use std::time::Duration;

/// In-memory state with the clock frozen at 08:00 on the fixture day and no
/// geolocation.
pub fn make_test_state() -> AppState {
    make_clocked_test_state().0
}

pub fn make_test_state_with(configure: impl FnOnce(&mut AppConfig)) -> AppState {
    build(configure).0
}

/// Like `make_test_state`, with a handle to move the clock.
pub fn make_clocked_test_state() -> (AppState, Arc<FixedClock>) {
    build(|_| {})
}

fn build(configure: impl FnOnce(&mut AppConfig)) -> (AppState, Arc<FixedClock>) {
    let mut config = AppConfig {
        refresh_debounce: Duration::from_millis(20),
        ..AppConfig::default()
    };
    configure(&mut config);
    let clock = Arc::new(FixedClock::new(at(8, 0)));
    let state = AppState::new(&config, Arc::new(InMemoryStorage::new()), clock.clone()).unwrap();
    (state, clock)
}
