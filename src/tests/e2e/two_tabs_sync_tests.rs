use crate::modules::attendance::adapters::outbound::attendance_store_in_memory::InMemoryAttendanceStore;
use crate::modules::attendance::sync::attendance_sync::{AttendanceSync, SyncSettings};
use crate::shared::core::primitives::{FixedClock, Location};
use crate::shared::infrastructure::change_feed::in_memory::InMemoryChangeFeed;
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use crate::tests::fixtures::records::at;
use crate::tests::fixtures::users::sarah;
use chrono::TimeDelta;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

type Tab = AttendanceSync<InMemoryAttendanceStore>;

fn tab(
    store: &Arc<InMemoryAttendanceStore>,
    feed: &Arc<InMemoryChangeFeed>,
    clock: &Arc<FixedClock>,
) -> Arc<Tab> {
    Arc::new(AttendanceSync::new(
        store.clone(),
        feed.clone(),
        clock.clone(),
        Arc::new(InMemoryNotifier::new()),
        SyncSettings {
            debounce: Duration::from_millis(20),
            ..SyncSettings::default()
        },
    ))
}

#[tokio::test]
async fn clock_in_and_out_in_one_tab_reaches_the_other() {
    let clock = Arc::new(FixedClock::new(at(8, 0)));
    let feed = Arc::new(InMemoryChangeFeed::new());
    let store =
        Arc::new(InMemoryAttendanceStore::new(clock.clone()).with_change_feed(feed.clone()));
    let tab_a = tab(&store, &feed, &clock);
    let tab_b = tab(&store, &feed, &clock);
    tab_a.mount(sarah()).await;
    tab_b.mount(sarah()).await;
    assert_eq!(tab_b.snapshot().await.today, None);

    let site = Location {
        lat: -6.2,
        lng: 106.8,
    };
    let written = tab_a.clock_in(Some(site)).await.unwrap();
    sleep(Duration::from_millis(150)).await;

    let seen = tab_b.snapshot().await;
    let today = seen.today.expect("tab B should see the clock-in");
    assert_eq!(today.id, written.id);
    assert_eq!(today.clock_in_time, Some(at(8, 0)));
    assert_eq!(today.location(), Some(site));
    assert_eq!(seen.history.len(), 1);

    clock.advance(TimeDelta::hours(9));
    tab_a.clock_out(None).await.unwrap();
    sleep(Duration::from_millis(150)).await;

    let today = tab_b.snapshot().await.today.unwrap();
    assert_eq!(today.clock_out_time, Some(at(17, 0)));
    assert_eq!(tab_b.snapshot().await.day().label(), "clocked_out");
}

#[tokio::test]
async fn a_burst_of_writes_is_read_back_once() {
    let clock = Arc::new(FixedClock::new(at(8, 0)));
    let feed = Arc::new(InMemoryChangeFeed::new());
    let store =
        Arc::new(InMemoryAttendanceStore::new(clock.clone()).with_change_feed(feed.clone()));
    let tab_a = tab(&store, &feed, &clock);
    let tab_b = tab(&store, &feed, &clock);
    tab_a.mount(sarah()).await;
    tab_b.mount(sarah()).await;

    tab_a.clock_in(None).await.unwrap();
    let reads_before = store.read_count();
    for minutes in 1..=3 {
        clock.advance(TimeDelta::minutes(minutes));
        tab_a.clock_in(None).await.unwrap();
    }
    sleep(Duration::from_millis(200)).await;

    // Each tab re-reads today and history at most a couple of times, not once
    // per write.
    let reads = store.read_count() - reads_before;
    assert!(reads <= 12, "expected coalesced refreshes, saw {reads} reads");
    let today = tab_b.snapshot().await.today.unwrap();
    assert_eq!(today.clock_in_time, Some(at(8, 6)));
}
