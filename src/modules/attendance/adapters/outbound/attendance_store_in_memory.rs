// In memory attendance store.
//
// Rows are keyed by (user_id, date), which makes the upsert key unique by
// construction. Every write publishes a change notification when a feed is
// attached.

use crate::modules::attendance::adapters::outbound::attendance_store::{
    AttendanceStore, StoreError,
};
use crate::modules::attendance::core::record::{
    ATTENDANCE_TABLE, AttendancePatch, AttendanceRecord, AttendanceUpsert,
};
use crate::shared::core::primitives::{Clock, Location};
use crate::shared::infrastructure::change_feed::{ChangeFeed, ChangeKind, ChangeNotification};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct InMemoryAttendanceStore {
    rows: RwLock<HashMap<(String, NaiveDate), AttendanceRecord>>,
    clock: Arc<dyn Clock>,
    feed: Option<Arc<dyn ChangeFeed>>,
    is_offline: AtomicBool,
    delay_read_ms: AtomicU64,
    reads: AtomicUsize,
}

impl InMemoryAttendanceStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            clock,
            feed: None,
            is_offline: AtomicBool::new(false),
            delay_read_ms: AtomicU64::new(0),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn with_change_feed(mut self, feed: Arc<dyn ChangeFeed>) -> Self {
        self.feed = Some(feed);
        self
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn set_delay_read_ms(&self, ms: u64) {
        self.delay_read_ms.store(ms, Ordering::SeqCst);
    }

    /// Number of read calls served so far, offline ones included.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Puts a row in place as-is, without publishing.
    pub async fn seed(&self, record: AttendanceRecord) {
        self.rows
            .write()
            .await
            .insert((record.user_id.clone(), record.date), record);
    }

    pub async fn row_count(&self) -> usize {
        self.rows.read().await.len()
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("Attendance store offline".into()));
        }
        Ok(())
    }

    async fn before_read(&self) -> Result<(), StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let delay = self.delay_read_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        self.ensure_online()
    }

    fn publish(&self, user_id: &str, kind: ChangeKind) {
        if let Some(feed) = &self.feed {
            feed.publish(ChangeNotification {
                table: ATTENDANCE_TABLE.to_string(),
                user_id: user_id.to_string(),
                kind,
            });
        }
    }
}

fn apply_location(record: &mut AttendanceRecord, location: Option<Location>) {
    if let Some(location) = location {
        record.location_lat = Some(location.lat);
        record.location_lng = Some(location.lng);
    }
}

#[async_trait]
impl AttendanceStore for InMemoryAttendanceStore {
    async fn find_by_user_and_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, StoreError> {
        self.before_read().await?;
        let guard = self.rows.read().await;
        Ok(guard.get(&(user_id.to_string(), date)).cloned())
    }

    async fn list_by_user(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<AttendanceRecord>, StoreError> {
        self.before_read().await?;
        let guard = self.rows.read().await;
        let mut items: Vec<AttendanceRecord> = guard
            .iter()
            .filter(|((uid, _), _)| uid == user_id)
            .map(|(_, record)| record.clone())
            .collect();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items.truncate(limit);
        Ok(items)
    }

    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>, StoreError> {
        self.before_read().await?;
        let guard = self.rows.read().await;
        let mut items: Vec<AttendanceRecord> = guard
            .values()
            .filter(|record| record.date == date)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        Ok(items)
    }

    async fn upsert(&self, upsert: AttendanceUpsert) -> Result<AttendanceRecord, StoreError> {
        self.ensure_online()?;
        let now = self.clock.now();
        let key = (upsert.user_id.clone(), upsert.date);
        let (record, kind) = {
            let mut guard = self.rows.write().await;
            match guard.get_mut(&key) {
                Some(existing) => {
                    existing.clock_in_time = Some(upsert.clock_in_time);
                    existing.status = upsert.status;
                    apply_location(existing, upsert.location);
                    existing.updated_at = now;
                    (existing.clone(), ChangeKind::Update)
                }
                None => {
                    let mut record = AttendanceRecord {
                        id: Uuid::now_v7().to_string(),
                        user_id: upsert.user_id,
                        date: upsert.date,
                        clock_in_time: Some(upsert.clock_in_time),
                        clock_out_time: None,
                        status: upsert.status,
                        location_lat: None,
                        location_lng: None,
                        notes: None,
                        created_at: now,
                        updated_at: now,
                    };
                    apply_location(&mut record, upsert.location);
                    guard.insert(key, record.clone());
                    (record, ChangeKind::Insert)
                }
            }
        };
        self.publish(&record.user_id, kind);
        Ok(record)
    }

    async fn update(
        &self,
        record_id: &str,
        patch: AttendancePatch,
    ) -> Result<AttendanceRecord, StoreError> {
        self.ensure_online()?;
        let now = self.clock.now();
        let record = {
            let mut guard = self.rows.write().await;
            let existing = guard
                .values_mut()
                .find(|record| record.id == record_id)
                .ok_or_else(|| StoreError::NotFound(record_id.to_string()))?;
            existing.clock_out_time = Some(patch.clock_out_time);
            apply_location(existing, patch.location);
            existing.updated_at = now;
            existing.clone()
        };
        self.publish(&record.user_id, ChangeKind::Update);
        Ok(record)
    }
}
