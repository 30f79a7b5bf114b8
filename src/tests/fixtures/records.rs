use crate::modules::attendance::core::record::{AttendanceRecord, AttendanceStatus};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Monday 2024-03-04, the day every fixture record falls on by default.
pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
}

/// `hour:minute` UTC on `day()`.
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day().and_hms_opt(hour, minute, 0).unwrap())
}

pub struct AttendanceRecordBuilder {
    inner: AttendanceRecord,
}

impl Default for AttendanceRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AttendanceRecordBuilder {
    /// Sarah, present, clocked in at 08:00 on `day()`.
    pub fn new() -> Self {
        Self {
            inner: AttendanceRecord {
                id: uuid::Uuid::now_v7().to_string(),
                user_id: "2".to_string(),
                date: day(),
                clock_in_time: Some(at(8, 0)),
                clock_out_time: None,
                status: AttendanceStatus::Present,
                location_lat: None,
                location_lng: None,
                notes: None,
                created_at: at(8, 0),
                updated_at: at(8, 0),
            },
        }
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn status(mut self, v: AttendanceStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn clock_in(mut self, v: DateTime<Utc>) -> Self {
        self.inner.clock_in_time = Some(v);
        self
    }

    pub fn no_clock_in(mut self) -> Self {
        self.inner.clock_in_time = None;
        self
    }

    pub fn clock_out(mut self, v: DateTime<Utc>) -> Self {
        self.inner.clock_out_time = Some(v);
        self.inner.updated_at = v;
        self
    }

    pub fn location(mut self, lat: f64, lng: f64) -> Self {
        self.inner.location_lat = Some(lat);
        self.inner.location_lng = Some(lng);
        self
    }

    pub fn build(self) -> AttendanceRecord {
        self.inner
    }
}

#[cfg(test)]
mod attendance_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_default_to_a_morning_clock_in() {
        let record = AttendanceRecordBuilder::default().build();
        assert_eq!(record.user_id, "2");
        assert_eq!(record.date, day());
        assert_eq!(record.clock_in_time, Some(at(8, 0)));
        assert_eq!(record.clock_out_time, None);
        assert_eq!(record.location(), None);
    }

    #[rstest]
    fn it_should_override_fields() {
        let record = AttendanceRecordBuilder::new()
            .user_id("3")
            .status(AttendanceStatus::Late)
            .clock_in(at(9, 15))
            .clock_out(at(17, 0))
            .location(-6.2, 106.8)
            .build();

        assert_eq!(record.user_id, "3");
        assert_eq!(record.status, AttendanceStatus::Late);
        assert_eq!(record.clock_in_time, Some(at(9, 15)));
        assert_eq!(record.clock_out_time, Some(at(17, 0)));
        assert_eq!(record.location_lat, Some(-6.2));
    }
}
