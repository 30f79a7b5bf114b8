// Builder for the SubmitLeave command, seeded from json/submit_leave.json.

use crate::modules::leave::use_cases::submit_leave::command::SubmitLeave;
use serde::Deserialize;

const SUBMIT_LEAVE_JSON: &str = include_str!("json/submit_leave.json");

// JSON -> DTO (form shape)
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitLeaveDto {
    pub user_id: String,
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

pub struct SubmitLeaveBuilder {
    inner: SubmitLeave,
}

impl Default for SubmitLeaveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SubmitLeaveBuilder {
    pub fn new() -> Self {
        let dto: SubmitLeaveDto = serde_json::from_str(SUBMIT_LEAVE_JSON).unwrap();
        Self {
            inner: SubmitLeave {
                user_id: dto.user_id,
                leave_type: dto.leave_type,
                start_date: dto.start_date,
                end_date: dto.end_date,
                reason: dto.reason,
            },
        }
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn leave_type(mut self, v: impl Into<String>) -> Self {
        self.inner.leave_type = v.into();
        self
    }

    pub fn start_date(mut self, v: impl Into<String>) -> Self {
        self.inner.start_date = v.into();
        self
    }

    pub fn end_date(mut self, v: impl Into<String>) -> Self {
        self.inner.end_date = v.into();
        self
    }

    pub fn reason(mut self, v: impl Into<String>) -> Self {
        self.inner.reason = v.into();
        self
    }

    pub fn build(self) -> SubmitLeave {
        self.inner
    }
}

#[cfg(test)]
mod submit_leave_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_parse_the_json_defaults() {
        let built = SubmitLeaveBuilder::default().build();
        assert_eq!(built.user_id, "2");
        assert_eq!(built.leave_type, "Cuti Sakit");
        assert_eq!(built.start_date, "2024-03-11");
        assert_eq!(built.end_date, "2024-03-12");
        assert_eq!(built.reason, "Demam dan flu");
    }

    #[rstest]
    fn it_should_override_every_field() {
        let built = SubmitLeaveBuilder::new()
            .user_id("3")
            .leave_type("Cuti Tahunan")
            .start_date("2024-04-01")
            .end_date("2024-04-05")
            .reason("Mudik")
            .build();

        assert_eq!(built.user_id, "3");
        assert_eq!(built.leave_type, "Cuti Tahunan");
        assert_eq!(built.start_date, "2024-04-01");
        assert_eq!(built.end_date, "2024-04-05");
        assert_eq!(built.reason, "Mudik");
    }
}
