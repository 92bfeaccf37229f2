/// 남은 시간 표시
/// 상세 페이지는 "1d 1h 1m 1s", 목록 카드는 "1d 1h left" / "5h remaining" 형식을 쓴다.
// region:    --- Imports
use chrono::{DateTime, Utc};

pub mod clock;

pub use clock::{Clock, MonotonicClock, SystemClock};

// endregion: --- Imports

// region:    --- Remaining Time

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = MS_PER_SECOND * 60;
const MS_PER_HOUR: i64 = MS_PER_MINUTE * 60;
const MS_PER_DAY: i64 = MS_PER_HOUR * 24;

pub const ENDED_LABEL: &str = "Ended";

/// 남은 시간 분해 결과 (각 단위는 버림)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// 종료 시각까지 남은 시간. 이미 종료됐으면 None
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Option<Self> {
        let diff = (target - now).num_milliseconds();
        if diff <= 0 {
            return None;
        }
        Some(Self {
            days: diff / MS_PER_DAY,
            hours: (diff % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (diff % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (diff % MS_PER_MINUTE) / MS_PER_SECOND,
        })
    }
}

/// 상세 페이지용 남은 시간
pub fn format_remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match Remaining::until(target, now) {
        None => ENDED_LABEL.to_string(),
        Some(r) => format!("{}d {}h {}m {}s", r.days, r.hours, r.minutes, r.seconds),
    }
}

/// 목록 카드용 남은 시간
pub fn format_card_label(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match Remaining::until(target, now) {
        None => ENDED_LABEL.to_string(),
        Some(r) if r.days == 0 => format!("{}h remaining", r.hours),
        Some(r) => format!("{}d {}h left", r.days, r.hours),
    }
}

// endregion: --- Remaining Time

// endregion: --- Tests
