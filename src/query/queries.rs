use chrono::Duration;

/// "마감 임박" 기준 시간 (시간 단위)
pub const ENDING_SOON_HOURS: i64 = 24;

/// "마감 임박" 기준 구간
pub fn ending_soon_window() -> Duration {
    Duration::hours(ENDING_SOON_HOURS)
}

/// 자동차 분류
pub const AUTOMOBILE_CATEGORIES: &[&str] = &["Sedan", "SUV", "Sports", "Classic", "Truck"];

/// 부동산 분류
pub const PROPERTY_CATEGORIES: &[&str] = &["Residential", "Commercial", "Land", "Industrial"];

/// URL 쿼리 파라미터 키
pub const PARAM_KEYWORD: &str = "keyword";
pub const PARAM_TYPE: &str = "type";
pub const PARAM_CATEGORY: &str = "category";
pub const PARAM_STATUS: &str = "status";
pub const PARAM_SORT: &str = "sort";

pub const RECOGNIZED_PARAMS: &[&str] = &[
    PARAM_KEYWORD,
    PARAM_TYPE,
    PARAM_CATEGORY,
    PARAM_STATUS,
    PARAM_SORT,
];

/// 필터 상태 저장 키
pub const FILTER_STORAGE_KEY: &str = "dashboard_filters";
