/// 필터 상태 동기화
/// 필터 상태를 URL 쿼리 문자열과 영속 키-값 저장소 양쪽에 묶는다.
/// 복원 우선순위: URL -> 저장소 -> 기본값
// region:    --- Imports
use crate::error::StorageError;
use crate::query::queries::{
    FILTER_STORAGE_KEY, PARAM_CATEGORY, PARAM_KEYWORD, PARAM_SORT, PARAM_STATUS, PARAM_TYPE,
    RECOGNIZED_PARAMS,
};
use crate::query::{FilterState, SortOption, StatusFilter, TypeFilter};
use std::sync::Arc;
use tracing::{debug, warn};

pub mod kv;
pub mod location;

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use location::{History, Location};

// endregion: --- Imports

// region:    --- Query Params

/// URL 쿼리 파라미터
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// 쿼리 문자열 파싱. 해석할 수 없으면 빈 파라미터
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
            Ok(pairs) => Self { pairs },
            Err(e) => {
                warn!("{:<12} --> 쿼리 문자열 해석 실패: {}", "Sync", e);
                Self::default()
            }
        }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// 같은 키가 여러 번 나오면 첫 번째 값
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// 필터 관련 키가 하나라도 있는지
    pub fn has_filter_keys(&self) -> bool {
        self.pairs
            .iter()
            .any(|(k, _)| RECOGNIZED_PARAMS.contains(&k.as_str()))
    }
}

// endregion: --- Query Params

// region:    --- Hydrate / Encode

/// 필터 상태 복원
/// URL 에 필터 키가 있으면 URL 값만 사용 (없는 키는 해당 키만 기본값).
/// 그 외에는 저장된 값, 저장된 값이 없거나 깨졌으면 기본값.
pub fn hydrate(
    params: &QueryParams,
    persisted: Option<&str>,
    defaults: &FilterState,
) -> FilterState {
    if params.has_filter_keys() {
        debug!("{:<12} --> URL 에서 필터 복원", "Sync");
        return from_params(params, defaults);
    }

    if let Some(saved) = persisted {
        match serde_json::from_str::<FilterState>(saved) {
            Ok(filters) => {
                debug!("{:<12} --> 저장소에서 필터 복원", "Sync");
                return filters;
            }
            Err(e) => warn!("{:<12} --> 저장된 필터 해석 실패: {}", "Sync", e),
        }
    }

    defaults.clone()
}

// 알 수 없는 값은 해당 항목만 전체 허용(정렬은 입력 순서 유지)으로 처리
// 빈 값은 키가 없는 것과 같다
fn from_params(params: &QueryParams, defaults: &FilterState) -> FilterState {
    FilterState {
        keyword: params
            .get(PARAM_KEYWORD)
            .map(str::to_string)
            .unwrap_or_else(|| defaults.keyword.clone()),
        kind: params
            .get(PARAM_TYPE)
            .filter(|v| !v.is_empty())
            .map(|v| TypeFilter::parse(v).unwrap_or(TypeFilter::All))
            .unwrap_or(defaults.kind),
        category: params
            .get(PARAM_CATEGORY)
            .map(str::to_string)
            .unwrap_or_else(|| defaults.category.clone()),
        status: params
            .get(PARAM_STATUS)
            .filter(|v| !v.is_empty())
            .map(|v| StatusFilter::parse(v).unwrap_or(StatusFilter::All))
            .unwrap_or(defaults.status),
        sort_by: params
            .get(PARAM_SORT)
            .filter(|v| !v.is_empty())
            .map(|v| SortOption::parse(v).unwrap_or(SortOption::Unsorted))
            .unwrap_or(defaults.sort_by),
    }
}

/// URL 쿼리 문자열 생성
/// 복원 시 쓰는 기본값과 같은 키는 생략해 공유 가능한 최소 URL 을 만든다.
pub fn encode_query(filters: &FilterState, defaults: &FilterState) -> String {
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    if filters.keyword != defaults.keyword {
        pairs.push((PARAM_KEYWORD, filters.keyword.as_str()));
    }
    if filters.kind != defaults.kind {
        pairs.push((PARAM_TYPE, filters.kind.as_str()));
    }
    if filters.category != defaults.category {
        pairs.push((PARAM_CATEGORY, filters.category.as_str()));
    }
    if filters.status != defaults.status {
        pairs.push((PARAM_STATUS, filters.status.as_str()));
    }
    if filters.sort_by != defaults.sort_by {
        pairs.push((PARAM_SORT, filters.sort_by.as_str()));
    }
    serde_urlencoded::to_string(&pairs).unwrap_or_default()
}

// endregion: --- Hydrate / Encode

// region:    --- Filter Sync

/// URL + 저장소 동기화 어댑터
pub struct FilterSync<L: Location> {
    location: L,
    store: Arc<dyn KeyValueStore>,
    storage_key: String,
    defaults: FilterState,
}

impl<L: Location> FilterSync<L> {
    pub fn new(location: L, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            location,
            store,
            storage_key: FILTER_STORAGE_KEY.to_string(),
            defaults: FilterState::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: FilterState) -> Self {
        self.defaults = defaults;
        self
    }

    /// 화면 진입 시 필터 복원
    pub fn hydrate(&self) -> FilterState {
        let params = QueryParams::parse(&self.location.query());
        let persisted = self.store.get(&self.storage_key);
        hydrate(&params, persisted.as_deref(), &self.defaults)
    }

    /// 필터 변경 시마다 호출
    /// URL 은 현재 기록을 교체하고, 저장소에는 전체 스냅샷을 쓴다. 저장 실패는 로그만 남긴다.
    pub fn persist(&mut self, filters: &FilterState) {
        self.location.replace_query(&encode_query(filters, &self.defaults));

        let result = serde_json::to_string(filters)
            .map_err(StorageError::from)
            .and_then(|snapshot| self.store.set(&self.storage_key, &snapshot));
        if let Err(e) = result {
            warn!("{:<12} --> 필터 저장 실패: {}", "Sync", e);
        }
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }
}

// endregion: --- Filter Sync

// endregion: --- Tests
