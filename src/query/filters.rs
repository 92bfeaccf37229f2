// region:    --- Imports
use crate::auction::{Auction, AuctionStatus, AuctionType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::queries::ending_soon_window;

// endregion: --- Imports

// region:    --- Filter Enums

/// 종류 필터
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeFilter {
    #[default]
    All,
    Automobile,
    Property,
}

impl TypeFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ALL" => Some(TypeFilter::All),
            "AUTOMOBILE" => Some(TypeFilter::Automobile),
            "PROPERTY" => Some(TypeFilter::Property),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "ALL",
            TypeFilter::Automobile => "AUTOMOBILE",
            TypeFilter::Property => "PROPERTY",
        }
    }

    pub fn matches(&self, kind: AuctionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Automobile => kind == AuctionType::Automobile,
            TypeFilter::Property => kind == AuctionType::Property,
        }
    }
}

/// 상태 필터
/// ENDING_SOON 은 실제 경매 상태가 아닌 파생 상태 (진행 중 + 24시간 이내 종료)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusFilter {
    All,
    EndingSoon,
    #[default]
    Active,
    Pending,
    Ended,
    Cancelled,
}

impl StatusFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ALL" => Some(StatusFilter::All),
            "ENDING_SOON" => Some(StatusFilter::EndingSoon),
            "ACTIVE" => Some(StatusFilter::Active),
            "PENDING" => Some(StatusFilter::Pending),
            "ENDED" => Some(StatusFilter::Ended),
            "CANCELLED" => Some(StatusFilter::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "ALL",
            StatusFilter::EndingSoon => "ENDING_SOON",
            StatusFilter::Active => "ACTIVE",
            StatusFilter::Pending => "PENDING",
            StatusFilter::Ended => "ENDED",
            StatusFilter::Cancelled => "CANCELLED",
        }
    }

    pub fn matches(&self, auction: &Auction, now: DateTime<Utc>) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::EndingSoon => {
                let remaining = auction.ends_at - now;
                auction.status == AuctionStatus::Active
                    && remaining > chrono::Duration::zero()
                    && remaining < ending_soon_window()
            }
            StatusFilter::Active => auction.status == AuctionStatus::Active,
            StatusFilter::Pending => auction.status == AuctionStatus::Pending,
            StatusFilter::Ended => auction.status == AuctionStatus::Ended,
            StatusFilter::Cancelled => auction.status == AuctionStatus::Cancelled,
        }
    }

    /// 필터 태그 표시용 라벨
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::EndingSoon => "Ending Soon",
            StatusFilter::Active => "Active",
            StatusFilter::Pending => "Pending",
            StatusFilter::Ended => "Ended",
            StatusFilter::Cancelled => "Cancelled",
        }
    }
}

/// 정렬 기준
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOption {
    #[default]
    Newest,
    EndingSoon,
    HighestBid,
    LowestBid,
    SellerRating,
    /// 입력 순서 유지 (알 수 없는 정렬 키의 대체값)
    Unsorted,
}

impl SortOption {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "NEWEST" => Some(SortOption::Newest),
            "ENDING_SOON" => Some(SortOption::EndingSoon),
            "HIGHEST_BID" => Some(SortOption::HighestBid),
            "LOWEST_BID" => Some(SortOption::LowestBid),
            "SELLER_RATING" => Some(SortOption::SellerRating),
            "UNSORTED" => Some(SortOption::Unsorted),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Newest => "NEWEST",
            SortOption::EndingSoon => "ENDING_SOON",
            SortOption::HighestBid => "HIGHEST_BID",
            SortOption::LowestBid => "LOWEST_BID",
            SortOption::SellerRating => "SELLER_RATING",
            SortOption::Unsorted => "UNSORTED",
        }
    }
}

// endregion: --- Filter Enums

// region:    --- Filter State

/// 목록 조회 조건
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub keyword: String,
    #[serde(rename = "type")]
    pub kind: TypeFilter,
    /// 빈 문자열이면 분류 필터 없음
    pub category: String,
    pub status: StatusFilter,
    pub sort_by: SortOption,
}

/// 활성화된 필터 태그
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "label", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterTag {
    Keyword(String),
    Category(String),
    Status(String),
}

impl FilterState {
    /// 종류 변경 시 분류 필터는 초기화된다
    pub fn with_type(mut self, kind: TypeFilter) -> Self {
        self.kind = kind;
        self.category.clear();
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_sort(mut self, sort_by: SortOption) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// 모든 필터 초기화
    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    pub fn active_tags(&self) -> Vec<FilterTag> {
        let mut tags = Vec::new();
        if !self.keyword.is_empty() {
            tags.push(FilterTag::Keyword(self.keyword.clone()));
        }
        if !self.category.is_empty() {
            tags.push(FilterTag::Category(self.category.clone()));
        }
        if self.status != StatusFilter::Active {
            tags.push(FilterTag::Status(self.status.label().to_string()));
        }
        tags
    }
}

// endregion: --- Filter State

// endregion: --- Tests
