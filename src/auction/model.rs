use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// region:    --- Enums

/// 경매 대상 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuctionType {
    Automobile,
    Property,
}

/// 경매 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuctionStatus {
    Active,
    Pending,
    Ended,
    Cancelled,
}

impl AuctionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuctionStatus::Active => "ACTIVE",
            AuctionStatus::Pending => "PENDING",
            AuctionStatus::Ended => "ENDED",
            AuctionStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 사용자 권한
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,
    Admin,
    SuperAdmin,
}

// endregion: --- Enums

// region:    --- Models

// 입찰 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub id: String,
    pub auction_id: String,
    pub bidder_id: String,
    pub bidder_name: String,
    pub amount: i64,
    pub timestamp: DateTime<Utc>,
}

// 경매 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: AuctionType,
    /// 세부 분류 (예: "SUV", "Residential")
    pub category: String,
    pub starting_price: i64,
    pub current_bid: i64,
    pub status: AuctionStatus,
    pub created_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub seller_id: String,
    pub seller_name: String,
    pub seller_rating: Option<f64>,
    pub watchers: u32,
    pub bids: Vec<Bid>,
}

impl Auction {
    /// 판매자 평점 (없으면 0)
    pub fn rating_or_zero(&self) -> f64 {
        self.seller_rating.unwrap_or(0.0)
    }

    /// 마지막 입찰
    pub fn last_bid(&self) -> Option<&Bid> {
        self.bids.last()
    }
}

/// 현재 사용자 (신원 정보)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewer {
    pub id: String,
    pub name: String,
    pub role: UserRole,
}

// endregion: --- Models
