// region:    --- Imports
use crate::auction::{Auction, AuctionStatus, AuctionType};
use crate::countdown::format_card_label;
use crate::query::queries::ending_soon_window;
use crate::query::{apply_filters, available_categories, FilterState, FilterTag};
use chrono::{DateTime, Utc};
use serde::Serialize;

// endregion: --- Imports

// region:    --- Listing Page

/// 목록 카드
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingCard {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: AuctionType,
    pub category: String,
    pub status: AuctionStatus,
    pub current_bid: i64,
    pub bid_count: usize,
    pub seller_id: String,
    pub seller_name: String,
    pub time_left: String,
    /// 24시간 안에 끝나면 강조 표시
    pub urgent: bool,
}

impl ListingCard {
    pub fn new(auction: &Auction, now: DateTime<Utc>) -> Self {
        Self {
            id: auction.id.clone(),
            title: auction.title.clone(),
            description: auction.description.clone(),
            kind: auction.kind,
            category: auction.category.clone(),
            status: auction.status,
            current_bid: auction.current_bid,
            bid_count: auction.bids.len(),
            seller_id: auction.seller_id.clone(),
            seller_name: auction.seller_name.clone(),
            time_left: format_card_label(auction.ends_at, now),
            urgent: auction.ends_at - now < ending_soon_window(),
        }
    }
}

/// 목록 화면 한 번 그리기 분량
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingPage {
    pub filters: FilterState,
    pub tags: Vec<FilterTag>,
    pub categories: Vec<String>,
    pub cards: Vec<ListingCard>,
}

pub fn build_listing(auctions: &[Auction], filters: &FilterState, now: DateTime<Utc>) -> ListingPage {
    let cards = apply_filters(auctions, filters, now)
        .iter()
        .map(|auction| ListingCard::new(auction, now))
        .collect();

    ListingPage {
        filters: filters.clone(),
        tags: filters.active_tags(),
        categories: available_categories(filters.kind)
            .iter()
            .map(|c| c.to_string())
            .collect(),
        cards,
    }
}

// endregion: --- Listing Page
