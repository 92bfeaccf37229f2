use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum AuctionEvent {
    // 입찰 이벤트
    BidPlaced {
        auction_id: String,
        bidder_id: String,
        amount: i64,
        timestamp: DateTime<Utc>,
    },
}
