/// 입찰 관련 커맨드 처리
/// 1. 최소 입찰가 계산
/// 2. 입찰
// region:    --- Imports
use crate::auction::{Auction, AuctionStatus, Bid, Viewer};
use crate::error::BidError;
use crate::store::AuctionStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;
// endregion: --- Imports

// region:    --- Commands

/// 입찰 명령
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlaceBidCommand {
    pub auction_id: String,
    pub amount: i64,
}

// 현재가 구간별 최소 입찰 단위
const SMALL_INCREMENT: i64 = 100;
const LARGE_INCREMENT: i64 = 500;
const INCREMENT_THRESHOLD: i64 = 10_000;

/// 1. 최소 입찰가
pub fn minimum_next_bid(current_bid: i64) -> i64 {
    if current_bid < INCREMENT_THRESHOLD {
        current_bid + SMALL_INCREMENT
    } else {
        current_bid + LARGE_INCREMENT
    }
}

/// 입찰 가능 여부 검증
pub fn validate_bid(auction: &Auction, amount: i64, now: DateTime<Utc>) -> Result<(), BidError> {
    match auction.status {
        AuctionStatus::Active => {}
        AuctionStatus::Pending => return Err(BidError::NotStarted),
        AuctionStatus::Ended => return Err(BidError::AlreadyEnded),
        status => return Err(BidError::InvalidStatus(status)),
    }

    if now >= auction.ends_at {
        return Err(BidError::AlreadyEnded);
    }

    if amount <= 0 {
        return Err(BidError::InvalidAmount(amount));
    }

    let minimum = minimum_next_bid(auction.current_bid);
    if amount < minimum {
        return Err(BidError::LowBid { amount, minimum });
    }

    Ok(())
}

/// 2. 입찰
/// 검증 후 입찰 내역 추가와 현재가 갱신을 한 번에 반영한다.
pub fn handle_place_bid(
    cmd: PlaceBidCommand,
    viewer: &Viewer,
    store: &AuctionStore,
    now: DateTime<Utc>,
) -> Result<Auction, BidError> {
    info!("{:<12} --> 입찰 요청 처리 시작: {:?}", "Command", cmd);

    let auction = store
        .get(&cmd.auction_id)
        .ok_or_else(|| BidError::NotFound(cmd.auction_id.clone()))?;

    if let Err(e) = validate_bid(&auction, cmd.amount, now) {
        warn!(
            "{:<12} --> 입찰 거절 id: {}, 코드: {}",
            "Command",
            cmd.auction_id,
            e.code()
        );
        return Err(e);
    }

    let bid = Bid {
        id: format!("b{}", Uuid::new_v4().simple()),
        auction_id: cmd.auction_id.clone(),
        bidder_id: viewer.id.clone(),
        bidder_name: viewer.name.clone(),
        amount: cmd.amount,
        timestamp: now,
    };

    let updated = store
        .append_bid(bid)
        .ok_or_else(|| BidError::NotFound(cmd.auction_id.clone()))?;

    info!(
        "{:<12} --> 입찰이 성공적으로 처리되었습니다. id: {}, 현재가: {}",
        "Command", updated.id, updated.current_bid
    );
    Ok(updated)
}

// endregion: --- Commands

// endregion: --- Tests
