/// 경매 목록 저장소 (메모리)
/// 목록 조회 쪽에는 특정 시점의 복사본만 넘기고, 입찰 반영은 쓰기 잠금 하나 안에서 끝낸다.
// region:    --- Imports
use crate::auction::events::AuctionEvent;
use crate::auction::{Auction, Bid};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::broadcast;
use tracing::debug;

pub mod seed;

// endregion: --- Imports

// region:    --- Auction Store

const EVENT_CHANNEL_CAPACITY: usize = 64;

pub struct AuctionStore {
    auctions: RwLock<Vec<Auction>>,
    events: broadcast::Sender<AuctionEvent>,
}

impl AuctionStore {
    /// 저장소 생성
    pub fn new(auctions: Vec<Auction>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            auctions: RwLock::new(auctions),
            events,
        }
    }

    /// 현재 시점의 목록 복사본
    pub fn snapshot(&self) -> Vec<Auction> {
        self.read().clone()
    }

    /// 경매 조회
    pub fn get(&self, auction_id: &str) -> Option<Auction> {
        self.read().iter().find(|a| a.id == auction_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// 입찰 추가 + 현재가 갱신
    /// 경매가 없으면 None
    pub fn append_bid(&self, bid: Bid) -> Option<Auction> {
        let updated = {
            let mut auctions = self.write();
            let auction = auctions.iter_mut().find(|a| a.id == bid.auction_id)?;
            auction.current_bid = bid.amount;
            auction.bids.push(bid.clone());
            auction.clone()
        };

        // 구독자가 없으면 전송 실패는 무시
        let _ = self.events.send(AuctionEvent::BidPlaced {
            auction_id: bid.auction_id,
            bidder_id: bid.bidder_id,
            amount: bid.amount,
            timestamp: bid.timestamp,
        });
        debug!(
            "{:<12} --> 입찰 반영 id: {}, 현재가: {}",
            "Store", updated.id, updated.current_bid
        );
        Some(updated)
    }

    /// 경매 이벤트 구독
    pub fn subscribe(&self) -> broadcast::Receiver<AuctionEvent> {
        self.events.subscribe()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Auction>> {
        self.auctions.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Auction>> {
        self.auctions.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for AuctionStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

// endregion: --- Auction Store

// endregion: --- Tests
