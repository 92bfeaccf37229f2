use crate::auction::{Auction, AuctionStatus, Bid};
use serde::{Deserialize, Serialize};

// 내 입찰 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BidStanding {
    Winning,
    Outbid,
    Won,
    Lost,
}

/// 입찰 상태 판정
/// 진행 중이면 현재가와 비교, 종료 후에는 마지막 입찰자가 낙찰자
pub fn bid_standing(bid: &Bid, auction: &Auction) -> BidStanding {
    if auction.status == AuctionStatus::Active {
        return if auction.current_bid == bid.amount {
            BidStanding::Winning
        } else {
            BidStanding::Outbid
        };
    }
    match auction.last_bid() {
        Some(last) if last.bidder_id == bid.bidder_id => BidStanding::Won,
        _ => BidStanding::Lost,
    }
}

/// 사용자의 전체 입찰 내역
pub fn bids_by<'a>(bidder_id: &str, auctions: &'a [Auction]) -> Vec<&'a Bid> {
    auctions
        .iter()
        .flat_map(|a| a.bids.iter())
        .filter(|b| b.bidder_id == bidder_id)
        .collect()
}

/// 관심 목록 추가/제거
/// 추가되면 true
pub fn toggle_watchlist(watchlist: &mut Vec<String>, auction_id: &str) -> bool {
    if let Some(pos) = watchlist.iter().position(|id| id == auction_id) {
        watchlist.remove(pos);
        false
    } else {
        watchlist.push(auction_id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::mock_auctions;
    use chrono::{TimeZone, Utc};

    fn auctions() -> Vec<Auction> {
        mock_auctions(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn active_auction_standing_follows_current_price() {
        let auctions = auctions();
        let tesla = auctions.iter().find(|a| a.id == "a1").unwrap();
        assert_eq!(bid_standing(&tesla.bids[1], tesla), BidStanding::Winning);
        assert_eq!(bid_standing(&tesla.bids[0], tesla), BidStanding::Outbid);
    }

    #[test]
    fn ended_auction_standing_follows_last_bidder() {
        let mut auctions = auctions();
        let tesla = auctions.iter_mut().find(|a| a.id == "a1").unwrap();
        tesla.status = AuctionStatus::Ended;
        assert_eq!(bid_standing(&tesla.bids[1], tesla), BidStanding::Won);
        assert_eq!(bid_standing(&tesla.bids[0], tesla), BidStanding::Lost);
    }

    #[test]
    fn bids_by_collects_across_auctions() {
        let auctions = auctions();
        let mine = bids_by("u4", &auctions);
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].auction_id, "a3");
        assert!(bids_by("nobody", &auctions).is_empty());
    }

    #[test]
    fn toggle_watchlist_adds_then_removes() {
        let mut watchlist = vec!["a2".to_string()];
        assert!(toggle_watchlist(&mut watchlist, "a5"));
        assert_eq!(watchlist, vec!["a2", "a5"]);
        assert!(!toggle_watchlist(&mut watchlist, "a2"));
        assert_eq!(watchlist, vec!["a5"]);
    }
}
