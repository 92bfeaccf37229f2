use crate::auction::AuctionStatus;
use thiserror::Error;

/// 입찰 처리 오류
#[derive(Debug, Error, PartialEq)]
pub enum BidError {
    #[error("경매를 찾을 수 없습니다: {0}")]
    NotFound(String),

    #[error("경매가 아직 시작되지 않았습니다.")]
    NotStarted,

    #[error("경매가 이미 종료되었습니다.")]
    AlreadyEnded,

    #[error("잘못된 경매 상태입니다: {0}")]
    InvalidStatus(AuctionStatus),

    #[error("입찰 금액이 올바르지 않습니다: {0}")]
    InvalidAmount(i64),

    #[error("입찰 금액은 최소 {minimum} 이상이어야 합니다. (입찰 금액: {amount})")]
    LowBid { amount: i64, minimum: i64 },
}

impl BidError {
    /// 응답 본문에 실리는 오류 코드
    pub fn code(&self) -> &'static str {
        match self {
            BidError::NotFound(_) => "NOT_FOUND",
            BidError::NotStarted => "NOT_STARTED",
            BidError::AlreadyEnded => "ALREADY_ENDED",
            BidError::InvalidStatus(_) => "INVALID_STATUS",
            BidError::InvalidAmount(_) => "INVALID_AMOUNT",
            BidError::LowBid { .. } => "LOW_BID",
        }
    }
}

/// 키-값 저장소 오류
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("저장소 입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("저장소 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),

    #[error("저장소 잠금 오류")]
    Poisoned,
}
