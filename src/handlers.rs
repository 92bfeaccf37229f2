// region:    --- Imports
use crate::auction::{Auction, UserRole, Viewer};
use crate::bidding::{
    bid_standing, bids_by, handle_place_bid, minimum_next_bid, toggle_watchlist, BidStanding,
    PlaceBidCommand,
};
use crate::countdown::{format_remaining, Clock};
use crate::error::BidError;
use crate::listing::{build_listing, ListingCard, ListingPage};
use crate::query::{available_categories, TypeFilter};
use crate::store::AuctionStore;
use crate::sync::{FilterSync, History, KeyValueStore, Location};
use axum::extract::{Path, Query, RawQuery, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

// endregion: --- Imports

// region:    --- App State

/// 핸들러 공유 상태
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<AuctionStore>,
    /// 필터 상태 저장소 (브라우저 로컬 저장소 역할)
    pub storage: Arc<dyn KeyValueStore>,
    pub clock: Arc<dyn Clock>,
    /// 입찰자 정보가 없는 요청에 쓰는 기본 사용자
    pub viewer: Viewer,
    /// 기본 사용자의 관심 경매 id 목록
    pub watchlist: Arc<Mutex<Vec<String>>>,
}

impl AppState {
    pub fn new(
        store: Arc<AuctionStore>,
        storage: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        viewer: Viewer,
    ) -> Self {
        Self {
            store,
            storage,
            clock,
            viewer,
            watchlist: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// 라우터 설정
pub fn router(state: AppState) -> Router {
    // 테스트 페이지를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/auctions", get(handle_get_auctions))
        .route("/auctions/:id", get(handle_get_auction))
        .route("/categories", get(handle_get_categories))
        .route("/bid", post(handle_bid))
        .route("/my-bids", get(handle_get_my_bids))
        .route("/watchlist", get(handle_get_watchlist))
        .route("/watchlist/:id", post(handle_toggle_watchlist))
        .layer(cors)
        .with_state(state)
}

// endregion: --- App State

// region:    --- Responses

#[derive(Debug, Serialize)]
pub struct ListingResponse {
    #[serde(flatten)]
    pub page: ListingPage,
    /// 교체된 URL 쿼리 문자열
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct AuctionDetailResponse {
    pub auction: Auction,
    pub time_left: String,
    pub minimum_bid: i64,
    pub bid_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct BidRequest {
    pub auction_id: String,
    pub amount: i64,
    pub bidder_id: Option<String>,
    pub bidder_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CategoriesQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WatchlistToggleResponse {
    pub auction_id: String,
    /// 토글 후 관심 목록에 들어 있으면 true
    pub watching: bool,
}

#[derive(Debug, Serialize)]
pub struct MyBidEntry {
    pub auction_id: String,
    pub auction_title: String,
    pub amount: i64,
    pub standing: BidStanding,
}

fn error_response(status: StatusCode, e: &BidError) -> axum::response::Response {
    (
        status,
        Json(serde_json::json!({
            "error": e.to_string(),
            "code": e.code()
        })),
    )
        .into_response()
}

// endregion: --- Responses

// region:    --- Query Handlers

/// 경매 목록 조회
/// 요청 URL 의 쿼리 -> 저장된 필터 -> 기본값 순으로 필터를 복원하고, 적용 후 다시 저장한다.
pub async fn handle_get_auctions(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    info!("{:<12} --> 경매 목록 조회: {:?}", "HandlerQuery", query);

    let location = History::new(query.unwrap_or_default());
    let mut sync = FilterSync::new(location, Arc::clone(&state.storage));
    let filters = sync.hydrate();
    let page = build_listing(&state.store.snapshot(), &filters, state.clock.now());
    sync.persist(&filters);

    Json(ListingResponse {
        page,
        query: sync.location().query(),
    })
}

/// 경매 상세 조회
pub async fn handle_get_auction(
    State(state): State<AppState>,
    Path(auction_id): Path<String>,
) -> impl IntoResponse {
    info!("{:<12} --> 경매 상세 조회 id: {}", "HandlerQuery", auction_id);
    match state.store.get(&auction_id) {
        Some(auction) => Json(AuctionDetailResponse {
            time_left: format_remaining(auction.ends_at, state.clock.now()),
            minimum_bid: minimum_next_bid(auction.current_bid),
            bid_count: auction.bids.len(),
            auction,
        })
        .into_response(),
        None => error_response(StatusCode::NOT_FOUND, &BidError::NotFound(auction_id)),
    }
}

/// 종류별 분류 목록
pub async fn handle_get_categories(Query(params): Query<CategoriesQuery>) -> impl IntoResponse {
    let kind = params
        .kind
        .as_deref()
        .and_then(TypeFilter::parse)
        .unwrap_or(TypeFilter::All);
    Json(available_categories(kind))
}

/// 기본 사용자의 입찰 내역
pub async fn handle_get_my_bids(State(state): State<AppState>) -> impl IntoResponse {
    info!("{:<12} --> 내 입찰 조회 id: {}", "HandlerQuery", state.viewer.id);
    let auctions = state.store.snapshot();
    let entries: Vec<MyBidEntry> = bids_by(&state.viewer.id, &auctions)
        .into_iter()
        .filter_map(|bid| {
            let auction = auctions.iter().find(|a| a.id == bid.auction_id)?;
            Some(MyBidEntry {
                auction_id: auction.id.clone(),
                auction_title: auction.title.clone(),
                amount: bid.amount,
                standing: bid_standing(bid, auction),
            })
        })
        .collect();
    Json(entries)
}

/// 관심 경매 목록 (카탈로그 순서)
pub async fn handle_get_watchlist(State(state): State<AppState>) -> impl IntoResponse {
    info!("{:<12} --> 관심 목록 조회 id: {}", "HandlerQuery", state.viewer.id);
    let watched = state
        .watchlist
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .clone();
    let now = state.clock.now();
    let cards: Vec<ListingCard> = state
        .store
        .snapshot()
        .iter()
        .filter(|auction| watched.contains(&auction.id))
        .map(|auction| ListingCard::new(auction, now))
        .collect();
    Json(cards)
}

// endregion: --- Query Handlers

// region:    --- Command Handlers

/// 입찰 요청 처리
pub async fn handle_bid(
    State(state): State<AppState>,
    Json(req): Json<BidRequest>,
) -> impl IntoResponse {
    info!("{:<12} --> 입찰 요청 처리 시작: {:?}", "Command", req);

    let viewer = match req.bidder_id {
        Some(id) => Viewer {
            name: req.bidder_name.unwrap_or_else(|| id.clone()),
            id,
            role: UserRole::User,
        },
        None => state.viewer.clone(),
    };
    let cmd = PlaceBidCommand {
        auction_id: req.auction_id,
        amount: req.amount,
    };

    match handle_place_bid(cmd, &viewer, &state.store, state.clock.now()) {
        Ok(updated) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "입찰이 성공적으로 처리되었습니다.",
                "current_price": updated.current_bid,
                "bid_amount": req.amount,
                "minimum_bid": minimum_next_bid(updated.current_bid)
            })),
        )
            .into_response(),
        Err(e @ BidError::NotFound(_)) => error_response(StatusCode::NOT_FOUND, &e),
        Err(e) => error_response(StatusCode::BAD_REQUEST, &e),
    }
}

/// 관심 목록 추가/제거
pub async fn handle_toggle_watchlist(
    State(state): State<AppState>,
    Path(auction_id): Path<String>,
) -> impl IntoResponse {
    if state.store.get(&auction_id).is_none() {
        return error_response(StatusCode::NOT_FOUND, &BidError::NotFound(auction_id));
    }

    let watching = {
        let mut watchlist = state.watchlist.lock().unwrap_or_else(|e| e.into_inner());
        toggle_watchlist(&mut watchlist, &auction_id)
    };
    info!(
        "{:<12} --> 관심 목록 변경 id: {}, 관심: {}",
        "Command", auction_id, watching
    );
    Json(WatchlistToggleResponse {
        auction_id,
        watching,
    })
    .into_response()
}

// endregion: --- Command Handlers
