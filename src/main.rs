// region:    --- Imports
use auction_listing::config::Config;
use auction_listing::countdown::{Clock, SystemClock};
use auction_listing::handlers::{self, AppState};
use auction_listing::store::{seed, AuctionStore};
use auction_listing::sync::{FileStore, KeyValueStore, MemoryStore};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    let config = Config::parse();

    // 필터 상태 저장소
    let storage: Arc<dyn KeyValueStore> = match &config.state_file {
        Some(path) => {
            info!("{:<12} --> 필터 저장 파일: {}", "Main", path.display());
            Arc::new(FileStore::new(path))
        }
        None => {
            info!("{:<12} --> 필터 상태는 메모리에만 저장됩니다", "Main");
            Arc::new(MemoryStore::new())
        }
    };

    // 데모 경매 데이터
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store = Arc::new(AuctionStore::new(seed::mock_auctions(clock.now())));
    info!("{:<12} --> 경매 {}건 로드", "Main", store.len());

    // 입찰 이벤트 로그
    let mut events = store.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            info!("{:<12} --> 이벤트 수신: {:?}", "Event", event);
        }
    });

    let state = AppState::new(store, storage, clock, seed::demo_viewer());

    // 리스너 생성
    let listener = TcpListener::bind(config.bind).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, handlers::router(state).into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
