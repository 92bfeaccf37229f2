/// 화면 갱신 스케줄러
/// 상세 화면의 남은 시간은 1초마다, 목록 화면(카드 남은 시간, 마감 임박 필터)은 1분마다 다시 계산한다.
/// 각 작업은 화면이 소유하는 TickHandle 로 돌려주며, 핸들이 버려지면 작업도 중단된다.
// region:    --- Imports
use crate::countdown::{format_remaining, Clock};
use crate::listing::{build_listing, ListingPage};
use crate::query::FilterState;
use crate::store::AuctionStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};
use tracing::debug;

// endregion: --- Imports

// region:    --- Tick Handle

/// 상세 화면 갱신 주기
pub const DETAIL_TICK: Duration = Duration::from_secs(1);

/// 목록 화면 갱신 주기
pub const LISTING_TICK: Duration = Duration::from_secs(60);

/// 주기 작업 핸들
/// drop 되면 작업을 중단한다.
#[derive(Debug)]
pub struct TickHandle {
    name: &'static str,
    task: JoinHandle<()>,
}

impl TickHandle {
    fn new(name: &'static str, task: JoinHandle<()>) -> Self {
        debug!("{:<12} --> 주기 작업 시작: {}", "Scheduler", name);
        Self { name, task }
    }

    /// 명시적 중단
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.task.abort();
        debug!("{:<12} --> 주기 작업 중단: {}", "Scheduler", self.name);
    }
}

/// 주기 작업 생성
/// 첫 tick 은 즉시 발생하므로 건너뛰고, 이후 period 마다 on_tick 을 호출한다.
pub fn spawn_periodic<F>(name: &'static str, period: Duration, mut on_tick: F) -> TickHandle
where
    F: FnMut() + Send + 'static,
{
    let task = tokio::spawn(async move {
        let mut interval = interval(period);
        interval.tick().await;
        loop {
            interval.tick().await;
            on_tick();
        }
    });
    TickHandle::new(name, task)
}

// endregion: --- Tick Handle

// region:    --- Countdown Timer

/// 상세 화면 남은 시간 타이머
pub struct CountdownTimer {
    handle: TickHandle,
    time_left: watch::Receiver<String>,
}

impl CountdownTimer {
    /// 타이머 시작 (1초 주기)
    pub fn start(ends_at: DateTime<Utc>, clock: Arc<dyn Clock>) -> Self {
        let (tx, rx) = watch::channel(format_remaining(ends_at, clock.now()));
        let handle = spawn_periodic("countdown", DETAIL_TICK, move || {
            tx.send_replace(format_remaining(ends_at, clock.now()));
        });
        Self {
            handle,
            time_left: rx,
        }
    }

    /// 현재 표시 문자열
    pub fn current(&self) -> String {
        self.time_left.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.time_left.clone()
    }

    /// 화면 종료 시 호출
    pub fn cancel(self) {
        self.handle.cancel();
    }
}

// endregion: --- Countdown Timer

// region:    --- Listing Feed

/// 목록 화면 갱신 피드
/// 1분마다, 또는 필터가 바뀔 때마다 목록을 다시 계산한다.
pub struct ListingFeed {
    _handle: TickHandle,
    filters: watch::Sender<FilterState>,
    page: watch::Receiver<ListingPage>,
}

impl ListingFeed {
    pub fn start(store: Arc<AuctionStore>, filters: FilterState, clock: Arc<dyn Clock>) -> Self {
        let initial = build_listing(&store.snapshot(), &filters, clock.now());
        let (page_tx, page_rx) = watch::channel(initial);
        let (filters_tx, mut filters_rx) = watch::channel(filters);

        let task = tokio::spawn(async move {
            let mut ticker = interval(LISTING_TICK);
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        debug!("{:<12} --> 목록 갱신 (주기)", "Scheduler");
                    }
                    changed = filters_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        debug!("{:<12} --> 목록 갱신 (필터 변경)", "Scheduler");
                    }
                }
                let filters = filters_rx.borrow_and_update().clone();
                page_tx.send_replace(build_listing(&store.snapshot(), &filters, clock.now()));
            }
        });

        Self {
            _handle: TickHandle::new("listing", task),
            filters: filters_tx,
            page: page_rx,
        }
    }

    /// 필터 변경
    pub fn update_filters(&self, filters: FilterState) {
        self.filters.send_replace(filters);
    }

    pub fn current(&self) -> ListingPage {
        self.page.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListingPage> {
        self.page.clone()
    }
}

// endregion: --- Listing Feed

// endregion: --- Tests
