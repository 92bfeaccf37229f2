use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// 서버 설정
#[derive(Parser, Debug, Clone)]
#[command(name = "auction-listing", about = "경매 목록 데모 서버")]
pub struct Config {
    /// 바인딩 주소
    #[arg(long, env = "AUCTION_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// 필터 상태 저장 파일. 없으면 메모리에만 저장
    #[arg(long, env = "AUCTION_STATE_FILE")]
    pub state_file: Option<PathBuf>,
}
