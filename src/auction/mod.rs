pub mod events;
pub mod model;

pub use model::{Auction, AuctionStatus, AuctionType, Bid, UserRole, Viewer};
