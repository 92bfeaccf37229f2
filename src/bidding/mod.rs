pub mod commands;
pub mod model;

pub use commands::{handle_place_bid, minimum_next_bid, validate_bid, PlaceBidCommand};
pub use model::{bid_standing, bids_by, toggle_watchlist, BidStanding};
