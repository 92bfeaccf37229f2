pub mod auction;
pub mod bidding;
pub mod config;
pub mod countdown;
pub mod error;
pub mod handlers;
pub mod listing;
pub mod query;
pub mod scheduler;
pub mod store;
pub mod sync;
