//! Command handlers

pub mod feed;
pub mod generate;
pub mod redeem;
pub mod rumor;
pub mod user;
