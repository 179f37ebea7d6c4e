//! Games owned in common by a set of Steam friends.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod normalize;
pub mod resolve;
pub mod sets;
pub mod steam;
