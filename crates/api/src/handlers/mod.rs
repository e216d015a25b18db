//! Demo handlers showing each normalization hook.

pub mod notes;
pub mod profiles;
pub mod search;
pub mod users;
