// Fri Oct 16 2026 - Alex

pub mod follower;
pub mod handle;

pub use follower::{FollowerEntry, FollowerSet};
pub use handle::{
    extract_handle_from_url, followers_url, is_valid_handle, looks_like_url, normalize_handle, profile_url,
};
