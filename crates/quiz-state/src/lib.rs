//! # Quiz State
//!
//! 編輯狀態追蹤：結構相等比較與髒標記

pub mod dirty_tracking;
pub mod structural;

// Re-export 主要類型
pub use dirty_tracking::DirtyTracker;
pub use structural::{structurally_equal, structurally_equal_with, values_equal};
