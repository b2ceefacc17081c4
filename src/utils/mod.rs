//! Utility modules shared by the post pipeline.

pub mod date;
pub mod log;
pub mod slug;
