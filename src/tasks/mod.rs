//! Background Tasks Module
//!
//! Contains background tasks that run independently of callers.
//!
//! # Tasks
//! - Reaper: removes stale cache entries once per cache interval

mod reaper;

pub use reaper::{spawn_reaper_task, ReaperHandle};
