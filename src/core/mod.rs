//! Page data and widget state, independent of the UI framework

pub mod attendance;
pub mod beam;
pub mod carousel;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod diagram;
#[cfg(feature = "ssr")]
pub mod error;
pub mod feed;
pub mod map;
pub mod motion;
pub mod nav;
pub mod newsletter;
pub mod video;
#[cfg(test)]
mod tests;

pub use attendance::{Bucket, District, DistrictRecord, DistrictStat, ViewMode};
pub use beam::{BeamGradient, BeamTiming, Point};
pub use carousel::{CAROUSEL_VIDEOS, Carousel, VideoEntry};
pub use feed::{CheckIn, CheckInStatus, RevealFeed};
pub use map::MapOverlay;
pub use nav::{NAV_ITEMS, NavState};
pub use newsletter::{EmailAddress, SubscribeError};
pub use video::{EmbedMode, VideoError};
