//! Video carousel state
//!
//! Tracks the active slide of the "See TekGeo in Action" carousel. The index
//! is always within `[0, len - 1]`; drag gestures, arrow buttons and dots all
//! go through the same bounded transitions. Autoplay advances on a timer and
//! wraps around, but only while nothing is playing and no drag is in flight.

use std::time::Duration;

/// Period between autoplay advances
pub const AUTO_DELAY: Duration = Duration::from_secs(180);

/// Horizontal drag distance (px) needed to switch slides
pub const DRAG_BUFFER: f64 = 50.0;

/// A video shown in the carousel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoEntry {
    pub id: &'static str,
    pub title: &'static str,
}

/// Carousel slides in display order
pub const CAROUSEL_VIDEOS: [VideoEntry; 5] = [
    VideoEntry {
        id: "KJz5f_9mV7E",
        title: "TekGeo Attendance System Overview",
    },
    VideoEntry {
        id: "iu8MoLlS_aI",
        title: "Remote Work Geolocation Tracking Demo",
    },
    VideoEntry {
        id: "fIA1wtEF8Yc",
        title: "How TekGeo Improves Workforce Management",
    },
    VideoEntry {
        id: "4CZ_1LHeBu8",
        title: "TekGeo Mobile App Features",
    },
    VideoEntry {
        id: "e56wGv6K8SI",
        title: "Customer Success Stories with TekGeo",
    },
];

/// Active slide and playback flag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    playing: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            playing: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    pub fn can_previous(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.index + 1 < self.len
    }

    /// Move one slide forward. Returns whether the index changed.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.set_index(self.index + 1);
        true
    }

    /// Move one slide back. Returns whether the index changed.
    pub fn previous(&mut self) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.set_index(self.index - 1);
        true
    }

    /// Jump to a slide, clamped to the last one
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.is_empty() {
            return false;
        }
        let target = index.min(self.len - 1);
        if target == self.index {
            return false;
        }
        self.set_index(target);
        true
    }

    /// Resolve a finished drag gesture.
    ///
    /// Dragging left past the buffer shows the next slide, dragging right
    /// past it shows the previous one.
    pub fn drag_end(&mut self, offset_px: f64) -> bool {
        if offset_px <= -DRAG_BUFFER {
            self.next()
        } else if offset_px >= DRAG_BUFFER {
            self.previous()
        } else {
            false
        }
    }

    /// Timer callback. Wraps from the last slide back to the first.
    pub fn autoplay_tick(&mut self, drag_offset_px: f64) -> bool {
        if self.playing || drag_offset_px != 0.0 || self.len < 2 {
            return false;
        }
        let next = if self.index + 1 >= self.len {
            0
        } else {
            self.index + 1
        };
        self.set_index(next);
        true
    }

    /// Mark the active slide as playing; suspends autoplay
    pub fn play(&mut self) {
        if !self.is_empty() {
            self.playing = true;
        }
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Track translation in percent of the viewport width
    pub fn track_offset_percent(&self) -> usize {
        self.index * 100
    }

    fn set_index(&mut self, index: usize) {
        self.index = index;
        // Leaving a slide stops whatever was playing on it
        self.playing = false;
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(CAROUSEL_VIDEOS.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_slide() {
        let carousel = Carousel::default();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.len(), 5);
        assert!(!carousel.can_previous());
        assert!(carousel.can_next());
        assert!(!carousel.is_playing());
    }

    #[test]
    fn test_previous_at_start_is_noop() {
        let mut carousel = Carousel::new(5);
        assert!(!carousel.previous());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_next_stops_at_last_slide() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.next());
        assert!(carousel.next());
        assert!(!carousel.next());
        assert_eq!(carousel.index(), 2);
        assert!(!carousel.can_next());
    }

    #[test]
    fn test_rapid_clicks_stay_in_bounds() {
        let mut carousel = Carousel::new(5);
        for _ in 0..50 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 4);
        for _ in 0..50 {
            carousel.previous();
        }
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_drag_threshold() {
        let mut carousel = Carousel::new(5);

        assert!(!carousel.drag_end(-49.9));
        assert_eq!(carousel.index(), 0);

        assert!(carousel.drag_end(-50.0));
        assert_eq!(carousel.index(), 1);

        assert!(carousel.drag_end(75.0));
        assert_eq!(carousel.index(), 0);

        assert!(!carousel.drag_end(30.0));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_huge_drags_never_escape_bounds() {
        let mut carousel = Carousel::new(5);
        for _ in 0..20 {
            carousel.drag_end(-10_000.0);
        }
        assert_eq!(carousel.index(), 4);
        for _ in 0..20 {
            carousel.drag_end(f64::MAX);
        }
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut carousel = Carousel::new(5);
        assert!(carousel.go_to(3));
        assert_eq!(carousel.index(), 3);
        assert!(carousel.go_to(99));
        assert_eq!(carousel.index(), 4);
        assert!(!carousel.go_to(4));
    }

    #[test]
    fn test_autoplay_wraps_around() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.autoplay_tick(0.0));
        assert!(carousel.autoplay_tick(0.0));
        assert_eq!(carousel.index(), 2);
        assert!(carousel.autoplay_tick(0.0));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_autoplay_suspended_while_playing() {
        let mut carousel = Carousel::new(5);
        carousel.play();
        assert!(carousel.is_playing());
        assert!(!carousel.autoplay_tick(0.0));
        assert_eq!(carousel.index(), 0);

        carousel.stop();
        assert!(carousel.autoplay_tick(0.0));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_autoplay_skipped_mid_drag() {
        let mut carousel = Carousel::new(5);
        assert!(!carousel.autoplay_tick(12.0));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_changing_slide_stops_playback() {
        let mut carousel = Carousel::new(5);
        carousel.play();
        carousel.next();
        assert!(!carousel.is_playing());

        carousel.play();
        carousel.go_to(0);
        assert!(!carousel.is_playing());
    }

    #[test]
    fn test_track_offset() {
        let mut carousel = Carousel::new(5);
        carousel.go_to(2);
        assert_eq!(carousel.track_offset_percent(), 200);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        assert!(carousel.is_empty());
        assert!(!carousel.next());
        assert!(!carousel.previous());
        assert!(!carousel.go_to(3));
        assert!(!carousel.drag_end(-100.0));
        assert!(!carousel.autoplay_tick(0.0));
        carousel.play();
        assert!(!carousel.is_playing());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_single_slide_autoplay_is_noop() {
        let mut carousel = Carousel::new(1);
        assert!(!carousel.autoplay_tick(0.0));
        assert_eq!(carousel.index(), 0);
    }
}
