//! Simulated live check-in feed
//!
//! A fixed list of fabricated check-ins revealed one at a time on a timer,
//! purely for visual effect.

use derive_more::Display;
use rand::Rng;
use std::time::Duration;

/// Delay between two revealed check-ins
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(800);

/// Check-in outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum CheckInStatus {
    Present,
    Late,
    Absent,
}

impl CheckInStatus {
    /// Gradient and left-border accent of the feed row
    pub fn row_class(&self) -> &'static str {
        match self {
            CheckInStatus::Present => "from-green-950/40 to-blue-950/40 border-l-2 border-l-blue-500",
            CheckInStatus::Late => "from-amber-950/40 to-blue-950/40 border-l-2 border-l-amber-500",
            CheckInStatus::Absent => "from-red-950/40 to-blue-950/40 border-l-2 border-l-red-500",
        }
    }

    /// Classes of the small round status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            CheckInStatus::Present => "bg-green-500/20 text-green-400",
            CheckInStatus::Late => "bg-amber-500/20 text-amber-400",
            CheckInStatus::Absent => "bg-red-500/20 text-red-400",
        }
    }
}

/// A fabricated employee check-in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckIn {
    pub id: u32,
    pub name: &'static str,
    pub status: CheckInStatus,
    pub time: &'static str,
    pub location: &'static str,
    pub avatar: &'static str,
    pub initials: &'static str,
}

pub const SEED_CHECK_INS: [CheckIn; 8] = [
    CheckIn {
        id: 1,
        name: "Kamal Hossain",
        status: CheckInStatus::Present,
        time: "08:45 AM",
        location: "Chittagong A",
        avatar: "https://picsum.photos/300?height=100&width=100",
        initials: "KH",
    },
    CheckIn {
        id: 2,
        name: "Chowdhury Sajidur Rahman",
        status: CheckInStatus::Late,
        time: "09:15 AM",
        location: "Home Office, Dhaka",
        avatar: "https://picsum.photos/270?height=100&width=100",
        initials: "CR",
    },
    CheckIn {
        id: 3,
        name: "Rahim Chowdhury",
        status: CheckInStatus::Present,
        time: "08:30 AM",
        location: "Sylhet B",
        avatar: "https://picsum.photos/290?height=100&width=100",
        initials: "RC",
    },
    CheckIn {
        id: 4,
        name: "Emily Davis",
        status: CheckInStatus::Absent,
        time: "—",
        location: "—",
        avatar: "https://picsum.photos/2100?height=100&width=100",
        initials: "ED",
    },
    CheckIn {
        id: 5,
        name: "Robert Taylor",
        status: CheckInStatus::Present,
        time: "08:52 AM",
        location: "Field Location",
        avatar: "https://picsum.photos/200?height=100&width=100",
        initials: "RT",
    },
    CheckIn {
        id: 6,
        name: "Omar Faruk",
        status: CheckInStatus::Present,
        time: "08:45 AM",
        location: "Chittagong A",
        avatar: "https://picsum.photos/2230?height=100&width=100",
        initials: "OF",
    },
    CheckIn {
        id: 7,
        name: "Ihsanul Haque",
        status: CheckInStatus::Late,
        time: "09:15 AM",
        location: "Home Office, Dhaka",
        avatar: "https://picsum.photos/2020?height=100&width=100",
        initials: "IH",
    },
    CheckIn {
        id: 8,
        name: "Fahim Chowdhury",
        status: CheckInStatus::Present,
        time: "08:30 AM",
        location: "Sylhet B",
        avatar: "https://picsum.photos/2200?height=100&width=100",
        initials: "FC",
    },
];

/// Incremental reveal over a static list
#[derive(Clone, Copy, Debug)]
pub struct RevealFeed<T: 'static> {
    items: &'static [T],
    revealed: usize,
}

impl<T> RevealFeed<T> {
    pub fn new(items: &'static [T]) -> Self {
        Self { items, revealed: 0 }
    }

    /// Reveal one more entry, returning it. `None` once everything is shown.
    pub fn reveal_next(&mut self) -> Option<&'static T> {
        let item = self.items.get(self.revealed)?;
        self.revealed += 1;
        Some(item)
    }

    /// Revealed entries, in list order
    pub fn visible(&self) -> &'static [T] {
        &self.items[..self.revealed]
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == self.items.len()
    }

    pub fn reset(&mut self) {
        self.revealed = 0;
    }
}

impl RevealFeed<CheckIn> {
    pub fn check_ins() -> Self {
        Self::new(&SEED_CHECK_INS)
    }
}

// Manual impls: derives would demand `T: PartialEq` even though only the
// slice identity and the counter matter.
impl<T> PartialEq for RevealFeed<T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.items, other.items) && self.revealed == other.revealed
    }
}

/// Fake employee label for the recent-activity rows
pub fn random_employee_tag<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("Employee #{}", rng.gen_range(0..1000))
}

/// `H:MM` clock label, hours unpadded
pub fn clock_label(hours: u32, minutes: u32) -> String {
    format!("{}:{:02}", hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_feed_starts_empty() {
        let feed = RevealFeed::check_ins();
        assert_eq!(feed.revealed(), 0);
        assert!(feed.visible().is_empty());
        assert!(!feed.is_complete());
    }

    #[test]
    fn test_full_reveal_matches_seed_length() {
        let mut feed = RevealFeed::check_ins();
        while feed.reveal_next().is_some() {}
        assert!(feed.is_complete());
        assert_eq!(feed.visible().len(), 8);
        assert_eq!(feed.visible().len(), SEED_CHECK_INS.len());
    }

    #[test]
    fn test_reveal_preserves_order() {
        let mut feed = RevealFeed::check_ins();
        let first = feed.reveal_next().unwrap();
        let second = feed.reveal_next().unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        let ids: Vec<u32> = feed.visible().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_reveal_past_end_is_noop() {
        let mut feed = RevealFeed::check_ins();
        for _ in 0..20 {
            feed.reveal_next();
        }
        assert_eq!(feed.revealed(), 8);
        assert!(feed.reveal_next().is_none());
    }

    #[test]
    fn test_reset() {
        let mut feed = RevealFeed::check_ins();
        feed.reveal_next();
        feed.reveal_next();
        feed.reset();
        assert_eq!(feed.revealed(), 0);
    }

    #[test]
    fn test_empty_list() {
        static NOTHING: [CheckIn; 0] = [];
        let mut feed = RevealFeed::new(&NOTHING);
        assert!(feed.is_complete());
        assert!(feed.reveal_next().is_none());
    }

    #[test]
    fn test_seed_ids_unique() {
        let mut ids: Vec<u32> = SEED_CHECK_INS.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SEED_CHECK_INS.len());
    }

    #[test]
    fn test_random_employee_tag_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let tag = random_employee_tag(&mut rng);
            let n: u32 = tag.trim_start_matches("Employee #").parse().unwrap();
            assert!(n < 1000);
        }
    }

    #[test]
    fn test_clock_label() {
        assert_eq!(clock_label(9, 5), "9:05");
        assert_eq!(clock_label(14, 30), "14:30");
    }
}
