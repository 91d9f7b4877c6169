//! Navigation bar menu and state

/// Scroll depth (px) after which the bar gets its solid backdrop
pub const SCROLL_THRESHOLD: f64 = 10.0;

/// Nub offset used before the trigger has been measured
pub const DEFAULT_NUB_LEFT: f64 = 25.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropdownLink {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub dropdown: &'static [DropdownLink],
}

impl NavItem {
    pub fn has_dropdown(&self) -> bool {
        !self.dropdown.is_empty()
    }
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Features",
        href: "#features",
        dropdown: &[
            DropdownLink {
                title: "Geo Tracking",
                description: "Real-time location tracking with advanced analytics",
                href: "#maps-integration",
            },
            DropdownLink {
                title: "Maps Integration",
                description: "Seamless integration with multiple map providers",
                href: "#maps-integration",
            },
            DropdownLink {
                title: "Custom Markers",
                description: "Create and customize location markers",
                href: "#maps-integration",
            },
        ],
    },
    NavItem {
        label: "Solutions",
        href: "#solutions",
        dropdown: &[
            DropdownLink {
                title: "For Businesses",
                description: "Enterprise-grade location services",
                href: "#business-solutions",
            },
            DropdownLink {
                title: "For Developers",
                description: "APIs and SDKs for custom implementations",
                href: "#business-solutions",
            },
            DropdownLink {
                title: "For Industries",
                description: "Specialized solutions for different sectors",
                href: "#business-solutions",
            },
        ],
    },
    NavItem {
        label: "Resources",
        href: "#resources",
        dropdown: &[
            DropdownLink {
                title: "Documentation",
                description: "Comprehensive guides and API references",
                href: "#documentation",
            },
            DropdownLink {
                title: "Blog",
                description: "Latest updates and tech insights",
                href: "#blog",
            },
            DropdownLink {
                title: "Case Studies",
                description: "Success stories from our customers",
                href: "#case-studies",
            },
        ],
    },
    NavItem {
        label: "Pricing",
        href: "#pricing",
        dropdown: &[],
    },
    NavItem {
        label: "Contact",
        href: "#contact",
        dropdown: &[],
    },
];

/// Edge a dropdown panel slides in from when switching between triggers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    FromLeft,
    FromRight,
}

impl SlideDirection {
    /// Initial horizontal offset of the entering panel, in px
    pub fn enter_offset(&self) -> i32 {
        match self {
            SlideDirection::FromLeft => -100,
            SlideDirection::FromRight => 100,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    active_dropdown: Option<usize>,
    direction: Option<SlideDirection>,
    menu_open: bool,
    scrolled: bool,
}

impl NavState {
    pub fn active_dropdown(&self) -> Option<usize> {
        self.active_dropdown
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.active_dropdown == Some(index)
    }

    pub fn direction(&self) -> Option<SlideDirection> {
        self.direction
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Desktop trigger click. At most one dropdown is open at a time.
    pub fn toggle_dropdown(&mut self, index: usize) {
        match self.active_dropdown {
            Some(open) if open == index => self.close_dropdown(),
            Some(open) => {
                self.direction = Some(if open > index {
                    SlideDirection::FromLeft
                } else {
                    SlideDirection::FromRight
                });
                self.active_dropdown = Some(index);
            }
            None => self.active_dropdown = Some(index),
        }
    }

    /// Mobile accordion section toggle
    pub fn toggle_section(&mut self, index: usize) {
        self.active_dropdown = if self.is_open(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn close_dropdown(&mut self) {
        self.active_dropdown = None;
        self.direction = None;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// A menu link was followed: everything closes
    pub fn follow_link(&mut self) {
        self.close_dropdown();
        self.close_menu();
    }

    /// Update the scrolled flag. Returns whether it flipped.
    pub fn set_scroll(&mut self, y: f64) -> bool {
        let scrolled = y > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

/// Left offset of the dropdown nub so it points at the trigger's centre
pub fn nub_left(trigger_left: f64, trigger_width: f64, dropdown_left: f64) -> f64 {
    let left = trigger_left + trigger_width / 2.0 - dropdown_left;
    if left.is_finite() { left } else { DEFAULT_NUB_LEFT }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_one_dropdown_closes_other() {
        let mut nav = NavState::default();
        nav.toggle_dropdown(0);
        assert!(nav.is_open(0));

        nav.toggle_dropdown(2);
        assert!(nav.is_open(2));
        assert!(!nav.is_open(0));
        assert_eq!(nav.active_dropdown(), Some(2));
    }

    #[test]
    fn test_reclick_closes() {
        let mut nav = NavState::default();
        nav.toggle_dropdown(1);
        nav.toggle_dropdown(1);
        assert_eq!(nav.active_dropdown(), None);
        assert_eq!(nav.direction(), None);
    }

    #[test]
    fn test_slide_direction() {
        let mut nav = NavState::default();
        nav.toggle_dropdown(0);
        assert_eq!(nav.direction(), None);

        nav.toggle_dropdown(2);
        assert_eq!(nav.direction(), Some(SlideDirection::FromRight));

        nav.toggle_dropdown(1);
        assert_eq!(nav.direction(), Some(SlideDirection::FromLeft));
    }

    #[test]
    fn test_mobile_sections_exclusive() {
        let mut nav = NavState::default();
        nav.toggle_section(0);
        nav.toggle_section(1);
        assert_eq!(nav.active_dropdown(), Some(1));
        assert_eq!(nav.direction(), None);
        nav.toggle_section(1);
        assert_eq!(nav.active_dropdown(), None);
    }

    #[test]
    fn test_follow_link_closes_everything() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        nav.toggle_section(2);
        nav.follow_link();
        assert!(!nav.menu_open());
        assert_eq!(nav.active_dropdown(), None);
    }

    #[test]
    fn test_toggle_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.toggle_menu();
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_scroll_threshold() {
        let mut nav = NavState::default();
        assert!(!nav.set_scroll(10.0));
        assert!(!nav.scrolled());
        assert!(nav.set_scroll(10.5));
        assert!(nav.scrolled());
        assert!(!nav.set_scroll(400.0));
        assert!(nav.set_scroll(0.0));
        assert!(!nav.scrolled());
    }

    #[test]
    fn test_nub_left() {
        assert_eq!(nub_left(120.0, 80.0, 100.0), 60.0);
        assert_eq!(nub_left(f64::NAN, 80.0, 100.0), DEFAULT_NUB_LEFT);
    }

    #[test]
    fn test_nav_items() {
        assert_eq!(NAV_ITEMS.len(), 5);
        assert_eq!(NAV_ITEMS.iter().filter(|i| i.has_dropdown()).count(), 3);
        assert!(NAV_ITEMS.iter().all(|i| i.dropdown.len() == 0 || i.dropdown.len() == 3));
    }
}
