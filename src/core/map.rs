//! Attendance map overlay
//!
//! District nodes sit on fixed pixel boxes over the dotted map image. Dhaka
//! is the hub; every other district is linked to it by a beam.

use super::attendance::{Bucket, District, ViewMode};
use super::beam::{BeamGradient, Point};

/// Map canvas size the boxes are expressed in
pub const MAP_WIDTH: f64 = 800.0;
pub const MAP_HEIGHT: f64 = 400.0;

/// Fixed end colour of every map beam
pub const BEAM_STOP_COLOR: &str = "#3b82f6";

pub const HUB: District = District::Dhaka;

/// Pixel box of a district node
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl NodeBox {
    const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Inline `style` placing the box in the overlay, as percentages of
    /// the canvas so the overlay scales with the map image
    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; width: {}%; height: {}%;",
            self.x * 100.0 / MAP_WIDTH,
            self.y * 100.0 / MAP_HEIGHT,
            self.width * 100.0 / MAP_WIDTH,
            self.height * 100.0 / MAP_HEIGHT
        )
    }
}

pub fn node_box(district: District) -> NodeBox {
    match district {
        District::Rangpur => NodeBox::new(275.0, 40.0, 70.0, 60.0),
        District::Sylhet => NodeBox::new(450.0, 90.0, 70.0, 60.0),
        District::Mymensingh => NodeBox::new(360.0, 110.0, 60.0, 50.0),
        District::Rajshahi => NodeBox::new(230.0, 130.0, 80.0, 60.0),
        District::Dhaka => NodeBox::new(340.0, 180.0, 70.0, 60.0),
        District::Khulna => NodeBox::new(279.0, 260.0, 70.0, 70.0),
        District::Barisal => NodeBox::new(360.0, 250.0, 60.0, 60.0),
        District::Chittagong => NodeBox::new(450.0, 250.0, 70.0, 100.0),
    }
}

pub fn anchor(district: District) -> Point {
    node_box(district).center()
}

/// Every district except the hub, in table order
pub fn spokes() -> impl Iterator<Item = District> {
    District::ALL.into_iter().filter(|d| *d != HUB)
}

/// Gradient of the beam from a spoke to the hub under a view mode
pub fn beam_gradient(district: District, mode: ViewMode) -> BeamGradient {
    let value = mode.value_for(&district.record());
    BeamGradient::new(Bucket::classify(mode, value).beam_color(), BEAM_STOP_COLOR)
}

/// Hover and selection state of the overlay
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapOverlay {
    hovered: Option<District>,
    selected: Option<District>,
}

impl MapOverlay {
    pub fn hovered(&self) -> Option<District> {
        self.hovered
    }

    pub fn selected(&self) -> Option<District> {
        self.selected
    }

    pub fn hover(&mut self, district: District) {
        self.hovered = Some(district);
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn select(&mut self, district: District) {
        self.selected = Some(district);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn is_highlighted(&self, district: District) -> bool {
        self.hovered == Some(district) || self.selected == Some(district)
    }

    /// With a selection only the selected district's beam stays drawn
    pub fn beam_visible(&self, district: District) -> bool {
        match self.selected {
            None => true,
            Some(selected) => selected == district,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_style_is_relative_to_canvas() {
        assert_eq!(
            node_box(District::Dhaka).style(),
            "left: 42.5%; top: 45%; width: 8.75%; height: 15%;"
        );
    }

    #[test]
    fn test_node_center() {
        assert_eq!(anchor(District::Dhaka), Point::new(375.0, 210.0));
        assert_eq!(anchor(District::Chittagong), Point::new(485.0, 300.0));
    }

    #[test]
    fn test_boxes_inside_canvas() {
        for district in District::ALL {
            let b = node_box(district);
            assert!(b.x >= 0.0 && b.x + b.width <= MAP_WIDTH);
            assert!(b.y >= 0.0 && b.y + b.height <= MAP_HEIGHT);
        }
    }

    #[test]
    fn test_spokes_exclude_hub() {
        let spokes: Vec<District> = spokes().collect();
        assert_eq!(spokes.len(), 7);
        assert!(!spokes.contains(&HUB));
    }

    #[test]
    fn test_beam_gradient_follows_bucket() {
        let gradient = beam_gradient(District::Sylhet, ViewMode::Attendance);
        assert_eq!(gradient.start, Bucket::Green.beam_color());
        assert_eq!(gradient.stop, BEAM_STOP_COLOR);

        let gradient = beam_gradient(District::Chittagong, ViewMode::Offices);
        // 320 employees, 7 offices
        assert_eq!(gradient.start, Bucket::Orange.beam_color());
    }

    #[test]
    fn test_hover_and_select_highlight() {
        let mut overlay = MapOverlay::default();
        assert!(!overlay.is_highlighted(District::Khulna));

        overlay.hover(District::Khulna);
        assert!(overlay.is_highlighted(District::Khulna));
        overlay.leave();
        assert!(!overlay.is_highlighted(District::Khulna));

        overlay.select(District::Barisal);
        assert!(overlay.is_highlighted(District::Barisal));
        assert_eq!(overlay.selected(), Some(District::Barisal));
    }

    #[test]
    fn test_beam_visibility_with_selection() {
        let mut overlay = MapOverlay::default();
        assert!(spokes().all(|d| overlay.beam_visible(d)));

        overlay.select(District::Rangpur);
        assert!(overlay.beam_visible(District::Rangpur));
        assert!(!overlay.beam_visible(District::Sylhet));

        overlay.clear_selection();
        assert!(overlay.beam_visible(District::Sylhet));
    }
}
