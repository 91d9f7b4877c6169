//! System diagram layout
//!
//! Five attendance sources on the left feed the attendance system in the
//! centre, which reports to the management dashboard on the right. Node
//! positions are computed in a fixed viewBox so beams and nodes share one
//! coordinate system and need no DOM measurement.

use super::beam::{BeamGradient, BeamTiming, Point};

/// Diagram viewBox size
pub const VIEW_WIDTH: f64 = 1000.0;
pub const VIEW_HEIGHT: f64 = 500.0;

/// Neutral stroke under every animated gradient
pub const PATH_COLOR: &str = "#1e293b";
pub const PATH_OPACITY: f64 = 0.4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagramNode {
    RemoteOfficeA,
    RemoteOfficeB,
    HomeOffice,
    MobileApp,
    FieldLocation,
    AttendanceSystem,
    Dashboard,
}

/// Where a node's caption sits relative to its circle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelPosition {
    Left,
    Center,
    Right,
}

impl DiagramNode {
    /// Source column, top to bottom
    pub const SOURCES: [DiagramNode; 5] = [
        DiagramNode::RemoteOfficeA,
        DiagramNode::RemoteOfficeB,
        DiagramNode::HomeOffice,
        DiagramNode::MobileApp,
        DiagramNode::FieldLocation,
    ];

    pub const ALL: [DiagramNode; 7] = [
        DiagramNode::RemoteOfficeA,
        DiagramNode::RemoteOfficeB,
        DiagramNode::HomeOffice,
        DiagramNode::MobileApp,
        DiagramNode::FieldLocation,
        DiagramNode::AttendanceSystem,
        DiagramNode::Dashboard,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DiagramNode::RemoteOfficeA => "Remote Office A",
            DiagramNode::RemoteOfficeB => "Remote Office B",
            DiagramNode::HomeOffice => "Home Office",
            DiagramNode::MobileApp => "Mobile App",
            DiagramNode::FieldLocation => "Field Location",
            DiagramNode::AttendanceSystem => "TekGeo Attendance System",
            DiagramNode::Dashboard => "Management Dashboard",
        }
    }

    /// Icon name, see `ui::icon::icons`
    pub fn icon(&self) -> &'static str {
        match self {
            DiagramNode::RemoteOfficeA => "building",
            DiagramNode::RemoteOfficeB => "building-2",
            DiagramNode::HomeOffice => "home",
            DiagramNode::MobileApp => "smartphone",
            DiagramNode::FieldLocation => "map-pin",
            DiagramNode::AttendanceSystem => "server",
            DiagramNode::Dashboard => "pie-chart",
        }
    }

    pub fn gradient(&self) -> &'static str {
        match self {
            DiagramNode::RemoteOfficeA => "from-blue-500 to-cyan-500",
            DiagramNode::RemoteOfficeB => "from-indigo-500 to-blue-600",
            DiagramNode::HomeOffice => "from-violet-500 to-indigo-600",
            DiagramNode::MobileApp => "from-fuchsia-500 to-violet-600",
            DiagramNode::FieldLocation => "from-pink-500 to-fuchsia-600",
            DiagramNode::AttendanceSystem => "from-blue-600 to-indigo-600",
            DiagramNode::Dashboard => "from-amber-500 to-orange-600",
        }
    }

    /// Circle diameter in px
    pub fn size(&self) -> f64 {
        match self {
            DiagramNode::AttendanceSystem => 80.0,
            DiagramNode::Dashboard => 64.0,
            _ => 56.0,
        }
    }

    pub fn label_position(&self) -> LabelPosition {
        match self {
            DiagramNode::AttendanceSystem => LabelPosition::Center,
            DiagramNode::Dashboard => LabelPosition::Right,
            _ => LabelPosition::Left,
        }
    }
}

/// A beam between two diagram nodes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagramBeam {
    pub from: DiagramNode,
    pub to: DiagramNode,
    pub gradient: BeamGradient,
    pub timing: BeamTiming,
    pub width: f64,
}

impl DiagramBeam {
    const fn feed(from: DiagramNode, start: &'static str, stop: &'static str, delay_s: f64) -> Self {
        Self {
            from,
            to: DiagramNode::AttendanceSystem,
            gradient: BeamGradient::new(start, stop),
            timing: BeamTiming {
                delay_s,
                duration_s: 5.0,
            },
            width: 2.0,
        }
    }
}

pub const BEAMS: [DiagramBeam; 6] = [
    DiagramBeam::feed(DiagramNode::RemoteOfficeA, "#38bdf8", "#818cf8", 0.0),
    DiagramBeam::feed(DiagramNode::RemoteOfficeB, "#818cf8", "#8b5cf6", 0.5),
    DiagramBeam::feed(DiagramNode::HomeOffice, "#8b5cf6", "#a78bfa", 1.0),
    DiagramBeam::feed(DiagramNode::MobileApp, "#a78bfa", "#c084fc", 1.5),
    DiagramBeam::feed(DiagramNode::FieldLocation, "#c084fc", "#e879f9", 2.0),
    DiagramBeam {
        from: DiagramNode::AttendanceSystem,
        to: DiagramNode::Dashboard,
        gradient: BeamGradient::new("#8b5cf6", "#f59e0b").reversed(),
        timing: BeamTiming {
            delay_s: 2.5,
            duration_s: 5.0,
        },
        width: 3.0,
    },
];

/// Node placement inside a `width` x `height` box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagramLayout {
    /// Space kept clear on every side, in px
    pub padding: f64,
}

impl Default for DiagramLayout {
    fn default() -> Self {
        Self { padding: 64.0 }
    }
}

impl DiagramLayout {
    /// Centre of a node's circle
    pub fn anchor(&self, node: DiagramNode, width: f64, height: f64) -> Point {
        let radius = node.size() / 2.0;
        match node {
            DiagramNode::AttendanceSystem => Point::new(width / 2.0, height / 2.0),
            DiagramNode::Dashboard => Point::new(width - self.padding - radius, height / 2.0),
            source => {
                let index = DiagramNode::SOURCES
                    .iter()
                    .position(|n| *n == source)
                    .unwrap_or(0);
                let top = self.padding + radius;
                let bottom = (height - self.padding - radius).max(top);
                let step = (bottom - top) / (DiagramNode::SOURCES.len() - 1) as f64;
                Point::new(self.padding + radius, top + step * index as f64)
            }
        }
    }

    /// Anchor as percentages of the box, for absolutely positioned nodes
    pub fn anchor_percent(&self, node: DiagramNode, width: f64, height: f64) -> (f64, f64) {
        let p = self.anchor(node, width, height);
        (p.x / width * 100.0, p.y / height * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_is_centered() {
        let layout = DiagramLayout::default();
        let hub = layout.anchor(DiagramNode::AttendanceSystem, VIEW_WIDTH, VIEW_HEIGHT);
        assert_eq!(hub, Point::new(500.0, 250.0));
    }

    #[test]
    fn test_dashboard_right_of_hub() {
        let layout = DiagramLayout::default();
        let hub = layout.anchor(DiagramNode::AttendanceSystem, VIEW_WIDTH, VIEW_HEIGHT);
        let dash = layout.anchor(DiagramNode::Dashboard, VIEW_WIDTH, VIEW_HEIGHT);
        assert_eq!(dash, Point::new(904.0, 250.0));
        assert!(dash.x > hub.x);
        assert_eq!(dash.y, hub.y);
    }

    #[test]
    fn test_sources_spread_evenly() {
        let layout = DiagramLayout::default();
        let ys: Vec<f64> = DiagramNode::SOURCES
            .iter()
            .map(|n| layout.anchor(*n, VIEW_WIDTH, VIEW_HEIGHT).y)
            .collect();
        assert_eq!(ys.first().copied(), Some(92.0));
        assert_eq!(ys.last().copied(), Some(408.0));
        let gaps: Vec<f64> = ys.windows(2).map(|w| w[1] - w[0]).collect();
        assert!(gaps.iter().all(|g| (g - 79.0).abs() < 1e-9));
        for node in DiagramNode::SOURCES {
            assert_eq!(layout.anchor(node, VIEW_WIDTH, VIEW_HEIGHT).x, 92.0);
        }
    }

    #[test]
    fn test_cramped_box_collapses_column() {
        let layout = DiagramLayout::default();
        let first = layout.anchor(DiagramNode::RemoteOfficeA, 300.0, 50.0);
        let last = layout.anchor(DiagramNode::FieldLocation, 300.0, 50.0);
        assert_eq!(first.y, last.y);
    }

    #[test]
    fn test_beams_target_hub_with_staggered_delays() {
        let delays: Vec<f64> = BEAMS[..5].iter().map(|b| b.timing.delay_s).collect();
        assert_eq!(delays, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert!(BEAMS[..5]
            .iter()
            .all(|b| b.to == DiagramNode::AttendanceSystem && !b.gradient.reverse));
    }

    #[test]
    fn test_dashboard_beam_reversed_and_wide() {
        let beam = BEAMS[5];
        assert_eq!(beam.from, DiagramNode::AttendanceSystem);
        assert_eq!(beam.to, DiagramNode::Dashboard);
        assert!(beam.gradient.reverse);
        assert_eq!(beam.width, 3.0);
        assert_eq!(beam.timing.delay_s, 2.5);
    }

    #[test]
    fn test_anchor_percent() {
        let layout = DiagramLayout::default();
        let (x, y) = layout.anchor_percent(DiagramNode::AttendanceSystem, VIEW_WIDTH, VIEW_HEIGHT);
        assert_eq!((x, y), (50.0, 50.0));
    }
}
