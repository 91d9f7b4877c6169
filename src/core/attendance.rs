//! Regional attendance statistics
//!
//! A fixed table of districts with made-up attendance figures, the view
//! modes the map can show, and the colour buckets used to tint map nodes,
//! beams and labels.

use derive_more::Display;

/// Headcount covered by a single office in the offices view
const EMPLOYEES_PER_OFFICE: u32 = 50;

/// A named region on the attendance map
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum District {
    #[display("Dhaka")]
    Dhaka,
    #[display("Chittagong")]
    Chittagong,
    #[display("Sylhet")]
    Sylhet,
    #[display("Rajshahi")]
    Rajshahi,
    #[display("Khulna")]
    Khulna,
    #[display("Barisal")]
    Barisal,
    #[display("Rangpur")]
    Rangpur,
    #[display("Mymensingh")]
    Mymensingh,
}

impl District {
    /// All districts in table order
    pub const ALL: [District; 8] = [
        District::Dhaka,
        District::Chittagong,
        District::Sylhet,
        District::Rajshahi,
        District::Khulna,
        District::Barisal,
        District::Rangpur,
        District::Mymensingh,
    ];

    /// Lowercase identifier, used for element ids and lookups
    pub fn key(&self) -> &'static str {
        match self {
            District::Dhaka => "dhaka",
            District::Chittagong => "chittagong",
            District::Sylhet => "sylhet",
            District::Rajshahi => "rajshahi",
            District::Khulna => "khulna",
            District::Barisal => "barisal",
            District::Rangpur => "rangpur",
            District::Mymensingh => "mymensingh",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }

    /// Attendance figures for this district
    pub fn record(&self) -> DistrictRecord {
        let (present, absent, late, total) = match self {
            District::Dhaka => (87, 5, 8, 450),
            District::Chittagong => (82, 8, 10, 320),
            District::Sylhet => (91, 3, 6, 180),
            District::Rajshahi => (85, 7, 8, 210),
            District::Khulna => (79, 12, 9, 190),
            District::Barisal => (83, 9, 8, 150),
            District::Rangpur => (88, 6, 6, 170),
            District::Mymensingh => (81, 10, 9, 140),
        };
        DistrictRecord {
            present,
            absent,
            late,
            total,
        }
    }
}

/// Present/absent/late percentages and total headcount of a district
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistrictRecord {
    pub present: u32,
    pub absent: u32,
    pub late: u32,
    pub total: u32,
}

/// Which figure the map displays per district
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display)]
pub enum ViewMode {
    #[default]
    #[display("employees")]
    Employees,
    #[display("attendance")]
    Attendance,
    #[display("offices")]
    Offices,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Employees, ViewMode::Attendance, ViewMode::Offices];

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Employees => "Employee Count",
            ViewMode::Attendance => "Attendance Rate",
            ViewMode::Offices => "Office Locations",
        }
    }

    /// The figure this mode shows for a record
    pub fn value_for(&self, record: &DistrictRecord) -> u32 {
        match self {
            ViewMode::Employees => record.total,
            ViewMode::Attendance => record.present,
            ViewMode::Offices => office_count(record.total),
        }
    }
}

/// Number of offices implied by a headcount (one per 50 employees, rounded up)
pub fn office_count(total: u32) -> u32 {
    total.div_ceil(EMPLOYEES_PER_OFFICE)
}

/// Colour bucket of a displayed value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bucket {
    Green,
    Emerald,
    Yellow,
    Red,
    Purple,
    Indigo,
    Blue,
    Cyan,
    Teal,
    Amber,
    Orange,
    Rose,
    Pink,
}

impl Bucket {
    /// Bucket a value according to the thresholds of its view mode
    pub fn classify(mode: ViewMode, value: u32) -> Self {
        match mode {
            ViewMode::Attendance => match value {
                90.. => Bucket::Green,
                80.. => Bucket::Emerald,
                70.. => Bucket::Yellow,
                _ => Bucket::Red,
            },
            ViewMode::Employees => match value {
                400.. => Bucket::Purple,
                300.. => Bucket::Indigo,
                200.. => Bucket::Blue,
                100.. => Bucket::Cyan,
                _ => Bucket::Teal,
            },
            ViewMode::Offices => match value {
                8.. => Bucket::Amber,
                6.. => Bucket::Orange,
                4.. => Bucket::Rose,
                _ => Bucket::Pink,
            },
        }
    }

    /// Tailwind text colour for node labels
    pub fn text_class(&self) -> &'static str {
        match self {
            Bucket::Green => "text-green-400",
            Bucket::Emerald => "text-emerald-400",
            Bucket::Yellow => "text-yellow-400",
            Bucket::Red => "text-red-400",
            Bucket::Purple => "text-purple-400",
            Bucket::Indigo => "text-indigo-400",
            Bucket::Blue => "text-blue-400",
            Bucket::Cyan => "text-cyan-400",
            Bucket::Teal => "text-teal-400",
            Bucket::Amber => "text-amber-400",
            Bucket::Orange => "text-orange-400",
            Bucket::Rose => "text-rose-400",
            Bucket::Pink => "text-pink-400",
        }
    }

    /// Tailwind gradient stops for filled badges
    pub fn gradient_class(&self) -> &'static str {
        match self {
            Bucket::Green => "from-green-500 to-green-600",
            Bucket::Emerald => "from-emerald-500 to-teal-600",
            Bucket::Yellow => "from-yellow-500 to-amber-600",
            Bucket::Red => "from-red-500 to-red-600",
            Bucket::Purple => "from-purple-500 to-indigo-600",
            Bucket::Indigo => "from-indigo-500 to-blue-600",
            Bucket::Blue => "from-blue-500 to-cyan-600",
            Bucket::Cyan => "from-cyan-500 to-teal-600",
            Bucket::Teal => "from-teal-500 to-green-600",
            Bucket::Amber => "from-amber-500 to-orange-600",
            Bucket::Orange => "from-orange-500 to-red-600",
            Bucket::Rose => "from-red-500 to-pink-600",
            Bucket::Pink => "from-pink-500 to-rose-600",
        }
    }

    /// Hex colour for the start of a beam gradient
    pub fn beam_color(&self) -> &'static str {
        match self {
            Bucket::Green => "#22c55e",
            Bucket::Emerald => "#10b981",
            Bucket::Yellow => "#eab308",
            Bucket::Red => "#ef4444",
            Bucket::Purple => "#a855f7",
            Bucket::Indigo => "#6366f1",
            Bucket::Blue => "#3b82f6",
            Bucket::Cyan => "#06b6d4",
            Bucket::Teal => "#14b8a6",
            Bucket::Amber => "#f59e0b",
            Bucket::Orange => "#f97316",
            Bucket::Rose => "#f43f5e",
            Bucket::Pink => "#ec4899",
        }
    }
}

/// The value and bucket a district shows under a view mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistrictStat {
    pub district: District,
    pub value: u32,
    pub bucket: Bucket,
}

impl DistrictStat {
    pub fn new(district: District, mode: ViewMode) -> Self {
        let value = mode.value_for(&district.record());
        Self {
            district,
            value,
            bucket: Bucket::classify(mode, value),
        }
    }
}

/// Stats for every district under a view mode, in table order
pub fn district_stats(mode: ViewMode) -> [DistrictStat; 8] {
    District::ALL.map(|district| DistrictStat::new(district, mode))
}

/// Node label text: percentages carry a `%` suffix
pub fn format_value(mode: ViewMode, value: u32) -> String {
    match mode {
        ViewMode::Attendance => format!("{value}%"),
        ViewMode::Employees | ViewMode::Offices => value.to_string(),
    }
}

/// Hover tooltip line for a district node
pub fn tooltip_text(mode: ViewMode, value: u32) -> String {
    match mode {
        ViewMode::Attendance => format!("Attendance Rate: {value}%"),
        ViewMode::Employees => format!("Total Employees: {value}"),
        ViewMode::Offices => format!("Office Locations: {value}"),
    }
}

/// Headcount of a district relative to the largest district, in percent
pub fn headcount_share(district: District) -> f64 {
    let largest = District::ALL
        .iter()
        .map(|d| d.record().total)
        .max()
        .unwrap_or(0);
    if largest == 0 {
        return 0.0;
    }
    f64::from(district.record().total) / f64::from(largest) * 100.0
}

/// Sum of all district headcounts
pub fn total_headcount() -> u32 {
    District::ALL.iter().map(|d| d.record().total).sum()
}

/// Unweighted mean of the present percentages
pub fn average_attendance() -> f64 {
    let sum: u32 = District::ALL.iter().map(|d| d.record().present).sum();
    f64::from(sum) / District::ALL.len() as f64
}

/// Render an integer with comma thousands separators
pub fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_buckets() {
        assert_eq!(Bucket::classify(ViewMode::Attendance, 91), Bucket::Green);
        assert_eq!(Bucket::classify(ViewMode::Attendance, 84), Bucket::Emerald);
        assert_eq!(Bucket::classify(ViewMode::Attendance, 75), Bucket::Yellow);
        assert_eq!(Bucket::classify(ViewMode::Attendance, 50), Bucket::Red);
    }

    #[test]
    fn test_attendance_bucket_boundaries() {
        assert_eq!(Bucket::classify(ViewMode::Attendance, 90), Bucket::Green);
        assert_eq!(Bucket::classify(ViewMode::Attendance, 89), Bucket::Emerald);
        assert_eq!(Bucket::classify(ViewMode::Attendance, 80), Bucket::Emerald);
        assert_eq!(Bucket::classify(ViewMode::Attendance, 79), Bucket::Yellow);
        assert_eq!(Bucket::classify(ViewMode::Attendance, 70), Bucket::Yellow);
        assert_eq!(Bucket::classify(ViewMode::Attendance, 69), Bucket::Red);
        assert_eq!(Bucket::classify(ViewMode::Attendance, 0), Bucket::Red);
    }

    #[test]
    fn test_employee_and_office_buckets() {
        assert_eq!(Bucket::classify(ViewMode::Employees, 450), Bucket::Purple);
        assert_eq!(Bucket::classify(ViewMode::Employees, 320), Bucket::Indigo);
        assert_eq!(Bucket::classify(ViewMode::Employees, 210), Bucket::Blue);
        assert_eq!(Bucket::classify(ViewMode::Employees, 140), Bucket::Cyan);
        assert_eq!(Bucket::classify(ViewMode::Employees, 99), Bucket::Teal);

        assert_eq!(Bucket::classify(ViewMode::Offices, 9), Bucket::Amber);
        assert_eq!(Bucket::classify(ViewMode::Offices, 7), Bucket::Orange);
        assert_eq!(Bucket::classify(ViewMode::Offices, 4), Bucket::Rose);
        assert_eq!(Bucket::classify(ViewMode::Offices, 3), Bucket::Pink);
    }

    #[test]
    fn test_office_tiers_have_their_own_gradients() {
        let rose = Bucket::classify(ViewMode::Offices, 5);
        assert_eq!(rose.gradient_class(), "from-red-500 to-pink-600");
        assert_ne!(rose.gradient_class(), Bucket::classify(ViewMode::Attendance, 50).gradient_class());
        assert_eq!(Bucket::classify(ViewMode::Offices, 1).gradient_class(), "from-pink-500 to-rose-600");
    }

    #[test]
    fn test_office_count_rounds_up() {
        assert_eq!(office_count(450), 9);
        assert_eq!(office_count(150), 3);
        assert_eq!(office_count(140), 3);
        assert_eq!(office_count(1), 1);
        assert_eq!(office_count(0), 0);
    }

    #[test]
    fn test_district_stats_follow_view_mode() {
        let employees = district_stats(ViewMode::Employees);
        assert_eq!(employees[0].district, District::Dhaka);
        assert_eq!(employees[0].value, 450);

        let attendance = district_stats(ViewMode::Attendance);
        let sylhet = attendance
            .iter()
            .find(|s| s.district == District::Sylhet)
            .unwrap();
        assert_eq!(sylhet.value, 91);
        assert_eq!(sylhet.bucket, Bucket::Green);

        let offices = district_stats(ViewMode::Offices);
        let chittagong = offices
            .iter()
            .find(|s| s.district == District::Chittagong)
            .unwrap();
        assert_eq!(chittagong.value, 7);
        assert_eq!(chittagong.bucket, Bucket::Orange);
    }

    #[test]
    fn test_value_and_tooltip_formatting() {
        assert_eq!(format_value(ViewMode::Attendance, 87), "87%");
        assert_eq!(format_value(ViewMode::Employees, 450), "450");
        assert_eq!(tooltip_text(ViewMode::Attendance, 87), "Attendance Rate: 87%");
        assert_eq!(tooltip_text(ViewMode::Employees, 450), "Total Employees: 450");
        assert_eq!(tooltip_text(ViewMode::Offices, 9), "Office Locations: 9");
    }

    #[test]
    fn test_summary_figures() {
        assert_eq!(total_headcount(), 1810);
        assert!((average_attendance() - 84.5).abs() < f64::EPSILON);
        assert!((headcount_share(District::Dhaka) - 100.0).abs() < f64::EPSILON);
        assert!(headcount_share(District::Mymensingh) < 32.0);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1810), "1,810");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_district_keys_round_trip() {
        for district in District::ALL {
            assert_eq!(District::from_key(district.key()), Some(district));
            assert_eq!(district.to_string().to_lowercase(), district.key());
        }
        assert_eq!(District::from_key("narnia"), None);
    }
}
