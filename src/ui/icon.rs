use leptos::prelude::*;

/// Inline stroke icon (24x24 grid, `currentColor`)
#[component]
pub fn Icon(
    /// Icon name, one of `icons::*`
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=icons::body(name)
        ></svg>
    }
}

/// Predefined icons
pub mod icons {
    pub const ACTIVITY: &str = "activity";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const BUILDING: &str = "building";
    pub const BUILDING_2: &str = "building-2";
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CLOCK: &str = "clock";
    pub const FACEBOOK: &str = "facebook";
    pub const GITHUB: &str = "github";
    pub const HOME: &str = "home";
    pub const INSTAGRAM: &str = "instagram";
    pub const LAPTOP: &str = "laptop";
    pub const LINKEDIN: &str = "linkedin";
    pub const MAIL: &str = "mail";
    pub const MAP: &str = "map";
    pub const MAP_PIN: &str = "map-pin";
    pub const MAXIMIZE: &str = "maximize";
    pub const MENU: &str = "menu";
    pub const PHONE: &str = "phone";
    pub const PIE_CHART: &str = "pie-chart";
    pub const SERVER: &str = "server";
    pub const SMARTPHONE: &str = "smartphone";
    pub const TAG: &str = "tag";
    pub const TWITTER: &str = "twitter";
    pub const USER: &str = "user";
    pub const USERS: &str = "users";
    pub const X: &str = "x";

    /// SVG child markup of an icon. Unknown names draw an alert circle.
    pub fn body(name: &str) -> &'static str {
        match name {
            ACTIVITY => r#"<path d="M22 12h-4l-3 9L9 3l-3 9H2"/>"#,
            ARROW_RIGHT => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            BUILDING => {
                r#"<rect width="16" height="20" x="4" y="2" rx="2" ry="2"/><path d="M9 22v-4h6v4"/><path d="M8 6h.01"/><path d="M16 6h.01"/><path d="M12 6h.01"/><path d="M12 10h.01"/><path d="M12 14h.01"/><path d="M16 10h.01"/><path d="M16 14h.01"/><path d="M8 10h.01"/><path d="M8 14h.01"/>"#
            }
            BUILDING_2 => {
                r#"<path d="M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z"/><path d="M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2"/><path d="M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2"/><path d="M10 6h4"/><path d="M10 10h4"/><path d="M10 14h4"/><path d="M10 18h4"/>"#
            }
            CHECK => r#"<polyline points="20 6 9 17 4 12"/>"#,
            CHEVRON_DOWN => r#"<path d="m6 9 6 6 6-6"/>"#,
            CHEVRON_LEFT => r#"<path d="m15 18-6-6 6-6"/>"#,
            CHEVRON_RIGHT => r#"<path d="m9 18 6-6-6-6"/>"#,
            CLOCK => r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#,
            FACEBOOK => {
                r#"<path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"/>"#
            }
            GITHUB => {
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
            }
            HOME => {
                r#"<path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><polyline points="9 22 9 12 15 12 15 22"/>"#
            }
            INSTAGRAM => {
                r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#
            }
            LAPTOP => {
                r#"<path d="M20 16V7a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v9m16 0H4m16 0 1.28 2.55a1 1 0 0 1-.9 1.45H3.62a1 1 0 0 1-.9-1.45L4 16"/>"#
            }
            LINKEDIN => {
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#
            }
            MAIL => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            MAP => {
                r#"<polygon points="3 6 9 3 15 6 21 3 21 18 15 21 9 18 3 21"/><line x1="9" x2="9" y1="3" y2="18"/><line x1="15" x2="15" y1="6" y2="21"/>"#
            }
            MAP_PIN => {
                r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#
            }
            MAXIMIZE => {
                r#"<path d="M8 3H5a2 2 0 0 0-2 2v3"/><path d="M21 8V5a2 2 0 0 0-2-2h-3"/><path d="M3 16v3a2 2 0 0 0 2 2h3"/><path d="M16 21h3a2 2 0 0 0 2-2v-3"/>"#
            }
            MENU => {
                r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#
            }
            PHONE => {
                r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#
            }
            PIE_CHART => r#"<path d="M21.21 15.89A10 10 0 1 1 8 2.83"/><path d="M22 12A10 10 0 0 0 12 2v10z"/>"#,
            SERVER => {
                r#"<rect width="20" height="8" x="2" y="2" rx="2" ry="2"/><rect width="20" height="8" x="2" y="14" rx="2" ry="2"/><line x1="6" x2="6.01" y1="6" y2="6"/><line x1="6" x2="6.01" y1="18" y2="18"/>"#
            }
            SMARTPHONE => r#"<rect width="14" height="20" x="5" y="2" rx="2" ry="2"/><path d="M12 18h.01"/>"#,
            TAG => {
                r#"<path d="M12 2H2v10l9.29 9.29c.94.94 2.48.94 3.42 0l6.58-6.58c.94-.94.94-2.48 0-3.42L12 2Z"/><path d="M7 7h.01"/>"#
            }
            TWITTER => {
                r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>"#
            }
            USER => r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#,
            USERS => {
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#
            }
            X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            _ => {
                r#"<circle cx="12" cy="12" r="10"/><line x1="12" x2="12" y1="8" y2="12"/><line x1="12" x2="12.01" y1="16" y2="16"/>"#
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_known_icons_have_distinct_bodies() {
            assert_ne!(body(CHECK), body(X));
            assert_ne!(body(BUILDING), body(BUILDING_2));
            assert!(body(SERVER).contains("<rect"));
        }

        #[test]
        fn test_unknown_icon_falls_back() {
            assert_eq!(body("no-such-icon"), body(ALERT_CIRCLE));
        }

        #[test]
        fn test_names_used_by_core_data_resolve() {
            use crate::core::content::{SOCIAL_LINKS, diagram_stats, map_summary_stats};
            use crate::core::diagram::DiagramNode;

            let fallback = body(ALERT_CIRCLE);
            for node in DiagramNode::ALL {
                assert_ne!(body(node.icon()), fallback, "{}", node.icon());
            }
            for stat in diagram_stats().iter().chain(map_summary_stats().iter()) {
                assert_ne!(body(stat.icon), fallback, "{}", stat.icon);
            }
            for (icon, _) in SOCIAL_LINKS {
                assert_ne!(body(icon), fallback, "{icon}");
            }
        }
    }
}
