pub mod attendance_map;
pub mod beam;
pub mod blog;
pub mod carousel;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod live_feed;
pub mod logo;
pub mod modal;
pub mod navbar;
pub mod pages;
pub mod pricing;
pub mod system_diagram;
pub mod video_section;
pub mod viewport;

pub use icon::{Icon, icons};

/// Renders a view to HTML inside a fresh reactive owner, the way the server
/// does for a request.
#[cfg(all(test, feature = "ssr"))]
pub(crate) fn render_to_html<V>(view: impl FnOnce() -> V) -> String
where
    V: leptos::tachys::view::RenderHtml,
{
    leptos::prelude::Owner::new().with(|| view().to_html())
}
