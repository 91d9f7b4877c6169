use leptos::prelude::*;

const MARK_PATH: &str =
    "M20,10 H80 V25 H55 V80 H40 V25 H20 Z M40,60 H70 C75,60 78,55 78,50 C78,45 75,40 70,40 H55";

/// Animated TEKGEO wordmark. The outline draws itself, fills, gets a
/// shine pass and then the text slides in; the cycle repeats every 14s.
#[component]
pub fn Logo(
    /// Rendered size of the mark in px
    #[prop(default = 50)]
    size: u32,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <svg width=size height=size viewBox="0 0 100 100" fill="none" aria-hidden="true">
                <path
                    class="tekgeo-logo-outline"
                    d=MARK_PATH
                    stroke="#2563eb"
                    stroke-width="2.7"
                    fill="transparent"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
                <path
                    class="tekgeo-logo-shine"
                    d=MARK_PATH
                    stroke="white"
                    stroke-width="0.5"
                    fill="transparent"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    opacity="0"
                />
            </svg>
            <span class="tekgeo-logo-text text-xl font-semibold text-white tracking-wide">
                "TEKGEO"
            </span>
        </div>
    }
}

/// Compact brand mark used in the navigation bar
#[component]
pub fn BrandMark() -> impl IntoView {
    use crate::ui::icon::{Icon, icons};

    view! {
        <a href="#" class="flex items-center gap-2" aria-label="TekGeo home">
            <span class="w-9 h-9 rounded-full bg-gradient-to-br from-blue-500 to-blue-700 flex items-center justify-center shadow-lg shadow-blue-900/40">
                <Icon name=icons::MAP_PIN class="w-5 h-5 text-white" />
            </span>
            <span class="text-xl font-bold text-white">"TekGeo"</span>
        </a>
    }
}
