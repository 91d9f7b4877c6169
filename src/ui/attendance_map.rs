//! Nationwide attendance map: district nodes over a dotted map, beams to the
//! Dhaka hub, a per-district statistics panel and the live check-in feed.

use leptos::prelude::*;

use crate::core::attendance::{
    District, DistrictStat, ViewMode, format_thousands, format_value, headcount_share,
    tooltip_text,
};
use crate::core::beam::{BeamTiming, beam_path};
use crate::core::content::map_summary_stats;
use crate::core::map::{self, HUB, MAP_HEIGHT, MAP_WIDTH, MapOverlay, anchor, node_box, spokes};
use crate::ui::beam::AnimatedBeam;
use crate::ui::icon::{Icon, icons};
use crate::ui::live_feed::LiveFeed;

/// Rows in the "Recent Activity" list of a selected district
const RECENT_ACTIVITY_ROWS: usize = 3;

/// Card colours of the summary row, in card order
const SUMMARY_ACCENTS: [&str; 4] = [
    "from-blue-600/20 to-indigo-600/20 border-blue-500/30 text-blue-400",
    "from-green-600/20 to-emerald-600/20 border-green-500/30 text-green-400",
    "from-amber-600/20 to-orange-600/20 border-amber-500/30 text-amber-400",
    "from-purple-600/20 to-pink-600/20 border-purple-500/30 text-purple-400",
];

#[component]
pub fn AttendanceMapSection() -> impl IntoView {
    let mode = RwSignal::new(ViewMode::default());
    let overlay = RwSignal::new(MapOverlay::default());

    view! {
        <section id="maps-integration" class="py-16 bg-black text-white">
            <div class="container mx-auto px-4">
                <div class="text-center mb-12 landing-scroll-animate">
                    <h2 class="text-3xl md:text-5xl font-bold mb-4 bg-gradient-to-r from-white via-blue-300 to-blue-600 bg-clip-text text-transparent">
                        "Nationwide Attendance Tracking"
                    </h2>
                    <p class="text-blue-200/70 max-w-2xl mx-auto">
                        "Real-time attendance data visualization across Bangladesh. Monitor employee attendance, track office locations, and analyze regional performance."
                    </p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="lg:col-span-2 rounded-xl border border-blue-500/20 bg-blue-950/20 p-4 backdrop-blur-sm">
                        <ModeTabs mode=mode />
                        <MapCanvas mode=mode overlay=overlay />
                    </div>

                    <div class="space-y-6">
                        <StatisticsPanel overlay=overlay />
                        <div class="hidden sm:block">
                            <LiveFeed />
                        </div>
                    </div>
                </div>

                <SummaryCards />
            </div>
        </section>
    }
}

#[component]
fn ModeTabs(mode: RwSignal<ViewMode>) -> impl IntoView {
    view! {
        <div class="mb-4 flex gap-2 rounded-lg bg-blue-950/40 p-1" role="tablist">
            {ViewMode::ALL
                .into_iter()
                .map(|tab| {
                    let active = move || mode.get() == tab;
                    view! {
                        <button
                            role="tab"
                            class="flex-1 rounded-md px-3 py-2 text-sm transition-colors text-blue-200/70 hover:text-white"
                            class=("bg-blue-600", active)
                            class=("text-white", active)
                            aria-selected=move || active().to_string()
                            on:click=move |_| mode.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn MapCanvas(mode: RwSignal<ViewMode>, overlay: RwSignal<MapOverlay>) -> impl IntoView {
    let hub = node_box(HUB).center();
    // Timing per spoke, re-rolled in the browser so every beam runs out of step
    let timings = spokes()
        .map(|district| (district, RwSignal::new(BeamTiming::default())))
        .collect::<Vec<_>>();

    #[cfg(not(feature = "ssr"))]
    {
        let timings = timings.clone();
        Effect::new(move |_| {
            let mut rng = rand::thread_rng();
            for (_, timing) in &timings {
                timing.set(BeamTiming::random(&mut rng));
            }
        });
    }

    let beams = timings
        .into_iter()
        .map(|(district, timing)| {
            view! {
                <AnimatedBeam
                    id=format!("map-beam-{}", district.key())
                    path=beam_path(anchor(district), anchor(HUB), 0.0)
                    gradient=Signal::derive(move || map::beam_gradient(district, mode.get()))
                    timing=timing
                    visible=Signal::derive(move || overlay.with(|o| o.beam_visible(district)))
                />
            }
        })
        .collect_view();

    view! {
        <div class="relative w-full aspect-[2/1] overflow-hidden">
            <img
                src="/dotted-map.svg"
                alt="Map of Bangladesh"
                class="absolute inset-0 w-full h-full object-contain opacity-40 pointer-events-none"
            />
            <svg
                viewBox=format!("0 0 {MAP_WIDTH} {MAP_HEIGHT}")
                class="absolute inset-0 w-full h-full pointer-events-none"
                fill="none"
            >
                {beams}
            </svg>

            <div
                class="absolute z-20 -translate-x-1/2 -translate-y-1/2 flex flex-col items-center"
                style=format!(
                    "left: {}%; top: {}%;",
                    hub.x * 100.0 / MAP_WIDTH,
                    hub.y * 100.0 / MAP_HEIGHT,
                )
            >
                <div class="relative flex h-12 w-12 items-center justify-center rounded-full border-2 border-blue-400 bg-blue-600/30 backdrop-blur-sm">
                    <span class="absolute h-full w-full rounded-full bg-blue-500/30 animate-ping"></span>
                    <span class="h-3 w-3 rounded-full bg-blue-400"></span>
                </div>
                <span class="mt-1 text-xs font-medium text-blue-200">"Dhaka Hub"</span>
            </div>

            {spokes()
                .map(|district| view! { <DistrictNode district=district mode=mode overlay=overlay /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn DistrictNode(
    district: District,
    mode: RwSignal<ViewMode>,
    overlay: RwSignal<MapOverlay>,
) -> impl IntoView {
    let stat = move || DistrictStat::new(district, mode.get());
    let highlighted = move || overlay.with(|o| o.is_highlighted(district));
    let selected = move || overlay.with(|o| o.selected() == Some(district));
    let hovered = move || overlay.with(|o| o.hovered() == Some(district));

    view! {
        <div
            class="absolute z-10 flex flex-col items-center justify-center cursor-pointer"
            style=node_box(district).style()
            on:mouseenter=move |_| overlay.update(|o| o.hover(district))
            on:mouseleave=move |_| overlay.update(|o| o.leave())
            on:click=move |_| overlay.update(|o| o.select(district))
        >
            <div
                class=move || {
                    format!(
                        "flex h-10 w-10 items-center justify-center rounded-full border-2 bg-gradient-to-br text-xs font-semibold backdrop-blur-sm transition-all duration-300 {} {} {}",
                        stat().bucket.gradient_class(),
                        if highlighted() { "border-white/60" } else { "border-white/20" },
                        if selected() { "scale-110" } else { "" },
                    )
                }
            >
                <span class=move || stat().bucket.text_class()>
                    {move || {
                        let stat = stat();
                        format_value(mode.get(), stat.value)
                    }}
                </span>
            </div>
            <span class="mt-1 text-[10px] font-medium text-blue-100">{district.to_string()}</span>

            <Show when=hovered>
                <div class="absolute left-full top-1/2 ml-2 -translate-y-1/2 whitespace-nowrap rounded-md border border-blue-500/30 bg-blue-950/90 px-3 py-2 text-xs shadow-lg z-30">
                    <p class="font-semibold text-white">{district.to_string()}</p>
                    <p class="text-blue-200/80">
                        {move || tooltip_text(mode.get(), stat().value)}
                    </p>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn StatisticsPanel(overlay: RwSignal<MapOverlay>) -> impl IntoView {
    let selected = move || overlay.with(|o| o.selected());

    view! {
        <div class="rounded-xl border border-blue-500/20 bg-blue-950/20 p-4 backdrop-blur-sm">
            <h3 class="mb-4 text-lg font-semibold text-white">
                {move || match selected() {
                    Some(district) => format!("{district} Statistics"),
                    None => "Regional Statistics".to_string(),
                }}
            </h3>
            {move || match selected() {
                Some(district) => view! {
                    <DistrictDetails
                        district=district
                        on_clear=Callback::new(move |_| overlay.update(|o| o.clear_selection()))
                    />
                }
                .into_any(),
                None => view! {
                    <div class="flex flex-col items-center justify-center py-10 text-center text-blue-200/60">
                        <Icon name=icons::MAP class="mb-3 h-10 w-10" />
                        <p class="text-sm">"Select a region on the map to view detailed statistics"</p>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn DistrictDetails(district: District, on_clear: Callback<()>) -> impl IntoView {
    let record = district.record();
    let share = headcount_share(district);
    // (tag, clock) pairs; filled in the browser from the local clock
    let activity = RwSignal::new(Vec::<(String, String)>::new());

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        use crate::core::feed::{clock_label, random_employee_tag};
        use rand::Rng;

        let mut rng = rand::thread_rng();
        let hours = js_sys::Date::new_0().get_hours();
        let rows = (0..RECENT_ACTIVITY_ROWS)
            .map(|_| {
                let tag = random_employee_tag(&mut rng);
                (tag, clock_label(hours, rng.gen_range(0..60)))
            })
            .collect();
        activity.set(rows);
    });

    let counts = [
        ("Present", record.present, icons::CHECK, "bg-green-500/10 border-green-500/30 text-green-400"),
        ("Late", record.late, icons::CLOCK, "bg-amber-500/10 border-amber-500/30 text-amber-400"),
        ("Absent", record.absent, icons::X, "bg-red-500/10 border-red-500/30 text-red-400"),
    ];

    view! {
        <div class="space-y-4">
            <div class="grid grid-cols-3 gap-2">
                {counts
                    .into_iter()
                    .map(|(label, value, icon, accent)| {
                        view! {
                            <div class=format!("rounded-lg border p-2 text-center {accent}")>
                                <Icon name=icon class="mx-auto mb-1 h-4 w-4" />
                                <p class="text-lg font-bold">{format!("{value}%")}</p>
                                <p class="text-[10px] text-blue-200/70">{label}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div>
                <h4 class="mb-2 text-sm font-medium text-white">"Employee Distribution"</h4>
                <div class="flex items-center justify-between text-xs text-blue-200/70">
                    <span>"Total Employees"</span>
                    <span class="font-semibold text-white">{format_thousands(record.total)}</span>
                </div>
                <div class="mt-2 h-2 w-full overflow-hidden rounded-full bg-blue-950">
                    <div
                        class="h-full rounded-full bg-gradient-to-r from-blue-600 to-indigo-500"
                        style:width=format!("{share}%")
                    ></div>
                </div>
            </div>

            <div>
                <h4 class="mb-2 text-sm font-medium text-white">"Recent Activity"</h4>
                <div class="space-y-2">
                    {move || {
                        let rows = activity.get();
                        if rows.is_empty() {
                            (0..RECENT_ACTIVITY_ROWS)
                                .map(|_| {
                                    view! {
                                        <div class="h-9 rounded-md bg-blue-950/40 animate-pulse"></div>
                                    }
                                    .into_any()
                                })
                                .collect_view()
                        } else {
                            rows.into_iter()
                                .map(|(tag, clock)| {
                                    view! {
                                        <div class="flex items-center gap-2 rounded-md bg-blue-950/40 p-2">
                                            <Icon name=icons::USER class="h-4 w-4 text-blue-400" />
                                            <div>
                                                <p class="text-xs text-white">{tag}</p>
                                                <p class="text-[10px] text-blue-200/60">
                                                    {format!("Checked in at {clock}")}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                    .into_any()
                                })
                                .collect_view()
                        }
                    }}
                </div>
            </div>

            <button
                class="w-full rounded-md border border-blue-500/30 py-2 text-xs text-blue-200 hover:bg-blue-600/10 transition-colors"
                on:click=move |_| on_clear.run(())
            >
                "Clear selection"
            </button>
        </div>
    }
}

#[component]
fn SummaryCards() -> impl IntoView {
    view! {
        <div class="mt-8 grid grid-cols-2 md:grid-cols-4 gap-4">
            {map_summary_stats()
                .into_iter()
                .zip(SUMMARY_ACCENTS)
                .map(|(stat, accent)| {
                    view! {
                        <div class=format!(
                            "rounded-xl border bg-gradient-to-br p-4 backdrop-blur-sm landing-scroll-animate {accent}",
                        )>
                            <div class="flex items-center justify-between">
                                <Icon name=stat.icon class="h-5 w-5" />
                                {stat
                                    .trend
                                    .map(|trend| {
                                        view! {
                                            <span class="rounded-full bg-white/10 px-2 py-0.5 text-[10px] text-white">
                                                {trend}
                                            </span>
                                        }
                                    })}
                            </div>
                            <p class="mt-3 text-2xl font-bold text-white">{stat.value}</p>
                            <p class="text-xs text-blue-200/70">{stat.label}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
