use leptos::html;
use leptos::prelude::*;

use crate::core::motion::stagger_delay;
use crate::ui::icon::{Icon, icons};

/// Outline rectangle of the decorative side panels (300x800 viewBox)
struct DecorRect {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    opacity: f64,
    fill: Option<f64>,
}

const fn rect(x: u32, y: u32, width: u32, height: u32, opacity: f64, fill: Option<f64>) -> DecorRect {
    DecorRect {
        x,
        y,
        width,
        height,
        opacity,
        fill,
    }
}

const LEFT_RECTS: [DecorRect; 12] = [
    rect(20, 100, 80, 80, 0.3, None),
    rect(120, 100, 40, 40, 0.5, None),
    rect(120, 160, 80, 80, 0.2, None),
    rect(20, 200, 60, 60, 0.4, None),
    rect(180, 300, 100, 40, 0.3, None),
    rect(80, 270, 80, 80, 0.5, Some(0.1)),
    rect(20, 360, 120, 40, 0.2, None),
    rect(160, 400, 60, 120, 0.3, Some(0.05)),
    rect(20, 420, 120, 40, 0.4, None),
    rect(40, 480, 80, 80, 0.3, None),
    rect(140, 540, 100, 40, 0.5, Some(0.1)),
    rect(40, 580, 80, 80, 0.2, None),
];

const RIGHT_RECTS: [DecorRect; 13] = [
    rect(100, 80, 120, 40, 0.3, None),
    rect(60, 140, 80, 80, 0.4, Some(0.08)),
    rect(160, 140, 40, 120, 0.5, None),
    rect(30, 240, 60, 60, 0.2, None),
    rect(110, 260, 80, 80, 0.3, None),
    rect(200, 260, 60, 140, 0.4, Some(0.1)),
    rect(30, 320, 60, 120, 0.3, None),
    rect(110, 360, 70, 70, 0.5, Some(0.05)),
    rect(30, 460, 150, 40, 0.3, None),
    rect(200, 420, 60, 120, 0.4, None),
    rect(60, 520, 80, 80, 0.5, Some(0.1)),
    rect(160, 520, 100, 40, 0.2, None),
    rect(160, 580, 40, 100, 0.3, None),
];

const DECOR_STROKE: &str = "#0062FF";

#[component]
fn DecorPanel(rects: &'static [DecorRect], side: &'static str, delay_s: f64) -> impl IntoView {
    view! {
        <div class=format!("absolute {side}-0 top-0 h-full w-1/4 z-0 opacity-70")>
            <svg class="w-full h-full" viewBox="0 0 300 800" fill="none" preserveAspectRatio="xMidYMid slice">
                <g class="hero-fade-in" style=format!("animation-delay: {delay_s}s")>
                    {rects
                        .iter()
                        .map(|r| {
                            view! {
                                <rect
                                    x=r.x
                                    y=r.y
                                    width=r.width
                                    height=r.height
                                    stroke=DECOR_STROKE
                                    stroke-opacity=r.opacity
                                    stroke-width="1"
                                    fill=if r.fill.is_some() { DECOR_STROKE } else { "none" }
                                    fill-opacity=r.fill.unwrap_or(0.0)
                                />
                            }
                        })
                        .collect_view()}
                </g>
            </svg>
        </div>
    }
}

/// Landing banner: headline, calls to action and a grid background that
/// follows the pointer
#[component]
pub fn HeroSection() -> impl IntoView {
    let grid_ref = NodeRef::<html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::beam::Point;
        use crate::core::motion::{Rect, background_position, parallax_offset};
        use leptos::ev::mousemove;

        let handle = window_event_listener(mousemove, move |ev| {
            let Some(grid) = grid_ref.get_untracked() else {
                return;
            };
            let bounds = grid.get_bounding_client_rect();
            let offset = parallax_offset(
                Point::new(ev.client_x() as f64, ev.client_y() as f64),
                Rect {
                    left: bounds.left(),
                    top: bounds.top(),
                    width: bounds.width(),
                    height: bounds.height(),
                },
            );
            let _ = grid
                .style()
                .set_property("background-position", &background_position(offset));
        });
        on_cleanup(move || drop(handle));
    }

    let delay = |index| format!("animation-delay: {}s", stagger_delay(index, 0.2));

    view! {
        <section class="relative min-h-screen pt-24 pb-24 bg-[#020817] overflow-hidden hero-clip border-b-4 border-b-blue-500">
            <div node_ref=grid_ref class="absolute inset-0 hero-grid-bg opacity-60 z-0"></div>
            <div class="absolute inset-0 hero-gradient z-0"></div>
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-96 h-96 rounded-full bg-blue-600/10 blur-[120px] animate-pulse"></div>

            <DecorPanel rects=&LEFT_RECTS side="left" delay_s=0.3 />
            <DecorPanel rects=&RIGHT_RECTS side="right" delay_s=0.5 />

            <div class="container mx-auto px-4 relative z-10 pt-16 h-full flex items-center justify-center">
                <div class="text-center space-y-6 lg:space-y-7 max-w-2xl">
                    <div class="inline-block hero-fade-in" style=delay(0)>
                        <span class="inline-block px-4 py-1 rounded-full glass-card text-sm md:text-base text-blue-400">
                            "Next Generation Employee Tracking"
                        </span>
                    </div>

                    <h1 class="text-4xl md:text-5xl lg:text-7xl font-semibold text-white leading-tight hero-fade-in" style=delay(1)>
                        "The next era" <br /> "of " <span class="text-gradient-blue">"Attendance"</span>
                    </h1>

                    <p class="text-lg md:text-xl text-slate-400 hero-fade-in" style=delay(2)>
                        "TekGeo's most advanced remote employee monitoring system."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 pt-4 justify-center hero-fade-in" style=delay(3)>
                        <a
                            href="#features"
                            class="px-8 py-3 bg-blue-700 text-white font-medium rounded-full hover:bg-blue-500 transition-all duration-300 text-center"
                        >
                            "Learn more"
                        </a>
                        <a
                            href="#demo"
                            class="px-8 py-3 glass-card text-white rounded-full hover:bg-white/10 transition-all duration-300 flex items-center justify-center gap-2 group"
                        >
                            "Request Demo"
                            <Icon name=icons::ARROW_RIGHT class="w-4 h-4 group-hover:translate-x-1 transition-transform duration-300" />
                        </a>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-20 left-1/4 w-16 h-16 glass-card hero-float" style="animation-duration: 8s">
                <div class="w-full h-full flex items-center justify-center">
                    <div class="w-8 h-8 bg-blue-600/20 border border-blue-600/40"></div>
                </div>
            </div>
            <div class="absolute top-40 right-1/3 w-12 h-12 glass-card hero-float" style="animation-duration: 6s; animation-delay: 1s">
                <div class="w-full h-full flex items-center justify-center">
                    <div class="w-6 h-6 bg-blue-600/20 border border-blue-600/40"></div>
                </div>
            </div>
        </section>
    }
}
