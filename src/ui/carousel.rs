//! Swipeable video gallery ("See TekGeo in Action")

use leptos::prelude::*;

use crate::core::carousel::{CAROUSEL_VIDEOS, Carousel, VideoEntry};
use crate::core::video::{EmbedMode, embed_url, thumbnail_url};
use crate::ui::icon::{Icon, icons};

/// Drag distance is damped so the track lags behind the pointer
const DRAG_ELASTICITY: f64 = 0.5;

const PLAY_GLYPH: &str = "M4.5 5.653c0-1.426 1.529-2.33 2.779-1.643l11.54 6.348c1.295.712 1.295 2.573 0 3.285L7.28 19.991c-1.25.687-2.779-.217-2.779-1.643V5.653z";

#[component]
pub fn VideoCarousel() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(CAROUSEL_VIDEOS.len()));
    // Pointer x where the current drag started, `None` while idle
    let drag_start = RwSignal::new(None::<f64>);
    let drag_offset = RwSignal::new(0.0_f64);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::carousel::AUTO_DELAY;

        match set_interval_with_handle(
            move || {
                let offset = drag_offset.get_untracked();
                carousel.update(|c| {
                    c.autoplay_tick(offset);
                });
            },
            AUTO_DELAY,
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => leptos::logging::warn!("carousel autoplay unavailable: {err:?}"),
        }
    }

    let end_drag = move || {
        if drag_start.get_untracked().is_none() {
            return;
        }
        drag_start.set(None);
        let offset = drag_offset.get_untracked();
        carousel.update(|c| {
            c.drag_end(offset);
        });
        drag_offset.set(0.0);
    };

    let track_style = move || {
        let percent = carousel.with(|c| c.track_offset_percent());
        let transition = if drag_start.get().is_some() {
            "none"
        } else {
            "transform 500ms cubic-bezier(0.22, 1, 0.36, 1)"
        };
        format!(
            "transform: translateX(calc(-{percent}% + {}px)); transition: {transition};",
            drag_offset.get()
        )
    };

    view! {
        <section id="business-solutions" class="relative overflow-hidden bg-black py-24 md:py-32">
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_top_right,_#1a1a3a,_transparent_50%)] opacity-40"></div>
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_bottom_left,_#0f172a,_transparent_50%)] opacity-30"></div>

            <div class="relative z-10 mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="mx-auto mb-16 max-w-3xl text-center landing-scroll-animate">
                    <h2 class="mb-6 bg-gradient-to-r from-white via-blue-300 to-blue-600 bg-clip-text text-4xl font-bold tracking-tight text-transparent sm:text-5xl">
                        "See TekGeo in Action"
                    </h2>
                    <p class="mx-auto max-w-2xl text-lg text-blue-200/80">
                        "Explore our video gallery to see how TekGeo transforms attendance tracking for distributed teams worldwide."
                    </p>
                </div>

                <div class="group relative mx-auto overflow-hidden rounded-2xl border border-blue-900/30 bg-black/40 shadow-[0_0_50px_-12px_rgba(59,130,246,0.3)] backdrop-blur-sm transition-colors duration-300 hover:border-blue-500">
                    <div
                        class="flex cursor-grab items-center touch-pan-y select-none active:cursor-grabbing"
                        style=track_style
                        on:pointerdown=move |ev| {
                            drag_start.set(Some(f64::from(ev.client_x())));
                        }
                        on:pointermove=move |ev| {
                            if let Some(start) = drag_start.get_untracked() {
                                drag_offset.set((f64::from(ev.client_x()) - start) * DRAG_ELASTICITY);
                            }
                        }
                        on:pointerup=move |_| end_drag()
                        on:pointerleave=move |_| end_drag()
                        on:pointercancel=move |_| end_drag()
                    >
                        {CAROUSEL_VIDEOS
                            .into_iter()
                            .enumerate()
                            .map(|(index, video)| {
                                view! { <Slide index=index video=video carousel=carousel /> }
                            })
                            .collect_view()}
                    </div>

                    <div class="absolute left-4 top-1/2 -translate-y-1/2 md:left-6">
                        <button
                            on:click=move |_| {
                                carousel.update(|c| {
                                    c.previous();
                                });
                            }
                            disabled=move || !carousel.with(|c| c.can_previous())
                            aria-label="Previous video"
                            class="flex h-10 w-10 items-center justify-center rounded-full bg-black/50 text-white backdrop-blur-sm transition hover:bg-black/70 disabled:opacity-50 md:h-12 md:w-12"
                        >
                            <Icon name=icons::CHEVRON_LEFT class="h-6 w-6" />
                        </button>
                    </div>
                    <div class="absolute right-4 top-1/2 -translate-y-1/2 md:right-6">
                        <button
                            on:click=move |_| {
                                carousel.update(|c| {
                                    c.next();
                                });
                            }
                            disabled=move || !carousel.with(|c| c.can_next())
                            aria-label="Next video"
                            class="flex h-10 w-10 items-center justify-center rounded-full bg-black/50 text-white backdrop-blur-sm transition hover:bg-black/70 disabled:opacity-50 md:h-12 md:w-12"
                        >
                            <Icon name=icons::CHEVRON_RIGHT class="h-6 w-6" />
                        </button>
                    </div>

                    <div class="absolute bottom-4 left-0 right-0">
                        <div class="flex justify-center gap-2">
                            {(0..CAROUSEL_VIDEOS.len())
                                .map(|index| {
                                    view! {
                                        <button
                                            class=move || {
                                                if carousel.with(|c| c.is_active(index)) {
                                                    "h-2.5 w-2.5 rounded-full transition-all duration-300 md:h-3 md:w-3 bg-blue-500 scale-110"
                                                } else {
                                                    "h-2.5 w-2.5 rounded-full transition-all duration-300 md:h-3 md:w-3 bg-white/30 hover:bg-white/50"
                                                }
                                            }
                                            on:click=move |_| {
                                                carousel.update(|c| {
                                                    c.go_to(index);
                                                });
                                            }
                                            aria-label=format!("Go to video {}", index + 1)
                                        ></button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// One slide: a thumbnail until the visitor presses play, then the player.
/// Leaving the slide drops the iframe, which stops playback.
#[component]
fn Slide(index: usize, video: VideoEntry, carousel: RwSignal<Carousel>) -> impl IntoView {
    let playing = move || carousel.with(|c| c.is_active(index) && c.is_playing());
    let thumbnail = match thumbnail_url(video.id) {
        Ok(url) => url,
        Err(err) => {
            leptos::logging::warn!("carousel video {:?} unavailable: {err}", video.id);
            return view! {
                <div class="w-full min-w-full">
                    <div class="relative h-0 w-full overflow-hidden pb-[56.25%]">
                        <div class="absolute inset-0 flex h-full w-full items-center justify-center bg-black">
                            <p class="text-slate-400">"Video unavailable"</p>
                        </div>
                    </div>
                </div>
            }
            .into_any();
        }
    };
    let player_src = embed_url(video.id, &EmbedMode::Carousel { autoplay: true }).ok();

    view! {
        <div class="w-full min-w-full">
            <div class="relative h-0 w-full overflow-hidden pb-[56.25%]">
                <div class="absolute inset-0 h-full w-full bg-black">
                    <Show
                        when=playing
                        fallback=move || {
                            view! {
                                <div
                                    class="absolute inset-0 h-full w-full cursor-pointer"
                                    on:click=move |_| {
                                        carousel.update(|c| {
                                            c.go_to(index);
                                            c.play();
                                        });
                                    }
                                >
                                    <img
                                        src=thumbnail.clone()
                                        alt=format!("Thumbnail for {}", video.title)
                                        class="h-full w-full object-cover pointer-events-none"
                                        loading="lazy"
                                        draggable="false"
                                    />
                                    <div class="absolute inset-0 flex items-center justify-center bg-black/30">
                                        <div class="flex h-16 w-16 items-center justify-center rounded-full bg-blue-600 text-white transition hover:bg-blue-700 md:h-20 md:w-20">
                                            <svg viewBox="0 0 24 24" fill="currentColor" class="h-8 w-8 translate-x-0.5 md:h-10 md:w-10">
                                                <path fill-rule="evenodd" clip-rule="evenodd" d=PLAY_GLYPH />
                                            </svg>
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    >
                        <iframe
                            class="h-full w-full"
                            src=player_src.clone()
                            title=video.title
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                            allowfullscreen=true
                        ></iframe>
                    </Show>
                </div>
            </div>
        </div>
    }
    .into_any()
}
