//! Showcase video: muted preview while on screen, full player in a dialog.
//! The player API script itself is requested from the page head.

use leptos::html;
use leptos::prelude::*;

use crate::core::video::{EmbedMode, SHOWCASE_VIDEO_ID, embed_url, thumbnail_url};
use crate::ui::icon::{Icon, icons};
use crate::ui::modal::Dialog;
use crate::ui::viewport::{use_in_view, use_is_mobile};

/// Share of the player that must be visible before the preview starts
const IN_VIEW_AMOUNT: f64 = 0.25;

#[component]
pub fn VideoSection(
    #[prop(default = SHOWCASE_VIDEO_ID)] video_id: &'static str,
    #[prop(default = "See TekGeo in Action")] title: &'static str,
    #[prop(default = "See how our advanced AI solutions are transforming industries and creating new possibilities.")]
    description: &'static str,
) -> impl IntoView {
    let thumbnail = match thumbnail_url(video_id) {
        Ok(url) => url,
        Err(err) => {
            leptos::logging::warn!("showcase video {video_id:?} unavailable: {err}");
            return view! {
                <section class="relative w-full py-20 bg-[#010510] overflow-hidden">
                    <div class="container mx-auto px-4">
                        <div class="relative w-full max-w-4xl mx-auto aspect-video rounded-xl glass-card flex items-center justify-center">
                            <p class="text-slate-400">"Video unavailable"</p>
                        </div>
                    </div>
                </section>
            }
            .into_any();
        }
    };

    let player_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(player_ref, IN_VIEW_AMOUNT);
    let is_mobile = use_is_mobile();
    let loading = RwSignal::new(true);
    let open = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        use crate::core::video::PREVIEW_REVEAL_DELAY;
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        if in_view.get() {
            spawn_local(async move {
                TimeoutFuture::new(PREVIEW_REVEAL_DELAY.as_millis() as u32).await;
                if in_view.get_untracked() {
                    loading.set(false);
                }
            });
        }
    });

    let preview_src = move || {
        let origin = window().location().origin().unwrap_or_default();
        embed_url(video_id, &EmbedMode::Preview { origin }).ok()
    };
    let full_src = embed_url(video_id, &EmbedMode::Full).ok();
    let panel_class = Signal::derive(move || {
        if is_mobile.get() {
            "max-w-[95vw] w-full h-auto aspect-[9/16]"
        } else {
            "max-w-6xl w-[90vw] h-[80vh]"
        }
    });

    view! {
        <section class="relative w-full py-20 bg-[#010510] overflow-hidden">
            <div class="container mx-auto px-4">
                <div class="max-w-3xl mx-auto mb-10 landing-scroll-animate">
                    <h2 class="text-3xl md:text-4xl font-bold text-gradient-blue mb-4">{title}</h2>
                    <p class="text-lg text-slate-400 mb-8">{description}</p>
                </div>

                <div
                    node_ref=player_ref
                    class="relative w-full max-w-4xl mx-auto aspect-video rounded-xl overflow-hidden glass-card hover:border-2 hover:border-blue-400"
                >
                    <Show when=move || loading.get()>
                        <div class="absolute inset-0 bg-black/80 flex items-center justify-center">
                            <img src=thumbnail.clone() alt="Video thumbnail" class="w-full h-full object-cover opacity-60" />
                            <div class="absolute inset-0 flex items-center justify-center">
                                <div class="h-16 w-16 rounded-full bg-blue-600/20 animate-pulse"></div>
                            </div>
                        </div>
                    </Show>

                    <Show when=move || in_view.get()>
                        <iframe
                            src=preview_src
                            title="Silent preview video"
                            class=move || {
                                if loading.get() {
                                    "absolute inset-0 w-full h-full transition-opacity duration-500 opacity-0"
                                } else {
                                    "absolute inset-0 w-full h-full transition-opacity duration-500 opacity-100"
                                }
                            }
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                            allowfullscreen=true
                        ></iframe>
                    </Show>

                    <button
                        on:click=move |_| open.set(true)
                        aria-label="Open full video"
                        class="absolute bottom-4 right-4 p-2 bg-blue-600 rounded-full hover:bg-blue-500 transition-colors z-10 group"
                    >
                        <Icon name=icons::MAXIMIZE class="w-6 h-6 text-white group-hover:scale-110 transition-transform" />
                    </button>
                </div>
            </div>

            <Dialog
                is_open=open.into()
                on_close=Callback::new(move |_| open.set(false))
                panel_class=panel_class
                close_label="Close video"
            >
                <iframe
                    src=full_src.clone()
                    title="YouTube video player"
                    class="w-full h-full"
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                    allowfullscreen=true
                ></iframe>
            </Dialog>
        </section>
    }
    .into_any()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::render_to_html;

    #[test]
    fn test_server_render_shows_thumbnail_only() {
        let html = render_to_html(|| view! { <VideoSection /> });
        assert!(html.contains("img.youtube.com/vi/AlnYmT22_Mg/maxresdefault.jpg"));
        assert!(!html.contains("Silent preview video"));
        assert!(html.contains("See TekGeo in Action"));
    }

    #[test]
    fn test_invalid_video_id_renders_placeholder() {
        let html = render_to_html(|| view! { <VideoSection video_id="nope" /> });
        assert!(html.contains("Video unavailable"));
        assert!(!html.contains("<iframe"));
    }
}
