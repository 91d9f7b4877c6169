use leptos::prelude::*;

use crate::core::feed::{CheckIn, CheckInStatus, RevealFeed};
use crate::ui::icon::{Icon, icons};

fn status_icon(status: CheckInStatus) -> &'static str {
    match status {
        CheckInStatus::Present => icons::CHECK,
        CheckInStatus::Late => icons::CLOCK,
        CheckInStatus::Absent => icons::X,
    }
}

/// "Live Attendance" panel: seeded check-ins appear one by one
#[component]
pub fn LiveFeed() -> impl IntoView {
    let feed = RwSignal::new(RevealFeed::check_ins());

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::feed::REVEAL_INTERVAL;
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            loop {
                TimeoutFuture::new(REVEAL_INTERVAL.as_millis() as u32).await;
                // `None` once the panel is gone or every entry is shown
                let revealed = feed.try_update(|f| f.reveal_next().is_some());
                if revealed != Some(true) {
                    break;
                }
            }
            leptos::logging::log!("live feed complete");
        });
    }

    view! {
        <div class="w-full space-y-2">
            <div class="flex items-center justify-between rounded-lg bg-gradient-to-r from-blue-600 via-blue-400 to-blue-300 p-4 backdrop-blur-sm">
                <div class="font-semibold text-white">"Live Attendance"</div>
                <div class="flex h-5 w-5 items-center justify-center rounded-full bg-blue-500 text-xs text-white">
                    {move || feed.with(|f| f.revealed())}
                </div>
            </div>
            <div class="space-y-3">
                <For
                    each=move || feed.with(|f| f.visible().to_vec())
                    key=|check_in| check_in.id
                    children=move |check_in| view! { <FeedRow check_in=check_in /> }
                />
            </div>
        </div>
    }
}

#[component]
fn FeedRow(check_in: CheckIn) -> impl IntoView {
    view! {
        <div class=format!(
            "feed-row flex items-start gap-2 rounded-lg border border-white/5 bg-gradient-to-r p-2 backdrop-blur-sm {}",
            check_in.status.row_class(),
        )>
            <div class="relative h-8 w-8 shrink-0 overflow-hidden rounded-full border border-white/10 bg-gradient-to-br from-indigo-500 to-purple-600 flex items-center justify-center text-xs text-white">
                <span>{check_in.initials}</span>
                <img
                    src=check_in.avatar
                    alt=check_in.name
                    class="absolute inset-0 h-full w-full object-cover"
                    loading="lazy"
                />
            </div>
            <div class="flex-1">
                <div class="flex items-center justify-between">
                    <p class="text-xs font-medium text-white">{check_in.name}</p>
                    <div class="flex items-center gap-1">
                        <span class=format!(
                            "flex h-4 w-4 items-center justify-center rounded-full {}",
                            check_in.status.badge_class(),
                        )>
                            <Icon name=status_icon(check_in.status) class="h-2 w-2" />
                        </span>
                        <span class="text-[10px] text-blue-200/70">{check_in.time}</span>
                    </div>
                </div>
                <div class="mt-0.5 flex items-center gap-1">
                    <span class="text-[10px] text-blue-200/70">{check_in.status.to_string()}</span>
                    <span class="text-[10px] text-blue-200/50">"•"</span>
                    <span class="text-[10px] text-blue-200/70">{check_in.location}</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::feed::SEED_CHECK_INS;
    use crate::ui::render_to_html;

    #[test]
    fn test_feed_is_empty_before_hydration() {
        let html = render_to_html(|| view! { <LiveFeed /> });
        assert!(html.contains("Live Attendance"));
        assert!(!html.contains("feed-row"));
    }

    #[test]
    fn test_row_shows_status_and_location() {
        let html = render_to_html(|| view! { <FeedRow check_in=SEED_CHECK_INS[0] /> });
        assert!(html.contains(SEED_CHECK_INS[0].name));
        assert!(html.contains(SEED_CHECK_INS[0].location));
        assert!(html.contains("Present"));
        assert!(html.contains("border-l-blue-500"));
    }
}
