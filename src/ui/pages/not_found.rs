//! 404 page for any path other than the landing page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::COPYRIGHT;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-[#020817] flex flex-col items-center justify-center p-4 text-white">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 glass-card rounded-full flex items-center justify-center bg-blue-950/40 border border-blue-500/30">
                    <Icon name=icons::MAP_PIN class="w-12 h-12 text-blue-400" />
                </div>

                <h1 class="text-6xl font-bold mb-4 bg-gradient-to-r from-white via-blue-300 to-blue-600 bg-clip-text text-transparent">
                    "404"
                </h1>
                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>
                <p class="text-blue-200/70 mb-8 max-w-md mx-auto">
                    "We couldn't locate this page. It may have moved or never existed."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-blue-600 hover:bg-blue-500 text-white font-medium rounded-full transition-colors"
                >
                    "Back to TekGeo"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-blue-200/50">{COPYRIGHT}</p>
            </div>
        </div>
    }
}
