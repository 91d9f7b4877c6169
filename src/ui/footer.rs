//! Page footer: contact details, link columns, newsletter signup and the
//! TEKGEO wordmark

use leptos::prelude::*;

use crate::core::content::{
    CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, COPYRIGHT, FOOTER_COLUMNS, SOCIAL_LINKS,
};
use crate::core::motion::stagger_delay;
use crate::core::newsletter::{EmailAddress, acknowledgement};
use crate::ui::icon::{Icon, icons};
use crate::ui::logo::Logo;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contact" class="relative overflow-hidden bg-black">
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_top_right,_#1a1a3a,_transparent_50%)] opacity-30"></div>
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_bottom_left,_#0f172a,_transparent_50%)] opacity-20"></div>

            <div class="relative z-10 mx-auto max-w-7xl px-4 pt-16 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 gap-10 pb-16 md:grid-cols-2 lg:grid-cols-5">
                    <div class="lg:col-span-2 landing-scroll-animate">
                        <div class="mb-4 flex items-center">
                            <Logo />
                        </div>
                        <p class="mb-6 max-w-md text-blue-200/80">
                            "Revolutionizing attendance tracking with geolocation technology. Empower your distributed teams with accurate, real-time attendance management across the globe."
                        </p>
                        <div class="mb-8 space-y-3">
                            <ContactLine icon=icons::MAP_PIN text=CONTACT_ADDRESS />
                            <ContactLine icon=icons::MAIL text=CONTACT_EMAIL />
                            <ContactLine icon=icons::PHONE text=CONTACT_PHONE />
                        </div>
                        <div class="flex space-x-4">
                            {SOCIAL_LINKS
                                .into_iter()
                                .map(|(icon, label)| {
                                    view! {
                                        <a
                                            href="#"
                                            aria-label=label
                                            class="flex h-8 w-8 items-center justify-center rounded-full bg-blue-950/50 text-blue-400 transition hover:bg-blue-900/50 hover:text-white"
                                        >
                                            <Icon name=icon class="h-4 w-4" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    {FOOTER_COLUMNS
                        .into_iter()
                        .enumerate()
                        .map(|(index, column)| {
                            view! {
                                <div
                                    class="landing-scroll-animate"
                                    style=format!("transition-delay: {}s", stagger_delay(index, 0.1))
                                >
                                    <h3 class="mb-4 text-sm font-semibold uppercase tracking-wider text-blue-400">
                                        {column.title}
                                    </h3>
                                    <ul class="space-y-3">
                                        {column
                                            .links
                                            .iter()
                                            .map(|link| {
                                                view! {
                                                    <li>
                                                        <a href="#" class="text-blue-200/80 transition hover:text-white">
                                                            {*link}
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <NewsletterForm />

                <div class="py-3 text-center">
                    <h2 class="bg-gradient-to-b from-white via-blue-500 to-blue-700 bg-clip-text text-transparent font-bold tracking-tight text-6xl sm:text-7xl md:text-8xl lg:text-9xl">
                        "TEKGEO"
                    </h2>
                </div>

                <div class="border-t border-blue-900/30 py-8">
                    <div class="flex flex-col items-center justify-center text-center md:flex-row md:justify-between">
                        <div class="flex flex-col sm:flex-row items-center gap-4 text-sm">
                            <span class="text-sm text-blue-200/60">{COPYRIGHT}</span>
                            <div class="hidden sm:block h-4 w-px bg-blue-900/50"></div>
                            <a href="#" class="text-sm text-blue-200/60 hover:text-white">"Privacy Policy"</a>
                            <div class="hidden sm:block h-4 w-px bg-blue-900/50"></div>
                            <a href="#" class="text-sm text-blue-200/60 hover:text-white">"Terms of Service"</a>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn ContactLine(icon: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center">
            <Icon name=icon class="mr-3 h-5 w-5 shrink-0 text-blue-500" />
            <span class="text-sm text-blue-200/80">{text}</span>
        </div>
    }
}

/// Newsletter signup. Addresses are checked and acknowledged locally,
/// nothing leaves the browser.
#[component]
fn NewsletterForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let confirmation = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match EmailAddress::parse(&email.get_untracked()) {
            Ok(address) => {
                confirmation.set(Some(acknowledgement(&address)));
                error.set(None);
                email.set(String::new());
            }
            Err(err) => {
                error.set(Some(err.to_string()));
                confirmation.set(None);
            }
        }
    };

    view! {
        <div class="mb-12">
            <form
                on:submit=on_submit
                novalidate=true
                class="flex flex-col items-start justify-end gap-2 sm:flex-row sm:items-center"
            >
                <label for="newsletter-email" class="text-sm mr-6 font-medium text-blue-200/80">
                    "Subscribe to our newsletter"
                </label>
                <input
                    type="email"
                    id="newsletter-email"
                    name="email"
                    autocomplete="email"
                    placeholder="Enter your email"
                    class="w-full sm:w-64 rounded-md sm:rounded-r-none border border-blue-900/30 bg-blue-950/30 px-3 py-2 text-sm text-white placeholder:text-blue-200/40 focus:outline-none focus:ring-2 focus:ring-blue-500"
                    class:border-red-500=move || error.get().is_some()
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        email.set(event_target_value(&ev));
                        error.set(None);
                    }
                />
                <button
                    type="submit"
                    class="w-full sm:w-auto rounded-md sm:rounded-l-none bg-blue-600 px-4 py-2 text-sm font-medium text-white hover:bg-blue-700"
                >
                    "Subscribe"
                </button>
            </form>
            {move || {
                error.get().map(|error| view! { <p class="mt-2 text-sm text-red-400 sm:text-right">{error}</p> })
            }}
            {move || {
                confirmation
                    .get()
                    .map(|message| view! { <p class="mt-2 text-sm text-green-400 sm:text-right">{message}</p> })
            }}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::render_to_html;

    #[test]
    fn test_footer_contact_details() {
        let html = render_to_html(|| view! { <Footer /> });
        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains(CONTACT_EMAIL));
        assert!(html.contains(CONTACT_PHONE));
        assert!(html.contains("TEKGEO"));
    }

    #[test]
    fn test_footer_columns_and_social_links() {
        let html = render_to_html(|| view! { <Footer /> });
        for column in FOOTER_COLUMNS {
            assert!(html.contains(column.title));
            for link in column.links {
                assert!(html.contains(link), "{link}");
            }
        }
        for (_, label) in SOCIAL_LINKS {
            assert!(html.contains(&format!(r#"aria-label="{label}""#)));
        }
    }

    #[test]
    fn test_newsletter_form_starts_without_messages() {
        let html = render_to_html(|| view! { <NewsletterForm /> });
        assert!(html.contains("Subscribe to our newsletter"));
        assert!(!html.contains("text-red-400"));
        assert!(!html.contains("is on the list"));
    }
}
