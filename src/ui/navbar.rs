//! Fixed navigation bar with desktop dropdowns and a full-screen mobile menu

use leptos::prelude::*;

use crate::core::nav::{DEFAULT_NUB_LEFT, NAV_ITEMS, NavItem, NavState};
use crate::ui::icon::{Icon, icons};
use crate::ui::logo::BrandMark;

fn trigger_id(index: usize) -> String {
    format!("dropdown-trigger-{index}")
}

fn content_id(index: usize) -> String {
    format!("dropdown-content-{index}")
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let nub_left = RwSignal::new(DEFAULT_NUB_LEFT);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{mousedown, scroll};
        use wasm_bindgen::JsCast;

        let update_scroll = move || {
            let y = window().scroll_y().unwrap_or(0.0);
            let mut next = nav.get_untracked();
            if next.set_scroll(y) {
                nav.set(next);
            }
        };
        update_scroll();
        let handle_scroll = window_event_listener(scroll, move |_| update_scroll());

        // Clicks outside the open dropdown and its trigger close it
        let handle_mousedown = window_event_listener(mousedown, move |ev| {
            let Some(open) = nav.with_untracked(|n| n.active_dropdown()) else {
                return;
            };
            if nav.with_untracked(|n| n.menu_open()) {
                return;
            }
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let document = document();
            let inside = [trigger_id(open), content_id(open)].iter().any(|id| {
                document
                    .get_element_by_id(id)
                    .is_some_and(|el| el.contains(target.as_ref()))
            });
            if !inside {
                nav.update(|n| n.close_dropdown());
            }
        });

        on_cleanup(move || {
            drop(handle_scroll);
            drop(handle_mousedown);
        });

        // Lock page scroll behind the mobile menu
        Effect::new(move |_| {
            let open = nav.with(|n| n.menu_open());
            if let Some(body) = document().body() {
                let _ = body
                    .style()
                    .set_property("overflow", if open { "hidden" } else { "" });
            }
        });

        // Point the nub at the trigger once the dropdown is in the DOM
        Effect::new(move |_| {
            let Some(open) = nav.with(|n| n.active_dropdown()) else {
                return;
            };
            request_animation_frame(move || {
                let document = document();
                let trigger = document.get_element_by_id(&trigger_id(open));
                let content = document.get_element_by_id(&content_id(open));
                if let (Some(trigger), Some(content)) = (trigger, content) {
                    let t = trigger.get_bounding_client_rect();
                    let c = content.get_bounding_client_rect();
                    nub_left.set(crate::core::nav::nub_left(t.left(), t.width(), c.left()));
                }
            });
        });
    }

    view! {
        <nav class=move || {
            if nav.with(|n| n.scrolled()) {
                "fixed top-0 left-0 right-0 z-[100] transition-all duration-300 ease-in-out bg-blue-950/70 backdrop-blur-md border-b border-blue-900/30 py-3"
            } else {
                "fixed top-0 left-0 right-0 z-[100] transition-all duration-300 ease-in-out bg-transparent py-5"
            }
        }>
            <div class="container mx-auto px-4 md:px-6 flex items-center justify-between">
                <BrandMark />

                <div class="hidden md:flex items-center space-x-8">
                    {NAV_ITEMS
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            view! { <DesktopItem index=index item=item nav=nav nub_left=nub_left /> }
                        })
                        .collect_view()}
                </div>

                <div class="hidden md:flex">
                    <a
                        href="#contact"
                        class="px-5 py-2 rounded-full bg-gradient-to-r from-blue-600 to-indigo-600 text-white hover:shadow-lg hover:shadow-blue-600/30 transition-all duration-300 text-sm font-medium"
                    >
                        "Get Started"
                    </a>
                </div>

                <button
                    class=move || {
                        if nav.with(|n| n.menu_open()) {
                            "md:hidden p-2 z-[110] relative text-white bg-blue-600 rounded-full"
                        } else {
                            "md:hidden p-2 z-[110] relative text-white"
                        }
                    }
                    on:click=move |_| nav.update(|n| n.toggle_menu())
                    aria-label="Toggle menu"
                >
                    {move || {
                        if nav.with(|n| n.menu_open()) {
                            view! { <Icon name=icons::X class="h-6 w-6" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::MENU class="h-6 w-6" /> }.into_any()
                        }
                    }}
                </button>
            </div>

            <Show when=move || nav.with(|n| n.menu_open())>
                <MobileMenu nav=nav />
            </Show>
        </nav>
    }
}

#[component]
fn DesktopItem(
    index: usize,
    item: NavItem,
    nav: RwSignal<NavState>,
    nub_left: RwSignal<f64>,
) -> impl IntoView {
    if !item.has_dropdown() {
        return view! {
            <div class="relative">
                <a href=item.href class="text-sm transition-all duration-200 hover:text-white text-gray-300">
                    {item.label}
                </a>
            </div>
        }
        .into_any();
    }

    let is_open = move || nav.with(|n| n.is_open(index));
    let enter_offset = move || {
        nav.with(|n| n.direction()).map_or(0, |d| d.enter_offset())
    };

    view! {
        <div class="relative">
            <button
                id=trigger_id(index)
                class="text-sm transition-all duration-200 hover:text-white flex items-center text-gray-300"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| nav.update(|n| n.toggle_dropdown(index))
            >
                {item.label}
                <span class="ml-1 inline-flex transition-transform" class=("rotate-180", is_open)>
                    <Icon name=icons::CHEVRON_DOWN class="h-4 w-4" />
                </span>
            </button>

            <Show when=is_open>
                <div class="relative">
                    <div
                        id=content_id(index)
                        class="nav-dropdown absolute left-0 top-[calc(100%_+_12px)] w-80 rounded-lg bg-blue-950/80 backdrop-blur-md border border-blue-500/20 p-4 shadow-xl shadow-blue-900/20"
                    >
                        <div
                            class="absolute -top-[6px] w-3 h-3 rotate-45 bg-blue-950/80 border-l border-t border-blue-500/20"
                            style:left=move || format!("{}px", nub_left.get())
                            style:clip-path="polygon(0 0, 100% 0, 50% 50%, 0% 100%)"
                        ></div>
                        <div
                            class="nav-dropdown-slide"
                            style=move || format!("--nav-enter: {}px", enter_offset())
                        >
                            <div class="grid gap-3">
                                {item
                                    .dropdown
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                class="block p-2 hover:bg-blue-600/10 rounded-md transition-colors duration-200"
                                                on:click=move |_| nav.update(|n| n.close_dropdown())
                                            >
                                                <h3 class="text-white text-sm font-medium">{link.title}</h3>
                                                <p class="text-gray-400 text-xs mt-1">{link.description}</p>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="mt-3 pt-2 border-t border-blue-500/20">
                                <a
                                    href=item.href
                                    class="flex items-center text-blue-400 text-sm hover:text-blue-300 transition-colors"
                                    on:click=move |_| nav.update(|n| n.close_dropdown())
                                >
                                    <span>"View all " {item.label}</span>
                                    <Icon name=icons::CHEVRON_RIGHT class="ml-1 h-4 w-4" />
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
    .into_any()
}

#[component]
fn MobileMenu(nav: RwSignal<NavState>) -> impl IntoView {
    view! {
        <div
            class="mobile-menu fixed top-0 left-0 right-0 bottom-0 z-[105] bg-gradient-to-br from-blue-950 to-black overflow-y-auto"
            style="height: 100vh;"
        >
            <div class="pt-20 pb-10 container mx-auto px-4">
                <div class="space-y-4">
                    {NAV_ITEMS
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            if item.has_dropdown() {
                                let is_open = move || nav.with(|n| n.is_open(index));
                                view! {
                                    <div class="mb-4">
                                        <div
                                            class="flex items-center justify-between py-3 text-white text-lg font-medium border-b border-blue-800/30 cursor-pointer"
                                            on:click=move |_| nav.update(|n| n.toggle_section(index))
                                        >
                                            {item.label}
                                            <span class="inline-flex transition-transform" class=("rotate-180", is_open)>
                                                <Icon name=icons::CHEVRON_DOWN class="h-5 w-5" />
                                            </span>
                                        </div>
                                        <Show when=is_open>
                                            <div class="pl-4 mt-2 space-y-3 overflow-hidden">
                                                {item
                                                    .dropdown
                                                    .iter()
                                                    .map(|link| {
                                                        view! {
                                                            <a
                                                                href=link.href
                                                                class="block py-2"
                                                                on:click=move |_| nav.update(|n| n.follow_link())
                                                            >
                                                                <h3 class="text-white text-base font-medium">{link.title}</h3>
                                                                <p class="text-gray-400 text-sm mt-1">{link.description}</p>
                                                            </a>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </Show>
                                    </div>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <a
                                        href=item.href
                                        class="block py-3 text-white text-lg font-medium border-b border-blue-800/30"
                                        on:click=move |_| nav.update(|n| n.follow_link())
                                    >
                                        {item.label}
                                    </a>
                                }
                                .into_any()
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mt-8">
                    <a
                        href="#contact"
                        class="block w-full text-center px-5 py-3 rounded-full bg-gradient-to-r from-blue-600 to-indigo-600 text-white font-medium"
                        on:click=move |_| nav.update(|n| n.follow_link())
                    >
                        "Get Started"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::render_to_html;

    #[test]
    fn test_navbar_renders_every_item() {
        let html = render_to_html(|| view! { <Navbar /> });
        for item in NAV_ITEMS {
            assert!(html.contains(item.label), "{}", item.label);
        }
        assert!(html.contains("dropdown-trigger-0"));
        assert!(html.contains("Get Started"));
    }

    #[test]
    fn test_dropdowns_start_closed() {
        let html = render_to_html(|| view! { <Navbar /> });
        assert!(!html.contains("dropdown-content-"));
        assert!(html.contains("bg-transparent"));
    }
}
