use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use wasm_bindgen::JsCast;

/// Full-screen dialog with a dimmed backdrop.
///
/// Escape and clicks on the backdrop call `on_close`. Children are only
/// mounted while the dialog is open, so embedded players stop on close.
#[component]
pub fn Dialog(
    /// Whether the dialog is open
    is_open: Signal<bool>,
    /// Callback to close the dialog
    on_close: Callback<()>,
    /// Dialog content
    children: ChildrenFn,
    /// Size classes of the content panel
    #[prop(into, default = Signal::stored("max-w-6xl w-[90vw] h-[80vh]"))]
    panel_class: Signal<&'static str>,
    /// Accessible label of the close button
    #[prop(default = "Close")]
    close_label: &'static str,
) -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "dialog-backdrop fixed inset-0 z-[120] flex items-center justify-center bg-black/80 transition-opacity duration-300"
                } else {
                    "dialog-backdrop fixed inset-0 z-[120] flex items-center justify-center bg-black/80 opacity-0 pointer-events-none transition-opacity duration-300"
                }
            }
            role="dialog"
            aria-modal="true"
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    if let Some(element) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                        if element.class_list().contains("dialog-backdrop") {
                            on_close.run(());
                        }
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = e;
                }
            }
        >
            <div class=move || format!("relative p-0 bg-black rounded-lg overflow-hidden {}", panel_class.get())>
                <button
                    class="absolute top-2 right-2 z-50 p-2 bg-black/60 hover:bg-black/80 rounded-full transition-colors"
                    on:click=move |_| on_close.run(())
                    aria-label=close_label
                >
                    <Icon name=icons::X class="w-6 h-6 text-white" />
                </button>
                <Show when=move || is_open.get()>
                    {children()}
                </Show>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::render_to_html;

    #[test]
    fn test_closed_dialog_hides_children() {
        let html = render_to_html(|| {
            view! {
                <Dialog is_open=Signal::stored(false) on_close=Callback::new(|_| {})>
                    <p>"secret player"</p>
                </Dialog>
            }
        });

        assert!(html.contains("pointer-events-none"));
        assert!(!html.contains("secret player"));
    }

    #[test]
    fn test_open_dialog_renders_children() {
        let html = render_to_html(|| {
            view! {
                <Dialog is_open=Signal::stored(true) on_close=Callback::new(|_| {}) close_label="Close video">
                    <p>"secret player"</p>
                </Dialog>
            }
        });

        assert!(html.contains("secret player"));
        assert!(html.contains("Close video"));
    }
}
