use icons::X;
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use leptos_ui::clx;
use tw_merge::*;

mod components {
    use super::*;
    clx! {DialogHeader, div, "flex flex-col gap-1 pr-8"}
    clx! {DialogTitle, h3, "text-lg leading-none font-semibold"}
    clx! {DialogDescription, p, "text-muted-foreground text-sm"}
    clx! {DialogFooter, footer, "flex flex-col-reverse gap-2 pt-2 sm:flex-row sm:justify-end"}
}

pub use components::*;

/// Overlay modal driven by a signal. Escape and a backdrop click both call
/// `on_close`; the caller decides whether closing is allowed.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into, optional)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "relative w-full max-w-lg max-h-[85vh] overflow-y-auto rounded-xl border border-border bg-background p-5 shadow-lg",
        class
    );
    let children = StoredValue::new(children);

    let key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && open.get_untracked() {
            ev.prevent_default();
            on_close.run(());
        }
    });
    on_cleanup(move || key_handle.remove());

    view! {
        <Show when=move || open.get() fallback=|| ().into_view()>
            <div
                data-name="ModalBackdrop"
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/30 px-4"
                on:click=move |_| on_close.run(())
            >
                <div
                    data-name="ModalContent"
                    role="dialog"
                    aria-modal="true"
                    class=merged_class.clone()
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    <button
                        type="button"
                        class="absolute top-4 right-4 rounded-sm p-1 text-muted-foreground hover:text-foreground focus:outline-none focus:ring-2 focus:ring-ring [&_svg:not([class*='size-'])]:size-4"
                        aria-label="Close dialog"
                        on:click=move |_| on_close.run(())
                    >
                        <X />
                    </button>
                    {children.with_value(|c| c())}
                </div>
            </div>
        </Show>
    }
}
