use leptos::prelude::*;

#[component]
pub fn Switch(
    #[prop(into, optional)] id: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
) -> impl IntoView {
    let track = move || {
        if checked.get() {
            "bg-primary"
        } else {
            "bg-input"
        }
    };
    let thumb = move || {
        if checked.get() {
            "translate-x-4"
        } else {
            "translate-x-0"
        }
    };

    view! {
        <button
            type="button"
            role="switch"
            data-name="Switch"
            id=id
            aria-checked=move || checked.get().to_string()
            class=move || format!(
                "inline-flex h-5 w-9 shrink-0 items-center rounded-full p-0.5 transition-colors {}",
                track()
            )
            on:click=move |_| on_toggle.run(!checked.get_untracked())
        >
            <span class=move || format!(
                "block size-4 rounded-full bg-background shadow-sm transition-transform {}",
                thumb()
            ) />
        </button>
    }
}
