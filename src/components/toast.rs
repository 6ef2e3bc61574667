use crate::state::{AppContext, Severity, NOTIFICATION_TIMEOUT};
use icons::X;
use leptos::prelude::*;
use leptos_dom::helpers::set_timeout;

/// The single notification slot, pinned bottom-right.
#[component]
pub fn Toast() -> impl IntoView {
    let notifier = expect_context::<AppContext>().0.notifier;

    // Each new notification arms its own timer; `expire` ignores stale ones.
    Effect::new(move |_| {
        if let Some(n) = notifier.current() {
            let seq = n.seq;
            set_timeout(move || notifier.expire(seq), NOTIFICATION_TIMEOUT);
        }
    });

    view! {
        {move || notifier.current().map(|n| {
            let tone = match n.severity {
                Severity::Success => "border-emerald-600/30 bg-emerald-50 text-emerald-900",
                Severity::Error => "border-destructive/30 bg-red-50 text-destructive",
            };
            let role = if n.severity == Severity::Error { "alert" } else { "status" };
            view! {
                <div
                    data-name="Toast"
                    data-severity=n.severity.to_string()
                    role=role
                    class=format!(
                        "fixed bottom-4 right-4 z-[60] flex max-w-sm items-start gap-3 rounded-md border px-4 py-3 text-sm shadow-lg {tone}"
                    )
                >
                    <span class="min-w-0 flex-1">{n.message}</span>
                    <button
                        type="button"
                        class="shrink-0 opacity-70 hover:opacity-100 [&_svg]:size-4"
                        aria-label="Dismiss"
                        on:click=move |_| notifier.dismiss()
                    >
                        <X />
                    </button>
                </div>
            }
        })}
    }
}
