use crate::components::ui::{Card, CardContent};
use crate::entity::Stat;
use leptos::prelude::*;

#[component]
pub fn StatCards(#[prop(into)] stats: Signal<Vec<Stat>>) -> impl IntoView {
    view! {
        <div class="grid gap-3 sm:grid-cols-2 lg:grid-cols-4">
            {move || {
                stats
                    .get()
                    .into_iter()
                    .map(|s| {
                        view! {
                            <Card class="py-4">
                                <CardContent class="space-y-1 px-4">
                                    <div class="text-xs font-medium text-muted-foreground">{s.label}</div>
                                    <div class="text-2xl font-semibold" style=format!("color: {}", s.color)>
                                        {s.value}
                                    </div>
                                    <div class="text-xs text-muted-foreground">{s.caption}</div>
                                </CardContent>
                            </Card>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
