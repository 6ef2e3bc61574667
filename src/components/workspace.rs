use crate::api::{ApiClient, EntityApi};
use crate::components::ui::{Alert, AlertDescription, Button, Input, Spinner};
use crate::components::{EntityDialog, EntityTable, StatCards};
use crate::entity::Entity;
use crate::state::{AppContext, ListView};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Full list page body for one resource: stats, search, table and dialog.
///
/// The caller owns `list` so it can narrow `list.scope`; any scope change
/// triggers a refetch here.
#[component]
pub fn EntityWorkspace<E: Entity>(list: ListView<E>) -> impl IntoView
where
    ApiClient: EntityApi<E>,
{
    let app_state = expect_context::<AppContext>();
    let api = app_state.0.api_client;

    Effect::new(move |_| {
        list.scope.track();
        spawn_local(async move {
            let client = api.get_untracked();
            list.refresh(&client).await;
        });
    });

    // Cross-references load once, alongside the first fetch.
    spawn_local(async move {
        let client = api.get_untracked();
        list.load_related(&client).await;
    });

    let on_submit = Callback::new(move |_: ()| {
        spawn_local(async move {
            let client = api.get_untracked();
            list.save(&client).await;
        });
    });

    let on_edit = Callback::new(move |record: E| list.open_dialog(Some(&record)));

    let on_delete = Callback::new(move |id: i64| {
        spawn_local(async move {
            let client = api.get_untracked();
            list.delete(&client, id, |prompt| {
                window().confirm_with_message(prompt).unwrap_or(false)
            })
            .await;
        });
    });

    let stats = Signal::derive(move || list.stats());
    let subtitle = move || {
        let shown = list.filtered().len();
        let total = list.records.with(Vec::len);
        if shown == total {
            format!("{total} {}", E::PLURAL)
        } else {
            format!("{shown} of {total} {}", E::PLURAL)
        }
    };

    view! {
        <div class="space-y-4">
            <div class="flex flex-wrap items-end justify-between gap-3">
                <div class="space-y-1">
                    <h1 class="text-xl font-semibold">{E::HEADING}</h1>
                    <div class="text-xs text-muted-foreground">{subtitle}</div>
                </div>
                <Button on:click=move |_| list.open_dialog(None)>
                    <span class="text-base leading-none">"+"</span>
                    {format!("Add {}", E::TITLE)}
                </Button>
            </div>

            <StatCards stats=stats />

            <div class="flex items-center gap-2">
                <span class="sr-only">"Search"</span>
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="16"
                    height="16"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class="shrink-0 text-muted-foreground"
                    aria-hidden="true"
                >
                    <circle cx="11" cy="11" r="8"></circle>
                    <path d="m21 21-4.3-4.3"></path>
                </svg>
                <Input
                    r#type="search"
                    placeholder=E::SEARCH_HINT
                    class="max-w-md"
                    value=list.search
                    on_value=Callback::new(move |v: String| list.search.set(v))
                />
            </div>

            <Show when=move || list.error.get().is_some() fallback=|| ().into_view()>
                {move || list.error.get().map(|e| view! {
                    <Alert class="border-destructive/30">
                        <AlertDescription class="text-destructive">{e}</AlertDescription>
                    </Alert>
                })}
            </Show>

            <Show
                when=move || !(list.loading.get() && list.records.with(Vec::is_empty))
                fallback=|| view! {
                    <div class="flex items-center gap-2 py-8 text-sm text-muted-foreground">
                        <Spinner />
                        "Loading…"
                    </div>
                }
            >
                <EntityTable list=list on_edit=on_edit on_delete=on_delete />
            </Show>

            <EntityDialog list=list on_submit=on_submit />
        </div>
    }
}
