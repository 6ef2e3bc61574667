use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::entity::{Cell, Entity, Tone};
use crate::state::ListView;
use crate::util::{avatar_color, initial};
use leptos::prelude::*;

#[component]
pub fn Avatar(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <span
            class="inline-flex size-8 shrink-0 items-center justify-center rounded-full text-xs font-semibold text-white"
            style=format!("background-color: {}", avatar_color(&label))
            aria-hidden="true"
        >
            {initial(&label)}
        </span>
    }
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Plain => "",
        Tone::Muted => "text-muted-foreground",
        Tone::Positive => "rounded-full bg-emerald-100 px-2 py-0.5 text-xs font-medium text-emerald-800",
        Tone::Negative => "rounded-full bg-zinc-100 px-2 py-0.5 text-xs font-medium text-zinc-600",
    }
}

fn render_cell(cell: Cell) -> impl IntoView {
    let class = tone_class(cell.tone);
    let text = match cell.href {
        Some(href) => view! {
            <a class="font-medium text-primary underline-offset-4 hover:underline" href=href>
                {cell.text}
            </a>
        }
        .into_any(),
        None => view! { <span class=class>{cell.text}</span> }.into_any(),
    };

    view! {
        <div class="min-w-0">
            <div class="truncate">{text}</div>
            {cell.detail.map(|d| view! { <div class="truncate text-xs text-muted-foreground">{d}</div> })}
        </div>
    }
}

/// Table of the filtered records with per-row edit and delete actions.
#[component]
pub fn EntityTable<E: Entity>(
    list: ListView<E>,
    #[prop(into)] on_edit: Callback<E>,
    #[prop(into)] on_delete: Callback<i64>,
) -> impl IntoView {
    let headers = E::columns()
        .iter()
        .map(|c| view! { <th class="px-3 py-2 font-medium">{*c}</th> })
        .collect_view();
    let span = (E::columns().len() + 1).to_string();

    view! {
        <div class="overflow-x-auto rounded-xl border border-border">
            <table class="w-full text-sm">
                <thead class="bg-muted/50 text-left text-xs text-muted-foreground">
                    <tr>
                        {headers}
                        <th class="px-3 py-2 text-right font-medium">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let related = list.related.get();
                        let rows = list.filtered();

                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan=span.clone() class="px-3 py-8 text-center text-muted-foreground">
                                        {format!("No {} found.", E::PLURAL)}
                                    </td>
                                </tr>
                            }
                            .into_any();
                        }

                        rows.into_iter()
                            .map(|record| {
                                let id = record.id();
                                let label = record.label();
                                let mut cells = record.cells(&related).into_iter();
                                let first = cells.next().map(render_cell);
                                let rest = cells
                                    .map(|c| view! { <td class="px-3 py-2 align-middle">{render_cell(c)}</td> })
                                    .collect_view();

                                view! {
                                    <tr class="border-t border-border hover:bg-surface-hover">
                                        <td class="px-3 py-2">
                                            <div class="flex items-center gap-3">
                                                <Avatar label=label.clone() />
                                                {first}
                                            </div>
                                        </td>
                                        {rest}
                                        <td class="px-3 py-2">
                                            <div class="flex justify-end gap-1">
                                                <Button
                                                    variant=ButtonVariant::Ghost
                                                    size=ButtonSize::Icon
                                                    attr:title=format!("Edit {label}")
                                                    on:click=move |_| on_edit.run(record.clone())
                                                >
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
                                                        class="text-muted-foreground"
                                                        aria-hidden="true"
                                                    >
                                                        <path d="M12 20h9" />
                                                        <path d="M16.5 3.5a2.121 2.121 0 0 1 3 3L7 19l-4 1 1-4Z" />
                                                    </svg>
                                                </Button>
                                                <Button
                                                    variant=ButtonVariant::Ghost
                                                    size=ButtonSize::Icon
                                                    attr:title=format!("Delete {}", E::NOUN)
                                                    on:click=move |_| on_delete.run(id)
                                                >
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
                                                        class="text-destructive"
                                                        aria-hidden="true"
                                                    >
                                                        <path d="M3 6h18" />
                                                        <path d="M8 6V4h8v2" />
                                                        <path d="M19 6l-1 14H6L5 6" />
                                                    </svg>
                                                </Button>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}
