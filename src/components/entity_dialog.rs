use crate::components::ui::{
    Button, ButtonVariant, DialogDescription, DialogFooter, DialogHeader, DialogTitle, Input, Label,
    Modal, Select, Spinner, Switch, Textarea,
};
use crate::entity::{Draft, Entity, FieldKind, FieldSpec};
use crate::state::ListView;
use leptos::prelude::*;

fn field_control<E: Entity>(list: ListView<E>, spec: FieldSpec) -> impl IntoView {
    let name = spec.name;
    let id = format!("field-{name}");
    let value = Signal::derive(move || list.draft.with(|d| Draft::get(d, name)));
    let on_value = Callback::new(move |v: String| list.set_field(name, v));

    let control = match spec.kind {
        FieldKind::LongText => view! {
            <Textarea id=id.clone() value=value on_value=on_value />
        }
        .into_any(),
        FieldKind::Flag => view! {
            <div class="flex h-9 items-center">
                <Switch
                    id=id.clone()
                    checked=Signal::derive(move || value.get() == "true")
                    on_toggle=Callback::new(move |on: bool| list.set_field(name, on.to_string()))
                />
            </div>
        }
        .into_any(),
        FieldKind::UniversityRef => {
            let options = Signal::derive(move || list.related.with(|r| E::options(&spec, r)));
            view! { <Select id=id.clone() options=options value=value on_value=on_value /> }
                .into_any()
        }
        kind => view! {
            <Input
                id=id.clone()
                name=name
                r#type=kind.input_type()
                input_mode=kind.input_mode()
                value=value
                on_value=on_value
            />
        }
        .into_any(),
    };

    let wrapper = if spec.wide {
        "space-y-1.5 sm:col-span-2"
    } else {
        "space-y-1.5"
    };

    view! {
        <div class=wrapper>
            <Label html_for=id required=spec.required>{spec.label}</Label>
            {control}
        </div>
    }
}

/// Create/edit form for one record. Every input writes exactly one named
/// field of the draft; `on_submit` decides between create and update.
#[component]
pub fn EntityDialog<E: Entity>(list: ListView<E>, #[prop(into)] on_submit: Callback<()>) -> impl IntoView {
    let on_close = Callback::new(move |_: ()| {
        if !list.saving.get_untracked() {
            list.close_dialog();
        }
    });

    let heading = move || {
        if list.editing.get() {
            format!("Edit {}", E::TITLE)
        } else {
            format!("Add {}", E::TITLE)
        }
    };

    view! {
        <Modal open=list.dialog_open on_close=on_close class="max-w-2xl">
            <form
                class="space-y-4"
                novalidate=true
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    if !list.saving.get_untracked() {
                        on_submit.run(());
                    }
                }
            >
                <DialogHeader>
                    <DialogTitle>{heading}</DialogTitle>
                    <DialogDescription>
                        {format!("Fields marked * are required for every {}.", E::NOUN)}
                    </DialogDescription>
                </DialogHeader>

                <div class="grid gap-3 sm:grid-cols-2">
                    {move || {
                        E::form_fields()
                            .iter()
                            .copied()
                            .map(|spec| field_control(list, spec))
                            .collect_view()
                    }}
                </div>

                <DialogFooter>
                    <Button
                        variant=ButtonVariant::Outline
                        attr:r#type="button"
                        attr:disabled=move || list.saving.get()
                        on:click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </Button>
                    <Button attr:r#type="submit" attr:disabled=move || list.saving.get()>
                        <span class="inline-flex items-center gap-2">
                            <Show when=move || list.saving.get() fallback=|| ().into_view()>
                                <Spinner />
                            </Show>
                            {move || if list.editing.get() { "Update" } else { "Create" }}
                        </span>
                    </Button>
                </DialogFooter>
            </form>
        </Modal>
    }
}
