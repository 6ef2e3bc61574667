use crate::api::EntityApi;
use crate::components::ui::{Alert, AlertDescription, Card, CardContent, CardHeader, CardTitle, Spinner};
use crate::components::Avatar;
use crate::entity::{Entity, UNKNOWN_UNIVERSITY};
use crate::models::{Course, University};
use crate::state::AppContext;
use crate::util::format_money;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone, Debug)]
pub struct RecordRouteParams {
    pub id: Option<i64>,
}

fn detail_row(label: &'static str, value: Option<String>) -> impl IntoView {
    let value = value.filter(|v| !v.trim().is_empty());
    let class = if value.is_none() {
        "col-span-2 text-muted-foreground"
    } else {
        "col-span-2"
    };
    view! {
        <div class="grid grid-cols-3 gap-2 py-1.5 text-sm">
            <dt class="text-muted-foreground">{label}</dt>
            <dd class=class>
                {value.unwrap_or_else(|| "—".to_string())}
            </dd>
        </div>
    }
}

fn chips(items: Vec<String>) -> impl IntoView {
    if items.is_empty() {
        return view! { <span class="text-sm text-muted-foreground">"—"</span> }.into_any();
    }
    view! {
        <div class="flex flex-wrap gap-1">
            {items
                .into_iter()
                .map(|item| view! {
                    <span class="rounded-full border border-border px-2 py-0.5 text-xs">{item}</span>
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

fn loading_block() -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 py-8 text-sm text-muted-foreground">
            <Spinner />
            "Loading…"
        </div>
    }
}

fn error_block(message: String) -> impl IntoView {
    view! {
        <Alert class="border-destructive/30">
            <AlertDescription class="text-destructive">{message}</AlertDescription>
        </Alert>
    }
}

#[component]
pub fn UniversityDetailPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let params = use_params::<RecordRouteParams>();
    let record_id = move || params.get().ok().and_then(|p| p.id);

    let record: RwSignal<Option<University>> = RwSignal::new(None);
    let courses: RwSignal<Vec<Course>> = RwSignal::new(vec![]);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(true);

    Effect::new(move |_| {
        let Some(id) = record_id() else {
            error.set(Some("Invalid university id".to_string()));
            loading.set(false);
            return;
        };

        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let api = app_state.0.api_client.get_untracked();
            match EntityApi::<University>::get(&api, id).await {
                Ok(u) => record.set(Some(u)),
                Err(e) => {
                    tracing::warn!(id, error = %e, "university fetch failed");
                    record.set(None);
                    error.set(Some(e.user_message("Failed to fetch university")));
                }
            }
            match api.list_courses_by_university(id).await {
                Ok(list) => courses.set(list),
                Err(e) => {
                    tracing::warn!(id, error = %e, "university courses fetch failed");
                    courses.set(vec![]);
                }
            }
            loading.set(false);
        });
    });

    view! {
        <div class="space-y-4">
            <a href="/universities" class="text-xs text-muted-foreground hover:underline">"← Universities"</a>

            {move || {
                if loading.get() {
                    return loading_block().into_any();
                }
                if let Some(message) = error.get() {
                    return error_block(message).into_any();
                }
                let Some(u) = record.get() else {
                    return ().into_any();
                };

                let scoped_href = format!("/courses?university={}", u.id);
                let website = u.website.clone().filter(|w| !w.trim().is_empty());

                view! {
                    <div class="flex items-center gap-3">
                        <Avatar label=u.name.clone() />
                        <div class="min-w-0">
                            <h1 class="truncate text-xl font-semibold">{u.name.clone()}</h1>
                            <div class="text-xs text-muted-foreground">{u.location.clone()}</div>
                        </div>
                    </div>

                    <div class="grid gap-3 lg:grid-cols-2">
                        <Card>
                            <CardHeader>
                                <CardTitle class="text-sm">"Profile"</CardTitle>
                            </CardHeader>
                            <CardContent>
                                <dl class="divide-y divide-border">
                                    <div class="grid grid-cols-3 gap-2 py-1.5 text-sm">
                                        <dt class="text-muted-foreground">"Website"</dt>
                                        <dd class="col-span-2 truncate">
                                            {match website {
                                                Some(w) => {
                                                    let href = w.clone();
                                                    view! {
                                                        <a href=href target="_blank" rel="noopener" class="text-primary hover:underline">{w}</a>
                                                    }
                                                    .into_any()
                                                }
                                                None => view! { <span class="text-muted-foreground">"—"</span> }.into_any(),
                                            }}
                                        </dd>
                                    </div>
                                    {detail_row("Email", u.contact_email.clone())}
                                    {detail_row("Phone", u.contact_phone.clone())}
                                    {detail_row("Established", u.established_year.map(|y| y.to_string()))}
                                </dl>
                            </CardContent>
                        </Card>

                        <Card>
                            <CardHeader>
                                <CardTitle class="text-sm">"Organisation"</CardTitle>
                            </CardHeader>
                            <CardContent class="space-y-3">
                                <div class="space-y-1">
                                    <div class="text-xs text-muted-foreground">"Departments"</div>
                                    {chips(u.departments.clone().unwrap_or_default())}
                                </div>
                                <div class="space-y-1">
                                    <div class="text-xs text-muted-foreground">"Faculties"</div>
                                    {chips(u.faculties.clone().unwrap_or_default())}
                                </div>
                            </CardContent>
                        </Card>
                    </div>

                    <Card>
                        <CardHeader>
                            <div class="flex w-full items-center justify-between gap-2">
                                <CardTitle class="text-sm">
                                    {move || format!("Courses ({})", courses.with(Vec::len))}
                                </CardTitle>
                                <a href=scoped_href class="text-xs text-primary underline underline-offset-4">
                                    "Manage in course list"
                                </a>
                            </div>
                        </CardHeader>
                        <CardContent class="space-y-1">
                            {move || {
                                let list = courses.get();
                                if list.is_empty() {
                                    return view! {
                                        <div class="text-sm text-muted-foreground">"No courses for this university."</div>
                                    }
                                    .into_any();
                                }
                                list.into_iter()
                                    .map(|c| view! {
                                        <a href=c.detail_href() class="flex items-center justify-between gap-2 rounded-md px-1 py-1 text-sm hover:bg-surface-hover">
                                            <span class="truncate">{c.label()}</span>
                                            <span class="shrink-0 text-xs text-muted-foreground">
                                                {c.course_code.clone().unwrap_or_default()}
                                            </span>
                                        </a>
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </CardContent>
                    </Card>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
pub fn CourseDetailPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let params = use_params::<RecordRouteParams>();
    let record_id = move || params.get().ok().and_then(|p| p.id);

    let record: RwSignal<Option<Course>> = RwSignal::new(None);
    let university: RwSignal<Option<University>> = RwSignal::new(None);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(true);

    Effect::new(move |_| {
        let Some(id) = record_id() else {
            error.set(Some("Invalid course id".to_string()));
            loading.set(false);
            return;
        };

        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let api = app_state.0.api_client.get_untracked();
            match EntityApi::<Course>::get(&api, id).await {
                Ok(course) => {
                    // The university only feeds a display name; failure degrades it.
                    let owner = match course.university_id {
                        Some(uid) => match EntityApi::<University>::get(&api, uid).await {
                            Ok(u) => Some(u),
                            Err(e) => {
                                tracing::warn!(uid, error = %e, "course university fetch failed");
                                None
                            }
                        },
                        None => None,
                    };
                    university.set(owner);
                    record.set(Some(course));
                }
                Err(e) => {
                    tracing::warn!(id, error = %e, "course fetch failed");
                    record.set(None);
                    error.set(Some(e.user_message("Failed to fetch course")));
                }
            }
            loading.set(false);
        });
    });

    view! {
        <div class="space-y-4">
            <a href="/courses" class="text-xs text-muted-foreground hover:underline">"← Courses"</a>

            {move || {
                if loading.get() {
                    return loading_block().into_any();
                }
                if let Some(message) = error.get() {
                    return error_block(message).into_any();
                }
                let Some(c) = record.get() else {
                    return ().into_any();
                };

                let active = c.is_active.unwrap_or(true);
                let university_view = match university.get() {
                    Some(u) => {
                        let href = u.detail_href();
                        view! { <a href=href class="text-primary hover:underline">{u.name}</a> }.into_any()
                    }
                    None => view! { <span class="text-muted-foreground">{UNKNOWN_UNIVERSITY}</span> }.into_any(),
                };
                let badge = if active {
                    "ml-auto rounded-full bg-emerald-100 px-2 py-0.5 text-xs font-medium text-emerald-800"
                } else {
                    "ml-auto rounded-full bg-zinc-100 px-2 py-0.5 text-xs font-medium text-zinc-600"
                };
                let department = c.department.clone().unwrap_or_default();
                let department_href = format!("/courses?department={}", urlencoding::encode(&department));

                view! {
                    <div class="flex items-center gap-3">
                        <Avatar label=c.label() />
                        <div class="min-w-0">
                            <h1 class="truncate text-xl font-semibold">{c.label()}</h1>
                            <div class="text-xs text-muted-foreground">{c.course_code.clone().unwrap_or_default()}</div>
                        </div>
                        <span class=badge>
                            {if active { "Active" } else { "Inactive" }}
                        </span>
                    </div>

                    <Card>
                        <CardContent>
                            <dl class="divide-y divide-border">
                                <div class="grid grid-cols-3 gap-2 py-1.5 text-sm">
                                    <dt class="text-muted-foreground">"University"</dt>
                                    <dd class="col-span-2">{university_view}</dd>
                                </div>
                                <div class="grid grid-cols-3 gap-2 py-1.5 text-sm">
                                    <dt class="text-muted-foreground">"Department"</dt>
                                    <dd class="col-span-2">
                                        <a href=department_href class="text-primary hover:underline">{department}</a>
                                    </dd>
                                </div>
                                {detail_row("Description", c.description.clone())}
                                {detail_row("Credit hours", Some(c.credit_hours.unwrap_or(0).to_string()))}
                                {detail_row("Semester", c.semester.clone())}
                                {detail_row("Academic year", c.academic_year.clone())}
                                {detail_row("Instructor", c.instructor.clone())}
                                {detail_row("Prerequisites", c.prerequisites.clone())}
                                {detail_row("Tuition fee", c.tuition_fee.map(format_money))}
                            </dl>
                        </CardContent>
                    </Card>
                }
                .into_any()
            }}
        </div>
    }
}
