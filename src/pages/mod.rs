mod dashboard;
mod detail;

pub use dashboard::DashboardPage;
pub use detail::{CourseDetailPage, UniversityDetailPage};

use crate::components::ui::{Button, ButtonSize, ButtonVariant, Card, CardDescription, CardHeader, CardTitle};
use crate::components::{EntityWorkspace, Toast};
use crate::models::{Course, CourseScope, University};
use crate::state::{AppContext, ListView};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_query_map};
use leptos_router::params::ParamsMap;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/dashboard", "Dashboard"),
    ("/universities", "Universities"),
    ("/courses", "Courses"),
];

/// `/` is active only on itself; other sections also own their sub-routes.
fn nav_is_active(href: &str, pathname: &str) -> bool {
    if href == "/" {
        pathname == "/"
    } else {
        pathname == href || pathname.starts_with(&format!("{href}/"))
    }
}

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let sidebar_collapsed = app_state.0.sidebar_collapsed;
    let location = use_location();
    let pathname = move || location.pathname.get();

    let sidebar_width_class = move || {
        if sidebar_collapsed.get() {
            "w-14"
        } else {
            "w-56"
        }
    };

    view! {
        <div class="min-h-screen bg-background text-foreground">
            <div class="mx-auto flex min-h-screen w-full max-w-6xl gap-4 px-4 py-6">
                <aside class=move || format!("{} shrink-0", sidebar_width_class())>
                    <div class="sticky top-6 space-y-4">
                        <div class="flex items-center justify-between">
                            <a href="/" class="text-sm font-medium text-foreground">
                                <Show when=move || !sidebar_collapsed.get() fallback=|| view! { "CA" }>
                                    "Campus Admin"
                                </Show>
                            </a>

                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Icon
                                on:click=move |_| sidebar_collapsed.update(|v| *v = !*v)
                                attr:title="Toggle sidebar"
                            >
                                <span class="text-xs text-muted-foreground">
                                    {move || if sidebar_collapsed.get() { ">" } else { "<" }}
                                </span>
                            </Button>
                        </div>

                        <nav class="space-y-1" aria-label="Sections">
                            {NAV_ITEMS
                                .iter()
                                .map(|(href, label)| {
                                    let href = *href;
                                    let label = *label;
                                    let active = move || nav_is_active(href, &pathname());
                                    view! {
                                        <a
                                            href=href
                                            title=label
                                            aria-current=move || active().then_some("page")
                                            class=move || format!(
                                                "flex items-center gap-2 rounded-md px-2 py-1.5 text-sm transition-colors {}",
                                                if active() {
                                                    "bg-accent font-medium text-accent-foreground"
                                                } else {
                                                    "text-muted-foreground hover:bg-surface-hover hover:text-foreground"
                                                }
                                            )
                                        >
                                            <span class="inline-flex size-5 items-center justify-center rounded bg-border/40 text-[11px]">
                                                {label.chars().next().unwrap_or('?').to_string()}
                                            </span>
                                            <Show when=move || !sidebar_collapsed.get() fallback=|| ().into_view()>
                                                <span>{label}</span>
                                            </Show>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>
                    </div>
                </aside>

                <main class="min-w-0 flex-1">{children()}</main>
            </div>

            <Toast />
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let features = [
        ("/dashboard", "Dashboard", "Totals, revenue and department breakdown at a glance."),
        ("/universities", "Universities", "Register institutions and keep their contact details current."),
        ("/courses", "Courses", "Maintain the catalog, fees and course availability."),
    ];

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold">"University & Course Management"</h1>
                <p class="text-sm text-muted-foreground">
                    "Browse, search and edit the institutions and courses served by the backend."
                </p>
            </div>

            <div class="grid gap-3 sm:grid-cols-3">
                {features
                    .into_iter()
                    .map(|(href, title, blurb)| view! {
                        <a href=href class="block">
                            <Card class="h-full transition-colors hover:bg-surface-hover hover:ring-1 hover:ring-border">
                                <CardHeader>
                                    <CardTitle class="text-sm">{title}</CardTitle>
                                    <CardDescription class="text-xs">{blurb}</CardDescription>
                                </CardHeader>
                            </Card>
                        </a>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn UniversitiesPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let list = ListView::<University>::new(app_state.0.notifier, ());

    view! { <EntityWorkspace list=list /> }
}

fn scope_from_query(q: &ParamsMap) -> CourseScope {
    CourseScope::from_query(
        q.get("active").as_deref(),
        q.get("university").as_deref(),
        q.get("department").as_deref(),
    )
}

#[component]
pub fn CoursesPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let query = use_query_map();

    let list = ListView::<Course>::new(
        app_state.0.notifier,
        query.with_untracked(scope_from_query),
    );

    // Query changes re-scope the list; the workspace refetches on scope change.
    Effect::new(move |_| {
        let scope = query.with(scope_from_query);
        if list.scope.get_untracked() != scope {
            list.scope.set(scope);
        }
    });

    let banner = move || {
        let text = match list.scope.get() {
            CourseScope::All => return None,
            CourseScope::Active => "Showing active courses only".to_string(),
            CourseScope::Department(name) => format!("Showing courses in {name}"),
            CourseScope::University(id) => {
                let name = list
                    .related
                    .with(|unis| unis.iter().find(|u| u.id == id).map(|u| u.name.clone()))
                    .unwrap_or_else(|| format!("university #{id}"));
                format!("Showing courses offered by {name}")
            }
        };

        Some(view! {
            <div class="mb-4 flex items-center justify-between gap-3 rounded-md border border-border bg-surface px-3 py-2 text-sm">
                <span>{text}</span>
                <a href="/courses" class="text-xs text-primary underline underline-offset-4">"Show all courses"</a>
            </div>
        })
    };

    view! {
        {banner}
        <EntityWorkspace list=list />
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="space-y-2 px-4 py-8">
            <div class="text-xs text-muted-foreground">"Not found"</div>
            <a href="/" class="text-sm text-primary underline underline-offset-4">"Back to home"</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_active_only_on_root() {
        assert!(nav_is_active("/", "/"));
        assert!(!nav_is_active("/", "/courses"));
    }

    #[test]
    fn sections_own_their_detail_routes() {
        assert!(nav_is_active("/courses", "/courses"));
        assert!(nav_is_active("/courses", "/courses/12"));
        assert!(!nav_is_active("/courses", "/coursesx"));
        assert!(!nav_is_active("/universities", "/courses"));
    }
}
