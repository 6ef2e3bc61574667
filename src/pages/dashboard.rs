use crate::api::{ApiClient, ApiResult};
use crate::components::ui::{Alert, AlertDescription, Card, CardContent, CardHeader, CardTitle, Spinner};
use crate::components::{Avatar, StatCards};
use crate::entity::{Entity, Stat};
use crate::stats::{DashboardStats, DepartmentShare};
use crate::state::AppContext;
use crate::util::format_thousands;
use leptos::prelude::*;
use leptos::task::spawn_local;

async fn load_dashboard(api: &ApiClient) -> ApiResult<DashboardStats> {
    let universities = api.list_universities().await?;
    let courses = api.list_courses().await?;
    let active = api.list_active_courses().await?;
    Ok(DashboardStats::compute(&universities, &courses, &active))
}

fn overview(s: &DashboardStats) -> Vec<Stat> {
    vec![
        Stat {
            label: "Universities",
            value: s.total_universities.to_string(),
            caption: "Registered institutions",
            color: "#3f51b5",
        },
        Stat {
            label: "Courses",
            value: s.total_courses.to_string(),
            caption: "In the catalog",
            color: "#f50057",
        },
        Stat {
            label: "Active Courses",
            value: s.active_courses.to_string(),
            caption: "Currently offered",
            color: "#00bcd4",
        },
        Stat {
            label: "Total Revenue",
            value: format_thousands(s.total_revenue),
            caption: "Sum of tuition fees",
            color: "#4caf50",
        },
        Stat {
            label: "Departments",
            value: s.departments.to_string(),
            caption: "Distinct departments",
            color: "#ff9800",
        },
    ]
}

/// Bar width relative to the largest department, in percent.
fn share_width(share: &DepartmentShare, largest: usize) -> usize {
    if largest == 0 {
        return 0;
    }
    share.count * 100 / largest
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let data: RwSignal<Option<DashboardStats>> = RwSignal::new(None);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(true);

    spawn_local(async move {
        let api = app_state.0.api_client.get_untracked();
        match load_dashboard(&api).await {
            Ok(stats) => {
                tracing::debug!(courses = stats.total_courses, "dashboard loaded");
                data.set(Some(stats));
                error.set(None);
            }
            Err(e) => {
                tracing::warn!(error = %e, "dashboard fetch failed");
                error.set(Some(e.user_message("Failed to fetch dashboard data")));
            }
        }
        loading.set(false);
    });

    let stats = Signal::derive(move || data.with(|d| d.as_ref().map(overview).unwrap_or_default()));

    view! {
        <div class="space-y-4">
            <div class="space-y-1">
                <h1 class="text-xl font-semibold">"Dashboard"</h1>
                <div class="text-xs text-muted-foreground">
                    {move || data.with(|d| d.as_ref().map(|d| format!("{} active courses", d.active_courses)))}
                </div>
            </div>

            <Show when=move || error.get().is_some() fallback=|| ().into_view()>
                {move || error.get().map(|e| view! {
                    <Alert class="border-destructive/30">
                        <AlertDescription class="text-destructive">{e}</AlertDescription>
                    </Alert>
                })}
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex items-center gap-2 py-8 text-sm text-muted-foreground">
                        <Spinner />
                        "Loading…"
                    </div>
                }
            >
                <StatCards stats=stats />

                {move || data.get().map(|d| {
                    let largest = d.department_distribution.first().map(|s| s.count).unwrap_or(0);

                    view! {
                        <div class="grid gap-3 lg:grid-cols-2">
                            <Card>
                                <CardHeader>
                                    <CardTitle class="text-sm">"Top departments"</CardTitle>
                                </CardHeader>
                                <CardContent class="space-y-2">
                                    {if d.department_distribution.is_empty() {
                                        view! { <div class="text-sm text-muted-foreground">"No courses yet."</div> }.into_any()
                                    } else {
                                        d.department_distribution
                                            .iter()
                                            .map(|share| {
                                                let width = share_width(share, largest);
                                                let href = format!(
                                                    "/courses?department={}",
                                                    urlencoding::encode(&share.name)
                                                );
                                                view! {
                                                    <div class="space-y-1">
                                                        <div class="flex justify-between text-xs">
                                                            <a href=href class="hover:underline">{share.name.clone()}</a>
                                                            <span class="text-muted-foreground">{share.count}</span>
                                                        </div>
                                                        <div class="h-2 rounded-full bg-border/40">
                                                            <div
                                                                class="h-2 rounded-full bg-primary"
                                                                style=format!("width: {width}%")
                                                            />
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()
                                            .into_any()
                                    }}
                                </CardContent>
                            </Card>

                            <Card>
                                <CardHeader>
                                    <CardTitle class="text-sm">"Recent courses"</CardTitle>
                                </CardHeader>
                                <CardContent class="space-y-2">
                                    {d.recent_courses
                                        .iter()
                                        .map(|c| {
                                            let label = c.label();
                                            view! {
                                                <a href=c.detail_href() class="flex items-center gap-3 rounded-md p-1 hover:bg-surface-hover">
                                                    <Avatar label=label.clone() />
                                                    <div class="min-w-0">
                                                        <div class="truncate text-sm font-medium">{label}</div>
                                                        <div class="truncate text-xs text-muted-foreground">
                                                            {format!(
                                                                "{} · {}",
                                                                c.course_code.clone().unwrap_or_default(),
                                                                c.department.clone().unwrap_or_default()
                                                            )}
                                                        </div>
                                                    </div>
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </CardContent>
                            </Card>

                            <Card class="lg:col-span-2">
                                <CardHeader>
                                    <CardTitle class="text-sm">"Featured universities"</CardTitle>
                                </CardHeader>
                                <CardContent class="grid gap-2 sm:grid-cols-3">
                                    {d.featured_universities
                                        .iter()
                                        .map(|u| view! {
                                            <a href=u.detail_href() class="flex items-center gap-3 rounded-md border border-border p-2 hover:bg-surface-hover">
                                                <Avatar label=u.name.clone() />
                                                <div class="min-w-0">
                                                    <div class="truncate text-sm font-medium">{u.name.clone()}</div>
                                                    <div class="truncate text-xs text-muted-foreground">{u.location.clone()}</div>
                                                </div>
                                            </a>
                                        })
                                        .collect_view()}
                                </CardContent>
                            </Card>
                        </div>
                    }
                })}
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_formats_revenue_and_counts() {
        let s = DashboardStats {
            total_universities: 2,
            total_courses: 5,
            active_courses: 3,
            total_revenue: 12500.0,
            departments: 4,
            ..Default::default()
        };
        let cards = overview(&s);
        assert_eq!(cards[0].value, "2");
        assert_eq!(cards[1].value, "5");
        assert_eq!(cards[2].value, "3");
        assert_eq!(cards[3].value, "$12.5K");
        assert_eq!(cards[4].value, "4");
    }

    #[test]
    fn share_width_is_relative_to_largest() {
        let share = DepartmentShare {
            name: "CS".into(),
            count: 1,
        };
        assert_eq!(share_width(&share, 4), 25);
        assert_eq!(share_width(&share, 0), 0);
    }
}
