use crate::pages::{
    AppLayout, CourseDetailPage, CoursesPage, DashboardPage, HomePage, NotFoundPage,
    UniversitiesPage, UniversityDetailPage,
};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext(AppState::new()));

    // Router hooks (params, query, location) need the <Router> context,
    // so the layout sits inside it.
    view! {
        <Router>
            <AppLayout>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("dashboard") view=DashboardPage />
                    <Route path=path!("universities") view=UniversitiesPage />
                    <Route path=path!("universities/:id") view=UniversityDetailPage />
                    <Route path=path!("courses") view=CoursesPage />
                    <Route path=path!("courses/:id") view=CourseDetailPage />
                </Routes>
            </AppLayout>
        </Router>
    }
}
