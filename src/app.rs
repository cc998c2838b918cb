//! HAN CRM App
//!
//! Router: public landing, blog and login pages; everything under
//! `/dashboard` requires a session.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crm_core::AppConfig;

use crate::components::DashboardLayout;
use crate::context::AuthContext;
use crate::pages::{
    ArchivedLeadsPage, BlogListPage, BlogManagementPage, BlogPostPage, CustomersPage, DashboardHome,
    GoogleImportPage, LandingPage, LeadsPage, LoginPage, LogsPage, PerformancePage, RolesPage,
    SettingsPage, UsersPage,
};
use crate::store::AuthState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AuthState::restore());
    provide_context(AuthContext::new(store, config));

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="p-8 text-center text-gray-500">"Sayfa bulunamadı"</p> }>
                <Route path=path!("/") view=LandingPage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/blog") view=BlogListPage/>
                <Route path=path!("/blog/:slug") view=BlogPostPage/>
                <ParentRoute path=path!("/dashboard") view=DashboardLayout>
                    <Route path=path!("") view=DashboardHome/>
                    <Route path=path!("customers") view=CustomersPage/>
                    <Route path=path!("leads") view=LeadsPage/>
                    <Route path=path!("leads/archived") view=ArchivedLeadsPage/>
                    <Route path=path!("performance") view=PerformancePage/>
                    <Route path=path!("users") view=UsersPage/>
                    <Route path=path!("roles") view=RolesPage/>
                    <Route path=path!("logs") view=LogsPage/>
                    <Route path=path!("google-import") view=GoogleImportPage/>
                    <Route path=path!("blog") view=BlogManagementPage/>
                    <Route path=path!("settings") view=SettingsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
