//! Pages
//!
//! One component per route.

mod landing;
mod login;
mod dashboard_home;
mod customers;
mod leads;
mod lead_wizard;
mod archived_leads;
mod performance;
mod users;
mod roles;
mod logs;
mod google_import;
mod blog_management;
mod blog;
mod settings;

pub use landing::LandingPage;
pub use login::LoginPage;
pub use dashboard_home::DashboardHome;
pub use customers::CustomersPage;
pub use leads::LeadsPage;
pub use archived_leads::ArchivedLeadsPage;
pub use performance::PerformancePage;
pub use users::UsersPage;
pub use roles::RolesPage;
pub use logs::LogsPage;
pub use google_import::GoogleImportPage;
pub use blog_management::BlogManagementPage;
pub use blog::{BlogListPage, BlogPostPage};
pub use settings::SettingsPage;

/// Shared table header cell
pub(crate) const TH: &str = "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";
/// Shared table cell
pub(crate) const TD: &str = "px-6 py-4 whitespace-nowrap text-sm";
pub(crate) const INPUT: &str =
    "w-full px-3 py-2 border border-gray-300 rounded-md text-sm focus:ring-blue-500 focus:border-blue-500";
pub(crate) const PRIMARY_BUTTON: &str =
    "px-4 py-2 bg-blue-600 text-white rounded-md text-sm hover:bg-blue-700 disabled:opacity-50";
pub(crate) const SECONDARY_BUTTON: &str = "px-4 py-2 border border-gray-300 rounded-md text-sm hover:bg-gray-50";
