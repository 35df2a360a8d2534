//! Authenticated dashboard shell: guard, sidebar and header

mod dashboard_layout;
mod header;
mod sidebar;

pub use dashboard_layout::DashboardLayout;
pub use header::Header;
pub use sidebar::Sidebar;
