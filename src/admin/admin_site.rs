use serde::Serialize;
use utoipa::ToSchema;

/// Branding strings for the administration pages.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct AdminSite {
    /// Text in the upper left of every page.
    #[schema(value_type = String)]
    pub site_header: &'static str,
    /// Text at the top of the admin index page.
    #[schema(value_type = String)]
    pub index_title: &'static str,
    /// Text in the browser tab title.
    #[schema(value_type = String)]
    pub site_title: &'static str,
    /// Record types managed through the admin routes.
    #[schema(value_type = Vec<String>)]
    pub registered_models: &'static [&'static str],
}

pub const ADMIN_SITE: AdminSite = AdminSite {
    site_header: "Student Management System MGT Admin",
    index_title: "Welcome to the Student Management System Dashboard",
    site_title: "Admin Portal",
    registered_models: &["notification"],
};
