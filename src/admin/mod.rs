pub mod admin_handlers;
pub mod admin_middleware;
pub mod admin_site;

pub use admin_handlers::{create_notification, get_admin_site, list_notifications};
pub use admin_middleware::admin_authorization;
pub use admin_site::{AdminSite, ADMIN_SITE};
