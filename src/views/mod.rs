pub mod view_handlers;

use handlebars::{Handlebars, TemplateError};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AppError, Result};

pub use view_handlers::{dashboard, index};

pub type Context = Map<String, Value>;

pub const LOGIN_TEMPLATE: &str = "authentication/login.html";
pub const DASHBOARD_TEMPLATE: &str = "students/student-dashboard.html";

/// Builds the page template registry. Strict mode turns a missing context
/// key into a render error instead of an empty string.
pub fn create_registry() -> std::result::Result<Handlebars<'static>, TemplateError> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);

    handlebars.register_template_string(
        LOGIN_TEMPLATE,
        include_str!("../../templates/authentication/login.html"),
    )?;
    handlebars.register_template_string(
        DASHBOARD_TEMPLATE,
        include_str!("../../templates/students/student-dashboard.html"),
    )?;

    Ok(handlebars)
}

pub fn render<T: Serialize>(templates: &Handlebars<'_>, name: &str, context: &T) -> Result<String> {
    templates.render(name, context).map_err(|e| {
        tracing::error!("Failed to render template {}: {}", name, e);
        AppError::InternalError
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_substitutes_context() {
        let templates = create_registry().unwrap();
        let mut context = Context::new();
        context.insert("unread_notification_count".to_string(), json!(4));

        let html = render(&templates, DASHBOARD_TEMPLATE, &context).unwrap();
        assert!(html.contains(r#"<span class="notification-badge">4</span>"#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_render_escapes_values() {
        let templates = create_registry().unwrap();
        let mut context = Context::new();
        context.insert("site_header".to_string(), json!("<b>MGT</b>"));
        context.insert("site_title".to_string(), json!("Admin Portal"));

        let html = render(&templates, LOGIN_TEMPLATE, &context).unwrap();
        assert!(html.contains("&lt;b&gt;MGT&lt;/b&gt;"));
    }

    #[test]
    fn test_missing_context_key_is_an_error() {
        let templates = create_registry().unwrap();

        assert!(matches!(
            render(&templates, DASHBOARD_TEMPLATE, &Context::new()),
            Err(AppError::InternalError)
        ));
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        let templates = create_registry().unwrap();

        assert!(render(&templates, "missing.html", &Context::new()).is_err());
    }
}
