use crate::{
    admin::{self, AdminSite},
    middleware::auth_middleware,
    notification::{
        notification_dto::{
            CreateNotificationRequest, NotificationPage, StatusResponse, UnreadCountResponse,
        },
        notification_handlers as handlers, Notification,
    },
    state::AppState,
    views,
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::get_notifications,
        handlers::get_unread_count,
        handlers::notification_stream,
        handlers::mark_notifications_read,
        handlers::clear_all_notifications,
        admin::admin_handlers::get_admin_site,
        admin::admin_handlers::list_notifications,
        admin::admin_handlers::create_notification,
    ),
    components(
        schemas(
            Notification,
            NotificationPage,
            StatusResponse,
            UnreadCountResponse,
            CreateNotificationRequest,
            AdminSite,
        )
    ),
    tags(
        (name = "notifications", description = "Notification endpoints"),
        (name = "admin", description = "Administration endpoints")
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::Http::new(
                        utoipa::openapi::security::HttpAuthScheme::Bearer,
                    ),
                ),
            )
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Mutating routes answer 403 to every method but POST
    let notification_routes = Router::new()
        .route("/", get(handlers::get_notifications))
        .route("/unread-count", get(handlers::get_unread_count))
        .route("/stream", get(handlers::notification_stream))
        .route(
            "/mark-read",
            post(handlers::mark_notifications_read).fallback(handlers::method_forbidden),
        )
        .route(
            "/clear",
            post(handlers::clear_all_notifications).fallback(handlers::method_forbidden),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Admin routes: auth runs first, then the role check
    let admin_routes = Router::new()
        .route("/site", get(admin::get_admin_site))
        .route(
            "/notifications",
            get(admin::list_notifications).post(admin::create_notification),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin::admin_authorization,
        ))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Server-rendered pages
    let page_routes = Router::new()
        .route("/dashboard", get(views::dashboard))
        .route(
            "/notifications/mark-all-read",
            post(handlers::mark_all_read_and_redirect).fallback(handlers::method_forbidden),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let api_routes = Router::new()
        .nest("/notifications", notification_routes)
        .nest("/admin", admin_routes);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(views::index))
        .merge(page_routes)
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
