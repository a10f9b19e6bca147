use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use covidportal_auth::auth_routes;

use crate::{
    handlers::{
        districts::{create_district, delete_district, get_district, update_district},
        states::{get_state, get_state_stats, list_states},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// Trailing slashes are part of every path.
pub fn create_app(state: AppState) -> Router {
    // Login is the only route outside the token gate
    let login_routes: Router<AppState> = auth_routes().with_state(state.auth.clone());

    Router::new()
        // State routes
        .route("/states/", get(list_states))
        .route("/states/{state_id}/", get(get_state))
        .route("/states/{state_id}/stats/", get(get_state_stats))
        // District routes
        .route("/districts/", post(create_district))
        .route(
            "/districts/{district_id}/",
            get(get_district)
                .put(update_district)
                .delete(delete_district),
        )
        .merge(login_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
