use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::{handlers, AppState};

// Verbs are bound explicitly; a wrong method gets 405 instead of
// silently running the handler.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(handlers::list_products))
        .route("/products/create", post(handlers::create_product))
        .route("/products/:id", get(handlers::get_product))
        .route(
            "/products/update/:id",
            put(handlers::update_product).post(handlers::update_product),
        )
        .route("/products/delete/:id", delete(handlers::delete_product))
        .route("/products/quantity/:id", post(handlers::update_quantity))
        .route("/products/favorite/:id", post(handlers::toggle_favorite))
        .route("/products/cart/:id", post(handlers::toggle_cart))
        .route("/orders/create", post(handlers::create_order))
        .route("/orders", get(handlers::list_orders))
}
