//! Warehouse API library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod handlers;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config, Repositories};
pub use handlers::root;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", configure_api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Tutte le risorse esposte sotto /api/v1
fn configure_api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/sellers", configure_seller_routes())
        .nest("/localities", configure_locality_routes())
        .nest("/warehouses", configure_warehouse_routes())
        .nest("/sections", configure_section_routes())
        .nest("/products", configure_product_routes())
        .nest("/employees", configure_employee_routes())
        .nest("/buyers", configure_buyer_routes())
        .nest("/purchaseOrders", configure_purchase_order_routes())
        .nest("/productBatches", configure_product_batch_routes())
}

/// Configura le routes per la gestione dei venditori
fn configure_seller_routes() -> Router<Arc<AppState>> {
    use handlers::seller::*;

    Router::new()
        .route("/", get(list_sellers).post(create_seller))
        .route(
            "/{id}",
            get(get_seller).patch(update_seller).delete(delete_seller),
        )
}

/// Configura le routes per la gestione delle località
fn configure_locality_routes() -> Router<Arc<AppState>> {
    use handlers::locality::*;

    Router::new()
        .route("/", get(list_localities).post(create_locality))
        .route(
            "/{id}",
            get(get_locality).patch(update_locality).delete(delete_locality),
        )
        .route("/{id}/reportSellers", get(report_sellers))
}

fn configure_warehouse_routes() -> Router<Arc<AppState>> {
    use handlers::warehouse::*;

    Router::new()
        .route("/", get(list_warehouses).post(create_warehouse))
        .route(
            "/{id}",
            get(get_warehouse)
                .patch(update_warehouse)
                .delete(delete_warehouse),
        )
}

/// Configura le routes per le sezioni; il report dei prodotti è servito dal servizio dei lotti
fn configure_section_routes() -> Router<Arc<AppState>> {
    use handlers::section::*;

    // le rotte statiche hanno la precedenza su /{id}
    Router::new()
        .route("/", get(list_sections).post(create_section))
        .route("/reportProducts", get(report_products))
        .route("/reportProducts/{id}", get(report_products_by_section))
        .route(
            "/{id}",
            get(get_section).patch(update_section).delete(delete_section),
        )
}

fn configure_product_routes() -> Router<Arc<AppState>> {
    use handlers::product::*;

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
}

fn configure_employee_routes() -> Router<Arc<AppState>> {
    use handlers::employee::*;

    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/{id}",
            get(get_employee).patch(update_employee).delete(delete_employee),
        )
}

/// Configura le routes per gli acquirenti e il report degli ordini di acquisto
fn configure_buyer_routes() -> Router<Arc<AppState>> {
    use handlers::buyer::*;

    Router::new()
        .route("/", get(list_buyers).post(create_buyer))
        .route("/reportPurchaseOrders", get(report_purchase_orders))
        .route(
            "/{id}",
            get(get_buyer).patch(update_buyer).delete(delete_buyer),
        )
        .route(
            "/{id}/reportPurchaseOrders",
            get(report_purchase_orders_by_buyer),
        )
}

fn configure_purchase_order_routes() -> Router<Arc<AppState>> {
    use handlers::purchase_order::*;

    Router::new()
        .route("/", get(list_purchase_orders).post(create_purchase_order))
        .route(
            "/{id}",
            get(get_purchase_order)
                .patch(update_purchase_order)
                .delete(delete_purchase_order),
        )
}

fn configure_product_batch_routes() -> Router<Arc<AppState>> {
    use handlers::product_batch::*;

    Router::new()
        .route("/", get(list_product_batches).post(create_product_batch))
        .route(
            "/{id}",
            get(get_product_batch)
                .patch(update_product_batch)
                .delete(delete_product_batch),
        )
}
