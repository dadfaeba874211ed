//! Helper condivisi dai test di integrazione
#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use warehouse_api::AppState;
use warehouse_api::repositories::MemoryDatabase;

/// Server di test con il database in memoria usato dai repository
pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<MemoryDatabase>,
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = warehouse_api::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Crea un'applicazione vuota che lavora sul database in memoria
pub fn create_test_app() -> TestApp {
    let db = Arc::new(MemoryDatabase::new());
    let state = Arc::new(AppState::in_memory(db.clone()));
    TestApp {
        server: create_test_server(state),
        db,
    }
}

pub fn seller_body(cid: i32, locality_id: &str) -> Value {
    json!({
        "cid": cid,
        "company_name": "Test",
        "address": "Test",
        "telephone": "Test",
        "locality_id": locality_id
    })
}

pub fn locality_body(id: &str, locality_name: &str) -> Value {
    json!({
        "id": id,
        "country_name": "Argentina",
        "province_name": "Buenos Aires",
        "locality_name": locality_name
    })
}

pub fn section_body(section_number: i32) -> Value {
    json!({
        "section_number": section_number,
        "current_temperature": 2.5,
        "minimum_temperature": -5.0,
        "current_capacity": 40,
        "minimum_capacity": 10,
        "maximum_capacity": 100,
        "warehouse_id": 1,
        "product_type_id": 1
    })
}

pub fn product_batch_body(batch_number: i32, section_id: i32, current_quantity: i32) -> Value {
    json!({
        "batch_number": batch_number,
        "current_quantity": current_quantity,
        "current_temperature": 2.0,
        "due_date": "2024-12-01",
        "initial_quantity": 100,
        "manufacturing_date": "2024-06-01",
        "manufacturing_hour": 8,
        "minimum_temperature": -4.0,
        "product_id": 1,
        "section_id": section_id
    })
}

pub fn buyer_body(card_number_id: &str) -> Value {
    json!({
        "card_number_id": card_number_id,
        "first_name": "Lucia",
        "last_name": "Gomez"
    })
}

pub fn purchase_order_body(order_number: &str, buyer_id: i32) -> Value {
    json!({
        "order_number": order_number,
        "order_date": "2024-05-02",
        "tracking_code": "TRK-AAA",
        "buyer_id": buyer_id,
        "carrier_id": 1,
        "order_status_id": 1,
        "warehouse_id": 1,
        "product_record_id": 1
    })
}

/// Esegue una POST che deve andare a buon fine e ritorna il campo `data` della risposta
pub async fn create(server: &TestServer, path: &str, body: &Value) -> Value {
    let response = server.post(path).json(body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["data"].clone()
}
