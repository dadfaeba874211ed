//! Integration tests per gli endpoints degli acquirenti
//!
//! Test per:
//! - GET/POST /api/v1/buyers, GET/PATCH/DELETE /api/v1/buyers/{id}
//! - GET /api/v1/buyers/reportPurchaseOrders
//! - GET /api/v1/buyers/{id}/reportPurchaseOrders

mod common;

#[cfg(test)]
mod buyer_tests {
    use super::common::{buyer_body, create, create_test_app, purchase_order_body};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_report_purchase_orders_all_buyers() {
        let app = create_test_app();
        create(&app.server, "/api/v1/buyers", &buyer_body("CARD-001")).await;
        create(&app.server, "/api/v1/buyers", &buyer_body("CARD-002")).await;
        create(&app.server, "/api/v1/purchaseOrders", &purchase_order_body("PO-1", 1)).await;
        create(&app.server, "/api/v1/purchaseOrders", &purchase_order_body("PO-2", 1)).await;

        let response = app.server.get("/api/v1/buyers/reportPurchaseOrders").await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "data": [
                {
                    "id": 1,
                    "card_number_id": "CARD-001",
                    "first_name": "Lucia",
                    "last_name": "Gomez",
                    "purchase_orders_count": 2
                },
                {
                    "id": 2,
                    "card_number_id": "CARD-002",
                    "first_name": "Lucia",
                    "last_name": "Gomez",
                    "purchase_orders_count": 0
                }
            ]
        }));
    }

    #[tokio::test]
    async fn test_report_purchase_orders_by_buyer() {
        let app = create_test_app();
        create(&app.server, "/api/v1/buyers", &buyer_body("CARD-001")).await;
        create(&app.server, "/api/v1/purchaseOrders", &purchase_order_body("PO-1", 1)).await;

        let response = app.server.get("/api/v1/buyers/1/reportPurchaseOrders").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["purchase_orders_count"], 1);
    }

    #[tokio::test]
    async fn test_report_purchase_orders_unknown_buyer() {
        let app = create_test_app();

        let response = app.server.get("/api/v1/buyers/4/reportPurchaseOrders").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_buyer_crud() {
        let app = create_test_app();
        create(&app.server, "/api/v1/buyers", &buyer_body("CARD-001")).await;

        app.server
            .post("/api/v1/buyers")
            .json(&buyer_body("CARD-001"))
            .await
            .assert_status(StatusCode::CONFLICT);

        let response = app
            .server
            .patch("/api/v1/buyers/1")
            .json(&json!({"last_name": "Perez"}))
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["last_name"], "Perez");

        app.server
            .delete("/api/v1/buyers/1")
            .await
            .assert_status(StatusCode::NO_CONTENT);
        app.server
            .get("/api/v1/buyers")
            .await
            .assert_json(&json!({"data": []}));
    }

    #[tokio::test]
    async fn test_patch_buyer_card_case_only() {
        let app = create_test_app();
        create(&app.server, "/api/v1/buyers", &buyer_body("CARD-001")).await;

        let response = app
            .server
            .patch("/api/v1/buyers/1")
            .json(&json!({"card_number_id": "card-001"}))
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["card_number_id"], "card-001");
    }
}
