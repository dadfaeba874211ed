//! Integration tests per gli endpoints delle sezioni e del report dei prodotti
//!
//! Test per:
//! - GET/POST /api/v1/sections, GET/PATCH/DELETE /api/v1/sections/{id}
//! - GET /api/v1/sections/reportProducts
//! - GET /api/v1/sections/reportProducts/{id}

mod common;

#[cfg(test)]
mod section_tests {
    use super::common::{TestApp, create, create_test_app, product_batch_body, section_body};
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    /// Sezioni 1 (n. 10), 2 (n. 20), 3 (n. 30); lotti solo nelle prime due
    async fn seeded_app() -> TestApp {
        let app = create_test_app();
        for number in [10, 20, 30] {
            create(&app.server, "/api/v1/sections", &section_body(number)).await;
        }
        create(&app.server, "/api/v1/productBatches", &product_batch_body(111, 1, 20)).await;
        create(&app.server, "/api/v1/productBatches", &product_batch_body(112, 1, 30)).await;
        create(&app.server, "/api/v1/productBatches", &product_batch_body(211, 2, 15)).await;
        app
    }

    // ============================================================
    // Report prodotti
    // ============================================================

    #[tokio::test]
    async fn test_report_products_all_sections() {
        let app = seeded_app().await;

        let response = app.server.get("/api/v1/sections/reportProducts").await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "data": [
                {"section_id": 1, "section_number": 10, "products_count": 50},
                {"section_id": 2, "section_number": 20, "products_count": 15}
            ]
        }));
    }

    #[tokio::test]
    async fn test_report_products_without_batches_is_empty() {
        let app = create_test_app();
        create(&app.server, "/api/v1/sections", &section_body(10)).await;

        let response = app.server.get("/api/v1/sections/reportProducts").await;

        response.assert_status_ok();
        response.assert_json(&json!({"data": []}));
    }

    #[tokio::test]
    async fn test_report_products_by_section() {
        let app = seeded_app().await;

        let response = app.server.get("/api/v1/sections/reportProducts/2").await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "data": {"section_id": 2, "section_number": 20, "products_count": 15}
        }));
    }

    #[tokio::test]
    async fn test_report_products_unknown_section() {
        let app = seeded_app().await;

        let response = app.server.get("/api/v1/sections/reportProducts/10").await;

        response.assert_status_not_found();
        response.assert_json(&json!({
            "code": "not_found",
            "message": "section with id 10 not found"
        }));
    }

    #[tokio::test]
    async fn test_report_products_section_without_batches() {
        let app = seeded_app().await;

        let response = app.server.get("/api/v1/sections/reportProducts/3").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_report_products_invalid_id() {
        let app = seeded_app().await;

        let response = app.server.get("/api/v1/sections/reportProducts/ten").await;

        response.assert_status_bad_request();
    }

    // ============================================================
    // CRUD sezioni
    // ============================================================

    #[tokio::test]
    async fn test_create_section_duplicate_number() {
        let app = create_test_app();
        create(&app.server, "/api/v1/sections", &section_body(10)).await;

        let response = app
            .server
            .post("/api/v1/sections")
            .json(&section_body(10))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        assert_eq!(app.db.sections.inserts(), 1);
    }

    #[tokio::test]
    async fn test_create_section_inconsistent_capacity() {
        let app = create_test_app();
        let mut body = section_body(10);
        body["current_capacity"] = json!(500);

        let response = app.server.post("/api/v1/sections").json(&body).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(
            body["message"],
            "current_capacity cannot exceed maximum_capacity"
        );
        assert!(app.db.sections.is_empty());
    }

    #[tokio::test]
    async fn test_patch_section() {
        let app = create_test_app();
        create(&app.server, "/api/v1/sections", &section_body(10)).await;

        let response = app
            .server
            .patch("/api/v1/sections/1")
            .json(&json!({"current_temperature": -1.5, "maximum_capacity": 120}))
            .await;

        response.assert_status_ok();
        let section = &response.json::<Value>()["data"];
        assert_eq!(section["current_temperature"], -1.5);
        assert_eq!(section["maximum_capacity"], 120);
        assert_eq!(section["section_number"], 10);
    }

    #[tokio::test]
    async fn test_get_and_delete_section() {
        let app = create_test_app();
        create(&app.server, "/api/v1/sections", &section_body(10)).await;

        app.server.get("/api/v1/sections/1").await.assert_status_ok();
        app.server
            .delete("/api/v1/sections/1")
            .await
            .assert_status(StatusCode::NO_CONTENT);
        app.server
            .get("/api/v1/sections/1")
            .await
            .assert_status_not_found();
    }
}
