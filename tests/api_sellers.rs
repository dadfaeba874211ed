//! Integration tests per gli endpoints dei venditori
//!
//! Test per:
//! - GET/POST /api/v1/sellers
//! - GET/PATCH/DELETE /api/v1/sellers/{id}

mod common;

#[cfg(test)]
mod seller_tests {
    use super::common::{create, create_test_app, seller_body};
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    // ============================================================
    // Test per POST /sellers
    // ============================================================

    #[tokio::test]
    async fn test_create_seller_success() {
        let app = create_test_app();

        let response = app
            .server
            .post("/api/v1/sellers")
            .json(&seller_body(1, "123"))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(
            body,
            json!({
                "data": {
                    "id": 1,
                    "cid": 1,
                    "company_name": "Test",
                    "address": "Test",
                    "telephone": "Test",
                    "locality_id": "123"
                }
            })
        );
    }

    #[tokio::test]
    async fn test_create_seller_duplicate_cid() {
        let app = create_test_app();
        create(&app.server, "/api/v1/sellers", &seller_body(1, "123")).await;

        let response = app
            .server
            .post("/api/v1/sellers")
            .json(&seller_body(1, "6700"))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        let body: Value = response.json();
        assert_eq!(body["code"], "conflict");
        assert_eq!(body["message"], "seller with cid 1 already exists");
        assert_eq!(app.db.sellers.inserts(), 1);
    }

    #[tokio::test]
    async fn test_create_seller_missing_field() {
        let app = create_test_app();

        let response = app
            .server
            .post("/api/v1/sellers")
            .json(&json!({"cid": 1, "company_name": "Test"}))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["code"], "unprocessable_entity");
        assert!(app.db.sellers.is_empty());
    }

    #[tokio::test]
    async fn test_create_seller_malformed_json() {
        let app = create_test_app();

        let response = app
            .server
            .post("/api/v1/sellers")
            .text(r#"{"cid": 1,"#)
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert!(app.db.sellers.is_empty());
    }

    #[tokio::test]
    async fn test_create_seller_wrong_type() {
        let app = create_test_app();
        let mut body = seller_body(1, "123");
        body["cid"] = json!("one");

        let response = app.server.post("/api/v1/sellers").json(&body).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert!(app.db.sellers.is_empty());
    }

    #[tokio::test]
    async fn test_create_seller_fails_validation() {
        let app = create_test_app();

        let response = app
            .server
            .post("/api/v1/sellers")
            .json(&seller_body(0, ""))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(app.db.sellers.inserts(), 0);
    }

    #[tokio::test]
    async fn test_create_seller_value_longer_than_column() {
        let app = create_test_app();
        let locality_id = "x".repeat(300);

        let response = app
            .server
            .post("/api/v1/sellers")
            .json(&seller_body(1, &locality_id))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(app.db.sellers.inserts(), 0);
    }

    #[tokio::test]
    async fn test_patch_seller_value_longer_than_column() {
        let app = create_test_app();
        create(&app.server, "/api/v1/sellers", &seller_body(1, "6700")).await;

        let response = app
            .server
            .patch("/api/v1/sellers/1")
            .json(&json!({"company_name": "a".repeat(256)}))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = app.server.get("/api/v1/sellers/1").await.json();
        assert_eq!(body["data"]["company_name"], seller_body(1, "6700")["company_name"]);
    }

    // ============================================================
    // Test per GET /sellers e /sellers/{id}
    // ============================================================

    #[tokio::test]
    async fn test_list_sellers_empty() {
        let app = create_test_app();

        let response = app.server.get("/api/v1/sellers").await;

        response.assert_status_ok();
        response.assert_json(&json!({"data": []}));
    }

    #[tokio::test]
    async fn test_list_sellers() {
        let app = create_test_app();
        create(&app.server, "/api/v1/sellers", &seller_body(1, "6700")).await;
        create(&app.server, "/api/v1/sellers", &seller_body(2, "5000")).await;

        let response = app.server.get("/api/v1/sellers").await;

        response.assert_status_ok();
        let body: Value = response.json();
        let cids: Vec<i64> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["cid"].as_i64().unwrap())
            .collect();
        assert_eq!(cids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_get_seller_not_found() {
        let app = create_test_app();

        let response = app.server.get("/api/v1/sellers/999").await;

        response.assert_status_not_found();
        response.assert_json(&json!({
            "code": "not_found",
            "message": "seller with id 999 not found"
        }));
    }

    #[tokio::test]
    async fn test_get_seller_invalid_id() {
        let app = create_test_app();

        let response = app.server.get("/api/v1/sellers/abc").await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["code"], "bad_request");
    }

    #[tokio::test]
    async fn test_get_seller_success() {
        let app = create_test_app();
        let created = create(&app.server, "/api/v1/sellers", &seller_body(7, "6700")).await;

        let response = app.server.get("/api/v1/sellers/1").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["data"], created);
    }

    // ============================================================
    // Test per PATCH /sellers/{id}
    // ============================================================

    #[tokio::test]
    async fn test_patch_seller_partial() {
        let app = create_test_app();
        create(&app.server, "/api/v1/sellers", &seller_body(1, "6700")).await;

        let response = app
            .server
            .patch("/api/v1/sellers/1")
            .json(&json!({"telephone": "555-1234"}))
            .await;

        response.assert_status_ok();
        let seller = &response.json::<Value>()["data"];
        assert_eq!(seller["telephone"], "555-1234");
        assert_eq!(seller["company_name"], "Test");
        assert_eq!(seller["cid"], 1);
    }

    #[tokio::test]
    async fn test_patch_seller_empty_body_is_identity() {
        let app = create_test_app();
        let created = create(&app.server, "/api/v1/sellers", &seller_body(1, "6700")).await;

        let response = app.server.patch("/api/v1/sellers/1").json(&json!({})).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["data"], created);
    }

    #[tokio::test]
    async fn test_patch_seller_to_taken_cid() {
        let app = create_test_app();
        create(&app.server, "/api/v1/sellers", &seller_body(1, "6700")).await;
        create(&app.server, "/api/v1/sellers", &seller_body(2, "6700")).await;

        let response = app
            .server
            .patch("/api/v1/sellers/2")
            .json(&json!({"cid": 1}))
            .await;

        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_patch_seller_not_found() {
        let app = create_test_app();

        let response = app
            .server
            .patch("/api/v1/sellers/5")
            .json(&json!({"company_name": "Other"}))
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_patch_seller_invalid_id_is_checked_before_body() {
        let app = create_test_app();

        let response = app
            .server
            .patch("/api/v1/sellers/abc")
            .json(&json!({"cid": "not a number"}))
            .await;

        response.assert_status_bad_request();
    }

    // ============================================================
    // Test per DELETE /sellers/{id}
    // ============================================================

    #[tokio::test]
    async fn test_delete_seller() {
        let app = create_test_app();
        create(&app.server, "/api/v1/sellers", &seller_body(1, "6700")).await;

        let response = app.server.delete("/api/v1/sellers/1").await;

        response.assert_status(StatusCode::NO_CONTENT);
        assert!(response.text().is_empty());
        app.server
            .get("/api/v1/sellers/1")
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_delete_seller_not_found() {
        let app = create_test_app();

        let response = app.server.delete("/api/v1/sellers/1").await;

        response.assert_status_not_found();
    }

    // ============================================================
    // Database non raggiungibile
    // ============================================================

    #[tokio::test]
    async fn test_unavailable_database() {
        let app = create_test_app();
        app.db.set_offline(true);

        let response = app
            .server
            .post("/api/v1/sellers")
            .json(&seller_body(1, "6700"))
            .await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        response.assert_json(&json!({
            "code": "service_unavailable",
            "message": "Database unavailable"
        }));
    }
}
