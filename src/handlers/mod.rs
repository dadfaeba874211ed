//! Handlers module - Coordinatore per tutti gli handler HTTP
//!
//! Questo modulo organizza gli handler in sotto-moduli separati per una migliore manutenibilità.
//! Ogni modulo gestisce gli endpoint HTTP per una specifica entità e delega la logica al servizio
//! corrispondente in `AppState`.

/* si usano queste notazioni per prendere ciò che ci serve dai frame http, mi raccomando
  funziona solo in questo esatto ordine! Il corpo JSON consuma tutto il messaggio quindi deve stare ultimo
        State(state): State<Arc<AppState>>,
        IdPath(id): IdPath<i32>,               // parametro dalla URL /sellers/{id}, 400 se non valido
        ValidJson(body): ValidJson<MyDTO>,     // JSON body validato, 422 se non valido
*/

pub mod buyer;
pub mod employee;
pub mod locality;
pub mod product;
pub mod product_batch;
pub mod purchase_order;
pub mod section;
pub mod seller;
pub mod warehouse;

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
