//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Configurazione
//! - Gestione errori e formato delle risposte
//! - Extractor per path e corpo JSON
//! - Stato applicazione

pub mod config;
pub mod error;
pub mod extract;
pub mod response;
pub mod state;

// Re-exports per facilitare l'import
pub use config::Config;
pub use error::AppError;
pub use extract::{IdPath, ValidJson};
pub use response::ApiResponse;
pub use state::{AppState, Repositories};
