//! Configurazione - Parametri del server letti dalle variabili d'ambiente

use dotenv::dotenv;
use std::env;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub connection_lifetime_secs: u64,
    pub app_env: String,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Costruisce la configurazione a partire da una funzione di lookup delle chiavi,
    /// applicando i valori di default per quelle mancanti
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| "DATABASE_URL must be set in .env file".to_string())?;

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = lookup("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|| "10".to_string())
            .parse::<u32>()
            .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        let connection_lifetime_secs = lookup("DB_CONNECTION_LIFETIME_SECS")
            .unwrap_or_else(|| "1800".to_string())
            .parse::<u64>()
            .map_err(|_| {
                "Invalid DB_CONNECTION_LIFETIME_SECS: must be a positive number".to_string()
            })?;

        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());

        Ok(Config {
            database_url,
            server_host,
            server_port,
            max_connections,
            connection_lifetime_secs,
            app_env,
        })
    }

    /// Indirizzo su cui mettere in ascolto il server
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Logga la configurazione (nascondendo le credenziali del database)
    pub fn log_info(&self) {
        info!("Environment: {}", self.app_env);
        info!("Server address: {}", self.bind_address());
        info!("Database: {}", Self::mask_url(&self.database_url));
        info!("Max DB connections: {}", self.max_connections);
        info!("Connection lifetime: {}s", self.connection_lifetime_secs);
    }

    /// Maschera l'URL del database per il logging
    fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.find('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("DATABASE_URL", "mysql://root:pw@localhost/db")]).unwrap();

        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.connection_lifetime_secs, 1800);
        assert_eq!(config.app_env, "development");
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "mysql://localhost/db"),
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "9000"),
            ("MAX_DB_CONNECTIONS", "4"),
            ("APP_ENV", "production"),
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.app_env, "production");
    }

    #[test]
    fn test_missing_database_url() {
        let err = config_from(&[]).unwrap_err();
        assert!(err.contains("DATABASE_URL"));
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("DATABASE_URL", "mysql://x"), ("SERVER_PORT", "http")])
            .unwrap_err();
        assert!(err.contains("SERVER_PORT"));
    }

    #[test]
    fn test_mask_url_hides_credentials() {
        assert_eq!(
            Config::mask_url("mysql://root:secret@db:3306/warehouse"),
            "mysql://***@db:3306/warehouse"
        );
        assert_eq!(Config::mask_url("not a url"), "***");
    }
}
