//! Service-name resolution.
//!
//! Port numbers are resolved to human-readable service names by querying a
//! local lookup service over HTTP, then normalizing well-known raw
//! identifiers to preferred display names. Lookup failures never abort the
//! run: everything degrades to [`UNKNOWN`].

use crate::config::LookupConfig;
use crate::models::UNKNOWN;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Raw identifiers mapped to the display names used in notes. Identifiers
/// not listed here pass through unchanged.
const PREFERRED_NAMES: &[(&str, &str)] = &[
    ("domain", "DNS"),
    ("adws", "ADWS"),
    ("wsman", "WINRM"),
    ("msft-gc", "LDAP"),
    ("msft-gc-ssl", "LDAP"),
    ("http-rpc-epmap", "MSRPC"),
    ("microsoft-ds", "SMB"),
    ("epmap", "MSRPC"),
    ("kpasswd", "KERBEROS"),
    ("ldaps", "LDAP"),
    ("ms-sql-s", "MSSQL"),
    ("ldap", "LDAP"),
    ("netbios-ssn", "SMB"),
    ("http", "HTTP"),
    ("kerberos", "KERBEROS"),
    ("ntp", "NTP"),
];

/// Normalize a raw service identifier to its preferred display name.
pub fn preferred_name(raw: &str) -> String {
    PREFERRED_NAMES
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| to.to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Response body of the lookup service: a "ports" list whose entries are
/// heterogeneous arrays with the service identifier first.
#[derive(Debug, Deserialize)]
struct PortLookupResponse {
    ports: Vec<Vec<serde_json::Value>>,
}

/// HTTP client for the port-metadata lookup service.
pub struct ServiceResolver {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceResolver {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client for service lookup")?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a port to its display name, degrading to [`UNKNOWN`] on any
    /// network error, non-success response, or empty result.
    pub async fn resolve(&self, port: u16) -> String {
        match self.fetch_raw_name(port).await {
            Ok(Some(raw)) => {
                let name = preferred_name(&raw);
                debug!("Port {} resolved to {} (raw: {})", port, name, raw);
                name
            }
            Ok(None) => {
                debug!("Port {} has no lookup entry", port);
                UNKNOWN.to_string()
            }
            Err(e) => {
                warn!("Service lookup failed for port {}: {:#}", port, e);
                UNKNOWN.to_string()
            }
        }
    }

    async fn fetch_raw_name(&self, port: u16) -> Result<Option<String>> {
        let url = format!("{}/ports/{}", self.base_url, port);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;

        if !response.status().is_success() {
            debug!("Lookup for port {} returned {}", port, response.status());
            return Ok(None);
        }

        let body: PortLookupResponse = response
            .json()
            .await
            .with_context(|| format!("Invalid lookup response for port {}", port))?;

        Ok(body
            .ports
            .first()
            .and_then(|entry| entry.first())
            .and_then(|value| value.as_str())
            .map(String::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn resolver_for(server: &MockServer) -> ServiceResolver {
        ServiceResolver::new(&LookupConfig {
            url: server.base_url(),
            timeout_seconds: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_preferred_name_mapped() {
        assert_eq!(preferred_name("microsoft-ds"), "SMB");
        assert_eq!(preferred_name("ldap"), "LDAP");
        assert_eq!(preferred_name("ldaps"), "LDAP");
        assert_eq!(preferred_name("http"), "HTTP");
    }

    #[test]
    fn test_preferred_name_passthrough() {
        assert_eq!(preferred_name("ssh"), "ssh");
        assert_eq!(preferred_name("my-custom-svc"), "my-custom-svc");
    }

    #[tokio::test]
    async fn test_resolve_known_identifier() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ports/80");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"ports": [["http", 80, "tcp"]]}));
        });

        assert_eq!(resolver_for(&server).resolve(80).await, "HTTP");
    }

    #[tokio::test]
    async fn test_resolve_unmapped_identifier_unchanged() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ports/22");
            then.status(200)
                .json_body(serde_json::json!({"ports": [["ssh", 22, "tcp"]]}));
        });

        assert_eq!(resolver_for(&server).resolve(22).await, "ssh");
    }

    #[tokio::test]
    async fn test_resolve_empty_ports_is_unknown() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ports/49670");
            then.status(200).json_body(serde_json::json!({"ports": []}));
        });

        assert_eq!(resolver_for(&server).resolve(49670).await, UNKNOWN);
    }

    #[tokio::test]
    async fn test_resolve_error_status_is_unknown() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ports/1234");
            then.status(500);
        });

        assert_eq!(resolver_for(&server).resolve(1234).await, UNKNOWN);
    }

    #[tokio::test]
    async fn test_resolve_unreachable_service_is_unknown() {
        let resolver = ServiceResolver::new(&LookupConfig {
            // Reserved port with nothing listening.
            url: "http://127.0.0.1:1".to_string(),
            timeout_seconds: 1,
        })
        .unwrap();

        assert_eq!(resolver.resolve(80).await, UNKNOWN);
    }
}
