//! PostgREST implementation of RegistryStore.
//!
//! Talks to a hosted PostgREST endpoint (`{url}/rest/v1/{table}`) with a
//! project API key. The key travels both as the `apikey` header and as a
//! bearer token.
//!
//! # Status mapping
//!
//! - `exists`: `200` with a non-empty array - `true`, empty array - `false`
//! - `insert`: `201` - ok, `409` with Postgres code `23505` - `DuplicateKey`
//! - anything else, and transport errors - `Unavailable`

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::UNIQUE_VIOLATION;
use crate::domain::company::{Cnpj, CompanyRecord};
use crate::ports::{RegistryStore, StoreError};

/// Connection settings for a PostgREST endpoint.
#[derive(Debug, Clone)]
pub struct PostgrestConfig {
    pub url: String,
    pub api_key: Secret<String>,
    pub table: String,
    pub timeout: Duration,
}

impl PostgrestConfig {
    pub fn new(url: impl Into<String>, api_key: Secret<String>) -> Self {
        Self {
            url: url.into(),
            api_key,
            table: "companies".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Row shape of the companies table.
#[derive(Debug, Serialize)]
struct CompanyRow<'a> {
    cnpj: &'a str,
    razao_social: &'a str,
    nome_fantasia: &'a str,
    cep: &'a str,
    logradouro: &'a str,
    numero: &'a str,
    bairro: &'a str,
    municipio: &'a str,
    uf: &'a str,
    email: &'a str,
    telefone: &'a str,
    contato_nome: &'a str,
    participa_manifestacao: &'a str,
    afiliacao_associacao: &'a str,
    created_at: String,
}

impl<'a> From<&'a CompanyRecord> for CompanyRow<'a> {
    fn from(record: &'a CompanyRecord) -> Self {
        Self {
            cnpj: record.cnpj.as_str(),
            razao_social: &record.legal_name,
            nome_fantasia: &record.trade_name,
            cep: &record.postal_code,
            logradouro: &record.street,
            numero: &record.number,
            bairro: &record.district,
            municipio: &record.municipality,
            uf: &record.state,
            email: &record.email,
            telefone: &record.phone,
            contato_nome: &record.contact_person_name,
            participa_manifestacao: record.participation.as_str(),
            afiliacao_associacao: record.affiliation_interest.as_str(),
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

/// Error body PostgREST returns for database errors.
#[derive(Debug, Default, Deserialize)]
struct PostgrestErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Registry store backed by a hosted PostgREST API.
pub struct PostgrestRegistryStore {
    config: PostgrestConfig,
    client: Client,
}

impl PostgrestRegistryStore {
    pub fn new(config: PostgrestConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.url.trim_end_matches('/'),
            self.config.table
        )
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let key = self.config.api_key.expose_secret();
        request
            .header("apikey", key.as_str())
            .bearer_auth(key)
            .header("Accept", "application/json")
    }
}

fn transport_error(e: reqwest::Error) -> StoreError {
    if e.is_timeout() {
        StoreError::unavailable("Registry store timed out")
    } else {
        StoreError::unavailable(format!("Registry store request failed: {}", e))
    }
}

/// Maps a failed insert response to its store error.
fn insert_error(status: StatusCode, body: &str) -> StoreError {
    let parsed: PostgrestErrorBody = serde_json::from_str(body).unwrap_or_default();
    if parsed.code.as_deref() == Some(UNIQUE_VIOLATION) {
        return StoreError::DuplicateKey;
    }
    let detail = parsed.message.unwrap_or_else(|| body.to_string());
    StoreError::unavailable(format!("Insert failed with status {}: {}", status, detail))
}

#[async_trait]
impl RegistryStore for PostgrestRegistryStore {
    async fn exists(&self, cnpj: &Cnpj) -> Result<bool, StoreError> {
        let filter = format!("eq.{}", cnpj);
        let response = self
            .authorized(self.client.get(self.table_url()))
            .query(&[("select", "cnpj"), ("cnpj", filter.as_str()), ("limit", "1")])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(cnpj = %cnpj, %status, "Company existence check failed: {}", body);
            return Err(StoreError::unavailable(format!(
                "Existence check failed with status {}",
                status
            )));
        }

        let rows: Vec<serde_json::Value> = response.json().await.map_err(|e| {
            StoreError::unavailable(format!("Invalid existence check response: {}", e))
        })?;

        Ok(!rows.is_empty())
    }

    async fn insert(&self, record: &CompanyRecord) -> Result<(), StoreError> {
        let response = self
            .authorized(self.client.post(self.table_url()))
            .header("Prefer", "return=minimal")
            .json(&CompanyRow::from(record))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let error = insert_error(status, &body);
        match &error {
            StoreError::DuplicateKey => {
                tracing::info!(cnpj = %record.cnpj, "Insert rejected by unique constraint")
            }
            StoreError::Unavailable(msg) => tracing::error!(cnpj = %record.cnpj, "{}", msg),
        }
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::company::SurveyAnswer;
    use chrono::{TimeZone, Utc};

    fn store() -> PostgrestRegistryStore {
        PostgrestRegistryStore::new(PostgrestConfig::new(
            "https://project.example.co/",
            Secret::new("anon-key".to_string()),
        ))
        .unwrap()
    }

    #[test]
    fn table_url_uses_rest_prefix() {
        assert_eq!(
            store().table_url(),
            "https://project.example.co/rest/v1/companies"
        );
    }

    #[test]
    fn unique_violation_body_is_duplicate_key() {
        let body = r#"{"code":"23505","message":"duplicate key value violates unique constraint \"companies_cnpj_key\""}"#;
        assert_eq!(insert_error(StatusCode::CONFLICT, body), StoreError::DuplicateKey);
    }

    #[test]
    fn other_failures_are_unavailable() {
        let err = insert_error(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert!(matches!(err, StoreError::Unavailable(msg) if msg.contains("boom")));

        let err = insert_error(StatusCode::CONFLICT, r#"{"code":"23503","message":"fk"}"#);
        assert!(matches!(err, StoreError::Unavailable(msg) if msg.contains("fk")));
    }

    #[test]
    fn row_uses_stored_column_names() {
        let record = CompanyRecord {
            cnpj: Cnpj::parse("11222333000181").unwrap(),
            legal_name: "ACME LTDA".to_string(),
            trade_name: "ACME".to_string(),
            postal_code: "59000000".to_string(),
            street: "RUA A".to_string(),
            number: "10".to_string(),
            district: "CENTRO".to_string(),
            municipality: "NATAL".to_string(),
            state: "RN".to_string(),
            email: "ok@ok.com".to_string(),
            phone: "(84) 91234-5678".to_string(),
            contact_person_name: "Maria".to_string(),
            participation: SurveyAnswer::Yes,
            affiliation_interest: SurveyAnswer::No,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };

        let row = serde_json::to_value(CompanyRow::from(&record)).unwrap();

        assert_eq!(row["cnpj"], "11222333000181");
        assert_eq!(row["razao_social"], "ACME LTDA");
        assert_eq!(row["participa_manifestacao"], "Sim");
        assert_eq!(row["afiliacao_associacao"], "Não");
        assert_eq!(row["created_at"], "2024-05-01T12:00:00+00:00");
    }

    #[tokio::test]
    async fn unreachable_store_is_unavailable() {
        let store = PostgrestRegistryStore::new(
            PostgrestConfig::new("http://127.0.0.1:1", Secret::new("k".to_string()))
                .with_timeout(Duration::from_secs(2)),
        )
        .unwrap();

        let result = store.exists(&Cnpj::parse("11222333000181").unwrap()).await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }
}
