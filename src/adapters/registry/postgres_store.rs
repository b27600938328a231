//! PostgreSQL implementation of RegistryStore.
//!
//! Persists registrations to the `companies` table. The unique index on
//! `cnpj` is the authoritative duplicate check.

use async_trait::async_trait;
use sqlx::PgPool;

use super::UNIQUE_VIOLATION;
use crate::domain::company::{Cnpj, CompanyRecord};
use crate::ports::{RegistryStore, StoreError};

/// PostgreSQL implementation of RegistryStore.
#[derive(Clone)]
pub struct PostgresRegistryStore {
    pool: PgPool,
}

impl PostgresRegistryStore {
    /// Creates a new PostgresRegistryStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_insert_error(error: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return StoreError::DuplicateKey;
        }
    }
    StoreError::unavailable(format!("Failed to insert company: {}", error))
}

#[async_trait]
impl RegistryStore for PostgresRegistryStore {
    async fn exists(&self, cnpj: &Cnpj) -> Result<bool, StoreError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM companies WHERE cnpj = $1)")
                .bind(cnpj.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!(cnpj = %cnpj, "Company existence check failed: {}", e);
                    StoreError::unavailable(format!("Failed to check company existence: {}", e))
                })?;

        Ok(result.0)
    }

    async fn insert(&self, record: &CompanyRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO companies (
                cnpj, razao_social, nome_fantasia, cep, logradouro, numero, bairro,
                municipio, uf, email, telefone, contato_nome,
                participa_manifestacao, afiliacao_associacao, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(record.cnpj.as_str())
        .bind(&record.legal_name)
        .bind(&record.trade_name)
        .bind(&record.postal_code)
        .bind(&record.street)
        .bind(&record.number)
        .bind(&record.district)
        .bind(&record.municipality)
        .bind(&record.state)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.contact_person_name)
        .bind(record.participation.as_str())
        .bind(record.affiliation_interest.as_str())
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let error = map_insert_error(e);
            match &error {
                StoreError::DuplicateKey => {
                    tracing::info!(cnpj = %record.cnpj, "Insert rejected by unique constraint")
                }
                StoreError::Unavailable(msg) => tracing::error!(cnpj = %record.cnpj, "{}", msg),
            }
            error
        })?;

        Ok(())
    }
}
