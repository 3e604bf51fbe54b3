/**
 * PostgreSQL Store
 *
 * Each aggregate is stored as one JSONB document per row, next to a
 * `version` column used for compare-and-swap saves. Admin and collaborator
 * tables carry a unique `email` column so duplicate signups fail in the
 * database rather than in a check-then-insert race. Workspaces keep a
 * `seq` column that fixes their listing order.
 *
 * Schema: `migrations/20250101000000_documents.sql`.
 */

use async_trait::async_trait;
use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use super::{Document, IdentityStore, StoreError, WorkspaceStore};
use crate::shared::{Admin, Collaborator, Workspace};

const ADMINS: &str = "admins";
const COLLABORATORS: &str = "collaborators";
const WORKSPACES: &str = "workspaces";

/// sqlx-backed implementation of [`IdentityStore`] and [`WorkspaceStore`]
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

trait StoredDocument: Document + Serialize + DeserializeOwned + Unpin {
    fn set_version(&mut self, version: i64);
}

macro_rules! impl_stored_document {
    ($($ty:ty),*) => {
        $(impl StoredDocument for $ty {
            fn set_version(&mut self, version: i64) {
                self.version = version;
            }
        })*
    };
}

impl_stored_document!(Admin, Collaborator, Workspace);

fn into_document<D: StoredDocument>((Json(mut doc), version): (Json<D>, i64)) -> D {
    doc.set_version(version);
    doc
}

impl PgStore {
    /// Create a new PgStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert<D: StoredDocument>(
        &self,
        table: &'static str,
        email: Option<&str>,
        doc: D,
    ) -> Result<D, StoreError> {
        let result = match email {
            Some(email) => {
                let sql = format!("INSERT INTO {table} (id, email, doc, version) VALUES ($1, $2, $3, $4)");
                sqlx::query(&sql)
                    .bind(doc.id())
                    .bind(email)
                    .bind(Json(&doc))
                    .bind(doc.version())
                    .execute(&self.pool)
                    .await
            }
            None => {
                let sql = format!("INSERT INTO {table} (id, doc, version) VALUES ($1, $2, $3)");
                sqlx::query(&sql)
                    .bind(doc.id())
                    .bind(Json(&doc))
                    .bind(doc.version())
                    .execute(&self.pool)
                    .await
            }
        };

        match result {
            Ok(_) => Ok(doc),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() && email.is_some() => {
                Err(StoreError::DuplicateEmail {
                    email: email.unwrap_or_default().to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn fetch_by_id<D: StoredDocument>(&self, table: &'static str, id: Uuid) -> Result<Option<D>, StoreError> {
        let sql = format!("SELECT doc, version FROM {table} WHERE id = $1");
        let row = sqlx::query_as::<_, (Json<D>, i64)>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(into_document))
    }

    async fn fetch_by_email<D: StoredDocument>(
        &self,
        table: &'static str,
        email: &str,
    ) -> Result<Option<D>, StoreError> {
        let sql = format!("SELECT doc, version FROM {table} WHERE email = $1");
        let row = sqlx::query_as::<_, (Json<D>, i64)>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(into_document))
    }

    async fn save<D: StoredDocument>(&self, table: &'static str, mut doc: D) -> Result<D, StoreError> {
        let id = doc.id();
        let expected = doc.version();
        doc.stamp(expected + 1, Utc::now());

        let sql = format!(
            "UPDATE {table} SET doc = $1, version = version + 1 \
             WHERE id = $2 AND version = $3 RETURNING version"
        );
        let updated = sqlx::query_scalar::<_, i64>(&sql)
            .bind(Json(&doc))
            .bind(id)
            .bind(expected)
            .fetch_optional(&self.pool)
            .await?;

        match updated {
            Some(version) => {
                doc.set_version(version);
                Ok(doc)
            }
            None => {
                let sql = format!("SELECT version FROM {table} WHERE id = $1");
                let exists = sqlx::query_scalar::<_, i64>(&sql)
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await?;
                match exists {
                    Some(_) => Err(StoreError::VersionConflict { id }),
                    None => Err(StoreError::Missing { id }),
                }
            }
        }
    }
}

#[async_trait]
impl IdentityStore for PgStore {
    async fn insert_admin(&self, admin: Admin) -> Result<Admin, StoreError> {
        let email = admin.email.clone();
        self.insert(ADMINS, Some(&email), admin).await
    }

    async fn admin_by_id(&self, id: Uuid) -> Result<Option<Admin>, StoreError> {
        self.fetch_by_id(ADMINS, id).await
    }

    async fn admin_by_email(&self, email: &str) -> Result<Option<Admin>, StoreError> {
        self.fetch_by_email(ADMINS, email).await
    }

    async fn save_admin(&self, admin: Admin) -> Result<Admin, StoreError> {
        self.save(ADMINS, admin).await
    }

    async fn insert_collaborator(&self, collaborator: Collaborator) -> Result<Collaborator, StoreError> {
        let email = collaborator.email.clone();
        self.insert(COLLABORATORS, Some(&email), collaborator).await
    }

    async fn collaborator_by_id(&self, id: Uuid) -> Result<Option<Collaborator>, StoreError> {
        self.fetch_by_id(COLLABORATORS, id).await
    }

    async fn collaborator_by_email(&self, email: &str) -> Result<Option<Collaborator>, StoreError> {
        self.fetch_by_email(COLLABORATORS, email).await
    }

    async fn save_collaborator(&self, collaborator: Collaborator) -> Result<Collaborator, StoreError> {
        self.save(COLLABORATORS, collaborator).await
    }
}

#[async_trait]
impl WorkspaceStore for PgStore {
    async fn insert_workspace(&self, workspace: Workspace) -> Result<Workspace, StoreError> {
        self.insert(WORKSPACES, None, workspace).await
    }

    async fn workspace_by_id(&self, id: Uuid) -> Result<Option<Workspace>, StoreError> {
        self.fetch_by_id(WORKSPACES, id).await
    }

    async fn workspaces_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Workspace>, StoreError> {
        let rows = sqlx::query_as::<_, (Json<Workspace>, i64)>(
            "SELECT doc, version FROM workspaces WHERE id = ANY($1)",
        )
        .bind(ids.to_vec())
        .fetch_all(&self.pool)
        .await?;

        let mut by_id: HashMap<Uuid, Workspace> = rows
            .into_iter()
            .map(into_document::<Workspace>)
            .map(|ws| (ws.id, ws))
            .collect();

        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    async fn list_workspaces(&self) -> Result<Vec<Workspace>, StoreError> {
        let rows = sqlx::query_as::<_, (Json<Workspace>, i64)>(
            "SELECT doc, version FROM workspaces ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(into_document).collect())
    }

    async fn save_workspace(&self, workspace: Workspace) -> Result<Workspace, StoreError> {
        self.save(WORKSPACES, workspace).await
    }
}
