//! MySQL implementation of the ExpertRepository trait.
//!
//! Profile creation and the role upgrade of the owning account commit in
//! one transaction; either both rows change or neither does.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sb_core::domain::entities::expert::Expert;
use sb_core::errors::{DomainError, ExpertError};
use sb_core::repositories::ExpertRepository;

/// MySQL implementation of ExpertRepository
pub struct MySqlExpertRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlExpertRepository {
    /// Create a new MySQL expert repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Expert entity
    fn row_to_expert(row: &sqlx::mysql::MySqlRow) -> Result<Expert, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get user_id: {}", e),
        })?;

        Ok(Expert {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid expert UUID: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user UUID: {}", e),
            })?,
            bio: row.try_get("bio").map_err(|e| DomainError::Internal {
                message: format!("Failed to get bio: {}", e),
            })?,
            expertise: row.try_get("expertise").map_err(|e| DomainError::Internal {
                message: format!("Failed to get expertise: {}", e),
            })?,
            hourly_rate: row
                .try_get("hourly_rate")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get hourly_rate: {}", e),
                })?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get is_verified: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl ExpertRepository for MySqlExpertRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Expert>, DomainError> {
        let query = r#"
            SELECT id, user_id, bio, expertise, hourly_rate, is_verified, created_at, updated_at
            FROM experts
            WHERE id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find expert by id: {}", e),
            })?;

        row.as_ref().map(Self::row_to_expert).transpose()
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Expert>, DomainError> {
        let query = r#"
            SELECT id, user_id, bio, expertise, hourly_rate, is_verified, created_at, updated_at
            FROM experts
            WHERE user_id = ?
        "#;

        let row = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find expert by user id: {}", e),
            })?;

        row.as_ref().map(Self::row_to_expert).transpose()
    }

    async fn create_with_role_upgrade(&self, expert: Expert) -> Result<Expert, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| DomainError::Internal {
            message: format!("Failed to begin transaction: {}", e),
        })?;

        let insert = r#"
            INSERT INTO experts (id, user_id, bio, expertise, hourly_rate, is_verified, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(insert)
            .bind(expert.id.to_string())
            .bind(expert.user_id.to_string())
            .bind(&expert.bio)
            .bind(&expert.expertise)
            .bind(expert.hourly_rate)
            .bind(expert.is_verified)
            .bind(expert.created_at)
            .bind(expert.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    ExpertError::ProfileAlreadyExists.into()
                }
                _ => DomainError::Internal {
                    message: format!("Failed to create expert profile: {}", e),
                },
            })?;

        let promote = "UPDATE users SET role = 'expert', updated_at = ? WHERE id = ?";

        let result = sqlx::query(promote)
            .bind(Utc::now())
            .bind(expert.user_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to promote user to expert: {}", e),
            })?;

        if result.rows_affected() == 0 {
            // rollback happens when tx drops
            return Err(ExpertError::UserNotFound.into());
        }

        tx.commit().await.map_err(|e| DomainError::Internal {
            message: format!("Failed to commit expert creation: {}", e),
        })?;

        Ok(expert)
    }

    async fn update(&self, expert: Expert) -> Result<Expert, DomainError> {
        let query = r#"
            UPDATE experts
            SET bio = ?, expertise = ?, hourly_rate = ?, is_verified = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&expert.bio)
            .bind(&expert.expertise)
            .bind(expert.hourly_rate)
            .bind(expert.is_verified)
            .bind(expert.updated_at)
            .bind(expert.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to update expert: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Expert".to_string(),
            });
        }

        Ok(expert)
    }

    async fn list_all(&self) -> Result<Vec<Expert>, DomainError> {
        let query = r#"
            SELECT id, user_id, bio, expertise, hourly_rate, is_verified, created_at, updated_at
            FROM experts
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list experts: {}", e),
            })?;

        rows.iter().map(Self::row_to_expert).collect()
    }

    async fn find_by_expertise(&self, expertise: &str) -> Result<Vec<Expert>, DomainError> {
        let query = r#"
            SELECT id, user_id, bio, expertise, hourly_rate, is_verified, created_at, updated_at
            FROM experts
            WHERE expertise = ?
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(expertise)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to search experts: {}", e),
            })?;

        rows.iter().map(Self::row_to_expert).collect()
    }
}
