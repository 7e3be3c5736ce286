//! MySQL implementation of the AvailabilityRepository trait.
//!
//! Listing queries carry the ordering the trait contract promises, so the
//! service layer never re-sorts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sb_core::domain::entities::availability_slot::AvailabilitySlot;
use sb_core::errors::DomainError;
use sb_core::repositories::AvailabilityRepository;

/// MySQL implementation of AvailabilityRepository
pub struct MySqlAvailabilityRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAvailabilityRepository {
    /// Create a new MySQL availability repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to AvailabilitySlot entity
    fn row_to_slot(row: &sqlx::mysql::MySqlRow) -> Result<AvailabilitySlot, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        let expert_id: String = row.try_get("expert_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get expert_id: {}", e),
        })?;

        let weekday: u8 = row.try_get("weekday").map_err(|e| DomainError::Internal {
            message: format!("Failed to get weekday: {}", e),
        })?;

        Ok(AvailabilitySlot {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid slot UUID: {}", e),
            })?,
            expert_id: Uuid::parse_str(&expert_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid expert UUID: {}", e),
            })?,
            weekday,
            start_time: row
                .try_get("start_time")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get start_time: {}", e),
                })?,
            end_time: row.try_get("end_time").map_err(|e| DomainError::Internal {
                message: format!("Failed to get end_time: {}", e),
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
impl AvailabilityRepository for MySqlAvailabilityRepository {
    async fn create(&self, slot: AvailabilitySlot) -> Result<AvailabilitySlot, DomainError> {
        let query = r#"
            INSERT INTO availability_slots (id, expert_id, weekday, start_time, end_time, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(slot.id.to_string())
            .bind(slot.expert_id.to_string())
            .bind(slot.weekday)
            .bind(&slot.start_time)
            .bind(&slot.end_time)
            .bind(slot.created_at)
            .bind(slot.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to create availability slot: {}", e),
            })?;

        Ok(slot)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AvailabilitySlot>, DomainError> {
        let query = r#"
            SELECT id, expert_id, weekday, start_time, end_time, created_at, updated_at
            FROM availability_slots
            WHERE id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find slot by id: {}", e),
            })?;

        row.as_ref().map(Self::row_to_slot).transpose()
    }

    async fn find_by_id_for_expert(
        &self,
        id: Uuid,
        expert_id: Uuid,
    ) -> Result<Option<AvailabilitySlot>, DomainError> {
        let query = r#"
            SELECT id, expert_id, weekday, start_time, end_time, created_at, updated_at
            FROM availability_slots
            WHERE id = ? AND expert_id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .bind(expert_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find slot for expert: {}", e),
            })?;

        row.as_ref().map(Self::row_to_slot).transpose()
    }

    async fn find_by_expert(
        &self,
        expert_id: Uuid,
    ) -> Result<Vec<AvailabilitySlot>, DomainError> {
        let query = r#"
            SELECT id, expert_id, weekday, start_time, end_time, created_at, updated_at
            FROM availability_slots
            WHERE expert_id = ?
            ORDER BY weekday ASC, start_time ASC
        "#;

        let rows = sqlx::query(query)
            .bind(expert_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list slots for expert: {}", e),
            })?;

        rows.iter().map(Self::row_to_slot).collect()
    }

    async fn find_by_expert_and_weekday(
        &self,
        expert_id: Uuid,
        weekday: u8,
    ) -> Result<Vec<AvailabilitySlot>, DomainError> {
        let query = r#"
            SELECT id, expert_id, weekday, start_time, end_time, created_at, updated_at
            FROM availability_slots
            WHERE expert_id = ? AND weekday = ?
            ORDER BY start_time ASC
        "#;

        let rows = sqlx::query(query)
            .bind(expert_id.to_string())
            .bind(weekday)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list slots for weekday: {}", e),
            })?;

        rows.iter().map(Self::row_to_slot).collect()
    }

    async fn update(&self, slot: AvailabilitySlot) -> Result<AvailabilitySlot, DomainError> {
        let query = r#"
            UPDATE availability_slots
            SET weekday = ?, start_time = ?, end_time = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(slot.weekday)
            .bind(&slot.start_time)
            .bind(&slot.end_time)
            .bind(slot.updated_at)
            .bind(slot.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to update slot: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "AvailabilitySlot".to_string(),
            });
        }

        Ok(slot)
    }

    async fn delete_for_expert(&self, id: Uuid, expert_id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM availability_slots WHERE id = ? AND expert_id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .bind(expert_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete slot: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
