//! MySQL implementation of the BookingRepository trait.
//!
//! Bookings insert inside a scoped transaction. The schema keeps a
//! generated `active` column that is 1 for non-cancelled rows and NULL
//! otherwise; the unique index (expert_id, slot_id, active) therefore
//! admits at most one active booking per slot while ignoring cancelled
//! history. A duplicate-key failure surfaces as `SlotAlreadyBooked`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sb_core::domain::entities::booking::{Booking, BookingStatus};
use sb_core::errors::{BookingError, DomainError};
use sb_core::repositories::BookingRepository;

/// MySQL implementation of BookingRepository
pub struct MySqlBookingRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    /// Create a new MySQL booking repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Booking entity
    fn row_to_booking(row: &sqlx::mysql::MySqlRow) -> Result<Booking, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get user_id: {}", e),
        })?;

        let expert_id: String = row.try_get("expert_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get expert_id: {}", e),
        })?;

        let slot_id: String = row.try_get("slot_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get slot_id: {}", e),
        })?;

        let status: String = row.try_get("status").map_err(|e| DomainError::Internal {
            message: format!("Failed to get status: {}", e),
        })?;

        Ok(Booking {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid booking UUID: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user UUID: {}", e),
            })?,
            expert_id: Uuid::parse_str(&expert_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid expert UUID: {}", e),
            })?,
            slot_id: Uuid::parse_str(&slot_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid slot UUID: {}", e),
            })?,
            status: BookingStatus::parse(&status).ok_or_else(|| DomainError::Internal {
                message: format!("Unknown booking status: {}", status),
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
impl BookingRepository for MySqlBookingRepository {
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| DomainError::Internal {
            message: format!("Failed to begin transaction: {}", e),
        })?;

        let query = r#"
            INSERT INTO bookings (id, user_id, expert_id, slot_id, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(booking.id.to_string())
            .bind(booking.user_id.to_string())
            .bind(booking.expert_id.to_string())
            .bind(booking.slot_id.to_string())
            .bind(booking.status.as_str())
            .bind(booking.created_at)
            .bind(booking.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    BookingError::SlotAlreadyBooked.into()
                }
                _ => DomainError::Internal {
                    message: format!("Failed to create booking: {}", e),
                },
            })?;

        tx.commit().await.map_err(|e| DomainError::Internal {
            message: format!("Failed to commit booking: {}", e),
        })?;

        Ok(booking)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let query = r#"
            SELECT id, user_id, expert_id, slot_id, status, created_at, updated_at
            FROM bookings
            WHERE id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find booking by id: {}", e),
            })?;

        row.as_ref().map(Self::row_to_booking).transpose()
    }

    async fn find_active_by_expert(
        &self,
        expert_id: Uuid,
    ) -> Result<Vec<Booking>, DomainError> {
        let query = r#"
            SELECT id, user_id, expert_id, slot_id, status, created_at, updated_at
            FROM bookings
            WHERE expert_id = ? AND status != 'cancelled'
        "#;

        let rows = sqlx::query(query)
            .bind(expert_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list active bookings: {}", e),
            })?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, DomainError> {
        let query = r#"
            SELECT id, user_id, expert_id, slot_id, status, created_at, updated_at
            FROM bookings
            WHERE user_id = ?
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list bookings for user: {}", e),
            })?;

        rows.iter().map(Self::row_to_booking).collect()
    }
}
