//! PostgreSQL adapter for BarberRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, EntityTrait, Set};

use crate::domain::entities::{BarberProfile, NewBarberProfile, UserId};
use crate::domain::ports::BarberRepository;
use crate::entity::barbers;
use crate::error::DomainError;

/// PostgreSQL implementation of BarberRepository
pub struct PostgresBarberRepository {
    db: DatabaseConnection,
}

impl PostgresBarberRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load a stored profile
    #[allow(dead_code)]
    pub async fn find_by_id(&self, id: &UserId) -> Result<Option<BarberProfile>, DomainError> {
        let result = barbers::Entity::find_by_id(id.0.clone())
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }
}

#[async_trait]
impl BarberRepository for PostgresBarberRepository {
    async fn upsert(&self, id: &UserId, profile: &NewBarberProfile) -> Result<(), DomainError> {
        let model = barbers::ActiveModel {
            id: Set(id.0.clone()),
            full_name: Set(profile.full_name.clone()),
            email: Set(profile.email.clone()),
            bio: Set(profile.bio.clone()),
            services: Set(profile.services.clone().into()),
            rating: Set(profile.rating),
            total_ratings: Set(profile.total_ratings),
            // Column default stamps the insert; the conflict branch stamps overwrites
            created_at: NotSet,
        };

        barbers::Entity::insert(model)
            .on_conflict(
                OnConflict::column(barbers::Column::Id)
                    .update_columns([
                        barbers::Column::FullName,
                        barbers::Column::Email,
                        barbers::Column::Bio,
                        barbers::Column::Services,
                        barbers::Column::Rating,
                        barbers::Column::TotalRatings,
                    ])
                    .value(barbers::Column::CreatedAt, Expr::current_timestamp())
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        let result = barbers::Entity::delete_by_id(id.0.clone())
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            tracing::debug!(user_id = %id, "No barber profile to delete");
        }

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<barbers::Model> for BarberProfile {
    fn from(model: barbers::Model) -> Self {
        BarberProfile {
            id: UserId(model.id),
            full_name: model.full_name,
            email: model.email,
            bio: model.bio,
            services: serde_json::from_value(model.services).unwrap_or_default(),
            rating: model.rating,
            total_ratings: model.total_ratings,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
