//! Campus Building Reference Data
//!
//! Read-only building records used as grounding context for the campus
//! chat. The data is imported out of band; this module only reads it.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AssistResult;

/// A campus building
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub building_id: Uuid,
    pub name: String,
    pub short_name: Option<String>,
    pub description: Option<String>,
    pub departments: Option<String>,
    pub facilities: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub open_hours: Option<String>,
    pub phone: Option<String>,
    pub floor: i32,
}

/// Building repository trait
#[trait_variant::make(BuildingRepository: Send)]
pub trait LocalBuildingRepository {
    /// All buildings on campus
    async fn list_all(&self) -> AssistResult<Vec<Building>>;
}

/// PostgreSQL-backed building repository
#[derive(Clone)]
pub struct PgBuildingRepository {
    pool: PgPool,
}

impl PgBuildingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl BuildingRepository for PgBuildingRepository {
    async fn list_all(&self) -> AssistResult<Vec<Building>> {
        let buildings = sqlx::query_as::<_, Building>(
            r#"
            SELECT
                building_id, name, short_name, description, departments,
                facilities, lat, lon, open_hours, phone, floor
            FROM buildings
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(buildings)
    }
}
