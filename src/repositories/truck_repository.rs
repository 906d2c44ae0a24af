use crate::models::truck::Truck;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct TruckRepository {
    pool: PgPool,
}

impl TruckRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        license_plate: String,
        brand: Option<String>,
        model: Option<String>,
        truck_status: String,
    ) -> Result<Truck, AppError> {
        let truck = sqlx::query_as::<_, Truck>(
            r#"
            INSERT INTO trucks (id, company_id, license_plate, brand, model, truck_status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_id)
        .bind(license_plate)
        .bind(brand)
        .bind(model)
        .bind(truck_status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating truck: {}", e)))?;

        Ok(truck)
    }

    pub async fn find_by_id(&self, id: Uuid, company_id: Uuid) -> Result<Option<Truck>, AppError> {
        let truck = sqlx::query_as::<_, Truck>(
            "SELECT * FROM trucks WHERE id = $1 AND company_id = $2",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding truck: {}", e)))?;

        Ok(truck)
    }

    pub async fn find_by_company(&self, company_id: Uuid) -> Result<Vec<Truck>, AppError> {
        let trucks = sqlx::query_as::<_, Truck>(
            "SELECT * FROM trucks WHERE company_id = $1 ORDER BY created_at DESC",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing trucks: {}", e)))?;

        Ok(trucks)
    }

    pub async fn license_plate_exists(
        &self,
        license_plate: &str,
        company_id: Uuid,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM trucks WHERE license_plate = $1 AND company_id = $2)",
        )
        .bind(license_plate)
        .bind(company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error checking license plate: {}", e)))?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        company_id: Uuid,
        license_plate: Option<String>,
        brand: Option<String>,
        model: Option<String>,
        truck_status: Option<String>,
    ) -> Result<Truck, AppError> {
        let current = self
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Truck not found".to_string()))?;

        let truck = sqlx::query_as::<_, Truck>(
            r#"
            UPDATE trucks
            SET license_plate = $3, brand = $4, model = $5, truck_status = $6
            WHERE id = $1 AND company_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(license_plate.unwrap_or(current.license_plate))
        .bind(brand.or(current.brand))
        .bind(model.or(current.model))
        .bind(truck_status.unwrap_or(current.truck_status))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating truck: {}", e)))?;

        Ok(truck)
    }

    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM trucks WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(company_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting truck: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Truck not found".to_string()));
        }

        Ok(())
    }
}
