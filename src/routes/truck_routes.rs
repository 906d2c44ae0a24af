use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::truck_controller::TruckController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::truck_dto::{CreateTruckRequest, UpdateTruckRequest};
use crate::middleware::company::CompanyContext;
use crate::models::truck::Truck;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_truck_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_truck))
        .route("/", get(list_trucks))
        .route("/:id", get(get_truck))
        .route("/:id", put(update_truck))
        .route("/:id", delete(delete_truck))
}

async fn create_truck(
    State(state): State<AppState>,
    company: CompanyContext,
    Json(request): Json<CreateTruckRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Truck>>), AppError> {
    let controller = TruckController::new(state.pool.clone());
    let truck = controller.create(company.company_id, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            truck,
            "Camión creado exitosamente".to_string(),
        )),
    ))
}

async fn get_truck(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(id): Path<Uuid>,
) -> Result<Json<Truck>, AppError> {
    let controller = TruckController::new(state.pool.clone());
    let truck = controller.get_by_id(id, company.company_id).await?;
    Ok(Json(truck))
}

async fn list_trucks(
    State(state): State<AppState>,
    company: CompanyContext,
) -> Result<Json<Vec<Truck>>, AppError> {
    let controller = TruckController::new(state.pool.clone());
    let trucks = controller.list_by_company(company.company_id).await?;
    Ok(Json(trucks))
}

async fn update_truck(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTruckRequest>,
) -> Result<Json<ApiResponse<Truck>>, AppError> {
    let controller = TruckController::new(state.pool.clone());
    let truck = controller.update(id, company.company_id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        truck,
        "Camión actualizado exitosamente".to_string(),
    )))
}

async fn delete_truck(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TruckController::new(state.pool.clone());
    controller.delete(id, company.company_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Camión eliminado exitosamente"
    })))
}
