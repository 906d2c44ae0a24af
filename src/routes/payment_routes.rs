use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::payment_controller::PaymentController;
use crate::dto::payment_dto::{BatchPayRequest, BatchPayResponse};
use crate::middleware::company::CompanyContext;
use crate::models::payment::Payment;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_payment_router() -> Router<AppState> {
    Router::new()
        .route("/batch", post(batch_pay))
        .route("/", get(list_payments))
        .route("/:id", get(get_payment))
}

async fn batch_pay(
    State(state): State<AppState>,
    company: CompanyContext,
    Json(request): Json<BatchPayRequest>,
) -> Result<(StatusCode, Json<BatchPayResponse>), AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let response = controller.batch_pay(company.company_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_payment(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(id): Path<Uuid>,
) -> Result<Json<Payment>, AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let payment = controller.get_by_id(id, company.company_id).await?;
    Ok(Json(payment))
}

async fn list_payments(
    State(state): State<AppState>,
    company: CompanyContext,
) -> Result<Json<Vec<Payment>>, AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let payments = controller.list_by_company(company.company_id).await?;
    Ok(Json(payments))
}
