//! Controller de payments
//!
//! Liquida un conjunto de assignments bajo un solo payment. Los ids
//! pedidos se particionan en not_found / skipped (ya pagados) / to_update,
//! y el payment más los enlaces se escriben en una única transacción.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::payment_dto::{BatchPayRequest, BatchPayResponse};
use crate::models::assignment::AssignSnapshot;
use crate::models::payment::Payment;
use crate::repositories::assignment_repository::{AssignmentPaymentRow, AssignmentRepository};
use crate::repositories::payment_repository::PaymentRepository;
use crate::services::audit_service::AuditRecorder;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_date, validate_datetime, FieldErrors};

/// Campos del lote ya validados y parseados
#[derive(Debug)]
struct ValidatedBatch {
    assign_ids: Vec<Uuid>,
    value: Decimal,
    status: String,
    date_start: NaiveDate,
    date_end: NaiveDate,
    bonus: Decimal,
    date_payment: DateTime<Utc>,
}

pub struct PaymentController {
    pool: PgPool,
    payments: PaymentRepository,
    assignments: AssignmentRepository,
    recorder: AuditRecorder,
}

impl PaymentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            payments: PaymentRepository::new(pool.clone()),
            assignments: AssignmentRepository::new(pool.clone()),
            recorder: AuditRecorder::new(pool.clone()),
            pool,
        }
    }

    pub async fn batch_pay(
        &self,
        company_id: Uuid,
        request: BatchPayRequest,
    ) -> Result<BatchPayResponse, AppError> {
        let batch = validate_batch_request(request)?;

        let rows = self
            .assignments
            .find_payment_rows(&batch.assign_ids, company_id)
            .await?;
        let (to_update, skipped, not_found) = partition_for_payment(&batch.assign_ids, &rows);

        // Si todo lo encontrado ya está pagado no se crea ningún payment
        if to_update.is_empty() {
            return Err(AppError::NothingToUpdate { skipped, not_found });
        }

        // Snapshots previos para auditar el cambio de payment_id
        let current_rows = self.assignments.find_by_ids(&to_update, company_id).await?;

        let mut tx = self.pool.begin().await?;
        let payment = self
            .payments
            .insert(
                &mut tx,
                company_id,
                batch.value,
                batch.bonus,
                batch.status,
                batch.date_start,
                batch.date_end,
                batch.date_payment,
            )
            .await?;

        let mut updated = Vec::with_capacity(to_update.len());
        for assignment in &current_rows {
            let before: AssignSnapshot = assignment.snapshot();
            let after = self
                .assignments
                .set_payment(&mut tx, assignment.id, company_id, payment.id)
                .await?;
            self.recorder
                .record_change(&mut tx, company_id, assignment.id, Some(&before), Some(&after.snapshot()))
                .await?;
            updated.push(assignment.id);
        }
        tx.commit().await?;

        log::info!(
            "Batch payment {} created: {} updated, {} skipped, {} not found",
            payment.id,
            updated.len(),
            skipped.len(),
            not_found.len()
        );

        Ok(BatchPayResponse {
            payment,
            updated,
            skipped,
            not_found,
        })
    }

    pub async fn get_by_id(&self, id: Uuid, company_id: Uuid) -> Result<Payment, AppError> {
        self.payments
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<Payment>, AppError> {
        self.payments.find_by_company(company_id).await
    }
}

/// Validación campo a campo con mensajes por campo; las fechas mal
/// formadas se reportan aparte con el texto del error de parseo.
fn validate_batch_request(request: BatchPayRequest) -> Result<ValidatedBatch, AppError> {
    let mut errors = FieldErrors::new();

    if request.assign_ids.as_ref().map_or(true, |ids| ids.is_empty()) {
        errors.add("assign_ids", "assign_ids is required and must not be empty");
    }
    match request.value {
        None => errors.add("value", "value is required"),
        Some(v) if v < Decimal::ZERO => errors.add("value", "value must not be negative"),
        _ => {}
    }
    if request.status.as_ref().map_or(true, |s| s.trim().is_empty()) {
        errors.add("status", "status is required");
    }
    if request.date_start.is_none() {
        errors.add("date_start", "date_start is required");
    }
    if request.date_end.is_none() {
        errors.add("date_end", "date_end is required");
    }
    errors.into_result()?;

    let date_start = validate_date(request.date_start.as_deref().unwrap_or_default())?;
    let date_end = validate_date(request.date_end.as_deref().unwrap_or_default())?;
    let date_payment = match request.date_payment.as_deref() {
        Some(raw) => validate_datetime(raw)?,
        None => Utc::now(),
    };

    Ok(ValidatedBatch {
        assign_ids: request.assign_ids.unwrap_or_default(),
        value: request.value.unwrap_or_default(),
        status: request.status.unwrap_or_default(),
        date_start,
        date_end,
        bonus: request.bonus.unwrap_or(Decimal::ZERO),
        date_payment,
    })
}

/// Particionar los ids pedidos, preservando el orden del request:
/// - not_found: sin fila de assignment
/// - skipped: enlazado a un payment cuyo estado es "paid" (sin distinguir
///   mayúsculas) — nunca se sobreescribe
/// - to_update: todo lo demás
fn partition_for_payment(
    requested: &[Uuid],
    rows: &[AssignmentPaymentRow],
) -> (Vec<Uuid>, Vec<Uuid>, Vec<Uuid>) {
    let mut to_update = Vec::new();
    let mut skipped = Vec::new();
    let mut not_found = Vec::new();

    for id in requested {
        match rows.iter().find(|r| r.id == *id) {
            None => not_found.push(*id),
            Some(row) => {
                let already_paid = row.payment_id.is_some()
                    && row
                        .payment_status
                        .as_deref()
                        .map_or(false, |s| s.eq_ignore_ascii_case("paid"));
                if already_paid {
                    skipped.push(*id);
                } else {
                    to_update.push(*id);
                }
            }
        }
    }

    (to_update, skipped, not_found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: Uuid, payment_id: Option<Uuid>, status: Option<&str>) -> AssignmentPaymentRow {
        AssignmentPaymentRow {
            id,
            payment_id,
            payment_status: status.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_partition_three_ways() {
        // A1 libre, A2 ya pagado, A3 inexistente
        let a1 = Uuid::new_v4();
        let a2 = Uuid::new_v4();
        let a3 = Uuid::new_v4();
        let rows = vec![
            row(a1, None, None),
            row(a2, Some(Uuid::new_v4()), Some("paid")),
        ];

        let (to_update, skipped, not_found) = partition_for_payment(&[a1, a2, a3], &rows);
        assert_eq!(to_update, vec![a1]);
        assert_eq!(skipped, vec![a2]);
        assert_eq!(not_found, vec![a3]);
    }

    #[test]
    fn test_paid_status_is_case_insensitive() {
        let a1 = Uuid::new_v4();
        let rows = vec![row(a1, Some(Uuid::new_v4()), Some("PAID"))];
        let (to_update, skipped, _) = partition_for_payment(&[a1], &rows);
        assert!(to_update.is_empty());
        assert_eq!(skipped, vec![a1]);
    }

    #[test]
    fn test_pending_payment_can_be_reassigned() {
        let a1 = Uuid::new_v4();
        let rows = vec![row(a1, Some(Uuid::new_v4()), Some("pending"))];
        let (to_update, skipped, _) = partition_for_payment(&[a1], &rows);
        assert_eq!(to_update, vec![a1]);
        assert!(skipped.is_empty());
    }

    #[test]
    fn test_validate_batch_request_reports_all_missing_fields() {
        let request = BatchPayRequest {
            assign_ids: None,
            value: None,
            status: None,
            date_start: None,
            date_end: None,
            bonus: None,
            date_payment: None,
        };
        match validate_batch_request(request).unwrap_err() {
            AppError::ValidationError(details) => {
                for field in ["assign_ids", "value", "status", "date_start", "date_end"] {
                    assert!(details.get(field).is_some(), "missing field: {}", field);
                }
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validate_batch_request_bad_date() {
        let request = BatchPayRequest {
            assign_ids: Some(vec![Uuid::new_v4()]),
            value: Some(Decimal::from(900)),
            status: Some("paid".to_string()),
            date_start: Some("21/04/2025".to_string()),
            date_end: Some("2025-04-27".to_string()),
            bonus: None,
            date_payment: None,
        };
        match validate_batch_request(request).unwrap_err() {
            AppError::InvalidDateFormat(msg) => assert!(msg.contains("21/04/2025")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validate_batch_request_accepts_datetime_payment_date() {
        let request = BatchPayRequest {
            assign_ids: Some(vec![Uuid::new_v4()]),
            value: Some(Decimal::from(900)),
            status: Some("paid".to_string()),
            date_start: Some("2025-04-21".to_string()),
            date_end: Some("2025-04-27".to_string()),
            bonus: Some(Decimal::from(50)),
            date_payment: Some("2025-04-28T09:15:00Z".to_string()),
        };
        let batch = validate_batch_request(request).unwrap();
        assert_eq!(batch.bonus, Decimal::from(50));
        assert_eq!(batch.date_start.to_string(), "2025-04-21");
    }
}
