//! DTOs del sistema
//!
//! Requests y responses de la API, separados de los modelos de base de datos.

pub mod assignment_dto;
pub mod common_dto;
pub mod cost_dto;
pub mod operator_dto;
pub mod order_dto;
pub mod payment_dto;
pub mod summary_dto;
pub mod truck_dto;
