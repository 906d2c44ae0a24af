//! Repositorios del sistema
//!
//! Capa de acceso a datos: consultas sqlx por entidad, siempre
//! filtradas por company_id.

pub mod assignment_repository;
pub mod audit_repository;
pub mod cost_repository;
pub mod operator_repository;
pub mod order_repository;
pub mod payment_repository;
pub mod truck_repository;
