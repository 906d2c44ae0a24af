//! Servicios del sistema
//!
//! Lógica de negocio que no pertenece a un solo repositorio:
//! auditoría de assignments y resumen de costos por pedido.

pub mod audit_service;
pub mod cost_summary_service;
