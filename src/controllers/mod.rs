//! Controllers del sistema
//!
//! Reglas de negocio y orquestación de transacciones por recurso.

pub mod assignment_controller;
pub mod cost_controller;
pub mod operator_controller;
pub mod order_controller;
pub mod payment_controller;
pub mod truck_controller;
