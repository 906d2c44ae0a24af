//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod assignment;
pub mod audit;
pub mod cost;
pub mod operator;
pub mod order;
pub mod payment;
pub mod truck;
