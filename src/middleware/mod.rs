//! Middleware del sistema
//!
//! Este módulo contiene el middleware de contexto de empresa y CORS.

pub mod company;
pub mod cors;

pub use company::*;
pub use cors::*;
