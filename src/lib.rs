//! Back-office de despacho multi-tenant
//!
//! Empresas gestionan pedidos, asignan operarios/camiones, registran
//! costos de combustible y trabajo, y liquidan pagos por lote.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
