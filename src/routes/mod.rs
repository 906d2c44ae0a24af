pub mod assignment_routes;
pub mod cost_routes;
pub mod operator_routes;
pub mod order_routes;
pub mod payment_routes;
pub mod truck_routes;
