use serde::Deserialize;

// Request para crear un camión
#[derive(Debug, Deserialize)]
pub struct CreateTruckRequest {
    pub license_plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub truck_status: Option<String>,
}

// Request para actualizar un camión
#[derive(Debug, Deserialize)]
pub struct UpdateTruckRequest {
    pub license_plate: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub truck_status: Option<String>,
}
