use serde::{Deserialize, Serialize};

/// One search result row. The backend owns seat inventory and pricing; this
/// is a read-only view model fetched per search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub route_id: i64,
    pub source: String,
    pub destination: String,
    /// YYYY-MM-DD
    pub date_of_journey: String,
    /// Backend LocalTime, usually "HH:MM:SS"
    pub departure_time: String,
    pub arrival_time: String,
    pub total_seats: u32,
    pub available_seats: u32,
    pub price: f64,
}

impl Route {
    pub fn sold_out(&self) -> bool {
        self.available_seats == 0
    }
}

/// Admin route-creation payload for POST /routes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRouteRequest {
    pub source: String,
    pub destination: String,
    /// "HH:MM", 24-hour
    pub departure_time: String,
    pub arrival_time: String,
    pub date_of_journey: String,
    pub total_seats: u32,
    pub price: f64,
}
