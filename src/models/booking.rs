use serde::{Deserialize, Serialize};

use crate::models::PassengerInput;

/// Lifecycle state of a booking. Created server-side; this client only reads
/// and cancels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    #[serde(rename = "CONFIRMED")]
    Confirmed,
    #[serde(rename = "CANCELLED")]
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }
}

/// One booking row from /passengers/bookings or /admin/bookings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: String,
    pub passenger_id: i64,
    pub route_id: i64,
    pub source: String,
    pub destination: String,
    pub date_of_journey: String,
    pub seat_numbers: String,
    pub total_price: f64,
    pub status: BookingStatus,
}

impl Booking {
    /// The cancel control is only live for confirmed bookings.
    pub fn can_cancel(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }
}

/// Payload for POST /passengers/routes/{routeId}/book.
#[derive(Debug, Clone, Serialize)]
pub struct BookSeatsRequest {
    pub passengers: Vec<PassengerInput>,
}

/// Pick the booking MyTicket shows: the most recent confirmed one, falling
/// back to the most recent booking of any status. The backend returns the
/// list newest first.
pub fn pick_ticket(bookings: &[Booking]) -> Option<&Booking> {
    bookings
        .iter()
        .find(|b| b.status == BookingStatus::Confirmed)
        .or_else(|| bookings.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(id: &str, status: BookingStatus) -> Booking {
        Booking {
            booking_id: id.to_string(),
            passenger_id: 1,
            route_id: 7,
            source: "Ahmedabad".to_string(),
            destination: "Surat".to_string(),
            date_of_journey: "2025-01-10".to_string(),
            seat_numbers: "1,2".to_string(),
            total_price: 1000.0,
            status,
        }
    }

    #[test]
    fn cancel_only_enabled_for_confirmed() {
        assert!(booking("a", BookingStatus::Confirmed).can_cancel());
        assert!(!booking("a", BookingStatus::Cancelled).can_cancel());
    }

    #[test]
    fn ticket_prefers_confirmed_over_newer_cancelled() {
        let list = vec![
            booking("newest-cancelled", BookingStatus::Cancelled),
            booking("older-confirmed", BookingStatus::Confirmed),
        ];
        assert_eq!(pick_ticket(&list).unwrap().booking_id, "older-confirmed");
    }

    #[test]
    fn ticket_falls_back_to_most_recent_any_status() {
        let list = vec![
            booking("newest", BookingStatus::Cancelled),
            booking("older", BookingStatus::Cancelled),
        ];
        assert_eq!(pick_ticket(&list).unwrap().booking_id, "newest");
        assert!(pick_ticket(&[]).is_none());
    }

    #[test]
    fn booking_deserializes_from_backend_shape() {
        let json = r#"{
            "bookingId": "b-1", "passengerId": 4, "routeId": 9,
            "source": "Ahmedabad", "destination": "Surat",
            "dateOfJourney": "2025-02-01", "seatNumbers": "3,4",
            "totalPrice": 840.5, "status": "CONFIRMED"
        }"#;
        let b: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(b.status, BookingStatus::Confirmed);
        assert_eq!(b.seat_numbers, "3,4");
        assert!((b.total_price - 840.5).abs() < f64::EPSILON);
    }
}
