use serde::Deserialize;

use crate::models::{Booking, BookingStatus};

/// Aggregate counters from GET /admin/statistics.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_bookings: u64,
    pub cancelled_bookings: u64,
    pub revenue: f64,
}

impl Statistics {
    pub fn confirmed_bookings(&self) -> u64 {
        self.total_bookings.saturating_sub(self.cancelled_bookings)
    }

    /// Integer percentage of cancelled bookings; confirmed is the complement
    /// so the two always sum to 100 when there is any booking at all.
    pub fn cancelled_percent(&self) -> u64 {
        if self.total_bookings == 0 {
            return 0;
        }
        let ratio = self.cancelled_bookings as f64 / self.total_bookings as f64;
        (ratio * 100.0).round() as u64
    }

    pub fn confirmed_percent(&self) -> u64 {
        if self.total_bookings == 0 {
            0
        } else {
            100 - self.cancelled_percent()
        }
    }
}

/// Geometry for the two-slice revenue circle: each slice is drawn with
/// stroke-dasharray "<len> <circumference>" and the second slice is shifted
/// by the first slice's length via a negative stroke-dashoffset.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueSlices {
    pub confirmed_revenue: f64,
    pub cancelled_revenue: f64,
    pub total: f64,
    pub radius: f64,
    pub circumference: f64,
    pub confirmed_len: f64,
    pub cancelled_len: f64,
}

const PIE_RADIUS: f64 = 30.0;

/// Split revenue into confirmed vs cancelled from the full booking list.
/// The divisor is floored at 1 so an empty list draws an empty circle
/// instead of dividing by zero.
pub fn revenue_slices(bookings: &[Booking]) -> RevenueSlices {
    let mut confirmed_revenue = 0.0;
    let mut cancelled_revenue = 0.0;
    for b in bookings {
        match b.status {
            BookingStatus::Cancelled => cancelled_revenue += b.total_price,
            BookingStatus::Confirmed => confirmed_revenue += b.total_price,
        }
    }

    let total = (confirmed_revenue + cancelled_revenue).max(1.0);
    let circumference = 2.0 * std::f64::consts::PI * PIE_RADIUS;

    RevenueSlices {
        confirmed_revenue,
        cancelled_revenue,
        total,
        radius: PIE_RADIUS,
        circumference,
        confirmed_len: confirmed_revenue / total * circumference,
        cancelled_len: cancelled_revenue / total * circumference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(price: f64, status: BookingStatus) -> Booking {
        Booking {
            booking_id: "b".to_string(),
            passenger_id: 1,
            route_id: 1,
            source: "A".to_string(),
            destination: "B".to_string(),
            date_of_journey: "2025-01-01".to_string(),
            seat_numbers: "1".to_string(),
            total_price: price,
            status,
        }
    }

    #[test]
    fn confirmed_is_total_minus_cancelled() {
        let s = Statistics {
            total_bookings: 10,
            cancelled_bookings: 3,
            revenue: 0.0,
        };
        assert_eq!(s.confirmed_bookings(), 7);
        assert_eq!(s.cancelled_percent(), 30);
        assert_eq!(s.confirmed_percent(), 70);
    }

    #[test]
    fn percentages_are_zero_without_bookings() {
        let s = Statistics::default();
        assert_eq!(s.confirmed_percent(), 0);
        assert_eq!(s.cancelled_percent(), 0);
    }

    #[test]
    fn cancelled_larger_than_total_saturates() {
        let s = Statistics {
            total_bookings: 2,
            cancelled_bookings: 5,
            revenue: 0.0,
        };
        assert_eq!(s.confirmed_bookings(), 0);
    }

    #[test]
    fn slice_lengths_partition_the_circle() {
        let slices = revenue_slices(&[
            booking(300.0, BookingStatus::Confirmed),
            booking(100.0, BookingStatus::Cancelled),
        ]);
        assert!((slices.confirmed_revenue - 300.0).abs() < 1e-9);
        assert!((slices.cancelled_revenue - 100.0).abs() < 1e-9);
        let sum = slices.confirmed_len + slices.cancelled_len;
        assert!((sum - slices.circumference).abs() < 1e-9);
        // Second slice starts where the first ends.
        assert!(slices.confirmed_len > slices.cancelled_len);
    }

    #[test]
    fn empty_list_draws_nothing_without_dividing_by_zero() {
        let slices = revenue_slices(&[]);
        assert_eq!(slices.confirmed_len, 0.0);
        assert_eq!(slices.cancelled_len, 0.0);
        assert_eq!(slices.total, 1.0);
    }
}
