//! Booking data source. Only a fixture-backed provider exists; the trait is
//! the seam for a real read API keyed by user id.

use super::types::{Booking, BookingStatus};
use crate::{app_lib::ServiceError, features::auth::MockUser};
use async_trait::async_trait;

#[async_trait(?Send)]
pub trait BookingProvider {
    async fn bookings_for(&self, user: &MockUser) -> Result<Vec<Booking>, ServiceError>;
}

/// Serves the same two bookings to every signed-in user.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixtureBookings;

#[async_trait(?Send)]
impl BookingProvider for FixtureBookings {
    async fn bookings_for(&self, _user: &MockUser) -> Result<Vec<Booking>, ServiceError> {
        Ok(fixtures())
    }
}

pub fn fixtures() -> Vec<Booking> {
    vec![
        Booking {
            id: "1".to_string(),
            user_id: "1".to_string(),
            service: "Window Repair".to_string(),
            date: "2024-01-15".to_string(),
            time: "10:00 AM".to_string(),
            address: "123 Main Street, City".to_string(),
            status: BookingStatus::Confirmed,
            description: Some("Broken window seal needs repair".to_string()),
            created_at: "2024-01-10".to_string(),
        },
        Booking {
            id: "2".to_string(),
            user_id: "1".to_string(),
            service: "Window Replacement".to_string(),
            date: "2024-01-20".to_string(),
            time: "2:00 PM".to_string(),
            address: "456 Oak Avenue, City".to_string(),
            status: BookingStatus::Pending,
            description: Some("Replace old double-hung windows".to_string()),
            created_at: "2024-01-12".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{BookingProvider, FixtureBookings};
    use crate::{
        app_lib::ServiceError,
        features::{auth::MockUser, bookings::BookingStatus},
    };

    #[tokio::test]
    async fn fixture_provider_returns_two_bookings() -> Result<(), ServiceError> {
        let user = MockUser {
            name: "John Doe".to_string(),
            phone: "5551234567".to_string(),
            email: "john@example.com".to_string(),
        };

        let bookings = FixtureBookings.bookings_for(&user).await?;

        let summary: Vec<_> = bookings
            .iter()
            .map(|booking| (booking.service.as_str(), booking.status, booking.time.as_str()))
            .collect();
        assert_eq!(
            summary,
            [
                ("Window Repair", BookingStatus::Confirmed, "10:00 AM"),
                ("Window Replacement", BookingStatus::Pending, "2:00 PM"),
            ]
        );
        assert!(bookings.iter().all(|booking| booking.user_id == "1"));
        Ok(())
    }
}
