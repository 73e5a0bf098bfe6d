//! Bookings shown on the dashboard, their statuses and the dashboard tabs.

mod provider;
mod types;

pub use provider::{fixtures, BookingProvider, FixtureBookings};
pub use types::{Booking, BookingStatus, DashboardTab, SUPPORT_EMAIL, SUPPORT_PHONE};
