use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Capitalized label shown on the status badge.
    pub const fn label(self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    /// CSS modifier for the badge colour.
    pub const fn tone(self) -> &'static str {
        match self {
            BookingStatus::Pending => "warning",
            BookingStatus::Confirmed => "info",
            BookingStatus::Completed => "success",
            BookingStatus::Cancelled => "danger",
        }
    }

    /// Only pending bookings offer a cancel action.
    pub const fn is_cancellable(self) -> bool {
        matches!(self, BookingStatus::Pending)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// A scheduled service visit. Read-only on the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub address: String,
    pub status: BookingStatus,
    pub description: Option<String>,
    pub created_at: String,
}

/// Dashboard sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Bookings,
    Profile,
    Support,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Bookings,
        DashboardTab::Profile,
        DashboardTab::Support,
    ];

    /// Suffix of the tab button and panel element ids.
    pub const fn id(self) -> &'static str {
        match self {
            DashboardTab::Bookings => "bookings",
            DashboardTab::Profile => "profile",
            DashboardTab::Support => "support",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DashboardTab::Bookings => "My Bookings",
            DashboardTab::Profile => "Profile",
            DashboardTab::Support => "Support",
        }
    }
}

pub const SUPPORT_PHONE: &str = "(555) 123-4567";
pub const SUPPORT_EMAIL: &str = "support@windowfixpro.com";
