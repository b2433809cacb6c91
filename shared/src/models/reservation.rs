//! Reservation Model

use super::user::UserRef;
use crate::error::{DomainError, DomainResult};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reservation status, set directly by staff
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Unknown(String),
}

impl ReservationStatus {
    /// Values staff may assign
    pub const SETTABLE: [ReservationStatus; 3] = [
        ReservationStatus::Pending,
        ReservationStatus::Confirmed,
        ReservationStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ReservationStatus::Unknown(_))
    }
}

impl From<&str> for ReservationStatus {
    fn from(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => ReservationStatus::Pending,
            "confirmed" => ReservationStatus::Confirmed,
            "cancelled" => ReservationStatus::Cancelled,
            _ => ReservationStatus::Unknown(raw.to_string()),
        }
    }
}

impl From<String> for ReservationStatus {
    fn from(raw: String) -> Self {
        ReservationStatus::from(raw.as_str())
    }
}

impl From<ReservationStatus> for String {
    fn from(status: ReservationStatus) -> Self {
        match status {
            ReservationStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ReservationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match ReservationStatus::from(s) {
            ReservationStatus::Unknown(raw) => {
                Err(DomainError::UnsupportedReservationStatus(ReservationStatus::Unknown(raw)))
            }
            status => Ok(status),
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(alias = "guests", default)]
    pub party_size: Option<u32>,
    #[serde(default)]
    pub status: Option<ReservationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Reservation {
    pub fn has_status(&self, status: &ReservationStatus) -> bool {
        self.status.as_ref() == Some(status)
    }

    /// Calendar day of the booking, accepting plain dates and timestamps
    pub fn day(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.date_naive()))
    }
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreate {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24 hour clock
    pub time: String,
    pub party_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ReservationCreate {
    /// Validate the dine-in form: date and time required, at least one guest
    pub fn new(
        date: &str,
        time: &str,
        party_size: u32,
        notes: Option<String>,
    ) -> DomainResult<Self> {
        let date = date.trim();
        let time = time.trim();
        if date.is_empty() {
            return Err(DomainError::MissingField("date"));
        }
        if time.is_empty() {
            return Err(DomainError::MissingField("time"));
        }
        if party_size == 0 {
            return Err(DomainError::MissingField("guests"));
        }

        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| DomainError::unknown("date", date))?;
        let time = NaiveTime::parse_from_str(time, "%H:%M")
            .map_err(|_| DomainError::unknown("time", time))?;

        Ok(Self {
            date: date.format("%Y-%m-%d").to_string(),
            time: time.format("%H:%M").to_string(),
            party_size,
            notes: notes.filter(|n| !n.trim().is_empty()),
        })
    }
}

/// Status update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationStatusUpdate {
    pub status: ReservationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_validates_form() {
        let create = ReservationCreate::new("2024-12-25", "19:00", 4, None).unwrap();
        assert_eq!(create.date, "2024-12-25");
        assert_eq!(create.time, "19:00");
        assert_eq!(create.party_size, 4);

        assert_eq!(
            ReservationCreate::new("", "19:00", 4, None),
            Err(DomainError::MissingField("date"))
        );
        assert_eq!(
            ReservationCreate::new("2024-12-25", " ", 4, None),
            Err(DomainError::MissingField("time"))
        );
        assert_eq!(
            ReservationCreate::new("2024-12-25", "19:00", 0, None),
            Err(DomainError::MissingField("guests"))
        );
        assert!(ReservationCreate::new("25/12/2024", "19:00", 2, None).is_err());
        assert!(ReservationCreate::new("2024-12-25", "7pm", 2, None).is_err());
    }

    #[test]
    fn test_create_serializes_party_size() {
        let create = ReservationCreate::new("2024-12-25", "19:00", 4, Some("  ".into())).unwrap();
        assert_eq!(
            serde_json::to_value(&create).unwrap(),
            serde_json::json!({ "date": "2024-12-25", "time": "19:00", "partySize": 4 })
        );
    }

    #[test]
    fn test_reservation_accepts_guests_alias() {
        let reservation: Reservation = serde_json::from_value(serde_json::json!({
            "_id": "r1",
            "date": "2024-12-25T00:00:00.000Z",
            "time": "19:00",
            "guests": 3,
            "status": "Confirmed"
        }))
        .unwrap();
        assert_eq!(reservation.party_size, Some(3));
        assert_eq!(reservation.status, Some(ReservationStatus::Confirmed));
        assert_eq!(reservation.day(), NaiveDate::from_ymd_opt(2024, 12, 25));
    }

    #[test]
    fn test_reservation_with_bare_user_id() {
        let reservations: Vec<Reservation> = serde_json::from_value(serde_json::json!([
            { "_id": "r1", "user": "64f0c0ffee", "status": "pending" },
            { "_id": "r2", "user": { "name": "Asha" }, "status": "pending" }
        ]))
        .unwrap();
        assert_eq!(reservations[0].user, Some(UserRef::Id("64f0c0ffee".to_string())));
        assert_eq!(reservations[1].user.as_ref().map(UserRef::name), Some("Asha"));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("CANCELLED".parse::<ReservationStatus>().unwrap(), ReservationStatus::Cancelled);
        assert!("seated".parse::<ReservationStatus>().is_err());
        assert!(ReservationStatus::SETTABLE.iter().all(ReservationStatus::is_known));
    }
}
