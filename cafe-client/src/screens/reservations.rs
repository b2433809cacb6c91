//! Dine-in reservation and "my reservations" screens

use super::{ScreenResult, Storefront};
use crate::Notice;
use shared::models::{Reservation, ReservationCreate, Role};

impl Storefront {
    /// Book a table. Requires a customer session.
    pub async fn reserve_table(
        &self,
        date: &str,
        time: &str,
        guests: u32,
        notes: Option<String>,
    ) -> Notice {
        if let Err(notice) = self.require(Role::Customer, "Please log in as a customer to make a reservation") {
            return notice;
        }

        let reservation = match ReservationCreate::new(date, time, guests, notes) {
            Ok(r) => r,
            Err(e) => return Notice::error(e.to_string()),
        };

        match self.client.create_reservation(&reservation).await {
            Ok(_) => {
                tracing::info!(
                    date = %reservation.date,
                    time = %reservation.time,
                    party_size = reservation.party_size,
                    "Reservation submitted"
                );
                Notice::success("Reservation submitted successfully!")
            }
            Err(e) => Notice::from_error(&e, "Reservation failed"),
        }
    }

    pub async fn my_reservations(&self) -> ScreenResult<Vec<Reservation>> {
        self.require(Role::Customer, "Please log in as a customer to view your reservations")?;
        self.client
            .my_reservations()
            .await
            .map_err(|e| Notice::from_error(&e, "Failed to fetch your reservations"))
    }
}
