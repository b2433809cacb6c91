//! Reservation endpoints

use super::list;
use crate::{ClientResult, HttpClient};
use serde_json::Value;
use shared::models::{Reservation, ReservationCreate, ReservationStatus, ReservationStatusUpdate};

impl HttpClient {
    pub async fn create_reservation(&self, reservation: &ReservationCreate) -> ClientResult<Value> {
        self.post("/reservations", reservation).await
    }

    /// All reservations (staff and admin)
    pub async fn list_reservations(&self) -> ClientResult<Vec<Reservation>> {
        list(self.get("/reservations").await?, "reservations")
    }

    /// Reservations of the signed-in customer
    pub async fn my_reservations(&self) -> ClientResult<Vec<Reservation>> {
        list(self.get("/reservations/my").await?, "reservations")
    }

    pub async fn update_reservation_status(
        &self,
        id: &str,
        status: &ReservationStatus,
    ) -> ClientResult<Value> {
        let body = ReservationStatusUpdate {
            status: status.clone(),
        };
        self.put(&format!("/reservations/{id}/status"), &body).await
    }
}
