//! Staff and admin dashboards
//!
//! Lists are fetched once; status changes are written to the backend and
//! then applied to the local copy, the way the web dashboards update their
//! state after a successful request.

use super::{ScreenResult, Storefront};
use crate::Notice;
use chrono::{DateTime, TimeZone};
use shared::metrics::{self, DashboardStats, ReservationCounts, RevenueSummary};
use shared::models::{Order, OrderStatus, Reservation, ReservationStatus, Role};

/// Staff dashboard: all reservations
#[derive(Debug, Clone, Default)]
pub struct StaffDashboard {
    pub reservations: Vec<Reservation>,
}

impl StaffDashboard {
    pub fn counts(&self) -> ReservationCounts {
        ReservationCounts::compute(&self.reservations)
    }
}

/// Admin dashboard: all orders and reservations
#[derive(Debug, Clone, Default)]
pub struct AdminDashboard {
    pub orders: Vec<Order>,
    pub reservations: Vec<Reservation>,
}

impl AdminDashboard {
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(&self.orders, &self.reservations)
    }

    pub fn revenue<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> RevenueSummary {
        metrics::revenue_summary(&self.orders, now)
    }

    pub fn pending_orders(&self) -> Vec<&Order> {
        metrics::pending_orders(&self.orders)
    }

    pub fn in_progress_orders(&self) -> Vec<&Order> {
        metrics::in_progress_orders(&self.orders)
    }

    pub fn pending_reservations(&self) -> Vec<&Reservation> {
        metrics::reservations_with(&self.reservations, &ReservationStatus::Pending)
    }
}

impl Storefront {
    pub async fn staff_dashboard(&self) -> ScreenResult<StaffDashboard> {
        self.require(Role::Staff, "No staff logged in! Please login again.")?;
        let reservations = self
            .client
            .list_reservations()
            .await
            .map_err(|e| Notice::from_error(&e, "Failed to fetch reservations"))?;
        Ok(StaffDashboard { reservations })
    }

    /// Fetch orders and reservations concurrently
    pub async fn admin_dashboard(&self) -> ScreenResult<AdminDashboard> {
        self.require(Role::Admin, "Admin not logged in")?;
        let (reservations, orders) = tokio::try_join!(
            self.client.list_reservations(),
            self.client.list_orders()
        )
        .map_err(|e| Notice::from_error(&e, "Failed to load dashboard data."))?;
        Ok(AdminDashboard {
            orders,
            reservations,
        })
    }

    /// Move an order one step along the pipeline
    pub async fn advance_order(&self, orders: &mut [Order], id: &str) -> Notice {
        let next = match orders.iter().find(|o| o.id == id) {
            Some(order) => order.next_status().ok_or_else(|| {
                format!(
                    "Order cannot be advanced from {}",
                    order.status.as_ref().map_or("an unknown state", OrderStatus::as_str)
                )
            }),
            None => Err("Order not found".to_string()),
        };
        match next {
            Ok(next) => self.set_order_status(orders, id, next).await,
            Err(message) => Notice::error(message),
        }
    }

    pub async fn cancel_order(&self, orders: &mut [Order], id: &str) -> Notice {
        self.set_order_status(orders, id, OrderStatus::Cancelled).await
    }

    /// Validate, write, then apply the change locally. The backend's copy
    /// of the order replaces the local one when it sends one back.
    pub async fn set_order_status(
        &self,
        orders: &mut [Order],
        id: &str,
        target: OrderStatus,
    ) -> Notice {
        let Some(order) = orders.iter_mut().find(|o| o.id == id) else {
            return Notice::error("Order not found");
        };

        let current = order.status.clone().unwrap_or(OrderStatus::Unknown(String::new()));
        if let Err(e) = current.transition_to(&target) {
            tracing::warn!(order_id = %id, error = %e, "Rejected order transition");
            return Notice::error(e.to_string());
        }

        match self.client.update_order_status(id, &target).await {
            Ok(updated) => {
                tracing::info!(order_id = %id, status = %target, "Order status updated");
                match updated {
                    Some(updated) => *order = updated,
                    None => order.status = Some(target.clone()),
                }
                Notice::success(format!("Order marked as {target}"))
            }
            Err(e) => Notice::from_error(&e, "Status update failed"),
        }
    }

    /// Set a reservation's status directly
    pub async fn set_reservation_status(
        &self,
        reservations: &mut [Reservation],
        id: &str,
        status: ReservationStatus,
    ) -> Notice {
        if !status.is_known() {
            return Notice::error(format!("Unsupported reservation status: {status}"));
        }
        let Some(reservation) = reservations.iter_mut().find(|r| r.id == id) else {
            return Notice::error("Reservation not found");
        };

        match self.client.update_reservation_status(id, &status).await {
            Ok(_) => {
                tracing::info!(reservation_id = %id, status = %status, "Reservation status updated");
                reservation.status = Some(status.clone());
                Notice::success(format!("Reservation {status}"))
            }
            Err(e) => Notice::from_error(&e, "Failed to update reservation"),
        }
    }
}
