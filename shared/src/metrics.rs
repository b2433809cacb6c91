//! Derived metrics over fetched orders and reservations
//!
//! Everything here is a pure function of lists already fetched from the
//! API; nothing is cached.

use crate::models::{Order, OrderStatus, Reservation, ReservationStatus};
use crate::money::{to_decimal, to_f64};
use chrono::{DateTime, Datelike, TimeZone};
use rust_decimal::Decimal;
use serde::Serialize;

/// Revenue from completed orders
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RevenueSummary {
    pub daily: f64,
    pub monthly: f64,
}

/// Sum `totalAmount` of completed orders created in the month of `now`,
/// and separately of those created on the same day.
///
/// Creation times are compared in the time zone of `now`. Orders without a
/// status or a creation date are skipped.
pub fn revenue_summary<Tz: TimeZone>(orders: &[Order], now: &DateTime<Tz>) -> RevenueSummary {
    let tz = now.timezone();
    let (year, month, day) = (now.year(), now.month(), now.day());

    let mut daily = Decimal::ZERO;
    let mut monthly = Decimal::ZERO;

    for order in orders {
        if !order.has_status(&OrderStatus::Completed) {
            continue;
        }
        let Some(created) = order.created_at else {
            continue;
        };
        let created = created.with_timezone(&tz);
        if created.year() != year || created.month() != month {
            continue;
        }

        let amount = to_decimal(order.total_amount);
        monthly += amount;
        if created.day() == day {
            daily += amount;
        }
    }

    RevenueSummary {
        daily: to_f64(daily),
        monthly: to_f64(monthly),
    }
}

/// Admin dashboard headline counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_orders: usize,
    pub pending_orders: usize,
    pub in_progress_orders: usize,
    pub total_reservations: usize,
    pub pending_reservations: usize,
}

impl DashboardStats {
    pub fn compute(orders: &[Order], reservations: &[Reservation]) -> Self {
        Self {
            total_orders: orders.len(),
            pending_orders: pending_orders(orders).len(),
            in_progress_orders: in_progress_orders(orders).len(),
            total_reservations: reservations.len(),
            pending_reservations: reservations_with(reservations, &ReservationStatus::Pending)
                .len(),
        }
    }
}

pub fn pending_orders(orders: &[Order]) -> Vec<&Order> {
    orders
        .iter()
        .filter(|o| o.has_status(&OrderStatus::Pending))
        .collect()
}

/// Accepted or preparing
pub fn in_progress_orders(orders: &[Order]) -> Vec<&Order> {
    orders
        .iter()
        .filter(|o| o.status.as_ref().is_some_and(OrderStatus::is_in_progress))
        .collect()
}

pub fn reservations_with<'a>(
    reservations: &'a [Reservation],
    status: &ReservationStatus,
) -> Vec<&'a Reservation> {
    reservations.iter().filter(|r| r.has_status(status)).collect()
}

/// Per-status reservation counts for the staff dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReservationCounts {
    pub pending: usize,
    pub confirmed: usize,
    pub cancelled: usize,
}

impl ReservationCounts {
    pub fn compute(reservations: &[Reservation]) -> Self {
        let mut counts = Self::default();
        for reservation in reservations {
            match reservation.status {
                Some(ReservationStatus::Pending) => counts.pending += 1,
                Some(ReservationStatus::Confirmed) => counts.confirmed += 1,
                Some(ReservationStatus::Cancelled) => counts.cancelled += 1,
                _ => {}
            }
        }
        counts
    }
}

/// A customer's orders split for the "my orders" screen
#[derive(Debug, Default)]
pub struct OrderHistory<'a> {
    /// Still moving through the pipeline
    pub active: Vec<&'a Order>,
    pub completed: Vec<&'a Order>,
    pub cancelled: Vec<&'a Order>,
    /// Missing or unrecognised status (e.g. `delivered`)
    pub other: Vec<&'a Order>,
}

impl<'a> OrderHistory<'a> {
    pub fn split(orders: &'a [Order]) -> Self {
        let mut history = Self::default();
        for order in orders {
            match &order.status {
                Some(OrderStatus::Completed) => history.completed.push(order),
                Some(OrderStatus::Cancelled) => history.cancelled.push(order),
                Some(status) if status.can_cancel() => history.active.push(order),
                _ => history.other.push(order),
            }
        }
        history
    }
}
