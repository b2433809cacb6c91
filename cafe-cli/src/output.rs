//! Terminal rendering of screens and notices

use cafe_client::screens::{AdminDashboard, StaffDashboard};
use cafe_client::{
    CartStore, MenuItem, Notice, NoticeLevel, Order, PaymentIntent, Profile, Reservation, Session,
    Storefront,
};
use chrono::Local;
use shared::metrics::OrderHistory;
use shared::models::{UserRef, group_by_category};
use shared::money::format_amount;
use std::process::ExitCode;

const CURRENCY: &str = "₹";

fn amount(value: f64) -> String {
    format_amount(CURRENCY, value)
}

/// Print a notice and map it to the exit status
pub fn notice(notice: &Notice) -> ExitCode {
    match notice.level {
        NoticeLevel::Success => {
            println!("{}", notice.message);
            ExitCode::SUCCESS
        }
        NoticeLevel::Error => {
            eprintln!("error: {}", notice.message);
            ExitCode::FAILURE
        }
        NoticeLevel::LoginRequired => {
            eprintln!("{} (run `cafe login`)", notice.message);
            ExitCode::FAILURE
        }
    }
}

/// Render a loaded screen, or its failure notice
pub fn screen<T>(result: Result<T, Notice>, render: impl FnOnce(&T)) -> ExitCode {
    match result {
        Ok(value) => {
            render(&value);
            ExitCode::SUCCESS
        }
        Err(failure) => notice(&failure),
    }
}

pub fn session(current: Option<&Session>) {
    match current {
        Some(session) => {
            let (name, email) = session
                .profile
                .as_ref()
                .map_or(("", ""), |p| (p.name.as_str(), p.email.as_str()));
            println!("{} {name} <{email}>", session.role);
        }
        None => println!("Not logged in"),
    }
}

pub fn menu(store: &Storefront, items: &[MenuItem]) {
    if items.is_empty() {
        println!("The menu is empty");
        return;
    }
    for (category, members) in group_by_category(items) {
        println!("== {} ==", if category.is_empty() { "Other" } else { category });
        for item in members {
            println!("  [{}] {}  {}", item.id, item.name, amount(item.price));
            if !item.description.is_empty() {
                println!("      {}", item.description);
            }
            if let Some(url) = store.image_url(item) {
                println!("      {url}");
            }
        }
    }
}

pub fn cart(cart: &CartStore, order_type: impl std::fmt::Display) {
    if cart.is_empty() {
        println!("Your cart is empty");
        return;
    }
    for item in cart.items() {
        println!(
            "  [{}] {} x{}  {}",
            item.id,
            item.name,
            item.quantity,
            amount(item.line_total())
        );
    }
    println!("{} item(s), total {}", cart.item_count(), amount(cart.total()));
    println!("Order type: {order_type}");
}

pub fn payment_intent(intent: &PaymentIntent) {
    println!("Payment opened: gateway order {}", intent.order_id);
    println!("  key {}  amount {} {}", intent.key, intent.amount, intent.currency);
    println!(
        "Complete the payment, then run `cafe pay-verify --order-id {} --payment-id <id> --signature <sig>`",
        intent.order_id
    );
}

fn order_line(order: &Order) {
    let status = order.status.as_ref().map_or("unknown", |s| s.as_str());
    let kind = order.order_type.map_or("-", |t| t.as_str());
    let placed = order
        .created_at
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    println!(
        "  [{}] {status} {kind} {}  {placed}",
        order.id,
        amount(order.total_amount)
    );
    let customer = order.user.as_ref();
    println!(
        "      customer: {} {}",
        customer.map_or("Walk-in", UserRef::name),
        customer.and_then(UserRef::email).unwrap_or_default()
    );
    for line in &order.items {
        println!("      {} x{}", line.product.name(), line.quantity);
    }
}

pub fn my_orders(orders: &[Order]) {
    if orders.is_empty() {
        println!("You have no orders yet");
        return;
    }
    let history = OrderHistory::split(orders);
    for (title, group) in [
        ("Active", &history.active),
        ("Completed", &history.completed),
        ("Cancelled", &history.cancelled),
        ("Other", &history.other),
    ] {
        if group.is_empty() {
            continue;
        }
        println!("== {title} ==");
        group.iter().for_each(|order| order_line(order));
    }
}

fn reservation_line(reservation: &Reservation) {
    let status = reservation.status.as_ref().map_or("unknown", |s| s.as_str());
    let guests = reservation
        .party_size
        .map_or_else(|| "?".to_string(), |n| n.to_string());
    let who = reservation.user.as_ref().map_or("", UserRef::name);
    println!(
        "  [{}] {} {} guests:{guests} {status} {who}",
        reservation.id, reservation.date, reservation.time
    );
    if let Some(notes) = reservation.notes.as_deref().filter(|n| !n.is_empty()) {
        println!("      {notes}");
    }
}

pub fn reservations(reservations: &[Reservation]) {
    if reservations.is_empty() {
        println!("No reservations");
        return;
    }
    reservations.iter().for_each(reservation_line);
}

pub fn profile(profile: &Profile) {
    println!("{} <{}>", profile.name, profile.email);
    if let Some(phone) = &profile.phone {
        println!("phone: {phone}");
    }
    if let Some(role) = &profile.role {
        println!("role: {role}");
    }
    if let Some(created) = profile.created_at {
        println!("member since {}", created.format("%Y-%m-%d"));
    }
}

pub fn profiles(profiles: &[Profile]) {
    if profiles.is_empty() {
        println!("Nobody found");
        return;
    }
    for p in profiles {
        let role = p.role.as_deref().unwrap_or("");
        println!("  [{}] {} <{}> {role}", p.id, p.name, p.email);
    }
}

pub fn staff_dashboard(dashboard: &StaffDashboard) {
    let counts = dashboard.counts();
    println!(
        "Reservations: {} pending, {} confirmed, {} cancelled",
        counts.pending, counts.confirmed, counts.cancelled
    );
    reservations(&dashboard.reservations);
}

pub fn admin_dashboard(dashboard: &AdminDashboard) {
    let stats = dashboard.stats();
    let revenue = dashboard.revenue(&Local::now());
    println!(
        "Orders: {} total, {} pending, {} in progress",
        stats.total_orders, stats.pending_orders, stats.in_progress_orders
    );
    println!(
        "Reservations: {} total, {} pending",
        stats.total_reservations, stats.pending_reservations
    );
    println!(
        "Revenue: today {}, this month {}",
        amount(revenue.daily),
        amount(revenue.monthly)
    );

    for (title, orders) in [
        ("Pending orders", dashboard.pending_orders()),
        ("In progress", dashboard.in_progress_orders()),
    ] {
        println!("== {title} ==");
        for order in orders {
            order_line(order);
            if let Some(label) = order.status.as_ref().and_then(|s| s.next_action_label()) {
                println!("      next: {label}");
            }
        }
    }

    println!("== Pending reservations ==");
    dashboard
        .pending_reservations()
        .into_iter()
        .for_each(reservation_line);
}
