//! cafe - café storefront from the command line
//!
//! Every storefront screen is a subcommand. The session and cart live in a
//! JSON storage file between invocations.

mod logger;
mod output;

use cafe_client::screens::{AdminDashboard, CheckoutOutcome};
use cafe_client::{
    ClientConfig, CustomerCreate, MenuItemCreate, MenuItemUpdate, Notice, OrderStatus, OrderType,
    PaymentConfirmation, PaymentMethod, ProfileField, ReservationStatus, Role, StaffCreate,
    Storefront,
};
use clap::{Parser, Subcommand};
use shared::DomainError;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cafe", version)]
#[command(about = "Café storefront: menu, cart, orders and reservations")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend host [env: CAFE_API_URL]
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Storage file for the session and cart [env: CAFE_STORAGE_PATH]
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    /// Request timeout in seconds [env: CAFE_TIMEOUT_SECS]
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Log filter (RUST_LOG wins when set)
    #[arg(long, global = true, env = "CAFE_LOG", default_value = "warn")]
    log_level: String,

    /// Log as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Create a customer account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in as customer, staff or admin
    Login {
        role: Role,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out of every role
    Logout,
    /// Show who is signed in
    Whoami,
    /// Browse the menu
    Menu {
        /// Only show this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Manage the cart
    #[command(subcommand)]
    Cart(CartCommand),
    /// Place the order in the cart
    Checkout {
        #[arg(long, default_value = "cash")]
        method: PaymentMethod,
    },
    /// Verify an online payment and place the order
    PayVerify {
        #[arg(long)]
        order_id: String,
        #[arg(long)]
        payment_id: String,
        #[arg(long)]
        signature: String,
    },
    /// Book a table
    Reserve {
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// HH:MM
        #[arg(long)]
        time: String,
        #[arg(long)]
        guests: u32,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Your reservations
    Reservations,
    /// Your orders
    Orders,
    /// Show or edit your customer profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileCommand>,
    },
    /// Staff screens
    #[command(subcommand)]
    Staff(StaffCommand),
    /// Admin screens
    #[command(subcommand)]
    Admin(AdminCommand),
    /// Send a message to the café
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
        /// Attachment
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum CartCommand {
    Show,
    /// Add one of a menu item
    Add { id: String },
    Inc { id: String },
    /// Decrease quantity; removes the line at one
    Dec { id: String },
    Remove { id: String },
    Clear,
    /// Choose delivery or pickup
    Type { order_type: OrderType },
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Update one field (name, email, phone, password)
    Set { field: ProfileField, value: String },
}

#[derive(Subcommand)]
enum StaffCommand {
    /// Reservation overview
    Dashboard,
    /// Confirm or cancel a reservation
    Reservation {
        id: String,
        #[arg(value_parser = parse_reservation_status)]
        status: ReservationStatus,
    },
    /// Update one field of your staff profile
    Profile { field: ProfileField, value: String },
}

#[derive(Subcommand)]
enum AdminCommand {
    /// Orders, reservations and revenue
    Dashboard,
    /// Move an order to its next status
    Advance { id: String },
    Cancel { id: String },
    /// Set an order status directly
    SetStatus {
        id: String,
        #[arg(value_parser = parse_order_status)]
        status: OrderStatus,
    },
    Reservation {
        id: String,
        #[arg(value_parser = parse_reservation_status)]
        status: ReservationStatus,
    },
    Profile,
    StaffList,
    StaffCreate {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Defaults to waiter
        #[arg(long, default_value = "")]
        role: String,
    },
    Customers {
        #[arg(long)]
        search: Option<String>,
    },
    MenuCreate {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        category: String,
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Edit a menu item; unset fields keep their value
    MenuEdit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        image: Option<PathBuf>,
    },
}

fn parse_order_status(s: &str) -> Result<OrderStatus, DomainError> {
    s.parse()
}

fn parse_reservation_status(s: &str) -> Result<ReservationStatus, DomainError> {
    s.parse()
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = ClientConfig::from_env();
    let cli = Cli::parse();

    logger::init_logger(&cli.log_level, cli.json_logs)?;

    let store = Storefront::from_config(&resolve_config(config, &cli))?;
    tracing::debug!(api = %store.client().base_url(), "Storefront ready");

    Ok(run(&store, cli.command).await)
}

/// Command line flags override the environment; storage defaults to
/// `~/.cafe/storage.json`
fn resolve_config(mut config: ClientConfig, cli: &Cli) -> ClientConfig {
    if let Some(url) = &cli.api_url {
        config.base_url = ClientConfig::new(url.as_str()).base_url;
    }
    if let Some(timeout) = cli.timeout {
        config = config.with_timeout(timeout);
    }
    if let Some(path) = &cli.storage {
        config = config.with_storage_path(path);
    }
    if config.storage_path.is_none() {
        let home = std::env::var_os("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from);
        config = config.with_storage_path(home.join(".cafe").join("storage.json"));
    }
    config
}

async fn run(store: &Storefront, command: Command) -> ExitCode {
    match command {
        Command::Signup {
            name,
            email,
            phone,
            password,
        } => output::notice(
            &store
                .sign_up(CustomerCreate {
                    name,
                    email,
                    phone,
                    password,
                })
                .await,
        ),
        Command::Login {
            role,
            email,
            password,
        } => output::notice(&store.login(role, &email, &password).await),
        Command::Logout => output::notice(&store.logout()),
        Command::Whoami => {
            output::session(store.session().current().as_ref());
            ExitCode::SUCCESS
        }
        Command::Menu { category } => output::screen(store.menu().await, |items| {
            let shown: Vec<_> = match &category {
                Some(c) => items
                    .iter()
                    .filter(|item| item.category.eq_ignore_ascii_case(c))
                    .cloned()
                    .collect(),
                None => items.clone(),
            };
            output::menu(store, &shown);
        }),
        Command::Cart(command) => cart(store, command).await,
        Command::Checkout { method } => match store.checkout(method).await {
            Ok(CheckoutOutcome::Placed(notice)) => output::notice(&notice),
            Ok(CheckoutOutcome::AwaitingPayment(intent)) => {
                output::payment_intent(&intent);
                ExitCode::SUCCESS
            }
            Err(notice) => output::notice(&notice),
        },
        Command::PayVerify {
            order_id,
            payment_id,
            signature,
        } => output::notice(
            &store
                .confirm_payment(PaymentConfirmation {
                    razorpay_order_id: order_id,
                    razorpay_payment_id: payment_id,
                    razorpay_signature: signature,
                })
                .await,
        ),
        Command::Reserve {
            date,
            time,
            guests,
            notes,
        } => output::notice(&store.reserve_table(&date, &time, guests, notes).await),
        Command::Reservations => {
            output::screen(store.my_reservations().await, |r| output::reservations(r))
        }
        Command::Orders => output::screen(store.my_orders().await, |o| output::my_orders(o)),
        Command::Profile { action: None } => {
            output::screen(store.customer_profile().await, output::profile)
        }
        Command::Profile {
            action: Some(ProfileCommand::Set { field, value }),
        } => output::notice(&store.update_customer_field(field, &value).await),
        Command::Staff(command) => staff(store, command).await,
        Command::Admin(command) => admin(store, command).await,
        Command::Contact {
            name,
            email,
            message,
            file,
        } => output::notice(
            &store
                .contact(&name, &email, &message, file.as_deref())
                .await,
        ),
    }
}

async fn cart(store: &Storefront, command: CartCommand) -> ExitCode {
    let notice = match command {
        CartCommand::Show => {
            output::cart(&store.cart(), store.session().order_type());
            return ExitCode::SUCCESS;
        }
        CartCommand::Add { id } => match store.menu_item(&id).await {
            Ok(item) => store.add_to_cart(&item),
            Err(notice) => notice,
        },
        CartCommand::Inc { id } => match store.update_cart(|cart| cart.increment(&id)) {
            Ok(quantity) => Notice::success(format!("Quantity now {quantity}")),
            Err(notice) => notice,
        },
        CartCommand::Dec { id } => match store.update_cart(|cart| cart.decrement(&id)) {
            Ok(0) => Notice::success("Removed from cart"),
            Ok(quantity) => Notice::success(format!("Quantity now {quantity}")),
            Err(notice) => notice,
        },
        CartCommand::Remove { id } => store.remove_from_cart(&id),
        CartCommand::Clear => store.clear_cart(),
        CartCommand::Type { order_type } => store.choose_order_type(order_type),
    };
    output::notice(&notice)
}

async fn staff(store: &Storefront, command: StaffCommand) -> ExitCode {
    match command {
        StaffCommand::Dashboard => {
            output::screen(store.staff_dashboard().await, output::staff_dashboard)
        }
        StaffCommand::Reservation { id, status } => match store.staff_dashboard().await {
            Ok(mut dashboard) => output::notice(
                &store
                    .set_reservation_status(&mut dashboard.reservations, &id, status)
                    .await,
            ),
            Err(notice) => output::notice(&notice),
        },
        StaffCommand::Profile { field, value } => {
            output::notice(&store.update_staff_field(field, &value).await)
        }
    }
}

async fn admin(store: &Storefront, command: AdminCommand) -> ExitCode {
    match command {
        AdminCommand::Dashboard => {
            output::screen(store.admin_dashboard().await, output::admin_dashboard)
        }
        AdminCommand::Advance { id } => {
            let Some(mut dashboard) = load_admin_dashboard(store).await else {
                return ExitCode::FAILURE;
            };
            output::notice(&store.advance_order(&mut dashboard.orders, &id).await)
        }
        AdminCommand::Cancel { id } => {
            let Some(mut dashboard) = load_admin_dashboard(store).await else {
                return ExitCode::FAILURE;
            };
            output::notice(&store.cancel_order(&mut dashboard.orders, &id).await)
        }
        AdminCommand::SetStatus { id, status } => {
            let Some(mut dashboard) = load_admin_dashboard(store).await else {
                return ExitCode::FAILURE;
            };
            output::notice(
                &store
                    .set_order_status(&mut dashboard.orders, &id, status)
                    .await,
            )
        }
        AdminCommand::Reservation { id, status } => {
            let Some(mut dashboard) = load_admin_dashboard(store).await else {
                return ExitCode::FAILURE;
            };
            output::notice(
                &store
                    .set_reservation_status(&mut dashboard.reservations, &id, status)
                    .await,
            )
        }
        AdminCommand::Profile => output::screen(store.admin_profile().await, output::profile),
        AdminCommand::StaffList => output::screen(store.staff_list().await, |s| output::profiles(s)),
        AdminCommand::StaffCreate {
            name,
            email,
            password,
            role,
        } => output::notice(
            &store
                .create_staff(StaffCreate {
                    name,
                    email,
                    password,
                    role,
                })
                .await,
        ),
        AdminCommand::Customers { search } => output::screen(
            store.customer_list(search.as_deref()).await,
            |c| output::profiles(c),
        ),
        AdminCommand::MenuCreate {
            name,
            description,
            price,
            category,
            image,
        } => output::notice(
            &store
                .create_menu_item(
                    MenuItemCreate {
                        name,
                        description,
                        price,
                        category,
                    },
                    image.as_deref(),
                )
                .await,
        ),
        AdminCommand::MenuEdit {
            id,
            name,
            description,
            price,
            category,
            image,
        } => {
            let item = match store.menu_item(&id).await {
                Ok(item) => item,
                Err(notice) => return output::notice(&notice),
            };
            let mut update = MenuItemUpdate::from_item(&item);
            if let Some(name) = name {
                update.name = name;
            }
            if let Some(description) = description {
                update.description = description;
            }
            if let Some(price) = price {
                update.price = price;
            }
            if let Some(category) = category {
                update.category = category;
            }
            output::notice(&store.edit_menu_item(&id, update, image.as_deref()).await)
        }
    }
}

/// Admin dashboard to apply a change to; prints the failure otherwise
async fn load_admin_dashboard(store: &Storefront) -> Option<AdminDashboard> {
    match store.admin_dashboard().await {
        Ok(dashboard) => Some(dashboard),
        Err(notice) => {
            output::notice(&notice);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_environment() {
        let cli = Cli::parse_from([
            "cafe",
            "--api-url",
            "http://localhost:5000/",
            "--storage",
            "/tmp/cafe.json",
            "--timeout",
            "5",
            "whoami",
        ]);
        let config = resolve_config(ClientConfig::default(), &cli);
        assert_eq!(config.api_url(), "http://localhost:5000/api");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/cafe.json")));
    }

    #[test]
    fn test_status_arguments_are_strict() {
        let cli = Cli::try_parse_from(["cafe", "admin", "set-status", "o1", "Preparing"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Admin(AdminCommand::SetStatus { status: OrderStatus::Preparing, .. })
        ));
        assert!(Cli::try_parse_from(["cafe", "admin", "set-status", "o1", "delivered"]).is_err());
        assert!(Cli::try_parse_from(["cafe", "staff", "reservation", "r1", "seated"]).is_err());
    }

    #[test]
    fn test_login_role() {
        let cli = Cli::try_parse_from([
            "cafe", "login", "staff", "--email", "s@example.com", "--password", "pw",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Login { role: Role::Staff, .. }));
    }
}
