//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use landbridge_types::{DeliverySpeed, OrderStatus, OutputFormat, PackageType};

#[derive(Parser)]
#[command(name = "landbridge")]
#[command(version)]
#[command(about = "LandBridge parcel delivery: quotes, shipments and order history")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Store directory override
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Package fields shared by `quote` and `ship`
#[derive(Args, Debug, Clone)]
pub struct PackageArgs {
    /// Weight in kg
    #[arg(long, short = 'w')]
    pub weight: f64,

    /// Length in cm (縦)
    #[arg(long)]
    pub length: f64,

    /// Width in cm (横)
    #[arg(long)]
    pub width: f64,

    /// Height in cm (高さ)
    #[arg(long)]
    pub height: f64,

    /// Delivery speed
    #[arg(long, value_enum, default_value_t = DeliverySpeed::Normal)]
    pub speed: DeliverySpeed,

    /// Add shipping insurance
    #[arg(long)]
    pub insurance: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate a shipping fee
    Quote {
        #[command(flatten)]
        package: PackageArgs,
    },

    /// Request a new shipment (package → addresses → review → submit)
    Ship {
        #[command(flatten)]
        package: PackageArgs,

        /// Package type
        #[arg(long, value_enum, default_value_t = PackageType::Parcel)]
        package_type: PackageType,

        /// Mark as fragile (壊れ物)
        #[arg(long)]
        fragile: bool,

        #[arg(long)]
        sender_name: String,
        #[arg(long)]
        sender_phone: String,
        #[arg(long)]
        sender_postal_code: String,
        #[arg(long)]
        sender_prefecture: String,
        #[arg(long)]
        sender_city: String,
        #[arg(long)]
        sender_address1: String,
        #[arg(long)]
        sender_address2: Option<String>,

        #[arg(long)]
        recipient_name: String,
        #[arg(long)]
        recipient_phone: String,
        #[arg(long)]
        recipient_postal_code: String,
        #[arg(long)]
        recipient_prefecture: String,
        #[arg(long)]
        recipient_city: String,
        #[arg(long)]
        recipient_address1: String,
        #[arg(long)]
        recipient_address2: Option<String>,

        /// Stop after showing the review step
        #[arg(long)]
        dry_run: bool,
    },

    /// List order history
    Orders {
        /// Only orders with this status
        #[arg(long, value_enum)]
        status: Option<OrderStatus>,

        /// Look up a single tracking number
        #[arg(long)]
        tracking: Option<String>,
    },

    /// Show dashboard statistics
    Stats,

    /// Create an account and sign in
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        company: Option<String>,
    },

    /// Sign in
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Edit the signed-in user's profile
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },

    /// Seed the demo account and orders
    Demo,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set quote debounce window in milliseconds
        #[arg(long)]
        set_debounce_ms: Option<u64>,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Enable or disable demo data seeding
        #[arg(long)]
        set_seed_demo: Option<bool>,
    },
}
