//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::domain::{RoomStatus, RoomType, ThemeMode};

/// Hotel Management - command-line client for the hotel API
#[derive(Parser, Debug)]
#[command(name = "hotel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// API base URL, overriding the environment
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session token
    Login(LoginArgs),

    /// End the current session
    Logout,

    /// Show whether a valid session exists
    Status,

    /// Create a new account
    Register(RegisterArgs),

    /// Show the dashboard summary
    Dashboard,

    /// Manage clients
    Clients(ClientsArgs),

    /// Manage rooms
    Rooms(RoomsArgs),

    /// Manage reservations
    Reservations(ReservationsArgs),

    /// Show or change the color theme
    Theme(ThemeArgs),
}

impl Commands {
    /// Whether the command needs a valid session
    pub fn is_protected(&self) -> bool {
        !matches!(
            self,
            Commands::Login(_)
                | Commands::Logout
                | Commands::Status
                | Commands::Register(_)
                | Commands::Theme(_)
        )
    }
}

/// Arguments for the login command
#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(short, long, env = "HOTEL_USERNAME")]
    pub username: String,

    #[arg(short, long, env = "HOTEL_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Arguments for the register command
#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(short, long)]
    pub username: String,

    #[arg(short, long)]
    pub email: String,

    #[arg(short, long, env = "HOTEL_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Offset pagination flags
#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Records to skip
    #[arg(long, default_value_t = 0)]
    pub skip: u32,

    /// Maximum records to return
    #[arg(long, default_value_t = 100)]
    pub limit: u32,
}

// =============================================================================
// Clients
// =============================================================================

#[derive(Args, Debug)]
pub struct ClientsArgs {
    #[command(subcommand)]
    pub action: ClientsAction,
}

#[derive(Subcommand, Debug)]
pub enum ClientsAction {
    /// List clients
    List(PageArgs),
    /// Show one client
    Get { id: i64 },
    /// Search clients by name, email, phone or document
    Search {
        query: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Register a client
    Create(ClientFields),
    /// Change fields of a client
    Update {
        id: i64,
        #[command(flatten)]
        fields: ClientChanges,
    },
    /// Delete a client
    Delete {
        id: i64,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
pub struct ClientFields {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub document: String,
    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Args, Debug)]
pub struct ClientChanges {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub document: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
}

// =============================================================================
// Rooms
// =============================================================================

#[derive(Args, Debug)]
pub struct RoomsArgs {
    #[command(subcommand)]
    pub action: RoomsAction,
}

#[derive(Subcommand, Debug)]
pub enum RoomsAction {
    /// List rooms
    List(PageArgs),
    /// Show one room
    Get { id: i64 },
    /// Add a room
    Create(RoomFields),
    /// Change fields of a room
    Update {
        id: i64,
        #[command(flatten)]
        fields: RoomChanges,
    },
    /// Delete a room
    Delete {
        id: i64,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show occupancy between two dates (YYYY-MM-DD)
    Calendar {
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
    },
}

#[derive(Args, Debug)]
pub struct RoomFields {
    /// Room number
    #[arg(long)]
    pub number: String,
    /// standard, deluxe or suite
    #[arg(long)]
    pub kind: RoomType,
    /// livre, ocupado, limpeza or manutencao
    #[arg(long)]
    pub status: Option<RoomStatus>,
    #[arg(long)]
    pub capacity: Option<u32>,
    /// Daily rate
    #[arg(long)]
    pub rate: f64,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct RoomChanges {
    #[arg(long)]
    pub number: Option<String>,
    #[arg(long)]
    pub kind: Option<RoomType>,
    #[arg(long)]
    pub status: Option<RoomStatus>,
    #[arg(long)]
    pub capacity: Option<u32>,
    #[arg(long)]
    pub rate: Option<f64>,
    #[arg(long)]
    pub description: Option<String>,
}

// =============================================================================
// Reservations
// =============================================================================

#[derive(Args, Debug)]
pub struct ReservationsArgs {
    #[command(subcommand)]
    pub action: ReservationsAction,
}

#[derive(Subcommand, Debug)]
pub enum ReservationsAction {
    /// List reservations
    List {
        #[command(flatten)]
        page: PageArgs,
        /// Only reservations with this status
        #[arg(long)]
        status: Option<String>,
        /// Only check-ins in this month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
    },
    /// Show one reservation
    Get { id: i64 },
    /// Book a room for a client
    Create {
        #[arg(long)]
        room: i64,
        #[arg(long)]
        client: i64,
        #[arg(long)]
        check_in: NaiveDate,
        #[arg(long)]
        check_out: NaiveDate,
    },
    /// Change dates or status of a reservation
    Update {
        id: i64,
        #[arg(long)]
        check_in: Option<NaiveDate>,
        #[arg(long)]
        check_out: Option<NaiveDate>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete a reservation
    Delete {
        id: i64,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

// =============================================================================
// Theme
// =============================================================================

#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub action: Option<ThemeAction>,
}

#[derive(Subcommand, Debug)]
pub enum ThemeAction {
    /// Show the active theme (default)
    Show,
    /// Switch between light and dark
    Toggle,
    /// Use a specific theme
    Set { mode: ThemeMode },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_nested_command() {
        let cli = Cli::try_parse_from([
            "hotel", "--json", "rooms", "create", "--number", "101", "--kind", "suite", "--rate",
            "450",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Commands::Rooms(RoomsArgs {
                action: RoomsAction::Create(fields),
            }) => {
                assert_eq!(fields.kind, RoomType::Suite);
                assert_eq!(fields.rate, 450.0);
                assert!(fields.status.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_protected_commands() {
        let cli = Cli::try_parse_from(["hotel", "dashboard"]).unwrap();
        assert!(cli.command.is_protected());

        let cli = Cli::try_parse_from(["hotel", "theme", "toggle"]).unwrap();
        assert!(!cli.command.is_protected());

        let cli = Cli::try_parse_from(["hotel", "logout"]).unwrap();
        assert!(!cli.command.is_protected());
    }

    #[test]
    fn test_reservation_dates_parse() {
        let cli = Cli::try_parse_from([
            "hotel",
            "reservations",
            "create",
            "--room",
            "1",
            "--client",
            "2",
            "--check-in",
            "2025-06-10",
            "--check-out",
            "2025-06-12",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Reservations(ReservationsArgs {
                action: ReservationsAction::Create { room: 1, client: 2, .. }
            })
        ));
    }
}
