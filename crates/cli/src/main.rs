//! Flatbank CLI - banking operations from the command line
//!
//! Usage:
//! ```bash
//! flatbank create --first-name Jan --last-name Kowalski \
//!     --address "ul. Polna 1" --pesel 90010112345 --balance 100.00
//! flatbank deposit 1 50.00
//! flatbank transfer 1 2 30.00
//! flatbank loan 1 1000.00 --rate 0.05
//! flatbank list --json
//! flatbank search surname Kowalski
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

mod commands;
mod context;
mod render;

use context::AppContext;

/// Flatbank - a flat-file account store with the classic banking verbs
#[derive(Parser)]
#[command(name = "flatbank")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Account store file path
    #[arg(long, default_value = "accounts.dat", global = true)]
    data: PathBuf,

    /// Skip the interactive confirmation prompt
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account
    Create {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        address: String,
        /// 11-digit PESEL number
        #[arg(long)]
        pesel: String,
        /// Opening balance
        #[arg(long, default_value = "0.00")]
        balance: Decimal,
        /// Opening debt
        #[arg(long, default_value = "0.00")]
        debt: Decimal,
    },

    /// Deposit funds into an account
    Deposit {
        /// Account ID
        id: u32,
        /// Amount to deposit
        amount: Decimal,
    },

    /// Withdraw funds from an account
    Withdraw {
        /// Account ID
        id: u32,
        /// Amount to withdraw
        amount: Decimal,
    },

    /// Transfer funds between two accounts
    Transfer {
        /// Source account ID
        from: u32,
        /// Destination account ID
        to: u32,
        /// Amount to transfer
        amount: Decimal,
    },

    /// Take a loan: the principal lands on the balance, the debt grows
    /// by principal plus interest
    Loan {
        /// Account ID
        id: u32,
        /// Loan principal
        principal: Decimal,
        /// Interest rate as a decimal, e.g. 0.05 for 5%
        #[arg(long, default_value = "0.00")]
        rate: Decimal,
    },

    /// Pay down outstanding debt from the balance
    PayDebt {
        /// Account ID
        id: u32,
        /// Payment amount
        amount: Decimal,
    },

    /// List all accounts
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search accounts by field substring
    Search {
        /// Which field to match against
        field: SearchField,
        /// Substring to look for
        key: String,
    },
}

/// Searchable account fields, mirroring the listing columns.
#[derive(Clone, Copy, ValueEnum)]
pub enum SearchField {
    /// Account number
    Account,
    /// First name
    Name,
    /// Last name
    Surname,
    /// Address
    Address,
    /// PESEL number
    Pesel,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut ctx = AppContext::new(&cli.data, cli.yes);

    match cli.command {
        Commands::Create {
            first_name,
            last_name,
            address,
            pesel,
            balance,
            debt,
        } => commands::create(&mut ctx, first_name, last_name, address, pesel, balance, debt),
        Commands::Deposit { id, amount } => commands::deposit(&mut ctx, id, amount),
        Commands::Withdraw { id, amount } => commands::withdraw(&mut ctx, id, amount),
        Commands::Transfer { from, to, amount } => commands::transfer(&mut ctx, from, to, amount),
        Commands::Loan {
            id,
            principal,
            rate,
        } => commands::loan(&mut ctx, id, principal, rate),
        Commands::PayDebt { id, amount } => commands::pay_debt(&mut ctx, id, amount),
        Commands::List { json } => commands::list(&ctx, json),
        Commands::Search { field, key } => commands::search(&ctx, field, &key),
    }
}
