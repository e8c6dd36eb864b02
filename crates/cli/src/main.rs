//! Sakura CLI - the sushi cart from a terminal.
//!
//! Shares the cart file with the storefront, so both see the same cart when
//! pointed at the same data directory.
//!
//! # Usage
//!
//! ```bash
//! # Browse the menu
//! sakura-cli menu --category Роллы
//!
//! # Fill the cart
//! sakura-cli add "Калифорния ролл"
//! sakura-cli inc '#1'
//!
//! # Order
//! sakura-cli checkout
//! ```
//!
//! # Environment Variables
//!
//! - `SAKURA_DATA_DIR` - Directory holding the saved cart (default: `data`)
//! - `SAKURA_MENU_PATH` - Menu JSON replacing the built-in menu
//! - `RUST_LOG` - Log filter (default: `warn`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sakura_core::{CartStore, Category, Decremented};
use sakura_storefront::{catalog::Menu, config::DEFAULT_DATA_DIR, storage::FileStore};
use tracing_subscriber::EnvFilter;

mod commands;
mod prompt;

use commands::cart::ItemRef;
use prompt::TerminalPrompt;

#[derive(Parser)]
#[command(name = "sakura-cli")]
#[command(author, version, about = "Sakura sushi cart")]
struct Cli {
    /// Directory holding the saved cart
    #[arg(long, global = true, env = "SAKURA_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Menu JSON file (built-in menu when unset)
    #[arg(long, global = true, env = "SAKURA_MENU_PATH")]
    menu: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart
    Show,
    /// Add a menu product to the cart
    Add {
        /// Product name as listed by `menu`
        name: String,
    },
    /// One more of an item
    Inc {
        /// Item name, or `#N` for the N-th row
        item: ItemRef,
    },
    /// One less of an item
    Dec {
        /// Item name, or `#N` for the N-th row
        item: ItemRef,
    },
    /// Remove an item
    Remove {
        /// Item name, or `#N` for the N-th row
        item: ItemRef,
    },
    /// Empty the cart
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Place the order
    Checkout,
    /// List the menu
    Menu {
        /// Category slug or label (`sushi`, `Роллы`, ...)
        #[arg(short, long, default_value = "all")]
        category: Category,
    },
    /// Sign in
    Auth,
}

fn main() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = io::stdout();
    let mut prompt = TerminalPrompt::new(io::stdin().lock(), io::stdout());
    let open_store = || FileStore::open(&cli.data_dir).map(CartStore::open);

    match cli.command {
        Commands::Menu { category } => {
            let menu = Menu::load(cli.menu.as_deref())?;
            commands::menu::list(&menu, category, &mut out)?;
        }
        Commands::Auth => commands::menu::auth(&mut prompt),
        Commands::Show => commands::cart::show(&open_store()?, &mut out)?,
        Commands::Add { name } => {
            let menu = Menu::load(cli.menu.as_deref())?;
            let mut store = open_store()?;
            commands::cart::add(&mut store, &menu, &name, &mut prompt)?;
            commands::cart::show(&store, &mut out)?;
        }
        Commands::Inc { item } => {
            let mut store = open_store()?;
            let quantity = commands::cart::increment(&mut store, &item)?;
            tracing::info!(%item, quantity, "Incremented");
            commands::cart::show(&store, &mut out)?;
        }
        Commands::Dec { item } => {
            let mut store = open_store()?;
            match commands::cart::decrement(&mut store, &item)? {
                Decremented::Remaining(quantity) => tracing::info!(%item, quantity, "Decremented"),
                Decremented::Removed => tracing::info!(%item, "Removed at zero"),
            }
            commands::cart::show(&store, &mut out)?;
        }
        Commands::Remove { item } => {
            let mut store = open_store()?;
            let removed = commands::cart::remove(&mut store, &item)?;
            tracing::info!(name = %removed.name, "Removed");
            commands::cart::show(&store, &mut out)?;
        }
        Commands::Clear { yes } => {
            let mut prompt = prompt.assume_yes(yes);
            let outcome = commands::cart::clear(&mut open_store()?, &mut prompt)?;
            tracing::info!(?outcome, "Clear cart");
        }
        Commands::Checkout => {
            let outcome = commands::cart::checkout(&mut open_store()?, &mut prompt)?;
            tracing::info!(?outcome, "Checkout");
        }
    }

    Ok(())
}
