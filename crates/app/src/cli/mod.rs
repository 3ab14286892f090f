use clap::{Parser, Subcommand};
use herbarium::catalog::Catalog;

mod book;
mod cart;
mod products;
mod slots;

#[derive(Debug, Parser)]
#[command(name = "herbarium", about = "Herbarium CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage the saved basket
    Cart(cart::CartCommand),

    /// List shop products
    Products(products::ProductsArgs),

    /// Show appointment availability
    Slots(slots::SlotsArgs),

    /// Book an appointment
    Book(book::BookArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Cart(command) => cart::run(command).await,
            Commands::Products(args) => products::run(&args),
            Commands::Slots(args) => slots::run(&args),
            Commands::Book(args) => book::run(args),
        }
    }
}

fn load_catalog() -> Result<Catalog, String> {
    Catalog::bundled().map_err(|error| format!("failed to load catalog: {error}"))
}

