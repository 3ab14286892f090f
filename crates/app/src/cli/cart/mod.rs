use std::path::PathBuf;

use clap::{Args, Subcommand};
use herbarium::{
    cart::{CartStore, FileStorage},
    prices::format_amount,
};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

mod add;
mod checkout;
mod clear;
mod remove;
mod set;
mod show;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    /// Directory the basket is saved in
    #[arg(
        long,
        env = "HERBARIUM_CART_DIR",
        default_value = ".herbarium",
        global = true
    )]
    cart_dir: PathBuf,

    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Print the basket
    Show,

    /// Add one unit of a product
    Add(add::AddArgs),

    /// Remove a product
    Remove(remove::RemoveArgs),

    /// Set a product's quantity; zero or less removes it
    Set(set::SetArgs),

    /// Empty the basket
    Clear,

    /// Send the basket to checkout
    Checkout(checkout::CheckoutArgs),
}

pub(crate) async fn run(command: CartCommand) -> Result<(), String> {
    let mut cart = CartStore::load(FileStorage::new(command.cart_dir));

    match command.command {
        CartSubcommand::Show => {
            show::run(&cart);

            Ok(())
        }
        CartSubcommand::Add(args) => add::run(&mut cart, &args),
        CartSubcommand::Remove(args) => remove::run(&mut cart, &args),
        CartSubcommand::Set(args) => set::run(&mut cart, &args),
        CartSubcommand::Clear => {
            clear::run(&mut cart);

            Ok(())
        }
        CartSubcommand::Checkout(args) => checkout::run(&mut cart, args).await,
    }
}

fn render_cart(cart: &CartStore<FileStorage>) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Product", "Name", "Qty", "Unit", "Total"]);

    for line in cart.items() {
        builder.push_record([
            line.product_id.clone(),
            line.name.clone(),
            line.quantity.to_string(),
            format_amount(line.price),
            format_amount(line.line_total()),
        ]);
    }

    builder.push_record([
        String::new(),
        "Total".to_string(),
        cart.total_items().to_string(),
        String::new(),
        format_amount(cart.total_price()),
    ]);

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..5), Alignment::right());

    table.to_string()
}
