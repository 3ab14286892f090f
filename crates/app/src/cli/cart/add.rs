use clap::Args;
use herbarium::cart::{CartStore, FileStorage};

use crate::cli::load_catalog;

#[derive(Debug, Args)]
pub(crate) struct AddArgs {
    /// Product slug, e.g. `valerian-tincture`
    slug: String,
}

pub(crate) fn run(cart: &mut CartStore<FileStorage>, args: &AddArgs) -> Result<(), String> {
    let catalog = load_catalog()?;

    let product = catalog
        .product(&args.slug)
        .ok_or_else(|| format!("unknown product: {}", args.slug))?;

    cart.add_item(product);

    let quantity = cart.get(&product.slug).map_or(0, |line| line.quantity);

    println!("added {} (quantity {quantity})", product.name);

    Ok(())
}
