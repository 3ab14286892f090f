use clap::Args;
use herbarium::cart::{CartStore, FileStorage};

#[derive(Debug, Args)]
pub(crate) struct SetArgs {
    /// Product slug
    slug: String,

    /// New quantity
    #[arg(allow_hyphen_values = true)]
    quantity: i64,
}

pub(crate) fn run(cart: &mut CartStore<FileStorage>, args: &SetArgs) -> Result<(), String> {
    if cart.get(&args.slug).is_none() {
        return Err(format!("{} is not in your basket", args.slug));
    }

    cart.update_quantity(&args.slug, args.quantity);

    match cart.get(&args.slug) {
        Some(line) => println!("{} quantity: {}", line.name, line.quantity),
        None => println!("removed {}", args.slug),
    }

    Ok(())
}
