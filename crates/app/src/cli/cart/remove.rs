use clap::Args;
use herbarium::cart::{CartStore, FileStorage};

#[derive(Debug, Args)]
pub(crate) struct RemoveArgs {
    /// Product slug
    slug: String,
}

pub(crate) fn run(cart: &mut CartStore<FileStorage>, args: &RemoveArgs) -> Result<(), String> {
    if cart.get(&args.slug).is_none() {
        return Err(format!("{} is not in your basket", args.slug));
    }

    cart.remove_item(&args.slug);

    println!("removed {}", args.slug);

    Ok(())
}
