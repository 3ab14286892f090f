use clap::Args;
use herbarium::{catalog::ProductFilter, prices::format_amount};
use tabled::{builder::Builder, settings::Style};

use crate::cli::load_catalog;

#[derive(Debug, Args)]
pub(crate) struct ProductsArgs {
    /// Only show these categories; repeatable
    #[arg(long)]
    category: Vec<String>,

    /// Only show products for these concerns; repeatable
    #[arg(long)]
    concern: Vec<String>,
}

pub(crate) fn run(args: &ProductsArgs) -> Result<(), String> {
    let catalog = load_catalog()?;

    let filter = ProductFilter {
        categories: args.category.clone(),
        concerns: args.concern.clone(),
    };

    let mut builder = Builder::default();

    builder.push_record(["Slug", "Name", "Category", "Concerns", "Price"]);

    let mut count = 0_usize;

    for product in catalog.filter_products(&filter) {
        builder.push_record([
            product.slug.clone(),
            product.name.clone(),
            product.category.clone(),
            product.concerns.join(", "),
            format_amount(*product.price.amount()),
        ]);

        count += 1;
    }

    if count == 0 {
        println!(
            "no products match; categories: {}; concerns: {}",
            catalog.categories().join(", "),
            catalog.concerns().join(", ")
        );

        return Ok(());
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());

    println!("{table}");

    Ok(())
}
