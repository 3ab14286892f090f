use clap::Args;
use herbarium::cart::{CartStore, FileStorage};
use herbarium_app::checkout::{CheckoutFlow, HttpCheckoutClient};
use reqwest::Url;

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Checkout endpoint
    #[arg(
        long,
        env = "HERBARIUM_CHECKOUT_URL",
        default_value = "http://localhost:8698/api/checkout"
    )]
    endpoint: Url,
}

pub(crate) async fn run(
    cart: &mut CartStore<FileStorage>,
    args: CheckoutArgs,
) -> Result<(), String> {
    let client = HttpCheckoutClient::new(args.endpoint);
    let flow = CheckoutFlow::new();

    println!("{}", super::render_cart(cart));

    let url = flow
        .proceed(cart, &client)
        .await
        .map_err(|error| format!("checkout failed: {error}"))?;

    println!("continue to payment: {url}");

    Ok(())
}
