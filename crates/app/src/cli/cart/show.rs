use herbarium::cart::{CartStore, FileStorage};

pub(crate) fn run(cart: &CartStore<FileStorage>) {
    if cart.is_empty() {
        println!("your basket is empty");
        return;
    }

    println!("{}", super::render_cart(cart));
}
