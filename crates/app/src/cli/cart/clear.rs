use herbarium::cart::{CartStore, FileStorage};

pub(crate) fn run(cart: &mut CartStore<FileStorage>) {
    cart.clear_cart();

    println!("basket cleared");
}
