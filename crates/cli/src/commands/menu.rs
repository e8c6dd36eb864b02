//! Menu and account commands.

use std::io::{self, Write};

use sakura_core::{Category, UserPrompt, messages};
use sakura_storefront::catalog::Menu;

/// Print the products shown under `category`.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn list(menu: &Menu, category: Category, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", category.label())?;
    for product in menu.visible_in(category) {
        writeln!(
            out,
            "  {:<24} {:>8}  {}",
            product.name, product.price, product.description
        )?;
    }
    Ok(())
}

/// Show the sign-in placeholder.
pub fn auth<P: UserPrompt + ?Sized>(prompt: &mut P) {
    prompt.alert(messages::AUTH_PLACEHOLDER);
}
