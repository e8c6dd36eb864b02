//! Display projection of a cart.
//!
//! [`CartView`] is a pure function of the [`Cart`]: projecting the same cart
//! twice yields equal views. Front ends render the view into HTML or text and
//! never read the cart directly.

use core::fmt;

use crate::cart::Cart;
use crate::types::LineItem;

/// Cart badge shown next to every cart link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeView {
    /// Total quantity in the cart.
    pub count: u32,
    /// Hidden when the cart is empty.
    pub visible: bool,
}

impl BadgeView {
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self {
            count,
            visible: count > 0,
        }
    }
}

/// One row of the cart page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRow {
    pub name: String,
    pub description: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&LineItem> for LineRow {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            unit_price: item.price.to_string(),
            quantity: item.quantity,
            line_total: item.line_total().to_string(),
        }
    }
}

/// Body of the cart page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartBody {
    /// The "cart is empty" state.
    Empty,
    /// Item rows plus the grand total.
    Items { rows: Vec<LineRow>, total: String },
}

/// Everything a front end needs to paint the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub badge: BadgeView,
    pub body: CartBody,
}

impl CartView {
    /// Project the cart into display data.
    #[must_use]
    pub fn project(cart: &Cart) -> Self {
        let body = if cart.is_empty() {
            CartBody::Empty
        } else {
            CartBody::Items {
                rows: cart.items().iter().map(LineRow::from).collect(),
                total: cart.total().to_string(),
            }
        };

        Self {
            badge: BadgeView::new(cart.item_count()),
            body,
        }
    }

    /// Item rows, empty for an empty cart.
    #[must_use]
    pub fn rows(&self) -> &[LineRow] {
        match &self.body {
            CartBody::Empty => &[],
            CartBody::Items { rows, .. } => rows,
        }
    }

    /// Formatted grand total, if the cart has items.
    #[must_use]
    pub fn total(&self) -> Option<&str> {
        match &self.body {
            CartBody::Empty => None,
            CartBody::Items { total, .. } => Some(total.as_str()),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.body, CartBody::Empty)
    }
}

/// Plain-text rendering for terminals and logs.
impl fmt::Display for CartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            CartBody::Empty => writeln!(f, "{}", crate::messages::EMPTY_CART_PAGE),
            CartBody::Items { rows, total } => {
                for (index, row) in rows.iter().enumerate() {
                    writeln!(
                        f,
                        "{}. {} ({}) {} × {} = {}",
                        index + 1,
                        row.name,
                        row.description,
                        row.unit_price,
                        row.quantity,
                        row.line_total
                    )?;
                }
                writeln!(f, "{}: {total}", crate::messages::TOTAL_LABEL)
            }
        }
    }
}
