//! Cart module - chapter selection and the totals derived from it.

mod accumulated;
#[allow(clippy::module_inception)]
mod cart;
mod line_item;

pub use accumulated::AccumulatedSavings;
pub use cart::Cart;
pub use line_item::CartLineItem;
