//! # Cart
//!
//! The ordered list of line items and every rule that mutates it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Rules                                           │
//! │                                                                         │
//! │  Store Operation          Cart Method             Change                │
//! │  ───────────────          ───────────             ──────                │
//! │                                                                         │
//! │  add (new product) ──────► insert() ────────────► items.push(qty 1)    │
//! │                                                                         │
//! │  add (in cart) ──────────► increment() ─────────► items[i].amount += 1 │
//! │                                                                         │
//! │  update quantity ────────► set_amount() ────────► items[i].amount = n  │
//! │                                                                         │
//! │  remove ─────────────────► remove() ────────────► items.remove(i)      │
//! │                                                                         │
//! │  Every stock-bound method takes the Stock the caller just fetched.     │
//! │  A failed rule leaves the cart untouched.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{LineItem, ProductDetails, ProductId, Stock};
use crate::validation::{validate_product_details, validate_quantity};
use crate::INITIAL_QUANTITY;

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same product bumps its quantity)
/// - Every `amount` is >= 1
/// - Insertion order is preserved
///
/// Serializes as a bare JSON array of line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Builds a cart from stored lines.
    ///
    /// Later duplicates of an id are dropped and zero-quantity lines are
    /// skipped, so a hand-edited storage value cannot break the invariants.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut cart = Cart::new();
        for item in items {
            if item.amount == 0 || cart.contains(item.id) {
                continue;
            }
            cart.items.push(item);
        }
        cart
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Consumes the cart, returning its lines.
    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    /// Looks up a line by product id.
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Whether the product already has a line.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    fn get_mut(&mut self, id: ProductId) -> CoreResult<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(CoreError::ProductNotInCart(id))
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: [`Cart::increment`]
    /// - Product not in cart: [`Cart::insert`]
    pub fn add(&mut self, details: &ProductDetails, stock: Stock) -> CoreResult<u32> {
        if self.contains(details.id) {
            self.increment(details.id, stock)
        } else {
            self.insert(details, stock).map(|item| item.amount)
        }
    }

    /// Appends a new line with quantity 1.
    ///
    /// ## Errors
    /// - `Unavailable` when stock is zero
    /// - `Validation` when the product payload is unusable
    ///
    /// If the product is already present this behaves like `increment`.
    pub fn insert(&mut self, details: &ProductDetails, stock: Stock) -> CoreResult<&LineItem> {
        if self.contains(details.id) {
            self.increment(details.id, stock)?;
            return self.get(details.id).ok_or(CoreError::ProductNotInCart(details.id));
        }

        if stock.is_empty() {
            return Err(CoreError::Unavailable(details.id));
        }

        validate_product_details(details)?;

        let index = self.items.len();
        self.items
            .push(LineItem::from_details(details, INITIAL_QUANTITY));
        Ok(&self.items[index])
    }

    /// Bumps an existing line by one unit, bounded by stock.
    ///
    /// Returns the new quantity.
    pub fn increment(&mut self, id: ProductId, stock: Stock) -> CoreResult<u32> {
        let item = self.get_mut(id)?;
        let requested = item.amount.saturating_add(1);

        if !stock.covers(requested) {
            return Err(CoreError::OutOfStock {
                product_id: id,
                available: stock.amount,
                requested,
            });
        }

        item.amount = requested;
        Ok(requested)
    }

    /// Overwrites the quantity of an existing line.
    ///
    /// ## Errors
    /// Checked in this order:
    /// 1. `Validation` for a zero amount
    /// 2. `ProductNotInCart`
    /// 3. `OutOfStock` when `amount` exceeds the stock level
    pub fn set_amount(&mut self, id: ProductId, amount: u32, stock: Stock) -> CoreResult<()> {
        validate_quantity(amount)?;

        let item = self.get_mut(id)?;
        if !stock.covers(amount) {
            return Err(CoreError::OutOfStock {
                product_id: id,
                available: stock.amount,
                requested: amount,
            });
        }

        item.amount = amount;
        Ok(())
    }

    /// Removes a line by product id, returning it.
    pub fn remove(&mut self, id: ProductId) -> CoreResult<LineItem> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or(CoreError::ProductNotInCart(id))?;

        Ok(self.items.remove(index))
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Summary for the cart badge and the cart page footer.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }
}

impl From<Vec<LineItem>> for Cart {
    fn from(items: Vec<LineItem>) -> Self {
        Cart::from_items(items)
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

/// Cart totals summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Distinct products (the header badge).
    pub item_count: u32,
    /// Sum of all quantities.
    pub total_quantity: u32,
    /// Σ price × amount.
    pub subtotal: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: u32::try_from(cart.len()).unwrap_or(u32::MAX),
            total_quantity: cart
                .items
                .iter()
                .fold(0u32, |acc, i| acc.saturating_add(i.amount)),
            subtotal: cart.items.iter().map(LineItem::line_total).sum(),
        }
    }
}
