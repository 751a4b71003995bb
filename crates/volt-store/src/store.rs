//! # Store
//!
//! The five named collections of the system, bundled behind one handle.
//!
//! One `Store` is created at startup and shared (`Arc`) across every
//! operation; there is no ambient global.

use volt_core::types::{Customer, Invoice, Product, Quotation, User};

use crate::collection::Collection;

/// The document store: one collection per entity.
///
/// ## Usage
/// ```rust
/// use std::sync::Arc;
/// use volt_store::Store;
///
/// let store = Arc::new(Store::new());
/// # let _ = store.customers.subscribe();
/// ```
pub struct Store {
    pub customers: Collection<Customer>,
    pub products: Collection<Product>,
    pub quotations: Collection<Quotation>,
    pub invoices: Collection<Invoice>,
    pub users: Collection<User>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Store {
            customers: Collection::new(),
            products: Collection::new(),
            quotations: Collection::new(),
            invoices: Collection::new(),
            users: Collection::new(),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}
