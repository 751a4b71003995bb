//! # Document Trait
//!
//! What a type must provide to live in a [`Collection`](crate::Collection):
//! an id the store can assign, and hooks for server-side timestamping.
//!
//! ## Server-Side Stamping
//! The store, not the caller, owns `id` and `created_at` - exactly like the
//! cloud SDK this layer mirrors, where the client sends a record and the
//! server fills in the generated key and creation timestamp. Whatever the
//! caller put in those fields before `create` is overwritten.

use chrono::{DateTime, Utc};

use volt_core::types::{Customer, Invoice, Product, Quotation, User};

/// A document that can be stored in a collection.
pub trait Document: Clone + Send + Sync + 'static {
    /// Collection name, used in error context and logging.
    const COLLECTION: &'static str;

    /// The document's id ("" before the store assigns one).
    fn id(&self) -> &str;

    /// Store hook: assigns the generated id.
    fn assign_id(&mut self, id: String);

    /// Creation timestamp, used to keep snapshots in creation order.
    fn created_at(&self) -> DateTime<Utc>;

    /// Store hook: stamps the server-side creation timestamp.
    fn stamp_created(&mut self, at: DateTime<Utc>);

    /// Store hook: stamps the server-side update timestamp.
    /// Default no-op; only entities that track `updated_at` override it.
    fn stamp_updated(&mut self, _at: DateTime<Utc>) {}
}

impl Document for Customer {
    const COLLECTION: &'static str = "customers";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }
}

impl Document for Product {
    const COLLECTION: &'static str = "products";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
        self.updated_at = at;
    }

    fn stamp_updated(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

impl Document for Quotation {
    const COLLECTION: &'static str = "quotations";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }
}

impl Document for Invoice {
    const COLLECTION: &'static str = "invoices";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }
}

impl Document for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }
}
