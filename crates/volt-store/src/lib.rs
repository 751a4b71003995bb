//! # volt-store: Realtime Document Store for VoltDesk
//!
//! This crate is the entity-store boundary of the system: typed document
//! collections with generated ids, server-assigned timestamps, partial
//! merge updates, and live full-snapshot subscriptions.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        VoltDesk Data Flow                               │
//! │                                                                         │
//! │  Operation (create_quotation, adjust_inventory, ...)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    volt-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │ Collection<T> │    │  Document    │  │   │
//! │  │   │  (store.rs)   │    │(collection.rs)│    │ (document.rs)│  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ customers     │◄───│ CRUD + merge  │◄───│ id + stamp   │  │   │
//! │  │   │ products      │    │ watch-channel │    │ hooks per    │  │   │
//! │  │   │ quotations    │    │ snapshots     │    │ entity       │  │   │
//! │  │   │ invoices      │    └───────────────┘    └──────────────┘  │   │
//! │  │   │ users         │                                            │   │
//! │  │   └───────────────┘                                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Subscribers: list views and the dashboard feed receive a full          │
//! │  replacement snapshot on every mutation (never diffs)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collection`] - `Collection<T>`: CRUD, merge updates, subscriptions
//! - [`document`] - the `Document` trait and per-entity impls
//! - [`store`] - the five named collections behind one handle
//! - [`error`] - store error types
//!
//! ## Concurrency Notes
//!
//! Writes to one collection are serialized by its `RwLock`, but there are
//! NO transactions across documents or collections. Two concurrent
//! read-modify-write sequences (e.g. inventory adjustments on the same
//! product) are last-write-wins, and the paired writes of invoice
//! generation can be split by a failure - both are surfaced, not hidden,
//! by the operations layer.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod collection;
pub mod document;
pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use collection::Collection;
pub use document::Document;
pub use error::{StoreError, StoreResult};
pub use store::Store;
