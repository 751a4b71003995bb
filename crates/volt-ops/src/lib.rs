//! # volt-ops: Operations Layer for VoltDesk
//!
//! The orchestration layer between the dashboard UI and the pure core +
//! document store: per-session context, role gates, validate-then-write
//! sequencing, the generate-invoice saga, and the live stats feed.
//!
//! ## Operation Shape
//! Every operation takes an [`AppContext`] and follows the same sequence:
//! validate with volt-core first, touch the store only after everything
//! checked out. The single deliberate exception is invoice generation,
//! whose two writes can be split by a failure - see
//! [`quotations::generate_invoice`].
//!
//! ## Module Organization
//!
//! - [`context`] - `AppContext` and the admin role gate
//! - [`customers`] / [`products`] - catalog CRUD + inventory adjustment
//! - [`quotations`] - creation, review, the generate-invoice saga
//! - [`invoices`] - post-generation status and metadata edits
//! - [`dashboard`] - live `DashboardStats` recomputation feed
//! - [`error`] - the operation error surface

// =============================================================================
// Module Declarations
// =============================================================================

pub mod context;
pub mod customers;
pub mod dashboard;
pub mod error;
pub mod invoices;
pub mod products;
pub mod quotations;

// =============================================================================
// Re-exports
// =============================================================================

pub use context::AppContext;
pub use dashboard::DashboardFeed;
pub use error::{OpsError, OpsResult};
