//! # Live Dashboard Feed
//!
//! Keeps a [`DashboardStats`] aggregate current by re-computing it from
//! full collection snapshots whenever any of the four watched collections
//! changes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Dashboard Feed                                      │
//! │                                                                         │
//! │  customers ──┐                                                          │
//! │  products  ──┤  watch      ┌──────────────┐  watch      overview       │
//! │  quotations──┼────────────►│ feed task:   │────────────► screens       │
//! │  invoices  ──┘  snapshots  │ recompute on │  DashboardStats            │
//! │                            │ any change   │                            │
//! │                            └──────────────┘                            │
//! │                                                                         │
//! │  Recomputation is from-scratch over full snapshots, never an            │
//! │  incremental delta. The task exits when the last stats receiver is     │
//! │  dropped.                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use volt_core::stats::{self, DashboardStats};
use volt_store::Store;

/// Handle to the background stats-recomputation task.
pub struct DashboardFeed {
    stats_rx: watch::Receiver<DashboardStats>,
}

impl DashboardFeed {
    /// Subscribes to all four collections and spawns the recompute task.
    ///
    /// The returned feed's current value is the stats over the store as it
    /// was at spawn time.
    pub fn spawn(store: Arc<Store>) -> Self {
        let mut customers_rx = store.customers.subscribe();
        let mut products_rx = store.products.subscribe();
        let mut quotations_rx = store.quotations.subscribe();
        let mut invoices_rx = store.invoices.subscribe();

        let initial = stats::compute(
            &customers_rx.borrow_and_update(),
            &products_rx.borrow_and_update(),
            &quotations_rx.borrow_and_update(),
            &invoices_rx.borrow_and_update(),
        );
        let (stats_tx, stats_rx) = watch::channel(initial);

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    changed = customers_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                    changed = products_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                    changed = quotations_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                    changed = invoices_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                    _ = stats_tx.closed() => break,
                }

                let stats = stats::compute(
                    &customers_rx.borrow_and_update(),
                    &products_rx.borrow_and_update(),
                    &quotations_rx.borrow_and_update(),
                    &invoices_rx.borrow_and_update(),
                );
                debug!(
                    customers = stats.customer_count,
                    products = stats.product_count,
                    quotations = stats.quotation_count,
                    invoices = stats.invoice_count,
                    "dashboard stats recomputed"
                );
                stats_tx.send_replace(stats);
            }

            debug!("dashboard feed task stopped");
        });

        DashboardFeed { stats_rx }
    }

    /// Registers a live stats subscription.
    pub fn subscribe(&self) -> watch::Receiver<DashboardStats> {
        self.stats_rx.clone()
    }

    /// The latest computed stats.
    pub fn current(&self) -> DashboardStats {
        self.stats_rx.borrow().clone()
    }
}
