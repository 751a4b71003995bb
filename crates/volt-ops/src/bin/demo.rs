//! End-to-end demo: seeds a small catalog, then walks the quotation →
//! review → invoice → inventory-adjustment flow against a fresh store,
//! logging the live dashboard figures along the way.
//!
//! Run with `RUST_LOG=debug` to also see the per-document store activity.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;
use tracing_subscriber::EnvFilter;

use volt_core::invoice::InvoiceMetadata;
use volt_core::money::Money;
use volt_core::pricing::ItemRequest;
use volt_core::types::{
    AdditionalItem, InvoiceType, ProductCategory, Role, Unit, User,
};
use volt_ops::{customers, products, quotations, AppContext, DashboardFeed};
use volt_store::Store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let store = Arc::new(Store::new());
    let feed = DashboardFeed::spawn(Arc::clone(&store));

    let admin = User {
        id: "u-admin".to_string(),
        email: "owner@voltdesk.example".to_string(),
        role: Role::Admin,
        display_name: Some("Owner".to_string()),
        created_at: Utc::now(),
    };
    let ctx = AppContext::new(Arc::clone(&store), admin);

    // -- seed ----------------------------------------------------------------

    let customer = customers::create_customer(
        &ctx,
        customers::NewCustomer {
            name: "Sharma Electricals".to_string(),
            email: "accounts@sharma.example".to_string(),
            phone: "+91 98765 43210".to_string(),
            address: "14 Industrial Estate".to_string(),
            location: "Hyderabad".to_string(),
            scope: Some("panel wiring".to_string()),
        },
    )
    .await?;

    let motor = products::create_product(
        &ctx,
        products::NewProduct {
            name: "Crompton 5HP Motor".to_string(),
            category: ProductCategory::Motor,
            voltage: "415V".to_string(),
            rating: "5HP".to_string(),
            make: "Crompton".to_string(),
            quantity: 5,
            unit: Unit::Piece,
            price_paise: 1_250_000,
        },
    )
    .await?;

    let cable = products::create_product(
        &ctx,
        products::NewProduct {
            name: "4-core Armoured Cable".to_string(),
            category: ProductCategory::Cable,
            voltage: "1.1kV".to_string(),
            rating: "16 sq mm".to_string(),
            make: "Polycab".to_string(),
            quantity: 200,
            unit: Unit::Meter,
            price_paise: 8_500,
        },
    )
    .await?;

    // -- quotation → approval → invoice --------------------------------------

    let quotation = quotations::create_quotation(
        &ctx,
        quotations::NewQuotation {
            customer_id: customer.id.clone(),
            items: vec![
                ItemRequest::new(motor.id.clone(), 2),
                ItemRequest::new(cable.id.clone(), 50),
            ],
            valid_until: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
            notes: Some("delivery within two weeks".to_string()),
        },
    )
    .await?;
    info!(
        quotation_id = %quotation.id,
        total = %quotation.total(),
        "quotation priced"
    );

    quotations::approve_quotation(&ctx, &quotation.id).await?;

    let invoice = quotations::generate_invoice(
        &ctx,
        &quotation.id,
        vec![AdditionalItem {
            description: "Installation".to_string(),
            amount_paise: 500_000,
        }],
        InvoiceMetadata {
            invoice_number: "INV-2026-001".to_string(),
            invoice_date: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            payment_terms: "50% advance, 50% on delivery".to_string(),
            warranty: Some("12 months".to_string()),
            notes: None,
            kind: InvoiceType::Customer,
        },
    )
    .await?;
    info!(
        invoice_id = %invoice.id,
        number = %invoice.invoice_number,
        total = %invoice.total(),
        "invoice generated"
    );

    // -- stock moves after the sale ------------------------------------------

    let remaining = products::adjust_inventory(&ctx, &motor.id, -2).await?;
    info!(product = %motor.name, remaining, "stock adjusted after delivery");

    // -- live dashboard figures ----------------------------------------------

    let mut stats_rx = feed.subscribe();
    // the feed may still be catching up on the last mutation
    while stats_rx.borrow().invoice_count == 0 {
        stats_rx.changed().await?;
    }

    let stats = stats_rx.borrow_and_update().clone();
    info!(
        customers = stats.customer_count,
        products = stats.product_count,
        quotations = stats.quotation_count,
        invoices = stats.invoice_count,
        pending = stats.pending_quotations,
        inventory_value = %Money::from_paise(stats.inventory_value_paise),
        "dashboard overview"
    );

    Ok(())
}
