//! Integration tests walking the dashboard workflows end to end:
//! quotation pricing and lifecycle, invoice generation, inventory
//! adjustment, role gates, and the live stats feed.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use volt_core::error::CoreError;
use volt_core::invoice::InvoiceMetadata;
use volt_core::pricing::ItemRequest;
use volt_core::types::{
    AdditionalItem, InvoiceType, ProductCategory, QuotationStatus, Role, Unit, User,
};
use volt_ops::{customers, invoices, products, quotations, AppContext, DashboardFeed, OpsError};
use volt_store::Store;

// =============================================================================
// Helpers
// =============================================================================

fn context(role: Role) -> AppContext {
    AppContext::new(
        Arc::new(Store::new()),
        User {
            id: "u-test".to_string(),
            email: "test@voltdesk.example".to_string(),
            role,
            display_name: None,
            created_at: Utc::now(),
        },
    )
}

async fn seed_customer(ctx: &AppContext) -> String {
    customers::create_customer(
        ctx,
        customers::NewCustomer {
            name: "Sharma Electricals".to_string(),
            email: "accounts@sharma.example".to_string(),
            phone: "+91 98765 43210".to_string(),
            address: "14 Industrial Estate".to_string(),
            location: "Hyderabad".to_string(),
            scope: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_product(ctx: &AppContext, name: &str, quantity: i64, price_paise: i64) -> String {
    products::create_product(
        ctx,
        products::NewProduct {
            name: name.to_string(),
            category: ProductCategory::Other,
            voltage: "415V".to_string(),
            rating: "-".to_string(),
            make: "Generic".to_string(),
            quantity,
            unit: Unit::Piece,
            price_paise,
        },
    )
    .await
    .unwrap()
    .id
}

fn metadata(number: &str) -> InvoiceMetadata {
    InvoiceMetadata {
        invoice_number: number.to_string(),
        invoice_date: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
        payment_terms: "Net 30".to_string(),
        warranty: None,
        notes: None,
        kind: InvoiceType::Customer,
    }
}

fn valid_until() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 30).unwrap()
}

// =============================================================================
// Quotation Pricing + Lifecycle
// =============================================================================

#[tokio::test]
async fn test_quotation_priced_from_catalog() {
    let ctx = context(Role::Admin);
    let customer_id = seed_customer(&ctx).await;
    let a = seed_product(&ctx, "Product A", 10, 10_000).await; // Rs 100
    let b = seed_product(&ctx, "Product B", 10, 5_000).await; // Rs 50

    let quotation = quotations::create_quotation(
        &ctx,
        quotations::NewQuotation {
            customer_id,
            items: vec![ItemRequest::new(a, 2), ItemRequest::new(b, 1)],
            valid_until: valid_until(),
            notes: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(quotation.total_paise, 25_000); // Rs 250
    assert_eq!(quotation.status, QuotationStatus::Pending);
    assert_eq!(quotation.items.len(), 2);
    assert_eq!(quotation.items[0].subtotal_paise, 20_000);
    assert_eq!(quotation.items[1].subtotal_paise, 5_000);
}

#[tokio::test]
async fn test_over_stock_quotation_writes_nothing() {
    let ctx = context(Role::Admin);
    let customer_id = seed_customer(&ctx).await;
    let a = seed_product(&ctx, "Product A", 3, 10_000).await;

    let err = quotations::create_quotation(
        &ctx,
        quotations::NewQuotation {
            customer_id,
            items: vec![ItemRequest::new(a, 4)],
            valid_until: valid_until(),
            notes: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        OpsError::Core(CoreError::InsufficientStock { available: 3, requested: 4, .. })
    ));
    assert_eq!(ctx.store.quotations.count().await, 0);
}

#[tokio::test]
async fn test_unknown_customer_rejected() {
    let ctx = context(Role::Admin);
    let a = seed_product(&ctx, "Product A", 3, 10_000).await;

    let err = quotations::create_quotation(
        &ctx,
        quotations::NewQuotation {
            customer_id: "missing".to_string(),
            items: vec![ItemRequest::new(a, 1)],
            valid_until: valid_until(),
            notes: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, OpsError::Core(CoreError::CustomerNotFound(_))));
}

#[tokio::test]
async fn test_review_transitions() {
    let ctx = context(Role::Employee);
    let customer_id = seed_customer(&ctx).await;
    let a = seed_product(&ctx, "Product A", 10, 10_000).await;

    let quotation = quotations::create_quotation(
        &ctx,
        quotations::NewQuotation {
            customer_id,
            items: vec![ItemRequest::new(a, 1)],
            valid_until: valid_until(),
            notes: None,
        },
    )
    .await
    .unwrap();

    quotations::approve_quotation(&ctx, &quotation.id).await.unwrap();
    let stored = ctx.store.quotations.get(&quotation.id).await.unwrap().unwrap();
    assert_eq!(stored.status, QuotationStatus::Approved);

    // re-review flips the decision; only invoiced is terminal
    quotations::reject_quotation(&ctx, &quotation.id).await.unwrap();
    let stored = ctx.store.quotations.get(&quotation.id).await.unwrap().unwrap();
    assert_eq!(stored.status, QuotationStatus::Rejected);
}

// =============================================================================
// Invoice Generation
// =============================================================================

#[tokio::test]
async fn test_generate_invoice_freezes_items_and_totals() {
    let ctx = context(Role::Employee);
    let customer_id = seed_customer(&ctx).await;
    let a = seed_product(&ctx, "Product A", 10, 10_000).await;
    let b = seed_product(&ctx, "Product B", 10, 5_000).await;

    let quotation = quotations::create_quotation(
        &ctx,
        quotations::NewQuotation {
            customer_id: customer_id.clone(),
            items: vec![ItemRequest::new(a, 2), ItemRequest::new(b, 1)],
            valid_until: valid_until(),
            notes: None,
        },
    )
    .await
    .unwrap();
    quotations::approve_quotation(&ctx, &quotation.id).await.unwrap();

    let invoice = quotations::generate_invoice(
        &ctx,
        &quotation.id,
        vec![AdditionalItem {
            description: "Installation".to_string(),
            amount_paise: 7_500, // Rs 75
        }],
        metadata("INV-001"),
    )
    .await
    .unwrap();

    assert_eq!(invoice.total_paise, 32_500); // Rs 250 + Rs 75
    assert_eq!(invoice.items, quotation.items);
    assert_eq!(invoice.customer_id, customer_id);
    assert_eq!(invoice.quotation_id, quotation.id);

    let stored = ctx.store.quotations.get(&quotation.id).await.unwrap().unwrap();
    assert_eq!(stored.status, QuotationStatus::Invoiced);
}

#[tokio::test]
async fn test_second_invoice_refused() {
    let ctx = context(Role::Employee);
    let customer_id = seed_customer(&ctx).await;
    let a = seed_product(&ctx, "Product A", 10, 10_000).await;

    let quotation = quotations::create_quotation(
        &ctx,
        quotations::NewQuotation {
            customer_id,
            items: vec![ItemRequest::new(a, 1)],
            valid_until: valid_until(),
            notes: None,
        },
    )
    .await
    .unwrap();

    // straight from pending is legal; review is advisory
    quotations::generate_invoice(&ctx, &quotation.id, vec![], metadata("INV-001"))
        .await
        .unwrap();

    let err = quotations::generate_invoice(&ctx, &quotation.id, vec![], metadata("INV-002"))
        .await
        .unwrap_err();
    assert!(matches!(err, OpsError::Core(CoreError::AlreadyInvoiced(_))));
    assert_eq!(ctx.store.invoices.count().await, 1);
}

#[tokio::test]
async fn test_price_edit_after_quoting_changes_nothing_issued() {
    let ctx = context(Role::Admin);
    let customer_id = seed_customer(&ctx).await;
    let a = seed_product(&ctx, "Product A", 10, 10_000).await;

    let quotation = quotations::create_quotation(
        &ctx,
        quotations::NewQuotation {
            customer_id,
            items: vec![ItemRequest::new(a.clone(), 2)],
            valid_until: valid_until(),
            notes: None,
        },
    )
    .await
    .unwrap();

    // double the catalog price between quoting and invoicing
    products::update_product(
        &ctx,
        &a,
        products::ProductUpdate {
            price_paise: Some(20_000),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let invoice = quotations::generate_invoice(&ctx, &quotation.id, vec![], metadata("INV-001"))
        .await
        .unwrap();

    // both documents bill at the quoted Rs 100, not the new Rs 200
    assert_eq!(invoice.total_paise, 20_000);
    assert_eq!(invoice.items[0].unit_price_paise, 10_000);

    let stored = ctx.store.quotations.get(&quotation.id).await.unwrap().unwrap();
    assert_eq!(stored.total_paise, 20_000);
}

#[tokio::test]
async fn test_delete_quotation_leaves_invoice() {
    let ctx = context(Role::Employee);
    let customer_id = seed_customer(&ctx).await;
    let a = seed_product(&ctx, "Product A", 10, 10_000).await;

    let quotation = quotations::create_quotation(
        &ctx,
        quotations::NewQuotation {
            customer_id,
            items: vec![ItemRequest::new(a, 1)],
            valid_until: valid_until(),
            notes: None,
        },
    )
    .await
    .unwrap();
    let invoice = quotations::generate_invoice(&ctx, &quotation.id, vec![], metadata("INV-001"))
        .await
        .unwrap();

    quotations::delete_quotation(&ctx, &quotation.id).await.unwrap();

    // no cascade: the invoice survives with a dangling quotation reference
    let stored = ctx.store.invoices.get(&invoice.id).await.unwrap().unwrap();
    assert_eq!(stored.quotation_id, quotation.id);
}

#[tokio::test]
async fn test_invoice_status_edits() {
    let ctx = context(Role::Employee);
    let customer_id = seed_customer(&ctx).await;
    let a = seed_product(&ctx, "Product A", 10, 10_000).await;

    let quotation = quotations::create_quotation(
        &ctx,
        quotations::NewQuotation {
            customer_id,
            items: vec![ItemRequest::new(a, 1)],
            valid_until: valid_until(),
            notes: None,
        },
    )
    .await
    .unwrap();
    let invoice = quotations::generate_invoice(&ctx, &quotation.id, vec![], metadata("INV-001"))
        .await
        .unwrap();

    invoices::set_invoice_status(&ctx, &invoice.id, volt_core::types::InvoiceStatus::Paid)
        .await
        .unwrap();
    invoices::update_invoice(
        &ctx,
        &invoice.id,
        invoices::InvoiceUpdate {
            warranty: Some(Some("12 months".to_string())),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let stored = ctx.store.invoices.get(&invoice.id).await.unwrap().unwrap();
    assert_eq!(stored.status, volt_core::types::InvoiceStatus::Paid);
    assert_eq!(stored.warranty.as_deref(), Some("12 months"));
    // frozen fields untouched
    assert_eq!(stored.total_paise, invoice.total_paise);

    // Some(None) clears the optional field again
    invoices::update_invoice(
        &ctx,
        &invoice.id,
        invoices::InvoiceUpdate {
            warranty: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let stored = ctx.store.invoices.get(&invoice.id).await.unwrap().unwrap();
    assert_eq!(stored.warranty, None);
}

#[tokio::test]
async fn test_partial_write_when_quotation_vanishes_mid_generation() {
    let ctx = context(Role::Employee);
    let customer_id = seed_customer(&ctx).await;
    let a = seed_product(&ctx, "Product A", 10, 10_000).await;

    let quotation = quotations::create_quotation(
        &ctx,
        quotations::NewQuotation {
            customer_id,
            items: vec![ItemRequest::new(a, 1)],
            valid_until: valid_until(),
            notes: None,
        },
    )
    .await
    .unwrap();

    // another client deletes the quotation while this one still holds it
    quotations::delete_quotation(&ctx, &quotation.id).await.unwrap();

    let err = quotations::generate_invoice_from(&ctx, &quotation, vec![], metadata("INV-001"))
        .await
        .unwrap_err();

    let (invoice_id, quotation_id) = match err {
        OpsError::PartialInvoice {
            invoice_id,
            quotation_id,
            ..
        } => (invoice_id, quotation_id),
        other => panic!("expected PartialInvoice, got {other:?}"),
    };
    assert_eq!(quotation_id, quotation.id);

    // the invoice WAS written and stays; reconciliation is manual
    let stored = ctx.store.invoices.get(&invoice_id).await.unwrap().unwrap();
    assert_eq!(stored.quotation_id, quotation.id);
    assert_eq!(stored.total_paise, quotation.total_paise);
}

// =============================================================================
// Inventory Adjustment
// =============================================================================

#[tokio::test]
async fn test_adjustment_applies_delta_and_rejects_negative() {
    let ctx = context(Role::Employee);
    let a = seed_product(&ctx, "Product A", 5, 10_000).await;

    let remaining = products::adjust_inventory(&ctx, &a, -3).await.unwrap();
    assert_eq!(remaining, 2);

    let err = products::adjust_inventory(&ctx, &a, -5).await.unwrap_err();
    assert!(matches!(
        err,
        OpsError::Core(CoreError::NegativeStock { current: 2, delta: -5, .. })
    ));

    // the rejected adjustment left stock untouched
    let stored = ctx.store.products.get(&a).await.unwrap().unwrap();
    assert_eq!(stored.quantity, 2);
}

#[tokio::test]
async fn test_quoting_does_not_touch_stock() {
    let ctx = context(Role::Employee);
    let customer_id = seed_customer(&ctx).await;
    let a = seed_product(&ctx, "Product A", 5, 10_000).await;

    let quotation = quotations::create_quotation(
        &ctx,
        quotations::NewQuotation {
            customer_id,
            items: vec![ItemRequest::new(a.clone(), 3)],
            valid_until: valid_until(),
            notes: None,
        },
    )
    .await
    .unwrap();
    quotations::generate_invoice(&ctx, &quotation.id, vec![], metadata("INV-001"))
        .await
        .unwrap();

    let stored = ctx.store.products.get(&a).await.unwrap().unwrap();
    assert_eq!(stored.quantity, 5);
}

#[tokio::test]
async fn test_customer_scope_can_be_set_and_cleared() {
    let ctx = context(Role::Admin);
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
    .await
    .unwrap();

    customers::update_customer(
        &ctx,
        &customer.id,
        customers::CustomerUpdate {
            scope: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let stored = ctx.store.customers.get(&customer.id).await.unwrap().unwrap();
    assert_eq!(stored.scope, None);
    // untouched fields keep their value
    assert_eq!(stored.location, "Hyderabad");
}

// =============================================================================
// Role Gates
// =============================================================================

#[tokio::test]
async fn test_employee_cannot_delete_admin_can() {
    let admin = context(Role::Admin);
    let customer_id = seed_customer(&admin).await;

    // employee sharing the same store
    let employee = AppContext::new(
        Arc::clone(&admin.store),
        User {
            id: "u-emp".to_string(),
            email: "emp@voltdesk.example".to_string(),
            role: Role::Employee,
            display_name: None,
            created_at: Utc::now(),
        },
    );

    let err = customers::delete_customer(&employee, &customer_id)
        .await
        .unwrap_err();
    assert!(matches!(err, OpsError::Forbidden { .. }));
    assert_eq!(admin.store.customers.count().await, 1);

    customers::delete_customer(&admin, &customer_id).await.unwrap();
    assert_eq!(admin.store.customers.count().await, 0);
}

// =============================================================================
// Live Dashboard Feed
// =============================================================================

#[tokio::test]
async fn test_dashboard_feed_tracks_mutations() {
    let ctx = context(Role::Admin);
    let feed = DashboardFeed::spawn(Arc::clone(&ctx.store));
    let mut rx = feed.subscribe();

    assert_eq!(rx.borrow_and_update().customer_count, 0);

    seed_customer(&ctx).await;
    seed_product(&ctx, "Product A", 2, 10_000).await;

    // wait until the feed has folded in both writes
    loop {
        let stats = rx.borrow_and_update().clone();
        if stats.customer_count == 1 && stats.product_count == 1 {
            assert_eq!(stats.inventory_value_paise, 20_000);
            break;
        }
        rx.changed().await.unwrap();
    }
}
