use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use order_email_reconcile::config::AppConfig;
use order_email_reconcile::domain::customer::{Customer, Email, GroupId, WebsiteId};
use order_email_reconcile::domain::order::{AddressType, Order, StoreId};
use order_email_reconcile::domain::reconciliation::{
    ChangeEmailForm, ChangeEmailHandler, OrderEmailReconciler,
};
use order_email_reconcile::messaging::ChannelEventSink;
use order_email_reconcile::metrics::{self, Metrics};
use order_email_reconcile::store::{
    InMemoryCustomerFactory, InMemoryCustomerStore, InMemoryOrderStore, StaticActor,
};

fn change(order: &Order, email: &str, create_new: bool, assign: bool) -> ChangeEmailForm {
    let wire_flag = |on: bool| Some(if on { "1" } else { "0" }.to_string());
    ChangeEmailForm {
        order_id: Some(order.id.to_string()),
        email: Some(email.to_string()),
        old_email: Some(order.customer_email.to_string()),
        create_new_customer: wire_flag(create_new),
        assign_to_another_customer: wire_flag(assign),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    // RUST_LOG wins over the configured filter
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!(event_name = %config.event_name, "Starting order email reconciliation demo");

    let metrics = Arc::new(Metrics::new()?);

    // === Collaborators ===
    let website = WebsiteId(1);
    let store = StoreId(1);
    let orders = Arc::new(InMemoryOrderStore::new());
    let customers = Arc::new(InMemoryCustomerStore::new());
    let factory = Arc::new(
        InMemoryCustomerFactory::new(customers.clone())
            .with_store(store, website)
            .with_default_group(GroupId::GENERAL),
    );
    let (events, mut receiver) = ChannelEventSink::channel();

    let consumer = tokio::spawn(async move {
        while let Some(event) = receiver.recv().await {
            tracing::info!(
                event_name = %event.name,
                new_email = %event.payload["new_customer_email"],
                old_email = %event.payload["old_customer_email"],
                "Received email change event"
            );
        }
    });

    let reconciler = OrderEmailReconciler::new(orders.clone(), customers.clone(), factory, Arc::new(events))
        .with_event_name(config.event_name.clone())
        .with_metrics(metrics.clone());
    let handler = ChangeEmailHandler::new(Arc::new(reconciler), Arc::new(StaticActor::new("admin")));

    // === Seed data ===
    let jane = Customer::new(Email::parse("jane@example.com")?, GroupId::GENERAL, website).with_name("Jane", "Doe");
    let john = Customer::new(Email::parse("john@example.com")?, GroupId(2), website).with_name("John", "Roe");
    customers.insert(jane.clone())?;
    customers.insert(john)?;

    let linked = Order::for_customer("100000001", store, &jane)
        .with_address(AddressType::Billing)
        .with_address(AddressType::Shipping);
    let guest = Order::guest("100000002", store, website, Email::parse("guest@example.com")?)
        .with_address(AddressType::Billing);
    orders.insert(linked.clone())?;
    orders.insert(guest.clone())?;

    // === Walk the decision paths ===
    let attempts = [
        ("rewrite linked customer", change(&linked, "jane.doe@example.com", false, false)),
        ("conflict with existing customer", change(&guest, "john@example.com", false, false)),
        ("assign existing customer", change(&guest, "john@example.com", false, true)),
        ("stale form", change(&guest, "other@example.com", false, false)),
    ];

    for (label, form) in attempts {
        let response = handler.handle(form);
        tracing::info!(
            scenario = label,
            response = %serde_json::to_string(&response)?,
            "Handled change request"
        );
    }

    let fresh = Order::guest("100000003", store, website, Email::parse("visitor@example.com")?)
        .with_address(AddressType::Shipping);
    orders.insert(fresh.clone())?;
    let response = handler.handle(change(&fresh, "visitor.account@example.com", false, false));
    tracing::info!(
        scenario = "provision new customer",
        response = %serde_json::to_string(&response)?,
        "Handled change request"
    );

    match config.metrics_port {
        Some(port) => {
            // Keep serving until interrupted
            metrics::start_metrics_server(metrics.clone(), config.event_name.clone(), port).await?;
        }
        None => {
            drop(handler);
            consumer.await?;
        }
    }

    tracing::info!("Demo complete");
    Ok(())
}
