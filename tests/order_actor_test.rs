use resource_framework::{mock::MockClient, MemoryBackend, Snapshot};
use sales_orders::clients::{DomainClient, InventoryClient};
use sales_orders::config::LifecycleConfig;
use sales_orders::inventory_actor::InventoryActionResult;
use sales_orders::model::{
    sample_catalog, InventoryItem, ItemId, OrderDraft, OrderStatus, TransitionPolicy,
};
use sales_orders::order_actor::{self, OrderError};
use std::sync::Arc;

fn filled_draft() -> OrderDraft {
    let mut draft = OrderDraft::default();
    draft.po_number = "PO-55".into();
    draft.customer_name = "Acme".into();
    draft.customer_address = "Jl. Sudirman 1".into();
    draft
}

/// Real Order actor fed by a mocked catalog.
///
/// The inventory side is scripted with `MockClient`, so the test pins down what the
/// order actor stores for a catalog line without running the inventory actor.
#[tokio::test]
async fn test_order_actor_with_mocked_inventory() {
    let mut inventory_mock = MockClient::<InventoryItem>::new();
    inventory_mock
        .expect_get(ItemId(3))
        .return_ok(Some(sample_catalog()[2].clone()));
    inventory_mock
        .expect_action(ItemId(3))
        .return_ok(InventoryActionResult::ResolvePrice(175_000.0));
    let inventory_client = InventoryClient::new(inventory_mock.client());

    let (order_actor, order_client) = order_actor::new(8, None);
    let actor_handle = tokio::spawn(order_actor.run(TransitionPolicy::Free));

    let mut draft = filled_draft();
    let row = draft.first_item_id();
    draft.edit_quantity(row, "2").unwrap();
    inventory_client
        .attach_to_line(&mut draft, row, ItemId(3))
        .await
        .unwrap();

    let id = order_client.submit(draft).await.unwrap();
    let order = order_client.get(id).await.unwrap().unwrap();
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].product_description(), "Pirelli 215/70/R16 Sport");
    assert_eq!(order.items[0].total(), 350_000.0);
    assert!(order.items[0].from_lookup());
    assert_eq!(order.total_amount, 350_000.0);

    inventory_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

/// Real Order actor under a configured transition table.
#[tokio::test]
async fn test_order_actor_enforces_transition_table() {
    let lifecycle: LifecycleConfig = toml::from_str(
        r#"
        policy = "table"

        [allowed]
        pending-delivery = ["delivery"]
        delivery = ["done", "pending-item"]
        "#,
    )
    .unwrap();
    let policy = lifecycle.transition_policy().unwrap();

    let backend = Arc::new(MemoryBackend::new());
    let snapshot = Snapshot::new(backend.clone(), order_actor::STORAGE_KEY);
    let (actor, client) = order_actor::new(8, Some(snapshot.clone()));
    let handle = tokio::spawn(actor.run(policy));

    let mut draft = filled_draft();
    let row = draft.first_item_id();
    draft.set_description(row, "Valve caps").unwrap();
    let id = client.submit(draft).await.unwrap();

    assert_eq!(
        client.change_status(id, OrderStatus::Done, None).await,
        Err(OrderError::TransitionNotAllowed {
            from: OrderStatus::PendingDelivery,
            to: OrderStatus::Done,
        })
    );

    client
        .change_status(id, OrderStatus::Delivery, Some("  on the truck ".into()))
        .await
        .unwrap();
    let record = client
        .change_status(id, OrderStatus::Done, Some("   ".into()))
        .await
        .unwrap();
    assert_eq!(record.note, None);

    let stored = snapshot.load().await.unwrap();
    assert_eq!(stored.len(), 1);
    let statuses: Vec<OrderStatus> = stored[0].status_history.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            OrderStatus::PendingDelivery,
            OrderStatus::Delivery,
            OrderStatus::Done
        ]
    );
    assert_eq!(
        stored[0].status_history[1].note.as_deref(),
        Some("on the truck")
    );
    assert!(stored[0]
        .status_history
        .windows(2)
        .all(|pair| pair[0].date < pair[1].date));

    drop(client);
    handle.await.unwrap();
}
