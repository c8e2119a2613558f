//! # Order Client
//!
//! Provides a high‑level API for interacting with the `SalesOrder` actor.
//! It wraps a `ResourceClient<SalesOrder>`; `get`, `list` and `delete` come from
//! [`DomainClient`].
use crate::model::{
    status_summary, OrderCreate, OrderDraft, OrderQuery, OrderStatus, SalesOrder, StatusCount,
    StatusRecord,
};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use resource_framework::{DomainClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Client for interacting with the Order actor.
///
/// Validation happens in `SalesOrder::from_create_params`, inside the actor;
/// [`OrderClient::submit`] additionally validates the draft before sending it.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<SalesOrder>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<SalesOrder>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(po_number = %params.po_number))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Uuid, OrderError> {
        debug!(?params, "create_order called");
        info!("Sending create_order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Validates a draft and creates the order from it.
    pub async fn submit(&self, draft: OrderDraft) -> Result<Uuid, OrderError> {
        let params = draft.submit()?;
        self.create_order(params).await
    }

    /// Moves an order to `status` and returns the appended history record.
    #[instrument(skip(self))]
    pub async fn change_status(
        &self,
        id: Uuid,
        status: OrderStatus,
        note: Option<String>,
    ) -> Result<StatusRecord, OrderError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, OrderAction::ChangeStatus { status, note })
            .await
        {
            Ok(OrderActionResult::ChangeStatus(record)) => Ok(record),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Order counts for every status.
    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<Vec<StatusCount>, OrderError> {
        let orders = self.list(OrderQuery::default()).await?;
        Ok(status_summary(&orders))
    }

    /// The orders matching `query`, as pretty-printed JSON in the persisted layout.
    #[instrument(skip(self))]
    pub async fn export(&self, query: OrderQuery) -> Result<String, OrderError> {
        let orders = self.list(query).await?;
        serde_json::to_string_pretty(&orders).map_err(|e| OrderError::Export(e.to_string()))
    }
}

#[async_trait]
impl DomainClient<SalesOrder> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<SalesOrder> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DraftError, LineItem};
    use chrono::{NaiveDate, Utc};
    use resource_framework::mock::{create_mock_client, expect_action, expect_create, MockClient};

    fn stored(status: OrderStatus) -> SalesOrder {
        let create = OrderCreate {
            po_number: "PO-1".into(),
            po_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            customer_name: "Acme".into(),
            customer_address: "Addr".into(),
            status,
            items: vec![LineItem::manual("Tyre", 1, 10.0)],
        };
        SalesOrder::from_create(Uuid::new_v4(), create, Utc::now())
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_actor() {
        let (client, mut receiver) = create_mock_client::<SalesOrder>(10);
        let order_client = OrderClient::new(client);

        let result = order_client.submit(OrderDraft::default()).await;
        assert_eq!(
            result,
            Err(OrderError::Invalid(DraftError::MissingField("PO number")))
        );
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn submit_sends_the_validated_payload() {
        let (client, mut receiver) = create_mock_client::<SalesOrder>(10);
        let order_client = OrderClient::new(client);

        let mut draft = OrderDraft::default();
        draft.po_number = " PO-100 ".into();
        draft.customer_name = "Acme".into();
        draft.customer_address = "Addr".into();
        let row = draft.first_item_id();
        draft.set_description(row, "Valve caps").unwrap();

        let submit_task = tokio::spawn(async move { order_client.submit(draft).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.po_number, "PO-100");
        assert_eq!(params.items.len(), 1);

        let id = Uuid::new_v4();
        responder.send(Ok(id)).unwrap();
        assert_eq!(submit_task.await.unwrap(), Ok(id));
    }

    #[tokio::test]
    async fn change_status_sends_the_action() {
        let (client, mut receiver) = create_mock_client::<SalesOrder>(10);
        let order_client = OrderClient::new(client);
        let id = Uuid::new_v4();

        let change_task = tokio::spawn(async move {
            order_client
                .change_status(id, OrderStatus::Done, Some("shipped".into()))
                .await
        });

        let (sent_id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(sent_id, id);
        let OrderAction::ChangeStatus { status, note } = action;
        assert_eq!(status, OrderStatus::Done);
        assert_eq!(note.as_deref(), Some("shipped"));

        let record = StatusRecord {
            status,
            date: Utc::now(),
            note,
        };
        responder
            .send(Ok(OrderActionResult::ChangeStatus(record.clone())))
            .unwrap();
        assert_eq!(change_task.await.unwrap(), Ok(record));
    }

    #[tokio::test]
    async fn entity_errors_come_back_typed() {
        let mut mock = MockClient::<SalesOrder>::new();
        let id = Uuid::new_v4();
        mock.expect_action(id)
            .return_err(FrameworkError::EntityError(Box::new(
                OrderError::TransitionNotAllowed {
                    from: OrderStatus::Done,
                    to: OrderStatus::Delivery,
                },
            )));
        mock.expect_delete(id)
            .return_err(FrameworkError::NotFound(id.to_string()));

        let order_client = OrderClient::new(mock.client());
        assert!(matches!(
            order_client
                .change_status(id, OrderStatus::Delivery, None)
                .await,
            Err(OrderError::TransitionNotAllowed { .. })
        ));
        assert_eq!(
            order_client.delete(id).await,
            Err(OrderError::NotFound(id.to_string()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn summary_counts_listed_orders() {
        let mut mock = MockClient::<SalesOrder>::new();
        mock.expect_list().return_ok(vec![
            stored(OrderStatus::Done),
            stored(OrderStatus::Done),
            stored(OrderStatus::Delivery),
        ]);

        let summary = OrderClient::new(mock.client()).summary().await.unwrap();
        let counts: Vec<usize> = summary.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![0, 0, 0, 1, 2]);
        mock.verify();
    }

    #[tokio::test]
    async fn export_is_pretty_json_array() {
        let mut mock = MockClient::<SalesOrder>::new();
        let order = stored(OrderStatus::PendingInvoice);
        mock.expect_list().return_ok(vec![order.clone()]);

        let json = OrderClient::new(mock.client())
            .export(OrderQuery::default())
            .await
            .unwrap();
        assert!(json.starts_with("[\n"));
        let parsed: Vec<SalesOrder> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![order]);
    }
}
