//! Order item operations

use console_client::ClientError;
use shared::models::{OrderItemCreate, OrderItemUpdate};

use crate::error::{ConsoleError, ConsoleResult};
use crate::store::OrderItemEvent;

use super::Console;

impl Console {
    pub async fn fetch_order_items(&self, order_id: i64) -> ConsoleResult<()> {
        self.require_token()?;
        self.order_items.write().await.apply(OrderItemEvent::Loading);
        match self.api.list_order_items(order_id).await {
            Ok(items) => {
                self.order_items
                    .write()
                    .await
                    .apply(OrderItemEvent::Fetched(items));
                Ok(())
            }
            Err(error) => self.fail_order_items(error).await,
        }
    }

    pub async fn fetch_order_item(&self, order_id: i64, product_id: i64) -> ConsoleResult<()> {
        self.require_token()?;
        self.order_items.write().await.apply(OrderItemEvent::Loading);
        match self.api.get_order_item(order_id, product_id).await {
            Ok(item) => {
                self.order_items
                    .write()
                    .await
                    .apply(OrderItemEvent::OneFetched(item));
                Ok(())
            }
            Err(error) => self.fail_order_items(error).await,
        }
    }

    pub async fn create_order_item(
        &self,
        order_id: i64,
        request: &OrderItemCreate,
    ) -> ConsoleResult<()> {
        self.require_token()?;
        self.order_items.write().await.apply(OrderItemEvent::Loading);
        match self.api.create_order_item(order_id, request).await {
            Ok(item) => {
                self.order_items
                    .write()
                    .await
                    .apply(OrderItemEvent::Created(item));
                Ok(())
            }
            Err(error) => self.fail_order_items(error).await,
        }
    }

    pub async fn update_order_item(
        &self,
        order_id: i64,
        product_id: i64,
        request: &OrderItemUpdate,
    ) -> ConsoleResult<()> {
        self.require_token()?;
        self.order_items.write().await.apply(OrderItemEvent::Loading);
        match self.api.update_order_item(order_id, product_id, request).await {
            Ok(item) => {
                self.order_items
                    .write()
                    .await
                    .apply(OrderItemEvent::Updated(item));
                Ok(())
            }
            Err(error) => self.fail_order_items(error).await,
        }
    }

    pub async fn delete_order_item(&self, order_id: i64, product_id: i64) -> ConsoleResult<()> {
        self.require_token()?;
        self.order_items.write().await.apply(OrderItemEvent::Loading);
        match self.api.delete_order_item(order_id, product_id).await {
            Ok(()) => {
                self.order_items
                    .write()
                    .await
                    .apply(OrderItemEvent::Removed((order_id, product_id)));
                Ok(())
            }
            Err(error) => self.fail_order_items(error).await,
        }
    }

    pub async fn bulk_create_order_items(
        &self,
        order_id: i64,
        requests: &[OrderItemCreate],
    ) -> ConsoleResult<()> {
        self.require_token()?;
        self.order_items.write().await.apply(OrderItemEvent::Loading);
        match self.api.create_order_items(order_id, requests).await {
            Ok(items) => {
                tracing::info!(order_id, count = items.len(), "Order items created");
                self.order_items
                    .write()
                    .await
                    .apply(OrderItemEvent::BulkCreated(items));
                Ok(())
            }
            Err(error) => self.fail_order_items(error).await,
        }
    }

    pub async fn bulk_update_order_items(
        &self,
        order_id: i64,
        requests: &[OrderItemCreate],
    ) -> ConsoleResult<()> {
        self.require_token()?;
        self.order_items.write().await.apply(OrderItemEvent::Loading);
        match self.api.update_order_items(order_id, requests).await {
            Ok(items) => {
                self.order_items
                    .write()
                    .await
                    .apply(OrderItemEvent::BulkUpdated(items));
                Ok(())
            }
            Err(error) => self.fail_order_items(error).await,
        }
    }

    pub async fn clear_selected_order_item(&self) {
        self.order_items.write().await.clear_selected();
    }

    pub async fn clear_order_item_error(&self) {
        self.order_items.write().await.clear_error();
    }

    pub async fn reset_order_items(&self) {
        self.order_items.write().await.reset();
    }

    async fn fail_order_items(&self, error: ClientError) -> ConsoleResult<()> {
        if error.is_unauthorized() {
            self.force_logout().await;
            self.order_items
                .write()
                .await
                .apply(OrderItemEvent::Failed(ConsoleError::SessionExpired.to_string()));
            return Err(ConsoleError::SessionExpired);
        }
        self.order_items
            .write()
            .await
            .apply(OrderItemEvent::Failed(Self::failure_message(&error)));
        Err(error.into())
    }
}
