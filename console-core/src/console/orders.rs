//! Order operations

use chrono::{DateTime, Utc};

use console_client::ClientError;
use shared::models::{OrderCreate, OrderSearchParams, OrderUpdate};

use crate::error::{ConsoleError, ConsoleResult};
use crate::store::OrderEvent;

use super::Console;

impl Console {
    /// Fetch one page of the order listing; it replaces the primary
    /// collection, pages are never merged.
    pub async fn fetch_orders(&self, page: i64, size: i64) -> ConsoleResult<()> {
        self.require_token()?;
        self.orders.write().await.apply(OrderEvent::Loading);
        match self.api.list_orders(page, size).await {
            Ok(page) => {
                self.orders.write().await.apply(OrderEvent::PageFetched(page));
                Ok(())
            }
            Err(error) => self.fail_orders(error).await,
        }
    }

    pub async fn fetch_order(&self, order_id: i64) -> ConsoleResult<()> {
        self.require_token()?;
        self.orders.write().await.apply(OrderEvent::Loading);
        match self.api.get_order(order_id).await {
            Ok(order) => {
                self.orders.write().await.apply(OrderEvent::OneFetched(order));
                Ok(())
            }
            Err(error) => self.fail_orders(error).await,
        }
    }

    pub async fn create_order(&self, request: &OrderCreate) -> ConsoleResult<()> {
        self.require_token()?;
        self.orders.write().await.apply(OrderEvent::Loading);
        match self.api.create_order(request).await {
            Ok(order) => {
                tracing::info!(user_id = request.user_id, "Order created");
                self.orders.write().await.apply(OrderEvent::Created(order));
                Ok(())
            }
            Err(error) => self.fail_orders(error).await,
        }
    }

    pub async fn update_order(&self, order_id: i64, request: &OrderUpdate) -> ConsoleResult<()> {
        self.require_token()?;
        self.orders.write().await.apply(OrderEvent::Loading);
        match self.api.update_order(order_id, request).await {
            Ok(order) => {
                self.orders.write().await.apply(OrderEvent::Updated(order));
                Ok(())
            }
            Err(error) => self.fail_orders(error).await,
        }
    }

    pub async fn update_order_status(&self, order_id: i64, status: &str) -> ConsoleResult<()> {
        self.require_token()?;
        self.orders.write().await.apply(OrderEvent::Loading);
        match self.api.update_order_status(order_id, status).await {
            Ok(order) => {
                tracing::info!(order_id, status = %status, "Order status updated");
                self.orders.write().await.apply(OrderEvent::Updated(order));
                Ok(())
            }
            Err(error) => self.fail_orders(error).await,
        }
    }

    pub async fn delete_order(&self, order_id: i64) -> ConsoleResult<()> {
        self.require_token()?;
        self.orders.write().await.apply(OrderEvent::Loading);
        match self.api.delete_order(order_id).await {
            Ok(()) => {
                self.orders.write().await.apply(OrderEvent::Removed(order_id));
                Ok(())
            }
            Err(error) => self.fail_orders(error).await,
        }
    }

    pub async fn fetch_orders_by_user(
        &self,
        user_id: i64,
        page: i64,
        size: i64,
    ) -> ConsoleResult<()> {
        self.require_token()?;
        self.orders.write().await.apply(OrderEvent::Loading);
        match self.api.list_orders_by_user(user_id, page, size).await {
            Ok(page) => {
                self.orders
                    .write()
                    .await
                    .apply(OrderEvent::UserOrdersFetched(page));
                Ok(())
            }
            Err(error) => self.fail_orders(error).await,
        }
    }

    pub async fn search_orders(
        &self,
        params: &OrderSearchParams,
        page: i64,
        size: i64,
    ) -> ConsoleResult<()> {
        self.require_token()?;
        self.orders.write().await.apply(OrderEvent::Loading);
        match self.api.search_orders(params, page, size).await {
            Ok(page) => {
                self.orders.write().await.apply(OrderEvent::SearchFetched(page));
                Ok(())
            }
            Err(error) => self.fail_orders(error).await,
        }
    }

    /// Inclusive date bounds; replaces the primary collection
    pub async fn fetch_orders_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ConsoleResult<()> {
        self.require_token()?;
        self.orders.write().await.apply(OrderEvent::Loading);
        match self.api.list_orders_by_date_range(start, end).await {
            Ok(orders) => {
                self.orders.write().await.apply(OrderEvent::RangeFetched(orders));
                Ok(())
            }
            Err(error) => self.fail_orders(error).await,
        }
    }

    /// Inclusive amount bounds; replaces the primary collection
    pub async fn fetch_orders_by_amount_range(&self, min: f64, max: f64) -> ConsoleResult<()> {
        self.require_token()?;
        self.orders.write().await.apply(OrderEvent::Loading);
        match self.api.list_orders_by_amount_range(min, max).await {
            Ok(orders) => {
                self.orders.write().await.apply(OrderEvent::RangeFetched(orders));
                Ok(())
            }
            Err(error) => self.fail_orders(error).await,
        }
    }

    pub async fn fetch_order_statistics(&self) -> ConsoleResult<()> {
        self.require_token()?;
        self.orders.write().await.apply(OrderEvent::Loading);
        match self.api.get_order_statistics().await {
            Ok(statistics) => {
                self.orders
                    .write()
                    .await
                    .apply(OrderEvent::StatisticsFetched(statistics));
                Ok(())
            }
            Err(error) => self.fail_orders(error).await,
        }
    }

    pub async fn clear_selected_order(&self) {
        self.orders.write().await.clear_selected();
    }

    pub async fn clear_order_error(&self) {
        self.orders.write().await.clear_error();
    }

    pub async fn reset_orders(&self) {
        self.orders.write().await.reset();
    }

    async fn fail_orders(&self, error: ClientError) -> ConsoleResult<()> {
        if error.is_unauthorized() {
            self.force_logout().await;
            self.orders
                .write()
                .await
                .apply(OrderEvent::Failed(ConsoleError::SessionExpired.to_string()));
            return Err(ConsoleError::SessionExpired);
        }
        self.orders
            .write()
            .await
            .apply(OrderEvent::Failed(Self::failure_message(&error)));
        Err(error.into())
    }
}
