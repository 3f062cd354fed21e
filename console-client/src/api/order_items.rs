//! Order item endpoints
//!
//! Items are addressed by the (order, product) pair; they have no id of
//! their own.

use async_trait::async_trait;

use shared::models::{OrderItem, OrderItemCreate, OrderItemUpdate};

use crate::{ClientResult, api::RestClient};

/// Line-item CRUD scoped under an order
#[async_trait]
pub trait OrderItemApi: Send + Sync {
    async fn list_order_items(&self, order_id: i64) -> ClientResult<Vec<OrderItem>>;

    async fn get_order_item(&self, order_id: i64, product_id: i64) -> ClientResult<OrderItem>;

    async fn create_order_item(
        &self,
        order_id: i64,
        request: &OrderItemCreate,
    ) -> ClientResult<OrderItem>;

    async fn update_order_item(
        &self,
        order_id: i64,
        product_id: i64,
        request: &OrderItemUpdate,
    ) -> ClientResult<OrderItem>;

    async fn delete_order_item(&self, order_id: i64, product_id: i64) -> ClientResult<()>;

    /// Create several items in one round trip
    async fn create_order_items(
        &self,
        order_id: i64,
        requests: &[OrderItemCreate],
    ) -> ClientResult<Vec<OrderItem>>;

    /// Update several items in one round trip
    async fn update_order_items(
        &self,
        order_id: i64,
        requests: &[OrderItemCreate],
    ) -> ClientResult<Vec<OrderItem>>;
}

#[async_trait]
impl OrderItemApi for RestClient {
    async fn list_order_items(&self, order_id: i64) -> ClientResult<Vec<OrderItem>> {
        self.http().get(&format!("/orders/{}/items", order_id)).await
    }

    async fn get_order_item(&self, order_id: i64, product_id: i64) -> ClientResult<OrderItem> {
        self.http()
            .get(&format!("/orders/{}/items/{}", order_id, product_id))
            .await
    }

    async fn create_order_item(
        &self,
        order_id: i64,
        request: &OrderItemCreate,
    ) -> ClientResult<OrderItem> {
        self.http()
            .post(&format!("/orders/{}/items", order_id), request)
            .await
    }

    async fn update_order_item(
        &self,
        order_id: i64,
        product_id: i64,
        request: &OrderItemUpdate,
    ) -> ClientResult<OrderItem> {
        self.http()
            .put(
                &format!("/orders/{}/items/{}", order_id, product_id),
                request,
            )
            .await
    }

    async fn delete_order_item(&self, order_id: i64, product_id: i64) -> ClientResult<()> {
        self.http()
            .delete(&format!("/orders/{}/items/{}", order_id, product_id))
            .await
    }

    async fn create_order_items(
        &self,
        order_id: i64,
        requests: &[OrderItemCreate],
    ) -> ClientResult<Vec<OrderItem>> {
        self.http()
            .post(&format!("/orders/{}/items/bulk", order_id), &requests)
            .await
    }

    async fn update_order_items(
        &self,
        order_id: i64,
        requests: &[OrderItemCreate],
    ) -> ClientResult<Vec<OrderItem>> {
        self.http()
            .put(&format!("/orders/{}/items/bulk", order_id), &requests)
            .await
    }
}
