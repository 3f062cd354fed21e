//! Order endpoints

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use shared::Page;
use shared::models::{Order, OrderCreate, OrderSearchParams, OrderUpdate};

use crate::{ClientResult, api::RestClient};

/// Order CRUD plus search/statistics sub-resources.
///
/// Listing endpoints are paginated; each call returns exactly one
/// page's content, pages are never merged client-side.
#[async_trait]
pub trait OrderApi: Send + Sync {
    async fn list_orders(&self, page: i64, size: i64) -> ClientResult<Page<Order>>;

    async fn get_order(&self, order_id: i64) -> ClientResult<Order>;

    async fn create_order(&self, request: &OrderCreate) -> ClientResult<Order>;

    async fn update_order(&self, order_id: i64, request: &OrderUpdate) -> ClientResult<Order>;

    async fn update_order_status(&self, order_id: i64, status: &str) -> ClientResult<Order>;

    async fn delete_order(&self, order_id: i64) -> ClientResult<()>;

    async fn list_orders_by_user(
        &self,
        user_id: i64,
        page: i64,
        size: i64,
    ) -> ClientResult<Page<Order>>;

    async fn search_orders(
        &self,
        params: &OrderSearchParams,
        page: i64,
        size: i64,
    ) -> ClientResult<Page<Order>>;

    /// Inclusive bounds on both ends
    async fn list_orders_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ClientResult<Vec<Order>>;

    /// Inclusive bounds on both ends
    async fn list_orders_by_amount_range(
        &self,
        min_amount: f64,
        max_amount: f64,
    ) -> ClientResult<Vec<Order>>;

    /// Server-computed aggregate counters keyed by metric name
    async fn get_order_statistics(&self) -> ClientResult<HashMap<String, f64>>;
}

#[async_trait]
impl OrderApi for RestClient {
    async fn list_orders(&self, page: i64, size: i64) -> ClientResult<Page<Order>> {
        self.http()
            .get(&format!("/orders?page={}&size={}", page, size))
            .await
    }

    async fn get_order(&self, order_id: i64) -> ClientResult<Order> {
        self.http().get(&format!("/orders/{}", order_id)).await
    }

    async fn create_order(&self, request: &OrderCreate) -> ClientResult<Order> {
        self.http().post("/orders", request).await
    }

    async fn update_order(&self, order_id: i64, request: &OrderUpdate) -> ClientResult<Order> {
        self.http().put(&format!("/orders/{}", order_id), request).await
    }

    async fn update_order_status(&self, order_id: i64, status: &str) -> ClientResult<Order> {
        let path = format!(
            "/orders/{}/status?status={}",
            order_id,
            urlencoding::encode(status)
        );
        self.http().patch_empty(&path).await
    }

    async fn delete_order(&self, order_id: i64) -> ClientResult<()> {
        self.http().delete(&format!("/orders/{}", order_id)).await
    }

    async fn list_orders_by_user(
        &self,
        user_id: i64,
        page: i64,
        size: i64,
    ) -> ClientResult<Page<Order>> {
        self.http()
            .get(&format!(
                "/orders/user/{}?page={}&size={}",
                user_id, page, size
            ))
            .await
    }

    async fn search_orders(
        &self,
        params: &OrderSearchParams,
        page: i64,
        size: i64,
    ) -> ClientResult<Page<Order>> {
        let mut path = format!("/orders/search?page={}&size={}", page, size);
        if let Some(user_id) = params.user_id {
            path.push_str(&format!("&userId={}", user_id));
        }
        if let Some(status) = &params.status {
            path.push_str(&format!("&status={}", urlencoding::encode(status)));
        }
        if let Some(start) = params.start_date {
            path.push_str(&format!(
                "&startDate={}",
                urlencoding::encode(&start.to_rfc3339())
            ));
        }
        if let Some(end) = params.end_date {
            path.push_str(&format!(
                "&endDate={}",
                urlencoding::encode(&end.to_rfc3339())
            ));
        }
        self.http().get(&path).await
    }

    async fn list_orders_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ClientResult<Vec<Order>> {
        let path = format!(
            "/orders/date-range?startDate={}&endDate={}",
            urlencoding::encode(&start.to_rfc3339()),
            urlencoding::encode(&end.to_rfc3339())
        );
        self.http().get(&path).await
    }

    async fn list_orders_by_amount_range(
        &self,
        min_amount: f64,
        max_amount: f64,
    ) -> ClientResult<Vec<Order>> {
        let path = format!(
            "/orders/amount-range?minAmount={}&maxAmount={}",
            min_amount, max_amount
        );
        self.http().get(&path).await
    }

    async fn get_order_statistics(&self) -> ClientResult<HashMap<String, f64>> {
        self.http().get("/orders/statistics").await
    }
}
