//! Payment method endpoints

use async_trait::async_trait;

use shared::models::{PaymentMethod, PaymentMethodCreate, PaymentMethodUpdate};

use crate::{ClientResult, api::RestClient};

/// Payment method CRUD
#[async_trait]
pub trait PaymentMethodApi: Send + Sync {
    async fn list_payment_methods(&self) -> ClientResult<Vec<PaymentMethod>>;

    async fn get_payment_method(&self, payment_method_id: i64) -> ClientResult<PaymentMethod>;

    async fn create_payment_method(
        &self,
        request: &PaymentMethodCreate,
    ) -> ClientResult<PaymentMethod>;

    async fn update_payment_method(
        &self,
        payment_method_id: i64,
        request: &PaymentMethodUpdate,
    ) -> ClientResult<PaymentMethod>;

    async fn delete_payment_method(&self, payment_method_id: i64) -> ClientResult<()>;
}

#[async_trait]
impl PaymentMethodApi for RestClient {
    async fn list_payment_methods(&self) -> ClientResult<Vec<PaymentMethod>> {
        self.http().get("/payment-methods").await
    }

    async fn get_payment_method(&self, payment_method_id: i64) -> ClientResult<PaymentMethod> {
        self.http()
            .get(&format!("/payment-methods/{}", payment_method_id))
            .await
    }

    async fn create_payment_method(
        &self,
        request: &PaymentMethodCreate,
    ) -> ClientResult<PaymentMethod> {
        self.http().post("/payment-methods", request).await
    }

    async fn update_payment_method(
        &self,
        payment_method_id: i64,
        request: &PaymentMethodUpdate,
    ) -> ClientResult<PaymentMethod> {
        self.http()
            .put(&format!("/payment-methods/{}", payment_method_id), request)
            .await
    }

    async fn delete_payment_method(&self, payment_method_id: i64) -> ClientResult<()> {
        self.http()
            .delete(&format!("/payment-methods/{}", payment_method_id))
            .await
    }
}
