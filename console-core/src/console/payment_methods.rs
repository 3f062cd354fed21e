//! Payment method operations

use console_client::ClientError;
use shared::models::{PaymentMethodCreate, PaymentMethodUpdate};

use crate::error::{ConsoleError, ConsoleResult};
use crate::store::PaymentMethodEvent;

use super::Console;

impl Console {
    pub async fn fetch_payment_methods(&self) -> ConsoleResult<()> {
        self.require_token()?;
        self.payment_methods
            .write()
            .await
            .apply(PaymentMethodEvent::Loading);
        match self.api.list_payment_methods().await {
            Ok(items) => {
                self.payment_methods
                    .write()
                    .await
                    .apply(PaymentMethodEvent::Fetched(items));
                Ok(())
            }
            Err(error) => self.fail_payment_methods(error).await,
        }
    }

    pub async fn fetch_payment_method(&self, payment_method_id: i64) -> ConsoleResult<()> {
        self.require_token()?;
        self.payment_methods
            .write()
            .await
            .apply(PaymentMethodEvent::Loading);
        match self.api.get_payment_method(payment_method_id).await {
            Ok(method) => {
                self.payment_methods
                    .write()
                    .await
                    .apply(PaymentMethodEvent::OneFetched(method));
                Ok(())
            }
            Err(error) => self.fail_payment_methods(error).await,
        }
    }

    pub async fn create_payment_method(
        &self,
        request: &PaymentMethodCreate,
    ) -> ConsoleResult<()> {
        self.require_token()?;
        self.payment_methods
            .write()
            .await
            .apply(PaymentMethodEvent::Loading);
        match self.api.create_payment_method(request).await {
            Ok(method) => {
                tracing::info!(name = %method.method_name, "Payment method created");
                self.payment_methods
                    .write()
                    .await
                    .apply(PaymentMethodEvent::Created(method));
                Ok(())
            }
            Err(error) => self.fail_payment_methods(error).await,
        }
    }

    pub async fn update_payment_method(
        &self,
        payment_method_id: i64,
        request: &PaymentMethodUpdate,
    ) -> ConsoleResult<()> {
        self.require_token()?;
        self.payment_methods
            .write()
            .await
            .apply(PaymentMethodEvent::Loading);
        match self.api.update_payment_method(payment_method_id, request).await {
            Ok(method) => {
                self.payment_methods
                    .write()
                    .await
                    .apply(PaymentMethodEvent::Updated(method));
                Ok(())
            }
            Err(error) => self.fail_payment_methods(error).await,
        }
    }

    pub async fn delete_payment_method(&self, payment_method_id: i64) -> ConsoleResult<()> {
        self.require_token()?;
        self.payment_methods
            .write()
            .await
            .apply(PaymentMethodEvent::Loading);
        match self.api.delete_payment_method(payment_method_id).await {
            Ok(()) => {
                self.payment_methods
                    .write()
                    .await
                    .apply(PaymentMethodEvent::Removed(payment_method_id));
                Ok(())
            }
            Err(error) => self.fail_payment_methods(error).await,
        }
    }

    pub async fn clear_selected_payment_method(&self) {
        self.payment_methods.write().await.clear_selected();
    }

    pub async fn clear_payment_method_error(&self) {
        self.payment_methods.write().await.clear_error();
    }

    pub async fn reset_payment_methods(&self) {
        self.payment_methods.write().await.reset();
    }

    async fn fail_payment_methods(&self, error: ClientError) -> ConsoleResult<()> {
        if error.is_unauthorized() {
            self.force_logout().await;
            self.payment_methods
                .write()
                .await
                .apply(PaymentMethodEvent::Failed(ConsoleError::SessionExpired.to_string()));
            return Err(ConsoleError::SessionExpired);
        }
        self.payment_methods
            .write()
            .await
            .apply(PaymentMethodEvent::Failed(Self::failure_message(&error)));
        Err(error.into())
    }
}
