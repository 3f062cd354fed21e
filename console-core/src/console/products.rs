//! Product operations

use console_client::ClientError;
use shared::models::{ImageUpload, ProductCreate, ProductUpdate};

use crate::error::{ConsoleError, ConsoleResult};
use crate::store::ProductEvent;

use super::Console;

impl Console {
    pub async fn fetch_products(&self) -> ConsoleResult<()> {
        self.require_token()?;
        self.products.write().await.apply(ProductEvent::Loading);
        match self.api.list_products().await {
            Ok(items) => {
                self.products.write().await.apply(ProductEvent::Fetched(items));
                Ok(())
            }
            Err(error) => self.fail_products(error).await,
        }
    }

    pub async fn fetch_product(&self, product_id: i64) -> ConsoleResult<()> {
        self.require_token()?;
        self.products.write().await.apply(ProductEvent::Loading);
        match self.api.get_product(product_id).await {
            Ok(product) => {
                self.products
                    .write()
                    .await
                    .apply(ProductEvent::OneFetched(product));
                Ok(())
            }
            Err(error) => self.fail_products(error).await,
        }
    }

    pub async fn create_product(
        &self,
        request: &ProductCreate,
        image: Option<ImageUpload>,
    ) -> ConsoleResult<()> {
        self.require_token()?;
        self.products.write().await.apply(ProductEvent::Loading);
        match self.api.create_product(request, image).await {
            Ok(product) => {
                tracing::info!(name = %product.product_name, "Product created");
                self.products.write().await.apply(ProductEvent::Created(product));
                Ok(())
            }
            Err(error) => self.fail_products(error).await,
        }
    }

    pub async fn update_product(
        &self,
        product_id: i64,
        request: &ProductUpdate,
        image: Option<ImageUpload>,
    ) -> ConsoleResult<()> {
        self.require_token()?;
        self.products.write().await.apply(ProductEvent::Loading);
        match self.api.update_product(product_id, request, image).await {
            Ok(product) => {
                self.products.write().await.apply(ProductEvent::Updated(product));
                Ok(())
            }
            Err(error) => self.fail_products(error).await,
        }
    }

    pub async fn delete_product(&self, product_id: i64) -> ConsoleResult<()> {
        self.require_token()?;
        self.products.write().await.apply(ProductEvent::Loading);
        match self.api.delete_product(product_id).await {
            Ok(()) => {
                self.products.write().await.apply(ProductEvent::Removed(product_id));
                Ok(())
            }
            Err(error) => self.fail_products(error).await,
        }
    }

    /// Keyword search; results land in the search secondary collection
    pub async fn search_products(&self, keyword: &str) -> ConsoleResult<()> {
        self.require_token()?;
        self.products.write().await.apply(ProductEvent::Loading);
        match self.api.search_products(keyword).await {
            Ok(items) => {
                self.products
                    .write()
                    .await
                    .apply(ProductEvent::SearchFetched(items));
                Ok(())
            }
            Err(error) => self.fail_products(error).await,
        }
    }

    pub async fn fetch_products_by_category(&self, category_id: i64) -> ConsoleResult<()> {
        self.require_token()?;
        self.products.write().await.apply(ProductEvent::Loading);
        match self.api.list_products_by_category(category_id).await {
            Ok(items) => {
                self.products
                    .write()
                    .await
                    .apply(ProductEvent::CategoryFetched(items));
                Ok(())
            }
            Err(error) => self.fail_products(error).await,
        }
    }

    /// Inclusive price bounds; replaces the primary collection
    pub async fn fetch_products_by_price_range(&self, min: f64, max: f64) -> ConsoleResult<()> {
        self.require_token()?;
        self.products.write().await.apply(ProductEvent::Loading);
        match self.api.list_products_by_price_range(min, max).await {
            Ok(items) => {
                self.products.write().await.apply(ProductEvent::Fetched(items));
                Ok(())
            }
            Err(error) => self.fail_products(error).await,
        }
    }

    /// Minimum stock filter; replaces the primary collection
    pub async fn fetch_products_by_stock(&self, min_stock: i64) -> ConsoleResult<()> {
        self.require_token()?;
        self.products.write().await.apply(ProductEvent::Loading);
        match self.api.list_products_by_stock(min_stock).await {
            Ok(items) => {
                self.products.write().await.apply(ProductEvent::Fetched(items));
                Ok(())
            }
            Err(error) => self.fail_products(error).await,
        }
    }

    pub async fn clear_selected_product(&self) {
        self.products.write().await.clear_selected();
    }

    pub async fn clear_search_results(&self) {
        self.products.write().await.clear_search_results();
    }

    pub async fn clear_product_error(&self) {
        self.products.write().await.clear_error();
    }

    pub async fn reset_products(&self) {
        self.products.write().await.reset();
    }

    async fn fail_products(&self, error: ClientError) -> ConsoleResult<()> {
        if error.is_unauthorized() {
            self.force_logout().await;
            self.products
                .write()
                .await
                .apply(ProductEvent::Failed(ConsoleError::SessionExpired.to_string()));
            return Err(ConsoleError::SessionExpired);
        }
        self.products
            .write()
            .await
            .apply(ProductEvent::Failed(Self::failure_message(&error)));
        Err(error.into())
    }
}
