//! Product endpoints
//!
//! Create/update are multipart: a JSON `product` part plus an optional
//! binary `image` part.

use async_trait::async_trait;
use reqwest::Method;

use shared::models::{ImageUpload, Product, ProductCreate, ProductUpdate};

use crate::{ClientResult, api::RestClient};

/// Product CRUD plus search/filter sub-resources
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn list_products(&self) -> ClientResult<Vec<Product>>;

    async fn get_product(&self, product_id: i64) -> ClientResult<Product>;

    async fn create_product(
        &self,
        request: &ProductCreate,
        image: Option<ImageUpload>,
    ) -> ClientResult<Product>;

    async fn update_product(
        &self,
        product_id: i64,
        request: &ProductUpdate,
        image: Option<ImageUpload>,
    ) -> ClientResult<Product>;

    async fn delete_product(&self, product_id: i64) -> ClientResult<()>;

    async fn search_products(&self, keyword: &str) -> ClientResult<Vec<Product>>;

    async fn list_products_by_category(&self, category_id: i64) -> ClientResult<Vec<Product>>;

    /// Inclusive bounds on both ends
    async fn list_products_by_price_range(
        &self,
        min_price: f64,
        max_price: f64,
    ) -> ClientResult<Vec<Product>>;

    async fn list_products_by_stock(&self, min_stock: i64) -> ClientResult<Vec<Product>>;
}

#[async_trait]
impl ProductApi for RestClient {
    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.http().get("/products").await
    }

    async fn get_product(&self, product_id: i64) -> ClientResult<Product> {
        self.http().get(&format!("/products/{}", product_id)).await
    }

    async fn create_product(
        &self,
        request: &ProductCreate,
        image: Option<ImageUpload>,
    ) -> ClientResult<Product> {
        self.http()
            .multipart(Method::POST, "/products", "product", request, image)
            .await
    }

    async fn update_product(
        &self,
        product_id: i64,
        request: &ProductUpdate,
        image: Option<ImageUpload>,
    ) -> ClientResult<Product> {
        self.http()
            .multipart(
                Method::PUT,
                &format!("/products/{}", product_id),
                "product",
                request,
                image,
            )
            .await
    }

    async fn delete_product(&self, product_id: i64) -> ClientResult<()> {
        self.http().delete(&format!("/products/{}", product_id)).await
    }

    async fn search_products(&self, keyword: &str) -> ClientResult<Vec<Product>> {
        let path = format!("/products/search?keyword={}", urlencoding::encode(keyword));
        self.http().get(&path).await
    }

    async fn list_products_by_category(&self, category_id: i64) -> ClientResult<Vec<Product>> {
        self.http()
            .get(&format!("/products/category/{}", category_id))
            .await
    }

    async fn list_products_by_price_range(
        &self,
        min_price: f64,
        max_price: f64,
    ) -> ClientResult<Vec<Product>> {
        let path = format!(
            "/products/price-range?minPrice={}&maxPrice={}",
            min_price, max_price
        );
        self.http().get(&path).await
    }

    async fn list_products_by_stock(&self, min_stock: i64) -> ClientResult<Vec<Product>> {
        self.http()
            .get(&format!("/products/stock?minStock={}", min_stock))
            .await
    }
}
