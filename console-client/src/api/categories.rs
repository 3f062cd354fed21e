//! Category endpoints

use async_trait::async_trait;

use shared::models::{Category, CategoryCreate, CategoryUpdate};

use crate::{ClientResult, api::RestClient};

/// Category CRUD plus the parent/child sub-resources
#[async_trait]
pub trait CategoryApi: Send + Sync {
    async fn list_categories(&self) -> ClientResult<Vec<Category>>;

    async fn get_category(&self, category_id: i64) -> ClientResult<Category>;

    async fn search_categories(&self, keyword: &str) -> ClientResult<Vec<Category>>;

    async fn list_parent_categories(&self) -> ClientResult<Vec<Category>>;

    async fn list_child_categories(&self, parent_id: i64) -> ClientResult<Vec<Category>>;

    async fn create_parent_category(&self, request: &CategoryCreate) -> ClientResult<Category>;

    async fn update_parent_category(
        &self,
        category_id: i64,
        request: &CategoryUpdate,
    ) -> ClientResult<Category>;

    /// Deleting a parent cascades to its children server-side; the
    /// local cache only reflects that after the next full refetch.
    async fn delete_parent_category(&self, category_id: i64) -> ClientResult<()>;

    async fn create_child_category(
        &self,
        parent_id: i64,
        request: &CategoryCreate,
    ) -> ClientResult<Category>;

    async fn update_child_category(
        &self,
        parent_id: i64,
        child_id: i64,
        request: &CategoryUpdate,
    ) -> ClientResult<Category>;

    async fn delete_child_category(&self, child_id: i64) -> ClientResult<()>;
}

#[async_trait]
impl CategoryApi for RestClient {
    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.http().get("/categories").await
    }

    async fn get_category(&self, category_id: i64) -> ClientResult<Category> {
        self.http().get(&format!("/categories/{}", category_id)).await
    }

    async fn search_categories(&self, keyword: &str) -> ClientResult<Vec<Category>> {
        let path = format!("/categories/search?keyword={}", urlencoding::encode(keyword));
        self.http().get(&path).await
    }

    async fn list_parent_categories(&self) -> ClientResult<Vec<Category>> {
        self.http().get("/categories/parents").await
    }

    async fn list_child_categories(&self, parent_id: i64) -> ClientResult<Vec<Category>> {
        self.http()
            .get(&format!("/categories/{}/children", parent_id))
            .await
    }

    async fn create_parent_category(&self, request: &CategoryCreate) -> ClientResult<Category> {
        self.http().post("/categories/parent", request).await
    }

    async fn update_parent_category(
        &self,
        category_id: i64,
        request: &CategoryUpdate,
    ) -> ClientResult<Category> {
        self.http()
            .put(&format!("/categories/parent/{}", category_id), request)
            .await
    }

    async fn delete_parent_category(&self, category_id: i64) -> ClientResult<()> {
        self.http()
            .delete(&format!("/categories/parent/{}", category_id))
            .await
    }

    async fn create_child_category(
        &self,
        parent_id: i64,
        request: &CategoryCreate,
    ) -> ClientResult<Category> {
        self.http()
            .post(&format!("/categories/{}/children", parent_id), request)
            .await
    }

    async fn update_child_category(
        &self,
        parent_id: i64,
        child_id: i64,
        request: &CategoryUpdate,
    ) -> ClientResult<Category> {
        self.http()
            .put(
                &format!("/categories/{}/children/{}", parent_id, child_id),
                request,
            )
            .await
    }

    async fn delete_child_category(&self, child_id: i64) -> ClientResult<()> {
        self.http()
            .delete(&format!("/categories/children/{}", child_id))
            .await
    }
}
