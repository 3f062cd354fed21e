//! Category operations

use console_client::ClientError;
use shared::models::{CategoryCreate, CategoryUpdate};

use crate::error::{ConsoleError, ConsoleResult};
use crate::store::CategoryEvent;

use super::Console;

impl Console {
    pub async fn fetch_categories(&self) -> ConsoleResult<()> {
        self.require_token()?;
        self.categories.write().await.apply(CategoryEvent::Loading);
        match self.api.list_categories().await {
            Ok(items) => {
                self.categories.write().await.apply(CategoryEvent::Fetched(items));
                Ok(())
            }
            Err(error) => self.fail_categories(error).await,
        }
    }

    pub async fn fetch_category(&self, category_id: i64) -> ConsoleResult<()> {
        self.require_token()?;
        self.categories.write().await.apply(CategoryEvent::Loading);
        match self.api.get_category(category_id).await {
            Ok(category) => {
                self.categories
                    .write()
                    .await
                    .apply(CategoryEvent::OneFetched(category));
                Ok(())
            }
            Err(error) => self.fail_categories(error).await,
        }
    }

    /// Keyword search. The results replace the primary collection.
    pub async fn search_categories(&self, keyword: &str) -> ConsoleResult<()> {
        self.require_token()?;
        self.categories.write().await.apply(CategoryEvent::Loading);
        match self.api.search_categories(keyword).await {
            Ok(items) => {
                self.categories
                    .write()
                    .await
                    .apply(CategoryEvent::SearchFetched(items));
                Ok(())
            }
            Err(error) => self.fail_categories(error).await,
        }
    }

    pub async fn fetch_parent_categories(&self) -> ConsoleResult<()> {
        self.require_token()?;
        self.categories.write().await.apply(CategoryEvent::Loading);
        match self.api.list_parent_categories().await {
            Ok(parents) => {
                self.categories
                    .write()
                    .await
                    .apply(CategoryEvent::ParentsFetched(parents));
                Ok(())
            }
            Err(error) => self.fail_categories(error).await,
        }
    }

    pub async fn fetch_child_categories(&self, parent_id: i64) -> ConsoleResult<()> {
        self.require_token()?;
        self.categories.write().await.apply(CategoryEvent::Loading);
        match self.api.list_child_categories(parent_id).await {
            Ok(children) => {
                self.categories
                    .write()
                    .await
                    .apply(CategoryEvent::ChildrenFetched(children));
                Ok(())
            }
            Err(error) => self.fail_categories(error).await,
        }
    }

    pub async fn create_parent_category(&self, request: &CategoryCreate) -> ConsoleResult<()> {
        self.require_token()?;
        self.categories.write().await.apply(CategoryEvent::Loading);
        match self.api.create_parent_category(request).await {
            Ok(category) => {
                tracing::info!(name = %category.category_name, "Category created");
                self.categories
                    .write()
                    .await
                    .apply(CategoryEvent::ParentCreated(category));
                Ok(())
            }
            Err(error) => self.fail_categories(error).await,
        }
    }

    pub async fn update_parent_category(
        &self,
        category_id: i64,
        request: &CategoryUpdate,
    ) -> ConsoleResult<()> {
        self.require_token()?;
        self.categories.write().await.apply(CategoryEvent::Loading);
        match self.api.update_parent_category(category_id, request).await {
            Ok(category) => {
                self.categories
                    .write()
                    .await
                    .apply(CategoryEvent::ParentUpdated(category));
                Ok(())
            }
            Err(error) => self.fail_categories(error).await,
        }
    }

    /// The server cascades the delete to child categories; the local
    /// cache does not, so a previously fetched child list stays as it
    /// was until the next refetch.
    pub async fn delete_parent_category(&self, category_id: i64) -> ConsoleResult<()> {
        self.require_token()?;
        self.categories.write().await.apply(CategoryEvent::Loading);
        match self.api.delete_parent_category(category_id).await {
            Ok(()) => {
                self.categories
                    .write()
                    .await
                    .apply(CategoryEvent::ParentRemoved(category_id));
                Ok(())
            }
            Err(error) => self.fail_categories(error).await,
        }
    }

    pub async fn create_child_category(
        &self,
        parent_id: i64,
        request: &CategoryCreate,
    ) -> ConsoleResult<()> {
        self.require_token()?;
        self.categories.write().await.apply(CategoryEvent::Loading);
        match self.api.create_child_category(parent_id, request).await {
            Ok(category) => {
                self.categories
                    .write()
                    .await
                    .apply(CategoryEvent::ChildCreated(category));
                Ok(())
            }
            Err(error) => self.fail_categories(error).await,
        }
    }

    pub async fn update_child_category(
        &self,
        parent_id: i64,
        child_id: i64,
        request: &CategoryUpdate,
    ) -> ConsoleResult<()> {
        self.require_token()?;
        self.categories.write().await.apply(CategoryEvent::Loading);
        match self.api.update_child_category(parent_id, child_id, request).await {
            Ok(category) => {
                self.categories
                    .write()
                    .await
                    .apply(CategoryEvent::ChildUpdated(category));
                Ok(())
            }
            Err(error) => self.fail_categories(error).await,
        }
    }

    pub async fn delete_child_category(&self, child_id: i64) -> ConsoleResult<()> {
        self.require_token()?;
        self.categories.write().await.apply(CategoryEvent::Loading);
        match self.api.delete_child_category(child_id).await {
            Ok(()) => {
                self.categories
                    .write()
                    .await
                    .apply(CategoryEvent::ChildRemoved(child_id));
                Ok(())
            }
            Err(error) => self.fail_categories(error).await,
        }
    }

    pub async fn clear_selected_category(&self) {
        self.categories.write().await.clear_selected();
    }

    pub async fn clear_category_error(&self) {
        self.categories.write().await.clear_error();
    }

    pub async fn reset_categories(&self) {
        self.categories.write().await.reset();
    }

    async fn fail_categories(&self, error: ClientError) -> ConsoleResult<()> {
        if error.is_unauthorized() {
            self.force_logout().await;
            self.categories
                .write()
                .await
                .apply(CategoryEvent::Failed(ConsoleError::SessionExpired.to_string()));
            return Err(ConsoleError::SessionExpired);
        }
        self.categories
            .write()
            .await
            .apply(CategoryEvent::Failed(Self::failure_message(&error)));
        Err(error.into())
    }
}
