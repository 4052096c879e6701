use farmstead_domain::id::CategoryId;

use crate::domain::repository::CategoryRepository;
use crate::error::BackofficeError;

// ── DeleteCategoryWithItems ──────────────────────────────────────────────────

pub struct DeleteCategoryWithItemsUseCase<C: CategoryRepository> {
    pub repo: C,
}

impl<C: CategoryRepository> DeleteCategoryWithItemsUseCase<C> {
    /// Returns the number of items deleted alongside the category.
    pub async fn execute(&self, category_id: &str) -> Result<usize, BackofficeError> {
        let category_id: CategoryId = category_id
            .parse()
            .map_err(|_| BackofficeError::MissingCategoryId)?;
        // Items added after this read are not part of the batch.
        let item_ids = self.repo.find_item_ids(&category_id).await?;
        self.repo.delete_batch(&category_id, &item_ids).await?;
        tracing::info!(
            category_id = %category_id,
            deleted_items = item_ids.len(),
            "category deleted with items"
        );
        Ok(item_ids.len())
    }
}
