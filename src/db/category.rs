use entity::category::{ActiveModel as CategoryActive, Entity as Category, Model as CategoryModel};
use entity::course::{Entity as Course, Model as CourseModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::warn;

use crate::db::{database_service::DatabaseService, for_update};
use crate::types::error::AppError;

/// Walks up from `start` and fails if `id` is met on the way, i.e. if making `start`
/// the parent of `id` would close a loop. Every row on the path stays locked until
/// the caller's transaction ends, so two opposite moves cannot both pass.
async fn ensure_not_ancestor<C: ConnectionTrait>(db: &C, id: i32, start: i32) -> Result<(), AppError> {
    let mut cursor = Some(start);
    let mut hops = 0u64;
    let limit = Category::find().count(db).await?;

    while let Some(current) = cursor {
        if current == id {
            warn!(category_id = id, parent_id = start, "rejected category cycle");
            return Err(AppError::Conflict("category cannot be its own ancestor".into()));
        }
        hops += 1;
        if hops > limit {
            // Existing rows already loop; refuse to add anything on top of that.
            return Err(AppError::Conflict("category tree is corrupt".into()));
        }
        cursor = for_update(db, Category::find_by_id(current))
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Parent category not found".into()))?
            .parent_id;
    }
    Ok(())
}

impl DatabaseService {
    pub async fn create_category(
        &self,
        name: String,
        description: Option<String>,
        parent_id: Option<i32>,
    ) -> Result<CategoryModel, AppError> {
        let txn = self.database_connection.begin().await?;
        if let Some(parent) = parent_id {
            if Category::find_by_id(parent).one(&txn).await?.is_none() {
                txn.rollback().await?;
                return Err(AppError::NotFound);
            }
        }
        let category = CategoryActive {
            name: Set(name),
            description: Set(description),
            parent_id: Set(parent_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;
        Ok(category)
    }

    pub async fn get_category(&self, id: i32) -> Result<CategoryModel, AppError> {
        Ok(Category::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Category not found".into()))?)
    }

    /// Moves a category under `parent_id` (or to the top level with `None`).
    pub async fn set_category_parent(&self, id: i32, parent_id: Option<i32>) -> Result<CategoryModel, AppError> {
        let txn = self.database_connection.begin().await?;

        // Lock the moved row and its new parent in id order, so two opposite moves
        // queue on the same row instead of each holding one.
        let mut pair = vec![id];
        pair.extend(parent_id);
        let locked = for_update(
            &txn,
            Category::find()
                .filter(entity::category::Column::Id.is_in(pair))
                .order_by_asc(entity::category::Column::Id),
        )
        .all(&txn)
        .await?;
        let Some(category) = locked.into_iter().find(|c| c.id == id) else {
            txn.rollback().await?;
            return Err(AppError::NotFound);
        };
        if let Some(parent) = parent_id {
            if let Err(e) = ensure_not_ancestor(&txn, id, parent).await {
                txn.rollback().await?;
                return Err(e);
            }
        }
        let mut am: CategoryActive = category.into();
        am.parent_id = Set(parent_id);
        let category = am.update(&txn).await?;
        txn.commit().await?;
        Ok(category)
    }

    pub async fn get_category_parent(&self, id: i32) -> Result<Option<CategoryModel>, AppError> {
        let category = self.get_category(id).await?;
        match category.parent_id {
            Some(parent) => Ok(Category::find_by_id(parent).one(&self.database_connection).await?),
            None => Ok(None),
        }
    }

    pub async fn list_child_categories(&self, id: i32) -> Result<Vec<CategoryModel>, AppError> {
        Ok(Category::find()
            .filter(entity::category::Column::ParentId.eq(id))
            .order_by_asc(entity::category::Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    /// Parent first, root last.
    pub async fn list_category_ancestors(&self, id: i32) -> Result<Vec<CategoryModel>, AppError> {
        let mut ancestors: Vec<CategoryModel> = Vec::new();
        let mut cursor = self.get_category(id).await?.parent_id;
        while let Some(parent) = cursor {
            if parent == id || ancestors.iter().any(|c| c.id == parent) {
                return Err(AppError::Conflict("category tree is corrupt".into()));
            }
            let category = self.get_category(parent).await?;
            cursor = category.parent_id;
            ancestors.push(category);
        }
        Ok(ancestors)
    }

    pub async fn list_category_courses(&self, id: i32) -> Result<Vec<CourseModel>, AppError> {
        let category = self.get_category(id).await?;
        Ok(category
            .find_related(Course)
            .all(&self.database_connection)
            .await?)
    }

    /// Refuses to delete a category that still has children or courses.
    pub async fn delete_category(&self, id: i32) -> Result<(), AppError> {
        let txn = self.database_connection.begin().await?;
        let Some(category) = Category::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Err(AppError::NotFound);
        };

        let children = Category::find()
            .filter(entity::category::Column::ParentId.eq(id))
            .count(&txn)
            .await?;
        let courses = category.find_related(Course).count(&txn).await?;
        if children > 0 || courses > 0 {
            txn.rollback().await?;
            warn!(category_id = id, children, courses, "refused to delete non-empty category");
            return Err(AppError::Conflict("category still has children or courses".into()));
        }

        category.delete(&txn).await?;
        txn.commit().await?;
        Ok(())
    }
}
