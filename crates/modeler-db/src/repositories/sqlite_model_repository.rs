//! `SQLite` implementation of the `ModelRepository` trait.

use async_trait::async_trait;
use sqlx::sqlite::SqliteArguments;
use sqlx::{Sqlite, SqlitePool};
use tracing::debug;

use modeler_core::{
    Direction, FilterText, Model, ModelRelation, ModelRepository, ModelSummary, ModelType,
    NewModel, NewModelRelation, RepositoryError, Sort, SortField,
};

use super::row_mappers::{
    MODEL_SELECT_COLUMNS, MODEL_SELECT_COLUMNS_M, row_to_model, row_to_relation, row_to_summary,
};

type ModelQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// `model_type` predicate matching process models, NULL included.
fn process_type_clause() -> String {
    let codes = ModelType::PROCESS_CODES.map(|c| c.to_string()).join(", ");
    format!("(model_type IS NULL OR model_type IN ({codes}))")
}

/// Keep the models whose name or description contains the filter.
///
/// Matching runs here rather than in SQL because `SQLite`'s `lower()` only
/// folds ASCII. Row order is preserved.
fn retain_matching(mut models: Vec<Model>, filter: Option<&FilterText>) -> Vec<Model> {
    if let Some(filter) = filter {
        models.retain(|m| filter.matches(&m.name, m.description.as_deref()));
    }
    models
}

/// `ORDER BY` clause for a `Sort`. Name ordering ignores case.
fn order_by(sort: Sort) -> String {
    let column = match sort.field {
        SortField::Id => "id",
        SortField::Name => "name COLLATE NOCASE",
        SortField::Description => "description COLLATE NOCASE",
        SortField::CreatedBy => "created_by",
        SortField::Created => "created",
        SortField::LastUpdated => "last_updated",
        SortField::ModelType => "model_type",
    };
    let direction = match sort.direction {
        Direction::Asc => "ASC",
        Direction::Desc => "DESC",
    };
    format!(" ORDER BY {column} {direction}, id ASC")
}

fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_foreign_key_violation() {
            return RepositoryError::Constraint(db.message().to_string());
        }
        if db.is_unique_violation() {
            return RepositoryError::AlreadyExists(db.message().to_string());
        }
    }
    RepositoryError::Storage(e.to_string())
}

/// `SQLite` implementation of the `ModelRepository` trait.
///
/// This struct holds a connection pool and implements every query shape
/// of the model store using `SQLite`.
pub struct SqliteModelRepository {
    pool: SqlitePool,
}

impl SqliteModelRepository {
    /// Create a new `SQLite` model repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool (for testing only).
    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn fetch_models(&self, query: ModelQuery<'_>) -> Result<Vec<Model>, RepositoryError> {
        let rows = query.fetch_all(&self.pool).await.map_err(map_sqlx_error)?;
        rows.iter().map(row_to_model).collect()
    }
}

#[async_trait]
impl ModelRepository for SqliteModelRepository {
    async fn find_processes_created_by(
        &self,
        user: &str,
        filter: Option<&FilterText>,
        sort: Sort,
    ) -> Result<Vec<Model>, RepositoryError> {
        debug!(user, filter = filter.map(FilterText::as_str), ?sort, "find_processes_created_by");
        let sql = format!(
            "SELECT {MODEL_SELECT_COLUMNS} FROM models WHERE created_by = ? AND {} AND reference_id IS NULL{}",
            process_type_clause(),
            order_by(sort),
        );
        let models = self.fetch_models(sqlx::query(&sql).bind(user)).await?;
        Ok(retain_matching(models, filter))
    }

    async fn find_models_created_by(
        &self,
        user: &str,
        model_type: ModelType,
        filter: Option<&FilterText>,
        sort: Sort,
    ) -> Result<Vec<Model>, RepositoryError> {
        debug!(user, %model_type, filter = filter.map(FilterText::as_str), ?sort, "find_models_created_by");
        let sql = format!(
            "SELECT {MODEL_SELECT_COLUMNS} FROM models WHERE created_by = ? AND model_type = ? AND reference_id IS NULL{}",
            order_by(sort),
        );
        let models = self
            .fetch_models(sqlx::query(&sql).bind(user).bind(model_type.code()))
            .await?;
        Ok(retain_matching(models, filter))
    }

    async fn find_models_by_reference_id(
        &self,
        reference_id: i64,
    ) -> Result<Vec<Model>, RepositoryError> {
        debug!(reference_id, "find_models_by_reference_id");
        let sql = format!("SELECT {MODEL_SELECT_COLUMNS} FROM models WHERE reference_id = ?");
        self.fetch_models(sqlx::query(&sql).bind(reference_id)).await
    }

    async fn find_models_by_model_type_and_reference_id(
        &self,
        model_type: ModelType,
        filter: Option<&FilterText>,
        reference_id: i64,
    ) -> Result<Vec<Model>, RepositoryError> {
        debug!(%model_type, reference_id, filter = filter.map(FilterText::as_str), "find_models_by_model_type_and_reference_id");
        let sql =
            format!("SELECT {MODEL_SELECT_COLUMNS} FROM models WHERE model_type = ? AND reference_id = ?");
        let models = self
            .fetch_models(sqlx::query(&sql).bind(model_type.code()).bind(reference_id))
            .await?;
        Ok(retain_matching(models, filter))
    }

    async fn find_models_by_model_type_and_reference_id_or_null_reference_id(
        &self,
        model_type: ModelType,
        reference_id: i64,
    ) -> Result<Vec<Model>, RepositoryError> {
        let sql = format!(
            "SELECT {MODEL_SELECT_COLUMNS} FROM models WHERE model_type = ? AND (reference_id = ? OR reference_id IS NULL)"
        );
        self.fetch_models(sqlx::query(&sql).bind(model_type.code()).bind(reference_id))
            .await
    }

    async fn count_by_model_type_and_user(
        &self,
        model_type: ModelType,
        user: &str,
    ) -> Result<u64, RepositoryError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(id) FROM models WHERE created_by = ? AND model_type = ?")
                .bind(user)
                .bind(model_type.code())
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        u64::try_from(count).map_err(|e| RepositoryError::Storage(e.to_string()))
    }

    async fn find_models_by_parent_model_id(
        &self,
        parent_model_id: i64,
    ) -> Result<Vec<Model>, RepositoryError> {
        let sql = format!(
            "SELECT {MODEL_SELECT_COLUMNS_M} FROM model_relations mr INNER JOIN models m ON m.id = mr.model_id WHERE mr.parent_model_id = ?"
        );
        self.fetch_models(sqlx::query(&sql).bind(parent_model_id)).await
    }

    async fn find_models_by_parent_model_id_and_type(
        &self,
        parent_model_id: i64,
        model_type: ModelType,
    ) -> Result<Vec<Model>, RepositoryError> {
        let sql = format!(
            "SELECT {MODEL_SELECT_COLUMNS_M} FROM model_relations mr INNER JOIN models m ON m.id = mr.model_id WHERE mr.parent_model_id = ? AND m.model_type = ?"
        );
        self.fetch_models(
            sqlx::query(&sql)
                .bind(parent_model_id)
                .bind(model_type.code()),
        )
        .await
    }

    async fn find_models_by_child_model_id(
        &self,
        model_id: i64,
    ) -> Result<Vec<ModelSummary>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT m.id AS id, m.name AS name, m.model_type AS model_type FROM model_relations mr INNER JOIN models m ON m.id = mr.parent_model_id WHERE mr.model_id = ?",
        )
        .bind(model_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_summary).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Model, RepositoryError> {
        let query = format!("SELECT {MODEL_SELECT_COLUMNS} FROM models WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Model with ID {id}")))?;

        row_to_model(&row)
    }

    async fn insert(&self, model: &NewModel) -> Result<Model, RepositoryError> {
        let result = sqlx::query(
            r"INSERT INTO models (
                name, model_key, description, model_comment, created, created_by,
                last_updated, last_updated_by, version, model_type, reference_id
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, 1, ?, ?)",
        )
        .bind(&model.name)
        .bind(&model.model_key)
        .bind(&model.description)
        .bind(&model.comment)
        .bind(model.created)
        .bind(&model.created_by)
        .bind(model.created)
        .bind(&model.created_by)
        .bind(model.model_type.map(ModelType::code))
        .bind(model.reference_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn insert_relation(
        &self,
        relation: &NewModelRelation,
    ) -> Result<ModelRelation, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO model_relations (parent_model_id, model_id, relation_type) VALUES (?, ?, ?)",
        )
        .bind(relation.parent_model_id)
        .bind(relation.model_id)
        .bind(&relation.relation_type)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let row = sqlx::query(
            "SELECT id, parent_model_id, model_id, relation_type FROM model_relations WHERE id = ?",
        )
        .bind(result.last_insert_rowid())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row_to_relation(&row)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        sqlx::query("DELETE FROM model_relations WHERE parent_model_id = ? OR model_id = ?")
            .bind(id)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        let result = sqlx::query("DELETE FROM models WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Model with ID {id}")));
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        debug!(id, "Deleted model");
        Ok(())
    }
}
