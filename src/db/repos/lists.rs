//! List repository
//!
//! Five statements: find, all (with counts via LEFT JOIN), create,
//! rename, delete (todos removed by the FK cascade).

use sqlx::PgPool;

use super::{map_unique_violation, DbError};
use crate::models::{ListName, ListSummary, Todo, TodoList};

/// List repository
pub struct ListRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ListRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find a single list with its todos, ordered by todo id.
    ///
    /// Returns `None` when no list has that id.
    pub async fn find(&self, list_id: i32) -> Result<Option<TodoList>, DbError> {
        let row: Option<(i32, String)> = sqlx::query_as("SELECT id, name FROM lists WHERE id = $1")
            .bind(list_id)
            .fetch_optional(self.pool)
            .await?;

        let Some((id, name)) = row else {
            return Ok(None);
        };

        let todos: Vec<Todo> = sqlx::query_as(
            "SELECT id, name, completed FROM todos WHERE list_id = $1 ORDER BY id",
        )
        .bind(list_id)
        .fetch_all(self.pool)
        .await?;

        Ok(Some(TodoList { id, name, todos }))
    }

    /// All lists ordered by name, each with its todo counts.
    ///
    /// Single query with a LEFT JOIN so empty lists still appear.
    pub async fn all(&self) -> Result<Vec<ListSummary>, DbError> {
        let lists = sqlx::query_as(
            r#"
            SELECT
                l.id,
                l.name,
                COUNT(t.id) AS todos_count,
                COUNT(t.id) FILTER (WHERE NOT t.completed) AS todos_remaining_count
            FROM lists l
            LEFT JOIN todos t ON t.list_id = l.id
            GROUP BY l.id, l.name
            ORDER BY l.name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(lists)
    }

    /// Create a list. A name collision surfaces as `DuplicateListName`.
    pub async fn create(&self, name: &ListName) -> Result<ListSummary, DbError> {
        let (id, name): (i32, String) =
            sqlx::query_as("INSERT INTO lists (name) VALUES ($1) RETURNING id, name")
                .bind(name.as_str())
                .fetch_one(self.pool)
                .await
                .map_err(|e| map_unique_violation(e, name.as_str()))?;

        Ok(ListSummary {
            id,
            name,
            todos_count: 0,
            todos_remaining_count: 0,
        })
    }

    /// Rename a list. Returns false when the list does not exist.
    pub async fn update_name(&self, list_id: i32, name: &ListName) -> Result<bool, DbError> {
        let result = sqlx::query("UPDATE lists SET name = $2 WHERE id = $1")
            .bind(list_id)
            .bind(name.as_str())
            .execute(self.pool)
            .await
            .map_err(|e| map_unique_violation(e, name.as_str()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a list and, via the cascade, its todos.
    ///
    /// Returns the deleted list's name, or `None` when it did not exist.
    pub async fn delete(&self, list_id: i32) -> Result<Option<String>, DbError> {
        let row: Option<(String,)> =
            sqlx::query_as("DELETE FROM lists WHERE id = $1 RETURNING name")
                .bind(list_id)
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(|(name,)| name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};
    use sqlx::PgPool;

    // Integration tests - run with DATABASE_URL set:
    // cargo test -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    fn unique_name(prefix: &str) -> ListName {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        ListName::new(&format!("{prefix}-{nanos}")).unwrap()
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_name_is_rejected() {
        let pool = test_pool().await;
        let repo = ListRepo::new(&pool);

        let name = unique_name("groceries");
        let created = repo.create(&name).await.expect("create failed");

        let err = repo.create(&name).await.unwrap_err();
        assert!(matches!(err, DbError::DuplicateListName { .. }));

        repo.delete(created.id).await.expect("cleanup failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn deleting_a_list_removes_its_todos() {
        let pool = test_pool().await;
        let lists = ListRepo::new(&pool);
        let todos = crate::db::TodoRepo::new(&pool);

        let list = lists
            .create(&unique_name("chores"))
            .await
            .expect("create failed");
        let todo_name = crate::models::TodoName::new("sweep").unwrap();
        let todo = todos
            .create(list.id, &todo_name)
            .await
            .expect("todo create failed")
            .expect("list missing");

        let deleted = lists.delete(list.id).await.expect("delete failed");
        assert!(deleted.is_some());

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todos WHERE id = $1")
            .bind(todo.id)
            .fetch_one(&pool)
            .await
            .expect("count failed");
        assert_eq!(count.0, 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn rename_to_own_name_succeeds() {
        let pool = test_pool().await;
        let repo = ListRepo::new(&pool);

        let name = unique_name("keep");
        let created = repo.create(&name).await.expect("create failed");

        // A no-op rename keeps the uniqueness invariant intact
        let updated = repo.update_name(created.id, &name).await.expect("rename failed");
        assert!(updated);

        repo.delete(created.id).await.expect("cleanup failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn find_missing_list_is_none() {
        let pool = test_pool().await;
        let repo = ListRepo::new(&pool);

        let found = repo.find(-1).await.expect("find failed");
        assert!(found.is_none());
    }
}
