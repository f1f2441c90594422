//! Todo repository
//!
//! Every statement scopes by list_id as well as todo id, so a todo can
//! only be touched through its own list.

use sqlx::PgPool;

use super::DbError;
use crate::models::{Todo, TodoName};

/// Todo repository
pub struct TodoRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TodoRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Add a todo to a list, initially not completed.
    ///
    /// Returns `None` when the list does not exist: the FK violation
    /// covers a list deleted after the handler last looked at it.
    pub async fn create(&self, list_id: i32, name: &TodoName) -> Result<Option<Todo>, DbError> {
        let result = sqlx::query_as(
            r#"
            INSERT INTO todos (list_id, name)
            VALUES ($1, $2)
            RETURNING id, name, completed
            "#,
        )
        .bind(list_id)
        .bind(name.as_str())
        .fetch_one(self.pool)
        .await;

        match result {
            Ok(todo) => Ok(Some(todo)),
            Err(sqlx::Error::Database(db)) if db.is_foreign_key_violation() => Ok(None),
            Err(e) => Err(DbError::Sqlx(e)),
        }
    }

    /// Delete a todo from a list.
    ///
    /// Returns the deleted row, or `None` when the todo is not in that list.
    pub async fn delete(&self, list_id: i32, todo_id: i32) -> Result<Option<Todo>, DbError> {
        let todo = sqlx::query_as(
            r#"
            DELETE FROM todos
            WHERE list_id = $1 AND id = $2
            RETURNING id, name, completed
            "#,
        )
        .bind(list_id)
        .bind(todo_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(todo)
    }

    /// Set a todo's completed flag, returning the updated row.
    ///
    /// Returns `None` when the todo is not in that list.
    pub async fn set_completed(
        &self,
        list_id: i32,
        todo_id: i32,
        completed: bool,
    ) -> Result<Option<Todo>, DbError> {
        let todo = sqlx::query_as(
            r#"
            UPDATE todos SET completed = $3
            WHERE list_id = $1 AND id = $2
            RETURNING id, name, completed
            "#,
        )
        .bind(list_id)
        .bind(todo_id)
        .bind(completed)
        .fetch_optional(self.pool)
        .await?;

        Ok(todo)
    }

    /// Mark every todo in a list completed. Returns the number updated.
    pub async fn complete_all(&self, list_id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE todos SET completed = TRUE WHERE list_id = $1")
            .bind(list_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations, ListRepo};
    use crate::models::ListName;
    use sqlx::PgPool;

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    async fn scratch_list(pool: &PgPool) -> i32 {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let name = ListName::new(&format!("scratch-{nanos}")).unwrap();
        ListRepo::new(pool).create(&name).await.expect("create failed").id
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn complete_all_leaves_nothing_remaining() {
        let pool = test_pool().await;
        let list_id = scratch_list(&pool).await;
        let repo = TodoRepo::new(&pool);

        for name in ["wash", "dry", "fold"] {
            let name = TodoName::new(name).unwrap();
            repo.create(list_id, &name).await.expect("create failed");
        }

        let updated = repo.complete_all(list_id).await.expect("update failed");
        assert_eq!(updated, 3);

        let list = ListRepo::new(&pool)
            .find(list_id)
            .await
            .expect("find failed")
            .expect("list missing");
        assert_eq!(list.todos_remaining_count(), 0);
        assert!(list.is_complete());

        ListRepo::new(&pool).delete(list_id).await.expect("cleanup failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_for_missing_list_is_none() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        let name = TodoName::new("orphan").unwrap();
        let created = repo.create(-1, &name).await.expect("create failed");
        assert!(created.is_none());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn todo_is_scoped_to_its_list() {
        let pool = test_pool().await;
        let list_a = scratch_list(&pool).await;
        let list_b = scratch_list(&pool).await;
        let repo = TodoRepo::new(&pool);

        let name = TodoName::new("stretch").unwrap();
        let todo = repo
            .create(list_a, &name)
            .await
            .expect("create failed")
            .expect("list missing");

        // Wrong list id: no row touched
        assert!(repo
            .delete(list_b, todo.id)
            .await
            .expect("delete failed")
            .is_none());
        assert!(repo
            .set_completed(list_b, todo.id, true)
            .await
            .expect("update failed")
            .is_none());

        ListRepo::new(&pool).delete(list_a).await.expect("cleanup failed");
        ListRepo::new(&pool).delete(list_b).await.expect("cleanup failed");
    }
}
