//! User accessors

use sqlx::PgPool;

use crate::error::ApiResult;
use crate::model::User;

/// All users
pub async fn list_users(pool: &PgPool) -> ApiResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>("SELECT username, name, avatar_url FROM users")
        .fetch_all(pool)
        .await?;

    Ok(users)
}
