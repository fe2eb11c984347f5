//! PostgreSQL Repository Implementation

use sqlx::PgPool;

use crate::domain::entities::{Comment, NewComment, NewPost, Post};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_objects::{
    CommentBody, CommentId, PostDescription, PostId, PostTitle, UserId,
};
use crate::error::{BlogError, BlogResult};

const POSTS_USER_FK: &str = "posts_user_id_fkey";
const COMMENTS_USER_FK: &str = "comments_user_id_fkey";
const COMMENTS_POST_FK: &str = "comments_post_id_fkey";

/// PostgreSQL-backed blog repository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgBlogRepository {
    async fn create_post(&self, post: NewPost) -> BlogResult<Post> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO posts (user_id, title, description)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(post.user_id.get())
        .bind(post.title.as_str())
        .bind(post.description.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error)?;

        Ok(Post::from_new(PostId::new(id), post))
    }

    async fn list_posts(&self) -> BlogResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, user_id, title, description
            FROM posts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgBlogRepository {
    async fn create_comment(&self, comment: NewComment) -> BlogResult<Comment> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO comments (user_id, post_id, comment)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(comment.user_id.get())
        .bind(comment.post_id.get())
        .bind(comment.comment.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error)?;

        Ok(Comment::from_new(CommentId::new(id), comment))
    }

    async fn list_comments(&self, post_id: PostId) -> BlogResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, user_id, post_id, comment
            FROM comments
            WHERE post_id = $1
            ORDER BY id
            "#,
        )
        .bind(post_id.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_comment).collect())
    }
}

/// Report a foreign-key violation as the row that was missing
fn insert_error(e: sqlx::Error) -> BlogError {
    let missing = match &e {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            missing_reference(db_err.constraint())
        }
        _ => None,
    };
    missing.unwrap_or(BlogError::Database(e))
}

fn missing_reference(constraint: Option<&str>) -> Option<BlogError> {
    match constraint? {
        COMMENTS_POST_FK => Some(BlogError::PostNotFound),
        POSTS_USER_FK | COMMENTS_USER_FK => Some(BlogError::AuthorNotFound),
        _ => None,
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    user_id: i64,
    title: String,
    description: String,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: PostId::new(self.id),
            user_id: UserId::new(self.user_id),
            title: PostTitle::from_db(self.title),
            description: PostDescription::from_db(self.description),
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i64,
    user_id: i64,
    post_id: i64,
    comment: String,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            id: CommentId::new(self.id),
            user_id: UserId::new(self.user_id),
            post_id: PostId::new(self.post_id),
            comment: CommentBody::from_db(self.comment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_post_reference() {
        assert!(matches!(
            missing_reference(Some(COMMENTS_POST_FK)),
            Some(BlogError::PostNotFound)
        ));
    }

    #[test]
    fn test_missing_author_reference() {
        for constraint in [POSTS_USER_FK, COMMENTS_USER_FK] {
            assert!(matches!(
                missing_reference(Some(constraint)),
                Some(BlogError::AuthorNotFound)
            ));
        }
    }

    #[test]
    fn test_unknown_constraint_stays_database_error() {
        assert!(missing_reference(Some("comments_other_fkey")).is_none());
        assert!(missing_reference(None).is_none());
        assert!(matches!(
            insert_error(sqlx::Error::RowNotFound),
            BlogError::Database(sqlx::Error::RowNotFound)
        ));
    }
}
