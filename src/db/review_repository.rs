// src/db/review_repository.rs
// DOCUMENTATION: Review database operations
// PURPOSE: Handle CRUD operations for campground reviews

use crate::errors::CampError;
use crate::models::{CreateReviewRequest, Review};
use sqlx::PgPool;
use uuid::Uuid;

pub struct ReviewRepository;

impl ReviewRepository {
    /// Create a new review on a campground
    pub async fn create(
        pool: &PgPool,
        campground_id: Uuid,
        author_id: Uuid,
        req: &CreateReviewRequest,
    ) -> Result<Review, CampError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            WITH inserted AS (
                INSERT INTO reviews (campground_id, author_id, body, rating)
                VALUES ($1, $2, $3, $4)
                RETURNING id, campground_id, author_id, body, rating, created_at
            )
            SELECT i.id, i.campground_id, i.author_id, u.username as author_username,
                   i.body, i.rating, i.created_at
            FROM inserted i
            JOIN users u ON u.id = i.author_id
            "#,
        )
        .bind(campground_id)
        .bind(author_id)
        .bind(&req.body)
        .bind(req.rating)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create review: {}", e);
            CampError::DatabaseError(format!("Create review failed: {}", e))
        })?;

        log::info!(
            "Created review {} on campground {}",
            review.id,
            campground_id
        );
        Ok(review)
    }

    /// Get all reviews for a campground, newest first
    pub async fn get_by_campground(
        pool: &PgPool,
        campground_id: Uuid,
    ) -> Result<Vec<Review>, CampError> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT r.id, r.campground_id, r.author_id, u.username as author_username,
                   r.body, r.rating, r.created_at
            FROM reviews r
            JOIN users u ON u.id = r.author_id
            WHERE r.campground_id = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(campground_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!(
                "Failed to fetch reviews for campground {}: {}",
                campground_id,
                e
            );
            CampError::DatabaseError(e.to_string())
        })?;

        Ok(reviews)
    }

    /// Get a single review scoped to its campground
    /// The campground scoping mirrors the nested route shape, so a review id
    /// pasted under the wrong campground comes back as not found.
    pub async fn get_by_id(
        pool: &PgPool,
        campground_id: Uuid,
        review_id: Uuid,
    ) -> Result<Review, CampError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            SELECT r.id, r.campground_id, r.author_id, u.username as author_username,
                   r.body, r.rating, r.created_at
            FROM reviews r
            JOIN users u ON u.id = r.author_id
            WHERE r.id = $1 AND r.campground_id = $2
            "#,
        )
        .bind(review_id)
        .bind(campground_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch review {}: {}", review_id, e);
            CampError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| CampError::ReviewNotFound(review_id.to_string()))?;

        Ok(review)
    }

    /// Delete a review
    pub async fn delete(pool: &PgPool, review_id: Uuid) -> Result<(), CampError> {
        let rows = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(review_id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for review {}: {}", review_id, e);
                CampError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            return Err(CampError::ReviewNotFound(review_id.to_string()));
        }

        log::info!("Deleted review {}", review_id);
        Ok(())
    }
}
