// src/services/review_service.rs
// DOCUMENTATION: Business logic for reviews
// PURPOSE: Intermediary between handlers and the review repository

use crate::db::{CampgroundRepository, ReviewRepository};
use crate::errors::CampError;
use crate::models::{CreateReviewRequest, Review, ReviewResponse};
use sqlx::PgPool;
use uuid::Uuid;

pub struct ReviewService;

impl ReviewService {
    /// Create a review on an existing campground
    /// The campground lookup keeps reviews from pointing at deleted listings.
    pub async fn create(
        pool: &PgPool,
        campground_id: Uuid,
        author_id: Uuid,
        req: CreateReviewRequest,
    ) -> Result<ReviewResponse, CampError> {
        let campground = CampgroundRepository::get_by_id(pool, campground_id).await?;
        let review = ReviewRepository::create(pool, campground.id, author_id, &req).await?;
        Ok(review.to_response())
    }

    /// Fetch a review scoped to its campground (authorship checks need the author id)
    pub async fn get(
        pool: &PgPool,
        campground_id: Uuid,
        review_id: Uuid,
    ) -> Result<Review, CampError> {
        ReviewRepository::get_by_id(pool, campground_id, review_id).await
    }

    /// Delete a review
    pub async fn delete(pool: &PgPool, review_id: Uuid) -> Result<(), CampError> {
        ReviewRepository::delete(pool, review_id).await
    }
}
