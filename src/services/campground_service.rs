// src/services/campground_service.rs
// DOCUMENTATION: Business logic for campgrounds
// PURPOSE: Intermediary between handlers and repositories

use crate::db::{CampgroundRepository, ReviewRepository};
use crate::errors::CampError;
use crate::models::{
    Campground, CampgroundDetailResponse, CampgroundListResponse, CampgroundResponse,
    CreateCampgroundRequest, ListQuery, UpdateCampgroundRequest,
};
use sqlx::PgPool;
use uuid::Uuid;

pub struct CampgroundService;

impl CampgroundService {
    /// Create a new campground owned by the given user
    pub async fn create(
        pool: &PgPool,
        author_id: Uuid,
        req: CreateCampgroundRequest,
    ) -> Result<CampgroundResponse, CampError> {
        let campground = CampgroundRepository::create(pool, author_id, &req).await?;
        Ok(campground.to_response())
    }

    /// Paginated listing for the index page
    pub async fn list(pool: &PgPool, query: ListQuery) -> Result<CampgroundListResponse, CampError> {
        let (campgrounds, total_count) = CampgroundRepository::list(pool, &query).await?;

        let limit = query.limit.unwrap_or(20).clamp(1, 100);
        let page = query.page.unwrap_or(1).max(1);
        let has_more = total_count > page.saturating_mul(limit);

        Ok(CampgroundListResponse {
            data: campgrounds.iter().map(|c| c.to_response()).collect(),
            total_count,
            page,
            limit,
            has_more,
        })
    }

    /// Fetch the raw campground entity (ownership checks need the author id)
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<Campground, CampError> {
        CampgroundRepository::get_by_id(pool, id).await
    }

    /// Detail view: campground plus its reviews
    pub async fn get_detail(pool: &PgPool, id: Uuid) -> Result<CampgroundDetailResponse, CampError> {
        let campground = CampgroundRepository::get_by_id(pool, id).await?;
        let reviews = ReviewRepository::get_by_campground(pool, campground.id).await?;

        Ok(CampgroundDetailResponse {
            campground: campground.to_response(),
            reviews: reviews.iter().map(|r| r.to_response()).collect(),
        })
    }

    /// Partial update of a campground
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: UpdateCampgroundRequest,
    ) -> Result<CampgroundResponse, CampError> {
        let campground = CampgroundRepository::update(pool, id, &req).await?;
        Ok(campground.to_response())
    }

    /// Delete a campground together with its reviews
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), CampError> {
        CampgroundRepository::delete(pool, id).await
    }
}
