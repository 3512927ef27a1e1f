// src/models/review.rs

use crate::models::UserResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Campground review
/// All queries join the author username so responses never need a second fetch.
#[derive(Debug, Clone, FromRow)]
pub struct Review {
    pub id: Uuid,
    pub campground_id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub body: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

/// Request to create a new review
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(length(min = 1, max = 2000))]
    pub body: String,

    /// Star rating, 1 through 5
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
}

/// Review response DTO exposed via API
#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub body: String,
    pub rating: i32,
    pub author: UserResponse,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Convert database Review into API response
    pub fn to_response(&self) -> ReviewResponse {
        ReviewResponse {
            id: self.id,
            body: self.body.clone(),
            rating: self.rating,
            author: UserResponse {
                id: self.author_id,
                username: self.author_username.clone(),
            },
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_request_accepts_ratings_in_range() {
        for rating in 1..=5 {
            let req = CreateReviewRequest {
                body: "Great spot by the river.".into(),
                rating,
            };
            assert!(req.validate().is_ok(), "rating {} should be valid", rating);
        }
    }

    #[test]
    fn review_request_rejects_out_of_range_ratings() {
        for rating in [0, 6, -3, 100] {
            let req = CreateReviewRequest {
                body: "Great spot by the river.".into(),
                rating,
            };
            assert!(req.validate().is_err(), "rating {} should fail", rating);
        }
    }

    #[test]
    fn review_request_rejects_empty_body() {
        let req = CreateReviewRequest {
            body: String::new(),
            rating: 4,
        };
        assert!(req.validate().is_err());
    }
}
