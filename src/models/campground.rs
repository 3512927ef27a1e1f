// src/models/campground.rs
// DOCUMENTATION: Core data structures for campgrounds
// PURPOSE: Defines all serialization/deserialization models for API and database

use crate::models::{ReviewResponse, UserResponse};
use chrono::{DateTime, Utc};
use geojson::Geometry;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Represents a complete campground record from the database
/// DOCUMENTATION: Coordinates are extracted from the PostGIS point via
/// ST_X(geom)/ST_Y(geom) in queries; the author username is joined in.
#[derive(Debug, Clone)]
pub struct Campground {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Listing title - required field
    pub title: String,

    /// Detailed description
    pub description: String,

    /// Free-text place name, e.g. "Bakersfield, California"
    pub location: String,

    /// Nightly price, never negative
    pub price: f64,

    /// Image URLs attached to the listing
    pub images: Vec<String>,

    /// Geographic coordinates - longitude (from ST_X(geom))
    pub longitude: f64,

    /// Geographic coordinates - latitude (from ST_Y(geom))
    pub latitude: f64,

    /// Owning user
    pub author_id: Uuid,

    /// Owning user's username (joined)
    pub author_username: String,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a new campground
/// DOCUMENTATION: Data transfer object for POST /campgrounds
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCampgroundRequest {
    /// Listing title (required)
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// Description (required)
    #[validate(length(min = 1))]
    pub description: String,

    /// Place name (required)
    #[validate(length(min = 1, max = 255))]
    pub location: String,

    /// Nightly price, must be >= 0
    #[validate(range(min = 0.0))]
    pub price: f64,

    /// Geographic coordinates [longitude, latitude]
    pub coordinates: [f64; 2],

    /// Image URLs
    #[serde(default)]
    pub images: Vec<String>,
}

/// Request DTO for updating an existing campground
/// DOCUMENTATION: All fields are optional - only provided fields are updated
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCampgroundRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub location: Option<String>,

    #[validate(range(min = 0.0))]
    pub price: Option<f64>,

    pub coordinates: Option<[f64; 2]>,

    pub images: Option<Vec<String>>,
}

/// Response DTO for API responses
/// DOCUMENTATION: The point geometry is exposed as a GeoJSON object so map
/// clients can consume it directly.
#[derive(Debug, Serialize)]
pub struct CampgroundResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: f64,
    pub images: Vec<String>,
    pub geometry: Geometry,
    pub author: UserResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Detailed response DTO for GET /campgrounds/{id}
#[derive(Debug, Serialize)]
pub struct CampgroundDetailResponse {
    #[serde(flatten)]
    pub campground: CampgroundResponse,
    pub reviews: Vec<ReviewResponse>,
}

/// Listing query parameters
/// DOCUMENTATION: DTO for parsing the query string of GET /campgrounds
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Page number (1-based)
    pub page: Option<i64>,

    /// Results per page (max 100)
    pub limit: Option<i64>,
}

/// Paginated listing response
#[derive(Debug, Serialize)]
pub struct CampgroundListResponse {
    /// Array of campground results
    pub data: Vec<CampgroundResponse>,

    /// Total number of campgrounds (regardless of pagination)
    pub total_count: i64,

    /// Current page number
    pub page: i64,

    /// Results per page
    pub limit: i64,

    /// Whether more results exist on next page
    pub has_more: bool,
}

impl Campground {
    /// Convert Campground to CampgroundResponse for the API
    pub fn to_response(&self) -> CampgroundResponse {
        CampgroundResponse {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            price: self.price,
            images: self.images.clone(),
            geometry: Geometry::new(geojson::Value::Point(vec![self.longitude, self.latitude])),
            author: UserResponse {
                id: self.author_id,
                username: self.author_username.clone(),
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateCampgroundRequest {
        CreateCampgroundRequest {
            title: "Misty Pines".into(),
            description: "Tall trees, cold river.".into(),
            location: "Bend, Oregon".into(),
            price: 24.5,
            coordinates: [-121.3, 44.05],
            images: vec!["https://example.com/pines.jpg".into()],
        }
    }

    #[test]
    fn create_request_accepts_valid_payload() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn create_request_rejects_negative_price() {
        let mut req = valid_request();
        req.price = -1.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn create_request_rejects_empty_title() {
        let mut req = valid_request();
        req.title = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn update_request_rejects_negative_price() {
        let req = UpdateCampgroundRequest {
            title: None,
            description: None,
            location: None,
            price: Some(-0.01),
            coordinates: None,
            images: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn response_serializes_geojson_point() {
        let camp = Campground {
            id: Uuid::new_v4(),
            title: "Misty Pines".into(),
            description: "Tall trees.".into(),
            location: "Bend, Oregon".into(),
            price: 24.5,
            images: vec![],
            longitude: -121.3,
            latitude: 44.05,
            author_id: Uuid::new_v4(),
            author_username: "camper42".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(camp.to_response()).unwrap();
        assert_eq!(json["geometry"]["type"], "Point");
        assert_eq!(json["geometry"]["coordinates"][0], -121.3);
        assert_eq!(json["geometry"]["coordinates"][1], 44.05);
        assert_eq!(json["author"]["username"], "camper42");
    }
}
