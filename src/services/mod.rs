// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod campground_service;
pub mod review_service;

pub use campground_service::*;
pub use review_service::*;
