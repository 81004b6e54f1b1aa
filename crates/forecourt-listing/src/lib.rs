//! # forecourt-listing
//!
//! Data model and validation for vehicle listings.
//!
//! A [`VehicleListing`] is built in three layers: documented defaults,
//! an optional JSON overlay, and an optional sparse override set (the
//! CLI flags). Categorical fields (gearbox, fuel type, ULEZ status) are
//! closed enums, so every entry point goes through the same validation
//! and an invalid value can never reach the renderer.
//!
//! ## Example
//!
//! ```rust
//! use forecourt_listing::{ListingOverrides, VehicleListing};
//!
//! let listing = VehicleListing::from_json_str(r#"{"title": "2019 Civic"}"#)?;
//! let listing = listing.apply_overrides(&ListingOverrides {
//!     price: Some("£9,500".to_string()),
//!     ..Default::default()
//! });
//! assert_eq!(listing.title, "2019 Civic");
//! # Ok::<(), forecourt_listing::ListingError>(())
//! ```

pub mod choices;
pub mod error;
pub mod model;
pub mod overrides;

// Re-exports
pub use choices::{FuelType, Gearbox, UlezStatus};
pub use error::{ListingError, Result};
pub use model::{DealerDetails, VehicleListing};
pub use overrides::ListingOverrides;
