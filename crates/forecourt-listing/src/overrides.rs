//! Sparse overrides layered on top of a parsed listing.
//!
//! The merge is a pure copy-and-update: absent fields keep the base
//! value, `specs` replaces the whole sequence when present, and dealer
//! sub-fields fall back to the base dealer when absent or empty.
//! Categorical overrides carry the typed enums, so they have already
//! passed the same validation as file input.

use crate::choices::{FuelType, Gearbox, UlezStatus};
use crate::model::VehicleListing;

/// A partial field set overriding a base listing
#[derive(Debug, Clone, Default)]
pub struct ListingOverrides {
    pub title: Option<String>,
    pub price: Option<String>,
    pub registration: Option<String>,
    pub year: Option<String>,
    pub gearbox: Option<Gearbox>,
    pub engine_size: Option<String>,
    pub fuel_type: Option<FuelType>,
    pub mileage: Option<String>,
    pub ulez: Option<UlezStatus>,
    pub mot_expiry: Option<String>,
    pub owners: Option<String>,

    /// Replaces the base sequence entirely when present, even if empty
    pub specs: Option<Vec<String>>,

    pub dealer_name: Option<String>,
    pub dealer_phone: Option<String>,
    pub dealer_email: Option<String>,
    pub dealer_website: Option<String>,
}

impl VehicleListing {
    /// Overlay overrides onto this record, returning the merged copy.
    pub fn apply_overrides(mut self, overrides: &ListingOverrides) -> Self {
        replace(&mut self.title, &overrides.title);
        replace(&mut self.price, &overrides.price);
        replace(&mut self.registration, &overrides.registration);
        replace(&mut self.year, &overrides.year);
        replace(&mut self.engine_size, &overrides.engine_size);
        replace(&mut self.mileage, &overrides.mileage);
        replace(&mut self.mot_expiry, &overrides.mot_expiry);
        replace(&mut self.owners, &overrides.owners);

        if let Some(gearbox) = overrides.gearbox {
            self.gearbox = gearbox;
        }
        if let Some(fuel_type) = overrides.fuel_type {
            self.fuel_type = fuel_type;
        }
        if let Some(ulez) = overrides.ulez {
            self.ulez = ulez;
        }
        if let Some(specs) = &overrides.specs {
            self.specs = specs.clone();
        }

        fall_back(&mut self.dealer.name, &overrides.dealer_name);
        fall_back(&mut self.dealer.phone, &overrides.dealer_phone);
        fall_back(&mut self.dealer.email, &overrides.dealer_email);
        fall_back(&mut self.dealer.website, &overrides.dealer_website);

        self
    }
}

fn replace(slot: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        *slot = value.clone();
    }
}

/// Dealer fields keep the base value for absent or empty overrides.
fn fall_back(slot: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        if !value.is_empty() {
            *slot = value.clone();
        }
    }
}
