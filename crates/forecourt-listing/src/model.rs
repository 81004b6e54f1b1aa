//! Vehicle listing and dealer record types.
//!
//! Records are constructed by overlaying an optional JSON object onto
//! the documented defaults. Missing keys keep their defaults; JSON
//! scalars (strings, numbers, booleans) coerce to display strings;
//! `null` counts as absent. The transform is pure and fails fast on the
//! first malformed or invalid field.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::choices::{FuelType, Gearbox, UlezStatus};
use crate::error::{ListingError, Result};

/// Dealership contact details shown in the title block and footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealerDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub website: String,
}

impl Default for DealerDetails {
    fn default() -> Self {
        Self {
            name: "Your Dealership".to_string(),
            phone: "0000 000 0000".to_string(),
            email: "sales@example.com".to_string(),
            website: "www.example.com".to_string(),
        }
    }
}

impl DealerDetails {
    /// Build dealer details from the optional `dealer` sub-object.
    ///
    /// Each sub-field defaults independently when missing.
    fn from_value(value: Option<&Value>) -> Result<Self> {
        let map = match value {
            None | Some(Value::Null) => return Ok(Self::default()),
            Some(Value::Object(map)) => map,
            Some(_) => return Err(ListingError::unexpected_shape("dealer", "an object")),
        };

        let defaults = Self::default();
        Ok(Self {
            name: string_field(map, "name")?.unwrap_or(defaults.name),
            phone: string_field(map, "phone")?.unwrap_or(defaults.phone),
            email: string_field(map, "email")?.unwrap_or(defaults.email),
            website: string_field(map, "website")?.unwrap_or(defaults.website),
        })
    }
}

/// One vehicle's display record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleListing {
    pub title: String,
    pub price: String,
    pub registration: String,
    pub year: String,
    pub gearbox: Gearbox,
    pub engine_size: String,
    pub fuel_type: FuelType,
    pub mileage: String,
    pub ulez: UlezStatus,
    pub mot_expiry: String,
    pub owners: String,
    pub specs: Vec<String>,
    pub dealer: DealerDetails,
}

impl Default for VehicleListing {
    fn default() -> Self {
        Self {
            title: "Vehicle Title".to_string(),
            price: "Price on enquiry".to_string(),
            registration: "Registration".to_string(),
            year: "Year".to_string(),
            gearbox: Gearbox::default(),
            engine_size: "2.0 L".to_string(),
            fuel_type: FuelType::default(),
            mileage: "0".to_string(),
            ulez: UlezStatus::default(),
            mot_expiry: "Unknown".to_string(),
            owners: "Unknown".to_string(),
            specs: Vec::new(),
            dealer: DealerDetails::default(),
        }
    }
}

impl VehicleListing {
    /// Parse a listing from raw JSON text.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(&value)
    }

    /// Build a listing from a parsed JSON value, overlaying defaults.
    ///
    /// The top level must be a single object describing one vehicle.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(ListingError::TopLevelNotObject);
        };

        let mut listing = Self::default();

        if let Some(title) = string_field(map, "title")? {
            listing.title = title;
        }
        if let Some(price) = string_field(map, "price")? {
            listing.price = price;
        }
        if let Some(registration) = string_field(map, "registration")? {
            listing.registration = registration;
        }
        if let Some(year) = string_field(map, "year")? {
            listing.year = year;
        }
        if let Some(raw) = string_field(map, "gearbox")? {
            listing.gearbox = raw.parse()?;
        }
        if let Some(engine_size) = string_field(map, "engine_size")? {
            listing.engine_size = engine_size;
        }
        if let Some(raw) = string_field(map, "fuel_type")? {
            listing.fuel_type = raw.parse()?;
        }
        if let Some(mileage) = string_field(map, "mileage")? {
            listing.mileage = mileage;
        }
        if let Some(raw) = string_field(map, "ulez")? {
            listing.ulez = raw.parse()?;
        }
        if let Some(mot_expiry) = string_field(map, "mot_expiry")? {
            listing.mot_expiry = mot_expiry;
        }
        if let Some(owners) = string_field(map, "owners")? {
            listing.owners = owners;
        }
        listing.specs = specs_field(map)?;
        listing.dealer = DealerDetails::from_value(map.get("dealer"))?;

        Ok(listing)
    }
}

/// Read an optional field, coercing JSON scalars to display strings.
fn string_field(map: &Map<String, Value>, field: &'static str) -> Result<Option<String>> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(ListingError::unexpected_shape(field, "a string or number")),
    }
}

/// Read the optional `specs` array, coercing each item to a string.
fn specs_field(map: &Map<String, Value>) -> Result<Vec<String>> {
    let items = match map.get("specs") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ListingError::unexpected_shape("specs", "an array of strings")),
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            _ => Err(ListingError::unexpected_shape("specs", "an array of strings")),
        })
        .collect()
}
