//! Categorical field options for vehicle listings.
//!
//! Gearbox, fuel type and ULEZ status are closed sets. Parsing is
//! case-insensitive and canonicalizes to the capitalized display form;
//! any value outside the set is rejected with the allowed values listed
//! in the error. The same `FromStr` impls back both JSON parsing and
//! the CLI flags, so there is a single validation path.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ListingError;

/// Gearbox option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Gearbox {
    #[default]
    Automatic,
    Manual,
}

impl Gearbox {
    /// Allowed values, in canonical form
    pub const CHOICES: [&'static str; 2] = ["Automatic", "Manual"];

    /// Canonical display form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Automatic => "Automatic",
            Self::Manual => "Manual",
        }
    }
}

impl fmt::Display for Gearbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gearbox {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "automatic" => Ok(Self::Automatic),
            "manual" => Ok(Self::Manual),
            _ => Err(ListingError::invalid_choice("Gearbox", s, &Self::CHOICES)),
        }
    }
}

/// Fuel type option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FuelType {
    Petrol,
    #[default]
    Diesel,
    Hybrid,
    Electric,
}

impl FuelType {
    /// Allowed values, in canonical form
    pub const CHOICES: [&'static str; 4] = ["Petrol", "Diesel", "Hybrid", "Electric"];

    /// Canonical display form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Petrol => "Petrol",
            Self::Diesel => "Diesel",
            Self::Hybrid => "Hybrid",
            Self::Electric => "Electric",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "petrol" => Ok(Self::Petrol),
            "diesel" => Ok(Self::Diesel),
            "hybrid" => Ok(Self::Hybrid),
            "electric" => Ok(Self::Electric),
            _ => Err(ListingError::invalid_choice("Fuel type", s, &Self::CHOICES)),
        }
    }
}

/// ULEZ compliance status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum UlezStatus {
    Yes,
    No,
    #[default]
    Unknown,
}

impl UlezStatus {
    /// Allowed values, in canonical form
    pub const CHOICES: [&'static str; 3] = ["Yes", "No", "Unknown"];

    /// Canonical display form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for UlezStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UlezStatus {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ListingError::invalid_choice("ULEZ", s, &Self::CHOICES)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_values_accepted() {
        assert_eq!("Automatic".parse::<Gearbox>().unwrap(), Gearbox::Automatic);
        assert_eq!("Manual".parse::<Gearbox>().unwrap(), Gearbox::Manual);
        assert_eq!("Petrol".parse::<FuelType>().unwrap(), FuelType::Petrol);
        assert_eq!("Electric".parse::<FuelType>().unwrap(), FuelType::Electric);
        assert_eq!("Yes".parse::<UlezStatus>().unwrap(), UlezStatus::Yes);
    }

    #[test]
    fn test_case_insensitive_canonicalization() {
        assert_eq!("manual".parse::<Gearbox>().unwrap().to_string(), "Manual");
        assert_eq!("DIESEL".parse::<FuelType>().unwrap().to_string(), "Diesel");
        assert_eq!("no".parse::<UlezStatus>().unwrap().to_string(), "No");
    }

    #[test]
    fn test_invalid_value_rejected() {
        let err = "Invalid".parse::<Gearbox>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Gearbox"));
        assert!(msg.contains("Automatic, Manual"));

        assert!("Petrol".parse::<Gearbox>().is_err());
        assert!("Semi".parse::<FuelType>().is_err());
        assert!("Maybe".parse::<UlezStatus>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Gearbox::default(), Gearbox::Automatic);
        assert_eq!(FuelType::default(), FuelType::Diesel);
        assert_eq!(UlezStatus::default(), UlezStatus::Unknown);
    }

    #[test]
    fn test_choices_match_display() {
        assert_eq!(Gearbox::CHOICES, ["Automatic", "Manual"]);
        assert_eq!(FuelType::CHOICES.len(), 4);
        assert_eq!(UlezStatus::CHOICES.len(), 3);
    }
}
