//! Vehicle-related type definitions

use std::str::FromStr;

use cabbook_types::Error;
use serde::{Deserialize, Serialize};

/// Vehicle class offered for booking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleType {
    Hatchback,
    #[default]
    Sedan,
    Suv,
    Innova,
    InnovaCrysta,
    TempoTraveler,
}

impl VehicleType {
    /// All vehicle types in catalog order
    pub const ALL: [VehicleType; 6] = [
        VehicleType::Hatchback,
        VehicleType::Sedan,
        VehicleType::Suv,
        VehicleType::Innova,
        VehicleType::InnovaCrysta,
        VehicleType::TempoTraveler,
    ];

    /// Catalog key (e.g. "INNOVA_CRYSTA")
    pub fn key(&self) -> &'static str {
        match self {
            VehicleType::Hatchback => "HATCHBACK",
            VehicleType::Sedan => "SEDAN",
            VehicleType::Suv => "SUV",
            VehicleType::Innova => "INNOVA",
            VehicleType::InnovaCrysta => "INNOVA_CRYSTA",
            VehicleType::TempoTraveler => "TEMPO_TRAVELER",
        }
    }

    /// Lowercase-hyphenated identifier derived from the key
    pub fn id(&self) -> String {
        self.key().to_lowercase().replace('_', "-")
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for VehicleType {
    type Err = Error;

    /// Accepts the key ("INNOVA_CRYSTA"), the id ("innova-crysta") and the
    /// upper-cased id ("INNOVA-CRYSTA"), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        VehicleType::ALL
            .into_iter()
            .find(|v| v.key() == normalized)
            .ok_or_else(|| Error::UnknownVehicleType(s.to_string()))
    }
}

/// Static catalog record for one vehicle type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleCatalogEntry {
    /// Lowercase-hyphenated identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Human-readable capacity (e.g. "6-7 passengers")
    pub capacity: &'static str,
    /// Starting fare in rupees
    pub base_price: u32,
    pub description: &'static str,
    /// Example models
    pub examples: &'static str,
}

impl VehicleCatalogEntry {
    /// Label used when populating a vehicle selector
    pub fn option_label(&self) -> String {
        format!(
            "{} - {} - From \u{20b9}{}",
            self.name, self.capacity, self.base_price
        )
    }

    /// Vehicle line as it appears in the booking summary
    pub fn summary_label(&self) -> String {
        format!("{} ({})", self.name, self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_forms() {
        assert_eq!("INNOVA_CRYSTA".parse::<VehicleType>().unwrap(), VehicleType::InnovaCrysta);
        assert_eq!("innova-crysta".parse::<VehicleType>().unwrap(), VehicleType::InnovaCrysta);
        assert_eq!("INNOVA-CRYSTA".parse::<VehicleType>().unwrap(), VehicleType::InnovaCrysta);
        assert_eq!("suv".parse::<VehicleType>().unwrap(), VehicleType::Suv);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "BUS".parse::<VehicleType>().unwrap_err();
        assert!(matches!(err, Error::UnknownVehicleType(ref s) if s == "BUS"));
    }

    #[test]
    fn test_default_is_sedan() {
        assert_eq!(VehicleType::default(), VehicleType::Sedan);
    }

    #[test]
    fn test_id_from_key() {
        assert_eq!(VehicleType::TempoTraveler.id(), "tempo-traveler");
        assert_eq!(VehicleType::Suv.id(), "suv");
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&VehicleType::InnovaCrysta).unwrap();
        assert_eq!(json, "\"INNOVA_CRYSTA\"");
        let parsed: VehicleType = serde_json::from_str("\"TEMPO_TRAVELER\"").unwrap();
        assert_eq!(parsed, VehicleType::TempoTraveler);
    }
}
