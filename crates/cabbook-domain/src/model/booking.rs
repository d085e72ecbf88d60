//! Booking request held by the form while the customer fills it in

use std::str::FromStr;

use cabbook_types::{Error, Result};
use serde::{Deserialize, Serialize};

use super::vehicle::VehicleType;

/// Passenger count used when the raw input is not a usable number
pub const DEFAULT_PASSENGERS: u32 = 1;

/// Largest party the passenger input accepts (Tempo Traveler capacity)
pub const MAX_PASSENGERS: u32 = 16;

/// Form fields of a booking request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    FullName,
    Phone,
    PickupLocation,
    DropLocation,
    PickupDate,
    PickupTime,
    Passengers,
    VehicleType,
    Message,
}

impl BookingField {
    pub const ALL: [BookingField; 9] = [
        BookingField::FullName,
        BookingField::Phone,
        BookingField::PickupLocation,
        BookingField::DropLocation,
        BookingField::PickupDate,
        BookingField::PickupTime,
        BookingField::Passengers,
        BookingField::VehicleType,
        BookingField::Message,
    ];

    /// Form field name (e.g. "pickupLocation")
    pub fn name(&self) -> &'static str {
        match self {
            BookingField::FullName => "fullName",
            BookingField::Phone => "phone",
            BookingField::PickupLocation => "pickupLocation",
            BookingField::DropLocation => "dropLocation",
            BookingField::PickupDate => "pickupDate",
            BookingField::PickupTime => "pickupTime",
            BookingField::Passengers => "passengers",
            BookingField::VehicleType => "vehicleType",
            BookingField::Message => "message",
        }
    }

    /// Whether the form requires a non-empty value before submit
    pub fn is_required(&self) -> bool {
        !matches!(self, BookingField::Message)
    }
}

impl std::fmt::Display for BookingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BookingField {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        BookingField::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

/// In-progress booking request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub full_name: String,
    /// Customer contact number, carried in the message body only
    pub phone: String,
    pub pickup_location: String,
    pub drop_location: String,
    /// ISO date (YYYY-MM-DD)
    pub pickup_date: String,
    pub pickup_time: String,
    pub passengers: u32,
    pub vehicle_type: VehicleType,
    /// Additional notes (optional)
    #[serde(default)]
    pub message: String,
}

impl Default for BookingRequest {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            phone: String::new(),
            pickup_location: String::new(),
            drop_location: String::new(),
            pickup_date: String::new(),
            pickup_time: String::new(),
            passengers: DEFAULT_PASSENGERS,
            vehicle_type: VehicleType::default(),
            message: String::new(),
        }
    }
}

impl BookingRequest {
    /// Return a copy with exactly one field replaced by `raw`.
    ///
    /// Text fields are stored verbatim. The passenger count falls back to
    /// [`DEFAULT_PASSENGERS`] when `raw` does not start with a positive
    /// integer. Only an unknown vehicle type is rejected.
    pub fn update_field(&self, field: BookingField, raw: &str) -> Result<BookingRequest> {
        let mut next = self.clone();
        match field {
            BookingField::FullName => next.full_name = raw.to_string(),
            BookingField::Phone => next.phone = raw.to_string(),
            BookingField::PickupLocation => next.pickup_location = raw.to_string(),
            BookingField::DropLocation => next.drop_location = raw.to_string(),
            BookingField::PickupDate => next.pickup_date = raw.to_string(),
            BookingField::PickupTime => next.pickup_time = raw.to_string(),
            BookingField::Passengers => next.passengers = parse_passengers(raw),
            BookingField::VehicleType => next.vehicle_type = raw.parse()?,
            BookingField::Message => next.message = raw.to_string(),
        }
        Ok(next)
    }

    /// Current value of a field as the form would display it
    pub fn field_value(&self, field: BookingField) -> String {
        match field {
            BookingField::FullName => self.full_name.clone(),
            BookingField::Phone => self.phone.clone(),
            BookingField::PickupLocation => self.pickup_location.clone(),
            BookingField::DropLocation => self.drop_location.clone(),
            BookingField::PickupDate => self.pickup_date.clone(),
            BookingField::PickupTime => self.pickup_time.clone(),
            BookingField::Passengers => self.passengers.to_string(),
            BookingField::VehicleType => self.vehicle_type.key().to_string(),
            BookingField::Message => self.message.clone(),
        }
    }

    /// Required fields that are still empty
    pub fn missing_required(&self) -> Vec<BookingField> {
        BookingField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.field_value(*f).is_empty())
            .collect()
    }
}

/// Parse a passenger count leniently.
///
/// Leading whitespace and a sign are accepted and trailing characters after
/// the digits are ignored ("3 people" is 3). Anything without leading digits,
/// or a value below one, yields [`DEFAULT_PASSENGERS`].
pub fn parse_passengers(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    if negative {
        return DEFAULT_PASSENGERS;
    }

    match rest[..end].parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => DEFAULT_PASSENGERS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let req = BookingRequest::default();
        assert_eq!(req.passengers, 1);
        assert_eq!(req.vehicle_type, VehicleType::Sedan);
        assert!(req.full_name.is_empty());
        assert_eq!(req.missing_required().len(), 6);
    }

    #[test]
    fn test_passengers_non_numeric() {
        let req = BookingRequest::default()
            .update_field(BookingField::Passengers, "5")
            .unwrap();
        let req = req.update_field(BookingField::Passengers, "abc").unwrap();
        assert_eq!(req.passengers, 1);
    }

    #[test]
    fn test_parse_passengers_cases() {
        assert_eq!(parse_passengers(""), 1);
        assert_eq!(parse_passengers("abc"), 1);
        assert_eq!(parse_passengers("0"), 1);
        assert_eq!(parse_passengers("-4"), 1);
        assert_eq!(parse_passengers("99999999999"), 1);
        assert_eq!(parse_passengers(" 12"), 12);
        assert_eq!(parse_passengers("3 people"), 3);
        assert_eq!(parse_passengers("2.7"), 2);
        assert_eq!(parse_passengers("+7"), 7);
        assert_eq!(parse_passengers("20"), 20);
    }

    #[test]
    fn test_text_stored_verbatim() {
        let req = BookingRequest::default()
            .update_field(BookingField::PickupLocation, "  Bagdogra Airport \n")
            .unwrap();
        assert_eq!(req.pickup_location, "  Bagdogra Airport \n");
    }

    #[test]
    fn test_vehicle_update() {
        let req = BookingRequest::default()
            .update_field(BookingField::VehicleType, "INNOVA-CRYSTA")
            .unwrap();
        assert_eq!(req.vehicle_type, VehicleType::InnovaCrysta);

        let err = req.update_field(BookingField::VehicleType, "rickshaw").unwrap_err();
        assert!(matches!(err, Error::UnknownVehicleType(_)));
    }

    #[test]
    fn test_previous_value_untouched() {
        let before = BookingRequest::default();
        let after = before.update_field(BookingField::FullName, "Raj Thapa").unwrap();
        assert!(before.full_name.is_empty());
        assert_eq!(after.full_name, "Raj Thapa");
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in BookingField::ALL {
            assert_eq!(field.name().parse::<BookingField>().unwrap(), field);
        }
        assert!(matches!(
            "email".parse::<BookingField>(),
            Err(Error::UnknownField(_))
        ));
    }

    fn text_field() -> impl Strategy<Value = BookingField> {
        prop::sample::select(vec![
            BookingField::FullName,
            BookingField::Phone,
            BookingField::PickupLocation,
            BookingField::DropLocation,
            BookingField::PickupDate,
            BookingField::PickupTime,
            BookingField::Message,
        ])
    }

    proptest! {
        #[test]
        fn prop_update_changes_only_one_field(field in text_field(), value in ".*") {
            let base = BookingRequest {
                full_name: "A".into(),
                phone: "B".into(),
                pickup_location: "C".into(),
                drop_location: "D".into(),
                pickup_date: "2024-06-01".into(),
                pickup_time: "09:00".into(),
                passengers: 4,
                vehicle_type: VehicleType::Suv,
                message: "E".into(),
            };
            let next = base.update_field(field, &value).unwrap();
            prop_assert_eq!(next.field_value(field), value);
            for other in BookingField::ALL.into_iter().filter(|f| *f != field) {
                prop_assert_eq!(next.field_value(other), base.field_value(other));
            }
        }

        #[test]
        fn prop_non_numeric_passengers_fall_back(raw in "[^0-9+\\-\\s][^0-9]*") {
            let next = BookingRequest::default()
                .update_field(BookingField::Passengers, &raw)
                .unwrap();
            prop_assert_eq!(next.passengers, 1);
        }
    }
}
