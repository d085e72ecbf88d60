//! Vehicle catalog for the booking form

use crate::model::{VehicleCatalogEntry, VehicleType};

/// Catalog entries, indexed in `VehicleType::ALL` order
static CATALOG: [VehicleCatalogEntry; 6] = [
    VehicleCatalogEntry {
        id: "hatchback",
        name: "Hatchback",
        capacity: "4 passengers",
        base_price: 2000,
        description: "Compact and economical, perfect for small groups",
        examples: "Swift, i10, Wagon R",
    },
    VehicleCatalogEntry {
        id: "sedan",
        name: "Sedan",
        capacity: "4 passengers",
        base_price: 2500,
        description: "Comfortable ride with extra luggage space",
        examples: "Dzire, Xcent, Etios",
    },
    VehicleCatalogEntry {
        id: "suv",
        name: "SUV",
        capacity: "6-7 passengers",
        base_price: 3000,
        description: "Spacious and powerful, ideal for hill drives",
        examples: "Scorpio, XUV500, Safari",
    },
    VehicleCatalogEntry {
        id: "innova",
        name: "Innova",
        capacity: "7 passengers",
        base_price: 3500,
        description: "Reliable and comfortable for long journeys",
        examples: "Toyota Innova",
    },
    VehicleCatalogEntry {
        id: "innova-crysta",
        name: "Innova Crysta",
        capacity: "7 passengers",
        base_price: 4000,
        description: "Premium comfort with enhanced features",
        examples: "Toyota Innova Crysta",
    },
    VehicleCatalogEntry {
        id: "tempo-traveler",
        name: "Tempo Traveler",
        capacity: "12-16 passengers",
        base_price: 5000,
        description: "Perfect for large groups and tours",
        examples: "Force Tempo Traveler",
    },
];

/// Get the catalog entry for a vehicle type
pub fn lookup(vehicle_type: VehicleType) -> &'static VehicleCatalogEntry {
    &CATALOG[vehicle_type.index()]
}

/// All entries in catalog definition order
pub fn entries() -> impl Iterator<Item = (VehicleType, &'static VehicleCatalogEntry)> {
    VehicleType::ALL.into_iter().map(|v| (v, lookup(v)))
}

/// Find an entry by its identifier (e.g. "innova-crysta")
pub fn find_by_id(id: &str) -> Option<(VehicleType, &'static VehicleCatalogEntry)> {
    entries().find(|(_, entry)| entry.id == id)
}
