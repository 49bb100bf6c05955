//! The six table-backed entities

pub mod customers;
pub mod facilities;
pub mod facility_waste_types;
pub mod routes;
pub mod vehicles;
pub mod waste_types;

pub use customers::Customers;
pub use facilities::Facilities;
pub use facility_waste_types::FacilityWasteTypes;
pub use routes::Routes;
pub use vehicles::Vehicles;
pub use waste_types::WasteTypes;

use crate::resource::{Resource, ResourceMeta};

/// Every entity, in navigation order
pub const RESOURCES: [&ResourceMeta; 6] = [
    &Customers::META,
    &Routes::META,
    &Vehicles::META,
    &WasteTypes::META,
    &Facilities::META,
    &FacilityWasteTypes::META,
];
