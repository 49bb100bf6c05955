use crate::resource::{Column, FieldDef, IntoValues, Resource, ResourceMeta};
use sea_orm::{FromQueryResult, Value};
use serde::{Deserialize, Serialize};

pub struct Facilities;

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct Facility {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub facility_type: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct FacilityForm {
    pub name: Option<String>,
    pub location: Option<String>,
    pub facility_type: Option<String>,
}

impl IntoValues for FacilityForm {
    fn into_values(self) -> Vec<Value> {
        vec![
            self.name.into(),
            self.location.into(),
            self.facility_type.into(),
        ]
    }
}

impl Resource for Facilities {
    const META: ResourceMeta = ResourceMeta {
        slug: "facilities",
        table: "disposal_facilities",
        title: "Disposal Facilities",
        noun: "facility",
        description: "Landfills, transfer stations and recycling centers that accept collected waste.",
        columns: &[
            Column::new("name", "Name"),
            Column::new("location", "Location"),
            Column::new("facility_type", "Type"),
        ],
        fields: &[
            FieldDef::text("name", "Name"),
            FieldDef::text("location", "Location"),
            FieldDef::text("facility_type", "Facility type"),
        ],
    };

    const LIST_SQL: &'static str = "SELECT facility_id AS id, name, location, facility_type \
         FROM disposal_facilities ORDER BY facility_id";
    const FETCH_SQL: &'static str = "SELECT facility_id AS id, name, location, facility_type \
         FROM disposal_facilities WHERE facility_id = ?";
    const SUMMARY_SQL: &'static str = "SELECT facility_id AS id, name, location AS detail \
         FROM disposal_facilities WHERE facility_id = ?";
    const INSERT_SQL: &'static str =
        "INSERT INTO disposal_facilities (name, location, facility_type) VALUES (?, ?, ?)";
    const UPDATE_SQL: &'static str = "UPDATE disposal_facilities SET name = ?, location = ?, \
         facility_type = ? WHERE facility_id = ?";
    const DELETE_SQL: &'static str = "DELETE FROM disposal_facilities WHERE facility_id = ?";

    type Row = Facility;
    type Record = Facility;
    type Form = FacilityForm;
}
