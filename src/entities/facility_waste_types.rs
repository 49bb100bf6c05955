use crate::coerce;
use crate::resource::{Column, FieldDef, IntoValues, Resource, ResourceMeta};
use sea_orm::{FromQueryResult, Value};
use serde::{Deserialize, Serialize};

const FACILITY_CHOICES: &str =
    "SELECT facility_id AS id, name AS label FROM disposal_facilities ORDER BY name";
const WASTE_TYPE_CHOICES: &str =
    "SELECT waste_type_id AS id, material AS label FROM waste_types ORDER BY material";

/// Which waste types each disposal facility accepts
pub struct FacilityWasteTypes;

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct FacilityWasteTypeRow {
    pub id: i32,
    pub facility: Option<String>,
    pub waste_type: Option<String>,
}

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct FacilityWasteType {
    pub id: i32,
    pub facility_id: i32,
    pub waste_type_id: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct FacilityWasteTypeForm {
    #[serde(default, deserialize_with = "coerce::reference")]
    pub facility_id: Option<i32>,
    #[serde(default, deserialize_with = "coerce::reference")]
    pub waste_type_id: Option<i32>,
}

impl IntoValues for FacilityWasteTypeForm {
    fn into_values(self) -> Vec<Value> {
        vec![self.facility_id.into(), self.waste_type_id.into()]
    }
}

impl Resource for FacilityWasteTypes {
    const META: ResourceMeta = ResourceMeta {
        slug: "facility-waste-types",
        table: "facility_waste_types",
        title: "Facility Waste Types",
        noun: "facility waste type",
        description: "Which waste types each disposal facility accepts.",
        columns: &[
            Column::new("facility", "Facility"),
            Column::new("waste_type", "Waste type"),
        ],
        fields: &[
            FieldDef::reference("facility_id", "Facility", FACILITY_CHOICES, true),
            FieldDef::reference("waste_type_id", "Waste type", WASTE_TYPE_CHOICES, true),
        ],
    };

    const LIST_SQL: &'static str = "SELECT l.facility_waste_type_id AS id, f.name AS facility, \
         w.material AS waste_type \
         FROM facility_waste_types l \
         LEFT JOIN disposal_facilities f ON f.facility_id = l.facility_id \
         LEFT JOIN waste_types w ON w.waste_type_id = l.waste_type_id \
         ORDER BY l.facility_waste_type_id";
    const FETCH_SQL: &'static str = "SELECT facility_waste_type_id AS id, facility_id, \
         waste_type_id FROM facility_waste_types WHERE facility_waste_type_id = ?";
    const SUMMARY_SQL: &'static str = "SELECT l.facility_waste_type_id AS id, f.name AS name, \
         w.material AS detail \
         FROM facility_waste_types l \
         JOIN disposal_facilities f ON f.facility_id = l.facility_id \
         JOIN waste_types w ON w.waste_type_id = l.waste_type_id \
         WHERE l.facility_waste_type_id = ?";
    const INSERT_SQL: &'static str =
        "INSERT INTO facility_waste_types (facility_id, waste_type_id) VALUES (?, ?)";
    const UPDATE_SQL: &'static str = "UPDATE facility_waste_types SET facility_id = ?, \
         waste_type_id = ? WHERE facility_waste_type_id = ?";
    const DELETE_SQL: &'static str =
        "DELETE FROM facility_waste_types WHERE facility_waste_type_id = ?";

    type Row = FacilityWasteTypeRow;
    type Record = FacilityWasteType;
    type Form = FacilityWasteTypeForm;
}
