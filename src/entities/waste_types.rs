use crate::coerce;
use crate::resource::{Column, FieldDef, IntoValues, Resource, ResourceMeta};
use sea_orm::{FromQueryResult, Value};
use serde::{Deserialize, Serialize};

pub struct WasteTypes;

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct WasteType {
    pub id: i32,
    pub material: String,
    pub hazardous: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct WasteTypeForm {
    pub material: Option<String>,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub hazardous: bool,
}

impl IntoValues for WasteTypeForm {
    fn into_values(self) -> Vec<Value> {
        vec![self.material.into(), i32::from(self.hazardous).into()]
    }
}

impl Resource for WasteTypes {
    const META: ResourceMeta = ResourceMeta {
        slug: "waste-types",
        table: "waste_types",
        title: "Waste Types",
        noun: "waste type",
        description: "Materials the fleet collects and whether they need hazardous handling.",
        columns: &[
            Column::new("material", "Material"),
            Column::new("hazardous", "Hazardous"),
        ],
        fields: &[
            FieldDef::text("material", "Material"),
            FieldDef::flag("hazardous", "Hazardous"),
        ],
    };

    const LIST_SQL: &'static str =
        "SELECT waste_type_id AS id, material, hazardous FROM waste_types ORDER BY waste_type_id";
    const FETCH_SQL: &'static str =
        "SELECT waste_type_id AS id, material, hazardous FROM waste_types WHERE waste_type_id = ?";
    const SUMMARY_SQL: &'static str = "SELECT waste_type_id AS id, material AS name, \
         NULL AS detail FROM waste_types WHERE waste_type_id = ?";
    const INSERT_SQL: &'static str = "INSERT INTO waste_types (material, hazardous) VALUES (?, ?)";
    const UPDATE_SQL: &'static str =
        "UPDATE waste_types SET material = ?, hazardous = ? WHERE waste_type_id = ?";
    const DELETE_SQL: &'static str = "DELETE FROM waste_types WHERE waste_type_id = ?";

    type Row = WasteType;
    type Record = WasteType;
    type Form = WasteTypeForm;
}
