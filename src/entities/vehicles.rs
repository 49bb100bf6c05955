use crate::coerce;
use crate::resource::{Column, FieldDef, IntoValues, Resource, ResourceMeta};
use sea_orm::{FromQueryResult, Value};
use serde::{Deserialize, Serialize};

const WASTE_TYPE_CHOICES: &str =
    "SELECT waste_type_id AS id, material AS label FROM waste_types ORDER BY material";

pub struct Vehicles;

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct VehicleRow {
    pub id: i32,
    pub license_plate: String,
    pub service_type: String,
    pub status: String,
    pub waste_type: Option<String>,
}

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct Vehicle {
    pub id: i32,
    pub license_plate: String,
    pub service_type: String,
    pub status: String,
    pub waste_type_id: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct VehicleForm {
    pub license_plate: Option<String>,
    pub service_type: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "coerce::reference")]
    pub waste_type_id: Option<i32>,
}

impl IntoValues for VehicleForm {
    fn into_values(self) -> Vec<Value> {
        vec![
            self.license_plate.into(),
            self.service_type.into(),
            self.status.into(),
            self.waste_type_id.into(),
        ]
    }
}

impl Resource for Vehicles {
    const META: ResourceMeta = ResourceMeta {
        slug: "vehicles",
        table: "vehicles",
        title: "Vehicles",
        noun: "vehicle",
        description: "Collection trucks and the waste type each one carries.",
        columns: &[
            Column::new("license_plate", "License plate"),
            Column::new("service_type", "Service"),
            Column::new("status", "Status"),
            Column::new("waste_type", "Waste type"),
        ],
        fields: &[
            FieldDef::text("license_plate", "License plate"),
            FieldDef::text("service_type", "Service type"),
            FieldDef::text("status", "Status"),
            FieldDef::reference("waste_type_id", "Waste type", WASTE_TYPE_CHOICES, true),
        ],
    };

    const LIST_SQL: &'static str = "SELECT v.vehicle_id AS id, v.license_plate, v.service_type, \
         v.status, w.material AS waste_type \
         FROM vehicles v LEFT JOIN waste_types w ON w.waste_type_id = v.waste_type_id \
         ORDER BY v.vehicle_id";
    const FETCH_SQL: &'static str = "SELECT vehicle_id AS id, license_plate, service_type, \
         status, waste_type_id FROM vehicles WHERE vehicle_id = ?";
    const SUMMARY_SQL: &'static str = "SELECT vehicle_id AS id, license_plate AS name, \
         status AS detail FROM vehicles WHERE vehicle_id = ?";
    const INSERT_SQL: &'static str = "INSERT INTO vehicles \
         (license_plate, service_type, status, waste_type_id) VALUES (?, ?, ?, ?)";
    const UPDATE_SQL: &'static str = "UPDATE vehicles SET license_plate = ?, service_type = ?, \
         status = ?, waste_type_id = ? WHERE vehicle_id = ?";
    const DELETE_SQL: &'static str = "DELETE FROM vehicles WHERE vehicle_id = ?";

    type Row = VehicleRow;
    type Record = Vehicle;
    type Form = VehicleForm;
}
