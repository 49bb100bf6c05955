use crate::coerce;
use crate::resource::{Column, FieldDef, IntoValues, Resource, ResourceMeta};
use sea_orm::{FromQueryResult, Value};
use serde::{Deserialize, Serialize};

const VEHICLE_CHOICES: &str =
    "SELECT vehicle_id AS id, license_plate AS label FROM vehicles ORDER BY license_plate";

pub struct Routes;

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct RouteRow {
    pub id: i32,
    pub name: String,
    pub route_type: String,
    pub schedule: String,
    pub active_route: bool,
    pub vehicle: Option<String>,
}

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct Route {
    pub id: i32,
    pub name: String,
    pub route_type: String,
    pub schedule: String,
    pub active_route: bool,
    pub vehicle_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RouteForm {
    pub name: Option<String>,
    pub route_type: Option<String>,
    pub schedule: Option<String>,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub active_route: bool,
    #[serde(default, deserialize_with = "coerce::reference")]
    pub vehicle_id: Option<i32>,
}

impl IntoValues for RouteForm {
    fn into_values(self) -> Vec<Value> {
        vec![
            self.name.into(),
            self.route_type.into(),
            self.schedule.into(),
            i32::from(self.active_route).into(),
            self.vehicle_id.into(),
        ]
    }
}

impl Resource for Routes {
    const META: ResourceMeta = ResourceMeta {
        slug: "routes",
        table: "routes",
        title: "Routes",
        noun: "route",
        description: "Collection routes and the vehicle assigned to each.",
        columns: &[
            Column::new("name", "Name"),
            Column::new("route_type", "Type"),
            Column::new("schedule", "Schedule"),
            Column::new("active_route", "Active"),
            Column::new("vehicle", "Vehicle"),
        ],
        fields: &[
            FieldDef::text("name", "Name"),
            FieldDef::text("route_type", "Route type"),
            FieldDef::text("schedule", "Schedule"),
            FieldDef::flag("active_route", "Active"),
            FieldDef::reference("vehicle_id", "Vehicle", VEHICLE_CHOICES, false),
        ],
    };

    const LIST_SQL: &'static str = "SELECT r.route_id AS id, r.name, r.route_type, r.schedule, \
         r.active_route, v.license_plate AS vehicle \
         FROM routes r LEFT JOIN vehicles v ON v.vehicle_id = r.vehicle_id \
         ORDER BY r.route_id";
    const FETCH_SQL: &'static str = "SELECT route_id AS id, name, route_type, schedule, \
         active_route, vehicle_id FROM routes WHERE route_id = ?";
    const SUMMARY_SQL: &'static str =
        "SELECT route_id AS id, name, schedule AS detail FROM routes WHERE route_id = ?";
    const INSERT_SQL: &'static str = "INSERT INTO routes \
         (name, route_type, schedule, active_route, vehicle_id) VALUES (?, ?, ?, ?, ?)";
    const UPDATE_SQL: &'static str = "UPDATE routes SET name = ?, route_type = ?, schedule = ?, \
         active_route = ?, vehicle_id = ? WHERE route_id = ?";
    const DELETE_SQL: &'static str = "DELETE FROM routes WHERE route_id = ?";

    type Row = RouteRow;
    type Record = Route;
    type Form = RouteForm;
}
