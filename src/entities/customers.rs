use crate::coerce;
use crate::resource::{Column, FieldDef, IntoValues, Resource, ResourceMeta};
use sea_orm::{FromQueryResult, Value};
use serde::{Deserialize, Serialize};

const ROUTE_CHOICES: &str = "SELECT route_id AS id, name AS label FROM routes ORDER BY name";

pub struct Customers;

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct CustomerRow {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub customer_type: String,
    pub contact_number: Option<String>,
    pub route: Option<String>,
}

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub customer_type: String,
    pub contact_number: Option<String>,
    pub route_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CustomerForm {
    pub name: Option<String>,
    pub address: Option<String>,
    pub customer_type: Option<String>,
    pub contact_number: Option<String>,
    #[serde(default, deserialize_with = "coerce::reference")]
    pub route_id: Option<i32>,
}

impl IntoValues for CustomerForm {
    fn into_values(self) -> Vec<Value> {
        vec![
            self.name.into(),
            self.address.into(),
            self.customer_type.into(),
            self.contact_number.into(),
            self.route_id.into(),
        ]
    }
}

impl Resource for Customers {
    const META: ResourceMeta = ResourceMeta {
        slug: "customers",
        table: "customers",
        title: "Customers",
        noun: "customer",
        description: "Households and businesses on a collection route.",
        columns: &[
            Column::new("name", "Name"),
            Column::new("address", "Address"),
            Column::new("customer_type", "Type"),
            Column::new("contact_number", "Contact"),
            Column::new("route", "Route"),
        ],
        fields: &[
            FieldDef::text("name", "Name"),
            FieldDef::text("address", "Address"),
            FieldDef::text("customer_type", "Customer type"),
            FieldDef::text("contact_number", "Contact number"),
            FieldDef::reference("route_id", "Route", ROUTE_CHOICES, false),
        ],
    };

    const LIST_SQL: &'static str = "SELECT c.customer_id AS id, c.name, c.address, c.customer_type, \
         c.contact_number, r.name AS route \
         FROM customers c LEFT JOIN routes r ON r.route_id = c.route_id \
         ORDER BY c.customer_id";
    const FETCH_SQL: &'static str = "SELECT customer_id AS id, name, address, customer_type, \
         contact_number, route_id FROM customers WHERE customer_id = ?";
    const SUMMARY_SQL: &'static str =
        "SELECT customer_id AS id, name, address AS detail FROM customers WHERE customer_id = ?";
    const INSERT_SQL: &'static str = "INSERT INTO customers \
         (name, address, customer_type, contact_number, route_id) VALUES (?, ?, ?, ?, ?)";
    const UPDATE_SQL: &'static str = "UPDATE customers SET name = ?, address = ?, \
         customer_type = ?, contact_number = ?, route_id = ? WHERE customer_id = ?";
    const DELETE_SQL: &'static str = "DELETE FROM customers WHERE customer_id = ?";

    type Row = CustomerRow;
    type Record = Customer;
    type Form = CustomerForm;
}
