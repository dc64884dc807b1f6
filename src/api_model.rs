use serde::Deserialize;
use serde::Serialize;

/// An item as returned by all endpoints.
///
/// The `id` is assigned by the database on creation and never changes.
/// It is included in list responses as well, so that clients can address
/// an item without an extra read-by-id roundtrip.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Request body for `POST /items/`. Both fields are required.
#[derive(Debug, Deserialize)]
pub struct CreateItem {
    pub name: String,
    pub description: String,
}

/// Request body for `PUT /items/{id}`.
/// A full replace of both fields, there are no partial updates.
#[derive(Debug, Deserialize)]
pub struct UpdateItem {
    pub name: String,
    pub description: String,
}

/// Query parameters of `GET /items/`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    10
}
