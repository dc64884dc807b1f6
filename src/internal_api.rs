use crate::api_model::CreateItem;
use crate::api_model::Item;
use crate::api_model::UpdateItem;
use crate::database_api;
use crate::database_api::ItemRow;
use crate::database_api::Rowid;
use crate::error::Error;
use crate::error::Result;
use log::debug;
use rusqlite::Transaction as Tx;
use warp::http::status::StatusCode;

/// Get project version as seen by Cargo.
pub fn get_project_version() -> &'static str {
    debug!("Returning API version...");
    env!("CARGO_PKG_VERSION")
}

pub fn list_items_tx(tx: &Tx, skip: u32, limit: u32) -> Result<Vec<Item>> {
    let rows = database_api::list_items(tx, skip, limit)?;
    Ok(rows.into_iter().map(item_to_json).collect())
}

/// Insert a new item and return it with its database-assigned id.
pub fn create_item_tx(tx: &Tx, create: CreateItem) -> Result<Item> {
    debug!("Creating item {:?}", create);
    let id = database_api::insert_item(tx, &create.name, &create.description)?;
    let row = database_api::get_item(tx, id)?.ok_or_else(|| Error {
        code: StatusCode::INTERNAL_SERVER_ERROR,
        msg: format!("Item {} not found right after inserting", id),
    })?;
    Ok(item_to_json(row))
}

pub fn get_item_tx(tx: &Tx, id: Rowid) -> Result<Item> {
    debug!("Getting item {}", id);
    let row = database_api::get_item(tx, id)?.ok_or_else(item_not_found)?;
    Ok(item_to_json(row))
}

/// Overwrite `name` and `description` of an already existing item.
pub fn update_item_tx(tx: &Tx, id: Rowid, update: UpdateItem) -> Result<Item> {
    debug!("Updating item {} with {:?}", id, update);
    let updated = database_api::update_item(tx, id, &update.name, &update.description)?;
    if !updated {
        return Err(item_not_found());
    }
    let row = database_api::get_item(tx, id)?.ok_or_else(|| Error {
        code: StatusCode::INTERNAL_SERVER_ERROR,
        msg: format!("Item {} not found right after updating", id),
    })?;
    Ok(item_to_json(row))
}

pub fn delete_item_tx(tx: &Tx, id: Rowid) -> Result<()> {
    debug!("Deleting item {}", id);
    if database_api::delete_item(tx, id)? {
        Ok(())
    } else {
        Err(item_not_found())
    }
}

fn item_to_json(row: ItemRow) -> Item {
    Item {
        id: row.id,
        name: row.name,
        description: row.description,
    }
}

fn item_not_found() -> Error {
    Error {
        code: StatusCode::NOT_FOUND,
        msg: "Item not found".to_string(),
    }
}
