use crate::api_model::CreateItem;
use crate::api_model::Item;
use crate::api_model::ListQuery;
use crate::api_model::UpdateItem;
use crate::database_api::Rowid;
use crate::error::ErrorContext;
use crate::error::Result;
use crate::internal_api;
use bytes::Bytes;
use rusqlite::Connection;
use rusqlite::Transaction;
use serde::de::DeserializeOwned;
use std::path::Path;

// Each request opens its own connection to the database file and runs
// inside one transaction. Nothing is shared between requests; the
// database provides the only concurrency guarantees.

pub fn list_items(database_path: &Path, query: ListQuery) -> Result<Vec<Item>> {
    let mut conn = open_database(database_path)?;
    in_transaction(&mut conn, |tx| {
        internal_api::list_items_tx(tx, query.skip, query.limit)
    })
}

pub fn create_item(database_path: &Path, body: Bytes) -> Result<Item> {
    let create: CreateItem = parse_json(&body)?;
    let mut conn = open_database(database_path)?;
    in_transaction(&mut conn, |tx| internal_api::create_item_tx(tx, create))
}

pub fn get_item(database_path: &Path, id: Rowid) -> Result<Item> {
    let mut conn = open_database(database_path)?;
    in_transaction(&mut conn, |tx| internal_api::get_item_tx(tx, id))
}

pub fn update_item(database_path: &Path, id: Rowid, body: Bytes) -> Result<Item> {
    let update: UpdateItem = parse_json(&body)?;
    let mut conn = open_database(database_path)?;
    in_transaction(&mut conn, |tx| internal_api::update_item_tx(tx, id, update))
}

pub fn delete_item(database_path: &Path, id: Rowid) -> Result<()> {
    let mut conn = open_database(database_path)?;
    in_transaction(&mut conn, |tx| internal_api::delete_item_tx(tx, id))
}

//
// helper functions:
//

fn open_database(database_path: &Path) -> Result<Connection> {
    Connection::open(database_path)
        .context(|| format!("Failed to open database {}", database_path.display()))
}

fn in_transaction<T, F: FnOnce(&Transaction) -> Result<T>>(
    conn: &mut Connection,
    func: F,
) -> Result<T> {
    let tx = conn.transaction()?;
    let result = func(&tx)?; // Note that this function needs to exit early in case of error
    tx.commit()?;
    Ok(result)
}

fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let parsed = serde_path_to_error::deserialize(&mut deserializer)?;
    Ok(parsed)
}
