use crate::error::ErrorContext;
use crate::error::Result;
use rusqlite::params;
use rusqlite::Transaction as Tx;

pub type Rowid = i64;

pub struct ItemRow {
    pub id: Rowid,
    pub name: String,
    pub description: String,
}

pub fn insert_item(tx: &Tx, name: &str, description: &str) -> Result<Rowid> {
    let mut stmt = tx
        .prepare_cached("INSERT INTO items (name, description) VALUES (?, ?);")
        .context_str("Failed to prepare/compile INSERT statement")?;
    stmt.insert(params![name, description])
        .context_str("Failed to execute insert_item with parameters")
}

pub fn get_item(tx: &Tx, id: Rowid) -> Result<Option<ItemRow>> {
    let mut stmt =
        tx.prepare_cached("SELECT id, name, description FROM items WHERE id = ?;")?;
    let mut rows = stmt.query(params![id])?;
    if let Some(row) = rows.next()? {
        Ok(Some(ItemRow {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
        }))
    } else {
        Ok(None)
    }
}

/// Items in insertion order, skipping the first `skip` rows and
/// returning at most `limit` rows.
pub fn list_items(tx: &Tx, skip: u32, limit: u32) -> Result<Vec<ItemRow>> {
    let mut stmt = tx
        .prepare_cached(
            "SELECT id, name, description FROM items ORDER BY id LIMIT ? OFFSET ?;",
        )
        .context_str("Failed to prepare/compile SELECT statement")?;
    let mut rows = stmt.query(params![limit, skip])?;
    let mut result = Vec::new();
    while let Some(row) = rows.next()? {
        result.push(ItemRow {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
        });
    }
    Ok(result)
}

/// Overwrite both fields of an item. Returns `false` if no row matched.
pub fn update_item(tx: &Tx, id: Rowid, name: &str, description: &str) -> Result<bool> {
    let mut stmt = tx
        .prepare_cached("UPDATE items SET name = ?, description = ? WHERE id = ?;")
        .context_str("Failed to prepare/compile UPDATE statement")?;
    let updated = stmt.execute(params![name, description, id])?;
    Ok(updated > 0)
}

/// Returns `false` if no row matched.
pub fn delete_item(tx: &Tx, id: Rowid) -> Result<bool> {
    let mut stmt = tx.prepare_cached("DELETE FROM items WHERE id = ?;")?;
    let deleted = stmt.execute(params![id])?;
    Ok(deleted > 0)
}

#[cfg(test)]
pub mod tests {
    use super::super::database_migrate_refinery;
    use super::super::error::Result;
    use super::*;
    use rusqlite::Connection;

    pub fn new_conn() -> Connection {
        let mut conn = rusqlite::Connection::open_in_memory().unwrap();
        database_migrate_refinery::embedded::migrations::runner()
            .run(&mut conn)
            .expect("Failed to run refinery migrations");
        conn
    }

    #[test]
    fn test_insert_item() -> Result<()> {
        let mut conn = new_conn();
        let tx = conn.transaction()?;
        let item1 = insert_item(&tx, "first", "first item")?;
        let item2 = insert_item(&tx, "second", "second item")?;
        assert_eq!(item2 - item1, 1);
        Ok(())
    }

    #[test]
    fn test_get_item() -> Result<()> {
        let mut conn = new_conn();
        let tx = conn.transaction()?;
        let id = insert_item(&tx, "lamp", "a desk lamp")?;
        let found = get_item(&tx, id)?.expect("Inserted item not found");
        assert_eq!(found.id, id);
        assert_eq!(found.name, "lamp");
        assert_eq!(found.description, "a desk lamp");
        assert!(get_item(&tx, id + 1)?.is_none());
        Ok(())
    }

    #[test]
    fn test_list_items_pagination() -> Result<()> {
        let mut conn = new_conn();
        let tx = conn.transaction()?;
        for i in 0..15 {
            insert_item(&tx, &format!("item{}", i), "numbered")?;
        }
        let first_page = list_items(&tx, 0, 10)?;
        assert_eq!(first_page.len(), 10);
        assert_eq!(first_page.first().unwrap().name, "item0");

        let second_page = list_items(&tx, 10, 10)?;
        assert_eq!(second_page.len(), 5);
        assert_eq!(second_page.first().unwrap().name, "item10");

        assert_eq!(list_items(&tx, 15, 10)?.len(), 0);
        Ok(())
    }

    #[test]
    fn test_update_item() -> Result<()> {
        let mut conn = new_conn();
        let tx = conn.transaction()?;
        let id = insert_item(&tx, "old name", "old description")?;
        assert!(update_item(&tx, id, "new name", "new description")?);
        let found = get_item(&tx, id)?.expect("Updated item not found");
        assert_eq!(found.name, "new name");
        assert_eq!(found.description, "new description");
        assert!(!update_item(&tx, id + 1, "x", "y")?);
        Ok(())
    }

    #[test]
    fn test_delete_item() -> Result<()> {
        let mut conn = new_conn();
        let tx = conn.transaction()?;
        let id = insert_item(&tx, "short-lived", "to be deleted")?;
        assert!(delete_item(&tx, id)?);
        assert!(get_item(&tx, id)?.is_none());
        assert!(!delete_item(&tx, id)?);
        Ok(())
    }
}
