use surrealdb::RecordId;

use crate::errors::{Error, Result};

pub fn get_record_id_from_string(val: &str) -> Result<RecordId> {
    let mut id_part = val.trim().splitn(2, ':');
    match (id_part.next(), id_part.next()) {
        (Some(table), Some(key)) if !table.is_empty() && !key.is_empty() => {
            Ok(RecordId::from_table_key(table, key))
        }
        _ => Err(Error::InvalidRecordId(val.to_string())),
    }
}
