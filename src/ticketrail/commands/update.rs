use uuid::Uuid;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BoardError, Result};
use crate::model::OrderFields;
use crate::store::OrderStore;

pub fn run(store: &mut OrderStore, id: &Uuid, fields: OrderFields) -> Result<CmdResult> {
    if fields.title.trim().is_empty() {
        return Err(BoardError::EmptyField("Title"));
    }
    if fields.table.trim().is_empty() {
        return Err(BoardError::EmptyField("Table"));
    }

    let order = store.update(
        id,
        OrderFields {
            title: fields.title.trim().to_string(),
            table: fields.table.trim().to_string(),
            column: fields.column,
        },
    )?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Order updated: {}", order.title)));
    Ok(result.with_affected_orders(vec![order]))
}
