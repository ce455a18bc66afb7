use uuid::Uuid;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::OrderStore;

/// Remove an order. Deleting an id that is already gone succeeds with an
/// info message, so repeated deletes are harmless.
pub fn run(store: &mut OrderStore, id: &Uuid) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.remove(id) {
        Some(order) => {
            result.add_message(CmdMessage::success(format!("Order deleted: {}", order.title)));
            result.affected_orders.push(order);
        }
        None => {
            result.add_message(CmdMessage::info("Order was already gone"));
        }
    }
    Ok(result)
}
