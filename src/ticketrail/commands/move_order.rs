use uuid::Uuid;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Column;
use crate::store::OrderStore;

pub fn run(store: &mut OrderStore, id: &Uuid, target: Column) -> Result<CmdResult> {
    let order = store.move_to(id, target)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} moved to {}",
        order.title,
        target.label()
    )));
    Ok(result.with_affected_orders(vec![order]))
}
