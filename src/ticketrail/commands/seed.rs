use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Column, OrderFields};
use crate::store::OrderStore;

/// Sample tickets for demo boards, cycled when more are requested.
const DEMO_ORDERS: &[(&str, &str)] = &[
    ("Double cheeseburger", "4"),
    ("Fish & chips", "12"),
    ("Margherita pizza", "2"),
    ("Caesar salad", "7"),
    ("Ribeye, medium rare", "9"),
    ("Mushroom risotto", "3"),
    ("Club sandwich", "11"),
    ("Pancake stack", "6"),
    ("Tomato soup", "1"),
    ("BLT & fries", "8"),
];

/// Seed `count` demo orders, spread round-robin across the columns so every
/// lane has something to show.
pub fn run(store: &mut OrderStore, count: usize) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for i in 0..count {
        let (title, table) = DEMO_ORDERS[i % DEMO_ORDERS.len()];
        let column = Column::ALL[i % Column::ALL.len()];
        let order = store.create(OrderFields::draft(title, table).with_column(column));
        result.affected_orders.push(order);
    }
    result.add_message(CmdMessage::info(format!("Seeded {} demo orders", count)));
    Ok(result)
}
