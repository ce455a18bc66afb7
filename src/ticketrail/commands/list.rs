use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Order;
use crate::store::OrderStore;

/// List every order, oldest first. This ordering is also what the projection
/// rebuild uses, so listings and lanes agree.
pub fn run(store: &OrderStore) -> Result<CmdResult> {
    let mut orders: Vec<Order> = store.orders().cloned().collect();
    orders.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    Ok(CmdResult::default().with_listed_orders(orders))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::model::OrderFields;

    #[test]
    fn lists_oldest_first() {
        let mut store = OrderStore::new();
        for title in ["first", "second", "third"] {
            create::run(&mut store, OrderFields::draft(title, "1")).unwrap();
        }

        let result = run(&store).unwrap();
        let titles: Vec<&str> = result
            .listed_orders
            .iter()
            .map(|o| o.title.as_str())
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = OrderStore::new();
        assert!(run(&store).unwrap().listed_orders.is_empty());
    }
}
