//! The board projection: per-column lanes of card ids.
//!
//! This is the view side of the order map. Each order id appears in exactly
//! one lane, and moving a card relocates its id without rebuilding the other
//! lanes, so untouched cards keep their position. [`BoardProjection::rebuild`]
//! is the bulk path used after edits and deletes: it clears every lane and
//! re-projects the full store in creation order.

use std::collections::HashMap;
use uuid::Uuid;

use crate::model::{Column, Order};
use crate::store::OrderStore;

#[derive(Debug)]
pub struct BoardProjection {
    lanes: HashMap<Column, Vec<Uuid>>,
}

impl Default for BoardProjection {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardProjection {
    /// An empty projection with every column's lane present.
    pub fn new() -> Self {
        let mut lanes = HashMap::new();
        for column in Column::ALL {
            lanes.insert(column, Vec::new());
        }
        Self { lanes }
    }

    /// Project a single order into its column's lane, appended at the end.
    pub fn append_card(&mut self, order: &Order) {
        if let Some(lane) = self.lanes.get_mut(&order.column) {
            if !lane.contains(&order.id) {
                lane.push(order.id);
            }
        }
    }

    /// Relocate a card to the target lane, appending it there. Returns false
    /// if the card is not projected anywhere.
    pub fn move_card(&mut self, id: Uuid, target: Column) -> bool {
        let Some(current) = self.column_of(id) else {
            return false;
        };
        if current == target {
            return true;
        }
        if let Some(lane) = self.lanes.get_mut(&current) {
            lane.retain(|card| *card != id);
        }
        if let Some(lane) = self.lanes.get_mut(&target) {
            lane.push(id);
        }
        true
    }

    pub fn remove_card(&mut self, id: Uuid) -> bool {
        for lane in self.lanes.values_mut() {
            let before = lane.len();
            lane.retain(|card| *card != id);
            if lane.len() != before {
                return true;
            }
        }
        false
    }

    /// Clear every lane and re-project the full store, oldest orders first.
    pub fn rebuild(&mut self, store: &OrderStore) {
        for lane in self.lanes.values_mut() {
            lane.clear();
        }
        let mut orders: Vec<&Order> = store.orders().collect();
        orders.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        for order in orders {
            self.append_card(order);
        }
    }

    pub fn lane(&self, column: Column) -> &[Uuid] {
        self.lanes.get(&column).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn column_of(&self, id: Uuid) -> Option<Column> {
        self.lanes
            .iter()
            .find(|(_, lane)| lane.contains(&id))
            .map(|(column, _)| *column)
    }

    pub fn card_count(&self) -> usize {
        self.lanes.values().map(Vec::len).sum()
    }
}
