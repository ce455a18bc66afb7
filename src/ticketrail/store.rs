//! The in-memory state store.
//!
//! [`OrderStore`] owns the id → order mapping and the transient drag state,
//! and nothing else. It performs no validation (emptiness checks are the
//! command layer's contract) and never touches the view. Mutations that name
//! a missing order return [`BoardError::OrderNotFound`] rather than
//! panicking; removal is idempotent.

use std::collections::HashMap;
use uuid::Uuid;

use crate::error::{BoardError, Result};
use crate::model::{Column, Order, OrderFields};

/// The in-progress drag operation: which order is held and which column is
/// currently under the pointer. Reset by [`OrderStore::take_dragging`] at the
/// end of each drag cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    pub source: Option<Uuid>,
    pub over: Option<Column>,
}

/// A partial update to the drag state. `None` fields are left unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragPatch {
    pub source: Option<Uuid>,
    pub over: Option<Column>,
}

impl DragPatch {
    pub fn begin(source: Uuid, over: Column) -> Self {
        Self {
            source: Some(source),
            over: Some(over),
        }
    }

    pub fn over(column: Column) -> Self {
        Self {
            source: None,
            over: Some(column),
        }
    }
}

#[derive(Debug, Default)]
pub struct OrderStore {
    orders: HashMap<Uuid, Order>,
    dragging: DragState,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new order built from `fields`, returning a snapshot of it.
    /// No validation happens here.
    pub fn create(&mut self, fields: OrderFields) -> Order {
        let order = Order::new(fields);
        self.orders.insert(order.id, order.clone());
        order
    }

    pub fn order(&self, id: &Uuid) -> Option<&Order> {
        self.orders.get(id)
    }

    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Overwrite title/table/column on an existing order.
    pub fn update(&mut self, id: &Uuid, fields: OrderFields) -> Result<Order> {
        let order = self
            .orders
            .get_mut(id)
            .ok_or(BoardError::OrderNotFound(*id))?;
        order.title = fields.title;
        order.table = fields.table;
        order.column = fields.column;
        order.touch();
        Ok(order.clone())
    }

    /// Set only the column of an existing order.
    pub fn move_to(&mut self, id: &Uuid, target: Column) -> Result<Order> {
        let order = self
            .orders
            .get_mut(id)
            .ok_or(BoardError::OrderNotFound(*id))?;
        order.column = target;
        order.touch();
        Ok(order.clone())
    }

    /// Remove an order. Returns `None` if it was already absent.
    pub fn remove(&mut self, id: &Uuid) -> Option<Order> {
        self.orders.remove(id)
    }

    pub fn dragging(&self) -> DragState {
        self.dragging
    }

    /// Merge a partial drag update into the current drag state.
    pub fn update_dragging(&mut self, patch: DragPatch) {
        if let Some(source) = patch.source {
            self.dragging.source = Some(source);
        }
        if let Some(over) = patch.over {
            self.dragging.over = Some(over);
        }
    }

    /// Return the current drag state and reset it for the next cycle.
    pub fn take_dragging(&mut self) -> DragState {
        std::mem::take(&mut self.dragging)
    }
}
