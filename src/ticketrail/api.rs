//! The API facade: a thin dispatch layer over the command modules plus the
//! drag-state entry points of the store.
//!
//! Clients (the TUI controller and the snapshot CLI) go through this type;
//! it holds the store, normalizes nothing, and contains no business logic.

use uuid::Uuid;

use crate::commands;
use crate::error::Result;
use crate::model::{Column, Order, OrderFields};
use crate::store::{DragPatch, DragState, OrderStore};

#[derive(Debug, Default)]
pub struct BoardApi {
    store: OrderStore,
}

impl BoardApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_order(&mut self, fields: OrderFields) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, fields)
    }

    pub fn update_order(&mut self, id: &Uuid, fields: OrderFields) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, fields)
    }

    pub fn move_order(&mut self, id: &Uuid, target: Column) -> Result<commands::CmdResult> {
        commands::move_order::run(&mut self.store, id, target)
    }

    pub fn delete_order(&mut self, id: &Uuid) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn list_orders(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn seed_demo(&mut self, count: usize) -> Result<commands::CmdResult> {
        commands::seed::run(&mut self.store, count)
    }

    pub fn order(&self, id: &Uuid) -> Option<&Order> {
        self.store.order(id)
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    pub fn dragging(&self) -> DragState {
        self.store.dragging()
    }

    pub fn update_dragging(&mut self, patch: DragPatch) {
        self.store.update_dragging(patch);
    }

    pub fn take_dragging(&mut self) -> DragState {
        self.store.take_dragging()
    }
}
