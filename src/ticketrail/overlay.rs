//! Modal overlay state: add, edit, confirm-delete, and help.
//!
//! At most one overlay is open at a time. Open and close operations are
//! idempotent: closing a closed overlay is a no-op, re-opening the overlay
//! that is already showing keeps its state (typed form input survives).

use uuid::Uuid;

use crate::form::OrderForm;

#[derive(Debug)]
pub enum Overlay {
    Add { form: OrderForm },
    Edit { id: Uuid, form: OrderForm },
    ConfirmDelete { id: Uuid },
    Help,
}

#[derive(Debug, Default)]
pub struct OverlayState {
    current: Option<Overlay>,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Overlay> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut Overlay> {
        self.current.as_mut()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn open_add(&mut self) {
        if matches!(self.current, Some(Overlay::Add { .. })) {
            return;
        }
        self.current = Some(Overlay::Add {
            form: OrderForm::add(),
        });
    }

    pub fn open_edit(&mut self, id: Uuid, form: OrderForm) {
        if matches!(self.current, Some(Overlay::Edit { id: open, .. }) if open == id) {
            return;
        }
        self.current = Some(Overlay::Edit { id, form });
    }

    pub fn open_confirm_delete(&mut self, id: Uuid) {
        self.current = Some(Overlay::ConfirmDelete { id });
    }

    pub fn toggle_help(&mut self) {
        if matches!(self.current, Some(Overlay::Help)) {
            self.current = None;
        } else {
            self.current = Some(Overlay::Help);
        }
    }

    /// Close whatever is open, returning it. `None` if nothing was open.
    pub fn close(&mut self) -> Option<Overlay> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Order, OrderFields};

    #[test]
    fn close_on_closed_is_a_no_op() {
        let mut overlays = OverlayState::new();
        assert!(overlays.close().is_none());
        assert!(!overlays.is_open());
    }

    #[test]
    fn reopening_add_keeps_form_state() {
        let mut overlays = OverlayState::new();
        overlays.open_add();
        if let Some(Overlay::Add { form }) = overlays.current_mut() {
            form.title.insert('x');
        }

        overlays.open_add();
        match overlays.current() {
            Some(Overlay::Add { form }) => assert_eq!(form.title.value(), "x"),
            other => panic!("expected add overlay, got {:?}", other),
        }
    }

    #[test]
    fn help_toggle_is_symmetric() {
        let mut overlays = OverlayState::new();
        overlays.toggle_help();
        assert!(matches!(overlays.current(), Some(Overlay::Help)));
        overlays.toggle_help();
        assert!(!overlays.is_open());
    }

    #[test]
    fn opening_replaces_a_different_overlay() {
        let order = Order::new(OrderFields::draft("Burger", "4"));
        let mut overlays = OverlayState::new();
        overlays.toggle_help();
        overlays.open_edit(order.id, OrderForm::edit(&order));
        assert!(matches!(overlays.current(), Some(Overlay::Edit { .. })));
    }

    #[test]
    fn close_returns_the_open_overlay() {
        let mut overlays = OverlayState::new();
        overlays.open_add();
        assert!(matches!(overlays.close(), Some(Overlay::Add { .. })));
        assert!(overlays.close().is_none());
    }
}
