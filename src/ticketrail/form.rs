//! Text editing state for the add and edit overlays.
//!
//! [`TextField`] keeps a char-indexed cursor (`0..=char_count`) so editing is
//! safe for multi-byte input; [`OrderForm`] groups the title/table fields,
//! the column selector, and the focus ring.

use crate::model::{Column, Order, OrderFields};

#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Convert the char-index cursor to a byte index.
    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_offset(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// The value with a caret glyph inserted at the cursor, for rendering.
    pub fn with_caret(&self) -> String {
        let mut text = self.value.clone();
        text.insert_str(self.byte_offset(self.cursor), "▌");
        text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Table,
    Column,
}

/// The add/edit form: the add variant has no column selector (new orders are
/// pinned to the initial column), the edit variant has all three fields.
#[derive(Debug, Clone)]
pub struct OrderForm {
    pub title: TextField,
    pub table: TextField,
    pub column: Column,
    pub focus: FormField,
    has_column_field: bool,
}

impl OrderForm {
    pub fn add() -> Self {
        Self {
            title: TextField::default(),
            table: TextField::default(),
            column: Column::INITIAL,
            focus: FormField::Title,
            has_column_field: false,
        }
    }

    pub fn edit(order: &Order) -> Self {
        Self {
            title: TextField::new(order.title.clone()),
            table: TextField::new(order.table.clone()),
            column: order.column,
            focus: FormField::Title,
            has_column_field: true,
        }
    }

    pub fn has_column_field(&self) -> bool {
        self.has_column_field
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Table,
            FormField::Table if self.has_column_field => FormField::Column,
            FormField::Table => FormField::Title,
            FormField::Column => FormField::Title,
        };
    }

    pub fn prev_field(&mut self) {
        self.focus = match self.focus {
            FormField::Title if self.has_column_field => FormField::Column,
            FormField::Title => FormField::Table,
            FormField::Table => FormField::Title,
            FormField::Column => FormField::Table,
        };
    }

    /// The text field under focus, `None` when the column selector is focused.
    pub fn active_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            FormField::Title => Some(&mut self.title),
            FormField::Table => Some(&mut self.table),
            FormField::Column => None,
        }
    }

    pub fn cycle_column(&mut self, forward: bool) {
        if forward {
            self.column = self.column.cycle_next();
        } else {
            self.column = self.column.cycle_prev();
        }
    }

    /// The form contents as order fields, whitespace-trimmed.
    pub fn fields(&self) -> OrderFields {
        OrderFields {
            title: self.title.value().trim().to_string(),
            table: self.table.value().trim().to_string(),
            column: self.column,
        }
    }
}
