//! Core data types: [`Order`], [`OrderFields`], and the [`Column`] status set.
//!
//! An order is a single kitchen ticket: what was ordered, which table wants
//! it, and where it sits in the ordered → preparing → ready → delivered flow.
//! Orders live exclusively in the store; everything else works with id
//! projections or cloned snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::BoardError;

/// The status columns of the board, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Ordered,
    Preparing,
    Ready,
    Delivered,
}

impl Column {
    pub const ALL: [Column; 4] = [
        Column::Ordered,
        Column::Preparing,
        Column::Ready,
        Column::Delivered,
    ];

    /// Every new order starts here.
    pub const INITIAL: Column = Column::Ordered;

    /// Stable machine-readable key, also the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            Column::Ordered => "ordered",
            Column::Preparing => "preparing",
            Column::Ready => "ready",
            Column::Delivered => "delivered",
        }
    }

    /// Human-readable column heading.
    pub fn label(self) -> &'static str {
        match self {
            Column::Ordered => "Ordered",
            Column::Preparing => "Preparing",
            Column::Ready => "Ready",
            Column::Delivered => "Delivered",
        }
    }

    pub fn position(self) -> usize {
        match self {
            Column::Ordered => 0,
            Column::Preparing => 1,
            Column::Ready => 2,
            Column::Delivered => 3,
        }
    }

    /// Next column in pipeline order, `None` at the end.
    pub fn next(self) -> Option<Column> {
        Column::ALL.get(self.position() + 1).copied()
    }

    /// Previous column in pipeline order, `None` at the start.
    pub fn prev(self) -> Option<Column> {
        self.position().checked_sub(1).map(|i| Column::ALL[i])
    }

    /// Wrapping successor, used by the edit form's column field.
    pub fn cycle_next(self) -> Column {
        Column::ALL[(self.position() + 1) % Column::ALL.len()]
    }

    /// Wrapping predecessor, used by the edit form's column field.
    pub fn cycle_prev(self) -> Column {
        let len = Column::ALL.len();
        Column::ALL[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Column {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ordered" => Ok(Column::Ordered),
            "preparing" => Ok(Column::Preparing),
            "ready" => Ok(Column::Ready),
            "delivered" => Ok(Column::Delivered),
            other => Err(BoardError::Api(format!("Unknown column: {}", other))),
        }
    }
}

/// A single order ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub title: String,
    pub table: String,
    pub column: Column,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn new(fields: OrderFields) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            table: fields.table,
            column: fields.column,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// The writable fields of an order, used for both creation and updates.
#[derive(Debug, Clone)]
pub struct OrderFields {
    pub title: String,
    pub table: String,
    pub column: Column,
}

impl OrderFields {
    /// Fields for a brand-new order: column pinned to [`Column::INITIAL`].
    pub fn draft(title: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            table: table.into(),
            column: Column::INITIAL,
        }
    }

    pub fn with_column(mut self, column: Column) -> Self {
        self.column = column;
        self
    }
}
