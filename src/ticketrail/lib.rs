//! # Ticketrail Architecture
//!
//! Ticketrail is a **UI-agnostic order board library**. This is not a TUI
//! application that happens to have some library code—it's a library that
//! happens to have a terminal client.
//!
//! ## The Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Terminal client (tui/, args.rs, wired by main.rs)          │
//! │  - Owns the terminal, the event loop, and all drawing       │
//! │  - Translates raw input into Action / PointerEvent values   │
//! │  - The ONLY place that knows about crossterm events         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Controller (controller.rs)                                 │
//! │  - BoardApp: the whole session state in one value           │
//! │  - Drag state machine + add/edit/delete/help flows          │
//! │  - Consumes typed events, never host events                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands and drag state                 │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, including field validation          │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State (store.rs, projection.rs)                            │
//! │  - OrderStore: id → order map plus the drag state           │
//! │  - BoardProjection: per-column card lanes for the view      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, state), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** assumes a terminal environment
//!
//! The controller keeps that property one level up: it sees semantic
//! [`action::Action`] values and [`regions::RegionFrame`] hit paths, so the
//! whole drag lifecycle is testable without a terminal.
//!
//! ## Module Overview
//!
//! - [`model`]: Core data types (`Order`, `OrderFields`, `Column`)
//! - [`store`]: The in-memory state store and drag state
//! - [`projection`]: Per-column card lanes derived from the store
//! - [`commands`]: Business logic for each operation
//! - [`api`]: The API facade—entry point for all operations
//! - [`controller`]: Session state and event handling
//! - [`overlay`], [`form`]: Modal overlay and form-editing state
//! - [`regions`], [`action`]: The typed input adapter surface
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod action;
pub mod api;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod model;
pub mod overlay;
pub mod projection;
pub mod regions;
pub mod store;
