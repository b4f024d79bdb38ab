//! # Core Browser Logic
//!
//! This module contains fbrowse's navigation logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Navigator (state)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • render() (view)      │
//!                    │                         │
//!                    │  I/O only via lister.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │  FsLister  │
//!            │  Adapter   │            │ (read_dir) │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Navigator` struct, all browser state in one place
//! - [`action`]: The `Action` enum and the `update()` transition function
//! - [`view`]: Pure rendering of a `Navigator`
//! - [`listing`]: The `DirectoryLister` seam and its filesystem impl
//! - [`error`]: `NavError`, split into fatal and recoverable failures

pub mod action;
pub mod config;
pub mod entry;
pub mod error;
pub mod listing;
pub mod state;
pub mod view;
