//! folio: a single-page portfolio in the terminal.
//!
//! The page is one continuously-scrolling document. A section tracker watches the scroll offset
//! to decide which section is active, and the navigation bar highlights that section and
//! smooth-scrolls to any section it is asked for.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod content;
pub mod layout;
pub mod navigation;
pub mod registry;
pub mod section;
pub mod theme;
pub mod tracker;
pub mod ui;
pub mod viewport;
