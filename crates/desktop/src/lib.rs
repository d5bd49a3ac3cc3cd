//! `stocktrack-desktop`
//!
//! **Responsibility:** the application shell around the stock domain.
//!
//! This crate provides:
//! - Workflows composing validation, lookups and persistence ([`Inventory`])
//! - Raw form input validation
//! - Configuration (file locations, log format)
//! - A command-line front-end standing in for the form UI
//!
//! Front-ends call the workflow operations and render the returned outcome
//! or error; they hold no domain logic of their own.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod inventory;
pub mod outcome;

pub use config::DesktopConfig;
pub use error::WorkflowError;
pub use inventory::Inventory;
pub use outcome::{OrderPlaced, PriceQuote, StockUpdated};
