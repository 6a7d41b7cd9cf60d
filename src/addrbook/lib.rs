//! # Addrbook Architecture
//!
//! Addrbook is a small address-book assistant: contacts with phones and an
//! optional birthday, edited through a line-oriented command loop and saved
//! to one file between sessions. Like any library-with-a-CLI, the core knows
//! nothing about terminals.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front end (main.rs, repl.rs, ui.rs)                        │
//! │  - Reads lines, prints messages, owns exit codes            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses a line, dispatches, turns errors into messages    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure functions over (arguments, AddressBook)             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model + Storage (model.rs, book.rs, store/)                │
//! │  - Validated field types, the book, load/save               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, one `execute` call per input line
//! - [`commands`]: Business logic for each command
//! - [`book`]: The address book and the upcoming-birthday query
//! - [`model`]: Field types (`Name`, `Phone`, `Birthday`) and `Record`
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`init`]: Startup wiring (config dir, data file, API)
//! - [`repl`]: The interactive loop
//! - [`ui`]: Output interface and its console implementation
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod repl;
pub mod store;
pub mod ui;
