//! # RentHub Architecture
//!
//! RentHub is a **UI-agnostic rental-listing library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (wired by main.rs + args.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns session state (the favorites set)                   │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a REST API, a browser app, or any
//! other UI.
//!
//! ## The Two Hinges
//!
//! Two pieces of logic carry the domain; everything else is glue:
//!
//! - [`search`]: the filter engine. A pure function from (listings, query,
//!   filters) to a stable, order-preserving subsequence.
//! - [`lease`]: the lease status machine. Every status/signature mutation
//!   funnels through its transition table; illegal actions are rejected,
//!   never silently ignored.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of business logic
//!    over `InMemoryStore`. This is where the lion's share of testing lives.
//! 2. **Engine modules** (`search.rs`, `lease.rs`): property-style unit tests
//!    against the built-in fixture.
//! 3. **CLI** (`main.rs` + `tests/`): end-to-end tests run the binary against
//!    a temp `RENTHUB_HOME`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Property`, `LeaseAgreement`, `Favorites`)
//! - [`search`]: Filter engine and `SearchFilters`
//! - [`lease`]: Lease status machine
//! - [`seed`]: Built-in sample fixture
//! - [`config`]: Display configuration
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod lease;
pub mod model;
pub mod search;
pub mod seed;
pub mod store;
