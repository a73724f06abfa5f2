//! # State Module
//!
//! Application state for the storefront shell.
//!
//! ## Why Separate State Types?
//! Each command takes exactly the state it needs: catalog lookups take the
//! read-only [`Catalog`](beesy_core::Catalog), cart changes take
//! `&mut SessionState`, rendering takes `&ConfigState`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │   Catalog    │  │  SessionState    │  │   ConfigState    │          │
//! │  │  (static,    │  │  Session {       │  │  store_name      │          │
//! │  │   read only) │  │    view, cart }  │  │  currency_symbol │          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  • Catalog: fixed at build time                                         │
//! │  • SessionState: owned by the shell, mutated only via dispatch          │
//! │  • ConfigState: read-only after startup                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::ConfigState;
pub use session::SessionState;
