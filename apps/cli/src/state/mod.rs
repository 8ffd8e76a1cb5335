//! # State Module
//!
//! Session state for the CLI host.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │   Catalog    │  │    CartState     │  │   ConfigState    │          │
//! │  │ (core type)  │  │                  │  │                  │          │
//! │  │  fixed list  │  │  Cart (owned)    │  │  currency        │          │
//! │  │  read only   │  │  session_id      │  │  separators      │          │
//! │  │              │  │  started_at      │  │  output format   │          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  Catalog and ConfigState are read-only after startup; CartState is    │
//! │  mutated only through `CartState::apply`.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::CartState;
pub use config::{ConfigError, ConfigState, OutputFormat, MAX_CURRENCY_DECIMALS};
