//! # calc-client: Calculator Front-End Logic
//!
//! Drives the keypad state machine from `calc-core`, sends calculations to a
//! backend, and keeps the history and error banner a front end renders.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Front end (CLI, GUI, tests)                                            │
//! │        │ Input / key                        ▲ Screen                    │
//! │        ▼                                    │                           │
//! │  ┌───────────────────────────────────────────────────────────────────┐ │
//! │  │  Calculator (calculator.rs)                                       │ │
//! │  │  InputMachine + History + error banner + loading guard            │ │
//! │  └────────────────────────────┬──────────────────────────────────────┘ │
//! │                               │ ArithmeticQuery                         │
//! │                               ▼                                         │
//! │  ┌───────────────────────────────────────────────────────────────────┐ │
//! │  │  Arc<dyn ArithmeticBackend> (backend.rs)                          │ │
//! │  │  HttpBackend ─► GET /arithmetic        LocalBackend ─► evaluate   │ │
//! │  └───────────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod backend;
pub mod calculator;
pub mod config;
pub mod error;
pub mod http;

pub use backend::{ArithmeticBackend, LocalBackend};
pub use calculator::{Calculator, Screen};
pub use config::{ClientConfig, ConfigError};
pub use error::{ClientError, ClientResult};
pub use http::HttpBackend;
