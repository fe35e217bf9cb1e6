//! A POSIX-compatible `grep` with a parallel, worker-pool search engine.
//!
//! See `SPEC_FULL.md` for the component-by-component design; `DESIGN.md`
//! records what each module is grounded on.

pub mod app;
pub mod cancel;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod model;
pub mod option_context;
pub mod pool;
pub mod strategy;
pub mod tuner;
