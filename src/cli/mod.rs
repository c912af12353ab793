//! Option registry, argument parser and usage renderer.
//!
//! This module organises the full pipeline:
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Shared display-level atomic and the `displayout!` / `display!` / `displaylevel!` macros. |
//! | [`error`]     | `CmdLineError` — every failure the registry, parser and accessors can report. |
//! | [`registry`]  | `OptionItem` and `Registry` — declared options plus the short/long alias index. |
//! | [`coerce`]    | `OptionValue` — best-effort conversion of stored option text into typed values. |
//! | [`help`]      | Usage text rendering and the exit helpers binaries use for help / missing options. |
//! | [`parser`]    | `CmdLine` — registration front-end, the flag/value state machine and typed accessors. |
//!
//! Typical call sequence: `CmdLine::new` → `CmdLine::register` (repeatedly) →
//! `CmdLine::parse` → `CmdLine::get`.

pub mod constants;
pub mod error;
pub mod registry;
pub mod coerce;
pub mod help;
pub mod parser;
