//! ui
//!
//! Output formatting utilities.
//!
//! # Design
//!
//! All user-facing output goes through this module so that verbosity
//! flags are honored consistently: reports and progress lines respect
//! `--quiet`, diagnostics appear only with `--debug`, and errors are
//! always shown.

pub mod output;
