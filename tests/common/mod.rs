//! Consolidated test utilities for tar-shell
//!
//! This module provides helpers for building real tar archives on disk and
//! predicates for checking shell output.

pub mod archive;
pub mod assertions;
