//! Data types and algorithms for remote repository scraping
//!
//! This module contains the core types and traversal logic:
//!
//! - `locator`: Repository URL validation and canonicalization
//! - `manifest`: The flat file list produced by the walk
//! - `materialize`: Writing manifest entries to a target directory
//! - `objects`: Git object types (blob, tree, commit) and their wire formats
//! - `walker`: Recursive commit→tree→blob graph traversal

pub mod locator;
pub mod manifest;
pub mod materialize;
pub mod objects;
pub mod walker;
