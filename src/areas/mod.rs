//! Remote repository access layers
//!
//! This module contains the building blocks for reading an exposed `.git`
//! directory over HTTP:
//!
//! - `remote`: Raw byte retrieval for relative paths (the transport seam)
//! - `database`: Remote object database (inflate, verify, parse dispatch)
//! - `refs`: HEAD and ref resolution
//! - `workspace`: Target directory file system operations
//! - `repository`: High-level scrape operations and coordination

pub mod database;
pub mod refs;
pub mod remote;
pub mod repository;
pub mod workspace;
