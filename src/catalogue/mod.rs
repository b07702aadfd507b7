//! Catalogue Module
//!
//! Turns an uploaded (or preloaded) catalogue file into platform records and
//! hands them to the location index.
//!
//! ## Format
//! One platform per line: `Name:/loc1,/loc2`. Blank lines and malformed lines
//! (wrong field count, empty name, no locations) are dropped silently.
//!
//! ## Workflow
//! 1. **Read**: Multipart upload or file on disk.
//! 2. **Parse**: Lines are split into `Platform` records.
//! 3. **Rebuild**: The index replaces its generation with the new records.

pub mod handlers;
pub mod loader;
pub mod parser;
pub mod types;
