//! validate-methods - NVAPI method consistency checker
//!
//! A build-time tool that cross-references three views of the same set of
//! NVAPI entry points and fails the build when they drift apart:
//!
//! - methods implemented with the `NvAPI_Status __cdecl` signature
//! - methods dispatched by the lookup function between its region markers
//! - methods registered in the static interface table header
//!
//! ## Module Structure
//!
//! - `check`: Reads the sources and runs extraction plus validation
//! - `cli`: Command-line interface layer (arguments, reporting, exit codes)
//! - `config`: Configuration file loading and parsing
//! - `diagnostics`: Failure headlines and per-method notes
//! - `extract`: Line-based extractors for each source convention
//! - `methods`: Ordered method-name sequences
//! - `sources`: Input path roles, glob expansion and file reading
//! - `validate`: Cross-reference checks and their outcome

pub mod check;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod extract;
pub mod methods;
pub mod sources;
pub mod validate;
