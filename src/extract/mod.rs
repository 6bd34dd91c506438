//! Method-name extractors.
//!
//! Each extractor is a pure function from source text to a [`MethodSequence`],
//! matching one narrow line-anchored convention:
//!
//! - `declarations`: `NvAPI_Status __cdecl Name(...)` in implementation sources
//! - `dispatch`: `MACRO(Name)` lines between the region markers of the lookup function
//! - `availability`: `{ "Name", id },` rows of the static interface table
//!
//! [`MethodSequence`]: crate::methods::MethodSequence

mod availability;
mod declarations;
mod dispatch;

pub use availability::extract_availability;
pub use declarations::{
    DEFAULT_CALLING_CONVENTION, DEFAULT_RETURN_TYPE, DeclarationRule, extract_declarations,
};
pub use dispatch::{
    DEFAULT_END_MARKER, DEFAULT_START_MARKER, RegionMarkers, extract_dispatch_entries,
};
