//! Property path resolution failures
//!
//! Error values describing a property that could not be found while resolving
//! a dotted property path (such as `address.city`) against a type, together
//! with the property path and type description types they refer to.

#![warn(missing_docs)]

pub mod error;
pub mod failure;
pub mod path;
pub mod types;

pub use error::{ContractViolation, Result};
pub use failure::{FailureReport, PathResolutionFailure};
pub use path::{PropertyPath, SEGMENT_SEPARATOR};
pub use types::{TypeDescriptor, TypeInfo};
