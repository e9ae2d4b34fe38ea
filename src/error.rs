// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Argument contract errors
//!
//! A [`ContractViolation`] means the calling code handed invalid arguments to a
//! constructor. It is a defect in the caller, never an ordinary resolution
//! outcome, and should be propagated rather than retried.

use thiserror::Error;

/// Result type alias for constructors that validate their arguments
pub type Result<T> = std::result::Result<T, ContractViolation>;

/// Invalid arguments supplied by the caller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// A required string argument was empty or whitespace-only
    #[error("Argument '{argument}' must contain text")]
    BlankArgument {
        /// Name of the offending argument
        argument: &'static str,
    },

    /// A required argument was absent
    #[error("Argument '{argument}' must be present")]
    MissingArgument {
        /// Name of the offending argument
        argument: &'static str,
    },

    /// A path segment contained the segment separator
    #[error("Invalid path segment '{segment}': segments must not contain '.'")]
    InvalidSegment {
        /// The rejected segment
        segment: String,
    },
}

impl ContractViolation {
    /// Create a blank argument error
    pub fn blank_argument(argument: &'static str) -> Self {
        Self::BlankArgument { argument }
    }

    /// Create a missing argument error
    pub fn missing_argument(argument: &'static str) -> Self {
        Self::MissingArgument { argument }
    }

    /// Create an invalid segment error
    pub fn invalid_segment(segment: impl Into<String>) -> Self {
        Self::InvalidSegment {
            segment: segment.into(),
        }
    }
}

/// Require `value` to contain at least one non-whitespace character
pub fn has_text(value: &str, argument: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        log::debug!("Rejected blank argument '{argument}'");
        return Err(ContractViolation::blank_argument(argument));
    }
    Ok(())
}

/// Require `value` to be present, returning the inner value
pub fn not_absent<T>(value: Option<T>, argument: &'static str) -> Result<T> {
    value.ok_or_else(|| {
        log::debug!("Rejected missing argument '{argument}'");
        ContractViolation::missing_argument(argument)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_text() {
        assert!(has_text("city", "name").is_ok());
        assert!(has_text("  city ", "name").is_ok());
        assert_eq!(
            has_text("", "name"),
            Err(ContractViolation::BlankArgument { argument: "name" })
        );
        assert_eq!(
            has_text(" \t\n", "name"),
            Err(ContractViolation::BlankArgument { argument: "name" })
        );
    }

    #[test]
    fn test_not_absent() {
        assert_eq!(not_absent(Some(3), "value"), Ok(3));
        assert_eq!(
            not_absent::<i32>(None, "value"),
            Err(ContractViolation::MissingArgument { argument: "value" })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContractViolation::blank_argument("property_name").to_string(),
            "Argument 'property_name' must contain text"
        );
        assert_eq!(
            ContractViolation::missing_argument("target_type").to_string(),
            "Argument 'target_type' must be present"
        );
        assert_eq!(
            ContractViolation::invalid_segment("a.b").to_string(),
            "Invalid path segment 'a.b': segments must not contain '.'"
        );
    }
}
