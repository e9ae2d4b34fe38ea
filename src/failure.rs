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

//! Failures to resolve a property against a type
//!
//! A [`PathResolutionFailure`] is returned when one segment of a property path
//! has no matching property on the type being searched. It keeps the segments
//! that did resolve, so callers trying several interpretations of the same
//! path can surface the one that got furthest.

use crate::error::{Result, has_text, not_absent};
use crate::path::PropertyPath;
use crate::types::{TypeDescriptor, TypeInfo};
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

/// Resolved prefixes are rarely deeper than a handful of segments
type ResolvedPrefix<T> = SmallVec<[PropertyPath<T>; 4]>;

/// A property name that could not be found on a type
#[derive(Debug, Clone, PartialEq)]
pub struct PathResolutionFailure<T: TypeDescriptor = TypeInfo> {
    property_name: String,
    target_type: T,
    resolved_prefix: ResolvedPrefix<T>,
}

impl<T: TypeDescriptor> PathResolutionFailure<T> {
    /// Create a failure for `property_name` on `target_type`.
    ///
    /// `resolved_prefix` holds the paths resolved before the failure, root
    /// first. It is moved into the failure and never handed out mutably.
    pub fn new(
        property_name: impl Into<String>,
        target_type: T,
        resolved_prefix: impl IntoIterator<Item = PropertyPath<T>>,
    ) -> Result<Self> {
        let property_name = property_name.into();
        has_text(&property_name, "property_name")?;
        Ok(Self::build(property_name, target_type, resolved_prefix))
    }

    /// Like [`new`](Self::new), for callers whose target type may be absent.
    ///
    /// A blank property name is reported before a missing type.
    pub fn from_parts(
        property_name: impl Into<String>,
        target_type: Option<T>,
        resolved_prefix: impl IntoIterator<Item = PropertyPath<T>>,
    ) -> Result<Self> {
        let property_name = property_name.into();
        has_text(&property_name, "property_name")?;
        let target_type = not_absent(target_type, "target_type")?;
        Ok(Self::build(property_name, target_type, resolved_prefix))
    }

    fn build(
        property_name: String,
        target_type: T,
        resolved_prefix: impl IntoIterator<Item = PropertyPath<T>>,
    ) -> Self {
        let failure = Self {
            property_name,
            target_type,
            resolved_prefix: resolved_prefix.into_iter().collect(),
        };
        log::debug!(
            "Property '{}' not resolved on {} after {} segment(s)",
            failure.property_name,
            failure.target_type.simple_name(),
            failure.resolved_prefix.len()
        );
        failure
    }

    /// Name of the property that was not found. Never blank.
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// Type the property could not be found on
    pub fn target_type(&self) -> &T {
        &self.target_type
    }

    /// Paths resolved before the failure, root first
    pub fn resolved_prefix(&self) -> &[PropertyPath<T>] {
        &self.resolved_prefix
    }

    /// Number of paths resolved before the failure
    pub fn resolution_depth(&self) -> usize {
        self.resolved_prefix.len()
    }

    /// Human-readable description of the failure
    pub fn diagnostic_message(&self) -> String {
        self.to_string()
    }

    /// Deepest path resolved before the failure, if any
    pub fn base_path(&self) -> Option<&PropertyPath<T>> {
        self.resolved_prefix.last()
    }

    /// Whether this failure resolved strictly more segments than `other`
    pub fn has_deeper_resolution_depth_than(&self, other: &Self) -> bool {
        self.resolution_depth() > other.resolution_depth()
    }

    /// Pick the failure that progressed furthest.
    ///
    /// The earliest candidate wins among equally deep failures. Returns `None`
    /// when there are no candidates.
    pub fn deepest(failures: impl IntoIterator<Item = Self>) -> Option<Self> {
        let deepest = failures.into_iter().fold(None, |best: Option<Self>, candidate| match best {
            Some(current) if !candidate.has_deeper_resolution_depth_than(&current) => Some(current),
            _ => Some(candidate),
        });

        if let Some(failure) = &deepest {
            log::trace!(
                "Selected failure for '{}' at depth {}",
                failure.property_name,
                failure.resolution_depth()
            );
        }
        deepest
    }

    /// Snapshot of this failure for structured logging
    pub fn report(&self) -> FailureReport {
        FailureReport {
            property_name: self.property_name.clone(),
            type_name: self.target_type.qualified_name(),
            resolution_depth: self.resolution_depth(),
            traversed_path: self.resolved_prefix.first().map(PropertyPath::to_dot_path),
            message: self.diagnostic_message(),
        }
    }
}

impl<T: TypeDescriptor> fmt::Display for PathResolutionFailure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No property {} found for type {}!",
            self.property_name,
            self.target_type.simple_name()
        )?;

        if let Some(root) = self.resolved_prefix.first() {
            write!(f, " Traversed path: {root}.")?;
        }
        Ok(())
    }
}

impl<T: TypeDescriptor + fmt::Debug> std::error::Error for PathResolutionFailure<T> {}

/// Serializable summary of a [`PathResolutionFailure`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    /// Property that was not found
    pub property_name: String,
    /// Qualified name of the searched type
    pub type_name: String,
    /// Number of paths resolved before the failure
    pub resolution_depth: usize,
    /// Full traversal from the root, when anything resolved
    pub traversed_path: Option<String>,
    /// The diagnostic message
    pub message: String,
}
