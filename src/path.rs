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

//! Property paths
//!
//! A [`PropertyPath`] is an owned chain of property segments, each tagged with
//! the type that declares it. Paths are assembled segment by segment by the
//! code that walks a type's property graph; no textual parsing happens here.

use crate::error::{ContractViolation, Result, has_text};
use crate::types::TypeInfo;
use serde::Serialize;
use std::fmt;

/// Separator between segments in the textual form of a path
pub const SEGMENT_SEPARATOR: char = '.';

/// A chain of resolved property segments.
///
/// `T` describes the type declaring each segment and matches the descriptor
/// used by [`PathResolutionFailure`](crate::PathResolutionFailure).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PropertyPath<T = TypeInfo> {
    segment: String,
    owning_type: T,
    next: Option<Box<PropertyPath<T>>>,
}

impl<T> PropertyPath<T> {
    /// Create a single-segment path for `segment` declared on `owning_type`
    pub fn new(segment: impl Into<String>, owning_type: T) -> Result<Self> {
        let segment = segment.into();
        validate_segment(&segment)?;
        Ok(Self {
            segment,
            owning_type,
            next: None,
        })
    }

    /// Append `segment` (declared on `owning_type`) after the current leaf
    pub fn nested(mut self, segment: impl Into<String>, owning_type: T) -> Result<Self> {
        let tail = PropertyPath::new(segment, owning_type)?;
        self.attach_leaf(tail);
        Ok(self)
    }

    fn attach_leaf(&mut self, tail: PropertyPath<T>) {
        match self.next {
            Some(ref mut next) => next.attach_leaf(tail),
            None => self.next = Some(Box::new(tail)),
        }
    }

    /// Property name at this position
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Type declaring the property at this position
    pub fn owning_type(&self) -> &T {
        &self.owning_type
    }

    /// The nested path, if any
    pub fn next(&self) -> Option<&PropertyPath<T>> {
        self.next.as_deref()
    }

    /// Whether a nested path follows this segment
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// The last segment of the chain
    pub fn leaf(&self) -> &PropertyPath<T> {
        self.iter().last().unwrap_or(self)
    }

    /// Number of segments from this position to the leaf
    pub fn depth(&self) -> usize {
        self.iter().count()
    }

    /// Iterate over each position from this one down to the leaf
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: Some(self),
        }
    }

    /// Segments from this position joined by [`SEGMENT_SEPARATOR`]
    pub fn to_dot_path(&self) -> String {
        self.to_string()
    }
}

impl<T: Clone> PropertyPath<T> {
    /// Sub-paths starting at each position, root first.
    ///
    /// The first entry renders the whole chain and the last entry is the leaf
    /// segment alone.
    pub fn resolved_chain(&self) -> Vec<PropertyPath<T>> {
        self.iter().cloned().collect()
    }
}

fn validate_segment(segment: &str) -> Result<()> {
    has_text(segment, "segment")?;
    if segment.contains(SEGMENT_SEPARATOR) {
        return Err(ContractViolation::invalid_segment(segment));
    }
    Ok(())
}

impl<T> fmt::Display for PropertyPath<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for position in self.iter() {
            if !first {
                write!(f, "{SEGMENT_SEPARATOR}")?;
            }
            write!(f, "{}", position.segment)?;
            first = false;
        }
        Ok(())
    }
}

/// Iterator over the positions of a [`PropertyPath`]
pub struct Iter<'a, T> {
    current: Option<&'a PropertyPath<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a PropertyPath<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = current.next();
        Some(current)
    }
}

impl<'a, T> IntoIterator for &'a PropertyPath<T> {
    type Item = &'a PropertyPath<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
