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

//! Type descriptions used when reporting unresolved properties

use serde::Serialize;
use std::fmt;

/// Describes a type that properties are resolved against
pub trait TypeDescriptor {
    /// Short, non-qualified, human-readable name of the type
    fn simple_name(&self) -> String;

    /// Fully qualified name of the type
    fn qualified_name(&self) -> String {
        self.simple_name()
    }
}

/// Type information for property owners and property values
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TypeInfo {
    /// Boolean value (true/false)
    Boolean,
    /// Integer numeric value
    Integer,
    /// Decimal numeric value
    Decimal,
    /// String value
    String,
    /// Date value (YYYY-MM-DD)
    Date,
    /// DateTime value with timezone information
    DateTime,

    /// Collection type with element type
    Collection(Box<TypeInfo>),

    /// Optional type (may be empty)
    Optional(Box<TypeInfo>),

    /// Named type with namespace
    Named {
        /// Type namespace
        namespace: String,
        /// Type name
        name: String,
    },
}

impl TypeInfo {
    /// Create a collection type
    pub fn collection(element_type: TypeInfo) -> Self {
        TypeInfo::Collection(Box::new(element_type))
    }

    /// Create an optional type
    pub fn optional(inner_type: TypeInfo) -> Self {
        TypeInfo::Optional(Box::new(inner_type))
    }

    /// Create a named type
    pub fn named(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeInfo::Named {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Create a named type from a dotted qualified name such as
    /// `com.example.Address`. Everything before the last `.` is the namespace.
    pub fn parse_qualified(qualified: &str) -> Self {
        match qualified.rsplit_once('.') {
            Some((namespace, name)) => Self::named(namespace, name),
            None => Self::named("", qualified),
        }
    }

    fn render(&self, qualified: bool) -> String {
        match self {
            TypeInfo::Boolean => "Boolean".to_string(),
            TypeInfo::Integer => "Integer".to_string(),
            TypeInfo::Decimal => "Decimal".to_string(),
            TypeInfo::String => "String".to_string(),
            TypeInfo::Date => "Date".to_string(),
            TypeInfo::DateTime => "DateTime".to_string(),
            TypeInfo::Collection(elem) => format!("Collection<{}>", elem.render(qualified)),
            TypeInfo::Optional(inner) => format!("Optional<{}>", inner.render(qualified)),
            TypeInfo::Named { namespace, name } => {
                if !qualified || namespace.is_empty() {
                    name.clone()
                } else {
                    format!("{namespace}.{name}")
                }
            }
        }
    }
}

impl TypeDescriptor for TypeInfo {
    fn simple_name(&self) -> String {
        self.render(false)
    }

    fn qualified_name(&self) -> String {
        self.render(true)
    }
}

impl<T: TypeDescriptor + ?Sized> TypeDescriptor for &T {
    fn simple_name(&self) -> String {
        (**self).simple_name()
    }

    fn qualified_name(&self) -> String {
        (**self).qualified_name()
    }
}

impl<T: TypeDescriptor + ?Sized> TypeDescriptor for std::sync::Arc<T> {
    fn simple_name(&self) -> String {
        (**self).simple_name()
    }

    fn qualified_name(&self) -> String {
        (**self).qualified_name()
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name_strips_namespace() {
        let address = TypeInfo::named("com.example", "Address");
        assert_eq!(address.simple_name(), "Address");
        assert_eq!(address.qualified_name(), "com.example.Address");
        assert_eq!(address.to_string(), "com.example.Address");
    }

    #[test]
    fn test_parse_qualified() {
        assert_eq!(
            TypeInfo::parse_qualified("com.example.Address"),
            TypeInfo::named("com.example", "Address")
        );
        assert_eq!(
            TypeInfo::parse_qualified("Address"),
            TypeInfo::named("", "Address")
        );
        assert_eq!(TypeInfo::parse_qualified("Address").qualified_name(), "Address");
    }

    #[test]
    fn test_wrapped_types() {
        let addresses = TypeInfo::collection(TypeInfo::named("com.example", "Address"));
        assert_eq!(addresses.simple_name(), "Collection<Address>");
        assert_eq!(addresses.qualified_name(), "Collection<com.example.Address>");

        let maybe = TypeInfo::optional(TypeInfo::collection(TypeInfo::String));
        assert_eq!(maybe.simple_name(), "Optional<Collection<String>>");
        assert_eq!(maybe.qualified_name(), "Optional<Collection<String>>");
    }

    fn names<D: TypeDescriptor>(descriptor: D) -> (String, String) {
        (descriptor.simple_name(), descriptor.qualified_name())
    }

    #[test]
    fn test_descriptor_through_references() {
        let info = std::sync::Arc::new(TypeInfo::named("app", "Person"));
        assert_eq!(names(info), ("Person".to_string(), "app.Person".to_string()));
        assert_eq!(
            names(&TypeInfo::Integer),
            ("Integer".to_string(), "Integer".to_string())
        );
    }
}
