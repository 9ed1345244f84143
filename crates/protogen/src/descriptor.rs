//! Read-only access to enum schemas.
//!
//! Generators only see schemas through [`EnumDescriptor`], so any schema
//! representation (a parsed `.proto` file, a descriptor set, a test fixture)
//! can be plugged in. [`EnumSchema`] is the plain-data implementation.

use serde::{Deserialize, Serialize};

/// An enum as declared in a schema.
pub trait EnumDescriptor {
    /// The enum's name as written in the schema.
    fn name(&self) -> &str;

    /// Whether numbers outside the declared set are rejected on decode.
    fn is_closed(&self) -> bool;

    /// Number of declared values, duplicates included.
    fn value_count(&self) -> usize;

    /// The declared value at `index`, in declaration order.
    ///
    /// Implementations may panic if `index >= self.value_count()`.
    fn value(&self, index: usize) -> EnumValueRef<'_>;
}

/// A declared value borrowed from a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValueRef<'a> {
    pub name: &'a str,
    pub number: i32,
}

/// Iterates the declared values of `desc` in declaration order.
pub fn declared_values(desc: &dyn EnumDescriptor) -> impl Iterator<Item = EnumValueRef<'_>> {
    (0..desc.value_count()).map(move |i| desc.value(i))
}

/// An enum schema held in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumSchema {
    /// Enum name (e.g., "Color", "my_enum").
    pub name: String,
    /// Closed enums reject undeclared numbers.
    #[serde(default, rename = "closed")]
    pub is_closed: bool,
    /// Declared values in declaration order.
    pub values: Vec<DeclaredValue>,
}

/// A single declared value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredValue {
    /// Symbolic name as written in the schema (e.g., "COLOR_RED").
    pub name: String,
    pub number: i32,
}

impl EnumSchema {
    /// An open enum with no values yet.
    pub fn open(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_closed: false,
            values: Vec::new(),
        }
    }

    /// A closed enum with no values yet.
    pub fn closed(name: impl Into<String>) -> Self {
        Self {
            is_closed: true,
            ..Self::open(name)
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, number: i32) -> Self {
        self.add_value(name, number);
        self
    }

    pub fn add_value(&mut self, name: impl Into<String>, number: i32) {
        self.values.push(DeclaredValue {
            name: name.into(),
            number,
        });
    }
}

impl EnumDescriptor for EnumSchema {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_closed(&self) -> bool {
        self.is_closed
    }

    fn value_count(&self) -> usize {
        self.values.len()
    }

    fn value(&self, index: usize) -> EnumValueRef<'_> {
        let value = &self.values[index];
        EnumValueRef {
            name: &value.name,
            number: value.number,
        }
    }
}
