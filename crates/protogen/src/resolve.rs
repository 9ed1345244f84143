//! Canonical values and aliases.
//!
//! Enum value names are normalized before they become identifiers in
//! generated code. A prefix repeating the enum's own name is stripped
//! (`COLOR_RED` in `Color` becomes `Red`), and each number keeps one canonical
//! name; later values with the same number become aliases of it.
//!
//! The first occurrence always wins. A value whose normalized name was
//! already taken by an earlier value is dropped, whatever its number.

use crate::descriptor::{EnumDescriptor, declared_values};
use crate::error::GenerateError;
use crate::naming::{camel_to_snake, screaming_snake_to_upper_camel, underscores_to_camel_case};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// A distinct enum number with its canonical name and aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Canonical `UpperCamel` name.
    pub name: String,
    pub number: i32,
    /// Later-declared names for the same number, in declaration order.
    pub aliases: Vec<String>,
}

/// Returns the canonical values of `desc`, one per distinct retained number,
/// in order of first appearance.
pub fn enum_values(desc: &dyn EnumDescriptor) -> Vec<EnumValue> {
    let enum_name = desc.name();
    let prefixes = [
        enum_name.to_string(),
        screaming_snake_to_upper_camel(enum_name),
        camel_to_snake(enum_name),
    ];

    let mut seen_by_name: HashSet<String> = HashSet::new();
    // Indices into `values`.
    let mut seen_by_number: HashMap<i32, usize> = HashMap::new();
    let mut values: Vec<EnumValue> = Vec::new();

    for value in declared_values(desc) {
        let name = value_name(value.name, &prefixes);

        if seen_by_name.contains(&name) {
            tracing::trace!(
                enum_name,
                value = value.name,
                normalized = %name,
                "dropping value with an already used name"
            );
            continue;
        }

        match seen_by_number.entry(value.number) {
            Entry::Occupied(entry) => {
                let canonical = &mut values[*entry.get()];
                tracing::trace!(
                    enum_name,
                    alias = %name,
                    canonical = %canonical.name,
                    number = value.number,
                    "recording alias"
                );
                canonical.aliases.push(name.clone());
            }
            Entry::Vacant(entry) => {
                entry.insert(values.len());
                values.push(EnumValue {
                    name: name.clone(),
                    number: value.number,
                    aliases: Vec::new(),
                });
            }
        }

        seen_by_name.insert(name);
    }

    values
}

/// Every distinct declared number in order of first appearance, including
/// numbers whose values were all dropped for reusing a name.
pub fn known_numbers(desc: &dyn EnumDescriptor) -> Vec<i32> {
    let mut seen = HashSet::new();
    declared_values(desc)
        .map(|value| value.number)
        .filter(|number| seen.insert(*number))
        .collect()
}

/// Generated identifier for a value named `value_name`, given the prefixes
/// derived from its enum's name.
fn value_name(value_name: &str, prefixes: &[String]) -> String {
    let mut base = strip_enum_prefix(value_name, prefixes);
    if base.is_empty() {
        // The value is named after the enum itself; keep the whole name.
        base = value_name;
    }

    let name = screaming_snake_to_upper_camel(base);
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name
    }
}

/// Strips the first matching prefix and one joining underscore.
fn strip_enum_prefix<'a>(value_name: &'a str, prefixes: &[String]) -> &'a str {
    for prefix in prefixes {
        if let Some(rest) = strip_prefix_ignore_ascii_case(value_name, prefix) {
            return rest.strip_prefix('_').unwrap_or(rest);
        }
    }
    value_name
}

fn strip_prefix_ignore_ascii_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        s.get(prefix.len()..)
    } else {
        None
    }
}

/// Everything an emitter needs to render one enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEnum {
    /// Generated type name.
    pub type_name: String,
    pub values: Vec<EnumValue>,
    /// Numbers accepted by a closed enum.
    pub known_numbers: Vec<i32>,
    /// Number of the first declared value.
    pub default_number: i32,
    pub is_closed: bool,
}

impl ResolvedEnum {
    /// Resolves `desc`, failing if it declares no values.
    pub fn resolve(desc: &dyn EnumDescriptor) -> Result<Self, GenerateError> {
        if desc.value_count() == 0 {
            return Err(GenerateError::EmptyEnum {
                name: desc.name().to_string(),
            });
        }

        Ok(Self {
            type_name: underscores_to_camel_case(desc.name(), true),
            values: enum_values(desc),
            known_numbers: known_numbers(desc),
            default_number: desc.value(0).number,
            is_closed: desc.is_closed(),
        })
    }
}
