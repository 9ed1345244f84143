//! Rust enum generator.
//!
//! Each enum becomes a `#[repr(transparent)]` newtype over `i32` with one
//! associated constant per value and alias, plus impls of the runtime enum
//! protocol from `protogen-runtime`.
//!
//! Open enums convert from any `i32` with `From`. Closed enums implement
//! `TryFrom<i32>` and reject numbers that were never declared.

use crate::config::RustOptions;
use crate::descriptor::EnumDescriptor;
use crate::error::GenerateError;
use crate::printer::Printer;
use crate::resolve::ResolvedEnum;
use crate::template::{Template, Vars};
use crate::traits::Backend;

/// Static instance of the Rust backend with default runtime paths.
pub static RUST_BACKEND: RustBackend = RustBackend::new(RustOptions::DEFAULT);

/// Rust code generator backend.
#[derive(Debug, Clone)]
pub struct RustBackend {
    options: RustOptions,
}

impl RustBackend {
    pub const fn new(options: RustOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RustOptions {
        &self.options
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new(RustOptions::default())
    }
}

impl Backend for RustBackend {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn language(&self) -> &'static str {
        "rust"
    }

    fn extension(&self) -> &'static str {
        "rs"
    }

    fn generate_enum(
        &self,
        desc: &dyn EnumDescriptor,
        printer: &mut Printer,
    ) -> Result<(), GenerateError> {
        generate_rust_enum(desc, &self.options, printer)
    }
}

const OPEN_FROM_I32: &str = r#"
    impl $std$::convert::From<i32> for $name$ {
        fn from(val: i32) -> $name$ {
            Self(val)
        }
    }
"#;

const CLOSED_TRY_FROM_I32: &str = r#"
    impl $std$::convert::TryFrom<i32> for $name$ {
        type Error = $pb$::UnknownEnumValue<Self>;

        fn try_from(val: i32) -> $std$::result::Result<$name$, Self::Error> {
            if matches!(val, $known_values_pattern$) {
                Ok(Self(val))
            } else {
                Err($pb$::UnknownEnumValue::new($pbi$::Private, val))
            }
        }
    }
"#;

const ENUM_DEFINITION: &str = r#"
    #[repr(transparent)]
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct $name$(i32);

    #[allow(non_upper_case_globals)]
    impl $name$ {
        $for values$
        pub const $variant_name$: $name$ = $name$($number$);
        $for aliases$
        pub const $alias_name$: $name$ = $name$($number$);
        $end$
        $end$
    }

    impl $std$::convert::From<$name$> for i32 {
        fn from(val: $name$) -> i32 {
            val.0
        }
    }

    $impl_from_i32$

    impl $std$::default::Default for $name$ {
        fn default() -> Self {
            Self($default_int_value$)
        }
    }

    impl $std$::fmt::Debug for $name$ {
        fn fmt(&self, f: &mut $std$::fmt::Formatter<'_>) -> $std$::fmt::Result {
            f.debug_tuple("$name$").field(&self.0).finish()
        }
    }

    impl $pb$::Proxied for $name$ {
        type View<'msg> = $name$;
        type Mut<'msg> = $pb$::PrimitiveMut<'msg, $name$>;
    }

    impl $pb$::ViewProxy<'_> for $name$ {
        type Proxied = $name$;

        fn as_view(&self) -> $name$ {
            *self
        }

        fn into_view<'shorter>(self) -> $pb$::View<'shorter, $name$> {
            self
        }
    }

    impl $pb$::SettableValue<$name$> for $name$ {
        fn set_on<'msg>(self, private: $pbi$::Private, mut mutator: $pb$::Mut<'msg, $name$>)
        where
            $name$: 'msg,
        {
            mutator.set_primitive(private, self)
        }
    }

    impl $pb$::ProxiedWithPresence for $name$ {
        type PresentMutData<'msg> = $pb$::OptionalMutatorData<'msg, $name$>;
        type AbsentMutData<'msg> = $pb$::OptionalMutatorData<'msg, $name$>;

        fn clear_present_field(
            present_mutator: Self::PresentMutData<'_>,
        ) -> Self::AbsentMutData<'_> {
            present_mutator.clear($pbi$::Private)
        }

        fn set_absent_to_default(
            absent_mutator: Self::AbsentMutData<'_>,
        ) -> Self::PresentMutData<'_> {
            absent_mutator.set_absent_to_default($pbi$::Private)
        }
    }

    // SAFETY: `$name$` is a `#[repr(transparent)]` wrapper around `i32`, and
    // every `i32` is a valid bit pattern for it.
    unsafe impl $pb$::ProxiedInRepeated for $name$ {
        fn repeated_len(r: $pb$::RepeatedView<'_, Self>) -> usize {
            $pbr$::cast_enum_repeated_view($pbi$::Private, r).len()
        }

        fn repeated_push(r: $pb$::RepeatedMut<'_, Self>, val: $name$) {
            $pbr$::cast_enum_repeated_mut($pbi$::Private, r).push(val.into())
        }

        fn repeated_clear(r: $pb$::RepeatedMut<'_, Self>) {
            $pbr$::cast_enum_repeated_mut($pbi$::Private, r).clear()
        }

        unsafe fn repeated_get_unchecked(
            r: $pb$::RepeatedView<'_, Self>,
            index: usize,
        ) -> $pb$::View<'_, $name$> {
            // SAFETY: in-bounds as promised by the caller.
            let raw = unsafe { $pbr$::cast_enum_repeated_view($pbi$::Private, r).get_unchecked(index) };
            // Undeclared numbers written through the raw storage are kept as-is.
            Self(raw)
        }

        unsafe fn repeated_set_unchecked(
            r: $pb$::RepeatedMut<'_, Self>,
            index: usize,
            val: $name$,
        ) {
            // SAFETY: in-bounds as promised by the caller.
            unsafe {
                $pbr$::cast_enum_repeated_mut($pbi$::Private, r)
                    .set_unchecked(index, val.into())
            }
        }

        fn repeated_copy_from(src: $pb$::RepeatedView<'_, Self>, dest: $pb$::RepeatedMut<'_, Self>) {
            $pbr$::cast_enum_repeated_mut($pbi$::Private, dest)
                .copy_from($pbr$::cast_enum_repeated_view($pbi$::Private, src))
        }
    }

    // SAFETY: `$name$` is a `#[repr(transparent)]` wrapper around `i32`.
    unsafe impl $pbi$::Enum for $name$ {
        const NAME: &'static str = "$name$";
    }
"#;

/// Generate the Rust definition of one enum and append it to `printer`.
///
/// Definitions after the first are separated by a blank line. Nothing is
/// written if the enum declares no values.
pub fn generate_rust_enum(
    desc: &dyn EnumDescriptor,
    options: &RustOptions,
    printer: &mut Printer,
) -> Result<(), GenerateError> {
    let _span = tracing::debug_span!("generate_enum", name = desc.name()).entered();

    let resolved = ResolvedEnum::resolve(desc)?;
    let code = render_enum(&resolved, options)?;

    if !printer.is_empty() {
        printer.write("\n");
    }
    printer.write(&code);

    tracing::debug!(
        type_name = %resolved.type_name,
        values = resolved.values.len(),
        closed = resolved.is_closed,
        "generated enum"
    );
    Ok(())
}

fn render_enum(resolved: &ResolvedEnum, options: &RustOptions) -> Result<String, GenerateError> {
    check_identifiers(resolved)?;
    let pb = options.runtime_path.as_ref();

    let impl_from_i32 = if resolved.is_closed {
        Template::parse(CLOSED_TRY_FROM_I32)?
    } else {
        Template::parse(OPEN_FROM_I32)?
    };

    let values = resolved
        .values
        .iter()
        .map(|value| {
            let aliases = value
                .aliases
                .iter()
                .map(|alias| Vars::new().text("alias_name", alias))
                .collect();
            Vars::new()
                .text("variant_name", &value.name)
                .text("number", value.number)
                .list("aliases", aliases)
        })
        .collect();

    let vars = Vars::new()
        .text("name", &resolved.type_name)
        .text("std", &options.std_path)
        .text("pb", pb)
        .text("pbi", format!("{pb}::__internal"))
        .text("pbr", format!("{pb}::__runtime"))
        .text("default_int_value", resolved.default_number)
        .text("known_values_pattern", known_values_pattern(&resolved.known_numbers))
        .nested("impl_from_i32", impl_from_i32)
        .list("values", values);

    Ok(Template::parse(ENUM_DEFINITION)?.render(&vars)?)
}

/// Normalized names are `UpperCamel` or start with `_`, so the only ways to
/// miss a valid constant name are an empty name and `Self`.
fn check_identifiers(resolved: &ResolvedEnum) -> Result<(), GenerateError> {
    let names = resolved
        .values
        .iter()
        .flat_map(|value| std::iter::once(&value.name).chain(&value.aliases));
    for name in names {
        if name.is_empty() || name == "Self" {
            return Err(GenerateError::InvalidIdentifier {
                enum_name: resolved.type_name.clone(),
                identifier: name.clone(),
            });
        }
    }
    Ok(())
}

fn known_values_pattern(numbers: &[i32]) -> String {
    numbers
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::EnumSchema;

    fn generate(schema: &EnumSchema) -> String {
        let mut printer = Printer::new();
        RUST_BACKEND.generate_enum(schema, &mut printer).unwrap();
        printer.into_string()
    }

    #[test]
    fn constants_and_aliases() {
        let schema = EnumSchema::open("Color")
            .with_value("COLOR_UNSPECIFIED", 0)
            .with_value("COLOR_RED", 1)
            .with_value("COLOR_CRIMSON", 1)
            .with_value("COLOR_SCARLET", 1);

        let code = generate(&schema);
        let header = code
            .split("impl ::std::convert::From<Color> for i32")
            .next()
            .unwrap();
        insta::assert_snapshot!(header, @r"
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq)]
        pub struct Color(i32);

        #[allow(non_upper_case_globals)]
        impl Color {
            pub const Unspecified: Color = Color(0);
            pub const Red: Color = Color(1);
            pub const Crimson: Color = Color(1);
            pub const Scarlet: Color = Color(1);
        }
        ");
    }

    #[test]
    fn open_enum_converts_with_from() {
        let schema = EnumSchema::open("Color").with_value("COLOR_RED", 3);
        let code = generate(&schema);

        assert!(code.contains(
            "impl ::std::convert::From<i32> for Color {\n    fn from(val: i32) -> Color {\n        Self(val)\n    }\n}\n\nimpl ::std::default::Default for Color"
        ));
        assert!(!code.contains("TryFrom"));
        assert!(code.contains("Self(3)"));
    }

    #[test]
    fn closed_enum_matches_every_declared_number() {
        let schema = EnumSchema::closed("Priority")
            .with_value("PRIORITY_LOW", 1)
            .with_value("PRIORITY_HIGH", 3)
            .with_value("PRIORITY_URGENT", 3)
            .with_value("HIGH", 4)
            .with_value("PRIORITY_NEGATIVE", -2);

        let code = generate(&schema);
        let start = code.find("impl ::std::convert::TryFrom<i32>").unwrap();
        let len = code[start..].find("\n}\n").unwrap() + 2;
        let try_from = &code[start..start + len];
        insta::assert_snapshot!(try_from, @r"
        impl ::std::convert::TryFrom<i32> for Priority {
            type Error = ::protogen_runtime::UnknownEnumValue<Self>;

            fn try_from(val: i32) -> ::std::result::Result<Priority, Self::Error> {
                if matches!(val, 1 | 3 | 4 | -2) {
                    Ok(Self(val))
                } else {
                    Err(::protogen_runtime::UnknownEnumValue::new(::protogen_runtime::__internal::Private, val))
                }
            }
        }
        ");
        assert!(!code.contains("pub const High: Priority = Priority(4)"));
        assert!(!code.contains("impl ::std::convert::From<i32> for Priority"));
        assert!(code.contains("impl ::std::convert::TryFrom<i32> for Priority"));
    }

    #[test]
    fn repeated_getter_does_not_assume_declared_numbers() {
        let schema = EnumSchema::closed("Priority").with_value("PRIORITY_LOW", 1);
        let code = generate(&schema);
        assert!(code.contains("Self(raw)"));
        assert!(!code.contains("unwrap_unchecked"));
    }

    #[test]
    fn protocol_impls_use_runtime_paths() {
        let backend = RustBackend::new(RustOptions {
            runtime_path: "crate::rt".into(),
            std_path: "::core".into(),
        });
        let schema = EnumSchema::open("my_enum").with_value("MY_ENUM_FOO", 0);
        let code = backend.generate(&[schema]).unwrap();

        for expected in [
            "pub struct MyEnum(i32);",
            "pub const Foo: MyEnum = MyEnum(0);",
            "impl ::core::fmt::Debug for MyEnum",
            "f.debug_tuple(\"MyEnum\").field(&self.0).finish()",
            "impl crate::rt::Proxied for MyEnum",
            "impl crate::rt::ViewProxy<'_> for MyEnum",
            "impl crate::rt::SettableValue<MyEnum> for MyEnum",
            "impl crate::rt::ProxiedWithPresence for MyEnum",
            "unsafe impl crate::rt::ProxiedInRepeated for MyEnum",
            "crate::rt::__runtime::cast_enum_repeated_view(crate::rt::__internal::Private, r)",
            "unsafe impl crate::rt::__internal::Enum for MyEnum",
            "const NAME: &'static str = \"MyEnum\";",
        ] {
            assert!(code.contains(expected), "missing `{expected}` in:\n{code}");
        }
        assert!(!code.contains("::protogen_runtime"));
        assert!(!code.contains('$'));
    }

    #[test]
    fn default_is_first_declared_number() {
        let schema = EnumSchema::open("Level")
            .with_value("LEVEL_MID", 5)
            .with_value("LEVEL_LOW", 1);
        let code = generate(&schema);
        assert!(code.contains("fn default() -> Self {\n        Self(5)\n    }"));
    }

    #[test]
    fn definitions_are_separated() {
        let mut printer = Printer::new();
        let a = EnumSchema::open("A").with_value("A_X", 0);
        let b = EnumSchema::open("B").with_value("B_X", 0);
        RUST_BACKEND.generate_enum(&a, &mut printer).unwrap();
        RUST_BACKEND.generate_enum(&b, &mut printer).unwrap();

        let code = printer.into_string();
        assert!(code.contains("}\n\n#[repr(transparent)]\n#[derive(Clone, Copy, PartialEq, Eq)]\npub struct B(i32);"));
        assert!(code.starts_with("#[repr(transparent)]"));
    }

    #[test]
    fn empty_enum_writes_nothing() {
        let mut printer = Printer::new();
        printer.write("// header\n");
        let err = RUST_BACKEND
            .generate_enum(&EnumSchema::closed("Nothing"), &mut printer)
            .unwrap_err();
        assert!(matches!(err, GenerateError::EmptyEnum { .. }));
        assert_eq!(printer.as_str(), "// header\n");
    }

    #[test]
    fn rejects_names_that_are_not_identifiers() {
        for (value, identifier) in [("COLOR__", ""), ("COLOR_SELF", "Self")] {
            let mut printer = Printer::new();
            let schema = EnumSchema::open("Color")
                .with_value("COLOR_RED", 0)
                .with_value(value, 1);
            let err = RUST_BACKEND.generate_enum(&schema, &mut printer).unwrap_err();
            assert!(matches!(
                err,
                GenerateError::InvalidIdentifier { ref enum_name, identifier: ref id }
                    if enum_name == "Color" && id == identifier
            ));
            assert!(printer.is_empty());
        }
    }

    #[test]
    fn alias_named_self_is_rejected() {
        let schema = EnumSchema::open("Color")
            .with_value("COLOR_RED", 0)
            .with_value("COLOR_SELF", 0);
        let err = RUST_BACKEND.generate(&[schema]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "enum `Color` has a value named `Self`, which is not a valid identifier"
        );
    }

    #[test]
    fn templates_parse() {
        for source in [OPEN_FROM_I32, CLOSED_TRY_FROM_I32, ENUM_DEFINITION] {
            Template::parse(source).unwrap();
        }
    }
}
