//! Behavior of generated enums against the runtime protocol.

use protogen_conformance::{Color, Dimension, Letter, MyEnum, Priority};
use protogen_runtime::__internal::{Enum, Private};
use protogen_runtime::{
    OptionalField, PrimitiveMut, ProxiedWithPresence, Repeated, SettableValue, UnknownEnumValue,
    ViewProxy,
};

mod constants {
    use super::*;

    #[test]
    fn canonical_names_strip_enum_prefix() {
        assert_eq!(i32::from(Color::Unspecified), 0);
        assert_eq!(i32::from(Color::Red), 1);
        assert_eq!(i32::from(Color::Green), 2);
        assert_eq!(i32::from(MyEnum::Foo), 1);
        assert_eq!(i32::from(MyEnum::Bar), 2);
    }

    #[test]
    fn aliases_share_a_number() {
        assert_eq!(Color::Crimson, Color::Red);
        assert_eq!(Priority::Urgent, Priority::High);
        assert_eq!(Letter::BAlias, Letter::B);
        assert_ne!(Letter::A, Letter::B);
    }

    #[test]
    fn digit_leading_names() {
        assert_eq!(i32::from(Dimension::_2D), 1);
        assert_eq!(i32::from(Dimension::_3D), 2);
    }

    #[test]
    fn default_is_first_declared() {
        assert_eq!(Color::default(), Color::Unspecified);
        assert_eq!(Priority::default(), Priority::Low);
        assert_eq!(i32::from(Priority::default()), 1);
        assert_eq!(Letter::default(), Letter::A);
    }

    #[test]
    fn debug_shows_type_and_number() {
        assert_eq!(format!("{:?}", Color::Red), "Color(1)");
        assert_eq!(format!("{:?}", Color::from(99)), "Color(99)");
        assert_eq!(format!("{:?}", Priority::Medium), "Priority(2)");
    }

    #[test]
    fn enum_name() {
        assert_eq!(<Color as Enum>::NAME, "Color");
        assert_eq!(<MyEnum as Enum>::NAME, "MyEnum");
    }
}

mod conversion {
    use super::*;

    #[test]
    fn open_enum_keeps_unknown_numbers() {
        for n in [0, 1, 2, 99, -1, i32::MIN, i32::MAX] {
            assert_eq!(i32::from(Color::from(n)), n);
        }
        assert_eq!(Color::from(1), Color::Red);
    }

    #[test]
    fn closed_enum_accepts_declared_numbers() {
        for n in [1, 2, 3] {
            assert_eq!(i32::from(Priority::try_from(n).unwrap()), n);
        }
        // Declared only on a value whose name was already taken.
        assert_eq!(i32::from(Priority::try_from(4).unwrap()), 4);
    }

    #[test]
    fn closed_enum_rejects_undeclared_numbers() {
        let err = Priority::try_from(5).unwrap_err();
        assert_eq!(err.number(), 5);
        assert_eq!(format!("{err:?}"), "UnknownEnumValue(5)");
        assert_eq!(err.to_string(), "5 is not a known value of Priority");
        assert_eq!(Priority::try_from(0), Err(UnknownEnumValue::new(Private, 0)));

        for n in -10..10 {
            assert_eq!(MyEnum::try_from(n).is_ok(), (0..=2).contains(&n));
        }
    }

    #[test]
    fn unknown_value_is_an_error() {
        fn describe(result: Result<MyEnum, impl std::error::Error>) -> String {
            match result {
                Ok(value) => format!("{value:?}"),
                Err(err) => err.to_string(),
            }
        }
        assert_eq!(describe(MyEnum::try_from(1)), "MyEnum(1)");
        assert_eq!(describe(MyEnum::try_from(7)), "7 is not a known value of MyEnum");
    }
}

mod protocol {
    use super::*;

    #[test]
    fn scalar_view() {
        let value = Color::Green;
        assert_eq!(value.as_view(), Color::Green);
        assert_eq!(value.into_view(), Color::Green);
    }

    #[test]
    fn scalar_write() {
        let mut slot = Color::default();
        Color::Red.set_on(Private, PrimitiveMut::new(&mut slot));
        assert_eq!(slot, Color::Red);

        let mut mutator = PrimitiveMut::new(&mut slot);
        mutator.set(Color::from(42));
        assert_eq!(mutator.get(), Color::from(42));
        assert_eq!(i32::from(slot), 42);
    }

    #[test]
    fn presence_transitions() {
        let mut field = OptionalField::<Priority>::new();
        assert!(!field.is_present());
        assert_eq!(field.get(), Priority::Low);

        let mut present = field.entry().or_default();
        assert!(present.is_present());
        present.set(Priority::High);
        assert_eq!(field.get(), Priority::High);

        let cleared = Priority::clear_present_field(field.mutator());
        assert!(!cleared.is_present());
        assert_eq!(field.get(), Priority::Low);

        let present = Priority::set_absent_to_default(field.mutator());
        assert!(present.is_present());
        assert!(field.is_present());
        assert_eq!(field.get(), Priority::Low);
    }

    #[test]
    fn repeated_storage() {
        let mut list = Repeated::<Color>::new();
        let mut values = list.as_mut();
        values.push(Color::Red);
        values.push(Color::from(77));
        values.push(Color::Green);
        assert_eq!(values.len(), 3);

        values.set(0, Color::Unspecified);
        assert_eq!(values.get(0), Some(Color::Unspecified));
        assert_eq!(values.get(1), Some(Color::from(77)));
        assert_eq!(values.get(3), None);

        // SAFETY: index 2 is in bounds.
        unsafe { values.set_unchecked(2, Color::Crimson) };
        // SAFETY: index 2 is in bounds.
        assert_eq!(unsafe { list.as_view().get_unchecked(2) }, Color::Red);

        let collected: Vec<_> = list.as_view().iter().collect();
        assert_eq!(collected, vec![Color::Unspecified, Color::from(77), Color::Red]);

        list.as_mut().clear();
        assert!(list.is_empty());
    }

    #[test]
    fn undeclared_number_in_closed_repeated_storage() {
        let mut list = Repeated::<Priority>::new();
        list.as_mut().push(Priority::High);
        protogen_runtime::__runtime::cast_enum_repeated_mut(Private, list.as_mut()).push(5);

        let view = list.as_view();
        assert_eq!(view.len(), 2);
        assert_eq!(view.get(1).map(i32::from), Some(5));
        // SAFETY: index 1 is in bounds.
        assert_eq!(i32::from(unsafe { view.get_unchecked(1) }), 5);
        let numbers: Vec<i32> = view.iter().map(i32::from).collect();
        assert_eq!(numbers, vec![3, 5]);
        assert!(Priority::try_from(5).is_err());
    }

    #[test]
    fn repeated_copy_between_containers() {
        let mut src = Repeated::<Priority>::new();
        src.as_mut().push(Priority::Low);
        src.as_mut().push(Priority::try_from(4).unwrap());

        let mut dest = Repeated::<Priority>::new();
        dest.as_mut().push(Priority::Medium);
        dest.as_mut().copy_from(src.as_view());

        let copied: Vec<i32> = dest.as_view().into_iter().map(i32::from).collect();
        assert_eq!(copied, vec![1, 4]);
        assert_eq!(src.len(), 2);
    }
}
