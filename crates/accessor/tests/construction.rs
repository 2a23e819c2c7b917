//! Tests for accessor construction: shapes, kinds, categories and naming.

use std::cell::{Cell, RefCell};

use accessor::{
    Accessor, Category, DynGetter, DynSetter, Kind, ReadableProperty, SelfStorage,
    WritableProperty, direct_get, direct_set, get, get_guard, get_mut, get_ref, make_accessor,
    make_read_only, make_self_storage, make_write_only, set, short_type_name,
};

#[test]
fn test_kind_follows_populated_slots() {
    let cell = Cell::new(0_i32);

    let rw = make_accessor(get(|| cell.get()), set(|v: i32| cell.set(v)));
    let ro = make_read_only(get(|| cell.get()));
    let wo = make_write_only(set(|v: i32| cell.set(v)));
    let ss = make_self_storage(0_i32);

    assert_eq!(rw.kind(), Kind::ReadWrite);
    assert_eq!(ro.kind(), Kind::ReadOnly);
    assert_eq!(wo.kind(), Kind::WriteOnly);
    assert_eq!(ss.kind(), Kind::SelfStorage);

    assert!(rw.has_getter() && rw.has_setter());
    assert!(ro.has_getter() && !ro.has_setter());
    assert!(!wo.has_getter() && wo.has_setter());
    assert!(ss.has_getter() && ss.has_setter());
}

#[test]
fn test_kind_capabilities() {
    assert!(Kind::ReadWrite.can_read() && Kind::ReadWrite.can_write());
    assert!(Kind::ReadOnly.can_read() && !Kind::ReadOnly.can_write());
    assert!(!Kind::WriteOnly.can_read() && Kind::WriteOnly.can_write());
    assert!(Kind::SelfStorage.can_read() && Kind::SelfStorage.can_write());

    assert_eq!(Kind::from_capabilities(true, false), Kind::ReadOnly);
    assert_eq!(Kind::WriteOnly.to_string(), "write-only");
}

#[test]
#[should_panic(expected = "getter, a setter, or both")]
fn test_kind_without_capabilities_panics() {
    let has_getter = std::hint::black_box(false);
    let _ = Kind::from_capabilities(has_getter, false);
}

#[test]
fn test_kind_is_an_associated_constant() {
    type Rw<'a> = Accessor<i32, DynGetter<'a, i32>, DynSetter<'a, i32>>;
    type Ro<'a> = accessor::ReadOnlyAccessor<i32, DynGetter<'a, i32>>;

    assert_eq!(Rw::KIND, Kind::ReadWrite);
    assert_eq!(Ro::KIND, Kind::ReadOnly);
    assert_eq!(SelfStorage::<i32>::KIND, Kind::SelfStorage);
}

#[test]
fn test_category_follows_getter_builder() {
    let text = String::from("abc");
    let cell = RefCell::new(1.5_f64);

    let by_value = make_read_only(get(|| text.len()));
    let by_ref = make_read_only(get_ref(|| &text));
    let by_guard = make_read_only(get_guard(|| cell.borrow()));
    let by_mut = make_read_only(get_mut(|| cell.borrow_mut()));
    let direct = make_read_only(direct_get(&cell));
    let owned = make_self_storage(1_u8);

    assert_eq!(by_value.category(), Category::Value);
    assert_eq!(by_ref.category(), Category::ConstReference);
    assert_eq!(by_guard.category(), Category::ConstReference);
    assert_eq!(by_mut.category(), Category::Reference);
    assert_eq!(direct.category(), Category::ConstReference);
    assert_eq!(owned.category(), Category::ConstReference);

    assert!(!Category::Value.is_reference());
    assert!(Category::Reference.is_reference());
}

#[test]
fn test_read_returns_getter_result_unchanged() {
    let text = String::from("hello");

    let by_ref = make_read_only(get_ref(|| &text));
    let borrowed: &String = by_ref.read();
    assert!(std::ptr::eq(borrowed, &text));

    let by_value = make_read_only(get(|| text.to_uppercase()));
    let fresh: String = by_value.read();
    assert_eq!(fresh, "HELLO");
}

#[test]
fn test_mut_getter_allows_mutation_through_read() {
    let cell = RefCell::new(vec![1, 2]);
    let acc = make_read_only(get_mut(|| cell.borrow_mut()));

    acc.read().push(3);

    assert_eq!(*cell.borrow(), vec![1, 2, 3]);
}

#[test]
fn test_direct_strategies_share_one_location() {
    let storage = RefCell::new(String::from("a"));
    let mut acc = make_accessor(direct_get(&storage), direct_set(&storage));

    acc.write(String::from("b")).unwrap();

    assert_eq!(*acc.read(), "b");
    assert_eq!(*storage.borrow(), "b");
}

#[test]
fn test_strategies_can_be_recovered() {
    let cell = Cell::new(3_i32);
    let acc = make_accessor(get(|| cell.get()), set(|v: i32| cell.set(v)));

    let (getter, _setter) = acc.into_parts();

    assert_eq!(accessor::Getter::<i32>::get(&getter), 3);
}

#[test]
fn test_debug_names_kind_and_entity() {
    let cell = Cell::new(0_u16);
    let acc = make_accessor(get(|| cell.get()), set(|v: u16| cell.set(v)));

    assert_eq!(
        format!("{acc:?}"),
        r#"Accessor { entity: "u16", kind: ReadWrite }"#
    );
    assert_eq!(
        format!("{:?}", make_self_storage(7_u8)),
        "SelfStorage { value: 7 }"
    );
}

#[test]
fn test_short_type_name_strips_paths() {
    assert_eq!(short_type_name::<u32>(), "u32");
    assert_eq!(short_type_name::<Option<String>>(), "Option<String>");
    assert_eq!(
        short_type_name::<std::collections::HashMap<i32, Vec<String>>>(),
        "HashMap<i32, Vec<String>>"
    );
    assert_eq!(short_type_name::<[&str]>(), "[&str]");
    // Cached: same pointer on the second call.
    assert!(std::ptr::eq(
        short_type_name::<Option<String>>(),
        short_type_name::<Option<String>>()
    ));
}
