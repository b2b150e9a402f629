//! Integration test: the whole-store `Uint32Array` walkthrough and
//! cross-kind aliasing over one store.

use bufview_core::{ElementKind, Number, Optimistic, ProgramPoint};
use bufview_store::{BackingStore, ErrorCategory, SpeculativeGate, StoreConfig, ViewFactory};
use bufview_test_utils::{store_from_u32_words, uint32_quad};

#[test]
fn uint32_walkthrough() {
    let (store, view) = uint32_quad();
    assert_eq!(view.len(), 4);
    assert_eq!(view.to_string(), "Uint32Array(len=4, byte_offset=0)");

    view.set(0, 4294967295.0);
    assert_eq!(view.get(0).unwrap(), Number::Double(4294967295.0));
    assert_eq!(&store.to_vec()[..4], &[0xFF; 4]);

    let before = store.to_vec();
    view.set(5, 1);
    assert_eq!(store.to_vec(), before);

    let err = view.get(5).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Index);

    let tail = view.subview(-2, Some(10));
    assert_eq!(tail.len(), 2);
    assert_eq!(tail.byte_offset(), 8);
    tail.set(0, 10);
    tail.set(1, 11);
    assert_eq!(view.get(2).unwrap(), Number::Double(10.0));
    assert_eq!(view.get(3).unwrap(), Number::Double(11.0));
    view.set(3, 12);
    assert_eq!(tail.get(1).unwrap(), Number::Double(12.0));
}

#[test]
fn kinds_alias_the_same_bytes() {
    let store = store_from_u32_words(&[u32::MAX, 0]);
    let words = ViewFactory::UINT32.create_whole(&store);
    let signed = ViewFactory::INT32.create_whole(&store);
    let bytes = ViewFactory::UINT8.create_whole(&store);
    let halves = ViewFactory::INT16.create_range(&store, 4, 4).unwrap();

    assert_eq!(signed.get(0).unwrap(), Number::Int(-1));
    assert_eq!(bytes.get(3).unwrap(), Number::Int(255));

    halves.set(0, -2);
    assert_eq!(
        ViewFactory::INT16.create_whole(&store).get(2).unwrap(),
        Number::Int(-2)
    );
    assert!(words.get(1).unwrap().as_f64() != 0.0);

    bytes.set(0, 0);
    bytes.set(1, 0);
    bytes.set(2, 0);
    bytes.set(3, 0);
    assert_eq!(words.get(0).unwrap(), Number::Double(0.0));
    assert_eq!(signed.get(0).unwrap(), Number::Int(0));
}

#[test]
fn float_views_share_bits_with_int_views() {
    let store = BackingStore::with_length(8).unwrap();
    let doubles = ViewFactory::FLOAT64.create_whole(&store);
    let words = ViewFactory::UINT32.create_whole(&store);
    doubles.set(0, 1.0);
    let bits = 1.0f64.to_bits().to_ne_bytes();
    let lo = u32::from_ne_bytes([bits[0], bits[1], bits[2], bits[3]]);
    assert_eq!(words.get(0).unwrap(), Number::Double(lo as f64));
}

#[test]
fn factory_round_trip_through_kind() {
    for kind in ElementKind::ALL {
        let factory = ViewFactory::for_kind(kind);
        let view = factory.with_length(3, &StoreConfig::default()).unwrap();
        assert_eq!(view.kind(), kind);
        assert_eq!(view.byte_length(), 3 * kind.bytes_per_element());
        view.set(1, 7);
        assert_eq!(view.get(1).unwrap().as_f64(), 7.0);
    }
}

#[test]
fn gate_over_aliased_store_sees_later_writes() {
    let (store, view) = uint32_quad();
    let bytes = ViewFactory::UINT8.create_whole(&store);
    let mut gate = SpeculativeGate::new();
    let pp = ProgramPoint(1);

    assert_eq!(gate.get(&view, 0, pp).unwrap(), Optimistic::Value(Number::Int(0)));
    for i in 0..4 {
        bytes.set(i, 0xFF);
    }
    let read = gate.get(&view, 0, pp).unwrap();
    assert!(read.is_unwarranted());
    assert!(gate.get(&view, 0, pp).unwrap().value().is_some());
}

#[test]
fn allocation_limit_is_reported() {
    let config = StoreConfig::new().with_max_byte_length(64);
    let err = ViewFactory::FLOAT64.with_length(9, &config).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Allocation);
    let err = BackingStore::allocate(-1, &config).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Allocation);
    let store = BackingStore::allocate(16, &config).unwrap();
    let err = ViewFactory::UINT32.construct(&store, 4, 4).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Range);
}
