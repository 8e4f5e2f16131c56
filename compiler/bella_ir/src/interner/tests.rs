use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_intern_same_string_twice() {
    let interner = StringInterner::new();
    let a = interner.intern("hello");
    let b = interner.intern("hello");
    assert_eq!(a, b);
}

#[test]
fn test_intern_distinct_strings() {
    let interner = StringInterner::new();
    let a = interner.intern("x");
    let b = interner.intern("y");
    assert_ne!(a, b);
    assert_eq!(interner.lookup(a), "x");
    assert_eq!(interner.lookup(b), "y");
}

#[test]
fn test_empty_string_is_preinterned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert!(interner.is_empty());
    assert_eq!(interner.len(), 1);
}

#[test]
fn test_unicode_identifier() {
    let interner = StringInterner::new();
    let pi = interner.intern("π");
    assert_eq!(interner.lookup(pi), "π");
}

#[test]
fn test_lookup_foreign_name_is_empty() {
    let big = StringInterner::new();
    let foreign = (0..10).map(|i| big.intern(&format!("n{i}"))).last();
    let small = StringInterner::new();
    if let Some(name) = foreign {
        assert_eq!(small.lookup(name), "");
    }
}
