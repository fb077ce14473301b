use crate::{ByteArray, Compound, Document, IntArray, List, LongArray, NbtString, Tag, TagId};

#[test]
fn ids_match_variants() {
    let cases: Vec<(Tag, TagId)> = vec![
        (Tag::End, TagId::End),
        (Tag::Byte(0), TagId::Byte),
        (Tag::Short(0), TagId::Short),
        (Tag::Int(0), TagId::Int),
        (Tag::Long(0), TagId::Long),
        (Tag::Float(0.0), TagId::Float),
        (Tag::Double(0.0), TagId::Double),
        (Tag::ByteArray(ByteArray::default()), TagId::ByteArray),
        (Tag::from("s"), TagId::String),
        (Tag::List(List::empty()), TagId::List),
        (Tag::Compound(Compound::new()), TagId::Compound),
        (Tag::IntArray(IntArray::default()), TagId::IntArray),
        (Tag::LongArray(LongArray::default()), TagId::LongArray),
    ];

    for (tag, id) in cases {
        assert_eq!(tag.id(), id);
    }
}

#[test]
fn numeric_comparisons() {
    assert_eq!(Tag::Byte(5), 5);
    assert_eq!(Tag::Short(-5), -5i64);
    assert_eq!(Tag::Double(1.5), 1.5);
    assert_eq!(10u8, Tag::Int(10));
    assert_ne!(Tag::from("5"), 5);

    assert_ne!(Tag::Long(-1), u64::MAX);
    assert_ne!(Tag::Byte(-1), 255u8);
    assert_eq!(Tag::Long(i64::MAX), i64::MAX as u64);
    assert_ne!(Tag::Float(1.9), 1i32);
    assert_ne!(Tag::Double(2.0), 2u8);
    assert_eq!(Tag::Float(2.0), 2.0f32);
}

#[test]
fn string_comparisons() {
    let tag = Tag::from("hello".to_string());
    assert_eq!(tag, "hello");
    assert_eq!("hello", tag);
    assert_eq!(tag.as_str().unwrap(), "hello");
    assert!(Tag::Int(1).as_str().is_none());
}

#[test]
fn numeric_accessors() {
    assert_eq!(Tag::Byte(-1).as_i64(), Some(-1));
    assert_eq!(Tag::Long(1 << 40).as_f64(), Some((1u64 << 40) as f64));
    assert_eq!(Tag::Float(2.5).as_i64(), None);
    assert_eq!(Tag::Double(3.0).as_u64(), None);
    assert_eq!(Tag::Long(-1).as_u64(), None);
    assert_eq!(Tag::Int(7).as_u64(), Some(7));
    assert_eq!(Tag::Float(2.5).as_f64(), Some(2.5));
    assert_eq!(Tag::from(true), Tag::Byte(1));
    assert_eq!(Tag::from("x").as_i64(), None);
}

#[test]
fn list_new_checks_element_types() {
    assert!(List::new(TagId::Int, vec![Tag::Int(1), Tag::Int(2)]).is_some());
    assert!(List::new(TagId::Int, vec![Tag::Int(1), Tag::Long(2)]).is_none());
    assert!(List::new(TagId::End, vec![Tag::End]).is_none());
    assert!(List::new(TagId::End, vec![]).is_some());
}

#[test]
fn list_iteration() {
    let list = List::new(TagId::Byte, vec![Tag::Byte(1), Tag::Byte(2)]).unwrap();

    let sum: i64 = list.iter().filter_map(Tag::as_i64).sum();
    assert_eq!(sum, 3);
    assert_eq!(list.get(1), Some(&Tag::Byte(2)));
    assert_eq!(list.get(2), None);
    assert_eq!((&list).into_iter().count(), 2);
    assert_eq!(list.into_inner().len(), 2);
}

#[test]
fn empty_lists_of_different_types_differ() {
    let ints = List::new(TagId::Int, vec![]).unwrap();
    assert_ne!(ints, List::empty());
}

#[test]
fn compound_lookup() {
    let mut c = Compound::new();
    assert!(c.insert("a", 1i8).is_none());
    assert_eq!(c.insert("a", 2i8), Some(Tag::Byte(1)));
    c.insert("nul\0", "x");

    assert_eq!(c.len(), 2);
    assert!(c.contains_key("a"));
    assert!(!c.contains_key("b"));
    assert_eq!(c["a"], Tag::Byte(2));
    // NUL is two bytes in modified UTF-8.
    assert_eq!(c.get_bytes(b"nul\xc0\x80"), Some(&Tag::from("x")));
    assert_eq!(c.get("nul\0"), Some(&Tag::from("x")));
}

#[test]
#[should_panic]
fn compound_index_missing_panics() {
    let c = Compound::new();
    let _ = &c["missing"];
}

#[test]
fn compound_equality_ignores_order() {
    let a: Compound = vec![("x", Tag::Int(1)), ("y", Tag::Int(2))]
        .into_iter()
        .collect();
    let b: Compound = vec![("y", Tag::Int(2)), ("x", Tag::Int(1))]
        .into_iter()
        .collect();

    assert_eq!(a, b);
}

#[cfg(feature = "preserve-order")]
#[test]
fn compound_preserves_insertion_order() {
    let c: Compound = vec![("z", 1), ("a", 2), ("m", 3), ("a", 4)]
        .into_iter()
        .map(|(k, v)| (k, Tag::Int(v)))
        .collect();

    let keys: Vec<String> = c.keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, ["z", "a", "m"]);
    assert_eq!(c["a"], 4);
}

#[test]
fn document_is_single_entry() {
    let mut root = Compound::new();
    root.insert("v", 3i32);
    let doc = Document::new("name", root.clone());

    let entries: Vec<_> = doc.iter().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, "name");
    assert_eq!(entries[0].1, &root);
    assert_eq!(doc.get("v"), Some(&Tag::Int(3)));

    let outer = Compound::from(doc);
    assert_eq!(outer["name"], Tag::Compound(root));
}

#[test]
fn nbt_string_lossy() {
    let s = NbtString::from_raw(vec![b'o', b'k', 0xff]);
    assert!(s.to_str().is_none());
    assert_eq!(s.to_string_lossy(), "ok\u{fffd}");
    assert_eq!(format!("{:?}", NbtString::from("q")), "\"q\"");
}

#[test]
fn arrays_deref_to_slices() {
    let a = LongArray::new(vec![1, 2, 3]);
    assert_eq!(a.len(), 3);
    assert_eq!(a.iter().sum::<i64>(), 6);
    assert_eq!(a.into_inner(), vec![1, 2, 3]);
}
