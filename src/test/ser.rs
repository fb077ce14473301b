use serde_json::json;

use crate::{from_bytes, test::builder::Builder, TagId};

#[test]
fn document_to_json() {
    let input = Builder::new()
        .start_compound("root")
        .byte("b", 1)
        .string("s", "text")
        .long_array("la", &[1, 2])
        .start_list("l", TagId::Float, 1)
        .float_payload(0.5)
        .start_list("empty", TagId::End, 0)
        .start_compound("c")
        .short("x", -3)
        .end_compound()
        .end_compound()
        .build();

    let doc = from_bytes(&input).unwrap();
    let value = serde_json::to_value(&doc).unwrap();

    assert_eq!(
        value,
        json!({
            "root": {
                "b": 1,
                "s": "text",
                "la": [1, 2],
                "l": [0.5],
                "empty": [],
                "c": { "x": -3 }
            }
        })
    );
}

#[test]
fn invalid_strings_serialize_lossily() {
    let input = Builder::new()
        .start_compound("")
        .tag(TagId::String)
        .name("s")
        .raw_name(&[b'a', 0xff])
        .end_compound()
        .build();

    let doc = from_bytes(&input).unwrap();
    let value = serde_json::to_value(doc.root()).unwrap();

    assert_eq!(value, json!({ "s": "a\u{fffd}" }));
}
