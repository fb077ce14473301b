use crate::{error::ErrorKind, input::Input, TagId};

#[test]
fn big_endian_integers() {
    let data = [
        0x80, // i8
        0x01, 0x02, // i16
        0xff, 0xff, 0xff, 0xfe, // i32
        0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, // i64
    ];
    let mut input = Input::new(&data);

    assert_eq!(input.consume_i8().unwrap(), -128);
    assert_eq!(input.consume_i16().unwrap(), 0x0102);
    assert_eq!(input.consume_i32().unwrap(), -2);
    assert_eq!(input.consume_i64().unwrap(), 0x0102030405060708);
    assert_eq!(input.remaining(), 0);
}

#[test]
fn floats_are_bit_patterns() {
    let mut data = vec![];
    data.extend_from_slice(&1.5f32.to_be_bytes());
    data.extend_from_slice(&(-2.25f64).to_be_bytes());
    data.extend_from_slice(&0x7fc0_0001u32.to_be_bytes()); // a NaN with payload

    let mut input = Input::new(&data);

    assert_eq!(input.consume_f32().unwrap(), 1.5);
    assert_eq!(input.consume_f64().unwrap(), -2.25);
    assert_eq!(input.consume_f32().unwrap().to_bits(), 0x7fc0_0001);
}

#[test]
fn short_read_does_not_move_cursor() {
    let data = [0, 0, 1];
    let mut input = Input::new(&data);

    let err = input.consume_i32().unwrap_err();
    assert!(err.is_eof());
    assert_eq!(err.offset(), 0);
    assert_eq!(input.position(), 0);

    assert_eq!(input.consume_i16().unwrap(), 0);
    assert_eq!(input.position(), 2);
}

#[test]
fn byte_at_end_fails() {
    let mut input = Input::new(&[]);
    assert!(input.consume_byte().unwrap_err().is_eof());
}

#[test]
fn empty_string_consumes_only_length() {
    let data = [0, 0, 0xaa];
    let mut input = Input::new(&data);

    assert_eq!(input.consume_str().unwrap(), b"");
    assert_eq!(input.position(), 2);
}

#[test]
fn string_length_is_unsigned() {
    let mut data = vec![0x80, 0x00];
    data.extend(std::iter::repeat(b'a').take(0x8000));

    let mut input = Input::new(&data);
    let s = input.consume_str().unwrap();

    assert_eq!(s.len(), 32768);
    assert_eq!(input.remaining(), 0);
}

#[test]
fn string_longer_than_input_fails() {
    let data = [0, 5, b'a', b'b'];
    let mut input = Input::new(&data);

    assert!(input.consume_str().unwrap_err().is_eof());
    assert_eq!(input.position(), 0);
}

#[test]
fn string_bytes_are_not_validated() {
    let data = [0, 2, 0xff, 0xfe];
    let mut input = Input::new(&data);

    assert_eq!(input.consume_str().unwrap(), &[0xffu8, 0xfe][..]);
}

#[test]
fn tag_ids() {
    let data = [10, 12, 13];
    let mut input = Input::new(&data);

    assert_eq!(input.consume_tag().unwrap(), TagId::Compound);
    assert_eq!(input.consume_tag().unwrap(), TagId::LongArray);

    let err = input.consume_tag().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidTag(13));
    assert_eq!(err.offset(), 2);
}

#[test]
fn negative_len_is_invalid() {
    let data = [0xff, 0xff, 0xff, 0xff];
    let mut input = Input::new(&data);

    let err = input.consume_len().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::NegativeLength(-1));
    assert!(!err.is_eof());
}

#[test]
fn int_arrays_need_all_bytes_up_front() {
    let data = [0, 0, 0, 1, 0, 0, 0];
    let mut input = Input::new(&data);

    assert!(input.consume_ints(2).unwrap_err().is_eof());
    assert_eq!(input.position(), 0);
    assert_eq!(input.consume_ints(1).unwrap(), vec![1]);
}

#[test]
fn long_arrays() {
    let mut data = vec![];
    data.extend_from_slice(&(-1i64).to_be_bytes());
    data.extend_from_slice(&i64::MAX.to_be_bytes());

    let mut input = Input::new(&data);
    assert_eq!(input.consume_longs(2).unwrap(), vec![-1, i64::MAX]);
}

#[test]
fn huge_array_len_fails_without_allocating() {
    let mut input = Input::new(&[0; 16]);
    assert!(input.consume_longs(i32::MAX as usize).unwrap_err().is_eof());
}
