use bitmask::{BitMaskError, FixedBitVector};
use num_bigint::BigUint;

fn vector(capacity: usize, value: u64) -> FixedBitVector {
    FixedBitVector::with_value(capacity, value).expect("value fits")
}

fn format_error(text: &str, radix: u32) -> BitMaskError {
    BitMaskError::FormatError {
        text: text.to_owned(),
        radix,
    }
}

#[test]
fn set_from_binary_string() {
    let mut mask = FixedBitVector::new(6).unwrap();
    mask.set_from_binary_string("101101").unwrap();
    assert_eq!(mask, 45);
    mask.set_from_binary_string("00011").unwrap();
    assert_eq!(mask, 3);

    let mut mask = FixedBitVector::new(5).unwrap();
    mask.set_from_binary_string("11").unwrap();
    assert_eq!(mask, 3);
}

#[test]
fn binary_strings_accept_integer_literal_syntax() {
    let mut mask = FixedBitVector::new(8).unwrap();
    mask.set_from_binary_string("0b1010").unwrap();
    assert_eq!(mask, 10);
    mask.set_from_binary_string(" +0B1_0 ").unwrap();
    assert_eq!(mask, 2);
    mask.set_from_binary_string("0b_11").unwrap();
    assert_eq!(mask, 3);
    mask.set_from_binary_string("-0").unwrap();
    assert_eq!(mask, 0);
}

#[test]
fn set_from_binary_string_errors() {
    let mut mask = vector(4, 9);
    assert_eq!(mask.set_from_binary_string("1201").unwrap_err(), format_error("1201", 2));
    assert_eq!(mask.set_from_binary_string("-10").unwrap_err(), format_error("-10", 2));
    for text in ["", "0b", "_1", "1_", "1__0", "1 0", "0x1"] {
        assert_eq!(mask.set_from_binary_string(text).unwrap_err(), format_error(text, 2));
    }
    assert!(matches!(
        mask.set_from_binary_string("11111"),
        Err(BitMaskError::ValueOutOfRange { .. })
    ));
    assert_eq!(mask, 9);
}

#[test]
fn set_from_hex_string() {
    let mut mask = FixedBitVector::new(8).unwrap();
    mask.set_from_hex_string("A5").unwrap();
    assert_eq!(mask, 165);
    mask.set_from_hex_string("0xa5").unwrap();
    assert_eq!(mask, 165);
    mask.set_from_hex_string("0X_F_F").unwrap();
    assert_eq!(mask, 255);

    let mut mask = FixedBitVector::new(4).unwrap();
    mask.set_from_hex_string("F").unwrap();
    assert_eq!(mask, 15);
}

#[test]
fn set_from_hex_string_errors() {
    let mut mask = vector(4, 1);
    assert_eq!(mask.set_from_hex_string("G").unwrap_err(), format_error("G", 16));
    assert_eq!(mask.set_from_hex_string("-1").unwrap_err(), format_error("-1", 16));
    assert_eq!(mask.set_from_hex_string("0x").unwrap_err(), format_error("0x", 16));
    assert!(matches!(
        mask.set_from_hex_string("100"),
        Err(BitMaskError::ValueOutOfRange { .. })
    ));
    assert_eq!(mask, 1);
}

#[test]
fn prefixed_strings() {
    assert_eq!(vector(6, 45).to_binary_string(), "0b101101");
    assert_eq!(vector(6, 0).to_binary_string(), "0b0");
    assert_eq!(vector(8, 170).to_hex_string(), "0xaa");
    assert_eq!(vector(8, 0).to_hex_string(), "0x0");
    assert_eq!(vector(5, 27).to_decimal(), BigUint::from(27u8));
}

#[test]
fn prefixed_strings_round_trip_through_setters() {
    let original = vector(12, 0xabc);
    let mut copy = FixedBitVector::new(12).unwrap();
    copy.set_from_binary_string(&original.to_binary_string()).unwrap();
    assert_eq!(copy, original);
    copy.reset_all();
    copy.set_from_hex_string(&original.to_hex_string()).unwrap();
    assert_eq!(copy, original);
}

#[test]
fn bit_string_is_zero_padded() {
    assert_eq!(vector(8, 10).to_bit_string(), "00001010");
    assert_eq!(vector(4, 5).to_bit_string(), "0101");
    assert_eq!(vector(1, 0).to_bit_string(), "0");
}

#[test]
fn display_prints_most_significant_bit_first() {
    assert_eq!(vector(4, 5).to_string(), "0 1 0 1");
    assert_eq!(vector(7, 42).to_string(), "0 1 0 1 0 1 0");
    assert_eq!(vector(1, 1).to_string(), "1");
    assert_eq!(format!("{:#}", vector(4, 5)), "0101");
    assert_eq!(format!("{:?}", vector(4, 5)), "FixedBitVector(capacity=4,bits=0101)");
}

#[test]
fn parse_bit_strings() {
    let compact: FixedBitVector = "0101".parse().unwrap();
    assert_eq!(compact.capacity(), 4);
    assert_eq!(compact, 5);

    let spaced: FixedBitVector = "0 1 0 1".parse().unwrap();
    assert_eq!(spaced.capacity(), 4);
    assert_eq!(spaced, compact);

    let padded: FixedBitVector = "0000".parse().unwrap();
    assert_eq!(padded.capacity(), 4);
    assert_eq!(padded, 0);

    assert_eq!("".parse::<FixedBitVector>().unwrap_err(), format_error("", 2));
    assert_eq!("012".parse::<FixedBitVector>().unwrap_err(), format_error("012", 2));
    assert!("0b01".parse::<FixedBitVector>().is_err());
}
