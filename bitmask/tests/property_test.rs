use bitmask::{FixedBitVector, SliceSpec};
use num_bigint::BigUint;
use proptest::prelude::*;

proptest! {
    #[test]
    fn decimal_round_trip(vector in arbitrary_vector(200)) {
        let rebuilt = FixedBitVector::with_value(vector.capacity(), vector.to_decimal()).unwrap();
        assert_eq!(rebuilt.to_decimal(), vector.to_decimal());
        assert_eq!(rebuilt.capacity(), vector.capacity());
    }

    #[test]
    fn small_values_round_trip(capacity in 1usize..64, seed in any::<u64>()) {
        let value = seed & ((1u64 << capacity) - 1);
        let vector = FixedBitVector::with_value(capacity, value).unwrap();
        assert_eq!(vector.to_decimal(), BigUint::from(value));
        assert_eq!(vector, value);
    }

    #[test]
    fn string_round_trips(vector in arbitrary_vector(200)) {
        let mut copy = FixedBitVector::new(vector.capacity()).unwrap();
        copy.set_from_binary_string(&vector.to_bit_string()).unwrap();
        assert_eq!(copy.to_decimal(), vector.to_decimal());

        copy.reset_all();
        copy.set_from_binary_string(vector.to_binary_string().trim_start_matches("0b")).unwrap();
        assert_eq!(copy.to_decimal(), vector.to_decimal());

        copy.reset_all();
        copy.set_from_hex_string(vector.to_hex_string().trim_start_matches("0x")).unwrap();
        assert_eq!(copy.to_decimal(), vector.to_decimal());
    }

    #[test]
    fn display_and_parse_round_trip(vector in arbitrary_vector(200)) {
        let spaced = vector.to_string();
        assert_eq!(spaced.split(' ').count(), vector.capacity());
        assert_eq!(spaced.replace(' ', ""), vector.to_bit_string());

        let parsed: FixedBitVector = spaced.parse().unwrap();
        assert_eq!(parsed.capacity(), vector.capacity());
        assert_eq!(parsed, vector);

        let compact: FixedBitVector = format!("{vector:#}").parse().unwrap();
        assert_eq!(compact.capacity(), vector.capacity());
        assert_eq!(compact, vector);
    }

    #[test]
    fn operations_preserve_range((vector, operations) in vector_with_operations(100, 50)) {
        let mut vector = vector;
        let capacity = vector.capacity();
        for (kind, position) in operations {
            let before = vector.to_decimal();
            let succeeded = match kind % 9 {
                0 => vector.set_bit(position).is_ok(),
                1 => vector.flip_bit(position).is_ok(),
                2 => vector.reset_bit(position).is_ok(),
                3 => { vector.set_all(); true }
                4 => { vector.flip_all(); true }
                5 => { vector.reverse_bits(); true }
                6 => vector.set_item(-(position as isize), 1).is_ok(),
                7 => vector.set_from_decimal(position).is_ok(),
                _ => { vector.reset_all(); true }
            };
            if !succeeded {
                assert_eq!(vector.to_decimal(), before);
            }
            assert_eq!(vector.capacity(), capacity);
            assert!(vector.value().bits() <= capacity as u64);
        }
    }

    #[test]
    fn population_count(vector in arbitrary_vector(200)) {
        let set = vector.indices_set();
        let unset = vector.indices_unset();
        assert_eq!(vector.count_set(), set.len());
        assert_eq!(set.len() + unset.len(), vector.capacity());
        assert!(set.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(unset.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(vector.lowest_set_index(), set.first().copied());
    }

    #[test]
    fn complement(vector in arbitrary_vector(200)) {
        let inverted = !&vector;
        assert_eq!(vector.count_set() + inverted.count_set(), vector.capacity());
        assert_eq!(inverted.indices_set(), vector.indices_unset());
    }

    #[test]
    fn idempotence(vector in arbitrary_vector(200)) {
        let mut cleared = vector.clone();
        cleared.reset_all();
        let once = cleared.clone();
        cleared.reset_all();
        assert_eq!(cleared, once);
        assert_eq!(cleared.capacity(), once.capacity());

        let mut flipped = vector.clone();
        flipped.flip_all();
        flipped.flip_all();
        assert_eq!(flipped, vector);
    }

    #[test]
    fn indexing_agreement(vector in arbitrary_vector(200)) {
        let capacity = vector.capacity();
        for position in 0..capacity {
            assert_eq!(vector.get_bit(position).unwrap(), vector.item(position as isize).unwrap());
        }
        for from_end in 1..=capacity {
            assert_eq!(
                vector.item(-(from_end as isize)).unwrap(),
                vector.get_bit(capacity - from_end).unwrap()
            );
        }
        let iterated: Vec<u8> = vector.iter().collect();
        let indexed: Vec<u8> = (0..capacity).map(|position| vector.get_bit(position).unwrap()).collect();
        assert_eq!(iterated, indexed);
    }

    #[test]
    fn reverse_bits_reverses_positions(vector in arbitrary_vector(200)) {
        let capacity = vector.capacity();
        let mut reversed = vector.clone();
        reversed.reverse_bits();
        for position in 0..capacity {
            assert_eq!(reversed.get_bit(capacity - 1 - position).unwrap(), vector.get_bit(position).unwrap());
        }
        assert_eq!(reversed, vector.slice(..).unwrap());
        reversed.reverse_bits();
        assert_eq!(reversed, vector);
    }

    #[test]
    fn slice_placement((vector, slice) in vector_with_slice(100)) {
        let indices = slice.indices(vector.capacity()).unwrap();
        let positions: Vec<usize> = indices.positions().collect();
        assert_eq!(positions.len(), indices.length);
        match vector.slice(slice) {
            Ok(sliced) => {
                assert_eq!(sliced.capacity(), indices.length);
                for (offset, position) in positions.into_iter().enumerate() {
                    assert_eq!(
                        sliced.get_bit(indices.length - offset - 1).unwrap(),
                        vector.get_bit(position).unwrap()
                    );
                }
            }
            Err(_) => assert_eq!(indices.length, 0),
        }
    }
}

fn arbitrary_vector(max_capacity: usize) -> impl Strategy<Value = FixedBitVector> {
    prop::collection::vec(any::<bool>(), 1..max_capacity).prop_map(|bits| {
        let mut vector = FixedBitVector::new(bits.len()).unwrap();
        for (position, bit) in bits.into_iter().enumerate() {
            if bit {
                vector.set_bit(position).unwrap();
            }
        }
        vector
    })
}

fn vector_with_operations(
    max_capacity: usize,
    max_operations: usize,
) -> impl Strategy<Value = (FixedBitVector, Vec<(u8, usize)>)> {
    arbitrary_vector(max_capacity).prop_flat_map(move |vector| {
        let reach = vector.capacity() + 2;
        let operations = prop::collection::vec((any::<u8>(), 0..reach), 0..max_operations);
        (Just(vector), operations)
    })
}

fn vector_with_slice(max_capacity: usize) -> impl Strategy<Value = (FixedBitVector, SliceSpec)> {
    let bound = max_capacity as isize + 10;
    let step = prop_oneof![-5isize..=-1, 1isize..=5];
    (
        arbitrary_vector(max_capacity),
        prop::option::of(-bound..bound),
        prop::option::of(-bound..bound),
        prop::option::of(step),
    )
        .prop_map(|(vector, start, stop, step)| (vector, SliceSpec::new(start, stop, step)))
}
