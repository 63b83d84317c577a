// Sat Jan 17 2026 - Alex

//! Property tests over generated layouts and records.

use layout_codec::{ByteOrder, Codec, CodecGenerator, Layout, LayoutBuilder, Record, ScalarType, Value};
use proptest::prelude::*;
use std::sync::Arc;

fn scalar_strategy() -> impl Strategy<Value = ScalarType> {
    prop_oneof![
        Just(ScalarType::U8),
        Just(ScalarType::U16),
        Just(ScalarType::U32),
        Just(ScalarType::F32),
    ]
}

fn byte_order_strategy() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![Just(ByteOrder::LittleEndian), Just(ByteOrder::BigEndian)]
}

/// Values that survive a round trip unchanged, so NaN is left out.
fn value_strategy(scalar: ScalarType) -> BoxedStrategy<Value> {
    match scalar {
        ScalarType::U8 => any::<u8>().prop_map(Value::U8).boxed(),
        ScalarType::U16 => any::<u16>().prop_map(Value::U16).boxed(),
        ScalarType::U32 => any::<u32>().prop_map(Value::U32).boxed(),
        ScalarType::F32 => (prop::num::f32::NORMAL
            | prop::num::f32::SUBNORMAL
            | prop::num::f32::ZERO
            | prop::num::f32::INFINITE)
            .prop_map(Value::F32)
            .boxed(),
    }
}

fn field_strategy() -> impl Strategy<Value = (ScalarType, Value)> {
    scalar_strategy().prop_flat_map(|scalar| value_strategy(scalar).prop_map(move |value| (scalar, value)))
}

fn field_name(index: usize) -> String {
    format!("field_{}", index)
}

fn build_layout(order: ByteOrder, scalars: impl IntoIterator<Item = ScalarType>) -> Layout {
    let mut builder = LayoutBuilder::named("Generated").with_byte_order(order);
    for (i, scalar) in scalars.into_iter().enumerate() {
        builder.push_field(&field_name(i), scalar).unwrap();
    }
    builder.build()
}

fn build_record(fields: &[(ScalarType, Value)], order: impl IntoIterator<Item = usize>) -> Record {
    let mut record = Record::new();
    for i in order {
        record.insert(&field_name(i), fields[i].1);
    }
    record
}

fn both(layout: &Layout) -> (Arc<dyn Codec>, Arc<dyn Codec>) {
    let generator = CodecGenerator::default();
    (
        generator.generate_with(layout, layout_codec::Strategy::Synthesized).unwrap(),
        generator.generate_with(layout, layout_codec::Strategy::ClosureTable).unwrap(),
    )
}

proptest! {
    /// Offsets are prefix sums of widths, fields never overlap, and the same
    /// declarations always produce the same layout.
    #[test]
    fn prop_layout_is_dense_and_deterministic(
        order in byte_order_strategy(),
        scalars in prop::collection::vec(scalar_strategy(), 0..24)
    ) {
        let layout = build_layout(order, scalars.iter().copied());
        prop_assert_eq!(&layout, &build_layout(order, scalars.iter().copied()));

        let mut expected = 0usize;
        for (field, scalar) in layout.fields().iter().zip(&scalars) {
            prop_assert_eq!(field.scalar(), *scalar);
            prop_assert_eq!(field.offset() as usize, expected);
            expected += scalar.width();
        }
        prop_assert_eq!(layout.size(), expected);

        for (i, a) in layout.fields().iter().enumerate() {
            for b in &layout.fields()[i + 1..] {
                prop_assert!(!a.overlaps(b), "{} overlaps {}", a, b);
            }
        }
    }

    #[test]
    fn prop_roundtrip_both_strategies(
        order in byte_order_strategy(),
        fields in prop::collection::vec(field_strategy(), 1..16)
    ) {
        let layout = build_layout(order, fields.iter().map(|(scalar, _)| *scalar));
        let record = build_record(&fields, 0..fields.len());
        let (synthesized, closures) = both(&layout);

        for codec in [synthesized, closures] {
            let bytes = codec.encode(&record).unwrap();
            prop_assert_eq!(bytes.len(), layout.size());
            prop_assert_eq!(codec.decode(&bytes).unwrap(), record.clone());
        }
    }

    #[test]
    fn prop_strategies_agree(
        order in byte_order_strategy(),
        fields in prop::collection::vec(field_strategy(), 1..16),
        noise in prop::collection::vec(any::<u8>(), 0..80)
    ) {
        let layout = build_layout(order, fields.iter().map(|(scalar, _)| *scalar));
        let record = build_record(&fields, 0..fields.len());
        let (synthesized, closures) = both(&layout);

        prop_assert_eq!(synthesized.encode(&record).unwrap(), closures.encode(&record).unwrap());

        // Arbitrary bytes may hold NaN payloads, so compare re-encoded bytes.
        match (synthesized.decode(&noise), closures.decode(&noise)) {
            (Ok(a), Ok(b)) => {
                let a = synthesized.encode(&a).unwrap();
                prop_assert_eq!(&a, &closures.encode(&b).unwrap());
                prop_assert_eq!(&a[..], &noise[..layout.size()]);
            }
            (Err(a), Err(b)) => {
                prop_assert!(noise.len() < layout.size());
                prop_assert!(a.is_bounds_error() && b.is_bounds_error());
            }
            (a, b) => prop_assert!(false, "strategies disagree: {:?} vs {:?}", a.is_ok(), b.is_ok()),
        }
    }

    #[test]
    fn prop_encode_ignores_record_order(
        (order, fields, shuffled) in (
            byte_order_strategy(),
            prop::collection::vec(field_strategy(), 1..16),
        ).prop_flat_map(|(order, fields)| {
            let indices: Vec<usize> = (0..fields.len()).collect();
            (Just(order), Just(fields), Just(indices).prop_shuffle())
        })
    ) {
        let layout = build_layout(order, fields.iter().map(|(scalar, _)| *scalar));
        let declared = build_record(&fields, 0..fields.len());
        let reordered = build_record(&fields, shuffled);
        let (synthesized, closures) = both(&layout);

        prop_assert_eq!(&declared, &reordered);
        for codec in [synthesized, closures] {
            prop_assert_eq!(codec.encode(&declared).unwrap(), codec.encode(&reordered).unwrap());
        }
    }
}
