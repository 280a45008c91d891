//! Property tests for the column codec, the notation round trip and the
//! range invariants under arbitrary mutation sequences

use proptest::prelude::*;
use sheet_range::column::{letters_to_number, number_to_letters};
use sheet_range::{Field, FieldOp, RangeAddress};

fn assert_well_formed(range: &RangeAddress) -> Result<(), TestCaseError> {
    prop_assert!(range.start_row() >= 1);
    prop_assert!(range.start_col() >= 1);
    if let Some(end) = range.end_row() {
        prop_assert!(end >= range.start_row(), "end row below start in {range}");
    }
    if let Some(end) = range.end_col() {
        prop_assert!(end >= range.start_col(), "end column left of start in {range}");
    }
    Ok(())
}

fn field() -> impl Strategy<Value = Field> {
    prop_oneof![
        Just(Field::StartRow),
        Just(Field::StartCol),
        Just(Field::EndRow),
        Just(Field::EndCol),
    ]
}

fn field_op() -> impl Strategy<Value = Option<FieldOp>> {
    prop_oneof![
        (-50i64..50).prop_map(|n| Some(FieldOp::Add(n))),
        (-50i64..50).prop_map(|n| Some(FieldOp::Sub(n))),
        proptest::option::of(-20i64..200).prop_map(|v| Some(FieldOp::Set(v))),
        Just(None),
    ]
}

/// Notation text in one of the three accepted shapes, with rows >= 1 and
/// the end corner at or after the start so the text is already canonical
fn canonical_notation() -> impl Strategy<Value = String> {
    (
        proptest::option::of("[A-Za-z][A-Za-z0-9 !_]{0,12}"),
        1u32..20_000,
        1u32..1_000_000,
        0u32..500,
        0u32..10_000,
        0u8..3,
    )
        .prop_map(|(sheet, col, row, dcol, drow, shape)| {
            let mut text = sheet.map(|name| format!("{name}!")).unwrap_or_default();
            text.push_str(&format!("{}{}", number_to_letters(col), row));
            match shape {
                0 => text.push_str(&format!(
                    ":{}{}",
                    number_to_letters(col + dcol),
                    row + drow
                )),
                1 => text.push_str(&format!(":{}", number_to_letters(col + dcol))),
                _ => {}
            }
            text
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn column_codec_round_trips(n in 1u32..=u32::MAX) {
        prop_assert_eq!(letters_to_number(&number_to_letters(n)), Some(n));
    }

    #[test]
    fn notation_round_trips(text in canonical_notation()) {
        let range = RangeAddress::parse(&text).unwrap();
        prop_assert_eq!(range.to_string(), text.clone());

        let reparsed = RangeAddress::parse(&range.to_string()).unwrap();
        prop_assert_eq!(reparsed.sheet_name(), range.sheet_name());
        prop_assert_eq!(reparsed.start_row(), range.start_row());
        prop_assert_eq!(reparsed.start_col(), range.start_col());
        prop_assert_eq!(reparsed.end_row(), range.end_row());
        prop_assert_eq!(reparsed.end_col(), range.end_col());
    }

    #[test]
    fn mutations_keep_range_well_formed(
        text in canonical_notation(),
        ops in proptest::collection::vec((field(), field_op()), 0..40),
    ) {
        let mut range = RangeAddress::parse(&text).unwrap();
        for (field, op) in ops {
            range.apply(field, op);
            assert_well_formed(&range)?;
        }
    }

    #[test]
    fn derivations_keep_range_well_formed(
        text in canonical_notation(),
        start_offset in -100i64..100,
        end_offset in proptest::option::of(-100i64..100),
        truncate in any::<bool>(),
        rows in 0usize..50,
        cols in 0usize..50,
    ) {
        let mut range = RangeAddress::parse(&text).unwrap();

        let sub = range.new_range_by_row(start_offset, end_offset);
        assert_well_formed(&sub)?;
        prop_assert_eq!(sub.sheet_name(), range.sheet_name());
        prop_assert_eq!(sub.start_col(), range.start_col());
        prop_assert_eq!(sub.end_col(), range.end_col());
        prop_assert!(sub.end_row().is_some());

        let sized = RangeAddress::by_size(rows, cols, &range);
        assert_well_formed(&sized)?;
        prop_assert_eq!(sized.row_count(), Some(rows.max(1) as u32));
        prop_assert_eq!(sized.col_count(), Some(cols.max(1) as u32));

        let open_rows = range.end_row().is_none();
        range.jump_row(truncate);
        assert_well_formed(&range)?;
        prop_assert_eq!(range.end_row().is_none(), open_rows);
    }
}
