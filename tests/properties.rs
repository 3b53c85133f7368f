use proptest::prelude::*;
use summa::add;
use summa::util::num::format_number;

// Property: the sum of comma-joined integers is their integer sum, rendered
// without a decimal point.
proptest! {
    #[test]
    fn prop_sum_of_integers(values in prop::collection::vec(0u32..10_000, 1..8)) {
        let input = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
        let expected: u64 = values.iter().map(|v| u64::from(*v)).sum();

        prop_assert_eq!(add(&input).unwrap(), expected.to_string());
    }
}

// Property: comma and newline are interchangeable default separators.
proptest! {
    #[test]
    fn prop_default_separators_interchangeable(values in prop::collection::vec(0u32..10_000, 2..8),
                                               newlines in prop::collection::vec(any::<bool>(), 16)) {
        let commas = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");

        let mut mixed = String::new();
        for (index, value) in values.iter().enumerate() {
            if index > 0 {
                mixed.push(if newlines[index % newlines.len()] { '\n' } else { ',' });
            }
            mixed.push_str(&value.to_string());
        }

        prop_assert_eq!(add(&mixed).unwrap(), add(&commas).unwrap());
    }
}

// Property: a declared single-character separator behaves exactly like the
// default comma class.
proptest! {
    #[test]
    fn prop_custom_separator_matches_default(values in prop::collection::vec(0u32..10_000, 1..8),
                                             separator in prop::sample::select(vec![';', ':', '~', '@'])) {
        let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
        let declared = format!("//{separator}\n{}", rendered.join(separator.to_string().as_str()));
        let default = rendered.join(",");

        prop_assert_eq!(add(&declared).unwrap(), add(&default).unwrap());
    }
}

// Property: an input containing any negative value never produces a result.
proptest! {
    #[test]
    fn prop_negatives_always_rejected(values in prop::collection::vec(-10_000i32..10_000, 1..8)) {
        prop_assume!(values.iter().any(|v| *v < 0));

        let input = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
        let error = add(&input).unwrap_err();

        prop_assert!(error.to_string().starts_with("Negative not allowed : "));
    }
}

// Property: integral aggregates render without a decimal point.
proptest! {
    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn prop_integral_formatting(value in -1_000_000i64..1_000_000) {
        prop_assert_eq!(format_number(value as f64), value.to_string());
    }
}
