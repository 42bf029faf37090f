// SPDX-License-Identifier: Apache-2.0

use mirelle_fit_engine::FitEngine;
use mirelle_fit_model::{CanonicalSize, RegionCode, BAND_MIN_CM};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn canonical_sizes() -> impl Strategy<Value = CanonicalSize> {
    (0u16..=10, 1u8..=12).prop_map(|(step, cup)| {
        CanonicalSize::new(BAND_MIN_CM + 5 * step, cup).expect("on-axis canonical size")
    })
}

fn regions() -> impl Strategy<Value = RegionCode> {
    (0usize..7).prop_map(|i| RegionCode::all()[i])
}

proptest! {
    #![proptest_config(Config::with_cases(512))]

    // Converting A -> B -> A returns the original label for every size
    // representable in both regions.
    #[test]
    fn conversion_round_trips(size in canonical_sizes(), from in regions(), to in regions()) {
        let engine = FitEngine::with_builtin_regions();
        if let Ok(origin) = engine.format_size(size, from) {
            if let Ok(converted) = engine.convert_size(&origin.to_string(), from, to) {
                let back = engine
                    .convert_size(&converted.to_string(), to, from)
                    .expect("a converted size must convert back");
                prop_assert_eq!(back.to_string(), origin.to_string());
            }
        }
    }

    // Sister alternatives always preserve total cup volume and stay on the
    // canonical axis.
    #[test]
    fn sister_alternatives_preserve_volume(size in canonical_sizes(), steps in 1u8..=3) {
        let engine = FitEngine::with_builtin_regions();
        for region in RegionCode::all() {
            for alt in engine.sister_sizes(size, region, steps).expect("sisters") {
                let sister = CanonicalSize::from_universal_code(alt.universal_code.as_str())
                    .expect("universal code");
                let band_steps =
                    (i32::from(sister.band_cm()) - i32::from(size.band_cm())) / 5;
                let cup_steps =
                    i32::from(sister.cup_volume()) - i32::from(size.cup_volume());
                prop_assert_eq!(band_steps + cup_steps, 0);
                prop_assert!(sister.cup_volume() >= 1);
            }
        }
    }

    // The conversion matrix never invents entries: every entry reparses to
    // the canonical size it was built from.
    #[test]
    fn matrix_entries_reparse_to_the_same_canonical(size in canonical_sizes()) {
        let engine = FitEngine::with_builtin_regions();
        let matrix = engine.conversion_matrix(size, &RegionCode::all());
        for (region, label) in matrix {
            let reparsed = engine
                .parse_size(&label.to_string(), region)
                .expect("matrix entry must reparse");
            prop_assert_eq!(reparsed, size);
        }
    }
}
