//! Property tests for filtering and scoring invariants

mod common;

use amplitude_anomaly::{classify_outliers, compute_bounds, filter_outliers, AnomalyModel};
use proptest::prelude::*;

fn amplitudes() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![1 => Just(f64::NAN), 19 => -500.0f64..500.0],
        1..300,
    )
    .prop_filter("needs a finite value", |v| v.iter().any(|x| x.is_finite()))
}

proptest! {
    #[test]
    fn bounds_are_ordered(data in amplitudes(), k in 0.0f64..5.0) {
        let b = compute_bounds(&data, k).unwrap();
        prop_assert!(b.lower() <= b.upper());
    }

    #[test]
    fn cleaned_values_are_finite_and_inside_bounds(data in amplitudes(), k in 0.0f64..5.0) {
        let b = compute_bounds(&data, k).unwrap();
        let cleaned = filter_outliers(&data, k).unwrap();
        prop_assert!(cleaned.len() <= data.len());
        for x in cleaned {
            prop_assert!(x.is_finite());
            prop_assert!(b.lower() <= x && x <= b.upper());
        }
    }

    #[test]
    fn flags_align_with_input(data in amplitudes(), k in 0.0f64..5.0) {
        let flags = classify_outliers(&data, k).unwrap();
        prop_assert_eq!(flags.len(), data.len());
        prop_assert!(data.iter().zip(&flags).all(|(x, f)| !(x.is_nan() && *f)));
    }

    #[test]
    fn report_at_mean_is_one(mean in -1e3f64..1e3, std in 1e-3f64..1e3) {
        let model = AnomalyModel::new(mean, std, 3.0 * std).unwrap();
        let p = model.anomaly_report(mean).unwrap();
        prop_assert!((p - 1.0).abs() < 1e-12);
    }

    #[test]
    fn report_does_not_increase_with_distance(
        mean in -1e3f64..1e3,
        std in 1e-1f64..1e2,
        d1 in 0.0f64..1e3,
        d2 in 0.0f64..1e3,
    ) {
        let model = AnomalyModel::new(mean, std, 3.0 * std).unwrap();
        let (near, far) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
        let p_near = model.anomaly_report(mean + near).unwrap();
        let p_far = model.anomaly_report(mean - far).unwrap();
        prop_assert!(p_far <= p_near + 1e-12);
    }

    #[test]
    fn verdict_is_symmetric(mean in -1e3f64..1e3, std in 0.0f64..1e2, d in 0.0f64..1e3) {
        let model = AnomalyModel::new(mean, std, 3.0 * std).unwrap();
        let margin = (d - model.threshold()).abs();
        prop_assume!(margin > 1e-6);
        prop_assert_eq!(model.is_anomaly(mean + d), model.is_anomaly(mean - d));
    }
}
