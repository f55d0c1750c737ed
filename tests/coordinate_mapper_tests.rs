use approx::assert_abs_diff_eq;
use chart_motion::core::{CoordinateMapper, PlotRect, ValueDomain, to_screen};
use proptest::prelude::*;

#[test]
fn maps_index_and_value_into_plot() {
    let plot = PlotRect::new(10.0, 20.0, 400.0, 200.0);
    let point = to_screen(2, 50.0, 5, ValueDomain::default(), plot);

    assert_abs_diff_eq!(point.x, 210.0, epsilon = 1e-9);
    assert_abs_diff_eq!(point.y, 120.0, epsilon = 1e-9);
}

#[test]
fn domain_bounds_map_to_plot_edges() {
    let plot = PlotRect::new(0.0, 30.0, 300.0, 150.0);
    let mapper = CoordinateMapper::new(ValueDomain::default(), plot, 4);

    assert_abs_diff_eq!(mapper.y_for_value(0.0), plot.bottom(), epsilon = 1e-9);
    assert_abs_diff_eq!(mapper.y_for_value(100.0), plot.top, epsilon = 1e-9);
}

#[test]
fn empty_series_does_not_divide_by_zero() {
    let plot = PlotRect::new(5.0, 5.0, 90.0, 90.0);
    let point = to_screen(0, 10.0, 0, ValueDomain::default(), plot);
    assert!(point.is_finite());
    assert_eq!(point.x, 5.0);
}

#[test]
fn domain_pads_observed_values() {
    let domain = ValueDomain::from_values([10.0, 110.0]);
    assert_abs_diff_eq!(domain.min(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(domain.max(), 120.0, epsilon = 1e-9);

    let flat = ValueDomain::from_values([50.0, 50.0]);
    assert_abs_diff_eq!(flat.min(), 45.0, epsilon = 1e-9);
    assert_abs_diff_eq!(flat.max(), 55.0, epsilon = 1e-9);

    let zeros = ValueDomain::from_values([0.0]);
    assert_eq!(zeros.min(), 0.0);
    assert!(zeros.max() > zeros.min());
}

#[test]
fn domain_without_values_falls_back_to_default() {
    assert_eq!(ValueDomain::from_values(std::iter::empty()), ValueDomain::default());
    assert_eq!(
        ValueDomain::from_values([f64::NAN, f64::INFINITY]),
        ValueDomain::default()
    );
}

proptest! {
    #[test]
    fn first_and_last_index_land_on_plot_edges(
        left in -500.0f64..500.0,
        top in -500.0f64..500.0,
        width in 1.0f64..4_000.0,
        height in 1.0f64..4_000.0,
        len in 2usize..1_000,
        values in proptest::collection::vec(0.0f64..1_000_000.0, 1..32)
    ) {
        let plot = PlotRect::new(left, top, width, height);
        let domain = ValueDomain::from_values(values);
        let mapper = CoordinateMapper::new(domain, plot, len);

        prop_assert!((mapper.x_for_index(0) - plot.left).abs() <= 1e-9);
        prop_assert!((mapper.x_for_index(len - 1) - plot.right()).abs() <= 1e-6);
    }

    #[test]
    fn value_at_y_round_trips(value in 0.0f64..10_000.0) {
        let plot = PlotRect::new(40.0, 16.0, 320.0, 240.0);
        let domain = ValueDomain::from_values([0.0, 10_000.0]);
        let mapper = CoordinateMapper::new(domain, plot, 12);
        let y = mapper.y_for_value(value);
        prop_assert!((mapper.value_at_y(y) - value).abs() <= 1e-6);
    }
}
