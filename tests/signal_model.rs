use assert_approx_eq::assert_approx_eq;

use wifi_signal_sim::backend::MAX_SAMPLED_DISTANCE;
use wifi_signal_sim::backend::signal::{
    compute_curve, compute_reading, SignalLevel, SignalModel
};
use wifi_signal_sim::frontend::notation::{format_scientific, DEFAULT_PRECISION};


const TOLERANCE: f64 = 1e-2;


#[test]
fn strength_is_a_percentage_for_positive_distances() {
    for distance in [0.001, 0.5, 1.0, 6.0, 20.0, 100.0, 10_000.0] {
        let strength = compute_reading(distance).strength_percent().value();

        assert!((0.0..=100.0).contains(&strength), "{distance} m: {strength}");
    }
}

#[test]
fn strength_never_increases_along_the_curve() {
    let curve = compute_curve(MAX_SAMPLED_DISTANCE);

    for pair in curve.windows(2) {
        assert!(pair[1].strength_percent() <= pair[0].strength_percent());
        assert!(pair[1].power_dbm() < pair[0].power_dbm());
    }
}

#[test]
fn zero_distance_is_the_no_signal_reading() {
    let reading = compute_reading(0.0);

    assert_eq!(0.0, reading.strength_percent().value());
    assert!(reading.power_dbm().value().is_infinite());
    assert!(reading.power_dbm().value().is_sign_negative());
    assert_eq!(SignalLevel::NoSignal, reading.level());
}

#[test]
fn readings_are_deterministic() {
    for distance in 1..=MAX_SAMPLED_DISTANCE {
        let distance = f64::from(distance) + 0.25;

        assert_eq!(compute_reading(distance), compute_reading(distance));
    }
}

#[test]
fn reference_curve_has_twenty_ordered_samples() {
    let distances: Vec<f64> = compute_curve(20)
        .iter()
        .map(|reading| reading.distance_meters())
        .collect();

    let expected: Vec<f64> = (1..=20).map(f64::from).collect();

    assert_eq!(expected, distances);
}

#[test]
fn free_functions_use_reference_model() {
    let model = SignalModel::default();

    assert_eq!(model.compute_reading(7.5), compute_reading(7.5));
    assert_eq!(model.compute_curve(5), compute_curve(5));
}

#[test]
fn six_meter_scenario() {
    let reading = compute_reading(6.0);

    assert_approx_eq!(0.006, reading.distance_km(), TOLERANCE);
    assert_approx_eq!(0.2210, reading.received_power_mw().value(), TOLERANCE);
    assert_approx_eq!(55.61, reading.path_loss_db().value(), TOLERANCE);
    assert_approx_eq!(-62.16, reading.power_dbm().value(), TOLERANCE);
    assert_approx_eq!(63.8, reading.strength_percent().value(), TOLERANCE);
    assert_eq!(64, reading.throughput_mbps());
    assert_eq!(
        "6.078 × 10⁻⁷",
        format_scientific(reading.corrected_power_mw().value(), DEFAULT_PRECISION)
    );
}
