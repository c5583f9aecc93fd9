use crate::backend::mathphysics::{Dbm, FSPL_KM_MHZ_CONSTANT};
use crate::backend::signal::{SignalModel, SignalReading};

use super::notation::format_scientific;


const NO_SIGNAL: &str = "no signal";


fn format_power(power: Dbm) -> String {
    if power == Dbm::NO_SIGNAL {
        return NO_SIGNAL.to_string();
    }

    format!("{:.2} dBm", power.value())
}


#[must_use]
pub fn title(model: &SignalModel) -> String {
    format!(
        "Wi-Fi signal strength at {} MHz, transmit power {}",
        model.frequency(),
        model.transmit_power()
    )
}

/// Intermediate quantities of `reading`, one formula per step.
#[must_use]
pub fn calculation_steps(
    reading: &SignalReading,
    model: &SignalModel,
    precision: usize,
) -> String {
    if reading.is_no_signal() {
        return format!(
            "No signal at {} m: the distance must be greater than 0 m",
            reading.distance_meters()
        );
    }

    [
        "Step-by-step calculation:".to_string(),
        "1. Inverse-square law:".to_string(),
        format!(
            "   I = P / (4πR²) = {} / (4π({})²) = {} mW",
            model.transmit_power().value(),
            reading.distance_meters(),
            format_scientific(reading.received_power_mw().value(), precision)
        ),
        "2. Free-space path loss:".to_string(),
        format!(
            "   FSPL = 20log₁₀(d_km) + 20log₁₀(f_MHz) + {FSPL_KM_MHZ_CONSTANT}"
        ),
        format!(
            "        = 20log₁₀({:.4}) + 20log₁₀({}) + {} = {:.2} dB",
            reading.distance_km(),
            model.frequency(),
            FSPL_KM_MHZ_CONSTANT,
            reading.path_loss_db().value()
        ),
        "3. Corrected power:".to_string(),
        format!(
            "   I_corrected = I × 10^(-FSPL/10) = {} mW",
            format_scientific(reading.corrected_power_mw().value(), precision)
        ),
        "4. Convert to dBm:".to_string(),
        format!(
            "   P_dBm = 10log₁₀(P_mW) = {}",
            format_power(reading.power_dbm())
        ),
    ]
        .join("\n")
}

#[must_use]
pub fn summary(reading: &SignalReading) -> String {
    [
        format!("Signal strength: {}", reading.strength_percent()),
        format!("Power:           {}", format_power(reading.power_dbm())),
        format!("Distance:        {} m", reading.distance_meters()),
        format!("Throughput:      {} Mbps", reading.throughput_mbps()),
        format!("Level:           {}", reading.level()),
    ]
        .join("\n")
}

#[must_use]
pub fn curve_table(curve: &[SignalReading]) -> String {
    let header = format!(
        "{:>8}  {:>10}  {:>10}  {}",
        "Distance", "Strength", "Power", "Level"
    );

    let rows = curve
        .iter()
        .map(|reading|
            format!(
                "{:>6} m  {:>9.1}%  {:>10}  {}",
                reading.distance_meters(),
                reading.strength_percent().value(),
                format!("{:.1} dBm", reading.power_dbm().value()),
                reading.level()
            )
        );

    std::iter::once(header)
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}
