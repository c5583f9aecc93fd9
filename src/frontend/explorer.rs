use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::backend::mathphysics::Meter;
use crate::backend::signal::{SignalModel, SignalReading};

use super::config::ReportConfig;
use super::input::parse_distance;
use super::report::{calculation_steps, summary};


pub use output::{write_snapshot, OutputError, Snapshot};


mod output;


const QUIT_COMMANDS: [&str; 2] = ["q", "quit"];


#[must_use]
pub fn is_within_range(distance: Meter, max_distance: u32) -> bool {
    (0.0..=Meter::from(max_distance)).contains(&distance)
}


/// Owns the selected distance and recomputes its reading on every change.
///
/// The curve does not depend on the selection, so it is computed once.
pub struct SignalExplorer {
    model: SignalModel,
    max_distance: u32,
    precision: usize,
    output_directory: Option<PathBuf>,
    curve: Vec<SignalReading>,
    reading: SignalReading,
}

impl SignalExplorer {
    #[must_use]
    pub fn new(model: SignalModel, report_config: &ReportConfig) -> Self {
        let max_distance = report_config.max_distance();

        Self {
            model,
            max_distance,
            precision: report_config.precision(),
            output_directory: report_config
                .output_directory()
                .map(Path::to_path_buf),
            curve: model.compute_curve(max_distance),
            reading: model.compute_reading(report_config.distance()),
        }
    }

    #[must_use]
    pub fn model(&self) -> &SignalModel {
        &self.model
    }

    #[must_use]
    pub fn distance(&self) -> Meter {
        self.reading.distance_meters()
    }

    #[must_use]
    pub fn reading(&self) -> &SignalReading {
        &self.reading
    }

    #[must_use]
    pub fn curve(&self) -> &[SignalReading] {
        &self.curve
    }

    pub fn set_distance(&mut self, distance: Meter) -> &SignalReading {
        if !is_within_range(distance, self.max_distance) {
            warn!(
                "Distance {distance} m is outside of the plotted range \
                0..={} m",
                self.max_distance
            );
        }

        self.reading = self.model.compute_reading(distance);

        debug!(
            "Distance: {} m, Strength: {}, Power: {}",
            self.reading.distance_meters(),
            self.reading.strength_percent(),
            self.reading.power_dbm()
        );

        &self.reading
    }

    #[must_use]
    pub fn calculation_report(&self) -> String {
        format!(
            "{}\n\n{}",
            calculation_steps(&self.reading, &self.model, self.precision),
            summary(&self.reading)
        )
    }

    /// Writes the current state to the output directory, if one is set.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the snapshot can not be serialized or written.
    pub fn save_snapshot(&self) -> Result<Option<PathBuf>, OutputError> {
        let Some(output_directory) = &self.output_directory else {
            return Ok(None);
        };

        let file_path = write_snapshot(
            output_directory,
            &Snapshot::new(&self.model, &self.reading, &self.curve)
        )?;

        info!("Snapshot written to {}", file_path.display());

        Ok(Some(file_path))
    }

    /// Reads one distance per line from `input` and prints the summary of
    /// each to `output` until `q`, `quit` or the end of input. Lines that are
    /// not finite numbers are reported and skipped.
    ///
    /// # Errors
    ///
    /// Will return `Err` if reading input, writing output or saving a
    /// snapshot fails.
    pub fn play<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W
    ) -> Result<(), OutputError> {
        self.start_info();

        writeln!(output, "Enter a distance in meters (q to quit):")?;

        for line in input.lines() {
            let line    = line?;
            let command = line.trim();

            if command.is_empty() {
                continue;
            }
            if QUIT_COMMANDS.contains(&command) {
                break;
            }

            match parse_distance(command) {
                Ok(distance) => {
                    self.set_distance(distance);
                    writeln!(output, "{}\n", summary(&self.reading))?;
                    self.save_snapshot()?;
                },
                Err(error) => {
                    warn!("Skipped input line: {error}");
                    writeln!(output, "Invalid distance: {error}")?;
                },
            }
        }

        self.end_info();

        Ok(())
    }

    fn start_info(&self) {
        info!(
            "Exploring {} MHz at {}, starting at {} m",
            self.model.frequency(),
            self.model.transmit_power(),
            self.distance()
        );
    }

    fn end_info(&self) {
        info!(
            "Exploration finished at {} m with {}",
            self.distance(),
            self.reading.strength_percent()
        );
    }
}
