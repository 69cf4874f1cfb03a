use crate::workflow::config::WorkflowConfig;
use crate::workflow::runner::WorkflowResult;
use anyhow::Context;
use log::{error, info};
use sensorcore::codec::write_chosen;
use std::fmt::Write;
use std::io;

/// Stage timing lines, printed on every successful run.
pub fn timing_summary(result: &WorkflowResult) -> String {
    let timings = &result.timings;
    format!(
        "Parsing {} sensor coordinates from the input took {:.4} seconds\n\
         Sorting the sensor coordinates took {:.4} seconds\n\
         Finding the most populated subset of sensors took {:.4} seconds\n",
        result.sensor_count,
        timings.parse.as_secs_f64(),
        timings.sort.as_secs_f64(),
        timings.scan.as_secs_f64(),
    )
}

/// Header line followed by one `x,y` line per chosen sensor.
pub fn selection_summary(result: &WorkflowResult) -> String {
    let points = &result.selection.points;
    let mut out = format!(
        "Largest subset of sensors within {:.1} distance of each other has {} sensors\n",
        result.threshold,
        points.len()
    );
    for point in points {
        let _ = writeln!(out, "{}", point);
    }
    out
}

/// Prints the timing summary to `out`, writes the chosen sensors to the
/// configured file, then prints the selection when enabled.
///
/// A failed file write is logged and does not stop the console report.
/// Only errors writing to `out` are returned.
pub fn deliver<W: io::Write>(
    config: &WorkflowConfig,
    result: &WorkflowResult,
    out: &mut W,
) -> anyhow::Result<()> {
    out.write_all(timing_summary(result).as_bytes())
        .context("writing timing summary")?;

    if config.write_file {
        match write_chosen(&config.output_path, &result.selection.points) {
            Ok(()) => info!(
                "wrote {} chosen sensors to {}",
                result.selection.len(),
                config.output_path.display()
            ),
            Err(err) => error!("{}", err),
        }
    }

    if config.print_result {
        out.write_all(selection_summary(result).as_bytes())
            .context("writing chosen sensors")?;
    }
    out.flush().context("flushing console report")?;
    Ok(())
}
