use clap::Parser;
use generator::field::{build_input_from_config, FieldConfig};
use log::debug;
use std::io;
use std::path::PathBuf;
use workflow::config::{WorkflowConfig, DEFAULT_OUTPUT};
use workflow::report::deliver;
use workflow::runner::Runner;

mod generator;
mod workflow;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Find the largest group of sensors lying within a distance of each other"
)]
struct Args {
    /// Write the chosen sensors to the output file ("true" or "false")
    write_file: Option<String>,
    /// Print the chosen sensors after the timing summary ("true" or "false")
    print_result: Option<String>,
    /// Positional arguments after the second are ignored
    #[arg(trailing_var_arg = true, hide = true)]
    extra: Vec<String>,
    /// Read sensors from this file instead of standard input
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Print a synthetic input with this many sensors and exit
    #[arg(long)]
    generate: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 100.0)]
    width: f64,
    #[arg(long, default_value_t = 100.0)]
    height: f64,
    /// Threshold written on the first line of a generated input
    #[arg(long, default_value_t = 10.0)]
    threshold: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    if !args.extra.is_empty() {
        debug!("ignoring extra arguments {:?}", args.extra);
    }

    if let Some(count) = args.generate {
        let field = FieldConfig {
            count,
            width: args.width,
            height: args.height,
            threshold: args.threshold,
            seed: args.seed,
        };
        print!("{}", build_input_from_config(&field)?);
        return Ok(());
    }

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(
            args.write_file.as_deref(),
            args.print_result.as_deref(),
            args.output,
            args.input,
        )
    };
    debug!("workflow config {:?}", workflow_config);

    let runner = Runner::new(workflow_config);
    let result = runner.execute()?;
    deliver(runner.config(), &result, &mut io::stdout().lock())?;

    let metrics = runner.metrics().snapshot();
    debug!(
        "scanned {} sensors, rejected {}, chose {}",
        metrics.scanned, metrics.rejected, metrics.chosen
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_after_the_flags_are_ignored() {
        let args = Args::try_parse_from(["sensornet", "true", "false", "extra", "more"]).unwrap();
        assert_eq!(args.write_file.as_deref(), Some("true"));
        assert_eq!(args.print_result.as_deref(), Some("false"));
        assert_eq!(args.extra, vec!["extra", "more"]);
    }

    #[test]
    fn flags_are_optional() {
        let args = Args::try_parse_from(["sensornet"]).unwrap();
        assert!(args.write_file.is_none());
        assert!(args.print_result.is_none());
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
    }
}
