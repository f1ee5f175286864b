use clap::Parser;
use corrfilter::io::{load_grey_image, save_grey_image};
use corrfilter::{Filter, FilterConfig, Kernel};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "corrfilter CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum FilterJson {
    Invert,
    Blur { size: usize },
    Sharpen { size: usize },
    Edges,
    Correlate { kernel: Vec<Vec<f64>> },
}

impl FilterJson {
    fn into_filter(self) -> Result<Filter, corrfilter::FilterError> {
        Ok(match self {
            FilterJson::Invert => Filter::Invert,
            FilterJson::Blur { size } => Filter::Blur { size },
            FilterJson::Sharpen { size } => Filter::Sharpen { size },
            FilterJson::Edges => Filter::EdgeDetect,
            FilterJson::Correlate { kernel } => Filter::Correlate {
                kernel: Kernel::new(kernel)?,
            },
        })
    }
}

#[derive(Debug, Deserialize)]
struct PipelineConfig {
    input: String,
    output: String,
    filter: FilterJson,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    parallel: bool,
    report_path: Option<String>,
    pipelines: Vec<PipelineConfig>,
}

#[derive(Debug, Serialize)]
struct PipelineRecord {
    input: String,
    output: String,
    filter: &'static str,
    width: usize,
    height: usize,
    elapsed_ms: f64,
}

#[derive(Debug, Serialize)]
struct Report {
    parallel: bool,
    results: Vec<PipelineRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env()
                    .add_directive("corrfilter=debug".parse()?)
                    .add_directive("corrfilter_cli=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.pipelines.is_empty() {
        return Err("at least one pipeline must be configured".into());
    }
    let filter_cfg = FilterConfig {
        parallel: config.parallel,
    };

    let mut results = Vec::with_capacity(config.pipelines.len());
    for pipeline in config.pipelines {
        let filter = pipeline.filter.into_filter()?;
        let start = Instant::now();
        let image = load_grey_image(&pipeline.input)?;
        let filtered = filter.apply(&image, &filter_cfg)?;
        save_grey_image(&filtered, &pipeline.output)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

        tracing::info!(
            input = %pipeline.input,
            output = %pipeline.output,
            filter = filter.name(),
            width = filtered.width(),
            height = filtered.height(),
            elapsed_ms,
            "pipeline finished"
        );
        results.push(PipelineRecord {
            input: pipeline.input,
            output: pipeline.output,
            filter: filter.name(),
            width: filtered.width(),
            height: filtered.height(),
            elapsed_ms,
        });
    }

    let report = Report {
        parallel: config.parallel,
        results,
    };
    let json = serde_json::to_string_pretty(&report)?;
    match config.report_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
