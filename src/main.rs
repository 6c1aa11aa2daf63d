//! Sixth-largest selection benchmark - entry point
//!
//! Runs the full experiment and writes the HTML report.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sixth_largest_bench::{
    benchmark::{ArrayGenerator, ExperimentDriver, TracingProgress},
    config::Config,
    report,
};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let generator = match config.generator.seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded generator");
            ArrayGenerator::seeded(seed)
        }
        None => ArrayGenerator::from_entropy(),
    };

    let mut driver = ExperimentDriver::new(generator);
    let result_set = driver.run_with_observer(&mut TracingProgress)?;

    tracing::info!("=== Building HTML report ===");
    let html = report::render_html(&result_set, chrono::Utc::now());
    report::write_report(&config.report.html_path, &html)?;

    if let Some(json_path) = &config.report.json_path {
        report::write_json(json_path, &result_set)?;
    }

    tracing::info!(
        "Done! Open {} in a browser to view the results.",
        config.report.html_path.display()
    );

    Ok(())
}
