use anyhow::Result;
use tracing::info;

use watchmark_convert::{cli, config, logging, pipeline, util};

fn main() -> Result<()> {
    logging::init_logging();

    let cli_opts = cli::parse();
    let loaded = config::load_config(cli_opts.config_path.as_deref())?;
    let mut cfg = loaded.config;
    util::apply_cli_overrides(&mut cfg, &cli_opts);

    info!(
        "starting run_id={} input={} output={} legacy_timestamps={:?}",
        cfg.run_id,
        cfg.input_path.display(),
        cfg.output_path.display(),
        cfg.legacy_timestamp_policy
    );

    let opts = pipeline::RunOptions {
        dry_run: cli_opts.dry_run,
        verify: cli_opts.verify,
        summary_path: cli_opts.summary_path.clone(),
        now_ms: chrono::Utc::now().timestamp_millis(),
    };
    pipeline::run_conversion(&cfg, &loaded.config_hash, &opts)?;

    info!("watchmark-convert run finished");
    Ok(())
}
