use std::path::PathBuf;
use std::process::ExitCode;

use candle_core::{DType, Tensor};
use clap::Parser;

use probe_core::config::Config;
use probe_core::telemetry::init_tracing;
use probe_core::{ModelKind, WordRepresentation};
use probe_model::{build_model, select_device};

/// Build the configured word representation model and push a zero batch
/// through it, to catch a config that selects a model with no forward pass.
#[derive(Parser)]
#[command(name = "probe-check")]
#[command(version)]
struct Args {
    /// Directory holding config.toml and config.<env>.toml (default: working directory)
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Override `model.kind` from the config
    #[arg(long)]
    kind: Option<ModelKind>,

    #[arg(long, default_value_t = 2)]
    batch: usize,

    #[arg(long, default_value_t = 8)]
    seq_len: usize,
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config_dir {
        Some(dir) => Config::load_from(dir),
        None => Config::load(),
    }
    .map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let mut model_config = config.model().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    if let Some(kind) = args.kind {
        model_config.kind = kind;
    }

    let model = build_model(&model_config);
    let device = select_device();
    let batch = Tensor::zeros((args.batch, args.seq_len, model_config.hidden_dim), DType::F32, &device)?;

    match model.forward(batch) {
        Ok(out) => {
            println!("✅ {} model produced word vectors with shape {:?}", model.kind(), out.dims());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_not_implemented() => {
            tracing::warn!(kind = %model.kind(), "configured model has no forward pass");
            eprintln!("❌ {}", e);
            Ok(ExitCode::from(2))
        }
        Err(e) => Err(e.into()),
    }
}
