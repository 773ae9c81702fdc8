use clap::Parser;
use hiring_list::app::render;
use hiring_list::domain::ports::{ConfigProvider, Storage};
use hiring_list::utils::logger;
use hiring_list::{
    AppConfig, CliConfig, EtlEngine, EtlError, HiringPipeline, HiringRepository, HiringViewModel,
    LocalStorage, OutputFormat,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    // The repository is built once here and shared by whoever loads.
    let result = match config.source_path() {
        Some(path) => {
            let repository = HiringRepository::new(LocalStorage::new("."), path);
            run(Arc::new(repository), &config).await
        }
        None => run(Arc::new(HiringRepository::bundled()), &config).await,
    };

    if let Err(e) = result {
        exit_with(&e);
    }

    Ok(())
}

async fn run<S: Storage + 'static>(
    repository: Arc<HiringRepository<S>>,
    config: &AppConfig,
) -> hiring_list::Result<()> {
    if config.writes_to_stdout() {
        return show(repository, config.output_format()).await;
    }

    let output_dir = config.output_path().unwrap_or(".").to_string();
    let pipeline = HiringPipeline::new(repository, LocalStorage::new(output_dir), config.clone());
    let engine = EtlEngine::new_with_monitoring(pipeline, config.monitor);

    let output_path = engine.run().await?;
    println!("✅ Hiring items written to {}", output_path);
    Ok(())
}

/// Loads through the view model and prints whatever state it settles on.
async fn show<S: Storage + 'static>(
    repository: Arc<HiringRepository<S>>,
    format: OutputFormat,
) -> hiring_list::Result<()> {
    let view_model = HiringViewModel::new(repository);
    let mut states = view_model.subscribe();

    let renderer = tokio::spawn(async move {
        while states.changed().await.is_ok() {
            let state = states.borrow_and_update().clone();
            if state.loading {
                tracing::info!("{}", render::LOADING_MESSAGE);
                continue;
            }
            return Some(state);
        }
        None
    });

    view_model.load().await;

    let state = renderer
        .await
        .map_err(|e| EtlError::ProcessingError {
            message: format!("renderer task failed: {}", e),
        })?
        .unwrap_or_else(|| view_model.state());

    print!("{}", render::render_view_state(&state, format)?);

    if state.failure {
        std::process::exit(2);
    }
    Ok(())
}

fn exit_with(e: &EtlError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
