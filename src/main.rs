use campsite_etl::core::ConfigProvider;
use campsite_etl::utils::error::{CampsiteError, ErrorSeverity};
use campsite_etl::utils::{logger, validation::Validate};
use campsite_etl::{CampsitePipeline, CliConfig, EtlEngine, LocalStorage, TomlConfig};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting campsite-etl");
    tracing::debug!("CLI config: {:?}", cli);

    let result = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path).and_then(|mut config| {
                config.apply_overrides(&cli);
                run(config)
            })
        }
        None => run(cli.clone()),
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }

    Ok(())
}

fn run<C: ConfigProvider + Validate>(config: C) -> Result<(), CampsiteError> {
    config.validate()?;

    let pipeline = CampsitePipeline::new(LocalStorage::default(), config);
    let summary = EtlEngine::new(pipeline).run()?;

    if let Some(listing) = &summary.listing {
        print!("{}", listing);
    }
    tracing::info!("✅ Listed {} campsites", summary.record_count);
    Ok(())
}

// 依嚴重程度決定退出碼
fn exit_code(error: &CampsiteError) -> i32 {
    match error.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
