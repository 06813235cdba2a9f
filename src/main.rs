use clap::Parser;
use menu_extract::utils::error::ErrorSeverity;
use menu_extract::utils::logger;
use menu_extract::{CliConfig, EtlEngine, EtlError, LocalStorage, MenuPipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            exit_with(&e)
        }
    };

    let storage = LocalStorage::new(config.base_dir.clone());
    let pipeline = MenuPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            println!(
                "Wrote {} categories to {}",
                summary.category_count, summary.output_path
            );
        }
        Err(e) => {
            tracing::error!(
                "Menu extraction failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            exit_with(&e);
        }
    }
}

fn exit_with(e: &EtlError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
