use clap::Parser;
use jconfgen::utils::{logger, validation::Validate};
use jconfgen::{CliConfig, ConfGenEngine, HeaderPipeline, LocalStorage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting jconfgen");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let storage = LocalStorage::default();
    let pipeline = HeaderPipeline::new(storage, config);
    let engine = ConfGenEngine::new(pipeline);

    match engine.run() {
        Ok(written) => {
            tracing::info!("✅ Header materialization completed successfully!");
            println!("✅ Header materialization completed successfully!");
            for path in written {
                println!("📁 Wrote {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Materialization failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                jconfgen::utils::error::ErrorSeverity::Low => 0,
                jconfgen::utils::error::ErrorSeverity::Medium => 2,
                jconfgen::utils::error::ErrorSeverity::High => 1,
                jconfgen::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
