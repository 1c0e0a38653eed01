use clap::Parser;
use jconfgen::config::toml_config::TomlConfig;
use jconfgen::core::render;
use jconfgen::core::ConfigProvider;
use jconfgen::utils::{logger, validation::Validate};
use jconfgen::{ConfGenEngine, HeaderPipeline, LocalStorage};

#[derive(Parser)]
#[command(name = "toml-confgen")]
#[command(about = "Header materializer driven by a TOML build profile")]
struct Args {
    /// Path to TOML build profile
    #[arg(short, long, default_value = "confgen.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - show what would be rendered without writing anything
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-driven header materializer");
    tracing::info!("📁 Loading build profile from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Build profile loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        perform_dry_run(&config);
        return Ok(());
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

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Build Profile Summary:");
    println!("  Project: {} v{}", config.project(), config.version());
    println!("  JPEG lib version: {}", config.jpeg_lib_version());
    println!("  Arithmetic encoding: {}", config.arith_enc());
    println!("  Arithmetic decoding: {}", config.arith_dec());
    println!("  In-memory src/dst: {}", config.mem_srcdst());
    println!("  Templates: {}", config.template_dir());
    println!("  Output: {}", config.output_dir());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("📄 Templates to read:");
    println!("  {}/jconfig.h.in", config.template_dir());
    println!("  {}/config.h.in", config.template_dir());

    println!();
    println!("⚙️ Substitutions:");
    println!("  @VERSION@ -> {}", config.version());
    println!("  @JPEG_LIB_VERSION@ -> {}", config.jpeg_lib_version());
    println!("  @BUILD@ -> {}", render::today_stamp());
    println!("  @CMAKE_PROJECT_NAME@ -> {}", config.project());

    println!();
    println!("🔧 Feature directives:");
    for (name, toggle) in [
        (render::C_ARITH_DEFINE, config.arith_enc()),
        (render::D_ARITH_DEFINE, config.arith_dec()),
        (render::MEM_SRCDST_DEFINE, config.mem_srcdst()),
    ] {
        let directive = if toggle.is_enabled() { "define" } else { "undef" };
        println!("  #{} {}", directive, name);
    }

    println!();
    println!("💾 Outputs to write:");
    println!("  {}/jconfig.h", config.output_dir());
    println!("  {}/config.h", config.output_dir());

    println!();
    println!("✅ Dry run analysis complete. Re-run without --dry-run to write the headers.");
}
