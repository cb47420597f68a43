use clap::Parser;
use eol_finder::config::{prompt::prompt_year, resolve_output_dir};
use eol_finder::utils::error::ErrorCategory;
use eol_finder::utils::{logger, validation::Validate};
use eol_finder::{
    AppConfig, CliConfig, EolApiClient, EolError, EolPipeline, EtlEngine, LocalStorage, RunSummary,
};

const BANNER: &str = r"
  ____ ____  _        ____ _           _
 | ___/ __ \| |      |  __(_)_ __   __| | ___ _ __
 |  _|| |  | | |     | |_ | | '_ \ / _` |/ _ \ '__|
 | |__| |__| | |___  |  _|| | | | | (_| |  __/ |
 |____|\____/|_____| |_|  |_|_| |_|\__,_|\___|_|";

async fn run(cli: CliConfig) -> Result<RunSummary, EolError> {
    let year = {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        prompt_year(&mut stdin.lock(), &mut stdout.lock())?
    };

    let output_dir = resolve_output_dir(cli.output.as_deref())?;
    let config = AppConfig::from_env(output_dir);
    config.validate()?;
    tracing::debug!("Config: {:?}", config);

    let source = EolApiClient::new(&config)?;
    let storage = LocalStorage::new(config.output_dir.clone());
    let pipeline = EolPipeline::new(storage, source, year);

    EtlEngine::new(pipeline).run().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();
    logger::init_cli_logger();

    println!("{}", BANNER);
    println!("===========================================\n");

    match run(cli).await {
        Ok(summary) => {
            println!(
                "\nFound {} products with an EOL in {}.",
                summary.matches, summary.year
            );
            println!("Data exported to {}", summary.output_path.display());
        }
        Err(e) => {
            tracing::debug!("Run aborted: {} (Category: {:?})", e, e.category());
            tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());

            // Only the catalog request can surface a network error here.
            if e.category() == ErrorCategory::Network {
                println!("Failed to fetch product list: {}", e);
            } else {
                eprintln!("{}", e.user_friendly_message());
            }
            std::process::exit(e.exit_code());
        }
    }
}
