use clap::Parser;
use sec_insight_client::utils::{logger, validation::Validate};
use sec_insight_client::{CliConfig, Command, FilingApi, Result};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sec-insight CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(config).await {
        tracing::error!("Request failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(config: CliConfig) -> Result<()> {
    let command = config.command.clone();
    let api = FilingApi::new(config);

    match command {
        Command::Track { ticker } => {
            let response = api.track(&ticker).await?;
            println!("✅ Now tracking {}", response.ticker);
            println!("{}", serde_json::to_string_pretty(&response.recent_filings)?);
        }
        Command::Analyze { url, ticker, form } => {
            let response = api.analyze(&url, &ticker, &form).await?;
            println!("{}", response.analysis);
        }
        Command::AnalyzeCompany { ticker } => {
            let response = api.analyze_company(&ticker).await?;
            println!("{}", response.analysis);
        }
        Command::Feed => {
            let response = api.feed().await?;
            if response.updates.is_empty() {
                println!("No new filings.");
            } else {
                println!("{}", serde_json::to_string_pretty(&response.updates)?);
            }
        }
        Command::Tracked => {
            let tickers = api.tracked().await?;
            if tickers.is_empty() {
                println!("No tickers tracked yet.");
            } else {
                for ticker in tickers {
                    println!("{}", ticker);
                }
            }
        }
    }

    Ok(())
}
