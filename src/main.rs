use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, LevelFilter};
use serde_json::json;

use zkevm_bridge_config::config::{Config, DEFAULT_CONFIG_PATH};
use zkevm_bridge_config::constants::*;
use zkevm_bridge_config::report::{build_report_error_url, ReportErrorFields};
use zkevm_bridge_config::storage::JsonFileStorage;
use zkevm_bridge_config::{get_chain_tokens, get_chains, ChainKey, Erc20Table};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "info")]
    log_level: String,

    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the application constants
    Constants,
    /// Resolve both bridge chains against their RPC endpoints
    Chains,
    /// Print the token list of each chain
    Tokens {
        #[arg(long)]
        chain: Option<ChainKey>,
    },
    /// Print a prefilled bug report link
    ReportUrl {
        #[arg(long)]
        url: String,
        #[arg(long)]
        network: String,
        #[arg(long)]
        platform: String,
        #[arg(long)]
        error: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Parse command line arguments and setup logging
    let args = Args::parse();
    let log_level = match args.log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level.to_string())).init();

    let output = match args.command {
        Command::Constants => json!({
            "preferredCurrencyKey": PREFERRED_CURRENCY_KEY,
            "preferredCurrency": PREFERRED_CURRENCY,
            "preferredCurrencyPrecision": PREFERRED_CURRENCY_PRECISION,
            "snackbarAutoHideDuration": SNACKBAR_AUTO_HIDE_DURATION,
            "autoRefreshRate": AUTO_REFRESH_RATE,
            "reportErrorFormEntries": {
                "url": REPORT_ERROR_FORM_ENTRIES.url,
                "network": REPORT_ERROR_FORM_ENTRIES.network,
                "platform": REPORT_ERROR_FORM_ENTRIES.platform,
                "error": REPORT_ERROR_FORM_ENTRIES.error,
            },
            "reportErrorFormUrl": REPORT_ERROR_FORM_URL,
            "bridgeCallGasIncreasePercentage": BRIDGE_CALL_GAS_INCREASE_PERCENTAGE,
            "ethTokenLogoURI": ETH_TOKEN_LOGO_URI,
        }),
        Command::ReportUrl {
            url,
            network,
            platform,
            error,
        } => {
            let fields = ReportErrorFields {
                url,
                network,
                platform,
                error,
            };
            json!(build_report_error_url(&fields)?.as_str())
        }
        Command::Chains => {
            let config = load_config(&args.config)?;
            let chains = get_chains(
                &config.ethereum,
                &config.polygon_hermez,
                config.rpc.timeout(),
            )
            .await?;
            serde_json::to_value(&chains)?
        }
        Command::Tokens { chain } => {
            let config = load_config(&args.config)?;
            let erc20_tokens = match &config.storage.erc20_tokens_path {
                Some(path) => Erc20Table::from_file(path)?,
                None => Erc20Table::bundled()?,
            };
            let storage = JsonFileStorage::new(&config.storage.custom_tokens_path);
            let chains = get_chains(
                &config.ethereum,
                &config.polygon_hermez,
                config.rpc.timeout(),
            )
            .await?;

            let mut lists = serde_json::Map::new();
            for c in chains.iter().filter(|c| chain.map_or(true, |key| c.key == key)) {
                let tokens = get_chain_tokens(c, &erc20_tokens, &storage);
                info!("{} tokens available on {}", tokens.len(), c.key);
                lists.insert(c.key.to_string(), serde_json::to_value(tokens)?);
            }
            serde_json::Value::Object(lists)
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn load_config(path: &str) -> anyhow::Result<Config> {
    let config = Config::load_or_env(path)?;
    config.validate()?;
    info!("Configuration loaded: {:?}", config);
    Ok(config)
}
