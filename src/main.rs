use clap::Parser;
use listing_scrape::config::site_profile::SiteProfile;
use listing_scrape::core::extract::SelectorSet;
use listing_scrape::core::{ConfigProvider, Storage};
use listing_scrape::utils::{logger, validation::Validate};
use listing_scrape::{CliConfig, LocalStorage, PageScrapePipeline, ScrapeEngine};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("🚀 Starting listing-scrape CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 依設定檔或命令列參數執行
    let outcome = match &config.profile {
        Some(profile_path) => {
            tracing::info!("📁 Loading site profile from: {}", profile_path);

            let profile = match SiteProfile::from_file(profile_path) {
                Ok(profile) => profile,
                Err(e) => {
                    eprintln!("❌ Failed to load site profile '{}': {}", profile_path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };

            if let Err(e) = profile.validate() {
                tracing::error!("❌ Site profile validation failed: {}", e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }

            match profile.selector_set() {
                Ok(selectors) => {
                    let storage = LocalStorage::new(profile.output.path.clone());
                    run_scrape(storage, profile, selectors, monitor_enabled).await
                }
                Err(e) => Err(e),
            }
        }
        None => {
            let storage = LocalStorage::new(config.output_path.clone());
            run_scrape(
                storage,
                config.clone(),
                SelectorSet::defaults(),
                monitor_enabled,
            )
            .await
        }
    };

    match outcome {
        Ok(output_path) => {
            tracing::info!("✅ Scrape completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Scrape completed successfully!");
        }
        Err(e) => {
            tracing::error!("❌ Scrape failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            std::process::exit(1);
        }
    }

    Ok(())
}

// 建立管道並跑完三個階段
async fn run_scrape<S, C>(
    storage: S,
    config: C,
    selectors: SelectorSet,
    monitor_enabled: bool,
) -> listing_scrape::Result<String>
where
    S: Storage,
    C: ConfigProvider,
{
    let pipeline = PageScrapePipeline::new(storage, config, selectors)?;
    let engine = ScrapeEngine::new_with_monitoring(pipeline, monitor_enabled);
    engine.run().await
}
