use clap::Parser;
use wine_catalog::server::Publisher;
use wine_catalog::utils::{logger, validation::Validate};
use wine_catalog::{CliConfig, LocalStorage, PublishEngine, SitePipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting wine-catalog publisher");
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

    // 創建存儲和管道
    let storage = LocalStorage::new(config.output_dir.clone());
    let pipeline = SitePipeline::new(storage, config.clone());

    let engine = PublishEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Page build completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Page build completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Page build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                wine_catalog::utils::error::ErrorSeverity::Low => 0,
                wine_catalog::utils::error::ErrorSeverity::Medium => 2,
                wine_catalog::utils::error::ErrorSeverity::High => 1,
                wine_catalog::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    if config.no_serve {
        tracing::info!("--no-serve set, skipping the HTTP listener");
        return Ok(());
    }

    // 頁面建立後啟動靜態檔案伺服器,直到進程被終止
    let publisher = Publisher::bind(config.output_dir.clone(), &config.bind, config.port).await?;
    println!(
        "🌐 Serving {} on http://{}:{}",
        config.output_dir, config.bind, config.port
    );
    publisher.serve().await?;

    Ok(())
}
