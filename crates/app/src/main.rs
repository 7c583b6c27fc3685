use std::sync::Arc;

use kabu_api::server::{AppState, start_server};
use kabu_core::config::AppConfig;
use kabu_store::market::MemoryMarketStore;
use kabu_store::trade::MemoryTradeStore;
use tracing::info;

/// # Summary
/// 应用启动入口，纯粹的 DI 容器。
/// 负责实例化所有具体实现组件并通过 Arc<dyn Trait> 注入到 API 层。
///
/// # Logic
/// 1. 初始化全局日志。
/// 2. 加载应用配置。
/// 3. 实例化存储层（内存仓储，进程重启即回到种子数据）。
/// 4. 组装应用状态并启动 HTTP 服务。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 初始化日志
    tracing_subscriber::fmt::init();
    info!("Kabu service starting...");

    // 2. 加载配置
    let config = AppConfig::default();

    // 3. 实例化存储层
    let market_store = Arc::new(MemoryMarketStore::new());
    let trade_store = Arc::new(MemoryTradeStore::new());

    // 4. 组装状态并启动服务 (start_server 内部阻塞于 serve)
    let state = AppState {
        market_store,
        trade_store,
    };
    start_server(state, &config.server.bind_addr()).await?;

    Ok(())
}
