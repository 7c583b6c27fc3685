use async_trait::async_trait;
use kabu_core::market::entity::Stock;
use kabu_core::market::error::MarketError;
use kabu_core::market::port::MarketStore;

use crate::seed;

/// # Summary
/// 基于内存的股票仓储实现。
///
/// 股票集合在构造时种子化，此后只读，因此无需任何锁。
/// 作为 `MarketStore` 的适配器注入到 API 层。
pub struct MemoryMarketStore {
    stocks: Vec<Stock>,
}

impl MemoryMarketStore {
    /// # Logic
    /// 用固定种子数据构造仓储。
    pub fn new() -> Self {
        let stocks = seed::seed_stocks();
        tracing::debug!("MemoryMarketStore seeded with {} stocks", stocks.len());
        Self { stocks }
    }

    /// 用指定集合构造仓储，供测试隔离使用。
    pub fn with_stocks(stocks: Vec<Stock>) -> Self {
        Self { stocks }
    }
}

impl Default for MemoryMarketStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketStore for MemoryMarketStore {
    async fn list_stocks(&self) -> Result<Vec<Stock>, MarketError> {
        Ok(self.stocks.clone())
    }

    async fn find_by_ticker(&self, ticker: &str) -> Result<Option<Stock>, MarketError> {
        Ok(self.stocks.iter().find(|s| s.ticker == ticker).cloned())
    }
}
