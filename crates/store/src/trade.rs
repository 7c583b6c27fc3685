use async_trait::async_trait;
use kabu_core::trade::entity::{Trade, TradeDraft};
use kabu_core::trade::error::TradeError;
use kabu_core::trade::port::TradeStore;
use tokio::sync::RwLock;

use crate::seed;

/// 集合与 ID 计数器放在同一把锁内，保证追加是单个原子步骤。
struct Inner {
    trades: Vec<Trade>,
    // 下一个待分配的成交 ID。单调递增，即使未来支持删除也不会回退复用。
    next_id: u32,
}

/// # Summary
/// 基于内存的成交记录仓储实现。
///
/// 作为 `TradeStore` 的适配器，提供对成交集合的追加能力。
/// 并发读请求只会观察到"已完整追加"或"尚未追加"的状态，不会看到中间态。
pub struct MemoryTradeStore {
    inner: RwLock<Inner>,
}

impl MemoryTradeStore {
    /// # Logic
    /// 用固定种子数据构造仓储，计数器从种子记录的最大 ID 之后继续。
    pub fn new() -> Self {
        Self::with_trades(seed::seed_trades())
    }

    /// 用指定集合构造仓储，供测试隔离使用。
    pub fn with_trades(trades: Vec<Trade>) -> Self {
        let next_id = trades.iter().map(|t| t.trade_id).max().unwrap_or(0) + 1;
        tracing::debug!("MemoryTradeStore seeded with {} trades", trades.len());
        Self {
            inner: RwLock::new(Inner { trades, next_id }),
        }
    }
}

impl Default for MemoryTradeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TradeStore for MemoryTradeStore {
    async fn append_trade(&self, draft: TradeDraft) -> Result<Trade, TradeError> {
        let mut guard = self.inner.write().await;
        let trade = Trade::from_draft(guard.next_id, draft);
        guard.next_id += 1;
        guard.trades.push(trade.clone());
        Ok(trade)
    }
}
