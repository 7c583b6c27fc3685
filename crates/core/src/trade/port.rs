use super::entity::{Trade, TradeDraft};
use super::error::TradeError;
use async_trait::async_trait;

/// # Summary
/// 成交记录写入抽象接口。
/// API 层通过此端口把校验后的成交草稿落账，不感知底层集合的组织方式。
///
/// # Invariants
/// - 此接口必须是异步且线程安全的 (`Send + Sync`)。
/// - 落账必须是单个原子步骤：并发读取只能观察到"已完整追加"或"尚未追加"两种状态。
#[async_trait]
pub trait TradeStore: Send + Sync {
    /// # Summary
    /// 追加一条新的成交记录。
    ///
    /// # Logic
    /// 1. 从单调计数器分配下一个 `trade_id`。
    /// 2. 由草稿落成完整记录并追加到集合尾部。
    ///
    /// # Arguments
    /// * `draft` - 已通过请求校验的成交草稿
    ///
    /// # Returns
    /// 新建的完整 `Trade` 记录 (含分配的 ID)。
    async fn append_trade(&self, draft: TradeDraft) -> Result<Trade, TradeError>;
}
