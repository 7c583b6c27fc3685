use super::entity::Stock;
use super::error::MarketError;
use async_trait::async_trait;

/// # Summary
/// 股票数据访问抽象接口。
/// API 层通过此端口读取股票集合，不感知底层是内存、文件还是数据库。
///
/// # Invariants
/// - 此接口必须是异步且线程安全的 (`Send + Sync`)，因其被并发的 HTTP Handler 共享。
/// - 实现者必须保持股票的种子化插入顺序。
#[async_trait]
pub trait MarketStore: Send + Sync {
    /// # Summary
    /// 列出全部股票。
    ///
    /// # Returns
    /// 按插入顺序排列的完整股票列表。无副作用。
    async fn list_stocks(&self) -> Result<Vec<Stock>, MarketError>;

    /// # Summary
    /// 按交易代码查找单只股票。
    ///
    /// # Arguments
    /// * `ticker` - 交易代码，精确匹配且区分大小写
    ///
    /// # Returns
    /// * `Ok(Some(stock))` - 第一只代码完全相同的股票
    /// * `Ok(None)` - 无匹配标的。不区分"代码不存在"与其它缺失情形
    async fn find_by_ticker(&self, ticker: &str) -> Result<Option<Stock>, MarketError>;
}
