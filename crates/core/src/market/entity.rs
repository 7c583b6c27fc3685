use serde::{Deserialize, Serialize};

/// # Summary
/// 股票实体，代表系统内一只可交易的标的。
///
/// # Invariants
/// - `stock_id` 在全体股票中唯一，种子化后不可变更。
/// - `ticker` 为大写交易代码，全体股票中唯一。
/// - `price` 必须大于 0。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    // 股票唯一 ID (种子化时分配)
    pub stock_id: u32,
    // 股票代码 (例如: AAPL)
    pub ticker: String,
    // 公司全名
    pub company_name: String,
    // 当前价格
    pub price: f64,
}
