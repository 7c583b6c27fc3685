use serde::{Deserialize, Serialize};

/// # Summary
/// 一笔买入或卖出的成交记录。
///
/// # Invariants
/// - `trade_id` 在全体成交记录中唯一，由存储层的单调计数器分配。
/// - `stock_id` 约定引用某只已存在的股票，但系统不做外键校验。
/// - `trade_type` 约定为 "buy" 或 "sell"，不做枚举强制。
/// - `trade_date` 约定为 ISO 日期字符串，不做格式校验。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    // 成交记录唯一 ID
    pub trade_id: u32,
    // 关联的股票 ID (无外键约束)
    pub stock_id: u32,
    // 成交数量
    pub quantity: f64,
    // 交易方向 ("buy" / "sell")
    pub trade_type: String,
    // 成交日期 (ISO 字符串)
    pub trade_date: String,
}

/// # Summary
/// 客户端提交的成交记录草稿，即 `Trade` 除 `trade_id` 外的全部字段。
/// `trade_id` 由存储层在落账时分配。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeDraft {
    pub stock_id: u32,
    pub quantity: f64,
    pub trade_type: String,
    pub trade_date: String,
}

impl Trade {
    /// # Logic
    /// 由草稿和已分配的 ID 落成一条完整的成交记录。
    pub fn from_draft(trade_id: u32, draft: TradeDraft) -> Self {
        Self {
            trade_id,
            stock_id: draft.stock_id,
            quantity: draft.quantity,
            trade_type: draft.trade_type,
            trade_date: draft.trade_date,
        }
    }
}
