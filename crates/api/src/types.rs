//! # DTO (Data Transfer Object) 层
//!
//! 将内部领域模型转化为面向调用方 JSON 输出的轻量结构体。
//! 所有 DTO 必须派生 `utoipa::ToSchema` 以自动进入 Swagger 文档。
//! 字段在线上一律使用 camelCase。

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================
//  行情相关 DTO
// ============================================================

/// 股票 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockResponse {
    /// 股票唯一 ID
    #[schema(example = 1)]
    pub stock_id: u32,
    /// 股票代码
    #[schema(example = "AAPL")]
    pub ticker: String,
    /// 公司全名
    #[schema(example = "Apple Inc.")]
    pub company_name: String,
    /// 当前价格
    #[schema(example = 150.75)]
    pub price: f64,
}

// ============================================================
//  成交相关 DTO
// ============================================================

/// 成交记录 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TradeResponse {
    /// 成交记录 ID (落账时分配)
    #[schema(example = 4)]
    pub trade_id: u32,
    /// 关联的股票 ID
    #[schema(example = 1)]
    pub stock_id: u32,
    /// 成交数量
    #[schema(example = 15.0)]
    pub quantity: f64,
    /// 交易方向 ("buy" / "sell")
    #[schema(example = "buy")]
    pub trade_type: String,
    /// 成交日期 (ISO 字符串)
    #[schema(example = "2024-08-08")]
    pub trade_date: String,
}

/// 新增成交请求体 (仅用于 Swagger 文档展示；
/// 处理端按原始 JSON 做逐字段固定顺序校验，见 `routes::trade::validate_trade`)
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddTradeRequest {
    /// 关联的股票 ID
    #[schema(example = 1)]
    pub stock_id: u32,
    /// 成交数量
    #[schema(example = 15.0)]
    pub quantity: f64,
    /// 交易方向
    #[schema(example = "buy")]
    pub trade_type: String,
    /// 成交日期
    #[schema(example = "2024-08-08")]
    pub trade_date: String,
}

// ============================================================
//  通用响应 DTO
// ============================================================

/// 失败响应体 (所有非 2xx 路径共用)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 固定为 false
    pub success: bool,
    /// 错误描述信息
    pub error: String,
}

impl ApiErrorResponse {
    /// 从错误信息构建
    pub fn from_msg(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: msg.into(),
        }
    }
}

// ============================================================
//  领域模型 → DTO 惯用转换 (impl From<T>)
// ============================================================

impl From<kabu_core::market::entity::Stock> for StockResponse {
    fn from(s: kabu_core::market::entity::Stock) -> Self {
        Self {
            stock_id: s.stock_id,
            ticker: s.ticker,
            company_name: s.company_name,
            price: s.price,
        }
    }
}

impl From<kabu_core::trade::entity::Trade> for TradeResponse {
    fn from(t: kabu_core::trade::entity::Trade) -> Self {
        Self {
            trade_id: t.trade_id,
            stock_id: t.stock_id,
            quantity: t.quantity,
            trade_type: t.trade_type,
            trade_date: t.trade_date,
        }
    }
}
