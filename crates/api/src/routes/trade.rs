//! # 成交路由控制器
//!
//! 实现 `/trades` 的新增接口，对接 `TradeStore` 端口。
//! 请求校验按固定字段顺序 fail-fast，错误文案沿用既有客户端已知的措辞
//! (数值类字段与字符串类字段各共用一条，不指明具体字段)。

use axum::Json;
use axum::extract::State;
use serde_json::Value;

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::TradeResponse;

use kabu_core::trade::entity::TradeDraft;

/// 数值类字段 (stockId / quantity) 校验失败文案
pub const INVALID_NUMBER_MSG: &str = "Provide Correct Details and it should be integer";
/// 字符串类字段 (tradeType / tradeDate) 校验失败文案
pub const INVALID_STRING_MSG: &str = "Provide Correct Details and it should be string";

/// # Summary
/// 校验成交请求体。
///
/// # Logic
/// 按固定顺序检查并在首个失败处立即返回 (不聚合)：
/// 1. `stockId` 必须是 JSON number
/// 2. `quantity` 必须是 JSON number
/// 3. `tradeType` 必须是 JSON string
/// 4. `tradeDate` 必须是 JSON string
///
/// 字段缺失与类型不符不作区分。
///
/// # Returns
/// * `None` - 校验通过
/// * `Some(msg)` - 首个失败字段所属类别的文案
pub fn validate_trade(trade: &Value) -> Option<&'static str> {
    if !trade.get("stockId").is_some_and(Value::is_number) {
        return Some(INVALID_NUMBER_MSG);
    }
    if !trade.get("quantity").is_some_and(Value::is_number) {
        return Some(INVALID_NUMBER_MSG);
    }
    if !trade.get("tradeType").is_some_and(Value::is_string) {
        return Some(INVALID_STRING_MSG);
    }
    if !trade.get("tradeDate").is_some_and(Value::is_string) {
        return Some(INVALID_STRING_MSG);
    }
    None
}

/// 新增一条成交记录
///
/// 校验通过后草稿落账，返回带已分配 `tradeId` 的完整记录 (裸 JSON 对象)。
/// 重复提交不幂等：每次都会追加一条带新 ID 的记录。
#[utoipa::path(
    post,
    path = "/trades",
    tag = "成交 (Trade)",
    request_body = crate::types::AddTradeRequest,
    responses(
        (status = 200, description = "落账成功", body = TradeResponse),
        (status = 400, description = "请求体校验失败", body = crate::types::ApiErrorResponse)
    )
)]
pub async fn add_trade(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<TradeResponse>, ApiError> {
    if let Some(msg) = validate_trade(&body) {
        return Err(ApiError::BadRequest(msg.to_string()));
    }

    // stockId 通过了 number 校验但仍可能不是非负整数 (如 1.5 / -1)，
    // 落账模型要求整数 ID，此处归入数值类校验失败。
    let draft: TradeDraft = serde_json::from_value(body)
        .map_err(|_| ApiError::BadRequest(INVALID_NUMBER_MSG.to_string()))?;

    let trade = state.trade_store.append_trade(draft).await?;
    Ok(Json(trade.into()))
}
