//! # 行情路由控制器
//!
//! 实现 `/stocks` 路径下的 REST 接口，对接 `MarketStore` 端口。

use axum::Json;
use axum::extract::{Path, State};

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::StockResponse;

/// 列出全部股票
///
/// 返回种子集合的完整有序列表 (裸 JSON 数组，无包装)。
#[utoipa::path(
    get,
    path = "/stocks",
    tag = "行情 (Market)",
    responses(
        (status = 200, description = "获取成功", body = Vec<StockResponse>)
    )
)]
pub async fn list_stocks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StockResponse>>, ApiError> {
    let stocks = state.market_store.list_stocks().await?;
    Ok(Json(stocks.into_iter().map(Into::into).collect()))
}

/// 按交易代码查询单只股票
///
/// 精确匹配且区分大小写；未命中返回 404。
#[utoipa::path(
    get,
    path = "/stocks/{ticker}",
    tag = "行情 (Market)",
    params(
        ("ticker" = String, Path, description = "股票代码 (例如: AAPL)")
    ),
    responses(
        (status = 200, description = "获取成功", body = StockResponse),
        (status = 404, description = "代码不存在", body = crate::types::ApiErrorResponse)
    )
)]
pub async fn get_stock_by_ticker(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<StockResponse>, ApiError> {
    let stock = state
        .market_store
        .find_by_ticker(&ticker)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(stock.into()))
}
