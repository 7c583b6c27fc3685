//! # `kabu-api` - HTTP API 层
//!
//! 本 crate 是 Kabu 行情/交易服务的 HTTP/REST 入口。
//! 使用 `axum` 构建路由与控制器，通过 `utoipa` 自动生成 OpenAPI 3.0 Swagger 文档。
//!
//! ## 架构职责
//! - 接收 HTTP 请求并做最小限度的请求校验
//! - 调用下层 `MarketStore` / `TradeStore` 端口完成数据操作
//! - 将领域模型转换为 DTO 返回给调用方

pub mod error;
pub mod routes;
pub mod server;
pub mod types;
