//! # `kabu-core` - 领域核心层
//!
//! 定义 Kabu 行情/交易服务的领域实体、端口抽象 (Port Trait) 与领域错误。
//! 本 crate 不依赖任何具体基础设施（HTTP 框架、存储引擎），
//! 上层 adapter 通过实现此处的 trait 接入系统。

pub mod config;
pub mod market;
pub mod trade;
