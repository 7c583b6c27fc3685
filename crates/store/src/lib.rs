//! # `kabu-store` - 内存存储适配层
//!
//! 实现 `kabu-core` 定义的 `MarketStore` / `TradeStore` 端口。
//! 集合只存活于进程内存中，进程重启即回到种子数据；
//! 系统在此范围内刻意不做任何持久化。

pub mod market;
pub mod seed;
pub mod trade;
