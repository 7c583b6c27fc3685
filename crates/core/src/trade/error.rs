use thiserror::Error;

/// # Summary
/// 成交记录域错误枚举。
///
/// 内存适配器的追加不会失败；此变体属于 `TradeStore` 端口契约，
/// 留给可失败的适配器实现。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
#[derive(Error, Debug)]
pub enum TradeError {
    // 内部系统错误
    #[error("Internal error: {0}")]
    Internal(String),
}
