use thiserror::Error;

/// # Summary
/// 行情数据域错误枚举。
///
/// 内存适配器本身不会失败：标的缺失以 `Ok(None)` 表达，
/// 这些变体属于 `MarketStore` 端口契约，留给可失败的适配器实现。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
#[derive(Error, Debug)]
pub enum MarketError {
    // 请求的标的未找到
    #[error("Stock not found")]
    NotFound,
    // 未知或未分类的错误
    #[error("Unknown error: {0}")]
    Unknown(String),
}
