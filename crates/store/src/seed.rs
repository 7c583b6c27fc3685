use kabu_core::market::entity::Stock;
use kabu_core::trade::entity::Trade;

/// # Summary
/// 进程启动时装入内存的固定股票种子数据。
///
/// # Invariants
/// - `stock_id` 与 `ticker` 各自唯一。
pub fn seed_stocks() -> Vec<Stock> {
    vec![
        Stock {
            stock_id: 1,
            ticker: "AAPL".to_string(),
            company_name: "Apple Inc.".to_string(),
            price: 150.75,
        },
        Stock {
            stock_id: 2,
            ticker: "GOOGL".to_string(),
            company_name: "Alphabet Inc.".to_string(),
            price: 2750.10,
        },
        Stock {
            stock_id: 3,
            ticker: "TSLA".to_string(),
            company_name: "Tesla, Inc.".to_string(),
            price: 695.50,
        },
    ]
}

/// # Summary
/// 进程启动时装入内存的固定成交种子数据。
/// 后续新增成交的 ID 从此集合长度之后单调递增。
pub fn seed_trades() -> Vec<Trade> {
    vec![
        Trade {
            trade_id: 1,
            stock_id: 1,
            quantity: 10.0,
            trade_type: "buy".to_string(),
            trade_date: "2024-08-07".to_string(),
        },
        Trade {
            trade_id: 2,
            stock_id: 2,
            quantity: 5.0,
            trade_type: "sell".to_string(),
            trade_date: "2024-08-06".to_string(),
        },
        Trade {
            trade_id: 3,
            stock_id: 3,
            quantity: 7.0,
            trade_type: "buy".to_string(),
            trade_date: "2024-08-05".to_string(),
        },
    ]
}
