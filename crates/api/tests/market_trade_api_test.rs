use std::sync::Arc;

use kabu_api::routes::trade::{INVALID_NUMBER_MSG, INVALID_STRING_MSG};
use kabu_api::server::{AppState, build_router};
use kabu_api::types::{ApiErrorResponse, StockResponse, TradeResponse};
use kabu_store::market::MemoryMarketStore;
use kabu_store::trade::MemoryTradeStore;
use reqwest::StatusCode;
use serde_json::json;
use tokio::net::TcpListener;

// 帮助函数：在随机端口启动测试服务器
async fn spawn_test_server() -> String {
    let state = AppState {
        market_store: Arc::new(MemoryMarketStore::new()),
        trade_store: Arc::new(MemoryTradeStore::new()),
    };
    let router = build_router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn test_full_api_workflow() {
    let _ = tracing_subscriber::fmt().with_env_filter("debug").try_init();

    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();

    // ============================================
    // Case 1: 存活探针返回固定文本
    // ============================================
    let res = client.get(&base_url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "Server Is Live");

    // ============================================
    // Case 2: 列出全部股票 (种子集合，长度 3，保持插入顺序)
    // ============================================
    let res = client
        .get(format!("{}/stocks", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let stocks: Vec<StockResponse> = res.json().await.unwrap();
    assert_eq!(stocks.len(), 3);
    assert_eq!(
        stocks.iter().map(|s| s.ticker.as_str()).collect::<Vec<_>>(),
        vec!["AAPL", "GOOGL", "TSLA"]
    );
    assert_eq!(stocks[0].company_name, "Apple Inc.");
    assert_eq!(stocks[0].price, 150.75);

    // ============================================
    // Case 3: 每个种子代码都能按 ticker 命中
    // ============================================
    for expected in &stocks {
        let res = client
            .get(format!("{}/stocks/{}", base_url, expected.ticker))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let stock: StockResponse = res.json().await.unwrap();
        assert_eq!(&stock, expected);
    }

    // ============================================
    // Case 4: 未知代码返回 404 + 结构化错误体
    // ============================================
    let res = client
        .get(format!("{}/stocks/jdks", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let err: ApiErrorResponse = res.json().await.unwrap();
    assert!(!err.success);
    assert_eq!(err.error, "Not Found");

    // ============================================
    // Case 5: 匹配区分大小写
    // ============================================
    let res = client
        .get(format!("{}/stocks/aapl", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // ============================================
    // Case 6: 合法成交落账，返回带新 ID 的完整记录
    // ============================================
    let payload = json!({
        "stockId": 1,
        "quantity": 15,
        "tradeType": "buy",
        "tradeDate": "2024-08-08"
    });
    let res = client
        .post(format!("{}/trades", base_url))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let trade: TradeResponse = res.json().await.unwrap();
    assert_eq!(trade.trade_id, 4, "种子 3 条之后分配 ID 4");
    assert_eq!(trade.stock_id, 1);
    assert_eq!(trade.quantity, 15.0);
    assert_eq!(trade.trade_type, "buy");
    assert_eq!(trade.trade_date, "2024-08-08");

    // ============================================
    // Case 7: POST 不幂等，重复提交得到新 ID
    // ============================================
    let res = client
        .post(format!("{}/trades", base_url))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let second: TradeResponse = res.json().await.unwrap();
    assert_eq!(second.trade_id, 5);

    // ============================================
    // Case 8: 缺少 stockId → 400 + 数值类文案
    // ============================================
    let res = client
        .post(format!("{}/trades", base_url))
        .json(&json!({
            "quantity": 15,
            "tradeType": "buy",
            "tradeDate": "2024-08-08"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: ApiErrorResponse = res.json().await.unwrap();
    assert_eq!(err.error, INVALID_NUMBER_MSG);

    // ============================================
    // Case 9: 缺少 tradeType → 400 + 字符串类文案
    // ============================================
    let res = client
        .post(format!("{}/trades", base_url))
        .json(&json!({
            "stockId": 1,
            "quantity": 15,
            "tradeDate": "2024-08-08"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: ApiErrorResponse = res.json().await.unwrap();
    assert_eq!(err.error, INVALID_STRING_MSG);

    // ============================================
    // Case 10: 校验失败不落账，下次成功落账的 ID 连续
    // ============================================
    let res = client
        .post(format!("{}/trades", base_url))
        .json(&payload)
        .send()
        .await
        .unwrap();
    let third: TradeResponse = res.json().await.unwrap();
    assert_eq!(third.trade_id, 6);

    // ============================================
    // Case 11: 股票集合未被成交操作改变
    // ============================================
    let res = client
        .get(format!("{}/stocks", base_url))
        .send()
        .await
        .unwrap();
    let after: Vec<StockResponse> = res.json().await.unwrap();
    assert_eq!(after, stocks);
}

#[tokio::test]
async fn test_non_integer_stock_id_is_rejected() {
    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();

    // stockId 是 JSON number 但不是非负整数：通过类型类校验，
    // 在落账模型转换处被拒，仍归入数值类 400
    for stock_id in [json!(1.5), json!(-1)] {
        let res = client
            .post(format!("{}/trades", base_url))
            .json(&json!({
                "stockId": stock_id,
                "quantity": 15,
                "tradeType": "buy",
                "tradeDate": "2024-08-08"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let err: ApiErrorResponse = res.json().await.unwrap();
        assert_eq!(err.error, INVALID_NUMBER_MSG);
    }

    // 被拒的请求不落账：下一次合法落账仍拿到种子之后的第一个 ID
    let res = client
        .post(format!("{}/trades", base_url))
        .json(&json!({
            "stockId": 1,
            "quantity": 15,
            "tradeType": "buy",
            "tradeDate": "2024-08-08"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let trade: TradeResponse = res.json().await.unwrap();
    assert_eq!(trade.trade_id, 4);
}

#[tokio::test]
async fn test_malformed_json_body_is_rejected() {
    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();

    // 非法 JSON 由框架默认拒绝路径处理，不进入业务校验
    let res = client
        .post(format!("{}/trades", base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
