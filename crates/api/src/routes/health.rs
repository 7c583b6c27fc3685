/// 存活探针
///
/// 返回固定文本，用于确认服务进程在线。
#[utoipa::path(
    get,
    path = "/",
    tag = "系统 (System)",
    responses(
        (status = 200, description = "服务在线", body = String, content_type = "text/plain")
    )
)]
pub async fn liveness() -> &'static str {
    "Server Is Live"
}
