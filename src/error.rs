//! 错误类型定义
//!
//! 业务错误统一转换为 `ApiResponse` 格式的 HTTP 响应

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ApiResponse;

/// 图表数据服务错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// 调用参数不合法（如负数的K线数量）
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// 日期超出可表示范围
    #[error("Date out of range")]
    DateOutOfRange,
}

impl ResponseError for ChartError {
    fn status_code(&self) -> StatusCode {
        match self {
            ChartError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ChartError::DateOutOfRange => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let response = ApiResponse::<()>::error(self.to_string());
        HttpResponse::build(self.status_code()).json(response)
    }
}
