//! 图表数据接口处理器
//!
//! - GET /charts/ - 获取四类图表的演示数据

use actix_web::{web, HttpResponse, Result};

use crate::services::chart_service;

/// 获取图表演示数据
///
/// GET /charts/
///
/// 不接收任何参数，每次请求重新生成K线数据
pub async fn get_chart_data() -> Result<HttpResponse> {
    let bundle = chart_service::build_chart_bundle()?;
    log::debug!("生成K线数据 {} 条", bundle.candlestick_chart.data.len());
    Ok(HttpResponse::Ok().json(bundle))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/charts/", web::get().to(get_chart_data));
}
