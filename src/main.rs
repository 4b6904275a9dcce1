//! 图表演示后端服务
//!
//! 为前端看板提供K线图、折线图、柱状图、饼图的演示数据

mod config;     // 配置加载
mod error;      // 错误类型
mod handlers;   // HTTP 请求处理器
mod middleware; // 中间件
mod models;     // 数据模型定义
mod services;   // 业务逻辑服务

use actix_web::{App, HttpServer, middleware::{Condition, Logger}};
use env_logger::Env;

use crate::config::AppConfig;
use crate::middleware::CorsMiddleware;

/// 应用程序入口
///
/// 启动 HTTP 服务器，默认监听 0.0.0.0:8000
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 初始化日志系统，默认日志级别为 info
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::load();
    let bind_addr = config.bind_addr();
    let cors = config.cors.clone();

    log::info!("启动图表数据服务，监听 {}", bind_addr);

    // 创建并启动 HTTP 服务器
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())  // 请求日志
            .wrap(Condition::new(cors.enabled, CorsMiddleware::new(&cors.allowed_origin)))
            .configure(handlers::config)  // 配置路由
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(bind_addr)?.run().await
}
