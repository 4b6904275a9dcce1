//! 业务逻辑服务模块
//!
//! 封装图表数据的生成和组装逻辑

pub mod candlestick;    // 模拟K线数据生成
pub mod chart_service;  // 图表数据组装
