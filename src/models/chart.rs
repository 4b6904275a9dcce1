//! 图表数据模型
//!
//! 前端看板使用的四类图表数据结构

use serde::{Deserialize, Serialize};

/// 单日K线数据
///
/// 满足 `high >= max(open, close)` 且 `low <= min(open, close)`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CandlestickPoint {
    /// 日期（YYYY-MM-DD）
    pub date: String,
    /// 开盘价
    pub open: i64,
    /// 最高价
    pub high: i64,
    /// 最低价
    pub low: i64,
    /// 收盘价
    pub close: i64,
}

/// K线图数据
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CandlestickSeries {
    pub data: Vec<CandlestickPoint>,
}

/// 静态图表数据（折线图、柱状图、饼图）
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StaticSeries {
    /// 标签
    pub labels: Vec<String>,
    /// 数值，与标签一一对应
    pub data: Vec<i64>,
}

impl StaticSeries {
    pub fn new(labels: &[&str], data: &[i64]) -> Self {
        Self {
            labels: labels.iter().map(|s| s.to_string()).collect(),
            data: data.to_vec(),
        }
    }
}

/// 图表数据汇总
///
/// `GET /charts/` 的响应体，每次请求重新生成
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChartBundle {
    pub candlestick_chart: CandlestickSeries,
    pub line_chart: StaticSeries,
    pub bar_chart: StaticSeries,
    pub pie_chart: StaticSeries,
}
