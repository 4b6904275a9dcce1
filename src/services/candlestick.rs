//! 模拟K线数据生成
//!
//! 按日生成随机开高低收价格，供前端K线图演示使用

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::error::ChartError;
use crate::models::CandlestickPoint;

/// 开盘价范围
const OPEN_MIN: i64 = 20;
const OPEN_MAX: i64 = 50;
/// 收盘价相对开盘价的最大波动
const MAX_DELTA: i64 = 10;
/// 最高价/最低价相对实体的最大延伸
const MAX_SHADOW: i64 = 5;

/// 使用线程本地随机源生成K线数据
///
/// # 参数
/// - start_date: 第一根K线的日期
/// - count: K线数量，不能为负数
pub fn generate_candlesticks(
    start_date: NaiveDate,
    count: i64,
) -> Result<Vec<CandlestickPoint>, ChartError> {
    generate_candlesticks_with_rng(&mut rand::thread_rng(), start_date, count)
}

/// 使用指定随机源生成K线数据
///
/// 从 `start_date` 起连续 `count` 个自然日，每日一根K线。
/// 每日依次抽取开盘价、涨跌幅、上影线、下影线；价格不做非负截断。
pub fn generate_candlesticks_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    start_date: NaiveDate,
    count: i64,
) -> Result<Vec<CandlestickPoint>, ChartError> {
    let count = usize::try_from(count).map_err(|_| {
        ChartError::InvalidArgument(format!("count must be non-negative, got {}", count))
    })?;

    let mut data = Vec::with_capacity(count);
    for offset in 0..count {
        let date = start_date
            .checked_add_days(Days::new(offset as u64))
            .ok_or(ChartError::DateOutOfRange)?;

        let open = rng.gen_range(OPEN_MIN..=OPEN_MAX);
        let close = open + rng.gen_range(-MAX_DELTA..=MAX_DELTA);
        let high = open.max(close) + rng.gen_range(0..=MAX_SHADOW);
        let low = open.min(close) - rng.gen_range(0..=MAX_SHADOW);

        data.push(CandlestickPoint {
            date: date.format("%Y-%m-%d").to_string(),
            open,
            high,
            low,
            close,
        });
    }

    Ok(data)
}
