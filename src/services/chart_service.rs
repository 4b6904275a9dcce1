use chrono::NaiveDate;

use crate::error::ChartError;
use crate::models::{CandlestickPoint, CandlestickSeries, ChartBundle, StaticSeries};
use crate::services::candlestick::generate_candlesticks;

/// K线数据固定从 2023-01-05 开始
const CANDLESTICK_START: (i32, u32, u32) = (2023, 1, 5);
const CANDLESTICK_DAYS: i64 = 20;

/// 组装图表数据：随机K线 + 三组静态数据
pub fn build_chart_bundle() -> Result<ChartBundle, ChartError> {
    let (year, month, day) = CANDLESTICK_START;
    let start_date =
        NaiveDate::from_ymd_opt(year, month, day).ok_or(ChartError::DateOutOfRange)?;

    let candlesticks = generate_candlesticks(start_date, CANDLESTICK_DAYS)?;
    Ok(assemble_bundle(candlesticks))
}

fn assemble_bundle(candlesticks: Vec<CandlestickPoint>) -> ChartBundle {
    ChartBundle {
        candlestick_chart: CandlestickSeries { data: candlesticks },
        line_chart: StaticSeries::new(&["Jan", "Feb", "Mar", "Apr"], &[10, 20, 30, 40]),
        bar_chart: StaticSeries::new(&["Product A", "Product B", "Product C"], &[100, 150, 200]),
        pie_chart: StaticSeries::new(&["Red", "Blue", "Yellow"], &[300, 50, 100]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::candlestick::generate_candlesticks_with_rng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_candlestick_range() {
        let bundle = build_chart_bundle().unwrap();
        let data = &bundle.candlestick_chart.data;
        assert_eq!(data.len(), 20);
        assert_eq!(data.first().unwrap().date, "2023-01-05");
        assert_eq!(data.last().unwrap().date, "2023-01-24");
    }

    #[test]
    fn test_static_series() {
        let bundle = build_chart_bundle().unwrap();
        assert_eq!(bundle.line_chart.labels, vec!["Jan", "Feb", "Mar", "Apr"]);
        assert_eq!(bundle.line_chart.data, vec![10, 20, 30, 40]);
        assert_eq!(bundle.bar_chart.labels, vec!["Product A", "Product B", "Product C"]);
        assert_eq!(bundle.bar_chart.data, vec![100, 150, 200]);
        assert_eq!(bundle.pie_chart.labels, vec!["Red", "Blue", "Yellow"]);
        assert_eq!(bundle.pie_chart.data, vec![300, 50, 100]);
    }

    #[test]
    fn test_assemble_keeps_candlesticks() {
        let start = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
        let candlesticks =
            generate_candlesticks_with_rng(&mut StdRng::seed_from_u64(1), start, 3).unwrap();

        let bundle = assemble_bundle(candlesticks.clone());
        assert_eq!(bundle.candlestick_chart.data, candlesticks);
        assert_eq!(bundle, assemble_bundle(candlesticks));
    }
}
