use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A pre-aggregated usage sample for one feature on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageDataPoint {
    pub feature_id: String,
    pub date: NaiveDate,
    pub count: u64,
}

impl UsageDataPoint {
    pub fn new(feature_id: impl Into<String>, date: NaiveDate, count: u64) -> Self {
        Self {
            feature_id: feature_id.into(),
            date,
            count,
        }
    }
}

/// Select the points belonging to `feature_id`, ordered by date.
///
/// Points sharing a date keep their input order.
pub fn series_for<'a>(usage: &'a [UsageDataPoint], feature_id: &str) -> Vec<&'a UsageDataPoint> {
    let mut series: Vec<&UsageDataPoint> = usage
        .iter()
        .filter(|point| point.feature_id == feature_id)
        .collect();
    series.sort_by_key(|point| point.date);
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_series_filters_and_orders() {
        let usage = vec![
            UsageDataPoint::new("a", day(3), 30),
            UsageDataPoint::new("b", day(1), 99),
            UsageDataPoint::new("a", day(1), 10),
            UsageDataPoint::new("a", day(2), 20),
        ];
        let series = series_for(&usage, "a");
        let counts: Vec<u64> = series.iter().map(|p| p.count).collect();
        assert_eq!(counts, vec![10, 20, 30]);
    }

    #[test]
    fn test_series_unknown_feature_is_empty() {
        let usage = vec![UsageDataPoint::new("a", day(1), 1)];
        assert!(series_for(&usage, "zzz").is_empty());
    }

    #[test]
    fn test_usage_date_deserializes_from_iso() {
        let point: UsageDataPoint =
            serde_json::from_str(r#"{"feature_id":"a","date":"2024-01-05","count":7}"#).unwrap();
        assert_eq!(point.date, day(5));
    }
}
