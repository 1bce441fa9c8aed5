//! Conversion: PriceBarResponse → PriceBar / Series (TryFrom + validation).

use super::wire::PriceBarResponse;
use super::{PriceBar, Series, ValidationError};
use crate::shared::serde_util::parse_session_date;

fn convert_bar(index: usize, raw: PriceBarResponse) -> Result<PriceBar, ValidationError> {
    let date = parse_session_date(&raw.date).ok_or_else(|| ValidationError::InvalidDate {
        index,
        raw: raw.date.clone(),
    })?;

    if ![raw.open, raw.high, raw.low, raw.close]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(ValidationError::NonFinitePrice { index });
    }

    Ok(PriceBar {
        date,
        open: raw.open,
        high: raw.high,
        low: raw.low,
        close: raw.close,
    })
}

impl TryFrom<Vec<PriceBarResponse>> for Series {
    type Error = ValidationError;

    fn try_from(source: Vec<PriceBarResponse>) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();
        let mut bars = Vec::with_capacity(source.len());

        for (index, raw) in source.into_iter().enumerate() {
            match convert_bar(index, raw) {
                Ok(bar) => bars.push(bar),
                Err(err) => errors.push(err),
            }
        }

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(errors));
        }

        Ok(Series::new(bars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn raw(date: &str, close: f64) -> PriceBarResponse {
        PriceBarResponse {
            date: date.to_string(),
            open: close - 1.0,
            high: close + 1.0,
            low: close - 2.0,
            close,
        }
    }

    #[test]
    fn test_series_from_wire_keeps_order() {
        let series = Series::try_from(vec![
            raw("2024-03-01", 10.0),
            raw("2024-03-04 00:00:00", 11.0),
        ])
        .unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(
            series.bars()[1].date,
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
        );
        assert_eq!(series.latest().unwrap().close, 11.0);
    }

    #[test]
    fn test_series_from_wire_string_prices() {
        let parsed: Vec<PriceBarResponse> = serde_json::from_str(
            r#"[{"date":"2024-03-01","open":"10.5","high":"12","low":9,"close":"11.25"}]"#,
        )
        .unwrap();
        let series = Series::try_from(parsed).unwrap();
        let bar = &series.bars()[0];
        assert_eq!(bar.open, 10.5);
        assert_eq!(bar.high, 12.0);
        assert_eq!(bar.low, 9.0);
        assert_eq!(bar.close, 11.25);
    }

    #[test]
    fn test_series_from_wire_collects_errors() {
        let err = Series::try_from(vec![
            raw("not a date", 10.0),
            raw("2024-03-01", f64::NAN),
            raw("2024-03-02", 11.0),
        ])
        .unwrap_err();
        match err {
            ValidationError::Multiple(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected Multiple, got {other:?}"),
        }
    }
}
