//! Calendar helpers (DATE, EDATE, EOMONTH) used to build date keys for lookups.

use chrono::{Datelike, Months, NaiveDate};
use formula_array::{Array, Value};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i64, month: i64, day: i64 },

    #[error("date out of range: {start} shifted by {months} months")]
    OutOfRange { start: NaiveDate, months: i32 },

    #[error("only one of year, month, or day may be an array")]
    MultipleArrays,

    #[error("year, month, and day must be scalars or 1D or 2D arrays, got {ndim} dimensions")]
    TooManyDimensions { ndim: usize },

    #[error("element {index} is not a whole number")]
    NotWholeNumber { index: usize },
}

/// DATE(year, month, day)
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, DateError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::InvalidDate {
        year: year.into(),
        month: month.into(),
        day: day.into(),
    })
}

/// One argument of [`date_each`]: a fixed component or an array of them.
#[derive(Debug, Clone, Copy)]
pub enum DatePart<'a> {
    Fixed(i64),
    Each(&'a Array),
}

impl From<i64> for DatePart<'_> {
    fn from(value: i64) -> Self {
        DatePart::Fixed(value)
    }
}

impl From<i32> for DatePart<'_> {
    fn from(value: i32) -> Self {
        DatePart::Fixed(value.into())
    }
}

impl<'a> From<&'a Array> for DatePart<'a> {
    fn from(values: &'a Array) -> Self {
        DatePart::Each(values)
    }
}

/// Dates laid out in the shape of the array argument they were built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateArray {
    shape: Vec<usize>,
    dates: Vec<NaiveDate>,
}

impl DateArray {
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn into_dates(self) -> Vec<NaiveDate> {
        self.dates
    }
}

/// DATE applied across at most one array argument (up to 2-D); the other two stay fixed.
///
/// With no array argument the result is a single date with an empty shape. Any invalid element
/// fails the whole call.
///
/// ```
/// use formula_array::Array;
/// use formula_lookup::date::{date, date_each};
///
/// let months = Array::from_values([1, 2, 3]);
/// let firsts = date_each(2024, &months, 1).unwrap();
/// assert_eq!(firsts.shape(), &[3usize]);
/// assert_eq!(firsts.dates()[1], date(2024, 2, 1).unwrap());
/// ```
pub fn date_each<'a>(
    year: impl Into<DatePart<'a>>,
    month: impl Into<DatePart<'a>>,
    day: impl Into<DatePart<'a>>,
) -> Result<DateArray, DateError> {
    let parts = [year.into(), month.into(), day.into()];
    let mut arrays = parts.iter().enumerate().filter_map(|(slot, part)| match part {
        DatePart::Each(values) => Some((slot, *values)),
        DatePart::Fixed(_) => None,
    });
    let varying = arrays.next();
    if arrays.next().is_some() {
        return Err(DateError::MultipleArrays);
    }

    let fixed = |slot: usize| match parts[slot] {
        DatePart::Fixed(v) => v,
        DatePart::Each(_) => 0,
    };
    let Some((slot, values)) = varying else {
        let single = from_parts(fixed(0), fixed(1), fixed(2))?;
        return Ok(DateArray {
            shape: Vec::new(),
            dates: vec![single],
        });
    };
    if values.ndim() > 2 {
        return Err(DateError::TooManyDimensions {
            ndim: values.ndim(),
        });
    }

    let dates = values
        .values()
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let component = whole_number(value).ok_or(DateError::NotWholeNumber { index })?;
            let mut ymd_parts = [fixed(0), fixed(1), fixed(2)];
            ymd_parts[slot] = component;
            from_parts(ymd_parts[0], ymd_parts[1], ymd_parts[2])
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DateArray {
        shape: values.shape().to_vec(),
        dates,
    })
}

fn whole_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) if n.is_finite() && n.fract() == 0.0 => Some(*n as i64),
        _ => None,
    }
}

fn from_parts(year: i64, month: i64, day: i64) -> Result<NaiveDate, DateError> {
    let invalid = DateError::InvalidDate { year, month, day };
    match (i32::try_from(year), u32::try_from(month), u32::try_from(day)) {
        (Ok(y), Ok(m), Ok(d)) => NaiveDate::from_ymd_opt(y, m, d).ok_or(invalid),
        _ => Err(invalid),
    }
}

/// EDATE(start_date, months)
///
/// Keeps the day of month where possible and clamps to the last day of shorter months.
///
/// ```
/// use formula_lookup::date::{date, edate};
///
/// let start = date(2024, 1, 31).unwrap();
/// assert_eq!(edate(start, 1).unwrap(), date(2024, 2, 29).unwrap());
/// assert_eq!(edate(start, -2).unwrap(), date(2023, 11, 30).unwrap());
/// ```
pub fn edate(start: NaiveDate, months: i32) -> Result<NaiveDate, DateError> {
    shift_months(start, months).ok_or(DateError::OutOfRange { start, months })
}

/// EOMONTH(start_date, months): the last day of the month `months` away from `start`.
pub fn eomonth(start: NaiveDate, months: i32) -> Result<NaiveDate, DateError> {
    let out_of_range = DateError::OutOfRange { start, months };
    let first = start.with_day(1).ok_or_else(|| out_of_range.clone())?;
    shift_months(first, months)
        .and_then(|month_start| month_start.checked_add_months(Months::new(1)))
        .and_then(|next_month| next_month.pred_opt())
        .ok_or(out_of_range)
}

/// Element-wise [`edate`]; missing or out-of-range elements map to `None`.
pub fn edate_each(starts: &[Option<NaiveDate>], months: i32) -> Vec<Option<NaiveDate>> {
    starts
        .iter()
        .map(|start| start.and_then(|d| edate(d, months).ok()))
        .collect()
}

/// Element-wise [`eomonth`]; missing or out-of-range elements map to `None`.
pub fn eomonth_each(starts: &[Option<NaiveDate>], months: i32) -> Vec<Option<NaiveDate>> {
    starts
        .iter()
        .map(|start| start.and_then(|d| eomonth(d, months).ok()))
        .collect()
}

fn shift_months(start: NaiveDate, months: i32) -> Option<NaiveDate> {
    let delta = Months::new(months.unsigned_abs());
    if months >= 0 {
        start.checked_add_months(delta)
    } else {
        start.checked_sub_months(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_rejects_impossible_days() {
        assert_eq!(date(2023, 2, 28), Ok(ymd(2023, 2, 28)));
        assert_eq!(
            date(2023, 2, 29),
            Err(DateError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert!(date(2023, 13, 1).is_err());
    }

    #[test]
    fn date_each_follows_the_array_argument() {
        let days = Array::from_rows([[1, 15], [28, 31]]).unwrap();
        let out = date_each(2024, 1, &days).unwrap();
        assert_eq!(out.shape(), &[2usize, 2]);
        assert_eq!(
            out.into_dates(),
            vec![
                ymd(2024, 1, 1),
                ymd(2024, 1, 15),
                ymd(2024, 1, 28),
                ymd(2024, 1, 31),
            ]
        );

        let years = Array::from_values([2023, 2024]);
        let out = date_each(&years, 2, 28).unwrap();
        assert_eq!(out.dates()[0], ymd(2023, 2, 28));
        assert_eq!(out.dates()[1], ymd(2024, 2, 28));
    }

    #[test]
    fn date_each_with_scalars_returns_one_date() {
        let out = date_each(2024, 2, 29).unwrap();
        assert!(out.shape().is_empty());
        assert_eq!(out.dates(), &[ymd(2024, 2, 29)]);
    }

    #[test]
    fn date_each_rejects_bad_arguments() {
        let months = Array::from_values([1, 13]);
        assert_eq!(
            date_each(2024, &months, 1),
            Err(DateError::InvalidDate {
                year: 2024,
                month: 13,
                day: 1
            })
        );
        assert_eq!(
            date_each(&months, &months, 1),
            Err(DateError::MultipleArrays)
        );
        let cube = Array::new(vec![1, 1, 1], vec![Value::from(1)]).unwrap();
        assert_eq!(
            date_each(2024, 1, &cube),
            Err(DateError::TooManyDimensions { ndim: 3 })
        );
        let mixed = Array::from_values([Value::from(1), Value::from("x")]);
        assert_eq!(
            date_each(2024, 1, &mixed),
            Err(DateError::NotWholeNumber { index: 1 })
        );
        assert!(date_each(2024, -1, 1).is_err());
    }

    #[test]
    fn eomonth_moves_to_month_end() {
        assert_eq!(eomonth(ymd(2024, 1, 15), 0), Ok(ymd(2024, 1, 31)));
        assert_eq!(eomonth(ymd(2024, 1, 15), 1), Ok(ymd(2024, 2, 29)));
        assert_eq!(eomonth(ymd(2024, 3, 31), -1), Ok(ymd(2024, 2, 29)));
        assert_eq!(eomonth(ymd(2023, 12, 1), 2), Ok(ymd(2024, 2, 29)));
        assert_eq!(eomonth(ymd(2024, 5, 10), -17), Ok(ymd(2022, 12, 31)));
    }

    #[test]
    fn edate_crosses_year_boundaries() {
        assert_eq!(edate(ymd(2023, 11, 15), 3), Ok(ymd(2024, 2, 15)));
        assert_eq!(edate(ymd(2024, 2, 29), 12), Ok(ymd(2025, 2, 28)));
        assert_eq!(edate(ymd(2024, 3, 31), -1), Ok(ymd(2024, 2, 29)));
    }

    #[test]
    fn element_wise_variants_skip_missing_values() {
        let starts = [Some(ymd(2024, 1, 31)), None, Some(NaiveDate::MAX)];
        assert_eq!(
            edate_each(&starts, 1),
            vec![Some(ymd(2024, 2, 29)), None, None]
        );
        assert_eq!(
            eomonth_each(&starts[..2], 0),
            vec![Some(ymd(2024, 1, 31)), None]
        );
    }
}
