use tracing::debug;

use crate::{error::SalesError, units::Units, MONTHS, MONTH_COUNT};

/// Holds a year's monthly sales for one car manufacturer.
///
/// There is always one figure per month in [`MONTHS`]. A `Manufacturer` is
/// built from a CSV row with [`TryFrom`], and is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manufacturer {
    name: String,
    monthly_sales: [Units; MONTH_COUNT],
}

impl Manufacturer {
    #[must_use]
    pub fn new(name: impl Into<String>, monthly_sales: [Units; MONTH_COUNT]) -> Self {
        Self {
            name: name.into(),
            monthly_sales,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn sales(&self) -> &[Units] {
        &self.monthly_sales
    }

    /// Returns the sum of all monthly sales.
    #[must_use]
    pub fn total_yearly_sales(&self) -> Units {
        self.monthly_sales.iter().sum()
    }

    /// Returns sales for the zero-based `month`, or zero if there is no such
    /// month.
    ///
    /// # Examples
    ///
    /// ```
    /// # use car_sales::{Manufacturer, Units};
    /// let m = Manufacturer::new("Toyota", [Units::from(5); 8]);
    /// assert_eq!(m.monthly_sales(0), Units::from(5));
    /// assert_eq!(m.monthly_sales(12), Units::default());
    /// ```
    #[must_use]
    pub fn monthly_sales(&self, month: usize) -> Units {
        self.monthly_sales.get(month).copied().unwrap_or_default()
    }
}

impl TryFrom<&[String]> for Manufacturer {
    type Error = SalesError;

    /// Parses a data row of the form `name, month1, ..., month8`.
    ///
    /// Sales figures may contain thousands separators. Any figures after the
    /// last month are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SalesError::MissingData`] if there are fewer than
    /// [`MONTH_COUNT`] sales figures, or [`SalesError::InvalidFormat`] if
    /// any figure is not an integer.
    fn try_from(row: &[String]) -> Result<Self, Self::Error> {
        let Some((name, figures)) = row
            .split_first()
            .filter(|(_, figures)| figures.len() >= MONTH_COUNT)
        else {
            return Err(SalesError::MissingData {
                row: row.to_vec(),
                expected: MONTH_COUNT,
                found: row.len().saturating_sub(1),
            });
        };
        if figures.len() > MONTH_COUNT {
            debug!(
                "{name}: ignoring {} sales figures past {}",
                figures.len() - MONTH_COUNT,
                MONTHS[MONTH_COUNT - 1],
            );
        }
        let mut monthly_sales = [Units::default(); MONTH_COUNT];
        for (sales, field) in monthly_sales.iter_mut().zip(figures) {
            *sales = field.parse().map_err(|source| SalesError::InvalidFormat {
                row: row.to_vec(),
                field: field.clone(),
                source,
            })?;
        }
        Ok(Self::new(name.as_str(), monthly_sales))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(ToString::to_string).collect()
    }

    fn toyota() -> Manufacturer {
        Manufacturer::try_from(
            row(&[
                "Toyota", "1,000", "2000", "3000", "4000", "5000", "6000", "7000", "8000",
            ])
            .as_slice(),
        )
        .unwrap()
    }

    #[test]
    fn try_from_fn_parses_name_and_sales() {
        let m = toyota();
        assert_eq!(m.name(), "Toyota");
        assert_eq!(m.sales().len(), 8);
        assert_eq!(m.monthly_sales(0), Units::from(1000));
        assert_eq!(m.monthly_sales(7), Units::from(8000));
    }

    #[test]
    fn total_yearly_sales_fn_sums_all_months() {
        assert_eq!(toyota().total_yearly_sales(), Units::from(36000));
    }

    #[test]
    fn monthly_sales_fn_returns_zero_out_of_range() {
        let m = toyota();
        for month in [8, 9, 100, usize::MAX] {
            assert_eq!(m.monthly_sales(month), Units::default());
        }
    }

    #[test]
    fn try_from_fn_returns_missing_data_for_short_row() {
        let short = row(&["Ford", "1", "2", "3", "4", "5", "6", "7"]);
        let err = Manufacturer::try_from(short.as_slice()).unwrap_err();
        assert!(
            matches!(err, SalesError::MissingData { found: 7, expected: 8, ref row } if row == &short),
            "{err:?}"
        );
    }

    #[test]
    fn try_from_fn_returns_missing_data_for_empty_row() {
        let empty: Vec<String> = Vec::new();
        let err = Manufacturer::try_from(empty.as_slice()).unwrap_err();
        assert!(matches!(err, SalesError::MissingData { found: 0, .. }), "{err:?}");
    }

    #[test]
    fn try_from_fn_returns_invalid_format_for_non_numeric_figure() {
        let bad = row(&["Ford", "1", "2", "3", "4", "5", "6", "7", "8x"]);
        let err = Manufacturer::try_from(bad.as_slice()).unwrap_err();
        assert!(
            matches!(err, SalesError::InvalidFormat { ref field, .. } if field == "8x"),
            "{err:?}"
        );
    }

    #[test]
    fn try_from_fn_ignores_figures_past_last_month() {
        let long = row(&["Kia", "1", "1", "1", "1", "1", "1", "1", "1", "99"]);
        let m = Manufacturer::try_from(long.as_slice()).unwrap();
        assert_eq!(m.total_yearly_sales(), Units::from(8));
        assert_eq!(m.monthly_sales(8), Units::default());
    }
}
