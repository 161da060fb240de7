use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::{error::Result, manufacturer::Manufacturer, units::Units};

/// What to do with a data row that cannot be parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OnError {
    /// Stop ingesting and return the error.
    #[default]
    Abort,
    /// Log a warning, skip the row, and carry on.
    Skip,
}

/// Counts of rows handled by [`Registry::ingest`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ingest {
    pub added: usize,
    pub skipped: usize,
}

/// Holds every manufacturer parsed from the sales data, in input order.
///
/// To create a new, empty `Registry`, use [`Registry::new`].
///
/// To add sales data, use [`Registry::parse_and_add`] for single rows, or
/// [`Registry::ingest`] for the rows of a whole file.
///
/// Once populated, query it with [`Registry::total_sales_by_month`],
/// [`Registry::total_sales_by_manufacturer`], and
/// [`Registry::grand_total_sales`].
#[derive(Debug, Default)]
pub struct Registry {
    manufacturers: Vec<Manufacturer>,
}

impl Registry {
    /// Creates a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn manufacturers(&self) -> &[Manufacturer] {
        &self.manufacturers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.manufacturers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.manufacturers.is_empty()
    }

    /// Parses `row` as a manufacturer and adds it to the registry.
    ///
    /// If `is_header` is true, the row is ignored, whatever it contains.
    ///
    /// # Examples
    ///
    /// ```
    /// # use car_sales::{Registry, Units};
    /// let row: Vec<String> = ["Toyota", "1,000", "2000", "3000", "4000", "5000", "6000", "7000", "8000"]
    ///     .map(String::from)
    ///     .into();
    /// let mut registry = Registry::new();
    /// registry.parse_and_add(&row, true).unwrap();
    /// assert!(registry.is_empty());
    /// registry.parse_and_add(&row, false).unwrap();
    /// assert_eq!(registry.grand_total_sales(), Units::from(36000));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns errors if:
    /// * The row has fewer than eight sales figures after the name
    /// * A sales figure is not an integer, once thousands separators are removed
    pub fn parse_and_add(&mut self, row: &[String], is_header: bool) -> Result<()> {
        if is_header {
            return Ok(());
        }
        self.manufacturers.push(Manufacturer::try_from(row)?);
        Ok(())
    }

    /// Adds every row in `rows`, treating the first as a header.
    ///
    /// Bad data rows are handled according to `on_error`.
    ///
    /// # Errors
    ///
    /// With [`OnError::Abort`], returns the first error from
    /// [`Registry::parse_and_add`]. Rows before it stay added.
    pub fn ingest<I, R>(&mut self, rows: I, on_error: OnError) -> Result<Ingest>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[String]>,
    {
        let mut ingest = Ingest::default();
        for (i, row) in rows.into_iter().enumerate() {
            let is_header = i == 0;
            match self.parse_and_add(row.as_ref(), is_header) {
                Ok(()) if is_header => {}
                Ok(()) => ingest.added += 1,
                Err(e) if on_error == OnError::Skip => {
                    warn!("skipping record {}: {e}", i + 1);
                    ingest.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }
        debug!(
            "ingested {} manufacturers, skipped {} rows",
            ingest.added, ingest.skipped
        );
        Ok(ingest)
    }

    /// Returns each manufacturer's yearly sales, by name.
    ///
    /// If several manufacturers share a name, the one added last wins.
    #[must_use]
    pub fn total_sales_by_manufacturer(&self) -> BTreeMap<&str, Units> {
        self.manufacturers
            .iter()
            .map(|m| (m.name(), m.total_yearly_sales()))
            .collect()
    }

    /// Returns the sales of all manufacturers for the zero-based `month`.
    #[must_use]
    pub fn total_sales_by_month(&self, month: usize) -> Units {
        self.manufacturers
            .iter()
            .map(|m| m.monthly_sales(month))
            .sum()
    }

    /// Returns the yearly sales of all manufacturers combined.
    #[must_use]
    pub fn grand_total_sales(&self) -> Units {
        self.manufacturers
            .iter()
            .map(Manufacturer::total_yearly_sales)
            .sum()
    }
}
