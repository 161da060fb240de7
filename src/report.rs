use std::fmt::Display;

use crate::{registry::Registry, MONTHS};

/// A printable summary of a [`Registry`].
///
/// The [`Display`] implementation prints total sales for each month in
/// [`MONTHS`], followed by the grand total. If [`Report::by_manufacturer`] is
/// set, it first prints each manufacturer's yearly total, sorted by name.
#[derive(Debug)]
pub struct Report<'a> {
    registry: &'a Registry,
    pub by_manufacturer: bool,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            by_manufacturer: false,
        }
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.by_manufacturer {
            for (name, total) in self.registry.total_sales_by_manufacturer() {
                writeln!(f, "{name} yearly sales: {total}")?;
            }
        }
        for (i, month) in MONTHS.iter().enumerate() {
            writeln!(
                f,
                "Total sales in {month}: {}",
                self.registry.total_sales_by_month(i)
            )?;
        }
        writeln!(f, "Grand total sales: {}", self.registry.grand_total_sales())?;
        Ok(())
    }
}
