#![doc = include_str!("../README.md")]
mod error;
mod manufacturer;
mod reader;
mod registry;
mod report;
mod units;

pub use error::{Result, SalesError};
pub use manufacturer::Manufacturer;
pub use reader::{FileReader, Row};
pub use registry::{Ingest, OnError, Registry};
pub use report::Report;
pub use units::{ParseUnitsError, Units};

/// The number of months of sales recorded for each manufacturer.
pub const MONTH_COUNT: usize = 8;

/// Labels for each month of sales, in input column order.
pub const MONTHS: [&str; MONTH_COUNT] = [
    "January", "February", "March", "April", "May", "June", "July", "August",
];

/// The sales data file read by the `car-sales` tool.
pub const DEFAULT_PATH: &str = "car_sales.csv";
