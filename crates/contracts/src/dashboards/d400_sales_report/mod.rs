pub mod dto;

pub use dto::{DailySales, RankedCount, ReportPeriod, SalesReport, SizeShare};
