//! Output generation for scraped article records.
//!
//! One sink today: [`csv`], which writes the ranked records as a
//! timestamp-named CSV file with a fixed column order.

pub mod csv;
