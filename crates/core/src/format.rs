//! Price formatting helpers
//!
//! Catalog prices are whole rupees. Chat responses and the calculator show
//! them in lakhs (1 L = 100,000) or thousands.

const LAKH: f64 = 100_000.0;
const THOUSAND: f64 = 1_000.0;

/// Price in lakhs with two decimals, without currency symbol or suffix
///
/// `570_000` becomes `"5.70"`.
pub fn format_lakhs(amount: u64) -> String {
    format!("{:.2}", amount as f64 / LAKH)
}

/// Price in thousands rounded to a whole number, without suffix
///
/// `15_000` becomes `"15"`.
pub fn format_thousands(amount: u64) -> String {
    format!("{:.0}", amount as f64 / THOUSAND)
}
