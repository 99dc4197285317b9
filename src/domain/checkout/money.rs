//! Minor-unit amount formatting.

/// Formats an amount in cents as a two-decimal string, e.g. `79980` -> `"799.80"`.
///
/// Integer arithmetic only, so there is no float rounding on large totals.
pub fn format_cents(amount_cents: i64) -> String {
    let sign = if amount_cents < 0 { "-" } else { "" };
    let abs = amount_cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}
