use rust_decimal::Decimal;

/// Arithmetic mean of review ratings.
///
/// Returns exactly zero when there are no ratings.
pub fn average_rating(ratings: &[i32]) -> Decimal {
    if ratings.is_empty() {
        return Decimal::ZERO;
    }

    let sum: i64 = ratings.iter().copied().map(i64::from).sum();
    Decimal::from(sum) / Decimal::from(ratings.len() as i64)
}
