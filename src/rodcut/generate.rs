//! Random price-table generation.
//!
//! Used to cross-check the two strategies (and the brute-force reference)
//! on many instances. Pass a seeded RNG for reproducible instances.

use rand::Rng;

use crate::models::PriceTable;

/// Prices drawn uniformly from `0..=max_price`, one per piece length.
pub fn random_prices<R: Rng>(rng: &mut R, len: usize, max_price: u64) -> PriceTable {
    let prices = (0..len).map(|_| rng.random_range(0..=max_price)).collect();
    PriceTable::new(prices)
}

/// Non-decreasing prices: each length costs at least as much as the previous one.
///
/// Increments are drawn from `0..=max_step`. Closer to real price lists,
/// where a longer piece is never cheaper than a shorter one.
pub fn monotone_prices<R: Rng>(rng: &mut R, len: usize, max_step: u64) -> PriceTable {
    let mut price = 0u64;
    let prices = (0..len)
        .map(|_| {
            price = price.saturating_add(rng.random_range(0..=max_step));
            price
        })
        .collect();
    PriceTable::new(prices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_prices_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        let table = random_prices(&mut rng, 50, 20);
        assert_eq!(table.len(), 50);
        assert!(table.as_slice().iter().all(|&p| p <= 20));
    }

    #[test]
    fn test_random_prices_reproducible() {
        let a = random_prices(&mut SmallRng::seed_from_u64(7), 10, 100);
        let b = random_prices(&mut SmallRng::seed_from_u64(7), 10, 100);
        assert_eq!(a, b);
    }

    #[test]
    fn test_monotone_prices() {
        let mut rng = SmallRng::seed_from_u64(42);
        let table = monotone_prices(&mut rng, 30, 5);
        assert_eq!(table.len(), 30);
        assert!(table.as_slice().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_empty() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(random_prices(&mut rng, 0, 10).is_empty());
        assert!(monotone_prices(&mut rng, 0, 10).is_empty());
    }
}
