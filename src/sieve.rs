//! Sieve of Eratosthenes, plain and segmented.

use crate::{AlgoError, Result};

/// All primes `<= n`, in ascending order.
///
/// O(n log log n) time, O(n) memory.
pub fn sieve_of_eratosthenes(n: usize) -> Vec<usize> {
    if n < 2 {
        return Vec::new();
    }

    let mut is_prime = vec![true; n + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut p = 2;
    while p * p <= n {
        if is_prime[p] {
            for multiple in (p * p..=n).step_by(p) {
                is_prime[multiple] = false;
            }
        }
        p += 1;
    }

    let primes: Vec<usize> = is_prime
        .iter()
        .enumerate()
        .filter_map(|(i, &prime)| prime.then_some(i))
        .collect();
    log::debug!("Sieve up to {} found {} primes", n, primes.len());
    primes
}

/// `floor(sqrt(n)) + 1`, corrected for float rounding.
fn sqrt_limit(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root + 1
}

/// All primes `<= n` using O(sqrt n) working memory.
///
/// Segments are `floor(sqrt n) + 1` wide.
pub fn segmented_sieve(n: usize) -> Vec<usize> {
    if n < 2 {
        return Vec::new();
    }
    let limit = sqrt_limit(n);
    sieve_segments(n, limit, limit)
}

/// Segmented sieve with a caller-chosen segment width.
pub fn segmented_sieve_with(n: usize, segment_size: usize) -> Result<Vec<usize>> {
    if segment_size == 0 {
        return Err(AlgoError::InvalidInput(
            "segment size must be greater than 0".to_string(),
        ));
    }
    if n < 2 {
        return Ok(Vec::new());
    }
    Ok(sieve_segments(n, sqrt_limit(n), segment_size))
}

fn sieve_segments(n: usize, limit: usize, segment_size: usize) -> Vec<usize> {
    let base_primes = sieve_of_eratosthenes(limit);
    if n <= limit {
        return base_primes.into_iter().filter(|&p| p <= n).collect();
    }

    let mut primes = base_primes.clone();
    // No segment is wider than the range left above the base primes.
    let mut segment = vec![true; segment_size.min(n - limit)];
    let mut low = limit + 1;

    while low <= n {
        let high = low.saturating_add(segment_size - 1).min(n);
        let width = high - low + 1;
        segment[..width].fill(true);

        for &prime in &base_primes {
            let first_multiple = (low + prime - 1) / prime * prime;
            let start = (prime * prime).max(first_multiple);
            if start > high {
                continue;
            }
            for multiple in (start..=high).step_by(prime) {
                segment[multiple - low] = false;
            }
        }

        primes.extend(
            segment[..width]
                .iter()
                .enumerate()
                .filter_map(|(offset, &prime)| prime.then_some(low + offset)),
        );
        log::trace!("Sieved segment [{}, {}]", low, high);
        low = high + 1;
    }

    log::debug!(
        "Segmented sieve up to {} found {} primes (segment size {})",
        n,
        primes.len(),
        segment_size
    );
    primes
}

/// Number of primes `<= n`.
pub fn count_primes(n: usize) -> usize {
    sieve_of_eratosthenes(n).len()
}
