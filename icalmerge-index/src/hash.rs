//! String hashing and table sizing.

/// Smallest table the index will build.
const MIN_TABLE_SIZE: usize = 3;

/// DJB2 string hash, xor variant: `h = h * 33 ^ byte`, seeded with 5381.
#[must_use]
pub fn djb2(key: &str) -> u64 {
    key.bytes()
        .fold(5381u64, |h, b| h.wrapping_mul(33) ^ u64::from(b))
}

/// Rounds a requested capacity up to the next odd number and then to the
/// next prime at or above it.
///
/// Returns `None` if the search would overflow `usize`.
#[must_use]
pub fn table_size(capacity_hint: usize) -> Option<usize> {
    let mut n = capacity_hint.max(MIN_TABLE_SIZE);
    if n % 2 == 0 {
        n = n.checked_add(1)?;
    }
    while !is_prime(n) {
        n = n.checked_add(2)?;
    }
    Some(n)
}

/// Trial division up to the square root. Only called with odd `n >= 3`
/// by [`table_size`], but correct for any input.
fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
