/// Computes the greatest common divisor of two numbers.
///
/// The result is never negative and `gcd(0, b) == |b|`.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a.abs()
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b).
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (g, x, y) = extended_gcd_signed(a, b);
    if g < 0 {
        return (-g, -x, -y);
    }

    (g, x, y)
}

fn extended_gcd_signed(a: i64, b: i64) -> (i64, i64, i64) {
    if b == 0 {
        return (a, 1, 0);
    }

    let (g, x, y) = extended_gcd_signed(b, a % b);
    (g, y, x - (a / b) * y)
}

/// Reduces `x` into `[0, m)`.
#[inline]
pub fn rem(x: i64, m: i64) -> i64 {
    let r = x % m;
    if r < 0 {
        return r + m;
    }

    r
}

/// Modular inverse of a mod m, if it exists.
///
/// For `m == 1` the only residue is 0 and it is its own inverse.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let (g, x, _) = extended_gcd(rem(a, m), m);
    if g != 1 {
        return None;
    }

    // x·a ≡ 1 (mod m)
    Some(rem(x, m))
}
