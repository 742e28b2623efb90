// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! Prime factorization of arbitrary precision integers.
//!
//! Fractions are kept as prime-power maps, so every integer that enters a Fraction
//! (and every sum produced by Fraction addition) is split into primes here:
//! trial division by a table of small primes, then Miller-Rabin to recognise primes
//! and Pollard-Brent rho to split composites. 64-bit cofactors use `u128` arithmetic.
use log::debug;
use num::{BigUint, Integer};
use num_traits::{One, ToPrimitive, Zero};
use rand::Rng;
use std::collections::BTreeMap;
use std::sync::LazyLock;

const SMALL_PRIME_LIMIT: u32 = 1000;
/// Miller-Rabin with these bases is deterministic below 3.3 * 10^24
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];
const EXTRA_RANDOM_WITNESSES: usize = 8;

static SMALL_PRIMES: LazyLock<Vec<u32>> = LazyLock::new(|| sieve(SMALL_PRIME_LIMIT));

fn sieve(limit: u32) -> Vec<u32> {
    let limit = limit as usize;
    let mut composite = vec![false; limit + 1];
    let mut primes = Vec::new();
    for i in 2..=limit {
        if composite[i] {
            continue;
        }
        primes.push(i as u32);
        let mut j = i * i;
        while j <= limit {
            composite[j] = true;
            j += i;
        }
    }
    primes
}

/// Factorizes `n` into prime -> multiplicity. 0 and 1 give an empty map.
pub fn factorize(n: &BigUint) -> BTreeMap<BigUint, i64> {
    factorize_with_hints(n, std::iter::empty())
}

/// Like [`factorize`], but first divides out `hints`, primes that are likely to
/// divide `n` (e.g. the primes of the operands a sum was built from).
pub fn factorize_with_hints<'a>(
    n: &BigUint,
    hints: impl IntoIterator<Item = &'a BigUint>,
) -> BTreeMap<BigUint, i64> {
    let mut factors = BTreeMap::new();
    if n.is_zero() || n.is_one() {
        return factors;
    }
    let mut rest = n.clone();
    for p in hints {
        if rest.is_one() {
            break;
        }
        divide_out(&mut rest, p, &mut factors);
    }
    for &p in SMALL_PRIMES.iter() {
        if rest.is_one() {
            break;
        }
        let p = BigUint::from(p);
        if &p * &p > rest {
            break;
        }
        divide_out(&mut rest, &p, &mut factors);
    }
    if !rest.is_one() {
        split_large(rest, &mut factors);
    }
    factors
}

fn divide_out(rest: &mut BigUint, p: &BigUint, factors: &mut BTreeMap<BigUint, i64>) {
    if p.is_zero() || p.is_one() {
        return;
    }
    let mut count = 0i64;
    loop {
        let (q, r) = rest.div_rem(p);
        if !r.is_zero() {
            break;
        }
        *rest = q;
        count += 1;
    }
    if count > 0 {
        *factors.entry(p.clone()).or_insert(0) += count;
    }
}

fn split_large(n: BigUint, factors: &mut BTreeMap<BigUint, i64>) {
    let mut stack = vec![n];
    while let Some(m) = stack.pop() {
        if m.is_one() {
            continue;
        }
        if is_probable_prime(&m) {
            *factors.entry(m).or_insert(0) += 1;
            continue;
        }
        let d = match m.to_u64() {
            Some(small) => BigUint::from(pollard_brent_u64(small)),
            None => {
                debug!("splitting {}-bit composite with Pollard-Brent", m.bits());
                pollard_brent(&m)
            }
        };
        let cofactor = &m / &d;
        stack.push(d);
        stack.push(cofactor);
    }
}

pub fn is_probable_prime(n: &BigUint) -> bool {
    if let Some(small) = n.to_u64() {
        return is_prime_u64(small);
    }
    for &p in SMALL_PRIMES.iter() {
        if (n % p).is_zero() {
            return false;
        }
    }
    let one = BigUint::one();
    let n_minus_one = n - &one;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;
    let witness_is_liar = |a: &BigUint| -> bool {
        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            return true;
        }
        for _ in 1..s {
            x = x.modpow(&BigUint::from(2u32), n);
            if x == n_minus_one {
                return true;
            }
        }
        false
    };
    if !WITNESSES.iter().all(|&a| witness_is_liar(&BigUint::from(a))) {
        return false;
    }
    if n.bits() <= 81 {
        return true;
    }
    let mut rng = rand::rng();
    (0..EXTRA_RANDOM_WITNESSES).all(|_| {
        let a = BigUint::from(rng.random_range(2..u64::MAX)) % &n_minus_one;
        a < BigUint::from(2u32) || witness_is_liar(&a)
    })
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1u64 % m;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

pub fn is_prime_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in WITNESSES.iter() {
        if n % p == 0 {
            return n == p;
        }
    }
    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;
    'witness: for &a in WITNESSES.iter() {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// A non-trivial divisor of the composite `n`.
fn pollard_brent_u64(n: u64) -> u64 {
    if n % 2 == 0 {
        return 2;
    }
    let mut rng = rand::rng();
    loop {
        let c = rng.random_range(1..n);
        let f = |v: u64| ((mul_mod(v, v, n) as u128 + c as u128) % n as u128) as u64;
        let mut y = rng.random_range(0..n);
        let block = 128u64;
        let (mut g, mut r, mut q) = (1u64, 1u64, 1u64);
        let (mut x, mut ys) = (0u64, 0u64);
        while g == 1 {
            x = y;
            for _ in 0..r {
                y = f(y);
            }
            let mut k = 0;
            while k < r && g == 1 {
                ys = y;
                for _ in 0..block.min(r - k) {
                    y = f(y);
                    q = mul_mod(q, x.abs_diff(y), n);
                }
                g = q.gcd(&n);
                k += block;
            }
            r *= 2;
        }
        if g == n {
            loop {
                ys = f(ys);
                g = x.abs_diff(ys).gcd(&n);
                if g > 1 {
                    break;
                }
            }
        }
        if g != n {
            return g;
        }
    }
}

fn pollard_brent(n: &BigUint) -> BigUint {
    let two = BigUint::from(2u32);
    if n.is_even() {
        return two;
    }
    let mut rng = rand::rng();
    let diff = |a: &BigUint, b: &BigUint| if a > b { a - b } else { b - a };
    loop {
        let c = BigUint::from(rng.random_range(1..u64::MAX)) % n;
        let f = |v: &BigUint| (v * v + &c) % n;
        let mut y = BigUint::from(rng.random::<u64>()) % n;
        let block = 128u64;
        let mut g = BigUint::one();
        let mut q = BigUint::one();
        let mut r = 1u64;
        let mut x = BigUint::zero();
        let mut ys = BigUint::zero();
        while g.is_one() {
            x = y.clone();
            for _ in 0..r {
                y = f(&y);
            }
            let mut k = 0;
            while k < r && g.is_one() {
                ys = y.clone();
                for _ in 0..block.min(r - k) {
                    y = f(&y);
                    q = (q * diff(&x, &y)) % n;
                }
                g = q.gcd(n);
                k += block;
            }
            r *= 2;
        }
        if &g == n {
            loop {
                ys = f(&ys);
                g = diff(&x, &ys).gcd(n);
                if !g.is_one() {
                    break;
                }
            }
        }
        if &g != n {
            return g;
        }
    }
}
