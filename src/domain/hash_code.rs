//! Hash-code composition helpers.
//!
//! Each field contributes `37 * seed + value` with 32-bit wrapping arithmetic,
//! starting from [`SEED`]:
//!
//! ```
//! use wsgen::domain::hash_code::{self, HashCodeBuilder};
//!
//! let manual = hash_code::hash(hash_code::hash(hash_code::SEED, &7i32), "port");
//! let built = HashCodeBuilder::new().field(&7i32).field("port").finish();
//! assert_eq!(manual, built);
//! ```

/// Initial value for a composed hash code. Non-zero to reduce collisions.
pub const SEED: i32 = 23;

const ODD_PRIME_NUMBER: i32 = 37;

fn first_term(seed: i32) -> i32 {
    ODD_PRIME_NUMBER.wrapping_mul(seed)
}

/// A value that can be folded into a composed hash code.
pub trait HashContribution {
    /// Contribution of the value passed directly as a field.
    fn contribute(&self, seed: i32) -> i32;

    /// Contribution of the value held inside an `Option` or a sequence, where
    /// it is folded through its object hash code.
    fn contribute_boxed(&self, seed: i32) -> i32 {
        self.contribute(seed)
    }
}

/// Fold `value` into `seed`.
pub fn hash<T: HashContribution + ?Sized>(seed: i32, value: &T) -> i32 {
    value.contribute(seed)
}

/// Hash of a string over its UTF-16 code units (`s[0]*31^(n-1) + ... + s[n-1]`).
pub fn string_hash(value: &str) -> i32 {
    value.encode_utf16().fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(unit as i32))
}

impl HashContribution for bool {
    fn contribute(&self, seed: i32) -> i32 {
        first_term(seed).wrapping_add(i32::from(*self))
    }

    fn contribute_boxed(&self, seed: i32) -> i32 {
        let object_hash = if *self { 1231 } else { 1237 };
        first_term(seed).wrapping_add(object_hash)
    }
}

impl HashContribution for char {
    fn contribute(&self, seed: i32) -> i32 {
        first_term(seed).wrapping_add(*self as i32)
    }
}

impl HashContribution for i32 {
    fn contribute(&self, seed: i32) -> i32 {
        first_term(seed).wrapping_add(*self)
    }
}

macro_rules! widen_to_i32 {
    ($($ty:ty),*) => {
        $(impl HashContribution for $ty {
            fn contribute(&self, seed: i32) -> i32 {
                i32::from(*self).contribute(seed)
            }
        })*
    };
}

widen_to_i32!(i8, i16, u8, u16);

impl HashContribution for i64 {
    fn contribute(&self, seed: i32) -> i32 {
        let folded = *self ^ ((*self as u64) >> 32) as i64;
        first_term(seed).wrapping_add(folded as i32)
    }
}

impl HashContribution for f32 {
    fn contribute(&self, seed: i32) -> i32 {
        // NaN collapses to a single canonical bit pattern.
        let bits = if self.is_nan() { 0x7fc0_0000 } else { self.to_bits() as i32 };
        bits.contribute(seed)
    }
}

impl HashContribution for f64 {
    fn contribute(&self, seed: i32) -> i32 {
        let bits = if self.is_nan() { 0x7ff8_0000_0000_0000 } else { self.to_bits() as i64 };
        bits.contribute(seed)
    }
}

impl HashContribution for str {
    fn contribute(&self, seed: i32) -> i32 {
        string_hash(self).contribute(seed)
    }
}

impl HashContribution for String {
    fn contribute(&self, seed: i32) -> i32 {
        self.as_str().contribute(seed)
    }
}

impl<T: HashContribution> HashContribution for Option<T> {
    fn contribute(&self, seed: i32) -> i32 {
        match self {
            Some(value) => value.contribute_boxed(seed),
            None => 0i32.contribute(seed),
        }
    }
}

/// Sequences fold each element in order; the container adds nothing itself.
impl<T: HashContribution> HashContribution for [T] {
    fn contribute(&self, seed: i32) -> i32 {
        self.iter().fold(seed, |acc, item| item.contribute_boxed(acc))
    }
}

impl<T: HashContribution, const N: usize> HashContribution for [T; N] {
    fn contribute(&self, seed: i32) -> i32 {
        self.as_slice().contribute(seed)
    }
}

impl<T: HashContribution> HashContribution for Vec<T> {
    fn contribute(&self, seed: i32) -> i32 {
        self.as_slice().contribute(seed)
    }
}

impl<T: HashContribution + ?Sized> HashContribution for &T {
    fn contribute(&self, seed: i32) -> i32 {
        (**self).contribute(seed)
    }

    fn contribute_boxed(&self, seed: i32) -> i32 {
        (**self).contribute_boxed(seed)
    }
}

/// Chains field contributions starting from [`SEED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCodeBuilder {
    result: i32,
}

impl HashCodeBuilder {
    pub fn new() -> Self {
        Self { result: SEED }
    }

    pub fn field<T: HashContribution + ?Sized>(self, value: &T) -> Self {
        Self { result: hash(self.result, value) }
    }

    pub fn finish(self) -> i32 {
        self.result
    }
}

impl Default for HashCodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
