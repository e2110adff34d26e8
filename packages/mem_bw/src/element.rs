//! The closed set of element widths the benchmark battery covers.

/// Width of a single buffer element, in other words the granularity at which the
/// indexed-write access pattern stores values.
///
/// The set is closed: these are the unsigned integer widths the hardware can store
/// with a single instruction on every supported target, plus `u128`, which Rust
/// guarantees on all targets.
///
/// # Example
///
/// ```
/// use mem_bw::ElementWidth;
///
/// assert_eq!(ElementWidth::U64.bytes(), 8);
/// assert_eq!(ElementWidth::U64.bits(), 64);
/// assert_eq!(format!("{}", ElementWidth::U8), "8-bit");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, derive_more::Display)]
pub enum ElementWidth {
    /// One byte per element.
    #[display("8-bit")]
    U8,

    /// Two bytes per element.
    #[display("16-bit")]
    U16,

    /// Four bytes per element.
    #[display("32-bit")]
    U32,

    /// Eight bytes per element.
    #[display("64-bit")]
    U64,

    /// Sixteen bytes per element.
    #[display("128-bit")]
    U128,
}

impl ElementWidth {
    /// All supported widths, narrowest first. This is also the order in which the
    /// single-threaded battery runs.
    pub const ALL: [Self; 5] = [Self::U8, Self::U16, Self::U32, Self::U64, Self::U128];

    /// Size of one element in bytes.
    #[must_use]
    #[inline]
    pub fn bytes(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 4,
            Self::U64 => 8,
            Self::U128 => 16,
        }
    }

    /// Size of one element in bits.
    #[must_use]
    #[inline]
    pub fn bits(self) -> usize {
        self.bytes() * 8
    }
}

/// A buffer element type usable by the worker strategies.
///
/// Implemented for exactly the unsigned integer types behind [`ElementWidth`];
/// width dispatch is a `match` on the enum that monomorphizes the generic
/// workers, not runtime polymorphism.
pub(crate) trait Element: Copy + Send + Sync + 'static {
    /// The all-zero value used for the warm-up pass.
    const ZERO: Self;

    /// Converts a pass counter into the payload value written by that pass.
    ///
    /// Narrow types truncate, so an 8-bit buffer sees the counter modulo 256.
    fn from_pass(pass: u32) -> Self;
}

macro_rules! impl_element {
    ($($t:ty),+) => {
        $(
            impl Element for $t {
                const ZERO: Self = 0;

                #[inline]
                fn from_pass(pass: u32) -> Self {
                    pass as $t
                }
            }
        )+
    };
}

impl_element!(u8, u16, u32, u64, u128);
