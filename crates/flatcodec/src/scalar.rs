//! Fixed-width scalar encoding
//!
//! | Rust Type | Size | Notes                                   |
//! |-----------|------|-----------------------------------------|
//! | u8        | 1    | order independent                       |
//! | i16 / u16 | 2    |                                         |
//! | i32 / u32 | 4    |                                         |
//! | f32       | 4    | IEEE-754 bit pattern, never renormalized |
//!
//! Every value is first captured in host order with `to_ne_bytes`, then
//! copied out reversed when the requested order differs from the host. The
//! result is identical to a shift-and-mask encoder for every bit pattern,
//! including NaN payloads and signed zeros.
//!
//! Each primitive comes in two forms: `write_i32` / `read_i32` use the host
//! order, `write_i32_ordered` / `read_i32_ordered` take it explicitly.
//!
//! # Panics
//!
//! All functions panic if `offset + WIDTH` exceeds the buffer length.

use crate::ByteOrder;

/// A fixed-width value that can be moved through its native byte image
pub trait Scalar: Copy {
    /// Host-order byte image, `[u8; WIDTH]`
    type Repr: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Encoded size in bytes
    const WIDTH: usize;

    fn to_native_bytes(self) -> Self::Repr;

    fn from_native_bytes(bytes: Self::Repr) -> Self;
}

macro_rules! impl_scalar {
    ($ty:ty, $width:expr) => {
        impl Scalar for $ty {
            type Repr = [u8; $width];
            const WIDTH: usize = $width;

            #[inline]
            fn to_native_bytes(self) -> Self::Repr {
                self.to_ne_bytes()
            }

            #[inline]
            fn from_native_bytes(bytes: Self::Repr) -> Self {
                <$ty>::from_ne_bytes(bytes)
            }
        }
    };
}

impl_scalar!(i16, 2);
impl_scalar!(u16, 2);
impl_scalar!(i32, 4);
impl_scalar!(u32, 4);
impl_scalar!(f32, 4);

/// Write `value` at `offset` in the given byte order. Returns `T::WIDTH`.
#[inline]
pub fn write_scalar<T: Scalar>(bytes: &mut [u8], offset: usize, value: T, order: ByteOrder) -> usize {
    let native = value.to_native_bytes();
    let dst = &mut bytes[offset..offset + T::WIDTH];
    dst.copy_from_slice(native.as_ref());
    if !order.is_native() {
        dst.reverse();
    }
    T::WIDTH
}

/// Read a `T` at `offset` in the given byte order. Returns the value and `T::WIDTH`.
#[inline]
pub fn read_scalar<T: Scalar>(bytes: &[u8], offset: usize, order: ByteOrder) -> (T, usize) {
    let mut repr = T::Repr::default();
    let raw = repr.as_mut();
    raw.copy_from_slice(&bytes[offset..offset + T::WIDTH]);
    if !order.is_native() {
        raw.reverse();
    }
    (T::from_native_bytes(repr), T::WIDTH)
}

// Generates the native-order and explicit-order function pairs for one type
macro_rules! scalar_fns {
    ($ty:ty, $write:ident, $write_ordered:ident, $read:ident, $read_ordered:ident) => {
        #[doc = concat!("Write a `", stringify!($ty), "` in host byte order.")]
        #[inline]
        pub fn $write(bytes: &mut [u8], offset: usize, value: $ty) -> usize {
            write_scalar(bytes, offset, value, ByteOrder::native())
        }

        #[doc = concat!("Write a `", stringify!($ty), "` in the given byte order.")]
        #[inline]
        pub fn $write_ordered(bytes: &mut [u8], offset: usize, value: $ty, order: ByteOrder) -> usize {
            write_scalar(bytes, offset, value, order)
        }

        #[doc = concat!("Read a `", stringify!($ty), "` in host byte order.")]
        #[inline]
        pub fn $read(bytes: &[u8], offset: usize) -> ($ty, usize) {
            read_scalar(bytes, offset, ByteOrder::native())
        }

        #[doc = concat!("Read a `", stringify!($ty), "` in the given byte order.")]
        #[inline]
        pub fn $read_ordered(bytes: &[u8], offset: usize, order: ByteOrder) -> ($ty, usize) {
            read_scalar(bytes, offset, order)
        }
    };
}

scalar_fns!(i16, write_i16, write_i16_ordered, read_i16, read_i16_ordered);
scalar_fns!(u16, write_u16, write_u16_ordered, read_u16, read_u16_ordered);
scalar_fns!(i32, write_i32, write_i32_ordered, read_i32, read_i32_ordered);
scalar_fns!(u32, write_u32, write_u32_ordered, read_u32, read_u32_ordered);
scalar_fns!(f32, write_f32, write_f32_ordered, read_f32, read_f32_ordered);

/// Write a single byte. Returns 1.
#[inline]
pub fn write_u8(bytes: &mut [u8], offset: usize, value: u8) -> usize {
    bytes[offset] = value;
    1
}

/// Read a single byte. Returns the byte and 1.
#[inline]
pub fn read_u8(bytes: &[u8], offset: usize) -> (u8, usize) {
    (bytes[offset], 1)
}
