//! Deterministic byte encoding of filter elements.
//!
//! Every value added to or queried from a [`SiftBloom`](crate::SiftBloom) is
//! first turned into bytes by its [`Element`] impl, and only those bytes are
//! hashed. `add` and `contains` share this path, so an element is always found
//! again as long as its encoding is stable.
//!
//! # Canonical forms
//!
//! | Category   | Types                                              | Form                                   |
//! |------------|----------------------------------------------------|----------------------------------------|
//! | text       | `str`, `String`, `char`, `Cow<str>`                | tag, length, UTF-8                     |
//! | integer    | `i8`..`i128`, `u8`..`u128`, `isize`, `usize`       | tag, sign, 128-bit magnitude           |
//! | float      | `f32`, `f64`                                       | tag, f64 bits; `-0.0 → 0.0`, one NaN   |
//! | boolean    | `bool`                                             | tag, 0 or 1                            |
//! | bytes      | `[u8]`, `Vec<u8>`, `[u8; N]`, [`Bytes`]            | tag, length, raw bytes                 |
//! | composite  | tuples (≤ 6), `Option`, [`Seq`], `&T`, `Box`, `Arc`| framed children                        |
//! | record     | structs via [`element_record!`](crate::element_record) | type name, field names and values  |
//!
//! Integers have one form per mathematical value, so `123u8`, `123i64` and
//! `123usize` are the same element. Categories never collide: `"123"`, `123`
//! and `123.0` are three different elements.
//!
//! # Examples
//!
//! ```
//! use siftbloom::encode::encode_to_vec;
//!
//! assert_eq!(encode_to_vec(&123u8), encode_to_vec(&123i64));
//! assert_ne!(encode_to_vec("123"), encode_to_vec(&123));
//! assert_eq!(encode_to_vec(&-0.0f64), encode_to_vec(&0.0f32));
//! ```

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

const TAG_TEXT: u8 = 0x01;
const TAG_INT: u8 = 0x02;
const TAG_FLOAT: u8 = 0x03;
const TAG_BOOL: u8 = 0x04;
const TAG_BYTES: u8 = 0x05;
const TAG_RECORD: u8 = 0x06;
const TAG_FIELD: u8 = 0x07;
const TAG_SEQ: u8 = 0x08;
const TAG_NONE: u8 = 0x09;
const TAG_SOME: u8 = 0x0a;
const TAG_TUPLE: u8 = 0x0b;
const TAG_UNIT: u8 = 0x0c;
#[cfg(feature = "serde")]
const TAG_SERIALIZED: u8 = 0x0d;

const SIGN_NON_NEGATIVE: u8 = 0;
const SIGN_NEGATIVE: u8 = 1;

/// Bit pattern every NaN is folded into (quiet NaN, zero payload).
const CANONICAL_NAN_BITS: u64 = 0x7ff8_0000_0000_0000;

/// A value that can be stored in a filter.
///
/// Implementations must write the same bytes for equal logical values and
/// must not depend on unordered iteration (e.g. `HashMap` order).
///
/// # Implementing for your own types
///
/// Structs usually use [`element_record!`](crate::element_record). A manual
/// impl composes the [`Encoder`] primitives:
///
/// ```
/// use siftbloom::{Element, Encoder, SiftBloom};
///
/// struct Endpoint {
///     host: String,
///     port: u16,
/// }
///
/// impl Element for Endpoint {
///     fn encode(&self, enc: &mut Encoder) {
///         enc.record("Endpoint", 2);
///         enc.field("host", &self.host);
///         enc.field("port", &self.port);
///     }
/// }
///
/// let filter = SiftBloom::new(1024, 3).unwrap();
/// filter.add(&Endpoint { host: "db".into(), port: 5432 });
/// assert!(filter.contains(&Endpoint { host: "db".into(), port: 5432 }));
/// ```
pub trait Element {
    /// Append this value's canonical encoding to `enc`.
    fn encode(&self, enc: &mut Encoder);
}

/// Byte sink for [`Element::encode`].
///
/// Every primitive is prefixed with a category tag, and variable-length data
/// with a little-endian `u64` length, so concatenated children cannot be
/// confused with one another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoder {
    bytes: Vec<u8>,
}

impl Encoder {
    /// Empty encoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty encoder with at least `capacity` bytes preallocated.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Encoded bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the encoder and return its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Discard written bytes, keeping the allocation.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    fn write_len(&mut self, len: usize) {
        self.bytes.extend_from_slice(&(len as u64).to_le_bytes());
    }

    fn write_framed(&mut self, tag: u8, payload: &[u8]) {
        self.bytes.push(tag);
        self.write_len(payload.len());
        self.bytes.extend_from_slice(payload);
    }

    /// Write a UTF-8 string.
    pub fn write_str(&mut self, value: &str) {
        self.write_framed(TAG_TEXT, value.as_bytes());
    }

    /// Write an unsigned integer in canonical integer form.
    pub fn write_unsigned(&mut self, value: u128) {
        self.bytes.push(TAG_INT);
        self.bytes.push(SIGN_NON_NEGATIVE);
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Write a signed integer in canonical integer form.
    ///
    /// Non-negative values encode exactly like [`write_unsigned`](Self::write_unsigned).
    pub fn write_signed(&mut self, value: i128) {
        if value >= 0 {
            self.write_unsigned(value.unsigned_abs());
        } else {
            self.bytes.push(TAG_INT);
            self.bytes.push(SIGN_NEGATIVE);
            self.bytes.extend_from_slice(&value.unsigned_abs().to_le_bytes());
        }
    }

    /// Write a float, folding `-0.0` into `0.0` and every NaN into one NaN.
    pub fn write_float(&mut self, value: f64) {
        self.bytes.push(TAG_FLOAT);
        self.bytes.extend_from_slice(&canonical_float_bits(value).to_le_bytes());
    }

    /// Write a boolean.
    pub fn write_bool(&mut self, value: bool) {
        self.bytes.push(TAG_BOOL);
        self.bytes.push(u8::from(value));
    }

    /// Write an opaque byte string.
    pub fn write_bytes(&mut self, value: &[u8]) {
        self.write_framed(TAG_BYTES, value);
    }

    /// Write the unit value `()`.
    pub fn write_unit(&mut self) {
        self.bytes.push(TAG_UNIT);
    }

    /// Start a record named `name` with `field_count` fields.
    ///
    /// Follow with exactly `field_count` calls to [`field`](Self::field), in
    /// a fixed order.
    pub fn record(&mut self, name: &str, field_count: usize) {
        self.write_framed(TAG_RECORD, name.as_bytes());
        self.write_len(field_count);
    }

    /// Write one named record field.
    pub fn field<E: Element + ?Sized>(&mut self, name: &str, value: &E) {
        self.write_framed(TAG_FIELD, name.as_bytes());
        value.encode(self);
    }

    /// Start a sequence of `len` elements; follow with `len` encodes.
    pub fn sequence(&mut self, len: usize) {
        self.bytes.push(TAG_SEQ);
        self.write_len(len);
    }

    /// Start a tuple of `arity` elements; follow with `arity` encodes.
    pub fn tuple(&mut self, arity: usize) {
        self.bytes.push(TAG_TUPLE);
        self.write_len(arity);
    }

    /// Write an optional value.
    pub fn option<E: Element + ?Sized>(&mut self, value: Option<&E>) {
        match value {
            None => self.bytes.push(TAG_NONE),
            Some(inner) => {
                self.bytes.push(TAG_SOME);
                inner.encode(self);
            }
        }
    }
}

fn canonical_float_bits(value: f64) -> u64 {
    if value.is_nan() {
        CANONICAL_NAN_BITS
    } else {
        // -0.0 + 0.0 == +0.0 under round-to-nearest.
        (value + 0.0).to_bits()
    }
}

/// Encode `element` into a fresh byte vector.
///
/// ```
/// use siftbloom::encode::encode_to_vec;
///
/// assert_eq!(encode_to_vec("hello"), encode_to_vec(&String::from("hello")));
/// ```
#[must_use]
pub fn encode_to_vec<E: Element + ?Sized>(element: &E) -> Vec<u8> {
    let mut enc = Encoder::new();
    element.encode(&mut enc);
    enc.into_bytes()
}

// Text

impl Element for str {
    fn encode(&self, enc: &mut Encoder) {
        enc.write_str(self);
    }
}

impl Element for String {
    fn encode(&self, enc: &mut Encoder) {
        enc.write_str(self);
    }
}

impl Element for char {
    fn encode(&self, enc: &mut Encoder) {
        let mut buf = [0u8; 4];
        enc.write_str(self.encode_utf8(&mut buf));
    }
}

impl Element for Cow<'_, str> {
    fn encode(&self, enc: &mut Encoder) {
        enc.write_str(self);
    }
}

// Integers

macro_rules! impl_unsigned {
    ($($ty:ty),+) => {
        $(
            impl Element for $ty {
                #[inline]
                fn encode(&self, enc: &mut Encoder) {
                    enc.write_unsigned(*self as u128);
                }
            }
        )+
    };
}

macro_rules! impl_signed {
    ($($ty:ty),+) => {
        $(
            impl Element for $ty {
                #[inline]
                fn encode(&self, enc: &mut Encoder) {
                    enc.write_signed(*self as i128);
                }
            }
        )+
    };
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8, i16, i32, i64, i128, isize);

// Floats, booleans, unit

impl Element for f64 {
    fn encode(&self, enc: &mut Encoder) {
        enc.write_float(*self);
    }
}

impl Element for f32 {
    fn encode(&self, enc: &mut Encoder) {
        enc.write_float(f64::from(*self));
    }
}

impl Element for bool {
    fn encode(&self, enc: &mut Encoder) {
        enc.write_bool(*self);
    }
}

impl Element for () {
    fn encode(&self, enc: &mut Encoder) {
        enc.write_unit();
    }
}

// Bytes

impl Element for [u8] {
    fn encode(&self, enc: &mut Encoder) {
        enc.write_bytes(self);
    }
}

impl Element for Vec<u8> {
    fn encode(&self, enc: &mut Encoder) {
        enc.write_bytes(self);
    }
}

impl<const N: usize> Element for [u8; N] {
    fn encode(&self, enc: &mut Encoder) {
        enc.write_bytes(self);
    }
}

/// Borrowed byte string, for call sites where a slice type would be ambiguous.
///
/// ```
/// use siftbloom::encode::{encode_to_vec, Bytes};
///
/// assert_eq!(encode_to_vec(&Bytes(b"raw")), encode_to_vec(&b"raw".to_vec()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bytes<'a>(pub &'a [u8]);

impl Element for Bytes<'_> {
    fn encode(&self, enc: &mut Encoder) {
        enc.write_bytes(self.0);
    }
}

/// Ordered sequence of elements.
///
/// `[u8]` already means "bytes", so sequences of other element types go
/// through this wrapper.
///
/// ```
/// use siftbloom::encode::{encode_to_vec, Seq};
///
/// let tags = vec!["a", "b"];
/// assert_ne!(encode_to_vec(&Seq(&tags)), encode_to_vec(&Seq(&["b", "a"])));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seq<'a, T>(pub &'a [T]);

impl<T: Element> Element for Seq<'_, T> {
    fn encode(&self, enc: &mut Encoder) {
        enc.sequence(self.0.len());
        for item in self.0 {
            item.encode(enc);
        }
    }
}

// Wrappers

impl<T: Element + ?Sized> Element for &T {
    fn encode(&self, enc: &mut Encoder) {
        (**self).encode(enc);
    }
}

impl<T: Element + ?Sized> Element for Box<T> {
    fn encode(&self, enc: &mut Encoder) {
        (**self).encode(enc);
    }
}

impl<T: Element + ?Sized> Element for Arc<T> {
    fn encode(&self, enc: &mut Encoder) {
        (**self).encode(enc);
    }
}

impl<T: Element + ?Sized> Element for Rc<T> {
    fn encode(&self, enc: &mut Encoder) {
        (**self).encode(enc);
    }
}

impl<T: Element> Element for Option<T> {
    fn encode(&self, enc: &mut Encoder) {
        enc.option(self.as_ref());
    }
}

macro_rules! impl_tuple {
    ($arity:expr => $($name:ident),+) => {
        impl<$($name: Element),+> Element for ($($name,)+) {
            #[allow(non_snake_case)]
            fn encode(&self, enc: &mut Encoder) {
                let ($($name,)+) = self;
                enc.tuple($arity);
                $( $name.encode(enc); )+
            }
        }
    };
}

impl_tuple!(1 => A);
impl_tuple!(2 => A, B);
impl_tuple!(3 => A, B, C);
impl_tuple!(4 => A, B, C, D);
impl_tuple!(5 => A, B, C, D, E);
impl_tuple!(6 => A, B, C, D, E, F);

/// Implement [`Element`] for a struct from an explicit field list.
///
/// The type name and the listed field names, in the listed order, are part of
/// the encoding. Every listed field must itself implement `Element`.
///
/// ```
/// use siftbloom::{element_record, SiftBloom};
///
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// element_record!(User { name, age });
///
/// let filter = SiftBloom::new(1024, 4).unwrap();
/// filter.add(&User { name: "John".into(), age: 30 });
/// assert!(filter.contains(&User { name: "John".into(), age: 30 }));
/// ```
///
/// A module-qualified type takes an explicit record name first, which is the
/// name that gets encoded:
///
/// ```
/// use siftbloom::{element_record, SiftBloom};
///
/// mod model {
///     pub struct Order {
///         pub id: u64,
///         pub sku: String,
///     }
/// }
///
/// element_record!("Order", model::Order { id, sku });
///
/// let filter = SiftBloom::new(1024, 4).unwrap();
/// filter.add(&model::Order { id: 7, sku: "A-1".into() });
/// assert!(filter.contains(&model::Order { id: 7, sku: "A-1".into() }));
/// ```
///
/// Generic types are not supported; implement [`Element`] by hand with
/// [`Encoder::record`] and [`Encoder::field`].
#[macro_export]
macro_rules! element_record {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        $crate::element_record!(@impl stringify!($ty), $ty { $($field),+ });
    };
    ($name:literal, $ty:path { $($field:ident),+ $(,)? }) => {
        $crate::element_record!(@impl $name, $ty { $($field),+ });
    };
    (@impl $name:expr, $ty:path { $($field:ident),+ }) => {
        impl $crate::Element for $ty {
            fn encode(&self, enc: &mut $crate::Encoder) {
                const FIELDS: &[&str] = &[$(stringify!($field)),+];
                enc.record($name, FIELDS.len());
                $( enc.field(stringify!($field), &self.$field); )+
            }
        }
    };
}

/// Any `serde::Serialize` value, pre-encoded as JSON (feature `serde`).
///
/// Struct fields serialize in declaration order. Maps must have a stable
/// iteration order (`BTreeMap`, not `HashMap`) for the encoding to be stable.
///
/// ```
/// # #[cfg(feature = "serde")] {
/// use serde::Serialize;
/// use siftbloom::encode::Serialized;
/// use siftbloom::SiftBloom;
///
/// #[derive(Serialize)]
/// struct Event {
///     kind: &'static str,
///     id: u64,
/// }
///
/// let filter = SiftBloom::new(4096, 5).unwrap();
/// let event = Serialized::new(&Event { kind: "login", id: 7 }).unwrap();
/// filter.add(&event);
/// assert!(filter.contains(&event));
/// # }
/// ```
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Serialized {
    json: Vec<u8>,
}

#[cfg(feature = "serde")]
impl Serialized {
    /// Serialize `value` to its element form.
    ///
    /// # Errors
    ///
    /// Returns [`SiftBloomError::Serialization`](crate::SiftBloomError::Serialization)
    /// when `serde_json` rejects the value (e.g. a map with non-string keys).
    pub fn new<T: serde::Serialize + ?Sized>(value: &T) -> crate::Result<Self> {
        let json = serde_json::to_vec(value)
            .map_err(|e| crate::SiftBloomError::serialization(e.to_string()))?;
        Ok(Self { json })
    }

    /// The JSON bytes that get hashed.
    #[must_use]
    pub fn as_json(&self) -> &[u8] {
        &self.json
    }
}

#[cfg(feature = "serde")]
impl Element for Serialized {
    fn encode(&self, enc: &mut Encoder) {
        enc.write_framed(TAG_SERIALIZED, &self.json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_share_one_form_across_widths() {
        let reference = encode_to_vec(&123i64);
        assert_eq!(encode_to_vec(&123u8), reference);
        assert_eq!(encode_to_vec(&123u16), reference);
        assert_eq!(encode_to_vec(&123i32), reference);
        assert_eq!(encode_to_vec(&123usize), reference);
        assert_eq!(encode_to_vec(&123u128), reference);

        assert_eq!(encode_to_vec(&-5i8), encode_to_vec(&-5i128));
        assert_ne!(encode_to_vec(&-5i32), encode_to_vec(&5i32));
    }

    #[test]
    fn test_integer_extremes() {
        assert_ne!(encode_to_vec(&u128::MAX), encode_to_vec(&i128::MAX));
        assert_ne!(encode_to_vec(&i128::MIN), encode_to_vec(&i128::MAX));
        assert_eq!(encode_to_vec(&0u8), encode_to_vec(&0i64));
        assert_eq!(encode_to_vec(&(i64::MAX as u64)), encode_to_vec(&i64::MAX));
    }

    #[test]
    fn test_float_canonicalization() {
        assert_eq!(encode_to_vec(&-0.0f64), encode_to_vec(&0.0f64));
        assert_eq!(encode_to_vec(&f64::NAN), encode_to_vec(&-f64::NAN));
        assert_eq!(encode_to_vec(&f32::NAN), encode_to_vec(&f64::NAN));
        assert_eq!(encode_to_vec(&1.5f32), encode_to_vec(&1.5f64));
        assert_ne!(encode_to_vec(&f64::INFINITY), encode_to_vec(&f64::NEG_INFINITY));
        assert_ne!(encode_to_vec(&45.67f64), encode_to_vec(&45.68f64));
    }

    #[test]
    fn test_categories_do_not_collide() {
        let text = encode_to_vec("123");
        let int = encode_to_vec(&123);
        let float = encode_to_vec(&123.0);
        let bytes = encode_to_vec(&b"123"[..]);
        assert_ne!(text, int);
        assert_ne!(text, float);
        assert_ne!(text, bytes);
        assert_ne!(int, float);

        assert_ne!(encode_to_vec(&true), encode_to_vec(&1u8));
        assert_ne!(encode_to_vec(&()), encode_to_vec(&None::<u8>));
    }

    #[test]
    fn test_text_forms_agree() {
        let reference = encode_to_vec("é");
        assert_eq!(encode_to_vec(&String::from("é")), reference);
        assert_eq!(encode_to_vec(&'é'), reference);
        assert_eq!(encode_to_vec(&Cow::Borrowed("é")), reference);
        assert_eq!(encode_to_vec(&Cow::<str>::Owned("é".to_string())), reference);
    }

    #[test]
    fn test_byte_forms_agree() {
        let reference = encode_to_vec(&b"abc"[..]);
        assert_eq!(encode_to_vec(b"abc"), reference);
        assert_eq!(encode_to_vec(&b"abc".to_vec()), reference);
        assert_eq!(encode_to_vec(&Bytes(b"abc")), reference);
    }

    #[test]
    fn test_length_framing_separates_tuples() {
        assert_ne!(
            encode_to_vec(&("ab", "c")),
            encode_to_vec(&("a", "bc"))
        );
        assert_ne!(encode_to_vec(&(1, 2)), encode_to_vec(&(1, 2, 0)));
    }

    #[test]
    fn test_wrappers_are_transparent() {
        let reference = encode_to_vec("x");
        assert_eq!(encode_to_vec(&Box::new("x")), reference);
        assert_eq!(encode_to_vec(&Arc::new(String::from("x"))), reference);
        assert_eq!(encode_to_vec(&Rc::new("x")), reference);
        assert_eq!(encode_to_vec(&&"x"), reference);
    }

    #[test]
    fn test_option_framing() {
        assert_ne!(encode_to_vec(&Some(0u8)), encode_to_vec(&None::<u8>));
        assert_ne!(encode_to_vec(&Some(7u8)), encode_to_vec(&7u8));
        assert_eq!(encode_to_vec(&Some(7u8)), encode_to_vec(&Some(7i64)));
    }

    #[test]
    fn test_sequence_order_matters() {
        assert_ne!(encode_to_vec(&Seq(&[1, 2])), encode_to_vec(&Seq(&[2, 1])));
        assert_eq!(encode_to_vec(&Seq(&[1u8, 2])), encode_to_vec(&Seq(&vec![1u64, 2])));
    }

    struct Person {
        name: String,
        age: u32,
    }

    element_record!(Person { name, age });

    struct Pet {
        name: String,
        age: u32,
    }

    element_record!(Pet { name, age });

    #[test]
    fn test_record_is_stable_and_named() {
        let a = Person { name: "Ann".into(), age: 40 };
        let b = Person { name: "Ann".into(), age: 40 };
        assert_eq!(encode_to_vec(&a), encode_to_vec(&b));

        let pet = Pet { name: "Ann".into(), age: 40 };
        assert_ne!(encode_to_vec(&a), encode_to_vec(&pet));
    }

    #[test]
    fn test_record_matches_manual_encoding() {
        let person = Person { name: "Bo".into(), age: 3 };

        let mut enc = Encoder::new();
        enc.record("Person", 2);
        enc.field("name", "Bo");
        enc.field("age", &3u8);

        assert_eq!(encode_to_vec(&person), enc.into_bytes());
    }

    mod shop {
        pub struct Order {
            pub id: u64,
            pub sku: String,
        }
    }

    element_record!("Order", shop::Order { id, sku });

    #[test]
    fn test_record_with_qualified_path_uses_given_name() {
        let order = shop::Order { id: 9, sku: "X".into() };

        let mut enc = Encoder::new();
        enc.record("Order", 2);
        enc.field("id", &9u64);
        enc.field("sku", "X");

        assert_eq!(encode_to_vec(&order), enc.into_bytes());
    }

    #[test]
    fn test_encoder_clear_keeps_reusing() {
        let mut enc = Encoder::with_capacity(64);
        assert!(enc.is_empty());
        "hello".encode(&mut enc);
        assert_eq!(enc.len(), 1 + 8 + 5);
        enc.clear();
        assert!(enc.is_empty());
        "hello".encode(&mut enc);
        assert_eq!(enc.as_bytes(), encode_to_vec("hello").as_slice());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialized_follows_declaration_order() {
        #[derive(serde::Serialize)]
        struct Event {
            kind: String,
            id: u64,
        }

        let a = Serialized::new(&Event { kind: "login".into(), id: 1 }).unwrap();
        let b = Serialized::new(&Event { kind: "login".into(), id: 1 }).unwrap();
        assert_eq!(encode_to_vec(&a), encode_to_vec(&b));
        assert_eq!(a.as_json(), br#"{"kind":"login","id":1}"#);
        assert_ne!(encode_to_vec(&a), encode_to_vec(r#"{"kind":"login","id":1}"#));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialized_rejects_non_string_map_keys() {
        let mut map = std::collections::BTreeMap::new();
        map.insert((1, 2), "pair");
        assert!(matches!(
            Serialized::new(&map),
            Err(crate::SiftBloomError::Serialization { .. })
        ));
    }
}
