//! Internal macros

/// Generate the named per-primitive accessors on `CacheHandle`
///
/// Each entry expands to a `set_*`, `get_*` and `get_*_or_default` method that
/// delegates to the generic `set_value` / `get_value` / `get_value_or`. The
/// first type is what the setter accepts, the second is what is stored and
/// returned.
macro_rules! typed_accessors {
    ($(
        $label:literal: $set:ident, $get:ident, $get_or:ident => $arg:ty as $ty:ty;
    )+) => {
        $(
            #[doc = concat!("Store a ", $label, " at `prefix + key`")]
            #[allow(clippy::useless_conversion)]
            pub async fn $set(&self, key: &str, value: $arg, ttl: Duration) -> CacheResult<()> {
                self.set_value::<$ty>(key, &<$ty>::from(value), ttl).await
            }

            #[doc = concat!("Fetch the ", $label, " stored at `prefix + key`")]
            pub async fn $get(&self, key: &str) -> CacheResult<$ty> {
                self.get_value::<$ty>(key).await
            }

            #[doc = concat!(
                "Fetch the ", $label, " stored at `prefix + key`, returning `fallback` on any error"
            )]
            pub async fn $get_or(&self, key: &str, fallback: $ty) -> $ty {
                self.get_value_or::<$ty>(key, fallback).await
            }
        )+
    };
}
