// src/macros.rs

/// `String` from anything `String: From` accepts; `s!()` is an empty one.
///
/// Catalog and UI text is built from `&'static str` consts all over the
/// crate, this keeps those conversions short.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($text:expr $(,)?) => {
        <::std::string::String as ::std::convert::From<_>>::from($text)
    };
}
