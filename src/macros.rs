/// Creates an [`Ssv`] from a list of string views, like `vec!`.
///
/// ```
/// use ssv::{ssv, Ssv};
///
/// let v: Ssv = ssv!["foo", "bar", "baz"];
///
/// assert_eq!(v.len(), 3);
/// assert_eq!(&v[2], b"baz");
/// ```
///
/// [`Ssv`]: crate::Ssv
#[macro_export]
macro_rules! ssv {
    () => {
        $crate::Ssv::new()
    };
    ($($string:expr),+ $(,)?) => {{
        let mut vec = $crate::Ssv::new();
        $(vec.push_back($string);)+
        vec
    }};
}
