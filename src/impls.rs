/*!
Implementations of the [`parameter`][crate::parameter] traits for various
primitive and standard library types
 */

use std::collections::VecDeque;

use crate::parameter::{Parameter, ParsedValue, Value, ValueError, ValueKind};

macro_rules! from_str {
    ($($type:ident $(:: $path:ident)*,)*) => {
        $(
            impl ParsedValue for $type $(:: $path)* {}
        )*
    };
}

// `char` is included: its `FromStr` only accepts a token of exactly one
// character.
from_str! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    char,

    String,
    std::path::PathBuf,

    core::net::Ipv4Addr,
    core::net::Ipv6Addr,
    core::net::IpAddr,
    core::net::SocketAddrV4,
    core::net::SocketAddrV6,
    core::net::SocketAddr,
}

impl Parameter for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    #[inline]
    fn present(&mut self) {
        *self = true;
    }

    #[inline]
    fn add_value(&mut self, token: &str) -> Result<(), ValueError> {
        Err(ValueError::new(format_args!(
            "boolean flags don't take a value (got {token:?})"
        )))
    }
}

impl<T> Parameter for Option<T>
where
    T: Value + 'static,
{
    const KIND: ValueKind = ValueKind::Optional;

    #[inline]
    fn add_value(&mut self, token: &str) -> Result<(), ValueError> {
        T::from_token(token).map(|value| {
            *self = Some(value);
        })
    }
}

macro_rules! collections {
    ($($type:ident .$insert:ident),+ $(,)?) => {
        $(
            impl<T> Parameter for $type<T>
            where
                T: Value + 'static,
            {
                const KIND: ValueKind = ValueKind::Repeated;

                #[inline]
                fn add_value(&mut self, token: &str) -> Result<(), ValueError> {
                    T::from_token(token).map(|value| {
                        self.$insert(value);
                    })
                }
            }
        )+
    }
}

collections! {
    Vec.push,
    VecDeque.push_back,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn scalars_overwrite() {
        let mut port = 3_u16;
        port.add_value("8080").unwrap();
        assert_eq!(port, 8080);
        port.add_value("8090").unwrap();
        assert_eq!(port, 8090);
    }

    #[test]
    fn scalars_reject_trailing_text() {
        let mut count = 1_i32;
        assert!(count.add_value("12abc").is_err());
        assert!(count.add_value("").is_err());
        assert_eq!(count, 1);
    }

    #[test]
    fn char_needs_one_character() {
        let mut sep = ',';
        sep.add_value(".").unwrap();
        assert_eq!(sep, '.');
        assert!(sep.add_value("xx").is_err());
        assert!(sep.add_value("").is_err());
        assert_eq!(sep, '.');
    }

    #[test]
    fn strings_keep_whitespace() {
        let mut path = PathBuf::new();
        path.add_value("/home/some user").unwrap();
        assert_eq!(path, PathBuf::from("/home/some user"));

        let mut text = String::new();
        text.add_value("1 2").unwrap();
        assert_eq!(text, "1 2");
    }

    #[test]
    fn boolean_is_present() {
        let mut verbose = false;
        verbose.present();
        assert!(verbose);
        assert!(verbose.add_value("true").is_err());
    }

    #[test]
    fn optional_keeps_previous_on_failure() {
        let mut drink: Option<u8> = None;
        assert!(drink.add_value("wine").is_err());
        assert_eq!(drink, None);

        drink.add_value("3").unwrap();
        assert!(drink.add_value("wine").is_err());
        assert_eq!(drink, Some(3));
    }

    #[test]
    fn repeated_skips_failures() {
        let mut sizes: Vec<u32> = Vec::new();
        sizes.add_value("1").unwrap();
        assert!(sizes.add_value("two").is_err());
        sizes.add_value("3").unwrap();
        assert_eq!(sizes, [1, 3]);

        let mut queue: VecDeque<String> = VecDeque::new();
        queue.add_value("a").unwrap();
        queue.add_value("b").unwrap();
        assert_eq!(queue, ["a", "b"]);
    }

    #[test]
    fn kinds() {
        assert_eq!(<bool as Parameter>::KIND, ValueKind::Boolean);
        assert_eq!(<f64 as Parameter>::KIND, ValueKind::Scalar);
        assert_eq!(<Option<String> as Parameter>::KIND, ValueKind::Optional);
        assert_eq!(<Vec<char> as Parameter>::KIND, ValueKind::Repeated);
        assert!(!ValueKind::Boolean.takes_value());
        assert!(ValueKind::Repeated.takes_value());
    }
}
