//! Argument constructors — typed identity computations.
//!
//! Each constructor is [`identity`] pinned to one primitive type. They
//! carry no behavior of their own; they exist so a composition chain can
//! start from a named argument type instead of a turbofish.
//!
//! ```
//! use funq::args;
//!
//! let greeting = args::string().map(|name| format!("hello, {name}"));
//! assert_eq!(greeting.invoke("world".into()).unwrap(), "hello, world");
//! ```

use crate::computation::{Computation, identity};
use crate::object::Object;

/// Identity computation over any argument type.
pub fn arg_of<T: 'static>() -> Computation<T, T> {
    identity()
}

macro_rules! arg_constructor {
    ($(#[$attr:meta])* $name:ident, $ty:ty, $doc:literal) => {
        $(#[$attr])*
        #[doc = concat!("Identity computation over ", $doc, ".")]
        pub fn $name() -> Computation<$ty, $ty> {
            arg_of::<$ty>()
        }
    };
}

arg_constructor!(object, Object, "a type-erased [`Object`]");
arg_constructor!(byte, u8, "an unsigned byte");
arg_constructor!(int16, i16, "a 16-bit signed integer");
arg_constructor!(int32, i32, "a 32-bit signed integer");
arg_constructor!(int64, i64, "a 64-bit signed integer");
arg_constructor!(float32, f32, "a 32-bit float");
arg_constructor!(float64, f64, "a 64-bit float");
arg_constructor!(string, String, "owned text");
arg_constructor!(
    #[cfg(feature = "uuid")]
    uuid,
    uuid::Uuid,
    "a unique identifier"
);
arg_constructor!(
    #[cfg(feature = "chrono")]
    date_time,
    chrono::DateTime<chrono::Utc>,
    "a UTC date-time instant"
);
arg_constructor!(
    #[cfg(feature = "chrono")]
    date_time_offset,
    chrono::DateTime<chrono::FixedOffset>,
    "a date-time with a fixed UTC offset"
);
arg_constructor!(
    #[cfg(feature = "chrono")]
    duration,
    chrono::TimeDelta,
    "a signed duration"
);
arg_constructor!(
    #[cfg(feature = "url")]
    uri,
    url::Url,
    "a URI"
);
