//! Identifier newtypes for cities, shops, and orders.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Raw numeric value.
            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

id_type!(
    /// Identity of a city in the network.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_dispatch::models::CityId;
    ///
    /// let c = CityId(7);
    /// assert_eq!(c.get(), 7);
    /// assert_eq!(c.to_string(), "city#7");
    /// ```
    CityId,
    "city#"
);

id_type!(
    /// Identity of a shop. Every shop resides in exactly one city.
    ShopId,
    "shop#"
);

id_type!(
    /// Identity of a buyer's order.
    OrderId,
    "order#"
);
