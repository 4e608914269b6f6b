//! Closed card attribute enumerations.
//!
//! Every categorical card property is a fixed enumeration, so membership
//! checks in filters and groupings in stats are exhaustive matches rather
//! than string lookups.
//!
//! | Enum | Values |
//! |---|---|
//! | `CardType` | Agent, Item, Order, Facility |
//! | `CardSuit` | Charm, Combat, Search, Stealth, System, Transport |
//! | `CardSubtype` | Animal, Business, Crime, Gadget, Law, Military, Politics, Press, Science, Vehicle |
//! | `CardTrigger` | Ambush, Complete, Flip, Payoff, None |
//!
//! All of them serialize as their display name and parse case-insensitively.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;

macro_rules! card_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal { $($variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Display name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(s))
                    .ok_or_else(|| ConfigError::UnknownValue {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

card_enum! {
    /// Card type. Every card has exactly one.
    CardType, "card type" { Agent, Item, Order, Facility }
}

card_enum! {
    /// Thematic suit. A card belongs to one or two.
    CardSuit, "suit" { Charm, Combat, Search, Stealth, System, Transport }
}

card_enum! {
    /// Subtype keyword. A card has any number, including none.
    CardSubtype, "subtype" {
        Animal, Business, Crime, Gadget, Law, Military, Politics, Press, Science, Vehicle,
    }
}

card_enum! {
    /// Timing keyword governing when a card's effect resolves.
    CardTrigger, "trigger" { Ambush, Complete, Flip, Payoff, None }
}
