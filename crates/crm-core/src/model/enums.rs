//! Closed enumerations the views colour-code on.
//!
//! Parsing is exact for known values; mappers use `from_backend_str` to fall
//! back to a default variant instead of failing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CrmError;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident, kind = $kind:literal {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire/display text for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// Parse a stored value, falling back to the default variant.
            pub fn from_backend_str(value: &str) -> Self {
                value.parse().unwrap_or($name::$default)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CrmError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let trimmed = value.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| {
                        CrmError::InvalidInput(format!("Unknown {}: {}", $kind, value))
                    })
            }
        }
    };
}

string_enum! {
    /// Customer lifecycle status shared by contacts and companies.
    Status, default = Trial, kind = "status" {
        Trial => "trial",
        Active => "active",
        Churned => "churned",
    }
}

string_enum! {
    /// Company industry.
    Industry, default = Other, kind = "industry" {
        Technology => "Technology",
        Healthcare => "Healthcare",
        Finance => "Finance",
        Education => "Education",
        Retail => "Retail",
        Manufacturing => "Manufacturing",
        RealEstate => "Real Estate",
        Consulting => "Consulting",
        Media => "Media",
        Transportation => "Transportation",
        Energy => "Energy",
        Agriculture => "Agriculture",
        Government => "Government",
        NonProfit => "Non-profit",
        Other => "Other",
    }
}

string_enum! {
    /// Company subscription plan.
    SubscriptionPlan, default = Starter, kind = "subscription plan" {
        Starter => "Starter",
        Professional => "Professional",
        Enterprise => "Enterprise",
    }
}

string_enum! {
    /// Kind of logged activity.
    ActivityType, default = Email, kind = "activity type" {
        Email => "email",
        Call => "call",
        Meeting => "meeting",
    }
}

string_enum! {
    /// Direction of a dashboard metric.
    Trend, default = Flat, kind = "trend" {
        Up => "up",
        Down => "down",
        Flat => "flat",
    }
}
