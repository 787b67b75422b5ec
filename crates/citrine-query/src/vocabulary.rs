//! Closed vocabularies used as leaves throughout query and result documents.
//!
//! Every vocabulary parses case-insensitively and soft-fails: [`Vocabulary::parse`]
//! returns `None` for names it does not know. The strict [`FromStr`](std::str::FromStr)
//! implementation exists for callers (such as the CLI) that want an error message.

use thiserror::Error;

/// Error returned by the strict `FromStr` implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}', expected one of: {expected}")]
pub struct VocabularyError {
    /// Vocabulary name, e.g. `Logic`.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma-separated canonical names.
    pub expected: String,
}

impl VocabularyError {
    /// Builds an error for an unrecognized name in vocabulary `V`.
    pub fn unknown<V: Vocabulary>(value: &str) -> Self {
        let expected: Vec<&str> = V::ALL.iter().map(|v| v.as_str()).collect();
        Self {
            kind: V::KIND,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

/// A closed set of named values with a canonical wire spelling.
pub trait Vocabulary: Sized + Copy + 'static {
    /// Human-readable vocabulary name used in error messages.
    const KIND: &'static str;

    /// Every declared value, in declaration order.
    const ALL: &'static [Self];

    /// Returns the canonical wire name.
    fn as_str(self) -> &'static str;

    /// Looks up a value by name, ignoring case.
    ///
    /// Unrecognized names yield `None`; this never panics.
    fn parse(name: &str) -> Option<Self> {
        let lowered = name.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str().to_lowercase() == lowered)
    }
}

/// Declares a vocabulary enum together with its `Vocabulary`, `Display`,
/// `FromStr`, `Serialize` and `Deserialize` implementations.
///
/// Deserialization is case-insensitive and rejects unknown names; wrap fields in
/// [`wire::lenient`](crate::wire::lenient) to soft-fail instead.
#[macro_export]
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::vocabulary::Vocabulary for $name {
            const KIND: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::vocabulary::Vocabulary::as_str(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::vocabulary::VocabularyError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::vocabulary::Vocabulary>::parse(s)
                    .ok_or_else(|| $crate::vocabulary::VocabularyError::unknown::<Self>(s))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str($crate::vocabulary::Vocabulary::as_str(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let name = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                name.parse::<Self>().map_err(::serde::de::Error::custom)
            }
        }
    };
}

vocabulary! {
    /// Boolean combinator controlling how a node combines with its siblings.
    ///
    /// When a node carries no logic the remote engine applies its own default; the
    /// client never substitutes one.
    pub enum Logic {
        /// The node must match.
        Must => "MUST",
        /// Matching the node contributes to the score.
        Should => "SHOULD",
        /// The node is extracted if present but never filters.
        Optional => "OPTIONAL",
        /// The node must not match.
        MustNot => "MUST_NOT",
    }
}

vocabulary! {
    /// Ordering applied to extracted values.
    pub enum Sort {
        /// Smallest first.
        Ascending => "ASCENDING",
        /// Largest first.
        Descending => "DESCENDING",
    }
}

vocabulary! {
    /// Basis of composition amounts. Serialized exactly as declared.
    pub enum Units {
        /// Atomic percent (0-100).
        AtomicPercent => "atomicPercent",
        /// Weight percent (0-100).
        WeightPercent => "weightPercent",
        /// Atomic fraction (0-1).
        AtomicFraction => "atomicFraction",
        /// Weight fraction (0-1).
        WeightFraction => "weightFraction",
    }
}

vocabulary! {
    /// How categorical values are matched when bucketing.
    pub enum MatchType {
        /// Literal value.
        Exact => "EXACT",
        /// Shared prefix.
        Prefix => "PREFIX",
        /// Case- and accent-folded value.
        Fuzzy => "FUZZY",
    }
}

vocabulary! {
    /// Which occurrences of a repeated field are visited during analysis.
    pub enum TraversalMode {
        /// Every occurrence.
        All => "ALL",
        /// The first occurrence only.
        First => "FIRST",
        /// The last occurrence only.
        Last => "LAST",
    }
}
