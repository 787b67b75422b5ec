//! Accessor generators for the builder structs.
//!
//! Every queryable attribute list exposes the same family of operations: read as a
//! slice, test for presence, replace, append by value, and append in place.

/// Generates the accessor family for one or more list fields.
///
/// Each entry reads `getter @ field.path: Item => set, add, push, has;`. The field
/// path may reach into a composed struct (`value.name`).
macro_rules! list_accessors {
    ($(
        $getter:ident @ $($path:ident).+ : $item:ty => $set:ident, $add:ident, $push:ident, $has:ident;
    )+) => {
        $(
            #[doc = concat!("Returns the `", stringify!($getter), "` entries in insertion order.")]
            pub fn $getter(&self) -> &[$item] {
                &self.$($path).+
            }

            #[doc = concat!("Returns true when at least one `", stringify!($getter), "` entry is present.")]
            pub fn $has(&self) -> bool {
                !self.$($path).+.is_empty()
            }

            #[doc = concat!("Replaces the `", stringify!($getter), "` entries.")]
            #[must_use]
            pub fn $set(mut self, items: Vec<$item>) -> Self {
                self.$($path).+ = items;
                self
            }

            #[doc = concat!("Appends one `", stringify!($getter), "` entry.")]
            #[must_use]
            pub fn $add(mut self, item: impl Into<$item>) -> Self {
                self.$($path).+.push(item.into());
                self
            }

            #[doc = concat!("Appends one `", stringify!($getter), "` entry in place.")]
            pub fn $push(&mut self, item: impl Into<$item>) -> &mut Self {
                self.$($path).+.push(item.into());
                self
            }
        )+
    };
}

/// Generates `logic()` and `with_logic()` for a struct with an optional logic field.
macro_rules! logic_accessors {
    ($($path:ident).+) => {
        /// Returns the combinator attached to this node, if any.
        pub fn logic(&self) -> Option<$crate::vocabulary::Logic> {
            self.$($path).+
        }

        /// Attaches a combinator to this node.
        #[must_use]
        pub fn with_logic(mut self, logic: $crate::vocabulary::Logic) -> Self {
            self.$($path).+ = Some(logic);
            self
        }
    };
}
