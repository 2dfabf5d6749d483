//! Attribute groups: the building block of the SLA schema.
//!
//! Almost every SLA element is a flat bag of named scalar attributes. Each
//! bag is declared once with [`attribute_group!`], which produces a struct
//! with one `Option<String>` field per known attribute plus an `extra` map
//! for attributes the schema does not name. Values are kept verbatim: a
//! number stays the exact text the host application wrote.

use indexmap::IndexMap;

use super::element::Element;

/// Attribute name to value, in document order.
pub type Attributes = IndexMap<String, String>;

/// Behaviour shared by every declared attribute group.
pub trait AttributeGroup: Default {
    /// Declared attribute names, in output order.
    const NAMES: &'static [&'static str];

    /// Build the group, moving undeclared attributes into `extra`.
    fn from_attributes(attributes: Attributes) -> Self;

    /// Declared attributes that are present, followed by `extra`.
    fn to_attributes(&self) -> Attributes;

    /// Look up an attribute by its markup name.
    fn get(&self, name: &str) -> Option<&str>;

    /// Storage slot of a declared attribute.
    fn slot_mut(&mut self, name: &str) -> Option<&mut Option<String>>;

    /// Undeclared attributes.
    fn extra_mut(&mut self) -> &mut Attributes;

    /// Set an attribute by its markup name, declared or not.
    fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.slot_mut(name) {
            Some(slot) => *slot = Some(value),
            None => {
                self.extra_mut().insert(name.to_string(), value);
            },
        }
    }

    /// Remove an attribute by its markup name, returning its old value.
    fn remove(&mut self, name: &str) -> Option<String> {
        match self.slot_mut(name) {
            Some(slot) => slot.take(),
            None => self.extra_mut().shift_remove(name),
        }
    }
}

/// Convert an attribute-only element into a group.
///
/// Elements that unexpectedly carry children or text are handed back so the
/// caller can keep them verbatim.
pub(crate) fn take_leaf<A: AttributeGroup>(element: Element) -> Result<A, Element> {
    if element.is_attribute_only() {
        Ok(A::from_attributes(element.into_attributes()))
    } else {
        Err(element)
    }
}

/// Push `element` onto `leaves` as a group, or onto `unknown` if it is not
/// attribute-only.
pub(crate) fn push_leaf<A: AttributeGroup>(
    element: Element,
    leaves: &mut Vec<A>,
    unknown: &mut Vec<Element>,
) {
    match take_leaf(element) {
        Ok(leaf) => leaves.push(leaf),
        Err(element) => unknown.push(element),
    }
}

/// Render a group as an attribute-only element named `tag`.
pub(crate) fn leaf_element<A: AttributeGroup>(tag: &str, group: &A) -> Element {
    Element::with_attributes(tag, group.to_attributes())
}

/// Declare an attribute group.
///
/// ```ignore
/// attribute_group! {
///     /// A color swatch
///     pub struct Color = "COLOR" {
///         name => "NAME",
///         cmyk => "CMYK",
///     }
/// }
/// ```
///
/// The optional `= "TAG"` adds an associated `TAG` constant for groups that
/// are complete elements on their own.
macro_rules! attribute_group {
    (
        $(#[$meta:meta])*
        pub struct $name:ident $(= $tag:literal)? {
            $( $(#[$fmeta:meta])* $field:ident => $xml:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: Option<String>, )*
            /// Attributes without a declared field, in document order.
            pub extra: $crate::sla::attrs::Attributes,
        }

        $(
            impl $name {
                /// Element name in SLA markup.
                pub const TAG: &'static str = $tag;
            }
        )?

        impl $crate::sla::attrs::AttributeGroup for $name {
            const NAMES: &'static [&'static str] = &[$($xml),*];

            fn from_attributes(mut attributes: $crate::sla::attrs::Attributes) -> Self {
                Self {
                    $( $field: attributes.shift_remove($xml), )*
                    extra: attributes,
                }
            }

            fn to_attributes(&self) -> $crate::sla::attrs::Attributes {
                let mut attributes = $crate::sla::attrs::Attributes::with_capacity(
                    Self::NAMES.len() + self.extra.len(),
                );
                $(
                    if let Some(value) = &self.$field {
                        attributes.insert($xml.to_string(), value.clone());
                    }
                )*
                for (key, value) in &self.extra {
                    attributes.insert(key.clone(), value.clone());
                }
                attributes
            }

            fn get(&self, name: &str) -> Option<&str> {
                match name {
                    $( $xml => self.$field.as_deref(), )*
                    _ => self.extra.get(name).map(String::as_str),
                }
            }

            fn slot_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
                match name {
                    $( $xml => Some(&mut self.$field), )*
                    _ => None,
                }
            }

            fn extra_mut(&mut self) -> &mut $crate::sla::attrs::Attributes {
                &mut self.extra
            }
        }
    };
}

pub(crate) use attribute_group;
