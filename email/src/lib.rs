//! Email address property marker.
//!
//! Flags a property of a type as holding an email address, and reads the
//! flag back. Unflagged properties read as `false`.
//!
//! ```
//! use propmark_email::{email_address, email_address_of};
//!
//! struct User;
//!
//! email_address().apply::<User>("email").unwrap();
//!
//! assert!(email_address_of::<User>("email"));
//! assert!(!email_address_of::<User>("name"));
//! ```

use propmark_core::{AnnotationKey, TypeKey};
use propmark_registry::{decorate, decorator_of, decorator_of_val, with_global, Decorator, Registry};

const EMAIL_ADDRESS: AnnotationKey = AnnotationKey::new("email-address");

/// Decorator marking a property as an email address.
pub fn email_address() -> Decorator {
    email_address_with(true)
}

/// Decorator recording an explicit email address flag.
pub fn email_address_with(value: bool) -> Decorator {
    decorate(EMAIL_ADDRESS, value)
}

/// Check whether `property` of `T` is marked as an email address.
pub fn email_address_of<T: ?Sized + 'static>(property: &str) -> bool {
    decorator_of::<T>(property, EMAIL_ADDRESS, false)
        .as_bool()
        .unwrap_or(false)
}

/// Like [`email_address_of`], taking an instance instead of a type.
pub fn email_address_of_val<T: ?Sized + 'static>(target: &T, property: &str) -> bool {
    decorator_of_val(target, property, EMAIL_ADDRESS, false)
        .as_bool()
        .unwrap_or(false)
}

/// Check the flag in an explicit registry.
pub fn email_address_of_in(registry: &Registry, target: TypeKey, property: &str) -> bool {
    registry
        .get(target, property, EMAIL_ADDRESS)
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}

/// Properties of `T` marked as email addresses, sorted by name.
pub fn email_address_properties<T: ?Sized + 'static>() -> Vec<String> {
    with_global(|registry| email_address_properties_in(registry, TypeKey::of::<T>()))
}

/// Like [`email_address_properties`], against an explicit registry.
pub fn email_address_properties_in(registry: &Registry, target: TypeKey) -> Vec<String> {
    registry
        .annotated_properties(target, EMAIL_ADDRESS)
        .into_iter()
        .filter(|(_, value)| value.as_bool() == Some(true))
        .map(|(property, _)| property.to_string())
        .collect()
}
