//! Declared types and inherited email address flags.

use propmark_tests::prelude::*;

struct Contact;
struct Person;
struct Employee;

impl Annotatable for Contact {
    fn properties() -> &'static [&'static str] {
        &["email", "phone"]
    }
}

impl Annotatable for Person {
    fn parent() -> Option<TypeKey> {
        Some(TypeKey::of::<Contact>())
    }
}

impl Annotatable for Employee {
    fn properties() -> &'static [&'static str] {
        &["email", "work_email", "phone"]
    }

    fn parent() -> Option<TypeKey> {
        Some(TypeKey::of::<Person>())
    }
}

fn setup() {
    init_tracing();
    register::<Contact>().unwrap();
    register::<Person>().unwrap();
    register::<Employee>().unwrap();
    email_address().apply::<Contact>("email").unwrap();
    email_address().apply::<Employee>("work_email").unwrap();
}

#[test]
fn test_flag_inherited_through_chain() {
    setup();

    assert!(email_address_of::<Person>("email"));
    assert!(email_address_of::<Employee>("email"));
    assert!(!email_address_of::<Employee>("phone"));
}

#[test]
fn test_subtype_flag_not_visible_on_parent() {
    setup();

    assert!(email_address_of::<Employee>("work_email"));
    assert!(!email_address_of::<Person>("work_email"));
    assert!(!email_address_of::<Contact>("work_email"));
}

#[test]
fn test_listing_includes_inherited() {
    setup();

    assert_eq!(email_address_properties::<Contact>(), vec!["email"]);
    assert_eq!(email_address_properties::<Employee>(), vec!["email", "work_email"]);
}

#[test]
fn test_undeclared_property_rejected() {
    setup();

    let result = email_address().apply::<Contact>("fax");

    assert_eq!(
        result,
        Err(RegistryError::UnknownProperty {
            type_name: TypeKey::of::<Contact>().name().to_string(),
            property: "fax".to_string(),
        })
    );
    assert!(!email_address_of::<Contact>("fax"));
}

#[test]
fn test_unknown_property_reads_false() {
    setup();

    assert!(!email_address_of::<Employee>("no_such_property"));
}

#[test]
fn test_cycle_rejected() {
    setup();
    let decl = TypeDecl::new(TypeKey::of::<Contact>()).with_parent(TypeKey::of::<Employee>());

    let is_subtype = with_global(|registry| {
        registry.is_subtype(TypeKey::of::<Employee>(), TypeKey::of::<Contact>())
    });
    assert!(is_subtype);

    let err = propmark_registry::global()
        .write()
        .unwrap()
        .declare(decl)
        .unwrap_err();
    assert!(matches!(err, RegistryError::InheritanceCycle(_)));
}

mod closed_chain {
    use super::*;

    struct Account;
    struct Partner;

    impl Annotatable for Account {
        fn properties() -> &'static [&'static str] {
            &["billing_email"]
        }
    }

    impl Annotatable for Partner {
        fn properties() -> &'static [&'static str] {
            &["referral_email"]
        }

        fn parent() -> Option<TypeKey> {
            Some(TypeKey::of::<Account>())
        }
    }

    #[test]
    fn test_closed_subtype_marks_inherited_property() {
        init_tracing();

        // GIVEN Partner and Account both listing their own properties
        register::<Account>().unwrap();
        register::<Partner>().unwrap();

        // WHEN marking a property Partner inherits from Account
        email_address().apply::<Partner>("billing_email").unwrap();
        email_address().apply::<Partner>("referral_email").unwrap();

        // THEN it is accepted on Partner only
        assert!(email_address_of::<Partner>("billing_email"));
        assert!(!email_address_of::<Account>("billing_email"));
        assert_eq!(
            email_address_properties::<Partner>(),
            vec!["billing_email", "referral_email"]
        );
    }

    #[test]
    fn test_closed_chain_rejects_unlisted_property() {
        init_tracing();
        register::<Account>().unwrap();
        register::<Partner>().unwrap();

        let result = email_address().apply::<Partner>("fax");

        assert!(matches!(result, Err(RegistryError::UnknownProperty { .. })));
        assert!(!email_address_of::<Partner>("fax"));
    }
}
