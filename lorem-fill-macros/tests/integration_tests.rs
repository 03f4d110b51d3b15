//! Integration tests for the Loremize derive macro.
//!
//! These tests verify the descriptors and impls the macro generates for
//! various struct definitions.

use std::marker::PhantomData;

use lorem_fill::{FieldDescriptor, Loremize, Shape};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded() -> StdRng {
    StdRng::seed_from_u64(0xF1EE)
}

// =============================================================================
// Basic Struct Tests
// =============================================================================

#[test]
fn test_named_struct_descriptors() {
    #[derive(Default, Loremize)]
    #[allow(dead_code)]
    struct User {
        age: i8,
        #[lorem(tag = "word,3,5")]
        name: String,
        #[lorem(tag = "-")]
        skip: String,
    }

    assert_eq!(User::shape(), Shape::Record);
    assert_eq!(
        User::fields(),
        [
            FieldDescriptor::new("age", "i8", ""),
            FieldDescriptor::new("name", "String", "word,3,5"),
            FieldDescriptor::new("skip", "String", "-"),
        ]
    );
}

#[test]
fn test_tuple_struct_derive() {
    #[derive(Default, Loremize)]
    struct Pair(#[lorem(tag = ",left")] String, u8);

    let names: Vec<&str> = Pair::fields().iter().map(|f| f.name).collect();
    assert_eq!(names, ["0", "1"]);

    let mut pair = Pair::default();
    lorem_fill::fill_with(&mut pair, &mut seeded()).unwrap();
    assert_eq!(pair.0, "left");
}

#[test]
fn test_unit_struct_derive() {
    #[derive(Default, Loremize)]
    struct Marker;

    assert!(Marker::fields().is_empty());
    lorem_fill::fill(&mut Marker).unwrap();
}

#[test]
fn test_raw_identifier_field_name() {
    #[derive(Default, Loremize)]
    struct Token {
        #[lorem(tag = "word,4,4")]
        r#type: String,
    }

    assert_eq!(Token::fields()[0].name, "type");
    let mut token = Token::default();
    lorem_fill::fill(&mut token).unwrap();
    assert_eq!(token.r#type.len(), 4);
}

// =============================================================================
// Field Attribute Tests
// =============================================================================

#[test]
fn test_skip_flag_matches_dash_tag() {
    #[derive(Default, Loremize)]
    struct Row {
        #[lorem(skip)]
        id: u64,
        #[lorem(tag = "-")]
        version: u64,
    }

    assert!(Row::fields().iter().all(FieldDescriptor::is_skipped));

    let mut row = Row { id: 7, version: 3 };
    lorem_fill::fill(&mut row).unwrap();
    assert_eq!((row.id, row.version), (7, 3));
}

#[test]
fn test_skipped_field_needs_no_loremize_impl() {
    #[derive(Default)]
    struct Opaque(u8);

    #[derive(Default, Loremize)]
    struct Holder {
        #[lorem(skip)]
        opaque: Opaque,
        #[lorem(tag = ",set")]
        label: String,
    }

    let mut holder = Holder {
        opaque: Opaque(9),
        ..Default::default()
    };
    lorem_fill::fill(&mut holder).unwrap();
    assert_eq!(holder.opaque.0, 9);
    assert_eq!(holder.label, "set");
}

#[test]
fn test_flatten_descriptor() {
    #[derive(Default, Loremize)]
    struct Audit {
        #[lorem(tag = "word,6,6")]
        created_by: String,
    }

    #[derive(Default, Loremize)]
    struct Invoice {
        #[lorem(flatten)]
        audit: Audit,
        total: u32,
    }

    assert_eq!(
        Invoice::fields()[0],
        FieldDescriptor::embedded("audit", "Audit")
    );

    let mut invoice = Invoice::default();
    lorem_fill::fill_with(&mut invoice, &mut seeded()).unwrap();
    assert_eq!(invoice.audit.created_by.len(), 6);
}

// =============================================================================
// Generic Struct Tests
// =============================================================================

#[test]
fn test_generic_struct() {
    #[derive(Default, Loremize)]
    struct Page<T> {
        #[lorem(tag = "word,5,5")]
        items: Vec<T>,
        total: u32,
    }

    assert_eq!(Page::<String>::fields()[0].type_name, "Vec<T>");

    let mut page = Page::<String>::default();
    lorem_fill::fill_with(&mut page, &mut seeded()).unwrap();
    assert!(page.items.iter().all(|item| item.len() == 5));
}

#[test]
fn test_generic_parameter_only_bound_where_used() {
    // `T` only appears inside `PhantomData`, so it needs no `Loremize` impl.
    #[allow(dead_code)]
    struct NotLoremize;

    #[derive(Loremize)]
    struct Tagged<T> {
        #[lorem(tag = ",fixed")]
        label: String,
        marker: PhantomData<T>,
    }

    let mut tagged = Tagged::<NotLoremize> {
        label: String::new(),
        marker: PhantomData,
    };
    lorem_fill::fill(&mut tagged).unwrap();
    assert_eq!(tagged.label, "fixed");
}

#[test]
fn test_lifetime_parameters() {
    #[derive(Loremize)]
    struct Borrowed<'a> {
        #[lorem(tag = ",x")]
        name: String,
        #[lorem(skip)]
        source: &'a str,
    }

    let mut borrowed = Borrowed {
        name: String::new(),
        source: "kept",
    };
    lorem_fill::fill(&mut borrowed).unwrap();
    assert_eq!(borrowed.name, "x");
    assert_eq!(borrowed.source, "kept");
    assert_eq!(Borrowed::fields()[1].type_name, "&'a str");
}

// =============================================================================
// Container Attribute Tests
// =============================================================================

mod reexport {
    pub use lorem_fill as fill;
}

#[test]
fn test_custom_crate_path() {
    #[derive(Default, reexport::fill::Loremize)]
    #[lorem(crate = "crate::reexport::fill")]
    struct Renamed {
        #[lorem(tag = ",via re-export")]
        value: String,
    }

    let mut renamed = Renamed::default();
    lorem_fill::fill(&mut renamed).unwrap();
    assert_eq!(renamed.value, "via re-export");
}
