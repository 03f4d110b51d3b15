//! Impl block generation for the Loremize trait.
//!
//! This module generates the `impl Loremize for Type` blocks that are
//! emitted by the derive macro.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Generics};

use crate::ir::{FieldIR, FieldMode, RecordIR};

/// Generates the impl block for the Loremize trait.
#[derive(Debug, Default)]
pub struct ImplBlockGenerator;

impl ImplBlockGenerator {
    /// Create a new ImplBlockGenerator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete impl block for a record.
    ///
    /// The impl walks the fields in declaration order, handing each one to
    /// the engine together with its descriptor.
    pub fn generate(&self, record: &RecordIR) -> TokenStream {
        let name = &record.ident;
        let krate = &record.krate;
        let generics = self.generate_generics(record);
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let descriptors = record.fields.iter().map(|field| self.generate_descriptor(record, field));
        let body = self.generate_body(record);

        quote! {
            #[automatically_derived]
            impl #impl_generics #krate::Loremize for #name #ty_generics #where_clause {
                fn loremize(
                    &mut self,
                    filler: &mut #krate::Filler<'_>,
                    _tag: &str,
                ) -> ::core::result::Result<(), #krate::FillError> {
                    filler.record(|filler| {
                        #body
                        ::core::result::Result::Ok(())
                    })
                }

                fn shape() -> #krate::Shape {
                    #krate::Shape::Record
                }

                fn fields() -> &'static [#krate::FieldDescriptor] {
                    const FIELDS: &[#krate::FieldDescriptor] = &[#(#descriptors),*];
                    FIELDS
                }
            }
        }
    }

    /// Generate the statements run inside `Filler::record`.
    fn generate_body(&self, record: &RecordIR) -> TokenStream {
        let krate = &record.krate;
        let calls: Vec<TokenStream> = record
            .populated_fields()
            .map(|(index, field)| {
                let member = &field.member;
                match field.mode {
                    FieldMode::Flatten => {
                        quote! { filler.embedded(&mut self.#member, &fields[#index])?; }
                    }
                    _ => quote! { filler.field(&mut self.#member, &fields[#index])?; },
                }
            })
            .collect();

        if calls.is_empty() {
            return quote! { let _ = filler; };
        }

        quote! {
            let fields = <Self as #krate::Loremize>::fields();
            #(#calls)*
        }
    }

    /// Generate one `FieldDescriptor` constant expression.
    fn generate_descriptor(&self, record: &RecordIR, field: &FieldIR) -> TokenStream {
        let krate = &record.krate;
        let name = field.name();
        let type_name = &field.type_name;
        let tag = &field.tag;

        match field.mode {
            FieldMode::Flatten => quote! { #krate::FieldDescriptor::embedded(#name, #type_name) },
            _ => quote! { #krate::FieldDescriptor::new(#name, #type_name, #tag) },
        }
    }

    /// Add a `FieldType: Loremize` predicate for every populated field whose
    /// type mentions a type parameter.
    fn generate_generics(&self, record: &RecordIR) -> Generics {
        let krate = &record.krate;
        let mut generics = record.generics.clone();
        let bounded: Vec<_> = record.fields.iter().filter(|f| f.needs_bound()).collect();
        if !bounded.is_empty() {
            let where_clause = generics.make_where_clause();
            for field in bounded {
                let ty = &field.ty;
                where_clause.predicates.push(parse_quote!(#ty: #krate::Loremize));
            }
        }
        generics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::struct_parser::StructParser;
    use syn::DeriveInput;

    fn generate(input: DeriveInput) -> String {
        let record = StructParser::parse(&input).unwrap();
        ImplBlockGenerator::new().generate(&record).to_string()
    }

    #[test]
    fn test_generate_named_struct() {
        let code = generate(parse_quote! {
            struct User {
                age: i8,
                #[lorem(tag = "word,3,5")]
                name: String,
                #[lorem(tag = "-")]
                skip: String,
            }
        });

        assert!(code.contains("impl :: lorem_fill :: Loremize for User"));
        assert!(code.contains("filler . record (| filler | {"));
        assert!(code.contains("filler . field (& mut self . age , & fields [0usize]) ?"));
        assert!(code.contains("filler . field (& mut self . name , & fields [1usize]) ?"));
        assert!(!code.contains("self . skip"));
        assert!(code.contains(
            ":: lorem_fill :: FieldDescriptor :: new (\"skip\" , \"String\" , \"-\")"
        ));
        assert!(code.contains(":: lorem_fill :: Shape :: Record"));
    }

    #[test]
    fn test_generate_tuple_struct() {
        let code = generate(parse_quote! {
            struct Pair(String, u16);
        });
        assert!(code.contains("& mut self . 0"));
        assert!(code.contains("& mut self . 1"));
        assert!(code.contains("FieldDescriptor :: new (\"1\" , \"u16\" , \"\")"));
    }

    #[test]
    fn test_generate_unit_struct() {
        let code = generate(parse_quote! {
            struct Marker;
        });
        assert!(code.contains("filler . record (| filler |"));
        assert!(code.contains("let _ = filler ;"));
        assert!(code.contains("& [] ;"));
    }

    #[test]
    fn test_generate_flatten() {
        let code = generate(parse_quote! {
            struct Post {
                #[lorem(flatten)]
                base: Base,
            }
        });
        assert!(code.contains("filler . embedded (& mut self . base , & fields [0usize]) ?"));
        assert!(code.contains("FieldDescriptor :: embedded (\"base\" , \"Base\")"));
    }

    #[test]
    fn test_generate_custom_crate_path() {
        let code = generate(parse_quote! {
            #[lorem(crate = "crate::fill")]
            struct User { name: String }
        });
        assert!(code.contains("impl crate :: fill :: Loremize for User"));
        assert!(!code.contains("lorem_fill"));
    }

    #[test]
    fn test_generate_generic_bounds() {
        let code = generate(parse_quote! {
            struct Page<T: Clone> {
                items: Vec<T>,
                #[lorem(skip)]
                marker: Option<T>,
                total: u32,
            }
        });
        assert!(code.contains("impl < T : Clone > :: lorem_fill :: Loremize for Page < T >"));
        assert!(code.contains("where Vec < T > : :: lorem_fill :: Loremize"));
        assert!(!code.contains("Option < T > : :: lorem_fill :: Loremize"));
        assert!(!code.contains("u32 : :: lorem_fill :: Loremize"));
    }
}
