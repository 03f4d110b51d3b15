//! Rendering field types for runtime error messages.

use proc_macro2::{Delimiter, TokenStream, TokenTree};
use quote::ToTokens;
use syn::{Ident, Type};

/// Render `ty` the way it is usually written: `Option<Vec<String>>`,
/// `[u8; 4]`, `&'static str`.
pub fn render(ty: &Type) -> String {
    let mut out = String::new();
    render_tokens(ty.to_token_stream(), &mut out);
    out
}

fn render_tokens(tokens: TokenStream, out: &mut String) {
    let mut after_word = false;
    for token in tokens {
        match token {
            TokenTree::Ident(ident) => {
                push_word(out, &ident.to_string(), after_word);
                after_word = true;
            }
            TokenTree::Literal(literal) => {
                push_word(out, &literal.to_string(), after_word);
                after_word = true;
            }
            TokenTree::Punct(punct) => {
                match punct.as_char() {
                    ',' | ';' => {
                        out.push(punct.as_char());
                        out.push(' ');
                    }
                    '+' => out.push_str(" + "),
                    c => out.push(c),
                }
                after_word = false;
            }
            TokenTree::Group(group) => {
                let (open, close) = match group.delimiter() {
                    Delimiter::Parenthesis => ("(", ")"),
                    Delimiter::Bracket => ("[", "]"),
                    Delimiter::Brace => ("{", "}"),
                    Delimiter::None => ("", ""),
                };
                out.push_str(open);
                render_tokens(group.stream(), out);
                out.push_str(close);
                after_word = false;
            }
        }
    }
}

fn push_word(out: &mut String, word: &str, after_word: bool) {
    if after_word {
        out.push(' ');
    }
    out.push_str(word);
}

/// Whether `ty` mentions any of `params` anywhere in its tokens.
pub fn mentions_any(ty: &Type, params: &[Ident]) -> bool {
    !params.is_empty() && tokens_mention(ty.to_token_stream(), params)
}

fn tokens_mention(tokens: TokenStream, params: &[Ident]) -> bool {
    tokens.into_iter().any(|token| match token {
        TokenTree::Ident(ident) => params.contains(&ident),
        TokenTree::Group(group) => tokens_mention(group.stream(), params),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_render_common_types() {
        let cases: [(Type, &str); 8] = [
            (parse_quote!(String), "String"),
            (parse_quote!(Option<Vec<String>>), "Option<Vec<String>>"),
            (parse_quote!(HashMap<String, u32>), "HashMap<String, u32>"),
            (parse_quote!([u8; 4]), "[u8; 4]"),
            (parse_quote!((i32, bool)), "(i32, bool)"),
            (parse_quote!(&'static str), "&'static str"),
            (parse_quote!(std::marker::PhantomData<T>), "std::marker::PhantomData<T>"),
            (parse_quote!(Box<dyn Error + Send>), "Box<dyn Error + Send>"),
        ];
        for (ty, expected) in cases {
            assert_eq!(render(&ty), expected);
        }
    }

    #[test]
    fn test_mentions_any() {
        let params: Vec<Ident> = vec![parse_quote!(T)];
        assert!(mentions_any(&parse_quote!(T), &params));
        assert!(mentions_any(&parse_quote!(Vec<Option<T>>), &params));
        assert!(mentions_any(&parse_quote!([T; 3]), &params));
        assert!(!mentions_any(&parse_quote!(Tree), &params));
        assert!(!mentions_any(&parse_quote!(String), &[]));
    }
}
