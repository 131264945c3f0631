//! `bitset!` literal
//!
//! `bitset![capacity; e0, e1, ...]` validates every element against the
//! capacity at compile time and packs the storage blocks into constants.

use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Token,
};

use crate::common::IntLit;

const BITS_PER_BLOCK: u128 = 64;

// =============================================================================
// Input Parser
// =============================================================================

pub struct BitSetInput {
    pub capacity: IntLit,
    pub elements: Vec<IntLit>,
}

impl Parse for BitSetInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let capacity: IntLit = input.parse()?;
        let mut elements = Vec::new();
        if input.parse::<Option<Token![;]>>()?.is_some() {
            let list = Punctuated::<IntLit, Token![,]>::parse_terminated(input)?;
            elements.extend(list);
        }
        Ok(BitSetInput { capacity, elements })
    }
}

// =============================================================================
// Validation
// =============================================================================

fn check_capacity(capacity: &IntLit) -> syn::Result<usize> {
    if capacity.negative || capacity.value == 0 {
        return Err(syn::Error::new(
            capacity.span,
            format!(
                "invalid bit set capacity `{}`\n\
                 \n\
                 The capacity is the exclusive upper bound on elements and must be greater than zero.",
                capacity.display()
            ),
        ));
    }
    usize::try_from(capacity.value).map_err(|_| {
        syn::Error::new(capacity.span, format!("capacity `{}` does not fit in usize", capacity.value))
    })
}

fn check_element(element: &IntLit, capacity: usize, seen: &mut Vec<u128>) -> syn::Result<()> {
    if element.negative && element.value != 0 {
        return Err(syn::Error::new(
            element.span,
            format!("element `{}` is negative; bit sets hold non-negative integers only", element.display()),
        ));
    }
    if element.value >= capacity as u128 {
        return Err(syn::Error::new(
            element.span,
            format!("element `{}` is out of range for capacity {}", element.value, capacity),
        ));
    }
    if seen.contains(&element.value) {
        return Err(syn::Error::new(
            element.span,
            format!(
                "duplicate element `{}`\n\
                 \n\
                 Each element should appear only once in a bit set literal.",
                element.value
            ),
        ));
    }
    seen.push(element.value);
    Ok(())
}

// =============================================================================
// Expansion
// =============================================================================

/// Pack validated elements into blocks, dropping trailing zero blocks.
fn pack_blocks(elements: &[IntLit]) -> Vec<u64> {
    let mut blocks: Vec<u64> = Vec::new();
    for element in elements {
        let block = (element.value / BITS_PER_BLOCK) as usize;
        if blocks.len() <= block {
            blocks.resize(block + 1, 0);
        }
        blocks[block] |= 1u64 << (element.value % BITS_PER_BLOCK);
    }
    blocks
}

pub fn expand_bitset(input: BitSetInput) -> syn::Result<TokenStream2> {
    let capacity = check_capacity(&input.capacity)?;

    let mut seen = Vec::with_capacity(input.elements.len());
    for element in &input.elements {
        check_element(element, capacity, &mut seen)?;
    }

    let capacity = Literal::usize_suffixed(capacity);
    let blocks = pack_blocks(&input.elements)
        .into_iter()
        .map(Literal::u64_suffixed);

    Ok(quote! {
        ::bitset_algebra::BitSet::__from_verified_blocks(#capacity, &[#(#blocks),*])
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(input: &str) -> syn::Result<TokenStream2> {
        expand_bitset(syn::parse_str::<BitSetInput>(input)?)
    }

    fn error_of(input: &str) -> String {
        match expand_str(input) {
            Ok(tokens) => panic!("`{}` expanded to `{}`", input, tokens),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let msg = error_of("0");
        assert!(msg.starts_with("invalid bit set capacity `0`"), "{}", msg);
        assert!(msg.contains("must be greater than zero"), "{}", msg);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(error_of("8; 8"), "element `8` is out of range for capacity 8");
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(
            error_of("8; -1"),
            "element `-1` is negative; bit sets hold non-negative integers only"
        );
    }

    #[test]
    fn test_duplicate_rejected() {
        let msg = error_of("8; 3, 3");
        assert!(msg.starts_with("duplicate element `3`"), "{}", msg);
    }

    #[test]
    fn test_non_literal_rejected() {
        assert!(syn::parse_str::<BitSetInput>("8; x").is_err());
    }

    #[test]
    fn test_blocks_packed() {
        let input = syn::parse_str::<BitSetInput>("200; 0, 63, 64, 199").unwrap();
        assert_eq!(
            pack_blocks(&input.elements),
            vec![1 | (1 << 63), 1, 0, 1 << 7]
        );

        let tokens = expand_str("200; 0, 63, 64, 199").unwrap().to_string();
        assert!(tokens.contains("__from_verified_blocks"), "{}", tokens);
        assert!(tokens.contains("200usize"), "{}", tokens);
        assert!(tokens.contains("9223372036854775809u64"), "{}", tokens);
        assert!(tokens.contains("128u64"), "{}", tokens);
    }

    #[test]
    fn test_trailing_zero_blocks_dropped() {
        let input = syn::parse_str::<BitSetInput>("1000; 3").unwrap();
        assert_eq!(pack_blocks(&input.elements), vec![8]);
        let empty = syn::parse_str::<BitSetInput>("1000").unwrap();
        assert!(pack_blocks(&empty.elements).is_empty());
    }
}
