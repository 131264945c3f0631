//! Integer literal parsing
//!
//! Accepts `42`, `0x2A`, `42usize` and `-1`, keeping the span of each literal
//! so that diagnostics point at the offending token.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    spanned::Spanned,
    Expr, ExprLit, ExprUnary, Lit, UnOp,
};

/// An integer literal, possibly negated.
pub struct IntLit {
    pub value: u128,
    pub negative: bool,
    pub span: Span,
}

impl IntLit {
    /// The literal as it was written, for error messages.
    pub fn display(&self) -> String {
        if self.negative {
            format!("-{}", self.value)
        } else {
            self.value.to_string()
        }
    }
}

impl Parse for IntLit {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let expr: Expr = input.parse()?;
        let span = expr.span();
        match expr {
            Expr::Lit(ExprLit { lit: Lit::Int(lit), .. }) => {
                // Tokens built outside the compiler may carry the sign inside
                // the literal itself.
                match lit.base10_digits().strip_prefix('-') {
                    Some(digits) => Ok(IntLit {
                        value: digits
                            .parse()
                            .map_err(|_| syn::Error::new(span, "integer literal out of range"))?,
                        negative: true,
                        span,
                    }),
                    None => Ok(IntLit {
                        value: lit.base10_parse()?,
                        negative: false,
                        span,
                    }),
                }
            }
            Expr::Unary(ExprUnary { op: UnOp::Neg(_), expr, .. }) => match *expr {
                Expr::Lit(ExprLit { lit: Lit::Int(lit), .. }) => Ok(IntLit {
                    value: lit.base10_parse()?,
                    negative: true,
                    span,
                }),
                other => Err(syn::Error::new_spanned(other, "expected an integer literal")),
            },
            other => Err(syn::Error::new_spanned(other, "expected an integer literal")),
        }
    }
}
