// Common utilities shared by the user-facing macros
//
// This module contains:
// - int_lit: integer literal parsing with span tracking

mod int_lit;

pub use int_lit::*;
