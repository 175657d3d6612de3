//! # Collections
//!
//! - **`token_list`**: `TokenList<T>`, an arena-backed doubly-linked list with
//!   ownership-checked node handles. The emphasis resolver keeps both its text
//!   fragments and its delimiter stack in one of these.

pub mod token_list;

pub use token_list::{Iter, NodeId, TokenList, TokenListError};
