//! # Terminal Wizardry
//!
//! Support crate for the headless terminal engine: the cell/grapheme
//! model, escape sequence codec, and graphics/hyperlink data types.
//! This crate has no opinion about where bytes come from or where
//! rendered output goes; it only gives escape sequences and terminal
//! cells semantic meaning.
//!
//! Included functionality:
//!
//! * `Surface` models a terminal display and its component `Cell`s.
//! * Terminal attributes are aware of modern features such as
//!   True Color, [Hyperlinks](https://gist.github.com/egmontkob/eb114294efbcd5adb1944c9f3cb5feda),
//!   and sixel/iTerm/Kitty style terminal graphics display.
//! * `Surface`s include a log of `Change`s and an API for consuming
//!   and applying deltas.  This is a powerful building block for
//!   synchronizing screen instances.
//! * Escape sequence parser decodes inscrutable escape sequences
//!   and gives them semantic meaning, making the code that uses
//!   them clearer.  The decoded escapes can be re-encoded, allowing
//!   applications to start with the semantic meaning and emit
//!   the appropriate escape sequence without embedding obscure
//!   binary bytes.
//!
//! ## Features
//!
//! * `use_serde` - makes a number of structs serde serializable
//! * `use_image` - pulls in `image` decoding support for Kitty/iTerm graphics

mod emoji;
mod emoji_presentation;

pub mod cell;
pub mod cellcluster;
pub mod color;
pub mod error;
pub mod escape;
pub mod hyperlink;
pub mod image;
pub mod input;
mod macros;
pub mod surface;

pub use error::{Context, Error, Result};
