//! # CLI Templates
//!
//! Output is rendered from minijinja templates kept as stand-alone `.tmp` files and
//! embedded here as string constants.
//!
//! The environment runs with `trim_blocks`, `lstrip_blocks` and
//! `keep_trailing_newline`, so a template's line breaks are exactly the ones written
//! outside block tags. Views that need a blank line before or after them carry it
//! themselves; the terminal writes rendered text verbatim.
//!
//! Layout math (padding, truncation) stays in Rust and reaches templates as
//! ready-made strings.

pub const BANNER_TEMPLATE: &str = include_str!("templates/banner.tmp");
pub const TRAIL_TEMPLATE: &str = include_str!("templates/trail.tmp");
pub const NOTICE_TEMPLATE: &str = include_str!("templates/notice.tmp");
pub const CARD_HEADER_TEMPLATE: &str = include_str!("templates/card_header.tmp");
pub const READING_TEMPLATE: &str = include_str!("templates/reading.tmp");
pub const FAREWELL_TEMPLATE: &str = include_str!("templates/farewell.tmp");
pub const CARD_LIST_TEMPLATE: &str = include_str!("templates/card_list.tmp");
pub const MENU_TEMPLATE: &str = include_str!("templates/menu.tmp");
pub const QUESTION_TEMPLATE: &str = include_str!("templates/question.tmp");
