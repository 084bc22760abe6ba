// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbValue`]
//! struct. The hex color string must be in the `#RRGGBB` format, eg: `#f57900`. Hex
//! digits are case insensitive.

use nom::{IResult,
          Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, map_res}};

use crate::{RgbValue, TangoError, TangoResult};

/// Parse function that generates an [`RgbValue`] struct from the start of `input`. Any
/// remainder after the 6 hex digits is returned to the caller.
///
/// # Errors
///
/// Returns a [`nom::Err`] if `input` doesn't start with `#` followed by 6 hex digits.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    let (input, _) = tag("#").parse(input)?;
    let (input, (red, green, blue)) =
        (helper_fns::parse_hex_seg, helper_fns::parse_hex_seg, helper_fns::parse_hex_seg)
            .parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

/// Same as [`parse_hex_color`], but the whole of `input` must be consumed, so `#f57900ff`
/// and ` #f57900` are both rejected.
///
/// # Errors
///
/// Returns [`TangoError::InvalidColorFormat`] if `input` is not exactly `#` followed by
/// 6 hex digits.
pub fn try_parse_hex_color_exact(input: &str) -> TangoResult<RgbValue> {
    match all_consuming(parse_hex_color).parse(input) {
        Ok((_, color)) => Ok(color),
        Err(_) => Err(TangoError::invalid_color_format(input)),
    }
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::{IResult, Parser, map_res, take_while_m_n};

    /// This function is used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [`take_while_m_n`] and as long as it returns `true`
    /// items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(2, 2, match_is_hex_digit), parse_str_to_hex_num)
            .parse(input)
    }
}
