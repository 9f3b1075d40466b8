use crate::*;
use matches::debug_assert_matches;
use pest::iterators::Pair;

/// Parses a numeric literal.
///
/// Literals are read as `u32` and narrowed, so oversized values wrap to
/// 16 bits.
pub fn process_int(pair: Pair<Rule>) -> Result<u16> {
    debug_assert_matches!(pair.as_rule(), Rule::int);

    let inner = pair.into_inner().next().unwrap();
    let wide = match inner.as_rule() {
        Rule::hex_int => process_num_lit(inner.into_inner().next().unwrap(), 16)?,
        Rule::dec_int => process_num_lit(inner, 10)?,
        _ => unreachable!(),
    };

    Ok(wide as u16)
}

/// Shift amounts occupy a single byte in the encoding.
pub fn process_shift_amount(pair: Pair<Rule>) -> Result<u8> {
    Ok((process_int(pair)? & 0xFF) as u8)
}

fn process_num_lit(pair: Pair<Rule>, radix: u32) -> Result<u32> {
    let span = pair.as_span();
    u32::from_str_radix(span.as_str(), radix)
        .map_err(|err| new_parser_error(span, format!("Parsing integer failed: {}", err)))
}
