use crate::*;
use matches::debug_assert_matches;
use pest::iterators::Pair;
use std::collections::HashMap;

/// Symbol table of the assembler, keyed by uppercased label name.
pub type LabelMap = HashMap<String, u16>;

/// Longest accepted label name.
pub const MAX_LABEL_LENGTH: usize = 63;

pub fn define(labels: &mut LabelMap, pair: Pair<Rule>, address: u16) -> Result<()> {
    debug_assert_matches!(pair.as_rule(), Rule::label);

    let span = pair.into_inner().next().unwrap().as_span();
    let name = span.as_str();

    if name.len() > MAX_LABEL_LENGTH {
        return Err(new_parser_error(
            span,
            format!("Label name exceeds {} characters", MAX_LABEL_LENGTH),
        ));
    }

    let key = name.to_uppercase();
    if labels.contains_key(&key) {
        return Err(new_parser_error(span, "Label is already defined".to_owned()));
    }

    labels.insert(key, address);
    Ok(())
}

pub fn lookup(labels: &LabelMap, span: &Span) -> Result<u16> {
    labels
        .get(&span.as_str().to_uppercase())
        .copied()
        .ok_or_else(|| new_parser_error(span.clone(), "Label was not found".to_owned()))
}
