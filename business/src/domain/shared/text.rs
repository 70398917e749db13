/// Cuts `value` down to at most `max_chars` characters.
///
/// Counts Unicode scalar values, so multi-byte text is never split
/// in the middle of a character.
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((byte_index, _)) => value[..byte_index].to_string(),
        None => value.to_string(),
    }
}
