/// Default chunk budget in bytes, kept under the 256 KB SNS message limit.
pub const DEFAULT_CHUNK_SIZE: usize = 250 * 1024;

/// Splits `message` into consecutive pieces of at most `chunk_size` bytes.
///
/// Concatenating the result yields `message` again. Boundaries are moved back
/// to the nearest char boundary, so a chunk is only longer than `chunk_size`
/// when a single character is wider than the budget. A zero budget is treated
/// as one byte.
pub fn split_message(message: &str, chunk_size: usize) -> Vec<&str> {
    let chunk_size = chunk_size.max(1);
    let mut chunks = Vec::with_capacity(message.len().div_ceil(chunk_size));
    let mut start = 0;

    while start < message.len() {
        let mut end = (start + chunk_size).min(message.len());
        while !message.is_char_boundary(end) {
            end -= 1;
        }

        // budget 比單一字元還窄，至少前進一個字元
        if end == start {
            end = start
                + message[start..]
                    .chars()
                    .next()
                    .map(char::len_utf8)
                    .unwrap_or(1);
        }

        chunks.push(&message[start..end]);
        start = end;
    }

    chunks
}
