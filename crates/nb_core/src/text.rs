/// Truncate a response body before it enters logs or error payloads,
/// backing off to the nearest char boundary.
pub fn truncate(body: &str, limit: usize) -> &str {
    if body.len() <= limit {
        return body;
    }
    let mut end = limit;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
