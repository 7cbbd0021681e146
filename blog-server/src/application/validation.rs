/// Returns `true` when either required field is missing or blank.
///
/// Only presence is checked: there are no length limits and the text is
/// stored exactly as received. A byte-order mark counts as blank.
pub fn validate_inputs(title: Option<&str>, body: Option<&str>) -> bool {
    fn is_blank(field: Option<&str>) -> bool {
        field.is_none_or(|value| {
            value
                .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
                .is_empty()
        })
    }

    is_blank(title) || is_blank(body)
}
