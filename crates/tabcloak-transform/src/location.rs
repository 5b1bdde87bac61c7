/// Combines a record's city and state into one descriptive label.
///
/// Missing values render as empty; the label replaces the separate City and
/// State columns in the output schema.
pub fn location_label(city: Option<&str>, state: Option<&str>) -> String {
    format!(
        "City_{}, State_{}",
        city.unwrap_or(""),
        state.unwrap_or("")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_format() {
        assert_eq!(
            "City_Columbus, State_OH",
            location_label(Some("Columbus"), Some("OH"))
        );
    }

    #[test]
    fn test_missing_values_render_empty() {
        assert_eq!("City_, State_OH", location_label(None, Some("OH")));
    }
}
