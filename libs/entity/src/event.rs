#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub event_type: String,
    /// ISO-like text, compared lexically.
    pub date: String,
    pub details: String,
}

impl Event {
    /// Name of the first required field that is empty. Whitespace counts
    /// as a value, the same rule student credentials follow.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("type", &self.event_type),
            ("date", &self.date),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
    }
}
