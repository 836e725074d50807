use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct PostEventRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub date: String,
    pub details: Option<String>,
}

#[serde_as]
#[derive(Deserialize, ToSchema)]
pub struct PutEventRequest {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub date: String,
    pub details: Option<String>,
}

#[serde_as]
#[derive(Deserialize, ToSchema)]
pub struct DeleteEventRequest {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub id: Option<i32>,
}

#[cfg(test)]
mod test {
    use super::{PostEventRequest, PutEventRequest};

    #[test]
    fn test_deserialize_put() {
        // Arrange
        let numeric = r#"{"id": 3, "name": "Hack Day", "type": "Hackathon", "date": "2024-05-01"}"#;
        let textual = r#"{"id": "3", "name": "Hack Day"}"#;

        // Act
        let numeric = serde_json::from_str::<PutEventRequest>(numeric).unwrap();
        let textual = serde_json::from_str::<PutEventRequest>(textual).unwrap();

        // Assert
        assert_eq!(numeric.id, Some(3));
        assert_eq!(numeric.event_type, "Hackathon");
        assert_eq!(numeric.details, None);
        assert_eq!(textual.id, Some(3));
        assert_eq!(textual.date, "");
    }

    #[test]
    fn test_deserialize_post_without_fields() {
        let request = serde_json::from_str::<PostEventRequest>("{}").unwrap();

        assert!(request.name.is_empty());
        assert!(request.event_type.is_empty());
    }
}
