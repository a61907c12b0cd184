use serde::{Deserialize, Serialize};

// Body returned by mutating endpoints
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CustomResponse{
    pub status: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>
}

impl CustomResponse {
    pub fn created(description: impl Into<String>, id: i32) -> Self{
        Self{
            status: "created".to_string(),
            description: description.into(),
            id: Some(id)
        }
    }

    pub fn ok(description: impl Into<String>) -> Self{
        Self{
            status: "ok".to_string(),
            description: description.into(),
            id: None
        }
    }
}
