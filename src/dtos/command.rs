use serde::{Deserialize, Serialize};

/// Read-only projection of a stored command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandReadDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub platform: String,
}

/// Fields a caller supplies to create a command. The id comes from the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandCreateDto {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub platform: String,
}

/// Replacement values for an existing command, addressed by an id passed alongside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandUpdateDto {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub platform: String,
}
