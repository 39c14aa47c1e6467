use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}
