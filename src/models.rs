use serde::{Deserialize, Serialize};

// Application form body
#[derive(Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    pub member_id: String,
    pub courses: Vec<String>, // role ids of the requested courses
    pub age: String,
    #[serde(default)]
    pub experience_details: Option<String>,
    pub time_dedication: String,
    #[serde(default)]
    pub misc: Option<String>,
}

// Bug report / suggestion body
#[derive(Deserialize, Clone)]
pub struct ReportPayload {
    pub title: String,
    pub user: String, // chat user id of the reporter
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub desc: String,
}

// Log relay body; severity comes from the path
#[derive(Deserialize, Clone)]
pub struct LogPayload {
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

// ---- chat platform wire types ----

#[derive(Deserialize, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Deserialize, Clone)]
pub struct Member {
    pub user: User,
    #[serde(default)]
    pub nick: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: u32,
}

// Outgoing channel message
#[derive(Serialize, Clone)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub embeds: Vec<Embed>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ActionRow>,
}

#[derive(Serialize, Clone)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedThumbnail>,
    pub timestamp: String,
}

#[derive(Serialize, Clone)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Serialize, Clone)]
pub struct EmbedThumbnail {
    pub url: String,
}

// type 1 = action row
#[derive(Serialize, Clone)]
pub struct ActionRow {
    #[serde(rename = "type")]
    pub kind: u8,
    pub components: Vec<Button>,
}

impl ActionRow {
    pub fn new(components: Vec<Button>) -> Self {
        Self { kind: 1, components }
    }
}

// type 2 = button; style 3 success, 4 danger
#[derive(Serialize, Clone)]
pub struct Button {
    #[serde(rename = "type")]
    pub kind: u8,
    pub style: u8,
    pub label: String,
    pub custom_id: String,
}

impl Button {
    pub fn success(label: &str, custom_id: String) -> Self {
        Self { kind: 2, style: 3, label: label.to_string(), custom_id }
    }

    pub fn danger(label: &str, custom_id: String) -> Self {
        Self { kind: 2, style: 4, label: label.to_string(), custom_id }
    }
}
