use log::Level;

use crate::models::{
    ActionRow, ApplicationPayload, Button, Embed, EmbedField, EmbedThumbnail, LogPayload, Member,
    Message, ReportPayload, User,
};

// Embed colors
pub const APPLICATION_COLOR: u32 = 0x5865F2;
pub const BUG_COLOR: u32 = 0xED4245;
pub const SUGGESTION_COLOR: u32 = 0x57F287;

const ERROR_COLOR: u32 = 0xED4245;
const WARN_COLOR: u32 = 0xFEE75C;
const INFO_COLOR: u32 = 0x5865F2;
const TRACE_COLOR: u32 = 0x95A5A6;

pub enum ReportKind {
    Bug,
    Suggestion,
}

fn or_none(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "None".to_string(),
    }
}

fn field(name: &str, value: String) -> EmbedField {
    EmbedField {
        name: name.to_string(),
        value,
        inline: false,
    }
}

fn avatar_url(user: &User) -> Option<EmbedThumbnail> {
    user.avatar.as_ref().map(|hash| EmbedThumbnail {
        url: format!("https://cdn.discordapp.com/avatars/{}/{}.png", user.id, hash),
    })
}

// Application notice with accept/reject actions tagged by member id.
// An unresolved member degrades to the raw id, no mention or avatar.
pub fn application_notice(
    member: Option<&Member>,
    course_names: &[String],
    payload: &ApplicationPayload,
) -> Message {
    let applicant = match member {
        Some(m) => format!("<@{}>", m.user.id),
        None => payload.member_id.clone(),
    };

    let embed = Embed {
        title: "New Course Application".to_string(),
        description: None,
        color: APPLICATION_COLOR,
        fields: vec![
            field("Applicant", applicant),
            field("Courses", course_names.join(", ")),
            field("Age", payload.age.clone()),
            field(
                "Experience",
                or_none(payload.experience_details.as_deref()),
            ),
            field("Time dedication", payload.time_dedication.clone()),
            field("Notes", or_none(payload.misc.as_deref())),
        ],
        thumbnail: member.and_then(|m| avatar_url(&m.user)),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    let actions = ActionRow::new(vec![
        Button::success(
            "Accept",
            format!("application_accept:{}", payload.member_id),
        ),
        Button::danger(
            "Reject",
            format!("application_reject:{}", payload.member_id),
        ),
    ]);

    Message {
        content: None,
        embeds: vec![embed],
        components: vec![actions],
    }
}

// Bug report / suggestion notice
pub fn report_notice(kind: ReportKind, user: Option<&User>, payload: &ReportPayload) -> Message {
    let (label, color) = match kind {
        ReportKind::Bug => ("Bug Report", BUG_COLOR),
        ReportKind::Suggestion => ("Suggestion", SUGGESTION_COLOR),
    };

    let reporter = match user {
        Some(u) => format!("<@{}>", u.id),
        None => payload.user.clone(),
    };

    let mut fields = vec![field("Reporter", reporter)];
    if let Some(kind) = payload.kind.as_deref() {
        fields.push(field("Category", kind.to_string()));
    }

    let embed = Embed {
        title: format!("{}: {}", label, payload.title),
        description: Some(payload.desc.clone()),
        color,
        fields,
        thumbnail: user.and_then(avatar_url),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    Message {
        content: None,
        embeds: vec![embed],
        components: vec![],
    }
}

pub fn severity_color(level: Level) -> u32 {
    match level {
        Level::Error => ERROR_COLOR,
        Level::Warn => WARN_COLOR,
        Level::Info => INFO_COLOR,
        Level::Debug | Level::Trace => TRACE_COLOR,
    }
}

// Relayed log line as a severity-colored embed
pub fn log_notice(level: Level, payload: &LogPayload) -> Message {
    let data = payload
        .data
        .as_ref()
        .map(|v| serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string()));

    let embed = Embed {
        title: level.to_string().to_uppercase(),
        description: Some(payload.message.clone()),
        color: severity_color(level),
        fields: data
            .map(|d| vec![field("Data", format!("```json\n{}\n```", d))])
            .unwrap_or_default(),
        thumbnail: None,
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    Message {
        content: None,
        embeds: vec![embed],
        components: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ApplicationPayload {
        ApplicationPayload {
            member_id: "123".to_string(),
            courses: vec!["A".to_string()],
            age: "20".to_string(),
            experience_details: None,
            time_dedication: "5h".to_string(),
            misc: None,
        }
    }

    fn member(avatar: Option<&str>) -> Member {
        Member {
            user: User {
                id: "123".to_string(),
                username: "sam".to_string(),
                avatar: avatar.map(|s| s.to_string()),
            },
            nick: None,
            roles: vec![],
        }
    }

    fn field_value<'a>(embed: &'a Embed, name: &str) -> &'a str {
        &embed
            .fields
            .iter()
            .find(|f| f.name == name)
            .unwrap_or_else(|| panic!("missing field {}", name))
            .value
    }

    #[test]
    fn application_carries_mention_and_courses() {
        let msg = application_notice(
            Some(&member(Some("abc"))),
            &["Rust Course".to_string()],
            &payload(),
        );
        let embed = &msg.embeds[0];

        assert_eq!(field_value(embed, "Applicant"), "<@123>");
        assert_eq!(field_value(embed, "Courses"), "Rust Course");
        assert_eq!(field_value(embed, "Age"), "20");
        assert!(embed.thumbnail.is_some());
    }

    #[test]
    fn missing_optionals_render_as_none() {
        let msg = application_notice(Some(&member(None)), &["A".to_string()], &payload());
        let embed = &msg.embeds[0];

        assert_eq!(field_value(embed, "Experience"), "None");
        assert_eq!(field_value(embed, "Notes"), "None");
    }

    #[test]
    fn unresolved_member_has_no_adornment() {
        let msg = application_notice(None, &["A".to_string()], &payload());
        let embed = &msg.embeds[0];

        assert_eq!(field_value(embed, "Applicant"), "123");
        assert!(embed.thumbnail.is_none());
    }

    #[test]
    fn actions_are_tagged_with_the_member_id() {
        let msg = application_notice(Some(&member(None)), &["A".to_string()], &payload());
        let buttons = &msg.components[0].components;

        assert_eq!(buttons[0].custom_id, "application_accept:123");
        assert_eq!(buttons[1].custom_id, "application_reject:123");
    }

    #[test]
    fn bug_report_includes_category() {
        let report = ReportPayload {
            title: "Broken page".to_string(),
            user: "42".to_string(),
            kind: Some("ui".to_string()),
            desc: "it broke".to_string(),
        };
        let msg = report_notice(ReportKind::Bug, None, &report);
        let embed = &msg.embeds[0];

        assert_eq!(embed.title, "Bug Report: Broken page");
        assert_eq!(field_value(embed, "Category"), "ui");
        assert_eq!(field_value(embed, "Reporter"), "42");
        assert_eq!(embed.color, BUG_COLOR);
    }

    #[test]
    fn log_notice_colors_by_severity() {
        let log = LogPayload {
            message: "disk almost full".to_string(),
            data: None,
        };
        let msg = log_notice(Level::Error, &log);
        let embed = &msg.embeds[0];

        assert_eq!(embed.title, "ERROR");
        assert_eq!(embed.color, severity_color(Level::Error));
        assert!(embed.fields.is_empty());
    }
}
