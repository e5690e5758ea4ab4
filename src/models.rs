//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Account role, lowercase on the wire and in storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// The role a user flips to when an admin toggles them
    pub fn toggled(self) -> Role {
        match self {
            Role::User => Role::Admin,
            Role::Admin => Role::User,
        }
    }
}

/// Profile of the signed-in account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Everything the client knows about the signed-in account.
/// Token, role and user are set and cleared together, never separately.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub user: User,
}

/// User object inside a login/signup/google response
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
}

impl AuthUser {
    pub fn into_parts(self) -> (Role, User) {
        (
            self.role,
            User {
                name: self.name,
                email: self.email,
            },
        )
    }
}

/// Response of the credential endpoints. A missing token means the backend
/// rejected the attempt even if the HTTP status was 2xx.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
    #[serde(default)]
    pub message: String,
}

/// Todo item (matches backend). `selected` is the UI bulk-selection flag
/// and never travels over the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TodoItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, alias = "isCompleted")]
    pub completed: bool,
    #[serde(skip)]
    pub selected: bool,
}

/// User row in the admin console
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
}

/// Author reference populated on older feedback rows
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedbackAuthor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Feedback row in the admin console. Older rows carry the author under
/// `userId` and the text under `suggestion`, newer ones inline both.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedbackEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, rename = "userId")]
    pub user: Option<FeedbackAuthor>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub suggestion: Option<String>,
}

impl FeedbackEntry {
    pub fn author_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.name.as_str())
            .filter(|n| !n.is_empty())
            .or(self.name.as_deref())
            .filter(|n| !n.is_empty())
            .unwrap_or("Anonymous")
    }

    pub fn author_email(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.email.as_str())
            .filter(|e| !e.is_empty())
            .or(self.email.as_deref())
            .filter(|e| !e.is_empty())
            .unwrap_or("No email")
    }

    pub fn text(&self) -> &str {
        self.suggestion
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(self.feedback.as_deref())
            .filter(|t| !t.is_empty())
            .unwrap_or("No feedback")
    }
}

/// Dashboard counters returned by the admin stats endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminStats {
    pub total_users: u64,
    pub total_admins: u64,
    pub total_feedbacks: u64,
    pub avg_rating: f64,
}

impl AdminStats {
    /// Rating label shown on the dashboard card
    pub fn avg_rating_label(&self) -> String {
        if self.avg_rating > 0.0 {
            format!("{:.1} ⭐", self.avg_rating)
        } else {
            "0 ⭐".to_string()
        }
    }
}

// ========================
// Response Envelopes
// ========================

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TodosResponse {
    #[serde(default)]
    pub todos: Vec<TodoItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TodoResponse {
    pub todo: TodoItem,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbacksResponse {
    #[serde(default)]
    pub feedbacks: Vec<FeedbackEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_lowercase() {
        let admin: Role = serde_json::from_str("\"admin\"").expect("admin role");
        assert_eq!(admin, Role::Admin);
        assert_eq!(serde_json::to_string(&Role::User).expect("serialize"), "\"user\"");
    }

    #[test]
    fn role_toggles_between_user_and_admin() {
        assert_eq!(Role::User.toggled(), Role::Admin);
        assert_eq!(Role::Admin.toggled(), Role::User);
    }

    #[test]
    fn todo_accepts_both_completed_spellings() {
        let with_alias: TodoItem =
            serde_json::from_str(r#"{"_id":"a1","title":"Buy milk","isCompleted":true}"#)
                .expect("alias spelling");
        assert!(with_alias.completed);
        assert!(!with_alias.selected);

        let canonical: TodoItem =
            serde_json::from_str(r#"{"_id":"a2","title":"Walk dog","completed":false}"#)
                .expect("canonical spelling");
        assert!(!canonical.completed);
    }

    #[test]
    fn todo_defaults_completed_when_absent() {
        let todo: TodoItem =
            serde_json::from_str(r#"{"_id":"a3","title":"Water plants"}"#).expect("todo");
        assert!(!todo.completed);
    }

    #[test]
    fn login_response_decodes_token_and_role() {
        let body = r#"{"token":"t1","user":{"name":"Ada","email":"a@b.com","role":"user"}}"#;
        let res: AuthResponse = serde_json::from_str(body).expect("auth response");
        assert_eq!(res.token.as_deref(), Some("t1"));
        let (role, user) = res.user.expect("user present").into_parts();
        assert_eq!(role, Role::User);
        assert_eq!(user.email, "a@b.com");
    }

    #[test]
    fn login_response_without_token_keeps_message() {
        let body = r#"{"message":"Invalid credentials"}"#;
        let res: AuthResponse = serde_json::from_str(body).expect("auth response");
        assert!(res.token.is_none());
        assert_eq!(res.message, "Invalid credentials");
    }

    #[test]
    fn feedback_prefers_populated_author_then_inline_fields() {
        let populated: FeedbackEntry = serde_json::from_str(
            r#"{"_id":"f1","userId":{"name":"Ada","email":"a@b.com"},"rating":4,"suggestion":"More filters"}"#,
        )
        .expect("populated row");
        assert_eq!(populated.author_name(), "Ada");
        assert_eq!(populated.author_email(), "a@b.com");
        assert_eq!(populated.text(), "More filters");

        let inline: FeedbackEntry = serde_json::from_str(
            r#"{"_id":"f2","name":"Bob","email":"b@c.com","rating":5,"feedback":"Love it"}"#,
        )
        .expect("inline row");
        assert_eq!(inline.author_name(), "Bob");
        assert_eq!(inline.text(), "Love it");

        let bare: FeedbackEntry = serde_json::from_str(r#"{"_id":"f3"}"#).expect("bare row");
        assert_eq!(bare.author_name(), "Anonymous");
        assert_eq!(bare.author_email(), "No email");
        assert_eq!(bare.text(), "No feedback");
    }

    #[test]
    fn stats_decode_camel_case_and_default_missing_fields() {
        let stats: AdminStats =
            serde_json::from_str(r#"{"totalUsers":12,"totalAdmins":2,"avgRating":4.5}"#)
                .expect("stats");
        assert_eq!(stats.total_users, 12);
        assert_eq!(stats.total_admins, 2);
        assert_eq!(stats.total_feedbacks, 0);
        assert_eq!(stats.avg_rating_label(), "4.5 ⭐");
        assert_eq!(AdminStats::default().avg_rating_label(), "0 ⭐");
    }

    #[test]
    fn todos_envelope_defaults_to_empty_list() {
        let res: TodosResponse = serde_json::from_str("{}").expect("envelope");
        assert!(res.todos.is_empty());
    }
}
