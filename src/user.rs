//! User model for boardview.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::table::{FieldValue, Record};

/// Account status shown as a tag in the user list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Active account.
    #[default]
    Active,
    /// Waiting for approval.
    Pending,
    /// Deactivated account.
    Inactive,
}

impl UserStatus {
    /// Convert status to its string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Pending => "pending",
            UserStatus::Inactive => "inactive",
        }
    }

    fn rank(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(UserStatus::Active),
            "pending" => Ok(UserStatus::Pending),
            "inactive" => Ok(UserStatus::Inactive),
            _ => Err(format!("unknown user status: {s}")),
        }
    }
}

/// User entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Registration timestamp.
    pub joined_at: DateTime<Utc>,
    /// Last login timestamp.
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
    /// Account status.
    #[serde(default)]
    pub status: UserStatus,
}

/// Columns of a user row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    /// User ID.
    Id,
    /// Display name.
    Name,
    /// Email address.
    Email,
    /// Phone number.
    Phone,
    /// Registration time.
    JoinedAt,
    /// Last login time; users who never logged in sort first.
    LastLoginAt,
    /// Account status, sorted in declaration order.
    Status,
}

impl UserField {
    /// Column name used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Id => "id",
            UserField::Name => "name",
            UserField::Email => "email",
            UserField::Phone => "phone",
            UserField::JoinedAt => "joined_at",
            UserField::LastLoginAt => "last_login_at",
            UserField::Status => "status",
        }
    }
}

impl FromStr for UserField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(UserField::Id),
            "name" => Ok(UserField::Name),
            "email" => Ok(UserField::Email),
            "phone" => Ok(UserField::Phone),
            "joined_at" => Ok(UserField::JoinedAt),
            "last_login_at" => Ok(UserField::LastLoginAt),
            "status" => Ok(UserField::Status),
            _ => Err(format!("unknown user field: {s}")),
        }
    }
}

impl Record for User {
    type Field = UserField;

    fn id(&self) -> i64 {
        self.id
    }

    fn field(&self, field: UserField) -> FieldValue<'_> {
        match field {
            UserField::Id => FieldValue::Number(self.id),
            UserField::Name => FieldValue::Text(&self.name),
            UserField::Email => FieldValue::Text(&self.email),
            UserField::Phone => FieldValue::Text(&self.phone),
            UserField::JoinedAt => FieldValue::Time(self.joined_at),
            // Never-logged-in users sort before everyone else
            UserField::LastLoginAt => match self.last_login_at {
                Some(t) => FieldValue::Time(t),
                None => FieldValue::Time(DateTime::<Utc>::MIN_UTC),
            },
            UserField::Status => FieldValue::Label {
                rank: self.status.rank(),
                name: self.status.as_str(),
            },
        }
    }
}

/// Partial update of a user.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New status.
    pub status: Option<UserStatus>,
}

impl UserUpdate {
    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.status.is_none()
    }

    /// Apply the update to `user`.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            user.phone = phone.clone();
        }
        if let Some(status) = self.status {
            user.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_user() -> User {
        User {
            id: 12,
            name: "User12".to_string(),
            email: "user12@example.com".to_string(),
            phone: "010-1960-2600".to_string(),
            joined_at: Utc.with_ymd_and_hms(2024, 1, 12, 0, 0, 0).unwrap(),
            last_login_at: None,
            status: UserStatus::Active,
        }
    }

    #[test]
    fn test_user_status_round_trip_str() {
        for status in [UserStatus::Active, UserStatus::Pending, UserStatus::Inactive] {
            assert_eq!(UserStatus::from_str(status.as_str()).unwrap(), status);
        }
        assert!(UserStatus::from_str("banned").is_err());
        assert_eq!(format!("{}", UserStatus::Pending), "pending");
    }

    #[test]
    fn test_user_field_from_str() {
        assert_eq!(UserField::from_str("email").unwrap(), UserField::Email);
        assert_eq!(UserField::LastLoginAt.as_str(), "last_login_at");
        assert!(UserField::from_str("password").is_err());
    }

    #[test]
    fn test_missing_last_login_sorts_first() {
        let mut logged_in = sample_user();
        logged_in.last_login_at = Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        let never = sample_user();

        let ordering = never
            .field(UserField::LastLoginAt)
            .compare(&logged_in.field(UserField::LastLoginAt));
        assert_eq!(ordering, std::cmp::Ordering::Less);
    }

    #[test]
    fn test_status_label() {
        let mut user = sample_user();
        user.status = UserStatus::Inactive;
        assert_eq!(
            user.field(UserField::Status),
            FieldValue::Label {
                rank: 2,
                name: "inactive"
            }
        );
    }

    #[test]
    fn test_user_update_apply() {
        let mut user = sample_user();
        let update = UserUpdate {
            email: Some("new@example.com".to_string()),
            status: Some(UserStatus::Pending),
            ..Default::default()
        };
        assert!(!update.is_empty());

        update.apply_to(&mut user);
        assert_eq!(user.email, "new@example.com");
        assert_eq!(user.status, UserStatus::Pending);
        assert_eq!(user.name, "User12");
    }

    #[test]
    fn test_user_update_empty() {
        assert!(UserUpdate::default().is_empty());
    }
}
