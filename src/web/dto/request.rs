//! Request DTOs for Web API.

use std::str::FromStr;

use serde::Deserialize;
use validator::Validate;

use super::validation::{board_url, no_control_chars, not_empty_trimmed};
use crate::board::{BoardKind, NewBoard, NewPost};
use crate::table::{Sort, SortDirection, TableQuery};
use crate::user::{UserStatus, UserUpdate};
use crate::web::error::ApiError;

/// Query string of every list endpoint.
///
/// `?search=kim&sort=name&order=desc&page=2`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Search term.
    #[serde(default)]
    pub search: Option<String>,
    /// Column to sort by.
    #[serde(default)]
    pub sort: Option<String>,
    /// Sort direction (`asc` or `desc`). Ignored without `sort`.
    #[serde(default)]
    pub order: Option<String>,
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<usize>,
}

impl ListQuery {
    /// Convert into a table query over columns of type `F`.
    pub fn to_table_query<F>(&self) -> Result<TableQuery<F>, ApiError>
    where
        F: FromStr<Err = String>,
    {
        let sort = match self.sort.as_deref().filter(|s| !s.is_empty()) {
            Some(name) => {
                let field = F::from_str(name).map_err(ApiError::bad_request)?;
                let direction = match self.order.as_deref() {
                    Some(order) => SortDirection::from_str(order).map_err(ApiError::bad_request)?,
                    None => SortDirection::Asc,
                };
                Some(Sort { field, direction })
            }
            None => None,
        };

        Ok(TableQuery {
            search: self.search.clone().unwrap_or_default(),
            sort,
            page: self.page.unwrap_or(1),
        })
    }
}

/// Board creation request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBoardRequest {
    /// Board title.
    #[validate(
        length(max = 100, message = "Title is too long"),
        custom(function = "not_empty_trimmed"),
        custom(function = "no_control_chars")
    )]
    pub title: String,
    /// URL slug.
    #[validate(custom(function = "board_url"))]
    pub url: String,
    /// Board kind.
    #[serde(default)]
    pub kind: BoardKind,
    /// Creator name (defaults to "admin").
    #[serde(default)]
    #[validate(length(min = 1, max = 20))]
    pub author: Option<String>,
}

impl CreateBoardRequest {
    /// Convert into catalog input.
    pub fn into_new_board(self) -> NewBoard {
        let board = NewBoard::new(self.title, self.url).with_kind(self.kind);
        match self.author {
            Some(author) => board.with_author(author),
            None => board,
        }
    }
}

/// Post creation request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// Post title.
    #[validate(
        length(max = 100, message = "Title is too long"),
        custom(function = "not_empty_trimmed"),
        custom(function = "no_control_chars")
    )]
    pub title: String,
    /// Author name.
    #[validate(
        length(max = 20, message = "Author name is too long"),
        custom(function = "not_empty_trimmed")
    )]
    pub author: String,
    /// Post body.
    #[validate(
        length(max = 10000, message = "Content is too long"),
        custom(function = "not_empty_trimmed"),
        custom(function = "no_control_chars")
    )]
    pub content: String,
}

impl From<CreatePostRequest> for NewPost {
    fn from(req: CreatePostRequest) -> Self {
        NewPost::new(req.title, req.author, req.content)
    }
}

/// User edit request. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New display name.
    #[validate(length(min = 1, max = 20))]
    pub name: Option<String>,
    /// New email address.
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    /// New phone number.
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    /// New status.
    pub status: Option<UserStatus>,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(req: UpdateUserRequest) -> Self {
        UserUpdate {
            name: req.name,
            email: req.email,
            phone: req.phone,
            status: req.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardField;
    use crate::user::UserField;

    #[test]
    fn test_list_query_defaults() {
        let query: TableQuery<BoardField> = ListQuery::default().to_table_query().unwrap();
        assert_eq!(query.search, "");
        assert_eq!(query.page, 1);
        assert!(query.sort.is_none());
    }

    #[test]
    fn test_list_query_with_sort() {
        let list = ListQuery {
            search: Some("kim".to_string()),
            sort: Some("email".to_string()),
            order: Some("desc".to_string()),
            page: Some(3),
        };
        let query: TableQuery<UserField> = list.to_table_query().unwrap();
        assert_eq!(query.search, "kim");
        assert_eq!(query.sort, Some(Sort::desc(UserField::Email)));
        assert_eq!(query.page, 3);
    }

    #[test]
    fn test_list_query_order_without_sort_is_ignored() {
        let list = ListQuery {
            order: Some("desc".to_string()),
            ..Default::default()
        };
        let query: TableQuery<UserField> = list.to_table_query().unwrap();
        assert!(query.sort.is_none());
    }

    #[test]
    fn test_list_query_unknown_field() {
        let list = ListQuery {
            sort: Some("password".to_string()),
            ..Default::default()
        };
        assert!(list.to_table_query::<UserField>().is_err());
    }

    #[test]
    fn test_list_query_unknown_order() {
        let list = ListQuery {
            sort: Some("id".to_string()),
            order: Some("sideways".to_string()),
            ..Default::default()
        };
        assert!(list.to_table_query::<UserField>().is_err());
    }

    #[test]
    fn test_create_board_request_validation() {
        let valid = CreateBoardRequest {
            title: "Free board".to_string(),
            url: "my-board_2".to_string(),
            kind: BoardKind::General,
            author: None,
        };
        assert!(valid.validate().is_ok());

        let invalid = CreateBoardRequest {
            title: "Free board".to_string(),
            url: "my board!".to_string(),
            kind: BoardKind::General,
            author: None,
        };
        let errors = invalid.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_create_board_request_into_new_board() {
        let req = CreateBoardRequest {
            title: "Gallery".to_string(),
            url: "gallery".to_string(),
            kind: BoardKind::Gallery,
            author: Some("Writer 9".to_string()),
        };
        let board = req.into_new_board();
        assert_eq!(board.kind, BoardKind::Gallery);
        assert_eq!(board.author, "Writer 9");
    }

    #[test]
    fn test_create_post_request_validation() {
        let req = CreatePostRequest {
            title: "   ".to_string(),
            author: "Writer 1".to_string(),
            content: "body".to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_update_user_request_validation() {
        let req = UpdateUserRequest {
            email: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(req.validate().is_err());

        let req = UpdateUserRequest {
            email: Some("user1@example.com".to_string()),
            status: Some(UserStatus::Pending),
            ..Default::default()
        };
        assert!(req.validate().is_ok());

        let update: UserUpdate = req.into();
        assert_eq!(update.status, Some(UserStatus::Pending));
    }
}
