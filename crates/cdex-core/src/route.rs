//! Client-side routes
//!
//! Two paths are routed:
//! - `/` shows the character list
//! - `/character/:id` shows the detail panel for `:id`
//!
//! Anything else parses to [`Route::Unmatched`], which renders no routed view.

use std::fmt;

use thiserror::Error;

use crate::types::CharacterId;

/// Path of the list route
pub const ROOT_PATH: &str = "/";

/// Prefix of the detail route
pub const CHARACTER_PATH_PREFIX: &str = "/character/";

/// Failure to parse the `:id` segment of a detail path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("character id is empty")]
    EmptyId,

    #[error("character id '{0}' is not an integer")]
    NotAnInteger(String),
}

/// A parsed navigation path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    /// `/`
    #[default]
    List,
    /// `/character/:id`; the id is kept as typed so a malformed segment stays
    /// distinguishable from an absent character
    Detail { segment: String },
    /// Any other path
    Unmatched(String),
}

impl Route {
    /// Parse a path such as `/character/2`
    ///
    /// A single trailing slash is tolerated.
    pub fn parse(path: &str) -> Route {
        let trimmed = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };

        if trimmed == ROOT_PATH || trimmed.is_empty() {
            return Route::List;
        }

        match trimmed.strip_prefix(CHARACTER_PATH_PREFIX) {
            Some(segment) if !segment.contains('/') => Route::Detail {
                segment: segment.to_string(),
            },
            _ => Route::Unmatched(path.to_string()),
        }
    }

    /// Detail route for a known id
    pub fn character(id: CharacterId) -> Route {
        Route::Detail {
            segment: id.to_string(),
        }
    }

    /// The requested id, for detail routes
    pub fn character_id(&self) -> Option<Result<CharacterId, RouteError>> {
        match self {
            Route::Detail { segment } => Some(parse_character_id(segment)),
            _ => None,
        }
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, Route::Detail { .. })
    }

    /// Render back to a path
    pub fn path(&self) -> String {
        match self {
            Route::List => ROOT_PATH.to_string(),
            Route::Detail { segment } => format!("{}{}", CHARACTER_PATH_PREFIX, segment),
            Route::Unmatched(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Parse the `:id` route segment into a [`CharacterId`]
///
/// Parsing is strict: the whole segment must be a non-negative integer.
pub fn parse_character_id(segment: &str) -> Result<CharacterId, RouteError> {
    if segment.is_empty() {
        return Err(RouteError::EmptyId);
    }
    segment
        .parse::<u32>()
        .map(CharacterId)
        .map_err(|_| RouteError::NotAnInteger(segment.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root() {
        assert_eq!(Route::parse("/"), Route::List);
        assert_eq!(Route::parse(""), Route::List);
    }

    #[test]
    fn test_parse_detail() {
        let route = Route::parse("/character/2");
        assert!(route.is_detail());
        assert_eq!(route.character_id(), Some(Ok(CharacterId(2))));
    }

    #[test]
    fn test_parse_detail_trailing_slash() {
        assert_eq!(
            Route::parse("/character/7/"),
            Route::Detail {
                segment: "7".to_string()
            }
        );
    }

    #[test]
    fn test_parse_unmatched() {
        assert_eq!(
            Route::parse("/episodes"),
            Route::Unmatched("/episodes".to_string())
        );
        assert!(matches!(
            Route::parse("/character/1/extra"),
            Route::Unmatched(_)
        ));
    }

    #[test]
    fn test_malformed_id_distinct_from_valid_id() {
        let malformed = Route::parse("/character/abc");
        assert_eq!(
            malformed.character_id(),
            Some(Err(RouteError::NotAnInteger("abc".to_string())))
        );

        let valid = Route::parse("/character/999");
        assert_eq!(valid.character_id(), Some(Ok(CharacterId(999))));
    }

    #[test]
    fn test_parse_character_id_strict() {
        assert_eq!(parse_character_id("42"), Ok(CharacterId(42)));
        assert_eq!(parse_character_id(""), Err(RouteError::EmptyId));
        assert!(parse_character_id("-1").is_err());
        assert!(parse_character_id("2abc").is_err());
    }

    #[test]
    fn test_route_path_roundtrip() {
        let route = Route::character(CharacterId(5));
        assert_eq!(route.path(), "/character/5");
        assert_eq!(Route::parse(&route.path()), route);
        assert_eq!(Route::List.to_string(), "/");
    }

    #[test]
    fn test_list_route_has_no_id() {
        assert_eq!(Route::List.character_id(), None);
    }
}
