//! Coercion of loosely typed GraphQL arguments into domain requests.

use async_graphql::{MaybeUndefined, ID};

use crate::domain::{UserId, UserUpdateForm};
use crate::error::ResolverError;

pub const INVALID_USER_ID: &str = "invalid user ID";

/// Parses an `ID` token as a non-negative base-10 integer.
///
/// Signs, whitespace, empty tokens and values that overflow `u64` are rejected.
pub fn parse_user_id(token: Option<&str>) -> Result<UserId, ResolverError> {
    let invalid = || ResolverError::InvalidArgument(INVALID_USER_ID.to_string());

    let token = token.ok_or_else(invalid)?;
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    token.parse::<UserId>().map_err(|_| invalid())
}

/// Raw `updateUser` arguments as received from the caller.
#[derive(Debug, Default)]
pub struct UpdateUserArgs {
    pub uid: Option<ID>,
    pub enabled: MaybeUndefined<bool>,
    pub plan: MaybeUndefined<String>,
}

impl UpdateUserArgs {
    /// Builds the partial update. Omitted arguments stay unset; an explicit
    /// `null` is treated the same as an omitted one.
    pub fn into_form(self) -> Result<UserUpdateForm, ResolverError> {
        let id = parse_user_id(self.uid.as_deref().map(String::as_str))?;
        Ok(UserUpdateForm {
            id,
            enabled: self.enabled.take(),
            plan: self.plan.take(),
        })
    }
}
