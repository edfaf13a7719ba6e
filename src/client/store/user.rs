use crate::model::user::UserDto;

/// Signed in user shared through context
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Set once the user request finished, whatever its outcome
    pub fetched: bool,
}

impl UserState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
