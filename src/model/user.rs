use serde::{Deserialize, Serialize};

/// The authenticated user as seen by the client
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    /// User ID issued by the session provider (token `sub` claim)
    pub id: String,
}
