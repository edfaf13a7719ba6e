use serde::Deserialize;
use serde_json::json;

use crate::server::{data::graphql::GraphqlClient, error::Error, model::context::RequestContext};

/// Both root fields run in one backend transaction: if the part cannot be deleted the
/// installations stay in place as well.
pub const DELETE_PART: &str = r#"
mutation DeletePart($part_id: uuid!) {
  delete_installation(where: { part_id: { _eq: $part_id } }) {
    affected_rows
  }
  delete_part_by_pk(id: $part_id) {
    id
  }
}
"#;

#[derive(Deserialize)]
struct DeletePartData {
    delete_installation: AffectedRows,
    delete_part_by_pk: Option<DeletedPart>,
}

#[derive(Deserialize)]
struct AffectedRows {
    affected_rows: u64,
}

#[derive(Deserialize)]
struct DeletedPart {
    id: String,
}

/// Outcome of deleting a part together with its installations
#[derive(Clone, Debug, PartialEq)]
pub struct DeletedPartRecord {
    pub part_id: String,
    pub removed_installations: u64,
}

pub struct PartRepository<'a> {
    graphql: &'a GraphqlClient,
}

impl<'a> PartRepository<'a> {
    /// Creates a new instance of [`PartRepository`]
    pub fn new(graphql: &'a GraphqlClient) -> Self {
        Self { graphql }
    }

    /// Deletes every installation of `part_id`, then the part itself
    ///
    /// Returns `Ok(None)` when the part does not exist or is not visible to the user.
    pub async fn delete_with_installations(
        &self,
        ctx: &RequestContext,
        part_id: &str,
    ) -> Result<Option<DeletedPartRecord>, Error> {
        let data: DeletePartData = self
            .graphql
            .request_data(ctx, DELETE_PART, json!({ "part_id": part_id }))
            .await?;

        Ok(data.delete_part_by_pk.map(|part| DeletedPartRecord {
            part_id: part.id,
            removed_installations: data.delete_installation.affected_rows,
        }))
    }
}
