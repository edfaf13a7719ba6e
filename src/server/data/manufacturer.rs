use serde_json::json;

use crate::{
    model::manufacturer::ManufacturerDto,
    server::{data::graphql::GraphqlClient, error::Error, model::context::RequestContext},
};

pub const GET_MANUFACTURERS: &str = r#"
query GetManufacturers {
  manufacturer(order_by: { name: asc }) {
    id
    name
  }
}
"#;

pub struct ManufacturerRepository<'a> {
    graphql: &'a GraphqlClient,
}

impl<'a> ManufacturerRepository<'a> {
    /// Creates a new instance of [`ManufacturerRepository`]
    pub fn new(graphql: &'a GraphqlClient) -> Self {
        Self { graphql }
    }

    /// All manufacturers ordered by name
    pub async fn get_all(&self, ctx: &RequestContext) -> Result<Vec<ManufacturerDto>, Error> {
        self.graphql
            .request(ctx, GET_MANUFACTURERS, json!({}), "manufacturer")
            .await
    }
}
