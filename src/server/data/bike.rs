use serde_json::json;

use crate::{
    model::bike::{BikeDetailDto, BikeDto},
    server::{data::graphql::GraphqlClient, error::Error, model::context::RequestContext},
};

pub const GET_BIKES: &str = r#"
query GetBikes($user_id: uuid!) {
  bike(where: { user_id: { _eq: $user_id } }) {
    id
    name
    strava_bike
    discipline {
      abbr
      name
    }
  }
}
"#;

pub const GET_BIKE: &str = r#"
query GetBike($user_id: uuid!, $bike_id: uuid!) {
  bike(where: { id: { _eq: $bike_id }, user_id: { _eq: $user_id } }) {
    id
    name
    strava_bike
    manufacturer_id
    discipline {
      name
    }
  }
}
"#;

pub struct BikeRepository<'a> {
    graphql: &'a GraphqlClient,
}

impl<'a> BikeRepository<'a> {
    /// Creates a new instance of [`BikeRepository`]
    pub fn new(graphql: &'a GraphqlClient) -> Self {
        Self { graphql }
    }

    /// Bikes owned by the user in `ctx`
    pub async fn get_owned_bikes(&self, ctx: &RequestContext) -> Result<Vec<BikeDto>, Error> {
        self.graphql
            .request(ctx, GET_BIKES, json!({ "user_id": ctx.user_id }), "bike")
            .await
    }

    /// Bike `bike_id` if it is owned by the user in `ctx`, as a list of zero or one bikes
    pub async fn get_owned_bike(
        &self,
        ctx: &RequestContext,
        bike_id: &str,
    ) -> Result<Vec<BikeDetailDto>, Error> {
        self.graphql
            .request(
                ctx,
                GET_BIKE,
                json!({ "user_id": ctx.user_id, "bike_id": bike_id }),
                "bike",
            )
            .await
    }
}
