use crate::{
    model::bike::{BikeDetailDto, BikeDto},
    server::{
        cache::{bike_path, PageCache, HOME_PATH},
        data::{bike::BikeRepository, graphql::GraphqlClient},
        error::Error,
        model::context::RequestContext,
    },
};

pub struct BikeService<'a> {
    graphql: &'a GraphqlClient,
    cache: &'a PageCache,
}

impl<'a> BikeService<'a> {
    /// Creates a new instance of [`BikeService`]
    pub fn new(graphql: &'a GraphqlClient, cache: &'a PageCache) -> Self {
        Self { graphql, cache }
    }

    /// Bikes of the session user, memoized for the home page
    pub async fn get_owned_bikes(&self, ctx: &RequestContext) -> Result<Vec<BikeDto>, Error> {
        let bike_repo = BikeRepository::new(self.graphql);

        self.cache
            .get_or_fetch(&ctx.user_id, HOME_PATH, || bike_repo.get_owned_bikes(ctx))
            .await
    }

    /// Bike `bike_id` as a list of zero or one bikes, memoized for the bike page
    pub async fn get_owned_bike(
        &self,
        ctx: &RequestContext,
        bike_id: &str,
    ) -> Result<Vec<BikeDetailDto>, Error> {
        let bike_repo = BikeRepository::new(self.graphql);

        self.cache
            .get_or_fetch(&ctx.user_id, &bike_path(bike_id), || {
                bike_repo.get_owned_bike(ctx, bike_id)
            })
            .await
    }
}
