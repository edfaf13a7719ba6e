use crate::{
    model::manufacturer::ManufacturerDto,
    server::{
        cache::{PageCache, MANUFACTURERS_PATH},
        data::{graphql::GraphqlClient, manufacturer::ManufacturerRepository},
        error::Error,
        model::context::RequestContext,
    },
};

pub struct ManufacturerService<'a> {
    graphql: &'a GraphqlClient,
    cache: &'a PageCache,
}

impl<'a> ManufacturerService<'a> {
    /// Creates a new instance of [`ManufacturerService`]
    pub fn new(graphql: &'a GraphqlClient, cache: &'a PageCache) -> Self {
        Self { graphql, cache }
    }

    pub async fn get_all(&self, ctx: &RequestContext) -> Result<Vec<ManufacturerDto>, Error> {
        let manufacturer_repo = ManufacturerRepository::new(self.graphql);

        self.cache
            .get_or_fetch(&ctx.user_id, MANUFACTURERS_PATH, || {
                manufacturer_repo.get_all(ctx)
            })
            .await
    }
}
