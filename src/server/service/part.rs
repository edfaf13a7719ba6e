use dioxus_logger::tracing;

use crate::server::{
    cache::{PageCache, RevalidateScope, HOME_PATH},
    data::{
        graphql::GraphqlClient,
        part::{DeletedPartRecord, PartRepository},
    },
    error::Error,
    model::context::RequestContext,
    service::revalidate_page,
};

pub struct PartService<'a> {
    graphql: &'a GraphqlClient,
    cache: &'a PageCache,
}

impl<'a> PartService<'a> {
    /// Creates a new instance of [`PartService`]
    pub fn new(graphql: &'a GraphqlClient, cache: &'a PageCache) -> Self {
        Self { graphql, cache }
    }

    /// Deletes part `part_id` together with all of its installations
    ///
    /// A part can be installed on any of the user's bikes, so every cached page of the user
    /// is revalidated.
    ///
    /// # Returns
    /// - `Ok(Some(DeletedPartRecord))` - Part and installations removed
    /// - `Ok(None)` - No such part for the user, nothing was removed
    pub async fn delete_part(
        &self,
        ctx: &RequestContext,
        part_id: &str,
    ) -> Result<Option<DeletedPartRecord>, Error> {
        let Some(record) = PartRepository::new(self.graphql)
            .delete_with_installations(ctx, part_id)
            .await?
        else {
            return Ok(None);
        };

        tracing::info!(
            user_id = %ctx.user_id,
            part_id,
            removed_installations = record.removed_installations,
            "Deleted part"
        );

        revalidate_page(self.cache, ctx, HOME_PATH, RevalidateScope::Layout);

        Ok(Some(record))
    }
}
