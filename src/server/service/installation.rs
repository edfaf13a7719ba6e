use chrono::NaiveDate;
use dioxus_logger::tracing;

use crate::{
    model::installation::{AddInstallationForm, InstallationDto},
    server::{
        cache::{bike_installations_path, bike_path, PageCache, RevalidateScope},
        data::{
            graphql::GraphqlClient,
            installation::{InstallationRecord, InstallationRepository},
        },
        error::Error,
        model::context::RequestContext,
        service::revalidate_page,
    },
};

pub struct InstallationService<'a> {
    graphql: &'a GraphqlClient,
    cache: &'a PageCache,
}

impl<'a> InstallationService<'a> {
    /// Creates a new instance of [`InstallationService`]
    pub fn new(graphql: &'a GraphqlClient, cache: &'a PageCache) -> Self {
        Self { graphql, cache }
    }

    /// Installations of `bike_id`, newest first, memoized for the bike page
    pub async fn get_bike_installations(
        &self,
        ctx: &RequestContext,
        bike_id: &str,
    ) -> Result<Vec<InstallationDto>, Error> {
        let installation_repo = InstallationRepository::new(self.graphql);

        self.cache
            .get_or_fetch(&ctx.user_id, &bike_installations_path(bike_id), || {
                installation_repo.get_bike_installations(ctx, bike_id)
            })
            .await
    }

    /// Creates a new part and installs it on the bike named in `form`
    ///
    /// The part and its installation are written by one backend mutation, so either both
    /// exist afterwards or neither does. The bike page is revalidated on success.
    ///
    /// # Returns
    /// - `Ok(InstallationDto)` - Part created and installed
    /// - `Err(Error::ValidationError)` - Form failed validation, nothing was sent
    /// - `Err(Error)` - Backend or transport failure
    pub async fn add_installation(
        &self,
        ctx: &RequestContext,
        form: &AddInstallationForm,
    ) -> Result<InstallationDto, Error> {
        form.validate().map_err(Error::ValidationError)?;

        let installation = InstallationRepository::new(self.graphql)
            .create_with_part(ctx, form)
            .await?;

        tracing::info!(
            user_id = %ctx.user_id,
            bike_id = %installation.bike_id,
            part_id = %installation.part.id,
            "Added part to bike"
        );

        revalidate_page(
            self.cache,
            ctx,
            &bike_path(&form.bike),
            RevalidateScope::Layout,
        );

        Ok(installation)
    }

    /// Installs the existing part `part_id` on `bike_id`
    pub async fn install_part(
        &self,
        ctx: &RequestContext,
        bike_id: &str,
        part_id: &str,
        installed_at: NaiveDate,
    ) -> Result<InstallationDto, Error> {
        let installation = InstallationRepository::new(self.graphql)
            .create(ctx, bike_id, part_id, installed_at)
            .await?;

        tracing::info!(
            user_id = %ctx.user_id,
            bike_id,
            part_id,
            "Installed part on bike"
        );

        revalidate_page(self.cache, ctx, &bike_path(bike_id), RevalidateScope::Layout);

        Ok(installation)
    }

    /// Removes installation `installation_id`; the part itself is kept
    ///
    /// # Returns
    /// - `Ok(Some(InstallationRecord))` - Installation removed, its bike page revalidated
    /// - `Ok(None)` - No such installation for the user
    pub async fn uninstall(
        &self,
        ctx: &RequestContext,
        installation_id: &str,
    ) -> Result<Option<InstallationRecord>, Error> {
        let Some(record) = InstallationRepository::new(self.graphql)
            .delete(ctx, installation_id)
            .await?
        else {
            return Ok(None);
        };

        tracing::info!(
            user_id = %ctx.user_id,
            installation_id,
            bike_id = %record.bike_id,
            "Uninstalled part from bike"
        );

        revalidate_page(
            self.cache,
            ctx,
            &bike_path(&record.bike_id),
            RevalidateScope::Layout,
        );

        Ok(Some(record))
    }
}
