use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::{
    model::installation::{AddInstallationForm, InstallationDto},
    server::{data::graphql::GraphqlClient, error::Error, model::context::RequestContext},
};

pub const GET_BIKE_INSTALLATIONS: &str = r#"
query GetBikeInstallations($user_id: uuid!, $bike_id: uuid!) {
  installation(
    where: { bike_id: { _eq: $bike_id }, bike: { user_id: { _eq: $user_id } } }
    order_by: { installed_at: desc }
  ) {
    id
    bike_id
    installed_at
    part {
      id
      name
      type
      model_year
      purchase_price
      purchase_date
      sell_status
      sell_price
      secondhand
      shop_url
      weight
      manufacturer {
        id
        name
      }
    }
  }
}
"#;

/// Inserts the part and its installation in one statement, the backend runs nested
/// inserts in a single transaction.
pub const ADD_INSTALLATION: &str = r#"
mutation AddInstallation($object: installation_insert_input!) {
  insert_installation_one(object: $object) {
    id
    bike_id
    installed_at
    part {
      id
      name
      type
      model_year
      purchase_price
      purchase_date
      sell_status
      sell_price
      secondhand
      shop_url
      weight
      manufacturer {
        id
        name
      }
    }
  }
}
"#;

pub const INSTALL_PART: &str = r#"
mutation InstallPart($bike_id: uuid!, $part_id: uuid!, $installed_at: date!) {
  insert_installation_one(
    object: { bike_id: $bike_id, part_id: $part_id, installed_at: $installed_at }
  ) {
    id
    bike_id
    installed_at
    part {
      id
      name
      type
      model_year
      purchase_price
      purchase_date
      sell_status
      sell_price
      secondhand
      shop_url
      weight
      manufacturer {
        id
        name
      }
    }
  }
}
"#;

pub const DELETE_INSTALLATION: &str = r#"
mutation DeleteInstallation($id: uuid!) {
  delete_installation_by_pk(id: $id) {
    id
    bike_id
    part_id
  }
}
"#;

/// Identifiers of a deleted installation
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct InstallationRecord {
    pub id: String,
    pub bike_id: String,
    pub part_id: String,
}

pub struct InstallationRepository<'a> {
    graphql: &'a GraphqlClient,
}

impl<'a> InstallationRepository<'a> {
    /// Creates a new instance of [`InstallationRepository`]
    pub fn new(graphql: &'a GraphqlClient) -> Self {
        Self { graphql }
    }

    /// Installations on `bike_id`, newest first, empty unless the bike belongs to the user
    pub async fn get_bike_installations(
        &self,
        ctx: &RequestContext,
        bike_id: &str,
    ) -> Result<Vec<InstallationDto>, Error> {
        self.graphql
            .request(
                ctx,
                GET_BIKE_INSTALLATIONS,
                json!({ "user_id": ctx.user_id, "bike_id": bike_id }),
                "installation",
            )
            .await
    }

    /// Creates a new part from `form` and installs it on `form.bike`
    pub async fn create_with_part(
        &self,
        ctx: &RequestContext,
        form: &AddInstallationForm,
    ) -> Result<InstallationDto, Error> {
        let object = json!({
            "bike_id": form.bike,
            "installed_at": form.installed_at,
            "part": {
                "data": {
                    "name": form.name.trim(),
                    "type": form.part_type,
                    "manufacturer_id": form.manufacturer,
                    "model_year": form.year,
                    "purchase_price": form.price,
                    "purchase_date": form.purchase_date,
                    "sell_status": form.sell_status,
                    "sell_price": form.sell_price,
                    "secondhand": form.secondhand,
                    "shop_url": form.shop_url,
                    "weight": form.weight.trim(),
                }
            }
        });

        self.graphql
            .request(
                ctx,
                ADD_INSTALLATION,
                json!({ "object": object }),
                "insert_installation_one",
            )
            .await
    }

    /// Installs the existing part `part_id` on `bike_id`
    pub async fn create(
        &self,
        ctx: &RequestContext,
        bike_id: &str,
        part_id: &str,
        installed_at: NaiveDate,
    ) -> Result<InstallationDto, Error> {
        self.graphql
            .request(
                ctx,
                INSTALL_PART,
                json!({
                    "bike_id": bike_id,
                    "part_id": part_id,
                    "installed_at": installed_at,
                }),
                "insert_installation_one",
            )
            .await
    }

    /// Deletes an installation, leaving its part untouched
    ///
    /// Returns `Ok(None)` when no installation with `installation_id` is visible to the user.
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        installation_id: &str,
    ) -> Result<Option<InstallationRecord>, Error> {
        self.graphql
            .request(
                ctx,
                DELETE_INSTALLATION,
                json!({ "id": installation_id }),
                "delete_installation_by_pk",
            )
            .await
    }
}
