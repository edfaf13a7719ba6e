use serde::{Deserialize, Serialize};

/// Bike as listed on the dashboard
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BikeDto {
    pub id: String,
    pub name: String,
    pub strava_bike: bool,
    pub discipline: Option<DisciplineDto>,
}

/// Bike with the fields shown on the bike page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BikeDetailDto {
    pub id: String,
    pub name: String,
    pub strava_bike: bool,
    pub manufacturer_id: Option<String>,
    pub discipline: Option<DisciplineNameDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DisciplineDto {
    /// Short label such as "MTB" or "GRVL"
    pub abbr: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DisciplineNameDto {
    pub name: String,
}
