use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::manufacturer::ManufacturerDto;

/// Kind of component, stored by the backend as its display name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum PartType {
    Frame,
    Fork,
    #[serde(rename = "Front Brake")]
    FrontBrake,
    #[serde(rename = "Rear Brake")]
    RearBrake,
    Handlebar,
    Stem,
    Seatpost,
    Saddle,
    #[serde(rename = "Front Wheel")]
    FrontWheel,
    #[serde(rename = "Rear Wheel")]
    RearWheel,
    Tire,
    Crankset,
    Chain,
    Cassette,
    #[serde(rename = "Front Derailleur")]
    FrontDerailleur,
    #[serde(rename = "Rear Derailleur")]
    RearDerailleur,
    Shifter,
    Pedals,
}

impl PartType {
    /// Every part type in the order offered by the add part form
    pub const ALL: [PartType; 18] = [
        PartType::Frame,
        PartType::Fork,
        PartType::FrontBrake,
        PartType::RearBrake,
        PartType::Handlebar,
        PartType::Stem,
        PartType::Seatpost,
        PartType::Saddle,
        PartType::FrontWheel,
        PartType::RearWheel,
        PartType::Tire,
        PartType::Crankset,
        PartType::Chain,
        PartType::Cassette,
        PartType::FrontDerailleur,
        PartType::RearDerailleur,
        PartType::Shifter,
        PartType::Pedals,
    ];

    /// Wire value, identical to the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PartType::Frame => "Frame",
            PartType::Fork => "Fork",
            PartType::FrontBrake => "Front Brake",
            PartType::RearBrake => "Rear Brake",
            PartType::Handlebar => "Handlebar",
            PartType::Stem => "Stem",
            PartType::Seatpost => "Seatpost",
            PartType::Saddle => "Saddle",
            PartType::FrontWheel => "Front Wheel",
            PartType::RearWheel => "Rear Wheel",
            PartType::Tire => "Tire",
            PartType::Crankset => "Crankset",
            PartType::Chain => "Chain",
            PartType::Cassette => "Cassette",
            PartType::FrontDerailleur => "Front Derailleur",
            PartType::RearDerailleur => "Rear Derailleur",
            PartType::Shifter => "Shifter",
            PartType::Pedals => "Pedals",
        }
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SellStatus {
    ForSale,
    #[default]
    NotForSale,
    Sold,
}

impl SellStatus {
    pub const ALL: [SellStatus; 3] = [SellStatus::NotForSale, SellStatus::ForSale, SellStatus::Sold];

    /// Wire value, identical to the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SellStatus::ForSale => "for_sale",
            SellStatus::NotForSale => "not_for_sale",
            SellStatus::Sold => "sold",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SellStatus::ForSale => "For sale",
            SellStatus::NotForSale => "Not for sale",
            SellStatus::Sold => "Sold",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PartDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub part_type: PartType,
    pub manufacturer: Option<ManufacturerDto>,
    pub model_year: i32,
    pub purchase_price: f64,
    pub purchase_date: NaiveDate,
    pub sell_status: SellStatus,
    pub sell_price: Option<f64>,
    pub secondhand: bool,
    pub shop_url: Option<String>,
    pub weight: String,
}
