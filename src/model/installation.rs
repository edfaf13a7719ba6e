use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::part::{PartDto, PartType, SellStatus};

/// A part mounted on a bike since `installed_at`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct InstallationDto {
    pub id: String,
    pub bike_id: String,
    pub installed_at: NaiveDate,
    pub part: PartDto,
}

/// Request body for mounting an already existing part on a bike
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct InstallPartDto {
    pub part_id: String,
    pub installed_at: NaiveDate,
}

/// Fields posted by the add part form, creating a new part and installing it on `bike`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AddInstallationForm {
    /// Bike ID the new part is installed on
    pub bike: String,
    /// Manufacturer ID of the new part
    pub manufacturer: String,
    /// Model name
    pub name: String,
    /// Model year
    pub year: i32,
    /// Purchase price
    pub price: f64,
    pub purchase_date: NaiveDate,
    #[serde(default)]
    pub sell_status: SellStatus,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub sell_price: Option<f64>,
    /// Checkbox, absent when unchecked
    #[serde(default)]
    pub secondhand: bool,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub shop_url: Option<String>,
    #[serde(rename = "type")]
    pub part_type: PartType,
    pub weight: String,
    pub installed_at: NaiveDate,
}

impl AddInstallationForm {
    /// Checks the constraints the HTML form declares but a client may not have enforced
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("bike", &self.bike),
            ("manufacturer", &self.manufacturer),
            ("name", &self.name),
            ("weight", &self.weight),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(format!("Field `{}` must not be empty", field));
            }
        }

        validate_price("price", self.price)?;
        if let Some(sell_price) = self.sell_price {
            validate_price("sell_price", sell_price)?;
        }

        Ok(())
    }
}

/// `NaN` and infinities parse from a form but have no JSON representation
fn validate_price(field: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() {
        return Err(format!("Field `{}` must be a number", field));
    }
    if value < 0.0 {
        return Err(format!("Field `{}` must not be negative", field));
    }

    Ok(())
}

/// Browsers submit empty optional inputs as `field=`, treat those as missing
fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => T::from_str(s).map(Some).map_err(serde::de::Error::custom),
    }
}
