use crate::core::decode::{ResponseBool, ResponseUrl};
use crate::core::export::Export;
use serde::Deserialize;
use url::Url;

/// A beer as embedded in checkin payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct Beer {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub label: Option<Url>,
    pub style: String,
    pub description: String,
    pub abv: f64,
    pub ibu: f64,
    pub active: bool,
    pub has_had: bool,
    pub on_wish_list: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawBeer {
    bid: i64,
    beer_name: String,
    beer_slug: String,
    beer_label: ResponseUrl,
    beer_style: String,
    beer_description: String,
    beer_abv: f64,
    beer_ibu: f64,
    beer_active: ResponseBool,
    has_had: ResponseBool,
    wish_list: ResponseBool,
}

impl Export for RawBeer {
    type Output = Beer;

    fn export(self) -> Beer {
        Beer {
            id: self.bid,
            name: self.beer_name,
            slug: self.beer_slug,
            label: self.beer_label.into(),
            style: self.beer_style,
            description: self.beer_description,
            abv: self.beer_abv,
            ibu: self.beer_ibu,
            active: self.beer_active.into(),
            has_had: self.has_had.into(),
            on_wish_list: self.wish_list.into(),
        }
    }
}
