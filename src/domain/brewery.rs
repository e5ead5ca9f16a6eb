use crate::core::decode::{ResponseBool, ResponseUrl};
use crate::core::export::Export;
use serde::{Deserialize, Serialize};
use url::Url;

/// An Untappd brewery: name, location, logo and assorted metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Brewery {
    pub id: i64,
    pub name: String,
    pub slug: String,
    /// `None` when the brewery has no logo.
    pub logo: Option<Url>,
    pub country: String,
    pub active: bool,
    pub location: BreweryLocation,
    pub contact: BreweryContact,
    pub brewery_type: String,
    pub type_id: i64,
    pub independent: bool,
    pub in_production: i64,
    pub rating: BreweryRating,
    pub description: String,
    pub stats: BreweryStats,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BreweryLocation {
    #[serde(rename = "brewery_address")]
    pub address: String,
    #[serde(rename = "brewery_city")]
    pub city: String,
    #[serde(rename = "brewery_state")]
    pub state: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
    #[serde(rename = "brewery_lat")]
    pub brewery_latitude: f64,
    #[serde(rename = "brewery_lng")]
    pub brewery_longitude: f64,
}

/// Social media and website contact details.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BreweryContact {
    pub twitter: String,
    pub facebook: String,
    pub instagram: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BreweryRating {
    pub count: i64,
    #[serde(rename = "rating_score")]
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BreweryStats {
    pub total_count: i64,
    pub unique_count: i64,
    pub monthly_count: i64,
    pub weekly_count: i64,
    pub age_on_service: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawBrewery {
    brewery_id: i64,
    brewery_name: String,
    brewery_slug: String,
    brewery_label: ResponseUrl,
    country_name: String,
    brewery_active: ResponseBool,
    location: BreweryLocation,
    contact: BreweryContact,
    brewery_type: String,
    brewery_type_id: i64,
    is_independent: ResponseBool,
    brewery_in_production: i64,
    rating: BreweryRating,
    brewery_description: String,
    stats: BreweryStats,
}

impl Export for RawBrewery {
    type Output = Brewery;

    fn export(self) -> Brewery {
        Brewery {
            id: self.brewery_id,
            name: self.brewery_name,
            slug: self.brewery_slug,
            logo: self.brewery_label.into(),
            country: self.country_name,
            active: self.brewery_active.into(),
            location: self.location,
            contact: self.contact,
            brewery_type: self.brewery_type,
            type_id: self.brewery_type_id,
            independent: self.is_independent.into(),
            in_production: self.brewery_in_production,
            rating: self.rating,
            description: self.brewery_description,
            stats: self.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawBrewery {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_export_maps_every_field() {
        let brewery = raw(json!({
            "brewery_id": 1142,
            "brewery_name": "Founders Brewing Co.",
            "brewery_slug": "founders-brewing-co",
            "brewery_label": "https://untappd.akamaized.net/site/brewery_logos/brewery-549_5f8a2.jpeg",
            "country_name": "United States",
            "brewery_active": 1,
            "brewery_in_production": 1,
            "is_independent": "0",
            "brewery_type": "Regional Brewery",
            "brewery_type_id": 2,
            "brewery_description": "Great beer",
            "contact": {
                "twitter": "foundersbrewing",
                "facebook": "http://www.facebook.com/foundersbrewing",
                "instagram": "foundersbrewing",
                "url": "http://foundersbrewing.com"
            },
            "location": {
                "brewery_address": "235 Grandville Ave SW",
                "brewery_city": "Grand Rapids",
                "brewery_state": "MI",
                "lat": 42.9585,
                "lng": -85.6735
            },
            "rating": {"count": 3402355, "rating_score": 3.92},
            "stats": {
                "total_count": 3938017,
                "unique_count": 1074395,
                "monthly_count": 23450,
                "weekly_count": 5430,
                "age_on_service": 3342.5
            }
        }))
        .export();

        assert_eq!(brewery.id, 1142);
        assert_eq!(brewery.name, "Founders Brewing Co.");
        assert_eq!(brewery.slug, "founders-brewing-co");
        assert_eq!(
            brewery.logo.as_ref().map(Url::as_str),
            Some("https://untappd.akamaized.net/site/brewery_logos/brewery-549_5f8a2.jpeg")
        );
        assert_eq!(brewery.country, "United States");
        assert!(brewery.active);
        assert!(!brewery.independent);
        assert_eq!(brewery.in_production, 1);
        assert_eq!(brewery.brewery_type, "Regional Brewery");
        assert_eq!(brewery.type_id, 2);
        assert_eq!(brewery.description, "Great beer");
        assert_eq!(brewery.contact.twitter, "foundersbrewing");
        assert_eq!(brewery.contact.url, "http://foundersbrewing.com");
        assert_eq!(brewery.location.city, "Grand Rapids");
        assert_eq!(brewery.location.latitude, 42.9585);
        assert_eq!(brewery.location.brewery_latitude, 0.0);
        assert_eq!(brewery.rating.count, 3402355);
        assert_eq!(brewery.rating.score, 3.92);
        assert_eq!(brewery.stats.weekly_count, 5430);
        assert_eq!(brewery.stats.age_on_service, 3342.5);
    }

    #[test]
    fn test_missing_logo_and_compact_fields() {
        let brewery = raw(json!({
            "brewery_id": 7,
            "brewery_name": "Tiny Brewhouse",
            "brewery_label": "",
            "brewery_active": "true"
        }))
        .export();

        assert_eq!(brewery.logo, None);
        assert!(brewery.active);
        assert_eq!(brewery.stats, BreweryStats::default());
        assert_eq!(brewery.contact, BreweryContact::default());
    }

    #[test]
    fn test_bad_boolean_fails_decode() {
        let result = serde_json::from_value::<RawBrewery>(json!({"brewery_active": "maybe"}));
        assert!(result.is_err());
    }
}
