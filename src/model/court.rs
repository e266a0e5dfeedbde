use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SportType {
    Badminton,
    Pickleball,
    Basketball,
}

impl SportType {
    pub const ALL: [SportType; 3] = [
        SportType::Badminton,
        SportType::Pickleball,
        SportType::Basketball,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SportType::Badminton => "Badminton",
            SportType::Pickleball => "Pickleball",
            SportType::Basketball => "Basketball",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A bookable venue. Every court lives in the static catalog and is never
/// mutated while the app runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Court {
    pub id: &'static str,
    pub name: &'static str,
    pub sport: SportType,
    pub image: &'static str,
    /// Hourly price in whole dollars
    pub price: u32,
    /// 0.0 ..= 5.0
    pub rating: f32,
    pub location: &'static str,
    pub coordinates: Coordinates,
    pub amenities: &'static [&'static str],
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: u32,
    pub description: &'static str,
}

impl Court {
    pub fn pricing_tiers(&self) -> [PricingTier; 3] {
        [
            PricingTier {
                name: "Standard",
                price: self.price,
                description: "Per hour, no commitment",
            },
            PricingTier {
                name: "Club Member",
                // floor(price * 0.8)
                price: self.price * 4 / 5,
                description: "20% off all bookings",
            },
            PricingTier {
                name: "Elite Pass",
                price: 99,
                description: "Unlimited access monthly",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{court_by_id, COURTS};

    #[test]
    fn club_member_rate_is_floored() {
        let pickle = court_by_id("c2").unwrap();
        let tiers = pickle.pricing_tiers();
        assert_eq!(tiers[0].price, 12);
        // 12 * 0.8 = 9.6
        assert_eq!(tiers[1].price, 9);
        assert_eq!(tiers[2].price, 99);
    }

    #[test]
    fn ratings_are_bounded() {
        for court in COURTS {
            assert!((0.0..=5.0).contains(&court.rating), "{}", court.id);
            assert!(court.price > 0);
        }
    }
}
