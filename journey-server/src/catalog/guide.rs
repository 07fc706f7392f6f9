//! Static guide content: destinations, stays, dishes, and the points of
//! interest shown alongside every planned trip.
//!
//! Everything here is compiled into the binary and never changes at runtime.

use serde::Serialize;

use crate::domain::Coordinate;

/// A featured destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Destination {
    pub id: u32,
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub district: &'static str,
    pub best_time: &'static str,
    pub activities: &'static [&'static str],
    pub altitude_m: u32,
}

/// A bookable accommodation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Accommodation {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    pub rating: f32,
    /// Price per night in whole rupees.
    pub price_per_night: u32,
    pub kind: &'static str,
    pub amenities: &'static [&'static str],
    pub capacity: &'static str,
}

/// A regional dish.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dish {
    pub id: u32,
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub region: &'static str,
    pub rating: f32,
    pub price: &'static str,
    pub restaurants: &'static [&'static str],
}

/// A sight shown on the trip map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attraction {
    pub name: &'static str,
    pub coordinate: Coordinate,
    pub kind: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

/// A place to stay shown on the trip map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lodging {
    pub name: &'static str,
    pub coordinate: Coordinate,
    pub rating: f32,
    pub price_range: &'static str,
    pub amenities: &'static [&'static str],
    pub image: &'static str,
}

/// A place to eat shown on the trip map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dining {
    pub name: &'static str,
    pub coordinate: Coordinate,
    pub rating: f32,
    pub cuisine: &'static str,
    pub price_range: &'static str,
    pub image: &'static str,
}

macro_rules! image {
    ($id:literal) => {
        concat!("https://images.unsplash.com/photo-", $id)
    };
}

pub static DESTINATIONS: &[Destination] = &[
    Destination {
        id: 1,
        name: "Kedarnath Temple",
        image: image!("1626621341517-bbf3d9990a23"),
        description: "Ancient Shiva temple amidst snow-capped peaks",
        district: "Rudraprayag District",
        best_time: "May to June & September to October",
        activities: &["Temple Visit", "Trekking", "Photography", "Meditation"],
        altitude_m: 3583,
    },
    Destination {
        id: 2,
        name: "Rishikesh",
        image: image!("1582510003544-4d00b7f74220"),
        description: "World's yoga capital and adventure sports hub",
        district: "Dehradun District",
        best_time: "March to April & September to November",
        activities: &["Yoga", "River Rafting", "Bungee Jumping", "Camping"],
        altitude_m: 372,
    },
    Destination {
        id: 3,
        name: "Nainital",
        image: image!("1626714356232-7c0c1bc3d233"),
        description: "Beautiful lake city surrounded by mountains",
        district: "Nainital District",
        best_time: "March to June & September to November",
        activities: &["Boating", "Cable Car Ride", "Shopping", "Lake View"],
        altitude_m: 2084,
    },
    Destination {
        id: 4,
        name: "Valley of Flowers",
        image: image!("1595815771614-ade9d652a65d"),
        description: "UNESCO World Heritage Site known for its meadows of endemic alpine flowers",
        district: "Chamoli District",
        best_time: "July to September",
        activities: &[
            "Trekking",
            "Nature Photography",
            "Bird Watching",
            "Flora Exploration",
        ],
        altitude_m: 3658,
    },
    Destination {
        id: 5,
        name: "Auli",
        image: image!("1593181629936-11c609b8db9b"),
        description: "Premier ski resort destination with panoramic Himalayan views",
        district: "Chamoli District",
        best_time: "November to March for skiing, May to October for other activities",
        activities: &["Skiing", "Cable Car Ride", "Trekking", "Mountain Views"],
        altitude_m: 2800,
    },
    Destination {
        id: 6,
        name: "Mussoorie",
        image: image!("1626714356232-7c0c1bc3d233"),
        description: "Queen of Hills with colonial charm and mountain views",
        district: "Dehradun District",
        best_time: "March to June & September to November",
        activities: &["Mall Road Walk", "Cable Car", "Waterfalls", "Adventure Sports"],
        altitude_m: 2005,
    },
];

pub static ACCOMMODATIONS: &[Accommodation] = &[
    Accommodation {
        id: 1,
        name: "Himalayan Heights Resort",
        location: "Mussoorie",
        image: image!("1566073771259-6a8506099945"),
        rating: 4.8,
        price_per_night: 5000,
        kind: "Resort",
        amenities: &["WiFi", "Restaurant", "Spa", "Mountain View"],
        capacity: "2-4",
    },
    Accommodation {
        id: 2,
        name: "Riverside Camping",
        location: "Rishikesh",
        image: image!("1537225228614-56cc3556d7ed"),
        rating: 4.5,
        price_per_night: 2000,
        kind: "Camp",
        amenities: &["Bonfire", "Adventure Activities", "Restaurant", "River View"],
        capacity: "2-3",
    },
    Accommodation {
        id: 3,
        name: "Lake View Hotel",
        location: "Nainital",
        image: image!("1566073771259-6a8506099945"),
        rating: 4.6,
        price_per_night: 4000,
        kind: "Hotel",
        amenities: &["WiFi", "Restaurant", "Lake View", "Room Service"],
        capacity: "2-4",
    },
    Accommodation {
        id: 4,
        name: "Mountain Retreat",
        location: "Auli",
        image: image!("1518733057094-95b53143d2a7"),
        rating: 4.7,
        price_per_night: 6000,
        kind: "Resort",
        amenities: &["Ski Equipment", "Restaurant", "Spa", "Mountain View"],
        capacity: "2-4",
    },
    Accommodation {
        id: 5,
        name: "Heritage Homestay",
        location: "Almora",
        image: image!("1566073771259-6a8506099945"),
        rating: 4.4,
        price_per_night: 3000,
        kind: "Homestay",
        amenities: &[
            "Home Cooked Food",
            "Garden",
            "Cultural Activities",
            "Valley View",
        ],
        capacity: "2-6",
    },
];

pub static DISHES: &[Dish] = &[
    Dish {
        id: 1,
        name: "Kafuli",
        image: image!("1601050690597-df0568f70950"),
        description: "Traditional Garhwali dish made from green leafy vegetables",
        category: "Vegetarian",
        region: "Garhwal",
        rating: 4.8,
        price: "₹150",
        restaurants: &["Garhwal Kitchen", "Hill View Restaurant"],
    },
    Dish {
        id: 2,
        name: "Bhang Ki Chutney",
        image: image!("1589010588553-46e8e7c21788"),
        description: "Spicy hemp seed chutney, a local favorite",
        category: "Condiment",
        region: "Kumaon",
        rating: 4.6,
        price: "₹50",
        restaurants: &["Local Flavors", "Mountain Spice"],
    },
    Dish {
        id: 3,
        name: "Aloo ke Gutke",
        image: image!("1603133872878-684f208fb84b"),
        description: "Spiced potato dish with local herbs",
        category: "Vegetarian",
        region: "Kumaon",
        rating: 4.7,
        price: "₹120",
        restaurants: &["Kumaon Kitchen", "Heritage Foods"],
    },
    Dish {
        id: 4,
        name: "Mandua ki Roti",
        image: image!("1586444248902-2f64eddc13df"),
        description: "Nutritious flatbread made from finger millet",
        category: "Bread",
        region: "All Regions",
        rating: 4.5,
        price: "₹40",
        restaurants: &["Traditional Tastes", "Mountain View"],
    },
    Dish {
        id: 5,
        name: "Bal Mithai",
        image: image!("1589010588553-46e8e7c21788"),
        description: "Traditional chocolate-like fudge with white sugar balls",
        category: "Dessert",
        region: "Almora",
        rating: 4.9,
        price: "₹400/kg",
        restaurants: &["Almora Sweets", "Heritage Confectionery"],
    },
];

pub static ATTRACTIONS: &[Attraction] = &[
    Attraction {
        name: "Robber's Cave",
        coordinate: Coordinate::new(30.3255, 78.0436),
        kind: "Natural Formation",
        description: "A unique river cave formation",
        image: image!("1626621341517-bbf3d9990a23"),
    },
    Attraction {
        name: "Sahastradhara",
        coordinate: Coordinate::new(30.3841, 78.1283),
        kind: "Waterfall",
        description: "Thousand-fold spring with therapeutic waters",
        image: image!("1582510003544-4d00b7f74220"),
    },
    Attraction {
        name: "Tapkeshwar Temple",
        coordinate: Coordinate::new(30.3397, 78.0173),
        kind: "Temple",
        description: "Ancient cave temple dedicated to Lord Shiva",
        image: image!("1626714356232-7c0c1bc3d233"),
    },
];

pub static LODGING: &[Lodging] = &[
    Lodging {
        name: "Mountain View Resort",
        coordinate: Coordinate::new(30.3265, 78.0456),
        rating: 4.5,
        price_range: "₹3000-5000",
        amenities: &["Restaurant", "WiFi", "Parking", "Mountain View"],
        image: image!("1566073771259-6a8506099945"),
    },
    Lodging {
        name: "Riverside Retreat",
        coordinate: Coordinate::new(30.3841, 78.1173),
        rating: 4.2,
        price_range: "₹2500-4000",
        amenities: &["Pool", "Restaurant", "Spa", "River View"],
        image: image!("1537225228614-56cc3556d7ed"),
    },
];

pub static DINING: &[Dining] = &[
    Dining {
        name: "Himalayan Flavors",
        coordinate: Coordinate::new(30.3275, 78.0446),
        rating: 4.6,
        cuisine: "Local Uttarakhand",
        price_range: "₹500-1500",
        image: image!("1589010588553-46e8e7c21788"),
    },
    Dining {
        name: "Mountain Spice",
        coordinate: Coordinate::new(30.3851, 78.1163),
        rating: 4.4,
        cuisine: "North Indian",
        price_range: "₹800-2000",
        image: image!("1601050690597-df0568f70950"),
    },
];
