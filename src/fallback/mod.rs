//! Static content used when live retrieval fails.
//!
//! Every dataset here has exactly the shape the normalizers produce:
//! itinerary days in display format and a full "1".."5" star distribution.

mod en;
mod es;

use crate::domain::model::{
    Image, ImageCategory, ImagesResponse, ItineraryDay, ItineraryResponse, Locale, Review,
    ReviewsResponse, DEFAULT_PACKAGE_ID,
};

struct ReviewSeed {
    name: &'static str,
    date: &'static str,
    rating: u8,
    body: &'static str,
}

struct ImageSeed {
    url: &'static str,
    category: &'static str,
    alt_text: &'static str,
    alt_text_en: &'static str,
}

struct DaySeed {
    title: &'static str,
    description: &'static str,
    accommodation: &'static str,
    included_activities: &'static str,
    meals: &'static str,
    optional_activities: &'static [&'static str],
    special_info: &'static str,
}

// 圖片的替代文字本身就是雙語，兩種語系共用同一組
const IMAGES: [ImageSeed; 11] = [
    ImageSeed {
        url: "/placeholder.svg?height=600&width=800&query=copacabana+bolivia",
        category: "hero",
        alt_text: "Vista del pueblo de Copacabana",
        alt_text_en: "Copacabana town view",
    },
    ImageSeed {
        url: "/placeholder.svg?height=400&width=600&query=copacabana+lakeside",
        category: "itinerary",
        alt_text: "Orilla del lago en Copacabana",
        alt_text_en: "Copacabana lakeside",
    },
    ImageSeed {
        url: "/placeholder.svg?height=400&width=600&query=isla+del+sol+panoramic",
        category: "overview",
        alt_text: "Vista panorámica de la Isla del Sol",
        alt_text_en: "Island of the Sun panoramic view",
    },
    ImageSeed {
        url: "/placeholder.svg?height=400&width=600&query=isla+de+la+luna+temple",
        category: "itinerary",
        alt_text: "Templo de la Isla de la Luna",
        alt_text_en: "Island of the Moon temple",
    },
    ImageSeed {
        url: "/placeholder.svg?height=400&width=600&query=copacabana+street",
        category: "hero",
        alt_text: "Vista de la calle en Copacabana",
        alt_text_en: "Copacabana street view",
    },
    ImageSeed {
        url: "/placeholder.svg?height=400&width=600&query=isla+del+sol+landscape",
        category: "itinerary",
        alt_text: "Paisaje de la Isla del Sol",
        alt_text_en: "Island of the Sun landscape",
    },
    ImageSeed {
        url: "/placeholder.svg?height=400&width=600&query=copacabana+market",
        category: "hero",
        alt_text: "Mercado de Copacabana",
        alt_text_en: "Copacabana market",
    },
    ImageSeed {
        url: "/placeholder.svg?height=400&width=600&query=isla+de+la+luna+ruins",
        category: "itinerary",
        alt_text: "Ruinas de la Isla de la Luna",
        alt_text_en: "Island of the Moon ruins",
    },
    ImageSeed {
        url: "/placeholder.svg?height=400&width=600&query=isla+del+sol+terraces",
        category: "hero",
        alt_text: "Terrazas de la Isla del Sol",
        alt_text_en: "Island of the Sun terraces",
    },
    ImageSeed {
        url: "/placeholder.svg?height=400&width=600&query=isla+del+sol+sunset",
        category: "hero",
        alt_text: "Atardecer en la Isla del Sol",
        alt_text_en: "Island of the Sun sunset",
    },
    ImageSeed {
        url: "/placeholder.svg?height=400&width=600&query=isla+del+sol+village",
        category: "hero",
        alt_text: "Pueblo de la Isla del Sol",
        alt_text_en: "Island of the Sun village",
    },
];

pub fn reviews(locale: Locale) -> ReviewsResponse {
    let seeds = match locale {
        Locale::En => &en::REVIEWS,
        Locale::Es => &es::REVIEWS,
    };

    let reviews = seeds
        .iter()
        .zip(1u32..)
        .map(|(seed, id)| Review {
            id,
            name: seed.name.to_string(),
            date: seed.date.to_string(),
            rating: seed.rating,
            body: seed.body.to_string(),
        })
        .collect();

    ReviewsResponse::from_reviews(reviews)
}

pub fn images() -> ImagesResponse {
    let images: Vec<Image> = IMAGES
        .iter()
        .zip(1u32..)
        .map(|(seed, id)| Image {
            id,
            url: seed.url.to_string(),
            category: ImageCategory::from(seed.category.to_string()),
            alt_text: seed.alt_text.to_string(),
            alt_text_en: seed.alt_text_en.to_string(),
        })
        .collect();

    ImagesResponse {
        package_id: DEFAULT_PACKAGE_ID.to_string(),
        total_images: images.len() as u32,
        images,
    }
}

pub fn itinerary(locale: Locale) -> ItineraryResponse {
    let seeds = match locale {
        Locale::En => &en::ITINERARY,
        Locale::Es => &es::ITINERARY,
    };

    let itinerary: Vec<ItineraryDay> = seeds
        .iter()
        .zip(1u32..)
        .map(|(seed, day)| ItineraryDay {
            day,
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            accommodation: seed.accommodation.to_string(),
            included_activities: seed.included_activities.to_string(),
            meals: seed.meals.to_string(),
            optional_activities: seed
                .optional_activities
                .iter()
                .map(|activity| activity.to_string())
                .collect(),
            special_info: seed.special_info.to_string(),
        })
        .collect();

    ItineraryResponse {
        package_id: DEFAULT_PACKAGE_ID.to_string(),
        total_days: itinerary.len() as u32,
        itinerary,
    }
}
