use super::{DaySeed, ReviewSeed};

pub(super) const REVIEWS: [ReviewSeed; 5] = [
    ReviewSeed {
        name: "Sarah Mitchell",
        date: "December 2024",
        rating: 5,
        body: "Absolutely incredible journey! The guides were knowledgeable and passionate. Lake Titicaca at sunrise was breathtaking. Every moment was perfectly organized. Highly recommend!",
    },
    ReviewSeed {
        name: "Carlos Rodriguez",
        date: "November 2024",
        rating: 4,
        body: "Great trip overall. The boat rides were amazing and the cultural experiences were rewarding. Food was good and accommodations were decent. Only wish we had more time in Copacabana.",
    },
    ReviewSeed {
        name: "Emma Thompson",
        date: "November 2024",
        rating: 5,
        body: "Life-changing experience! The local families we met were so welcoming. The Island of the Sun was otherworldly. Worth every penny!",
    },
    ReviewSeed {
        name: "Michael Chen",
        date: "October 2024",
        rating: 3,
        body: "Good trip but had some issues with transportation delays. The sites were amazing but the organization could be better. Still glad I went.",
    },
    ReviewSeed {
        name: "Isabella Garcia",
        date: "October 2024",
        rating: 5,
        body: "Perfect blend of adventure and culture. Our guide Maria was fantastic. The island experience was authentic and meaningful. Couldn't ask for more!",
    },
];

pub(super) const ITINERARY: [DaySeed; 4] = [
    DaySeed {
        title: "Copacabana, Gateway to Titicaca",
        description: "Your adventure begins with a scenic journey from La Paz to Copacabana, the Andean heart of Lake Titicaca. Once you arrive, you'll settle in and spend the afternoon exploring the charms of this town, from its iconic church to its vibrant local market, enjoying the views from El Calvario. The day will conclude with dinner and overnight stay.",
        accommodation: "Hotel (1 night)",
        included_activities: "Tourist bus travel from La Paz to Copacabana, Visit to the Church of the Virgin of Copacabana, Exploration of Copacabana's local market, Ascent to El Calvario",
        meals: "Lunch, Dinner",
        optional_activities: &["Visit to a local museum"],
        special_info: "",
    },
    DaySeed {
        title: "Island of the Sun, Cradle of the Inca Empire",
        description: "Embark on an unforgettable boat trip to the Island of the Sun, sacred place where Inca history comes to life. Explore ancient temples and ruins, like Pilkokaina, walk through ancestral paths to Yumani. Be amazed by the spectacular views of the lake. Visit the Inca Stairway, the Fountain of Youth and the Temple of the Sun. Dinner and overnight stay will be on the island.",
        accommodation: "Hotel on Lake Titicaca (1 night)",
        included_activities: "Community boat trip to the Island of the Sun, Visit to the archaeological remains of Pilkokaina 'Inca Temple', Hike to Yumani, Visit to the Inca Stairway, Visit to the Fountain of Youth, Visit to the Temple of the Sun",
        meals: "Breakfast, Lunch, Dinner",
        optional_activities: &[],
        special_info: "",
    },
    DaySeed {
        title: "Island of the Moon, Sanctuary of Peace",
        description: "Discover the mysteries of the Island of the Moon. After a relaxing boat trip, you'll explore the ancient temple of the Virgins, where you'll enjoy an authentic Apthapi-style lunch. The afternoon invites you to a peaceful walk to reach your hostel. A space where silence and the lake breeze will mark the beginning of a restorative night, accompanied by a comforting dinner and rest.",
        accommodation: "Hostel (1 night)",
        included_activities: "Community boat trip to the Island of the Moon, Visit to the Temple of the Virgins, Apthapi-style lunch, Hike to the hostel",
        meals: "Breakfast, Lunch (Apthapi-style), Dinner",
        optional_activities: &[],
        special_info: "",
    },
    DaySeed {
        title: "Return and Farewell to Titicaca",
        description: "Your last day at Titicaca begins with a boat trip back, once again enjoying the panoramic views of the lake. From Yampupata, transport will take you back to Copacabana for a final lunch before embarking on your return journey on a Copacabana-La Paz bus or, if you prefer, continue your adventure to Puno in Peru.",
        accommodation: "Not included",
        included_activities: "Community boat trip from Island of the Moon to Yampupata, Transport from Yampupata to Copacabana, Bus trip from Copacabana to La Paz or Puno",
        meals: "Breakfast, Lunch",
        optional_activities: &[],
        special_info: "",
    },
];
