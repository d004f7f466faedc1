use super::{DaySeed, ReviewSeed};

// 西文頁面沿用英文評論
pub(super) const REVIEWS: [ReviewSeed; 5] = [
    ReviewSeed {
        name: "Sarah Mitchell",
        date: "December 2024",
        rating: 5,
        body: "Absolutely incredible journey! The guides were knowledgeable and passionate. Machu Picchu at sunrise was breathtaking. Every moment was perfectly organized. Highly recommend!",
    },
    ReviewSeed {
        name: "Carlos Rodriguez",
        date: "November 2024",
        rating: 4,
        body: "Great trip overall. The Inca Trail was challenging but rewarding. Food was good and accommodations were decent. Only wish we had more time in Cusco.",
    },
    ReviewSeed {
        name: "Emma Thompson",
        date: "November 2024",
        rating: 5,
        body: "Life-changing experience! The local families we stayed with were so welcoming. The salt flats in Bolivia were otherworldly. Worth every penny!",
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
        body: "Perfect blend of adventure and culture. Our guide Maria was fantastic. The homestay experience was authentic and meaningful. Couldn't ask for more!",
    },
];

pub(super) const ITINERARY: [DaySeed; 4] = [
    DaySeed {
        title: "Copacabana, Puerta del Titicaca",
        description: "Tu aventura comienza con un pintoresco viaje desde La Paz hacia Copacabana, corazón andino del Lago Titicaca. Una vez que llegues, te acomodarás y pasarás la tarde explorando los encantos de este pueblo, desde su icónica iglesia hasta su vibrante mercado local, disfrutando de las vistas desde El Calvario. La jornada concluirá con cena y pernocte.",
        accommodation: "Hotel (1 noche)",
        included_activities: "Viaje en bus turístico de La Paz a Copacabana, Visita a la Iglesia de la Virgen de Copacabana, Exploración del mercado local de Copacabana, Ascenso a El Calvario",
        meals: "Almuerzo, Cena",
        optional_activities: &["Visita a un museo local"],
        special_info: "",
    },
    DaySeed {
        title: "Isla del Sol, Cuna del Imperio Inca",
        description: "Embárcate en un inolvidable viaje en bote a la Isla del Sol, lugar sagrado donde la historia Inca cobra vida. Explora antiguos templos y ruinas, como Pilkokaina, caminarás por senderos ancestrales hasta Yumani. Déjate sorprender con las vistas espectaculares del lago. Visita la Escalinata del Inca, la Fuente de la Juventud y el Templo del Sol. La cena y pernocte serán en la isla.",
        accommodation: "Hotel en el Lago Titicaca (1 noche)",
        included_activities: "Viaje en bote comunitario a la Isla del Sol, Visita a los restos arqueológicos de Pilkokaina 'Templo del Inca', Caminata a Yumani, Visita a la Escalinata del Inca, Visita a la Fuente de la Juventud, Visita al Templo del Sol",
        meals: "Desayuno, Almuerzo, Cena",
        optional_activities: &[],
        special_info: "",
    },
    DaySeed {
        title: "Isla de la Luna, Santuario de Paz",
        description: "Descubre los misterios de la Isla de la Luna. Tras un relajante viaje en bote, explorarás el templo ancestral de las Vírgenes, donde disfrutarás de un auténtico almuerzo tipo Apthapi. La tarde te invita a una caminata tranquila para llegar a tu albergue. Espacio donde el silencio y la brisa del lago marcarán el inicio de una noche reparadora, acompañada de una cena reconfortante y descanso.",
        accommodation: "Albergue (1 noche)",
        included_activities: "Viaje en bote comunitario a la Isla de la Luna, Visita al Templo de las Vírgenes, Almuerzo tipo Apthapi, Caminata al albergue",
        meals: "Desayuno, Almuerzo (Tipo Apthapi), Cena",
        optional_activities: &[],
        special_info: "",
    },
    DaySeed {
        title: "Regreso y Despedida del Titicaca",
        description: "Tu último día en el Titicaca comienza con un viaje en bote de regreso, disfrutando una vez más de las vistas panorámicas del lago. Desde Yampupata, un transporte te llevará de vuelta a Copacabana para un almuerzo final antes de emprender tu viaje de regreso en un bus Copacabana-La Paz o, si lo prefieres, continuar tu aventura hacia Puno en Perú.",
        accommodation: "No incluido",
        included_activities: "Viaje en bote comunitario de Isla de la Luna a Yampupata, Transporte de Yampupata a Copacabana, Viaje en bus de Copacabana a La Paz o Puno",
        meals: "Desayuno, Almuerzo",
        optional_activities: &[],
        special_info: "",
    },
];
