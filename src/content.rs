// src/content.rs
//
// Static marketing copy. Kept out of the GUI so the CLI and tests can see it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryTile {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub text: &'static str,
    pub avatar: &'static str,
}

pub const BRAND: (&str, &str) = ("Comparador", "Inteligente");
pub const SEARCH_HINT: &str = "Busca tu producto…";

pub const HERO_TITLE: &str = "Encuentra hoy la mejor oferta y ahorra hasta un 50%";
pub const HERO_SUBTITLE: &str =
    "Compara precios en segundos, compra seguro y gana recompensas. Miles de usuarios ya ahorran con nosotros.";
pub const HERO_CTA: &str = "¡Ver Ofertas Ahora!";

pub const TRUST_BADGES: [&str; 3] = [
    "✅ 100% seguro",
    "🔄 Actualización diaria de precios",
    "⭐ Miles de usuarios satisfechos",
];

pub const CATEGORIES: [CategoryTile; 5] = [
    CategoryTile { name: "Electrónica", icon: "💻" },
    CategoryTile { name: "Cursos", icon: "🎓" },
    CategoryTile { name: "Hogar", icon: "🏠" },
    CategoryTile { name: "Oficina", icon: "🖨️" },
    CategoryTile { name: "Gaming", icon: "🎮" },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Ana G.",
        text: "¡Encontré el mejor precio y el envío fue rapidísimo! Repetiré sin duda.",
        avatar: "https://randomuser.me/api/portraits/women/44.jpg",
    },
    Testimonial {
        name: "Carlos M.",
        text: "Me ahorré más de $500 en mi último curso. Súper recomendado.",
        avatar: "https://randomuser.me/api/portraits/men/32.jpg",
    },
    Testimonial {
        name: "Lucía P.",
        text: "La web es fácil de usar y siempre tiene ofertas frescas.",
        avatar: "https://randomuser.me/api/portraits/women/68.jpg",
    },
];

// Section headings
pub const FEATURED_HEADING: &str = "Ofertas Destacadas";
pub const POPULAR_PRODUCTS_HEADING: &str = "Lo Más Popular en Amazon";
pub const POPULAR_COURSES_HEADING: &str = "Cursos Más Solicitados";
pub const CATEGORIES_HEADING: &str = "Explora por Categoría";
pub const TESTIMONIALS_HEADING: &str = "Lo que dicen nuestros usuarios";
pub const SEE_ALL: &str = "Ver todos ›";

pub const FEATURED_CTA: &str = "Ver Oferta";
pub const DEAL_BADGE: &str = "¡Oferta!";
pub const AFFILIATE_CAPTION: &str = "Enlace de afiliado";
pub const EMPTY_LIST: &str = "No hay resultados para estos filtros.";
