// src/locale/industry.rs

//! Industry category keyword sets.

/// Weighted keyword sets per industry category, English plus commonly
/// co-occurring translations.
///
/// Order is fixed: the classifier breaks score ties by the first category
/// in this table.
pub const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Technology",
        &[
            "software", "saas", "platform", "digital", "tech", "developer", "api",
            "cloud", "cyber", "artificial intelligence", "machine learning",
            "startup", "algorithm", "automation", "devops", "blockchain",
            "logiciel", "numérique", "développeur", "technologie", "informatique",
            "entwickler", "softwareentwicklung", "tecnología", "desarrollo",
            "tecnologia", "sviluppo", "technologie", "ontwikkeling",
            "программное обеспечение", "разработка", "ソフトウェア", "技術", "软件",
        ],
    ),
    (
        "Healthcare",
        &[
            "health", "medical", "hospital", "clinic", "doctor", "patient",
            "pharmaceutical", "pharma", "biotech", "therapy", "diagnostic",
            "wellness", "healthcare", "surgery", "nurse", "medicine",
            "santé", "médical", "hôpital", "clinique", "médecin", "pharmacie",
            "gesundheit", "medizin", "krankenhaus", "arzt", "klinik",
            "salud", "médico", "clínica", "farmacia",
            "здоровье", "медицина", "больница", "医療", "健康", "医院",
        ],
    ),
    (
        "Finance",
        &[
            "bank", "finance", "investment", "insurance", "trading", "fintech",
            "credit", "loan", "mortgage", "wealth", "asset", "fund", "capital",
            "accounting", "audit", "tax", "payment", "crypto",
            "banque", "assurance", "investissement", "crédit", "prêt", "comptabilité",
            "finanzierung", "versicherung", "investition", "kredit", "steuer",
            "banca", "finanza", "assicurazione", "banco", "inversión", "seguro",
            "банк", "финансы", "страхование", "金融", "銀行", "保险",
        ],
    ),
    (
        "Legal",
        &[
            "lawyer", "attorney", "legal", "litigation", "counsel",
            "solicitor", "barrister", "notary", "compliance", "patent",
            "avocat", "juridique", "notaire", "droit",
            "rechtsanwalt", "anwalt", "recht", "kanzlei", "notar",
            "abogado", "derecho", "jurídico", "avvocato", "legale",
            "адвокат", "юридический", "法律", "弁護士", "律师",
        ],
    ),
    (
        "Education",
        &[
            "education", "university", "school", "college", "academy", "training",
            "learning", "course", "student", "teacher", "professor", "curriculum",
            "éducation", "université", "école", "formation", "enseignement",
            "bildung", "universität", "schule", "ausbildung", "hochschule",
            "educación", "universidad", "escuela", "educazione", "università",
            "образование", "университет", "教育", "大学", "学校",
        ],
    ),
    (
        "Retail",
        &[
            "shop", "store", "retail", "ecommerce", "e-commerce",
            "product", "catalog", "shopping", "order", "cart", "delivery",
            "boutique", "magasin", "vente", "achat", "commerce", "produit",
            "geschäft", "laden", "verkauf", "produkt", "handel",
            "tienda", "compra", "venta", "negozio", "vendita", "acquisto",
            "магазин", "покупка", "товар", "店舗", "ショップ", "商店",
        ],
    ),
    (
        "Manufacturing",
        &[
            "manufacturing", "factory", "production", "industrial", "machinery",
            "assembly", "supply chain", "engineering",
            "fabrication", "usine", "industriel", "ingénierie",
            "fertigung", "fabrik", "herstellung", "industrie", "produktion",
            "fabricación", "fábrica", "producción", "fabbrica", "produzione",
            "производство", "завод", "製造", "工場", "制造",
        ],
    ),
    (
        "Real Estate",
        &[
            "real estate", "property", "realty", "apartment", "housing", "rent",
            "lease", "building", "construction", "broker",
            "immobilier", "propriété", "appartement", "logement", "location",
            "immobilien", "wohnung", "miete", "grundstück", "makler",
            "inmobiliaria", "propiedad", "vivienda", "immobiliare", "proprietà",
            "недвижимость", "квартира", "不動産", "物件", "房地产",
        ],
    ),
    (
        "Hospitality",
        &[
            "hotel", "restaurant", "tourism", "travel", "booking", "resort",
            "accommodation", "hospitality", "catering", "guest", "reservation",
            "hôtel", "tourisme", "voyage", "réservation", "hébergement",
            "gastgewerbe", "tourismus", "reise", "buchung", "unterkunft",
            "turismo", "viaje", "reserva", "alojamiento", "albergo",
            "гостиница", "туризм", "ホテル", "旅行", "酒店",
        ],
    ),
    (
        "Media",
        &[
            "media", "news", "publish", "press", "journalist", "magazine",
            "broadcast", "editorial", "advertising", "marketing",
            "médias", "presse", "journaliste", "publicité", "rédaction",
            "medien", "verlag", "werbung", "zeitung",
            "medios", "prensa", "periodismo", "publicidad", "stampa",
            "сми", "пресса", "メディア", "報道", "媒体",
        ],
    ),
    (
        "Food",
        &[
            "food", "beverage", "nutrition", "organic", "recipe", "ingredient",
            "bakery", "brewery", "wine", "coffee", "frozen", "dairy",
            "alimentation", "nourriture", "boulangerie", "vin", "brasserie",
            "lebensmittel", "nahrung", "bäckerei", "brauerei", "wein",
            "alimentos", "comida", "panadería", "alimentare", "cibo",
            "еда", "питание", "食品", "飲料",
        ],
    ),
    (
        "Automotive",
        &[
            "automotive", "vehicle", "automobile", "dealer",
            "repair", "garage", "fleet", "electric vehicle",
            "véhicule", "voiture", "concessionnaire",
            "automobil", "fahrzeug", "werkstatt", "händler",
            "automóvil", "vehículo", "coche", "concesionario",
            "автомобиль", "транспорт", "自動車", "車", "汽车",
        ],
    ),
    (
        "Energy",
        &[
            "energy", "solar", "wind", "renewable", "power", "electricity",
            "oil", "gas", "petroleum", "nuclear", "sustainable",
            "énergie", "solaire", "éolien", "renouvelable", "électricité",
            "energie", "erneuerbar", "strom", "windkraft",
            "energía", "renovable", "electricidad", "energia", "rinnovabile",
            "энергия", "электричество", "エネルギー", "太陽光", "能源",
        ],
    ),
    (
        "Construction",
        &[
            "construction", "builder", "architect", "contractor", "renovation",
            "plumbing", "electrical", "roofing", "concrete", "structural",
            "bâtiment", "architecte", "entrepreneur", "rénovation",
            "bau", "bauunternehmen", "architekt", "sanierung", "renovierung",
            "construcción", "constructor", "arquitecto", "costruzione", "edilizia",
            "строительство", "архитектор", "建設", "建築", "建筑",
        ],
    ),
    (
        "Consulting",
        &[
            "consulting", "consultant", "advisory", "strategy", "management",
            "conseil", "stratégie", "gestion", "cabinet",
            "beratung", "berater", "unternehmensberatung",
            "consultoría", "asesoría", "consulenza", "strategia",
            "консалтинг", "консультант", "コンサルティング", "咨询",
        ],
    ),
    (
        "Logistics",
        &[
            "logistics", "shipping", "freight", "transport", "warehouse",
            "supply chain", "courier", "distribution", "cargo",
            "logistique", "fret", "entrepôt", "livraison",
            "logistik", "spedition", "lager", "versand", "fracht",
            "logística", "transporte", "almacén", "logistica", "trasporto",
            "логистика", "транспорт", "物流", "運送",
        ],
    ),
    (
        "Agriculture",
        &[
            "agriculture", "farm", "crop", "livestock", "harvest", "seed",
            "organic farming", "irrigation", "agri", "agronomist",
            "ferme", "culture", "élevage", "récolte",
            "landwirtschaft", "bauernhof", "ernte", "anbau",
            "agricultura", "granja", "cosecha", "agricoltura", "fattoria",
            "сельское хозяйство", "ферма", "農業", "農場", "农业",
        ],
    ),
    (
        "Telecom",
        &[
            "telecom", "telecommunications", "network", "wireless",
            "broadband", "fiber", "satellite", "5g", "carrier", "isp",
            "télécommunications", "réseau", "fibre", "opérateur",
            "telekommunikation", "netzwerk", "mobilfunk", "breitband",
            "telecomunicaciones", "red", "telecomunicazioni", "rete",
            "телекоммуникации", "сеть", "通信", "テレコム", "电信",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        assert_eq!(INDUSTRY_KEYWORDS.len(), 18);
        for (category, keywords) in INDUSTRY_KEYWORDS {
            assert!(!category.is_empty());
            assert!(!keywords.is_empty(), "{category} has no keywords");
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for (_, keywords) in INDUSTRY_KEYWORDS {
            for kw in *keywords {
                assert_eq!(*kw, kw.to_lowercase());
            }
        }
    }
}
