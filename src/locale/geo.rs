// src/locale/geo.rs

//! City, TLD and postal-code country tables.

use std::sync::LazyLock;

use regex::Regex;

/// Major city names mapped to their country code.
///
/// Order is fixed: the address extractor's fallback pass adopts the first
/// city in this table that appears anywhere in a page.
pub const MAJOR_CITIES: &[(&str, &str)] = &[
    // Europe
    ("paris", "FR"),
    ("lyon", "FR"),
    ("marseille", "FR"),
    ("toulouse", "FR"),
    ("bordeaux", "FR"),
    ("lille", "FR"),
    ("nantes", "FR"),
    ("strasbourg", "FR"),
    ("nice", "FR"),
    ("montpellier", "FR"),
    ("berlin", "DE"),
    ("munich", "DE"),
    ("münchen", "DE"),
    ("hamburg", "DE"),
    ("frankfurt", "DE"),
    ("köln", "DE"),
    ("cologne", "DE"),
    ("düsseldorf", "DE"),
    ("stuttgart", "DE"),
    ("leipzig", "DE"),
    ("london", "GB"),
    ("manchester", "GB"),
    ("birmingham", "GB"),
    ("edinburgh", "GB"),
    ("bristol", "GB"),
    ("madrid", "ES"),
    ("barcelona", "ES"),
    ("valencia", "ES"),
    ("sevilla", "ES"),
    ("bilbao", "ES"),
    ("roma", "IT"),
    ("rome", "IT"),
    ("milano", "IT"),
    ("milan", "IT"),
    ("torino", "IT"),
    ("napoli", "IT"),
    ("amsterdam", "NL"),
    ("rotterdam", "NL"),
    ("den haag", "NL"),
    ("utrecht", "NL"),
    ("eindhoven", "NL"),
    ("bruxelles", "BE"),
    ("brussels", "BE"),
    ("antwerpen", "BE"),
    ("gent", "BE"),
    ("liège", "BE"),
    ("lisboa", "PT"),
    ("lisbon", "PT"),
    ("porto", "PT"),
    ("warszawa", "PL"),
    ("warsaw", "PL"),
    ("kraków", "PL"),
    ("krakow", "PL"),
    ("wrocław", "PL"),
    ("praha", "CZ"),
    ("prague", "CZ"),
    ("brno", "CZ"),
    ("wien", "AT"),
    ("vienna", "AT"),
    ("graz", "AT"),
    ("salzburg", "AT"),
    ("zürich", "CH"),
    ("zurich", "CH"),
    ("genève", "CH"),
    ("geneva", "CH"),
    ("bern", "CH"),
    ("basel", "CH"),
    ("stockholm", "SE"),
    ("göteborg", "SE"),
    ("malmö", "SE"),
    ("oslo", "NO"),
    ("bergen", "NO"),
    ("trondheim", "NO"),
    ("copenhagen", "DK"),
    ("københavn", "DK"),
    ("aarhus", "DK"),
    ("helsinki", "FI"),
    ("espoo", "FI"),
    ("tampere", "FI"),
    ("dublin", "IE"),
    ("cork", "IE"),
    ("budapest", "HU"),
    ("debrecen", "HU"),
    ("bucharest", "RO"),
    ("bucurești", "RO"),
    ("cluj", "RO"),
    ("sofia", "BG"),
    ("plovdiv", "BG"),
    ("zagreb", "HR"),
    ("split", "HR"),
    ("athens", "GR"),
    ("αθήνα", "GR"),
    ("thessaloniki", "GR"),
    ("istanbul", "TR"),
    ("ankara", "TR"),
    ("izmir", "TR"),
    ("kyiv", "UA"),
    ("kiev", "UA"),
    ("lviv", "UA"),
    ("moscow", "RU"),
    ("москва", "RU"),
    ("saint petersburg", "RU"),
    // Americas
    ("new york", "US"),
    ("los angeles", "US"),
    ("chicago", "US"),
    ("san francisco", "US"),
    ("houston", "US"),
    ("seattle", "US"),
    ("boston", "US"),
    ("denver", "US"),
    ("austin", "US"),
    ("miami", "US"),
    ("dallas", "US"),
    ("atlanta", "US"),
    ("washington", "US"),
    ("philadelphia", "US"),
    ("toronto", "CA"),
    ("vancouver", "CA"),
    ("montreal", "CA"),
    ("montréal", "CA"),
    ("ottawa", "CA"),
    ("são paulo", "BR"),
    ("sao paulo", "BR"),
    ("rio de janeiro", "BR"),
    ("mexico city", "MX"),
    ("ciudad de méxico", "MX"),
    ("guadalajara", "MX"),
    ("buenos aires", "AR"),
    ("santiago", "CL"),
    ("bogotá", "CO"),
    ("bogota", "CO"),
    ("lima", "PE"),
    // Asia
    ("tokyo", "JP"),
    ("東京", "JP"),
    ("osaka", "JP"),
    ("大阪", "JP"),
    ("seoul", "KR"),
    ("서울", "KR"),
    ("busan", "KR"),
    ("beijing", "CN"),
    ("北京", "CN"),
    ("shanghai", "CN"),
    ("上海", "CN"),
    ("shenzhen", "CN"),
    ("mumbai", "IN"),
    ("delhi", "IN"),
    ("bangalore", "IN"),
    ("bengaluru", "IN"),
    ("hyderabad", "IN"),
    ("singapore", "SG"),
    ("hong kong", "HK"),
    ("bangkok", "TH"),
    ("jakarta", "ID"),
    ("kuala lumpur", "MY"),
    ("taipei", "TW"),
    ("dubai", "AE"),
    ("abu dhabi", "AE"),
    ("tel aviv", "IL"),
    ("riyadh", "SA"),
    ("cairo", "EG"),
    ("nairobi", "KE"),
    ("ho chi minh", "VN"),
    ("hanoi", "VN"),
    ("manila", "PH"),
    // Oceania
    ("sydney", "AU"),
    ("melbourne", "AU"),
    ("brisbane", "AU"),
    ("perth", "AU"),
    ("auckland", "NZ"),
    ("wellington", "NZ"),
    // Africa
    ("johannesburg", "ZA"),
    ("cape town", "ZA"),
    ("lagos", "NG"),
    ("accra", "GH"),
];

/// Country-code TLDs mapped to ISO country codes.
pub const TLD_COUNTRY: &[(&str, &str)] = &[
    ("fr", "FR"),
    ("de", "DE"),
    ("it", "IT"),
    ("es", "ES"),
    ("nl", "NL"),
    ("be", "BE"),
    ("ch", "CH"),
    ("at", "AT"),
    ("pl", "PL"),
    ("pt", "PT"),
    ("se", "SE"),
    ("no", "NO"),
    ("dk", "DK"),
    ("fi", "FI"),
    ("cz", "CZ"),
    ("sk", "SK"),
    ("ro", "RO"),
    ("hu", "HU"),
    ("bg", "BG"),
    ("hr", "HR"),
    ("si", "SI"),
    ("lt", "LT"),
    ("lv", "LV"),
    ("ee", "EE"),
    ("ie", "IE"),
    ("lu", "LU"),
    ("mt", "MT"),
    ("cy", "CY"),
    ("gr", "GR"),
    ("uk", "GB"),
    ("jp", "JP"),
    ("kr", "KR"),
    ("cn", "CN"),
    ("tw", "TW"),
    ("hk", "HK"),
    ("in", "IN"),
    ("ru", "RU"),
    ("ua", "UA"),
    ("br", "BR"),
    ("mx", "MX"),
    ("ar", "AR"),
    ("cl", "CL"),
    ("co", "CO"),
    ("ca", "CA"),
    ("au", "AU"),
    ("nz", "NZ"),
    ("za", "ZA"),
    ("ng", "NG"),
    ("ke", "KE"),
    ("eg", "EG"),
    ("il", "IL"),
    ("ae", "AE"),
    ("sa", "SA"),
    ("tr", "TR"),
    ("th", "TH"),
    ("vn", "VN"),
    ("ph", "PH"),
    ("id", "ID"),
    ("my", "MY"),
    ("sg", "SG"),
    ("pe", "PE"),
];

/// Two-level country suffixes under generic TLDs, checked before the
/// plain TLD.
pub const COMPOUND_TLDS: &[(&str, &str)] = &[
    ("co.uk", "GB"),
    ("org.uk", "GB"),
    ("co.nz", "NZ"),
    ("com.au", "AU"),
    ("co.za", "ZA"),
    ("com.br", "BR"),
    ("co.jp", "JP"),
    ("co.kr", "KR"),
    ("co.in", "IN"),
];

/// Postal-code shapes per country, used to sanity-check address snippets.
static POSTAL_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        // Europe
        ("FR", r"\b(\d{5})\s+([A-ZÀ-Ÿ][a-zà-ÿ\-]+(?:\s+[A-ZÀ-Ÿ][a-zà-ÿ\-]+){0,3})\b"),
        ("DE", r"\b(\d{5})\s+([A-ZÄÖÜß][a-zäöüß\-]+(?:\s+[a-zäöüß]+)*)\b"),
        ("IT", r"\b(\d{5})\s+([A-ZÀ-Ÿ][a-zà-ÿ\-]+(?:\s+[A-ZÀ-Ÿ][a-zà-ÿ\-]+){0,2})\b"),
        ("ES", r"\b(\d{5})\s+([A-ZÁ-Ú][a-záéíóú\-]+(?:\s+de\s+)?(?:[a-záéíóú]+)?)\b"),
        ("PT", r"\b(\d{4}[\-]\d{3})\s+([A-ZÀ-Ÿ][a-zà-ÿ\-]+(?:\s+[a-zà-ÿ]+)*)\b"),
        ("NL", r"\b(\d{4}\s?[A-Z]{2})\s+([A-Z][a-z\-]+(?:\s+[a-z]+)*)\b"),
        ("BE", r"\b(\d{4})\s+([A-ZÀ-Ÿ][a-zà-ÿ\-]+(?:\s+[a-zà-ÿ]+)*)\b"),
        ("AT", r"\b(\d{4})\s+([A-ZÄÖÜß][a-zäöüß\-]+)\b"),
        ("CH", r"\b(\d{4})\s+([A-ZÀ-Ÿ][a-zà-ÿ\-]+(?:\s+[a-zà-ÿ]+)*)\b"),
        ("PL", r"\b(\d{2}[\-]\d{3})\s+([A-ZĄĆĘŁŃÓŚŹŻ][a-ząćęłńóśźż\-]+)\b"),
        ("CZ", r"\b(\d{3}\s?\d{2})\s+([A-ZÁ-Ž][a-zá-ž\-]+)\b"),
        ("SE", r"\b(\d{3}\s?\d{2})\s+([A-ZÅÄÖ][a-zåäö\-]+)\b"),
        ("NO", r"\b(\d{4})\s+([A-ZÅÆØ][a-zåæø\-]+)\b"),
        ("DK", r"\b(\d{4})\s+([A-ZÅÆØ][a-zåæø\-]+)\b"),
        ("FI", r"\b(\d{5})\s+([A-ZÅÄÖ][a-zåäö\-]+)\b"),
        ("RO", r"\b(\d{6})\s+([A-ZĂÂÎȘȚă][a-zăâîșț\-]+)\b"),
        ("HU", r"\b(\d{4})\s+([A-ZÁÉÍÓÖŐÚÜŰ][a-záéíóöőúüű\-]+)\b"),
        // UK
        ("GB", r"\b([A-Z]{1,2}\d[A-Z\d]?\s*\d[A-Z]{2})\b"),
        // US / Canada
        ("US", r"\b([A-Z]{2})\s+(\d{5}(?:[\-]\d{4})?)\b"),
        ("CA", r"\b([A-Z]\d[A-Z]\s*\d[A-Z]\d)\b"),
        // Asia
        ("JP", r"\b(\d{3}[\-]\d{4})\b"),
        ("KR", r"\b(\d{5})\b"),
        ("CN", r"\b(\d{6})\b"),
        ("IN", r"\b(\d{6})\b"),
        // Others
        ("BR", r"\b(\d{5}[\-]\d{3})\b"),
        ("AU", r"\b([A-Z]{2,3})\s+(\d{4})\b"),
        ("RU", r"\b(\d{6})\b"),
        ("TR", r"\b(\d{5})\b"),
    ]
    .into_iter()
    .map(|(cc, pattern)| {
        (
            cc,
            Regex::new(pattern).expect("postal pattern must compile"),
        )
    })
    .collect()
});

/// Look up the postal-code pattern for a country, if one is known.
pub fn postal_pattern(country: &str) -> Option<&'static Regex> {
    POSTAL_PATTERNS
        .iter()
        .find(|(cc, _)| *cc == country)
        .map(|(_, re)| re)
}

/// Resolve a country code from a domain's TLD.
///
/// Compound suffixes (`co.uk`, `com.br`, ...) are checked before the plain
/// top-level domain. Empty string when nothing matches.
pub fn country_from_domain(domain: &str) -> &'static str {
    for (suffix, cc) in COMPOUND_TLDS {
        if domain.len() > suffix.len()
            && domain.ends_with(suffix)
            && domain.as_bytes()[domain.len() - suffix.len() - 1] == b'.'
        {
            return cc;
        }
    }
    let tld = domain.rsplit('.').next().unwrap_or("");
    TLD_COUNTRY
        .iter()
        .find(|(t, _)| *t == tld)
        .map(|(_, cc)| *cc)
        .unwrap_or("")
}
