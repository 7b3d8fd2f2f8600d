// src/locale/address.rs

//! Address-introducing label phrases.

use std::sync::LazyLock;

use regex::Regex;

/// Label phrase fragments, one group per phrase, covering the ~20 languages
/// that dominate the crawl. An optional separator follows the phrase.
const LABEL_FRAGMENTS: &[&str] = &[
    // English
    r"(?:head\s*(?:quarters?|office))",
    r"(?:registered\s+(?:office|address))",
    r"(?:corporate\s+(?:office|address|headquarters?))",
    r"(?:main\s+office)",
    r"(?:address)",
    r"(?:location)",
    r"(?:headquartered\s+(?:in|at))",
    r"(?:based\s+in)",
    r"(?:located\s+(?:at|in))",
    // French
    r"(?:si[èe]ge\s+social)",
    r"(?:adresse)",
    r"(?:adresse\s+du\s+si[èe]ge)",
    r"(?:si[èe]ge)",
    r"(?:situ[ée]\s+[àa])",
    r"(?:localis[ée]\s+[àa])",
    // German
    r"(?:hauptsitz)",
    r"(?:firmensitz)",
    r"(?:gesch[äa]ftsadresse)",
    r"(?:sitz\s+der\s+gesellschaft)",
    r"(?:anschrift)",
    r"(?:standort)",
    // Spanish
    r"(?:sede\s+(?:social|central|principal))",
    r"(?:direcci[oó]n)",
    r"(?:domicilio\s+social)",
    r"(?:oficina\s+(?:central|principal))",
    r"(?:ubicaci[oó]n)",
    // Italian
    r"(?:sede\s+(?:legale|operativa|sociale|centrale))",
    r"(?:indirizzo)",
    r"(?:domicilio)",
    // Portuguese
    r"(?:sede\s+(?:social|principal))",
    r"(?:endere[çc]o)",
    r"(?:morada)",
    r"(?:localiza[çc][aã]o)",
    // Dutch
    r"(?:hoofdkantoor)",
    r"(?:vestiging(?:sadres)?)",
    r"(?:adres)",
    r"(?:kantoor)",
    r"(?:gevestigd\s+(?:in|te))",
    // Polish
    r"(?:siedziba\s+(?:firmy|spółki|główna)?)",
    r"(?:adres(?:\s+siedziby)?)",
    r"(?:biuro\s+główne)",
    // Czech
    r"(?:s[ií]dlo\s+(?:firmy|společnosti)?)",
    r"(?:adresa)",
    // Russian
    r"(?:юридический\s+адрес)",
    r"(?:фактический\s+адрес)",
    r"(?:адрес)",
    r"(?:штаб-квартира)",
    r"(?:головной\s+офис)",
    // Turkish
    r"(?:merkez(?:\s+ofis)?)",
    r"(?:adres(?:i)?)",
    r"(?:genel\s+m[üu]d[üu]rl[üu]k)",
    // Swedish
    r"(?:huvudkontor)",
    r"(?:adress)",
    r"(?:kontor)",
    // Norwegian / Danish
    r"(?:hovedkontor)",
    r"(?:kontoradresse)",
    r"(?:adresse)",
    // Finnish
    r"(?:p[äa][äa]konttori)",
    r"(?:osoite)",
    r"(?:toimipaikka)",
    // Romanian
    r"(?:sediu(?:l)?\s+(?:social|central)?)",
    r"(?:adres[ăa])",
    // Hungarian
    r"(?:sz[ée]khely)",
    r"(?:c[ií]m)",
    r"(?:k[öo]zpont)",
    // Greek
    r"(?:έδρα)",
    r"(?:διεύθυνση)",
    // Croatian / Serbian
    r"(?:sjedi[šs]te)",
    r"(?:adresa)",
    // Bulgarian
    r"(?:седалище)",
    r"(?:адрес)",
    // Arabic
    r"(?:المقر\s*(?:الرئيسي)?)",
    r"(?:العنوان)",
    // Japanese
    r"(?:本社(?:所在地)?)",
    r"(?:住所)",
    r"(?:所在地)",
    // Chinese
    r"(?:总部(?:地址)?)",
    r"(?:公司地址)",
    r"(?:地址)",
    // Korean
    r"(?:본사(?:\s*주소)?)",
    r"(?:주소)",
    // Thai
    r"(?:สำนักงานใหญ่)",
    r"(?:ที่อยู่)",
    // Vietnamese
    r"(?:trụ\s+sở(?:\s+ch[ií]nh)?)",
    r"(?:địa\s+chỉ)",
    // Hindi
    r"(?:मुख्यालय)",
    r"(?:पता)",
    // Indonesian
    r"(?:kantor\s+pusat)",
    r"(?:alamat)",
    // Ukrainian
    r"(?:юридична\s+адреса)",
    r"(?:адреса)",
];

/// One alternation over every label phrase, with an optional `:`/dash
/// separator and surrounding whitespace consumed by the match.
pub static ADDRESS_LABELS: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?i)(?:{})\s*[:\-–—]?\s*",
        LABEL_FRAGMENTS.join("|")
    );
    Regex::new(&pattern).expect("address label pattern must compile")
});
