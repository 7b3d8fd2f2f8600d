// src/locale/size.rs

//! Employee-count phrase patterns and qualitative size keywords.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::SizeBucket;

/// Employee-count capture patterns across ~20 languages.
///
/// Priority order is fixed: the estimator returns on the first pattern
/// that matches.
const COUNT_PATTERNS: &[&str] = &[
    // English
    r"(?i)(\d[\d,\.]*)\s*(?:\+\s*)?(?:employees?|team\s*members?|staff|workers?|people|associates)",
    r"(?i)(?:team|staff|workforce)\s+(?:of\s+)?(\d[\d,\.]*)",
    r"(?i)(?:over|more\s+than|approximately|about|circa)\s+(\d[\d,\.]*)\s*(?:employees?|people|staff)",
    // French
    r"(?i)(\d[\d,\.]*)\s*(?:collaborateurs?|salariés?|employés?|personnes)",
    r"(?i)(?:effectif|équipe)\s+(?:de\s+)?(\d[\d,\.]*)",
    // German
    r"(?i)(\d[\d,\.]*)\s*(?:Mitarbeiter(?:innen)?|Beschäftigte|Angestellte)",
    r"(?i)(?:über|mehr\s+als|rund|etwa|circa)\s+(\d[\d,\.]*)\s*(?:Mitarbeiter|Beschäftigte)",
    // Spanish
    r"(?i)(\d[\d,\.]*)\s*(?:empleados?|trabajadores?|colaboradores?)",
    // Italian
    r"(?i)(\d[\d,\.]*)\s*(?:dipendenti|collaboratori|lavoratori)",
    // Portuguese
    r"(?i)(\d[\d,\.]*)\s*(?:funcionários|colaboradores|empregados)",
    // Dutch
    r"(?i)(\d[\d,\.]*)\s*(?:medewerkers?|werknemers?)",
    // Polish
    r"(?i)(\d[\d,\.]*)\s*(?:pracowników|osób|zatrudnionych)",
    // Czech
    r"(?i)(\d[\d,\.]*)\s*(?:zaměstnanců|pracovníků)",
    // Russian
    r"(?i)(\d[\d,\.]*)\s*(?:сотрудников|работников|человек)",
    // Turkish
    r"(?i)(\d[\d,\.]*)\s*(?:çalışan|personel|kişi)",
    // Japanese
    r"(?i)(?:従業員|社員|スタッフ)\s*[:：]?\s*(?:約\s*)?(\d[\d,\.]*)\s*(?:名|人)",
    // Chinese
    r"(?i)(?:员工|雇员|职员)\s*[:：]?\s*(?:约\s*)?(\d[\d,\.]*)\s*(?:人|名|位)?",
    // Korean
    r"(?i)(?:직원|종업원)\s*[:：]?\s*(?:약\s*)?(\d[\d,\.]*)\s*(?:명|인)?",
    // Arabic
    r"(?i)(\d[\d,\.]*)\s*(?:موظف|عامل)",
    // Swedish
    r"(?i)(\d[\d,\.]*)\s*(?:anställda|medarbetare)",
    // Norwegian / Danish
    r"(?i)(\d[\d,\.]*)\s*(?:ansatte|medarbejdere)",
    // Finnish
    r"(?i)(\d[\d,\.]*)\s*(?:työntekijää|henkilöä)",
    // Romanian
    r"(?i)(\d[\d,\.]*)\s*(?:angajați|angajati|salariați)",
    // Hungarian
    r"(?i)(\d[\d,\.]*)\s*(?:alkalmazott|munkatárs|dolgozó)",
    // Thai
    r"(?i)(?:พนักงาน)\s*(\d[\d,\.]*)\s*(?:คน)?",
    // Vietnamese
    r"(?i)(\d[\d,\.]*)\s*(?:nhân viên|người lao động)",
    // Hindi
    r"(?i)(\d[\d,\.]*)\s*(?:कर्मचारी|कर्मचारियों)",
    // Indonesian
    r"(?i)(\d[\d,\.]*)\s*(?:karyawan|pegawai|pekerja)",
];

/// Compiled employee-count patterns in priority order.
pub static SIZE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    COUNT_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("size pattern must compile"))
        .collect()
});

/// Qualitative size keywords per bucket, scanned in this order when no
/// explicit count is found.
pub const SIZE_KEYWORDS: &[(SizeBucket, &[&str])] = &[
    (
        SizeBucket::Micro,
        &[
            "freelance", "freelancer", "solopreneur", "indépendant", "selbstständig",
            "autónomo", "libero professionista", "zzp", "one-man", "solo",
        ],
    ),
    (
        SizeBucket::Startup,
        &[
            "startup", "start-up", "early stage", "seed", "pre-seed",
            "incubator", "accelerator", "jeune entreprise",
        ],
    ),
    (
        SizeBucket::Small,
        &[
            "small business", "sme", "pme", "kmu", "pyme", "pmi", "tpe",
            "klein", "pequeña", "piccola", "petite entreprise", "msp",
        ],
    ),
    (
        SizeBucket::Medium,
        &[
            "mid-size", "midsize", "medium", "eti", "mittelstand",
            "mediana empresa", "moyenne entreprise", "middelgroot",
        ],
    ),
    (
        SizeBucket::Large,
        &[
            "enterprise", "corporation", "multinational", "fortune 500",
            "fortune 1000", "global leader", "leader mondial", "weltmarktführer",
            "large enterprise", "grande entreprise", "großunternehmen", "koncern",
        ],
    ),
];
