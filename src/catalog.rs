//! Static medication catalog and the free-text symptom matcher.
//!
//! The catalog is the single source of truth for medication data: the
//! free-text matcher scans it directly, and `db::seed` loads it into the
//! symptom/medication tables used by the checkbox flow.

use serde::Serialize;

/// One medication with the symptoms it treats.
///
/// `symptoms` are lowercase tags matched by substring containment
/// against a free-text query. They are never exposed in responses.
pub struct CatalogEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub dosage: &'static str,
    pub warnings: &'static str,
    pub symptoms: &'static [&'static str],
}

/// Medication fields exposed to clients (tags omitted).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicationSuggestion {
    pub name: String,
    pub description: String,
    pub dosage: String,
    pub warnings: String,
}

impl From<&CatalogEntry> for MedicationSuggestion {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            dosage: entry.dosage.to_string(),
            warnings: entry.warnings.to_string(),
        }
    }
}

/// Match a free-text query against the catalog.
///
/// An entry matches when any of its symptom tags appears as a substring
/// of the lowercased query. Substring (not token) containment is the
/// compatibility contract: "headache and fever" matches both tags, but
/// "tear infection" also matches "ear infection". Empty query matches
/// nothing. Results keep catalog declaration order.
pub fn match_query(query: &str) -> Vec<MedicationSuggestion> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    CATALOG
        .iter()
        .filter(|entry| entry.symptoms.iter().any(|tag| query.contains(tag)))
        .map(MedicationSuggestion::from)
        .collect()
}

/// Category a symptom tag is filed under on the symptom-checker page.
pub fn symptom_category(tag: &str) -> &'static str {
    match tag {
        "headache" | "body pain" | "toothache" | "muscle pain" | "menstrual pain"
        | "back pain" | "menstrual cramps" | "neck pain" | "muscle spasm" | "nerve pain"
        | "fibromyalgia" | "gout" | "shingles pain" | "diabetic neuropathy" | "arthritis"
        | "inflammation" => "pain",
        "fever" => "fever",
        "cold" | "flu" | "cold symptoms" | "sneezing" | "runny nose" => "cold & flu",
        "allergy" | "allergies" | "seasonal allergies" | "hay fever" | "itchy eyes"
        | "hives" | "itching" | "severe allergies" | "skin rash" | "skin conditions" => {
            "allergy"
        }
        "acidity" | "heartburn" | "stomach pain" | "acid reflux" | "indigestion" | "ulcer"
        | "stomach ulcers" | "esophagitis" => "digestive",
        "bacterial infection" | "strep throat" | "ear infection" | "sinus infection"
        | "dental infection" | "stomach infection" | "fungal infection" | "yeast infection"
        | "thrush" => "infection",
        "asthma" | "wheezing" | "shortness of breath" | "chest tightness"
        | "breathing problems" => "respiratory",
        "depression" | "anxiety" | "panic attacks" | "obsessive thoughts" => "mental health",
        "insomnia" => "sleep",
        "diabetes" | "high blood sugar" | "excessive thirst" | "frequent urination" => {
            "metabolic"
        }
        "nausea" | "vomiting" | "motion sickness" | "chemotherapy nausea" => "nausea",
        "epilepsy" => "neurological",
        _ => "general",
    }
}

pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Paracetamol",
        description: "Common pain reliever and fever reducer",
        dosage: "500-1000mg every 4-6 hours",
        warnings: "Do not exceed 4000mg per day",
        symptoms: &["headache", "fever", "body pain", "cold", "flu", "toothache"],
    },
    CatalogEntry {
        name: "Ibuprofen",
        description: "Anti-inflammatory pain reliever",
        dosage: "200-400mg every 4-6 hours",
        warnings: "Take with food. Avoid if you have stomach problems",
        symptoms: &[
            "headache",
            "fever",
            "inflammation",
            "arthritis",
            "muscle pain",
            "menstrual pain",
        ],
    },
    CatalogEntry {
        name: "Cetirizine",
        description: "Antihistamine for allergies",
        dosage: "10mg once daily",
        warnings: "May cause drowsiness",
        symptoms: &["allergy", "cold", "sneezing", "runny nose", "itchy eyes", "hay fever"],
    },
    CatalogEntry {
        name: "Omeprazole",
        description: "Reduces stomach acid production",
        dosage: "20mg once daily",
        warnings: "Take before meals",
        symptoms: &["acidity", "heartburn", "stomach pain", "acid reflux", "indigestion"],
    },
    CatalogEntry {
        name: "Amoxicillin",
        description: "Antibiotic for bacterial infections",
        dosage: "250-500mg three times daily",
        warnings: "Complete full course. May cause allergic reactions",
        symptoms: &["bacterial infection", "strep throat", "ear infection", "sinus infection"],
    },
    CatalogEntry {
        name: "Loratadine",
        description: "Non-drowsy antihistamine",
        dosage: "10mg once daily",
        warnings: "Avoid if allergic to antihistamines",
        symptoms: &["seasonal allergies", "hives", "skin rash", "itching"],
    },
    CatalogEntry {
        name: "Diphenhydramine",
        description: "Antihistamine for allergies and sleep",
        dosage: "25-50mg at bedtime",
        warnings: "Causes drowsiness. Do not drive",
        symptoms: &["insomnia", "allergies", "cold symptoms", "itching"],
    },
    CatalogEntry {
        name: "Naproxen",
        description: "Long-acting anti-inflammatory",
        dosage: "250-500mg twice daily",
        warnings: "Take with food. May cause stomach upset",
        symptoms: &["arthritis", "back pain", "menstrual cramps", "gout"],
    },
    CatalogEntry {
        name: "Ranitidine",
        description: "Reduces stomach acid",
        dosage: "150mg twice daily",
        warnings: "Take before meals",
        symptoms: &["ulcer", "acid reflux", "stomach pain", "heartburn"],
    },
    CatalogEntry {
        name: "Metformin",
        description: "Diabetes medication",
        dosage: "500-1000mg twice daily",
        warnings: "Take with meals. Monitor blood sugar",
        symptoms: &["diabetes", "high blood sugar", "excessive thirst", "frequent urination"],
    },
    CatalogEntry {
        name: "Sertraline",
        description: "Antidepressant medication",
        dosage: "50-200mg daily",
        warnings: "Do not stop abruptly. Consult doctor",
        symptoms: &["depression", "anxiety", "panic attacks", "obsessive thoughts"],
    },
    CatalogEntry {
        name: "Albuterol",
        description: "Bronchodilator for asthma",
        dosage: "2 puffs every 4-6 hours",
        warnings: "Do not exceed recommended dose",
        symptoms: &["asthma", "wheezing", "shortness of breath", "chest tightness"],
    },
    CatalogEntry {
        name: "Metronidazole",
        description: "Antibiotic for infections",
        dosage: "400mg three times daily",
        warnings: "Avoid alcohol. Complete full course",
        symptoms: &["bacterial infection", "dental infection", "stomach infection"],
    },
    CatalogEntry {
        name: "Fluconazole",
        description: "Antifungal medication",
        dosage: "150mg single dose",
        warnings: "May interact with other medications",
        symptoms: &["fungal infection", "yeast infection", "thrush"],
    },
    CatalogEntry {
        name: "Cyclobenzaprine",
        description: "Muscle relaxant",
        dosage: "5-10mg three times daily",
        warnings: "Causes drowsiness. Do not drive",
        symptoms: &["muscle spasm", "neck pain", "back pain", "fibromyalgia"],
    },
    CatalogEntry {
        name: "Ondansetron",
        description: "Anti-nausea medication",
        dosage: "4-8mg as needed",
        warnings: "May cause headache",
        symptoms: &["nausea", "vomiting", "motion sickness", "chemotherapy nausea"],
    },
    CatalogEntry {
        name: "Prednisone",
        description: "Corticosteroid for inflammation",
        dosage: "Varies by condition",
        warnings: "Do not stop abruptly. Follow taper schedule",
        symptoms: &["severe allergies", "asthma", "arthritis", "skin conditions"],
    },
    CatalogEntry {
        name: "Gabapentin",
        description: "Nerve pain medication",
        dosage: "300-600mg three times daily",
        warnings: "May cause dizziness",
        symptoms: &["nerve pain", "epilepsy", "shingles pain", "diabetic neuropathy"],
    },
    CatalogEntry {
        name: "Pantoprazole",
        description: "Proton pump inhibitor",
        dosage: "40mg daily",
        warnings: "Take on empty stomach",
        symptoms: &["acid reflux", "stomach ulcers", "heartburn", "esophagitis"],
    },
    CatalogEntry {
        name: "Montelukast",
        description: "Asthma and allergy medication",
        dosage: "10mg daily",
        warnings: "May cause mood changes",
        symptoms: &["asthma", "seasonal allergies", "hay fever", "breathing problems"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn names(results: &[MedicationSuggestion]) -> Vec<&str> {
        results.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn headache_and_fever_match_paracetamol_and_ibuprofen() {
        let results = match_query("i have a headache and fever");
        let names = names(&results);
        assert!(names.contains(&"Paracetamol"));
        assert!(names.contains(&"Ibuprofen"));
    }

    #[test]
    fn empty_query_matches_nothing() {
        assert!(match_query("").is_empty());
        assert!(match_query("   ").is_empty());
    }

    #[test]
    fn query_is_lowercase_normalized() {
        let results = match_query("Terrible HEADACHE since morning");
        assert!(names(&results).contains(&"Paracetamol"));
    }

    #[test]
    fn unmatched_query_returns_empty() {
        assert!(match_query("perfectly healthy today").is_empty());
    }

    #[test]
    fn substring_semantics_produce_known_false_positive() {
        // "tear infection" contains the tag "ear infection" — the documented
        // compatibility quirk of substring containment.
        let results = match_query("tear infection");
        assert!(names(&results).contains(&"Amoxicillin"));
    }

    #[test]
    fn results_keep_catalog_order() {
        let results = match_query("headache and heartburn");
        let names = names(&results);
        let paracetamol = names.iter().position(|n| *n == "Paracetamol").unwrap();
        let omeprazole = names.iter().position(|n| *n == "Omeprazole").unwrap();
        assert!(paracetamol < omeprazole);
    }

    #[test]
    fn suggestions_omit_symptom_tags() {
        let results = match_query("fever");
        let json = serde_json::to_value(&results[0]).unwrap();
        assert!(json.get("symptoms").is_none());
        assert!(json.get("name").is_some());
        assert!(json.get("dosage").is_some());
    }

    #[test]
    fn catalog_has_twenty_entries_with_unique_names() {
        assert_eq!(CATALOG.len(), 20);
        let mut names: Vec<_> = CATALOG.iter().map(|e| e.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 20);
    }

    #[test]
    fn every_tag_is_lowercase() {
        for entry in CATALOG {
            for tag in entry.symptoms {
                assert_eq!(*tag, tag.to_lowercase(), "tag not lowercase: {tag}");
            }
        }
    }

    #[test]
    fn every_tag_has_a_category() {
        for entry in CATALOG {
            for tag in entry.symptoms {
                assert!(!symptom_category(tag).is_empty());
            }
        }
    }
}
