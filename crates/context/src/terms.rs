//! Context-aware encyclopedic search-term construction.
//!
//! The per-word table maps (word, topic) to an ordered list of lookup terms,
//! with an optional per-word default. Consumers try the terms in order and
//! stop at the first usable summary, so ordering encodes precision.

use crate::Topic;

struct WordTerms {
    word: &'static str,
    by_topic: &'static [(Topic, &'static [&'static str])],
    default: Option<&'static [&'static str]>,
}

const SEARCH_TABLE: &[WordTerms] = &[
    WordTerms {
        word: "python",
        by_topic: &[
            (Topic::Programming, &["Python (programming language)", "Python programming"]),
            (Topic::Biology, &["Python (genus)", "Pythonidae snake"]),
        ],
        default: None,
    },
    WordTerms {
        word: "java",
        by_topic: &[
            (Topic::Programming, &["Java (programming language)", "Java software platform"]),
        ],
        default: None,
    },
    WordTerms {
        word: "watch",
        by_topic: &[
            (Topic::Entertainment, &["Television", "Watching television", "Viewer (television)"]),
            (Topic::Observation, &["Observation", "Surveillance", "Security guard"]),
            (Topic::Timepiece, &["Watch", "Wristwatch", "Timepiece"]),
        ],
        default: None,
    },
    WordTerms {
        word: "run",
        by_topic: &[
            (Topic::Fitness, &["Running", "Jogging", "Exercise"]),
            (Topic::Programming, &["Execution (computing)", "Run command", "Computer program execution"]),
            (Topic::Business, &["Management", "Business operations", "Corporate governance"]),
            (Topic::Emotion, &["Crying", "Tears", "Weeping"]),
        ],
        default: None,
    },
    WordTerms {
        word: "ran",
        by_topic: &[
            (Topic::Fitness, &["Running", "Jogging", "Exercise"]),
            (Topic::Programming, &["Execution (computing)", "Run command", "Computer program execution"]),
            (Topic::Business, &["Management", "Business operations", "Corporate governance"]),
            (Topic::Emotion, &["Crying", "Tears", "Weeping"]),
        ],
        default: None,
    },
    WordTerms {
        word: "company",
        by_topic: &[
            (Topic::Business, &["Company", "Business organization", "Corporation"]),
            (Topic::TechCompany, &["Technology company", "Tech company"]),
        ],
        default: None,
    },
    WordTerms {
        word: "file",
        by_topic: &[
            (Topic::Computer, &["Computer file", "Digital file", "File (computing)"]),
            (Topic::Legal, &["Legal filing", "Court filing", "File (legal)"]),
            (Topic::Tools, &["File (tool)", "Hand file", "Metalworking file"]),
        ],
        default: None,
    },
    WordTerms {
        word: "mouse",
        by_topic: &[
            (Topic::Computer, &["Computer mouse", "Mouse (computing)", "Input device"]),
            (Topic::Biology, &["Mouse", "House mouse", "Mus musculus"]),
        ],
        default: None,
    },
    WordTerms {
        word: "spring",
        by_topic: &[
            (Topic::Season, &["Spring (season)", "Springtime", "Spring season"]),
            (Topic::Water, &["Spring (hydrology)", "Natural spring", "Water spring"]),
            (Topic::Mechanical, &["Spring (device)", "Coil spring", "Mechanical spring"]),
        ],
        default: None,
    },
    WordTerms {
        word: "crane",
        by_topic: &[
            (Topic::Construction, &["Crane (machine)", "Construction crane", "Tower crane"]),
            (Topic::Bird, &["Crane (bird)", "Gruidae", "Crane bird"]),
        ],
        default: None,
    },
    WordTerms {
        word: "charge",
        by_topic: &[
            (Topic::Legal, &["Criminal charge", "Legal charge", "Indictment"]),
            (Topic::Electrical, &["Battery charging", "Electric charge", "Charging battery"]),
            (Topic::Payment, &["Fee", "Service charge", "Price"]),
            (Topic::Military, &["Charge (warfare)", "Military charge", "Cavalry charge"]),
        ],
        default: None,
    },
    WordTerms {
        word: "note",
        by_topic: &[
            (Topic::Writing, &["Note (typography)", "Written note", "Memorandum"]),
            (Topic::Music, &["Musical note", "Note (music)", "Pitch (music)"]),
            (Topic::Currency, &["Banknote", "Currency note", "Paper money"]),
        ],
        default: None,
    },
    WordTerms {
        word: "plant",
        by_topic: &[
            (Topic::Industrial, &["Power plant", "Industrial plant", "Factory"]),
            (Topic::Botany, &["Plant", "Flowering plant", "Houseplant"]),
            (Topic::Spy, &["Sleeper agent", "Undercover agent", "Mole (espionage)"]),
        ],
        default: None,
    },
    WordTerms {
        word: "pitch",
        by_topic: &[
            (Topic::Sports, &["Pitch (baseball)", "Pitching (baseball)", "Bowling (cricket)"]),
            (Topic::Sales, &["Sales pitch", "Elevator pitch", "Business pitch"]),
            (Topic::Terrain, &["Pitch (sports field)", "Football pitch", "Playing field"]),
            (Topic::Music, &["Pitch (music)", "Audio frequency", "Sound pitch"]),
        ],
        default: None,
    },
    WordTerms {
        word: "class",
        by_topic: &[
            (Topic::Programming, &["Class (computer programming)", "Object-oriented programming class"]),
            (Topic::Education, &["Class (education)", "School class", "Classroom"]),
            (Topic::Social, &["Social class", "Class system", "Social stratification"]),
        ],
        default: None,
    },
    WordTerms {
        word: "bug",
        by_topic: &[
            (Topic::Programming, &["Software bug", "Bug (software)", "Programming error"]),
            (Topic::Insect, &["Insect", "Bug (insect)", "True bugs"]),
            (Topic::Biology, &["Insect", "Bug (insect)"]),
            (Topic::Surveillance, &["Covert listening device", "Wiretap", "Surveillance device"]),
        ],
        default: Some(&["Software bug"]),
    },
    WordTerms {
        word: "model",
        by_topic: &[
            (Topic::Programming, &["Machine learning model", "AI model", "Statistical model"]),
            (Topic::Fashion, &["Model (person)", "Fashion model", "Supermodel"]),
            (Topic::Product, &["Model (product)", "Product model", "Vehicle model"]),
        ],
        default: None,
    },
    WordTerms {
        word: "object",
        by_topic: &[
            (Topic::Programming, &["Object (computer science)", "Object-oriented programming"]),
        ],
        default: Some(&["Object (computer science)"]),
    },
    WordTerms {
        word: "function",
        by_topic: &[
            (Topic::Programming, &["Function (computer programming)", "Subroutine"]),
        ],
        default: Some(&["Function (computer programming)"]),
    },
    WordTerms {
        word: "method",
        by_topic: &[
            (Topic::Programming, &["Method (computer programming)", "Object-oriented method"]),
        ],
        default: Some(&["Method (computer programming)"]),
    },
    WordTerms {
        word: "variable",
        by_topic: &[
            (Topic::Programming, &["Variable (computer science)", "Programming variable"]),
        ],
        default: Some(&["Variable (computer science)"]),
    },
    WordTerms {
        word: "string",
        by_topic: &[
            (Topic::Programming, &["String (computer science)", "Character string"]),
            (Topic::Music, &["String instrument", "Guitar string"]),
        ],
        default: Some(&["String (computer science)"]),
    },
    WordTerms {
        word: "array",
        by_topic: &[
            (Topic::Programming, &["Array (data structure)", "Array data type"]),
        ],
        default: Some(&["Array (data structure)"]),
    },
    WordTerms {
        word: "loop",
        by_topic: &[
            (Topic::Programming, &["Loop (programming)", "Control flow loop"]),
        ],
        default: Some(&["Loop (programming)"]),
    },
    WordTerms {
        word: "inheritance",
        by_topic: &[
            (Topic::Programming, &["Inheritance (object-oriented programming)", "OOP inheritance"]),
        ],
        default: Some(&["Inheritance (object-oriented programming)"]),
    },
    WordTerms {
        word: "interface",
        by_topic: &[
            (Topic::Programming, &["Interface (computing)", "Protocol (object-oriented programming)"]),
        ],
        default: Some(&["Interface (computing)"]),
    },
    WordTerms {
        word: "module",
        by_topic: &[
            (Topic::Programming, &["Module (programming)", "Modular programming"]),
        ],
        default: Some(&["Module (programming)"]),
    },
    WordTerms {
        word: "package",
        by_topic: &[
            (Topic::Programming, &["Package (programming)", "Software package"]),
        ],
        default: Some(&["Package (programming)"]),
    },
    WordTerms {
        word: "exception",
        by_topic: &[
            (Topic::Programming, &["Exception handling", "Exception (computer programming)"]),
        ],
        default: Some(&["Exception handling"]),
    },
    WordTerms {
        word: "constructor",
        by_topic: &[
            (Topic::Programming, &["Constructor (object-oriented programming)", "Class constructor"]),
        ],
        default: Some(&["Constructor (object-oriented programming)"]),
    },
    WordTerms {
        word: "instance",
        by_topic: &[
            (Topic::Programming, &["Instance (computer science)", "Object instance"]),
        ],
        default: Some(&["Instance (computer science)"]),
    },
    WordTerms {
        word: "pointer",
        by_topic: &[
            (Topic::Programming, &["Pointer (computer programming)", "Memory pointer"]),
        ],
        default: Some(&["Pointer (computer programming)"]),
    },
    WordTerms {
        word: "stack",
        by_topic: &[
            (Topic::Programming, &["Stack (abstract data type)", "Call stack"]),
        ],
        default: Some(&["Stack (abstract data type)"]),
    },
    WordTerms {
        word: "queue",
        by_topic: &[
            (Topic::Programming, &["Queue (abstract data type)", "FIFO queue"]),
        ],
        default: Some(&["Queue (abstract data type)"]),
    },
    WordTerms {
        word: "tree",
        by_topic: &[
            (Topic::Programming, &["Tree (data structure)", "Binary tree"]),
            (Topic::Biology, &["Tree", "Woody plant"]),
        ],
        default: Some(&["Tree (data structure)"]),
    },
    WordTerms {
        word: "node",
        by_topic: &[
            (Topic::Programming, &["Node (computer science)", "Data structure node"]),
        ],
        default: Some(&["Node (computer science)"]),
    },
    WordTerms {
        word: "graph",
        by_topic: &[
            (Topic::Programming, &["Graph (abstract data type)", "Graph theory"]),
        ],
        default: Some(&["Graph (abstract data type)"]),
    },
    WordTerms {
        word: "apple",
        by_topic: &[
            (Topic::TechCompany, &["Apple Inc.", "Apple (company)"]),
            (Topic::Food, &["Apple", "Apple fruit"]),
            (Topic::Biology, &["Apple", "Apple fruit"]),
        ],
        default: None,
    },
    WordTerms {
        word: "amazon",
        by_topic: &[
            (Topic::TechCompany, &["Amazon (company)", "Amazon.com"]),
        ],
        default: None,
    },
    WordTerms {
        word: "oracle",
        by_topic: &[
            (Topic::Programming, &["Oracle Corporation", "Oracle Database"]),
        ],
        default: Some(&["Oracle Corporation"]),
    },
    WordTerms {
        word: "ruby",
        by_topic: &[(Topic::Programming, &["Ruby (programming language)"])],
        default: Some(&["Ruby (programming language)"]),
    },
    WordTerms {
        word: "rust",
        by_topic: &[(Topic::Programming, &["Rust (programming language)"])],
        default: Some(&["Rust (programming language)"]),
    },
    WordTerms {
        word: "swift",
        by_topic: &[(Topic::Programming, &["Swift (programming language)"])],
        default: Some(&["Swift (programming language)"]),
    },
    WordTerms {
        word: "go",
        by_topic: &[(Topic::Programming, &["Go (programming language)"])],
        default: Some(&["Go (programming language)"]),
    },
    WordTerms {
        word: "scala",
        by_topic: &[(Topic::Programming, &["Scala (programming language)"])],
        default: Some(&["Scala (programming language)"]),
    },
    WordTerms {
        word: "kotlin",
        by_topic: &[(Topic::Programming, &["Kotlin (programming language)"])],
        default: Some(&["Kotlin (programming language)"]),
    },
    WordTerms {
        word: "c",
        by_topic: &[(Topic::Programming, &["C (programming language)"])],
        default: Some(&["C (programming language)"]),
    },
    WordTerms {
        word: "r",
        by_topic: &[(Topic::Programming, &["R (programming language)"])],
        default: Some(&["R (programming language)"]),
    },
    WordTerms {
        word: "dart",
        by_topic: &[(Topic::Programming, &["Dart (programming language)"])],
        default: Some(&["Dart (programming language)"]),
    },
    WordTerms {
        word: "shell",
        by_topic: &[
            (Topic::Programming, &["Shell (computing)", "Unix shell", "Command-line interface"]),
            (Topic::Biology, &["Shell (biology)", "Seashell"]),
        ],
        default: Some(&["Shell (computing)"]),
    },
    WordTerms {
        word: "bash",
        by_topic: &[(Topic::Programming, &["Bash (Unix shell)", "Bourne Again Shell"])],
        default: Some(&["Bash (Unix shell)"]),
    },
    WordTerms {
        word: "script",
        by_topic: &[(Topic::Programming, &["Scripting language", "Script (computing)"])],
        default: Some(&["Scripting language"]),
    },
    WordTerms {
        word: "library",
        by_topic: &[(Topic::Programming, &["Library (computing)", "Software library"])],
        default: Some(&["Library (computing)"]),
    },
    WordTerms {
        word: "framework",
        by_topic: &[(Topic::Programming, &["Software framework", "Web framework"])],
        default: Some(&["Software framework"]),
    },
    WordTerms {
        word: "compiler",
        by_topic: &[(Topic::Programming, &["Compiler", "Source code compiler"])],
        default: Some(&["Compiler"]),
    },
    WordTerms {
        word: "interpreter",
        by_topic: &[(Topic::Programming, &["Interpreter (computing)", "Programming interpreter"])],
        default: Some(&["Interpreter (computing)"]),
    },
    WordTerms {
        word: "runtime",
        by_topic: &[(Topic::Programming, &["Runtime system", "Runtime environment"])],
        default: Some(&["Runtime system"]),
    },
    WordTerms {
        word: "thread",
        by_topic: &[(Topic::Programming, &["Thread (computing)", "Execution thread"])],
        default: Some(&["Thread (computing)"]),
    },
    WordTerms {
        word: "process",
        by_topic: &[(Topic::Programming, &["Process (computing)", "Computer process"])],
        default: Some(&["Process (computing)"]),
    },
    WordTerms {
        word: "socket",
        by_topic: &[(Topic::Programming, &["Network socket", "Socket (computing)"])],
        default: Some(&["Network socket"]),
    },
    WordTerms {
        word: "port",
        by_topic: &[(Topic::Programming, &["Port (computer networking)", "Network port"])],
        default: Some(&["Port (computer networking)"]),
    },
    WordTerms {
        word: "protocol",
        by_topic: &[(Topic::Programming, &["Communications protocol", "Network protocol"])],
        default: Some(&["Communications protocol"]),
    },
    WordTerms {
        word: "api",
        by_topic: &[(Topic::Programming, &["API", "Application programming interface"])],
        default: Some(&["API"]),
    },
    WordTerms {
        word: "sdk",
        by_topic: &[(Topic::Programming, &["Software development kit", "SDK"])],
        default: Some(&["Software development kit"]),
    },
    WordTerms {
        word: "ide",
        by_topic: &[(Topic::Programming, &["Integrated development environment", "IDE"])],
        default: Some(&["Integrated development environment"]),
    },
    WordTerms {
        word: "patch",
        by_topic: &[(Topic::Programming, &["Patch (computing)", "Software patch"])],
        default: Some(&["Patch (computing)"]),
    },
    WordTerms {
        word: "branch",
        by_topic: &[
            (Topic::Programming, &["Branching (version control)", "Git branch"]),
            (Topic::Biology, &["Branch (botany)", "Tree branch"]),
        ],
        default: Some(&["Branching (version control)"]),
    },
    WordTerms {
        word: "merge",
        by_topic: &[(Topic::Programming, &["Merge (version control)", "Git merge"])],
        default: Some(&["Merge (version control)"]),
    },
    WordTerms {
        word: "commit",
        by_topic: &[(Topic::Programming, &["Commit (version control)", "Git commit"])],
        default: Some(&["Commit (version control)"]),
    },
    WordTerms {
        word: "repository",
        by_topic: &[(Topic::Programming, &["Repository (version control)", "Software repository"])],
        default: Some(&["Repository (version control)"]),
    },
    WordTerms {
        word: "container",
        by_topic: &[
            (Topic::Programming, &["Container (computing)", "Docker container", "OS-level virtualization"]),
        ],
        default: Some(&["Container (computing)"]),
    },
    WordTerms {
        word: "docker",
        by_topic: &[(Topic::Programming, &["Docker (software)", "Docker container platform"])],
        default: Some(&["Docker (software)"]),
    },
    WordTerms {
        word: "kubernetes",
        by_topic: &[(Topic::Programming, &["Kubernetes", "Container orchestration"])],
        default: Some(&["Kubernetes"]),
    },
    WordTerms {
        word: "cloud",
        by_topic: &[(Topic::Programming, &["Cloud computing", "Cloud infrastructure"])],
        default: Some(&["Cloud computing"]),
    },
    WordTerms {
        word: "lambda",
        by_topic: &[
            (Topic::Programming, &["Anonymous function", "Lambda calculus", "AWS Lambda"]),
        ],
        default: Some(&["Anonymous function"]),
    },
    WordTerms {
        word: "expression",
        by_topic: &[
            (Topic::Programming, &["Expression (computer science)", "Programming expression"]),
        ],
        default: Some(&["Expression (computer science)"]),
    },
    WordTerms {
        word: "statement",
        by_topic: &[
            (Topic::Programming, &["Statement (computer science)", "Programming statement"]),
        ],
        default: Some(&["Statement (computer science)"]),
    },
    WordTerms {
        word: "operator",
        by_topic: &[
            (Topic::Programming, &["Operator (computer programming)", "Programming operator"]),
        ],
        default: Some(&["Operator (computer programming)"]),
    },
    WordTerms {
        word: "type",
        by_topic: &[(Topic::Programming, &["Data type", "Type system"])],
        default: Some(&["Data type"]),
    },
    WordTerms {
        word: "casting",
        by_topic: &[(Topic::Programming, &["Type conversion", "Type casting"])],
        default: Some(&["Type conversion"]),
    },
    WordTerms {
        word: "abstract",
        by_topic: &[
            (Topic::Programming, &["Abstract type", "Abstraction (computer science)"]),
        ],
        default: Some(&["Abstract type"]),
    },
    WordTerms {
        word: "static",
        by_topic: &[(Topic::Programming, &["Static variable", "Static method"])],
        default: Some(&["Static variable"]),
    },
    WordTerms {
        word: "dynamic",
        by_topic: &[
            (Topic::Programming, &["Dynamic typing", "Dynamic programming language"]),
        ],
        default: Some(&["Dynamic typing"]),
    },
    WordTerms {
        word: "private",
        by_topic: &[(Topic::Programming, &["Access modifier", "Private member"])],
        default: Some(&["Access modifier"]),
    },
    WordTerms {
        word: "public",
        by_topic: &[(Topic::Programming, &["Access modifier", "Public member"])],
        default: Some(&["Access modifier"]),
    },
    WordTerms {
        word: "protected",
        by_topic: &[(Topic::Programming, &["Access modifier", "Protected member"])],
        default: Some(&["Access modifier"]),
    },
    WordTerms {
        word: "final",
        by_topic: &[(Topic::Programming, &["Final (Java)", "Constant (programming)"])],
        default: Some(&["Final (Java)"]),
    },
    WordTerms {
        word: "const",
        by_topic: &[(Topic::Programming, &["Constant (programming)", "Const keyword"])],
        default: Some(&["Constant (programming)"]),
    },
    WordTerms {
        word: "void",
        by_topic: &[(Topic::Programming, &["Void type", "Void (programming)"])],
        default: Some(&["Void type"]),
    },
    WordTerms {
        word: "null",
        by_topic: &[(Topic::Programming, &["Null pointer", "Null (programming)"])],
        default: Some(&["Null pointer"]),
    },
    WordTerms {
        word: "bank",
        by_topic: &[
            (Topic::Finance, &["Bank", "Financial institution"]),
        ],
        default: Some(&["Bank"]),
    },
];

/// Build the ordered list of encyclopedic lookup terms for a word.
///
/// Lookup order: explicit (word, topic) entry, then the word's default entry,
/// then synthesized programming / tech-company variants, then the plain word.
pub fn search_terms(word: &str, topic: Option<Topic>) -> Vec<String> {
    let word_lower = word.trim().to_lowercase();
    if word_lower.is_empty() {
        return Vec::new();
    }

    if let Some(entry) = SEARCH_TABLE.iter().find(|e| e.word == word_lower) {
        if let Some(topic) = topic {
            if let Some((_, terms)) = entry.by_topic.iter().find(|(t, _)| *t == topic) {
                return terms.iter().map(ToString::to_string).collect();
            }
        }
        if let Some(terms) = entry.default {
            return terms.iter().map(ToString::to_string).collect();
        }
    }

    match topic {
        Some(Topic::Programming) => vec![
            format!("{word} (programming)"),
            format!("{word} (computer science)"),
            format!("{word} (computing)"),
            word.to_string(),
        ],
        Some(Topic::TechCompany) => vec![
            format!("{word} Inc."),
            format!("{word} (company)"),
            word.to_string(),
        ],
        _ => vec![word.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn explicit_topic_entry_wins() {
        assert_eq!(
            search_terms("python", Some(Topic::Programming)),
            vec!["Python (programming language)", "Python programming"]
        );
        assert_eq!(
            search_terms("python", Some(Topic::Biology)),
            vec!["Python (genus)", "Pythonidae snake"]
        );
    }

    #[test]
    fn default_entry_applies_when_topic_misses() {
        assert_eq!(search_terms("rust", None), vec!["Rust (programming language)"]);
        assert_eq!(
            search_terms("bank", Some(Topic::Sports)),
            vec!["Bank"]
        );
    }

    #[test]
    fn unmapped_word_synthesizes_programming_variants() {
        assert_eq!(
            search_terms("iterator", Some(Topic::Programming)),
            vec![
                "iterator (programming)",
                "iterator (computer science)",
                "iterator (computing)",
                "iterator",
            ]
        );
    }

    #[test]
    fn unmapped_word_synthesizes_company_variants() {
        assert_eq!(
            search_terms("nvidia", Some(Topic::TechCompany)),
            vec!["nvidia Inc.", "nvidia (company)", "nvidia"]
        );
    }

    #[test]
    fn plain_word_is_the_last_resort() {
        assert_eq!(search_terms("pelican", None), vec!["pelican"]);
        assert_eq!(search_terms("pelican", Some(Topic::Finance)), vec!["pelican"]);
    }

    #[test]
    fn word_without_default_falls_through_to_synthesis() {
        // "python" has no default entry; a topic outside its table reaches
        // the generic path.
        assert_eq!(search_terms("python", Some(Topic::Finance)), vec!["python"]);
        assert_eq!(search_terms("python", None), vec!["python"]);
    }

    #[test]
    fn empty_word_yields_no_terms() {
        assert!(search_terms("", None).is_empty());
        assert!(search_terms("   ", Some(Topic::Programming)).is_empty());
    }
}
