//! Topic keyword catalogs and the substring-containment classifier.
//!
//! Each catalog maps a topic to the trigger phrases that indicate it. The
//! tables are static data: they expand with topic coverage, never with logic.

use crate::Topic;

const PROGRAMMING: &[&str] = &[
    "code", "coding", "programming", "program", "software", "developer", "development",
    "function", "method", "variable", "loop", "syntax", "compile", "compiler",
    "script", "scripting", "debug", "debugging", "algorithm", "data structure",
    "object", "instance", "constructor", "inheritance", "polymorphism", "encapsulation",
    "api", "library", "framework", "module", "package", "import", "define", "defines",
    "object-oriented", "oop", "ide", "editor", "terminal", "command line",
    "backend", "frontend", "fullstack", "web development", "app development",
    "machine learning", "ml", "ai", "artificial intelligence", "neural network",
    "database", "sql", "query", "server", "client", "http", "rest", "json", "xml",
    "git", "github", "version control", "repository", "commit", "branch", "merge",
    "exception", "error handling", "try", "catch", "throw", "return", "print",
    "array", "list", "dictionary", "tuple", "set", "string", "integer", "float", "boolean",
    "if statement", "for loop", "while loop", "switch", "case", "break",
    "selenium", "pytest", "unittest", "django", "flask", "react", "angular", "vue",
    "tensorflow", "pytorch", "pandas", "numpy", "scipy", "matplotlib",
];

const TECH_COMPANY: &[&str] = &[
    "launched", "iphone", "ipad", "macbook", "airpods", "apple watch",
    "google", "microsoft", "amazon prime", "facebook", "meta", "twitter",
    "samsung", "tesla", "spacex", "nvidia", "intel", "amd",
    "android", "ios", "windows", "macos", "chromebook", "pixel",
    "silicon valley", "tech giant", "big tech", "trillion dollar",
    "tim cook", "elon musk", "mark zuckerberg", "sundar pichai", "satya nadella",
];

const BIOLOGY: &[&str] = &[
    "animal", "species", "habitat", "wildlife", "zoo", "nature", "ecosystem",
    "reptile", "mammal", "bird", "insect", "snake", "predator", "prey",
    "forest", "jungle", "wild", "bite", "venom", "scales", "tail", "burrow",
];

const FINANCE: &[&str] = &[
    "money", "deposit", "withdraw", "savings", "account", "loan", "interest",
    "mortgage", "credit", "debit", "transaction", "balance", "atm", "bank account",
    "financial", "investment", "stocks", "bonds", "portfolio",
];

const FOOD: &[&str] = &[
    "ate", "eat", "eating", "food", "fruit", "vegetable", "delicious", "tasty",
    "cook", "cooking", "recipe", "meal", "breakfast", "lunch", "dinner", "snack",
    "hungry", "bite", "chew", "swallow", "taste", "flavor", "sweet", "sour",
    "ripe", "fresh", "organic", "healthy", "nutritious", "diet", "juice",
    "pie", "salad", "dessert", "bake", "baking", "kitchen", "plate", "bowl",
    "orchard", "farm", "harvest", "grow",
    "seed", "skin", "peel", "slice", "chop", "blend", "smoothie",
];

const ENTERTAINMENT: &[&str] = &[
    "tv", "television", "movie", "film", "show", "series", "episode", "channel",
    "netflix", "youtube", "stream", "streaming", "video", "cinema", "theater",
    "broadcast", "programme", "program", "documentary", "news", "sports",
    "viewing", "viewer", "audience", "screen", "remote", "couch", "sofa",
    "night", "evening", "weekend", "binge", "marathon", "premiere", "season",
    "actor", "actress", "director", "starring", "cast", "scene", "plot",
    "comedy", "drama", "thriller", "horror", "action", "romance", "cartoon",
    "anime", "sitcom", "reality", "game show", "talk show", "late night",
];

const TIMEPIECE: &[&str] = &[
    "wrist", "wristwatch", "clock", "time", "hour", "minute", "second",
    "digital", "analog", "strap", "band", "dial", "face", "hands",
    "wearing", "wore", "timer", "stopwatch", "alarm", "bezel",
    "luxury", "rolex", "casio", "seiko", "omega", "jewelry", "accessory",
];

const OBSERVATION: &[&str] = &[
    "guard", "security", "monitor", "monitoring", "surveillance", "patrol",
    "building", "house", "property", "premises", "door", "entrance", "gate",
    "protect", "protection", "keep an eye", "lookout", "alert", "careful",
    "observe", "observing", "observation", "supervise", "supervision",
    "oversee", "inspect", "check", "survey", "scout", "spy",
    "child", "children", "kids", "baby", "toddler", "babysit", "babysitting",
    "pet", "dog", "cat", "prisoner", "suspect", "criminal",
    "night shift", "duty", "post", "station", "sentry", "vigilant",
];

const FITNESS: &[&str] = &[
    "morning", "jog", "jogging", "exercise", "workout", "marathon", "sprint",
    "gym", "fitness", "athletic", "athlete", "training", "cardio", "aerobic",
    "mile", "kilometer", "distance", "race", "racing", "track", "field",
    "running shoes", "sneakers", "stretching", "warm up", "cool down",
    "healthy", "health", "sweat", "stamina", "endurance", "pace", "speed",
    "treadmill", "outdoor", "park", "trail", "route", "lap", "finish line",
    "goes for", "went for", "take a", "daily", "routine", "regularly",
];

const BUSINESS: &[&str] = &[
    "successfully", "manager", "managing", "management", "ceo", "director",
    "led", "lead", "leading", "founder", "founded", "owner", "ownership",
    "organization", "organisation", "corporation", "enterprise", "firm",
    "business", "startup", "employee", "staff", "team", "department",
    "profit", "revenue", "growth", "expand", "expansion", "strategy",
    "board", "executive", "operations", "administered", "oversaw",
    "headed", "supervised", "controlled", "governed", "steered",
];

const EMOTION: &[&str] = &[
    "tears", "tear", "crying", "cry", "sob", "sobbing", "weep", "weeping",
    "cheek", "cheeks", "emotion", "emotional",
    "sad", "sadness", "happy", "happiness", "joy", "grief", "sorrow",
    "pain", "hurt", "heartbreak", "heartbroken", "moved", "touched",
    "down her", "down his", "down my", "down the", "began to", "started to",
    "flow", "flowing", "drip", "dripping", "trickle",
];

const COMPUTER: &[&str] = &[
    "upload", "download", "document", "folder", "directory", "save", "open",
    "click", "drag", "drop", "attach", "attachment", "email", "send",
    "computer", "laptop", "desktop", "storage", "disk", "drive", "usb",
    "pdf", "word", "excel", "image", "photo", "video", "audio", "mp3", "mp4",
    "zip", "compress", "extract", "rename", "delete", "copy", "paste",
    "share", "transfer", "submit", "format", "extension",
];

const LEGAL: &[&str] = &[
    "lawyer", "attorney", "court", "judge", "trial", "case", "lawsuit",
    "legal", "law", "filed", "filing", "petition", "motion", "hearing",
    "plaintiff", "defendant", "prosecution", "defense", "verdict", "judgment",
    "appeal", "testimony", "witness", "evidence", "affidavit", "subpoena",
    "litigation", "settlement", "damages", "claim", "complaint", "injunction",
    "magistrate", "barrister", "solicitor", "paralegal", "notary", "oath",
    "police", "thief", "arrest", "arrested", "crime", "criminal", "accused", "suspect",
];

const TOOLS: &[&str] = &[
    "wood", "smooth", "smoothen", "smoothened", "grind", "grinding",
    "sand", "sanding", "polish", "polishing", "shape", "shaping", "sharpen",
    "workshop", "workbench", "tool", "tools", "hand tool", "rasp", "chisel",
    "carpenter", "carpentry", "metalwork", "blacksmith", "forge", "craft",
    "edge", "edges", "rough", "surface", "material", "iron", "steel", "brass",
    "nail", "screw", "bolt",
];

const SEASON: &[&str] = &[
    "flowers", "flower", "bloom", "blooming", "blossom", "blossoming",
    "summer", "autumn", "fall", "winter", "seasonal", "season",
    "weather", "warm", "cold", "sunny", "rainy", "temperature",
    "months", "march", "april", "may", "june", "september", "october",
    "garden", "gardening", "planting", "seeds", "nature", "trees",
    "birds", "butterflies", "allergies", "pollen", "year",
];

const WATER: &[&str] = &[
    "water", "flows", "flow", "flowing", "river", "stream", "creek",
    "lake", "pond", "well", "underground", "aquifer", "source",
    "drink", "drinking", "fresh", "mineral", "natural", "bubbling",
    "fountain", "hot springs", "thermal", "geothermal", "geyser",
    "bottle", "bottled", "pure", "clean", "clear",
];

const MECHANICAL: &[&str] = &[
    "toy", "toys", "coil", "bounce", "bouncing", "elastic",
    "mechanism", "mechanical", "device", "mattress", "bed",
    "suspension", "shock absorber", "tension", "compress",
    "compressed", "stretch", "stretched", "force", "pressure", "push", "pull",
    "jump", "jumping", "trampoline", "pen", "button", "loaded",
];

const CONSTRUCTION: &[&str] = &[
    "lifted", "lifting", "lift", "heavy", "load", "loading", "container", "containers",
    "construction", "site", "building", "tower", "tall", "height",
    "equipment", "machinery", "operator", "hoist", "hook", "cable", "wire",
    "cargo", "shipyard", "port", "dock", "warehouse", "factory",
    "move", "moving", "transport", "haul", "weight", "tons", "industrial",
];

const BIRD: &[&str] = &[
    "flew", "fly", "flying", "flight", "wings", "wing", "feathers", "feather",
    "nest", "nesting", "eggs", "beak", "migrate", "migration", "migratory",
    "lake", "pond", "wetland", "marsh", "swamp", "habitat",
    "bird", "birds", "avian", "flock", "soar", "soaring", "glide", "graceful",
    "wildlife", "nature", "sanctuary", "endangered", "species",
];

const ELECTRICAL: &[&str] = &[
    "phone", "battery", "batteries", "plug", "plugged", "charger", "charging",
    "power", "electric", "electrical", "outlet", "socket", "usb", "cable",
    "laptop", "device", "wireless", "adapter", "volt", "voltage", "amp",
    "dead", "low", "full", "percentage", "rechargeable", "lithium",
];

const PAYMENT: &[&str] = &[
    "service", "fee", "fees", "cost", "price", "pay", "payment", "free",
    "no charge", "extra", "additional", "bill", "invoice", "receipt",
    "discount", "rate", "flat rate", "per hour", "monthly", "annual",
    "subscription", "membership", "premium", "basic", "refund",
];

const MILITARY: &[&str] = &[
    "soldiers", "soldier", "army", "troops", "military", "battle", "war",
    "forward", "attack", "attacking", "advance", "advancing", "rush", "rushing",
    "enemy", "combat", "fight", "fighting", "battlefield", "front line",
    "cavalry", "infantry", "retreat", "assault", "offensive", "defense",
    "began to", "started to", "ordered to", "commanded",
];

const WRITING: &[&str] = &[
    "wrote", "write", "writing", "written", "letter", "message", "memo",
    "paper", "pen", "pencil", "jot", "jotted", "scribble", "scribbled",
    "sticky", "post-it", "reminder", "journal", "diary", "notebook",
    "left a", "leave a", "send a", "passed a", "handed a", "read a",
];

const MUSIC: &[&str] = &[
    "musical", "music", "song", "songs", "melody", "tune",
    "sing", "singing", "sang", "instrument",
    "piano", "guitar", "violin", "flute", "orchestra", "choir",
    "high note", "low note", "flat note", "sharp note", "scale", "octave",
    "sound", "sounds", "tone", "tones", "frequency", "high pitch", "low pitch",
];

const CURRENCY: &[&str] = &[
    "₹", "rupee", "rupees", "dollar", "dollars", "$", "euro", "euros", "€",
    "pound", "pounds", "£", "yen", "¥", "cash", "money", "currency",
    "banknote", "bill", "bills", "100", "500", "1000", "2000", "50", "20",
    "gave me", "handed me", "paid", "change", "wallet", "pocket", "purse",
];

const INDUSTRIAL: &[&str] = &[
    "factory", "factories", "power", "manufacturing", "production", "assembly",
    "nuclear", "thermal", "electricity", "generator", "turbine", "energy",
    "industrial", "industry", "processing", "refinery", "chemical", "steel",
    "cement", "textile", "automobile", "machinery", "facility", "facilities",
];

const BOTANY: &[&str] = &[
    "watered", "water", "watering", "grow", "growing", "grew", "growth",
    "flower", "flowers", "flowering", "leaf", "leaves", "root", "roots",
    "soil", "pot", "potted", "garden", "gardening", "greenhouse", "sunlight",
    "seed", "seeds", "stem", "branch", "branches", "tree", "trees", "shrub",
    "green", "vegetation", "photosynthesis", "fertilizer", "indoor", "outdoor",
];

const SPY: &[&str] = &[
    "spy", "spies", "spying", "undercover", "secret", "secrets", "agent",
    "infiltrate", "infiltrated", "infiltration", "mole", "double agent",
    "insider", "informant", "informer", "traitor", "betrayal",
    "organization", "gang", "cartel", "intelligence", "cia", "fbi",
    "mission", "covert", "operation", "surveillance", "planted",
];

const SPORTS: &[&str] = &[
    "ball", "balls", "pitched", "throw", "throwing", "threw", "catch", "catching",
    "baseball", "cricket", "bowling", "bowled", "batter", "batsman", "wicket",
    "game", "games", "match", "matches", "player", "players", "team", "teams",
    "stadium", "field", "innings", "score", "runs", "home run", "strike", "out",
    "sport", "sports", "athletic", "athlete", "coach", "practice",
];

const SALES: &[&str] = &[
    "sales", "impressive", "presentation", "client", "clients", "customer", "customers",
    "business", "deal", "deals", "proposal", "marketing", "advertising", "product",
    "convince", "persuade", "meeting", "investor", "investors", "startup", "venture",
    "elevator pitch", "shark tank", "funding", "investment", "sell", "selling",
];

const TERRAIN: &[&str] = &[
    "tent", "tents", "flat", "ground", "camping", "camp", "campsite",
    "set up", "setup", "level", "even", "uneven", "slope", "sloped",
    "grass", "grassy", "outdoor", "outdoors", "terrain", "surface",
    "football pitch", "soccer pitch", "cricket pitch", "playing field",
];

const SOCIAL: &[&str] = &[
    "upper class", "lower class", "middle class", "working class", "upper", "lower",
    "wealthy", "rich", "poor", "poverty", "elite", "aristocrat", "aristocracy",
    "noble", "nobility", "royal", "royalty", "commoner", "peasant", "bourgeois",
    "status", "hierarchy", "society", "belongs to", "born into", "privilege",
];

const EDUCATION: &[&str] = &[
    "math", "mathematics", "science", "history", "english", "physics", "chemistry",
    "biology", "geography", "economics", "literature", "school", "college", "university",
    "teacher", "professor", "student", "students", "classroom", "lecture", "lesson",
    "exam", "test", "homework", "assignment", "grade", "grades", "semester", "course",
];

const INSECT: &[&str] = &[
    "crawling", "crawl", "crawled", "wall", "floor", "ceiling", "window",
    "ant", "ants", "spider", "spiders", "beetle", "cockroach", "fly", "flies",
    "mosquito", "butterfly", "moth", "insect", "insects", "pest", "pests",
    "legs", "wings", "antenna", "bite", "bitten", "sting", "stung", "squash",
];

const SURVEILLANCE: &[&str] = &[
    "hidden", "microphone", "wiretap", "listening", "recording", "secretly",
    "planted", "device", "spy", "spying", "surveillance", "eavesdrop", "tap",
    "room", "office", "phone", "conversation", "detected", "sweep", "found",
];

const FASHION: &[&str] = &[
    "fashion", "runway", "ramp", "photoshoot", "photo shoot", "photographer",
    "pose", "posing", "beautiful", "gorgeous", "supermodel", "catwalk",
    "magazine", "vogue", "designer", "modeling", "modelling", "agency",
    "portfolio", "commercial", "advertisement", "ad", "campaign",
];

const PRODUCT: &[&str] = &[
    "car", "cars", "vehicle", "vehicles", "automobile", "bike", "motorcycle",
    "new model", "latest", "version", "year", "brand", "make", "manufacturer",
    "features", "specs", "specifications", "engine", "horsepower", "mileage",
    "release", "launched", "introduced", "upgraded", "improved", "design",
];

/// Catalog in declaration order. Classification tie-breaks follow this order
/// exactly, so entries must not be reordered without versioning the output.
pub(crate) const CATALOG: &[(Topic, &[&str])] = &[
    (Topic::Programming, PROGRAMMING),
    (Topic::TechCompany, TECH_COMPANY),
    (Topic::Biology, BIOLOGY),
    (Topic::Finance, FINANCE),
    (Topic::Food, FOOD),
    (Topic::Entertainment, ENTERTAINMENT),
    (Topic::Timepiece, TIMEPIECE),
    (Topic::Observation, OBSERVATION),
    (Topic::Fitness, FITNESS),
    (Topic::Business, BUSINESS),
    (Topic::Emotion, EMOTION),
    (Topic::Computer, COMPUTER),
    (Topic::Legal, LEGAL),
    (Topic::Tools, TOOLS),
    (Topic::Season, SEASON),
    (Topic::Water, WATER),
    (Topic::Mechanical, MECHANICAL),
    (Topic::Construction, CONSTRUCTION),
    (Topic::Bird, BIRD),
    (Topic::Electrical, ELECTRICAL),
    (Topic::Payment, PAYMENT),
    (Topic::Military, MILITARY),
    (Topic::Writing, WRITING),
    (Topic::Music, MUSIC),
    (Topic::Currency, CURRENCY),
    (Topic::Industrial, INDUSTRIAL),
    (Topic::Botany, BOTANY),
    (Topic::Spy, SPY),
    (Topic::Sports, SPORTS),
    (Topic::Sales, SALES),
    (Topic::Terrain, TERRAIN),
    (Topic::Social, SOCIAL),
    (Topic::Education, EDUCATION),
    (Topic::Insect, INSECT),
    (Topic::Surveillance, SURVEILLANCE),
    (Topic::Fashion, FASHION),
    (Topic::Product, PRODUCT),
];

/// Detect the subject domain of a sentence.
///
/// Each topic scores one point per catalog phrase contained in the lowercased
/// sentence (substring containment, so multi-word phrases match). The first
/// topic in catalog order holding the maximum score wins; a maximum of zero
/// means no topic was detected.
pub fn classify(sentence: &str) -> Option<Topic> {
    let sentence = sentence.to_lowercase();
    if sentence.trim().is_empty() {
        return None;
    }

    let mut best: Option<(Topic, usize)> = None;
    for (topic, phrases) in CATALOG {
        let score = phrases
            .iter()
            .filter(|phrase| sentence.contains(*phrase))
            .count();
        // Strict comparison keeps the first topic on ties.
        if score > 0 && best.is_none_or(|(_, high)| score > high) {
            best = Some((*topic, score));
        }
    }

    let (topic, score) = best?;
    log::debug!("Context classified as '{topic}' (score {score})");
    Some(topic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn finance_keywords_win() {
        assert_eq!(
            classify("I deposited money at the bank"),
            Some(Topic::Finance)
        );
    }

    #[test]
    fn programming_keywords_win() {
        assert_eq!(
            classify("the function throws an exception when the api returns null"),
            Some(Topic::Programming)
        );
    }

    #[test]
    fn no_keywords_means_no_topic() {
        assert_eq!(classify("hello there"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
    }

    #[test]
    fn classification_is_deterministic() {
        let sentence = "the security guard kept watching the entrance of the building";
        let first = classify(sentence);
        for _ in 0..5 {
            assert_eq!(classify(sentence), first);
        }
    }

    #[test]
    fn ties_resolve_by_catalog_order() {
        // "snake" hits biology only; "deposit" hits finance only; one each,
        // so biology wins because it is declared before finance.
        let sentence = "the snake deposit";
        assert_eq!(classify(sentence), Some(Topic::Biology));
    }

    #[test]
    fn multi_word_phrases_match_as_substrings() {
        assert_eq!(
            classify("we refactored the while loop yesterday"),
            Some(Topic::Programming)
        );
    }
}
