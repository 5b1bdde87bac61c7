//! Fixed value tables the generator draws from.

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Christopher", "Lisa", "Daniel", "Nancy", "Matthew", "Betty", "Anthony",
    "Margaret", "Mark", "Sandra",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson",
];

pub const STREET_NAMES: &[&str] = &[
    "Main Street",
    "Oak Avenue",
    "Maple Drive",
    "Cedar Lane",
    "Park Road",
    "Elm Street",
    "Washington Avenue",
    "Lake Drive",
    "Hill Road",
    "River Street",
    "Sunset Boulevard",
    "Church Street",
];

/// City paired with its state abbreviation so the two stay consistent
/// within a cohort.
pub const CITIES: &[(&str, &str)] = &[
    ("Columbus", "OH"),
    ("Dayton", "OH"),
    ("Austin", "TX"),
    ("Houston", "TX"),
    ("Denver", "CO"),
    ("Boulder", "CO"),
    ("Portland", "OR"),
    ("Eugene", "OR"),
    ("Madison", "WI"),
    ("Raleigh", "NC"),
    ("Tucson", "AZ"),
    ("Albany", "NY"),
];

/// Medical condition with the medications prescribed for it.
pub const CONDITIONS: &[(&str, &[&str])] = &[
    ("Diabetes", &["Insulin", "Metformin", "Gliclazide"]),
    ("Hypertension", &["Lisinopril", "Amlodipine", "Losartan"]),
    ("Asthma", &["Albuterol", "Fluticasone", "Montelukast"]),
    ("Migraine", &["Sumatriptan", "Propranolol", "Topiramate"]),
    ("Arthritis", &["Ibuprofen", "Naproxen", "Celecoxib"]),
    ("Allergies", &["Loratadine", "Cetirizine", "Fexofenadine"]),
    ("Depression", &["Sertraline", "Fluoxetine", "Escitalopram"]),
    ("Insomnia", &["Zolpidem", "Trazodone", "Doxepin"]),
    ("Acid Reflux", &["Omeprazole", "Ranitidine", "Esomeprazole"]),
    (
        "High Cholesterol",
        &["Atorvastatin", "Simvastatin", "Rosuvastatin"],
    ),
    ("Cough", &["Dextromethorphan", "Guaifenesin", "Codeine"]),
    ("Flu", &["Oseltamivir", "Zanamivir", "Peramivir"]),
];
