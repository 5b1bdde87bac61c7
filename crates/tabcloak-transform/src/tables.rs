use std::collections::HashMap;

fn table(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}

/// Closed gender code table; everything else falls to the "other" bucket.
pub fn default_gender_table() -> HashMap<String, String> {
    table(&[("Male", "Group-0"), ("Female", "Group-1")])
}

/// Drug name to drug class. Unmapped medications pass through unchanged.
pub fn default_medication_table() -> HashMap<String, String> {
    table(&[
        ("Insulin", "Insulin"),
        ("Metformin", "Insulin"),
        ("Gliclazide", "Insulin"),
        ("Lisinopril", "Blood Pressure Medication"),
        ("Amlodipine", "Blood Pressure Medication"),
        ("Losartan", "Blood Pressure Medication"),
        ("Albuterol", "Inhaler"),
        ("Fluticasone", "Inhaler"),
        ("Montelukast", "Inhaler"),
        ("Sumatriptan", "Migraine Medication"),
        ("Propranolol", "Migraine Medication"),
        ("Topiramate", "Migraine Medication"),
        ("Ibuprofen", "Pain Relief"),
        ("Naproxen", "Pain Relief"),
        ("Celecoxib", "Pain Relief"),
        ("Loratadine", "Allergy Medication"),
        ("Cetirizine", "Allergy Medication"),
        ("Fexofenadine", "Allergy Medication"),
        ("Sertraline", "Antidepressant"),
        ("Fluoxetine", "Antidepressant"),
        ("Escitalopram", "Antidepressant"),
        ("Zolpidem", "Sleep Aid"),
        ("Trazodone", "Sleep Aid"),
        ("Doxepin", "Sleep Aid"),
        ("Omeprazole", "Digestive Medication"),
        ("Ranitidine", "Digestive Medication"),
        ("Esomeprazole", "Digestive Medication"),
        ("Atorvastatin", "Cholesterol Medication"),
        ("Simvastatin", "Cholesterol Medication"),
        ("Rosuvastatin", "Cholesterol Medication"),
        ("Dextromethorphan", "Cough Medication"),
        ("Guaifenesin", "Cough Medication"),
        ("Codeine", "Cough Medication"),
        ("Oseltamivir", "Flu Medication"),
        ("Zanamivir", "Flu Medication"),
        ("Peramivir", "Flu Medication"),
    ])
}
