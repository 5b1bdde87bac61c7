//! Canonical field names for the patient dataset.

pub const PATIENT_ID: &str = "Patient ID";
pub const FIRST_NAME: &str = "First Name";
pub const LAST_NAME: &str = "Last Name";
pub const DATE_OF_BIRTH: &str = "Date of Birth";
pub const GENDER: &str = "Gender";
pub const SSN: &str = "SSN";
pub const PHONE_NUMBER: &str = "Phone Number";
pub const MEDICAL_CONDITION: &str = "Medical Condition";
pub const MEDICATION: &str = "Medication";
pub const STREET_ADDRESS: &str = "Street Address";
pub const CITY: &str = "City";
pub const STATE: &str = "State";
pub const ZIP_CODE: &str = "Zip Code";

/// Columns added by the anonymization pipeline.
pub const ADDRESS: &str = "Address";
pub const LOCATION: &str = "Location";

/// Field order of a freshly generated dataset.
pub fn input_fields() -> Vec<&'static str> {
    vec![
        PATIENT_ID,
        FIRST_NAME,
        LAST_NAME,
        DATE_OF_BIRTH,
        GENDER,
        SSN,
        PHONE_NUMBER,
        MEDICAL_CONDITION,
        MEDICATION,
        STREET_ADDRESS,
        CITY,
        STATE,
        ZIP_CODE,
    ]
}

/// Field order after the anonymization pipeline has been applied.
pub fn output_fields() -> Vec<&'static str> {
    vec![
        PATIENT_ID,
        LAST_NAME,
        DATE_OF_BIRTH,
        GENDER,
        SSN,
        PHONE_NUMBER,
        MEDICAL_CONDITION,
        MEDICATION,
        ZIP_CODE,
        ADDRESS,
        LOCATION,
    ]
}
