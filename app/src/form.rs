//! Field presets and validation for the job posting form.
//!
//! One form serves both listing kinds; a [`FormSpec`] parameterizes which
//! fields it shows and how they validate. Validation messages are i18n
//! paths, resolved by shells like notice messages.

use std::collections::BTreeMap;

use speedjobs_api::{JobDraft, JobKind};

pub struct FieldSpec {
    pub key: &'static str,
    pub required: bool,
    pub max_len: usize,
}

pub struct FormSpec {
    pub kind: JobKind,
    pub fields: &'static [FieldSpec],
}

const CUSTOMER_REQUEST: FormSpec = FormSpec {
    kind: JobKind::CustomerRequest,
    fields: &[
        FieldSpec { key: "title", required: true, max_len: 120 },
        FieldSpec { key: "description", required: true, max_len: 2000 },
        FieldSpec { key: "category", required: true, max_len: 60 },
        FieldSpec { key: "region", required: true, max_len: 60 },
    ],
};

const PROVIDER_OFFER: FormSpec = FormSpec {
    kind: JobKind::ProviderOffer,
    fields: &[
        FieldSpec { key: "title", required: true, max_len: 120 },
        // Offers may rely on the provider profile for detail.
        FieldSpec { key: "description", required: false, max_len: 2000 },
        FieldSpec { key: "category", required: true, max_len: 60 },
        FieldSpec { key: "region", required: true, max_len: 60 },
    ],
};

pub fn spec_for(kind: JobKind) -> &'static FormSpec {
    match kind {
        JobKind::CustomerRequest => &CUSTOMER_REQUEST,
        JobKind::ProviderOffer => &PROVIDER_OFFER,
    }
}

impl FormSpec {
    pub fn has_field(&self, key: &str) -> bool {
        self.fields.iter().any(|f| f.key == key)
    }

    /// Check `values` against the preset. Returns a map of field name to
    /// message path; empty means the form may be submitted.
    pub fn validate(&self, values: &BTreeMap<String, String>) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        for field in self.fields {
            let value = values.get(field.key).map(String::as_str).unwrap_or("").trim();
            if value.is_empty() {
                if field.required {
                    errors.insert(field.key.to_string(), "error/form/required".to_string());
                }
            } else if value.chars().count() > field.max_len {
                errors.insert(
                    field.key.to_string(),
                    format!("error/form/too-long?max={}", field.max_len),
                );
            }
        }
        errors
    }

    /// Build the wire draft from validated values.
    pub fn to_draft(&self, values: &BTreeMap<String, String>) -> JobDraft {
        let field = |key: &str| {
            values
                .get(key)
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };
        JobDraft {
            kind: self.kind,
            title: field("title"),
            description: field("description"),
            category: field("category"),
            region: field("region"),
        }
    }
}
