use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// The names of the form fields read by the renderers.
pub mod fields {
    pub const COMPANY_NAME: &str = "nombre_empresa";
    pub const TAX_ID: &str = "cif";
    pub const ADDRESS: &str = "direccion";
    pub const POSTAL_CODE: &str = "codigo_postal";
    pub const CITY: &str = "poblacion";
    pub const PROVINCE: &str = "provincia";
    pub const COUNTRY: &str = "pais";
    pub const PHONE: &str = "telefono_fiscal";
    pub const BILLING_EMAIL: &str = "email_fiscal";

    pub const DELIVERY_ADDRESS: &str = "direccion_entrega";
    pub const DELIVERY_POSTAL_CODE: &str = "cp_entrega";
    pub const DELIVERY_CITY: &str = "poblacion_entrega";
    pub const DELIVERY_PROVINCE: &str = "provincia_entrega";

    pub const ACCOUNTING_FIRST_NAME: &str = "nombre_contabilidad";
    pub const ACCOUNTING_LAST_NAME: &str = "apellidos_contabilidad";
    pub const ACCOUNTING_EMAIL: &str = "email_contabilidad";
    pub const ACCOUNTING_PHONE: &str = "telefono_contabilidad";
    pub const PURCHASING_FIRST_NAME: &str = "nombre_compras";
    pub const PURCHASING_LAST_NAME: &str = "apellidos_compras";
    pub const PURCHASING_EMAIL: &str = "email_compras";

    pub const IBAN: &str = "iban";
    pub const SWIFT: &str = "swift";
    pub const PAYMENT_TYPE: &str = "tipo_pago_sepa";
}

/// Fields the form refuses to submit without.
pub const REQUIRED_FIELDS: [&str; 14] = [
    fields::COMPANY_NAME,
    fields::TAX_ID,
    fields::ADDRESS,
    fields::POSTAL_CODE,
    fields::CITY,
    fields::PROVINCE,
    fields::COUNTRY,
    fields::PHONE,
    fields::BILLING_EMAIL,
    fields::ACCOUNTING_FIRST_NAME,
    fields::ACCOUNTING_LAST_NAME,
    fields::ACCOUNTING_EMAIL,
    fields::ACCOUNTING_PHONE,
    fields::IBAN,
];

/// The data submitted by a client, as a flat mapping from the field name to its value.
/// Reading a field that was never submitted yields the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientRecord {
    fields: BTreeMap<String, String>,
}

impl ClientRecord {
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        serde_json::from_str(json)
            .map_err(|error| RenderError::with_error("Unable to parse the client record", &error))
    }

    pub fn from_path(record_path: &Path) -> Result<Self, RenderError> {
        let record_content = std::fs::read_to_string(record_path).map_err(|error| {
            RenderError::with_error(
                format!("Unable to read the client record {:?}", record_path),
                &error,
            )
        })?;

        Self::from_json(&record_content)
    }

    /// The value of the field, or the empty string when it is absent.
    pub fn get(&self, field_name: &str) -> &str {
        self.fields.get(field_name).map(String::as_str).unwrap_or("")
    }

    /// Whether the field was submitted with a non-empty value.
    pub fn is_present(&self, field_name: &str) -> bool {
        !self.get(field_name).is_empty()
    }

    pub fn payment_type(&self) -> PaymentType {
        PaymentType::from_field(self.get(fields::PAYMENT_TYPE))
    }

    /// The required fields which are empty or contain only whitespace.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .into_iter()
            .filter(|field_name| self.get(field_name).trim().is_empty())
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ClientRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ClientRecord {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// The kind of SEPA direct debit the client authorises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentType {
    Recurring,
    OneOff,
}

impl PaymentType {
    /// Only the exact value `recurrente` selects a recurring debit.
    pub fn from_field(value: &str) -> Self {
        if value == "recurrente" {
            PaymentType::Recurring
        } else {
            PaymentType::OneOff
        }
    }

    /// The label shown on the registration sheet.
    pub fn label(self) -> &'static str {
        match self {
            PaymentType::Recurring => "Recurrente",
            PaymentType::OneOff => "Único",
        }
    }
}

/// Joins the parts with the separator, keeping missing parts as blanks.
pub(crate) fn composite(record: &ClientRecord, field_names: &[&str], separator: &str) -> String {
    field_names
        .iter()
        .map(|field_name| record.get(field_name))
        .collect::<Vec<_>>()
        .join(separator)
}

/// A first and last name pair, blank when both are missing.
pub(crate) fn full_name(record: &ClientRecord, first_name: &str, last_name: &str) -> String {
    composite(record, &[first_name, last_name], " ")
        .trim()
        .to_string()
}
