use serde::{Deserialize, Deserializer, Serialize};
use strum::Display;
use validator::Validate;

/// Property label sent by the listing page when no property is selected.
pub const PROPERTY_NOT_SPECIFIED: &str = "Not specified";

/// A prospective client's inquiry as posted by the contact forms.
///
/// Every field is a plain string: absent, `null` and `""` all deserialize to
/// an empty string, and serialization always emits the full shape.
#[derive(Validate, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRequest {
    #[validate(length(min = 1))]
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[validate(length(min = 1))]
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable")]
    pub phone: String,
    #[serde(default, deserialize_with = "nullable")]
    pub message: String,
    #[serde(default, deserialize_with = "nullable")]
    pub property_interest: String,
    #[serde(default, deserialize_with = "nullable")]
    pub check_in: String,
    #[serde(default, deserialize_with = "nullable")]
    pub check_out: String,
    #[serde(default, deserialize_with = "nullable")]
    pub guests: String,
}

fn nullable<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Names of the editable inquiry fields, spelled as on the wire.
#[derive(Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "camelCase")]
pub enum InquiryField {
    Name,
    Email,
    Phone,
    Message,
    PropertyInterest,
    CheckIn,
    CheckOut,
    Guests,
}

impl InquiryRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn get(&self, field: InquiryField) -> &str {
        match field {
            InquiryField::Name => &self.name,
            InquiryField::Email => &self.email,
            InquiryField::Phone => &self.phone,
            InquiryField::Message => &self.message,
            InquiryField::PropertyInterest => &self.property_interest,
            InquiryField::CheckIn => &self.check_in,
            InquiryField::CheckOut => &self.check_out,
            InquiryField::Guests => &self.guests,
        }
    }

    pub fn set(&mut self, field: InquiryField, value: impl Into<String>) {
        let value = value.into();
        match field {
            InquiryField::Name => self.name = value,
            InquiryField::Email => self.email = value,
            InquiryField::Phone => self.phone = value,
            InquiryField::Message => self.message = value,
            InquiryField::PropertyInterest => self.property_interest = value,
            InquiryField::CheckIn => self.check_in = value,
            InquiryField::CheckOut => self.check_out = value,
            InquiryField::Guests => self.guests = value,
        }
    }

    /// Builder-style variant of [`InquiryRequest::set`].
    pub fn with(mut self, field: InquiryField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// The field's value, or `None` when it was left empty.
    pub fn optional(&self, field: InquiryField) -> Option<&str> {
        Some(self.get(field)).filter(|value| !value.is_empty())
    }
}
