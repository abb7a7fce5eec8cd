use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::errors::ModelError;

/// A classified ad. Serialized field order is the response shape of `GET /ads/{id}/`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "app_ads")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, indexed)]
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime,
    pub owner: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_title(title: &str) -> Result<(), ModelError> {
    if title.trim().is_empty() {
        return Err(ModelError::Validation("title required".into()));
    }
    Ok(())
}

pub fn validate_owner(owner: &str) -> Result<(), ModelError> {
    if owner.trim().is_empty() {
        return Err(ModelError::Validation("owner required".into()));
    }
    Ok(())
}

/// Body of `POST /ads/`. `id` and `created_at` are never accepted from clients.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NewAd {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner: String,
}

impl NewAd {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_title(&self.title)?;
        validate_owner(&self.owner)
    }

    /// Active model with `id` and `created_at` left to the database.
    pub fn into_active(self) -> ActiveModel {
        ActiveModel {
            title: Set(self.title),
            description: Set(self.description),
            owner: Set(self.owner),
            ..Default::default()
        }
    }
}

/// Partial update for `PATCH /ads/{id}/`.
///
/// `description: Some(None)` clears the description.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub owner: Option<String>,
}

type Setter = fn(&mut AdPatch, JsonValue) -> Result<(), ModelError>;

/// Every field a client may patch. Anything else is rejected.
const PATCHABLE_FIELDS: &[(&str, Setter)] = &[
    ("title", set_title),
    ("description", set_description),
    ("owner", set_owner),
];

fn set_title(patch: &mut AdPatch, value: JsonValue) -> Result<(), ModelError> {
    let title = required_text("title", value)?;
    validate_title(&title)?;
    patch.title = Some(title);
    Ok(())
}

fn set_description(patch: &mut AdPatch, value: JsonValue) -> Result<(), ModelError> {
    patch.description = match value {
        JsonValue::Null => Some(None),
        JsonValue::String(s) => Some(Some(s)),
        _ => return Err(ModelError::Validation("description must be a string or null".into())),
    };
    Ok(())
}

fn set_owner(patch: &mut AdPatch, value: JsonValue) -> Result<(), ModelError> {
    let owner = required_text("owner", value)?;
    validate_owner(&owner)?;
    patch.owner = Some(owner);
    Ok(())
}

fn required_text(field: &str, value: JsonValue) -> Result<String, ModelError> {
    match value {
        JsonValue::String(s) => Ok(s),
        _ => Err(ModelError::Validation(format!("{field} must be a string"))),
    }
}

fn unknown_field(name: &str) -> ModelError {
    let allowed: Vec<_> = AdPatch::patchable_fields().collect();
    ModelError::Validation(format!(
        "unknown or read-only field: {name} (patchable: {})",
        allowed.join(", ")
    ))
}

impl AdPatch {
    pub fn patchable_fields() -> impl Iterator<Item = &'static str> {
        PATCHABLE_FIELDS.iter().map(|(name, _)| *name)
    }

    /// Build a patch from a JSON object, one setter per known field.
    pub fn from_fields(fields: Map<String, JsonValue>) -> Result<Self, ModelError> {
        let mut patch = AdPatch::default();
        for (name, value) in fields {
            let setter = PATCHABLE_FIELDS
                .iter()
                .find(|(field, _)| *field == name)
                .map(|(_, setter)| *setter)
                .ok_or_else(|| unknown_field(&name))?;
            setter(&mut patch, value)?;
        }
        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.owner.is_none()
    }

    pub fn apply(self, am: &mut ActiveModel) {
        if let Some(title) = self.title {
            am.title = Set(title);
        }
        if let Some(description) = self.description {
            am.description = Set(description);
        }
        if let Some(owner) = self.owner {
            am.owner = Set(owner);
        }
    }
}
