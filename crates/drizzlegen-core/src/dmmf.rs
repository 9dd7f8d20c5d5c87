use serde::{Deserialize, Serialize};

/// Read-only datamodel snapshot handed over by the host tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dmmf {
    pub datamodel: Datamodel,
}

/// Models and enums declared in the Prisma schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datamodel {
    #[serde(default)]
    pub models: Vec<Model>,
    #[serde(default)]
    pub enums: Vec<DatamodelEnum>,
}

impl Datamodel {
    /// Look up a model by its logical name.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|model| model.name == name)
    }

    /// Look up an enum by its logical name.
    pub fn find_enum(&self, name: &str) -> Option<&DatamodelEnum> {
        self.enums.iter().find(|item| item.name == name)
    }
}

/// A model, i.e. a table once emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub name: String,
    #[serde(default)]
    pub db_name: Option<String>,
    pub fields: Vec<Field>,
    #[serde(default)]
    pub documentation: Option<String>,
}

impl Model {
    /// Fields that map to physical columns (scalars and enums).
    pub fn column_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .filter(|field| matches!(field.kind, FieldKind::Scalar | FieldKind::Enum))
    }

    /// Fields that describe relations to other models.
    pub fn relation_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .filter(|field| field.kind == FieldKind::Object)
    }
}

/// Field metadata as emitted by the DMMF.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    /// Explicit `@map` name; `null` when the column keeps the logical name.
    #[serde(default)]
    pub db_name: Option<String>,
    pub kind: FieldKind,
    /// Scalar type name, enum name or related model name.
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub is_list: bool,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_id: bool,
    #[serde(default)]
    pub is_unique: bool,
    #[serde(default)]
    pub has_default_value: bool,
    #[serde(default)]
    pub relation_name: Option<String>,
    #[serde(default)]
    pub relation_from_fields: Vec<String>,
    #[serde(default)]
    pub relation_to_fields: Vec<String>,
    #[serde(default)]
    pub documentation: Option<String>,
}

/// Kind of a DMMF field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Scalar,
    Object,
    Enum,
    Unsupported,
}

/// Enum declared in the datamodel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatamodelEnum {
    pub name: String,
    #[serde(default)]
    pub db_name: Option<String>,
    pub values: Vec<EnumValue>,
}

/// A single enum member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,
    #[serde(default)]
    pub db_name: Option<String>,
}
