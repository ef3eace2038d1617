//! List sorting: direction and per-entity sort keys
//!
//! Sort keys are whitelisted enums mapped to SQL columns. The wire
//! names match the JSON field names; anything else is rejected before
//! it can reach a query.

use serde::Deserialize;

use super::ValidationError;

/// Sort query parameters (`?sortBy=...&sortDir=...`)
#[derive(Debug, Default, Deserialize)]
pub struct SortParams {
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortDir")]
    pub sort_dir: Option<String>,
}

/// Sort direction, ascending by default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a direction case-insensitively ("asc"/"desc").
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ValidationError::InvalidVariant {
                field: "sort direction",
                value: s.to_owned(),
            }),
        }
    }

    /// SQL keyword for this direction.
    pub fn sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Sortable category fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategorySortKey {
    Id,
    #[default]
    Name,
    Description,
}

impl CategorySortKey {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "categoryId" => Ok(Self::Id),
            "categoryName" => Ok(Self::Name),
            "description" => Ok(Self::Description),
            _ => Err(ValidationError::InvalidVariant {
                field: "sort key",
                value: s.to_owned(),
            }),
        }
    }

    /// Column the key sorts on.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "category_id",
            Self::Name => "category_name",
            Self::Description => "description",
        }
    }
}

/// Sortable condition fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConditionSortKey {
    Id,
    #[default]
    Name,
}

impl ConditionSortKey {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "conditionId" => Ok(Self::Id),
            "conditionName" => Ok(Self::Name),
            _ => Err(ValidationError::InvalidVariant {
                field: "sort key",
                value: s.to_owned(),
            }),
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "condition_id",
            Self::Name => "condition_name",
        }
    }
}

/// Sortable equipment fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EquipmentSortKey {
    #[default]
    SerialNumber,
    EquipmentName,
    Quantity,
    LastCheckDate,
    EndOfServiceDate,
    CreatedAt,
}

impl EquipmentSortKey {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "serialNumber" => Ok(Self::SerialNumber),
            "equipmentName" => Ok(Self::EquipmentName),
            "quantity" => Ok(Self::Quantity),
            "lastCheckDate" => Ok(Self::LastCheckDate),
            "endOfServiceDate" => Ok(Self::EndOfServiceDate),
            "createdAt" => Ok(Self::CreatedAt),
            _ => Err(ValidationError::InvalidVariant {
                field: "sort key",
                value: s.to_owned(),
            }),
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Self::SerialNumber => "serial_number",
            Self::EquipmentName => "equipment_name",
            Self::Quantity => "quantity",
            Self::LastCheckDate => "last_check_date",
            Self::EndOfServiceDate => "end_of_service_date",
            Self::CreatedAt => "created_at",
        }
    }
}
