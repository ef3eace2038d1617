//! Sports equipment field validation
//!
//! `NewEquipment` is the validated draft used by create and update:
//! everything the client controls, without identity or `created_at`
//! (those are assigned at persistence time and never change).

use chrono::NaiveDate;

use super::validation::require_text;
use super::ValidationError;

/// Maximum length for serial numbers
const MAX_SERIAL_NUMBER_LEN: usize = 50;

/// Maximum length for equipment names
const MAX_EQUIPMENT_NAME_LEN: usize = 100;

/// Validated serial number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerialNumber(String);

impl SerialNumber {
    /// Create a new serial number: not blank, max 50 characters.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        require_text(s, "serial number", MAX_SERIAL_NUMBER_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SerialNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated equipment name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EquipmentName(String);

impl EquipmentName {
    /// Create a new equipment name: not blank, max 100 characters.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        require_text(s, "equipment name", MAX_EQUIPMENT_NAME_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EquipmentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated equipment draft for create and update.
#[derive(Debug, Clone)]
pub struct NewEquipment {
    serial_number: SerialNumber,
    equipment_name: EquipmentName,
    quantity: i32,
    last_check_date: Option<NaiveDate>,
    end_of_service_date: NaiveDate,
    description: Option<String>,
}

impl NewEquipment {
    /// Validate client-supplied equipment fields.
    ///
    /// # Rules
    /// - serial number: not blank, max 50 characters
    /// - equipment name: not blank, max 100 characters
    /// - quantity: required, >= 0
    /// - end of service date: required
    pub fn new(
        serial_number: &str,
        equipment_name: &str,
        quantity: Option<i32>,
        last_check_date: Option<NaiveDate>,
        end_of_service_date: Option<NaiveDate>,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        let serial_number = SerialNumber::new(serial_number)?;
        let equipment_name = EquipmentName::new(equipment_name)?;

        let quantity = quantity.ok_or(ValidationError::Missing { field: "quantity" })?;
        if quantity < 0 {
            return Err(ValidationError::Negative { field: "quantity" });
        }

        let end_of_service_date = end_of_service_date.ok_or(ValidationError::Missing {
            field: "end of service date",
        })?;

        Ok(Self {
            serial_number,
            equipment_name,
            quantity,
            last_check_date,
            end_of_service_date,
            description,
        })
    }

    pub fn serial_number(&self) -> &str {
        self.serial_number.as_str()
    }

    pub fn equipment_name(&self) -> &str {
        self.equipment_name.as_str()
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn last_check_date(&self) -> Option<NaiveDate> {
        self.last_check_date
    }

    pub fn end_of_service_date(&self) -> NaiveDate {
        self.end_of_service_date
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end_of_service() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2027, 6, 1)
    }

    #[test]
    fn valid_draft() {
        let draft = NewEquipment::new("SN1", "Ball", Some(5), None, end_of_service(), None)
            .expect("draft should validate");
        assert_eq!(draft.serial_number(), "SN1");
        assert_eq!(draft.quantity(), 5);
    }

    #[test]
    fn zero_quantity_is_allowed() {
        assert!(NewEquipment::new("SN1", "Ball", Some(0), None, end_of_service(), None).is_ok());
    }

    #[test]
    fn rejects_blank_serial() {
        let err = NewEquipment::new("  ", "Ball", Some(5), None, end_of_service(), None)
            .unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "serial number" }));
    }

    #[test]
    fn serial_max_length() {
        let serial_50 = "s".repeat(50);
        assert!(
            NewEquipment::new(&serial_50, "Ball", Some(5), None, end_of_service(), None).is_ok()
        );

        let serial_51 = "s".repeat(51);
        let err = NewEquipment::new(&serial_51, "Ball", Some(5), None, end_of_service(), None)
            .unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 50, .. }));
    }

    #[test]
    fn name_max_length() {
        let name_101 = "n".repeat(101);
        let err = NewEquipment::new("SN1", &name_101, Some(5), None, end_of_service(), None)
            .unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 100, .. }));
    }

    #[test]
    fn rejects_missing_quantity() {
        let err =
            NewEquipment::new("SN1", "Ball", None, None, end_of_service(), None).unwrap_err();
        assert!(matches!(err, ValidationError::Missing { field: "quantity" }));
    }

    #[test]
    fn rejects_negative_quantity() {
        let err =
            NewEquipment::new("SN1", "Ball", Some(-1), None, end_of_service(), None).unwrap_err();
        assert!(matches!(err, ValidationError::Negative { field: "quantity" }));
    }

    #[test]
    fn rejects_missing_end_of_service_date() {
        let err = NewEquipment::new("SN1", "Ball", Some(5), None, None, None).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Missing {
                field: "end of service date"
            }
        ));
    }
}
