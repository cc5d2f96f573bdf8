use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{prelude::*, variant::Variant};

/// Static identity of the device, as reported by `/info`.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Device {
    pub id: String,
    pub model: String,
    pub batch: Option<String>,
    pub firmware: String,
    pub hardware: Option<Hardware>,
    pub manufacturer: String,
}

/// Hardware revision: some firmwares report a number, others a label.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, derive_more::Display)]
#[serde(untagged)]
pub enum Hardware {
    Revision(i64),
    Label(String),
}

impl Device {
    /// Map the decoded `/info` response.
    ///
    /// Keys are taken as is, the [`Variant`] decides which of them may be absent.
    pub fn from_value(value: &Value, variant: Variant) -> Result<Self, MappingError> {
        let response = Response::deserialize(value).map_err(MappingError::Invalid)?;
        Ok(Self {
            id: required(response.id, "id")?,
            model: required(response.model, "model")?,
            batch: optional(response.batch, "batch", variant)?,
            firmware: required(response.firmware, "fw")?,
            hardware: optional(response.hardware, "hw", variant)?,
            manufacturer: required(response.manufacturer, "mf")?,
        })
    }
}

#[derive(Deserialize)]
struct Response {
    id: Option<String>,
    model: Option<String>,
    batch: Option<String>,

    #[serde(rename = "fw")]
    firmware: Option<String>,

    #[serde(rename = "hw")]
    hardware: Option<Hardware>,

    #[serde(rename = "mf")]
    manufacturer: Option<String>,
}

fn required<T>(value: Option<T>, key: &'static str) -> Result<T, MappingError> {
    value.ok_or(MappingError::MissingField(key))
}

fn optional<T>(
    value: Option<T>,
    key: &'static str,
    variant: Variant,
) -> Result<Option<T>, MappingError> {
    if value.is_none() && variant.requires(key) {
        Err(MappingError::MissingField(key))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    // language=json
    const INFO: &str = r#"{
        "id": "84df:0c11:9999:3795",
        "model": "SBWF3102",
        "batch": "SBP-HMX-210318",
        "fw": "1.6.16",
        "hw": 1,
        "mf": "NET2GRID"
    }"#;

    #[test]
    fn test_from_value_ok() -> anyhow::Result<()> {
        let device = Device::from_value(&serde_json::from_str(INFO)?, Variant::GridNet)?;
        assert_eq!(
            device,
            Device {
                id: "84df:0c11:9999:3795".to_owned(),
                model: "SBWF3102".to_owned(),
                batch: Some("SBP-HMX-210318".to_owned()),
                firmware: "1.6.16".to_owned(),
                hardware: Some(Hardware::Revision(1)),
                manufacturer: "NET2GRID".to_owned(),
            }
        );
        Ok(())
    }

    #[test]
    fn test_hardware_label_ok() -> anyhow::Result<()> {
        let value = json!({
            "id": "1",
            "model": "PEM",
            "batch": "b",
            "fw": "2.0",
            "hw": "rev-b",
            "mf": "Pure"
        });
        let device = Device::from_value(&value, Variant::Net2Grid)?;
        assert_eq!(device.hardware, Some(Hardware::Label("rev-b".to_owned())));
        Ok(())
    }

    #[test]
    fn test_pure_energie_without_optional_keys_ok() -> anyhow::Result<()> {
        let value = json!({"id": "1", "model": "SBWF3102", "fw": "1.7.21", "mf": "NET2GRID"});
        let device = Device::from_value(&value, Variant::PureEnergie)?;
        assert_eq!(device.batch, None);
        assert_eq!(device.hardware, None);
        Ok(())
    }

    #[test]
    fn test_gridnet_without_batch_fails() {
        let value =
            json!({"id": "1", "model": "SBWF3102", "fw": "1.7.21", "hw": 1, "mf": "NET2GRID"});
        let error = Device::from_value(&value, Variant::GridNet).unwrap_err();
        assert!(matches!(error, MappingError::MissingField("batch")));
    }

    #[test]
    fn test_null_required_key_fails() {
        let value = json!({"id": null, "model": "SBWF3102", "fw": "1.7.21", "mf": "NET2GRID"});
        let error = Device::from_value(&value, Variant::PureEnergie).unwrap_err();
        assert!(matches!(error, MappingError::MissingField("id")));
    }

    #[test]
    fn test_wrong_type_fails() {
        let value = json!({"id": 42, "model": "SBWF3102", "fw": "1.7.21", "mf": "NET2GRID"});
        let error = Device::from_value(&value, Variant::PureEnergie).unwrap_err();
        assert!(matches!(error, MappingError::Invalid(_)));
    }

    #[test]
    fn test_not_an_object_fails() {
        let error = Device::from_value(&json!("OK"), Variant::GridNet).unwrap_err();
        assert!(matches!(error, MappingError::Invalid(_)));
    }
}
