//! Wire types for the `equipamento` REST resource.
//!
//! The backend speaks JSON with `type` and `imageUrl` keys and spelled-out
//! status values, so the serde renames here pin the exact wire format.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

/// A value that is not a member of a closed enumeration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized value: {0}")]
pub struct UnknownVariant(pub String);

/// An equipment record as returned by the backend.
///
/// `id` is assigned by the server on create and is never sent back on
/// create requests.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EquipmentRecord {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EquipmentKind,
    pub status: EquipmentStatus,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Request body shared by the create and edit paths.
///
/// Carries no `id`: on create the server assigns one, on edit the id
/// travels in the URL path.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct EquipmentPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EquipmentKind,
    pub status: EquipmentStatus,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Closed set of equipment types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EquipmentKind {
    Truck,
    Excavator,
    Crane,
}

impl EquipmentKind {
    pub const ALL: [EquipmentKind; 3] = [
        EquipmentKind::Truck,
        EquipmentKind::Excavator,
        EquipmentKind::Crane,
    ];

    /// Wire value, also used as the select-option label.
    pub fn as_str(self) -> &'static str {
        match self {
            EquipmentKind::Truck => "Truck",
            EquipmentKind::Excavator => "Excavator",
            EquipmentKind::Crane => "Crane",
        }
    }
}

impl fmt::Display for EquipmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_owned()))
    }
}

/// Closed set of operational statuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EquipmentStatus {
    Active,
    Broken,
    #[serde(rename = "Under Maintenance")]
    UnderMaintenance,
    #[serde(rename = "Parked at Workshop")]
    ParkedAtWorkshop,
}

impl EquipmentStatus {
    pub const ALL: [EquipmentStatus; 4] = [
        EquipmentStatus::Active,
        EquipmentStatus::Broken,
        EquipmentStatus::UnderMaintenance,
        EquipmentStatus::ParkedAtWorkshop,
    ];

    /// Wire value, also used as the select-option label.
    pub fn as_str(self) -> &'static str {
        match self {
            EquipmentStatus::Active => "Active",
            EquipmentStatus::Broken => "Broken",
            EquipmentStatus::UnderMaintenance => "Under Maintenance",
            EquipmentStatus::ParkedAtWorkshop => "Parked at Workshop",
        }
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_owned()))
    }
}
