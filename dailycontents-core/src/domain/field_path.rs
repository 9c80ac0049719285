//! Field paths into a [`UserData`] record
//!
//! The form addresses leaves with flat dotted names (`name`, `address.city`,
//! `company.bs`). The namespace is flatter than the storage layout:
//! `address.lat` and `address.lng` live under `address.geo`. Paths are a
//! closed enum so an unknown path can only appear at the string boundary
//! ([`FieldPath::from_str`]), never inside the core.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::result::{Error, Result};
use super::user::UserData;

/// Top-level scalar fields of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopLevelField {
    Name,
    Username,
    Email,
    Phone,
    Website,
}

/// Scalar fields directly under `address`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Street,
    Suite,
    City,
    Zipcode,
}

/// Coordinates under `address.geo`, addressed as `address.lat` / `address.lng`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeoField {
    Lat,
    Lng,
}

/// Scalar fields under `company`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyField {
    Name,
    CatchPhrase,
    Bs,
}

/// One leaf of a user record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Top(TopLevelField),
    Address(AddressField),
    Geo(GeoField),
    Company(CompanyField),
}

impl TopLevelField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "username" => Some(Self::Username),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "website" => Some(Self::Website),
            _ => None,
        }
    }
}

impl AddressField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "street" => Some(Self::Street),
            "suite" => Some(Self::Suite),
            "city" => Some(Self::City),
            "zipcode" => Some(Self::Zipcode),
            _ => None,
        }
    }
}

impl CompanyField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "catchPhrase" | "catchphrase" => Some(Self::CatchPhrase),
            "bs" | "slogan" => Some(Self::Bs),
            _ => None,
        }
    }
}

impl FieldPath {
    /// Every legal path, in the order the form presents them
    pub const ALL: [FieldPath; 14] = [
        FieldPath::Top(TopLevelField::Name),
        FieldPath::Top(TopLevelField::Username),
        FieldPath::Top(TopLevelField::Email),
        FieldPath::Top(TopLevelField::Phone),
        FieldPath::Top(TopLevelField::Website),
        FieldPath::Address(AddressField::Street),
        FieldPath::Address(AddressField::Suite),
        FieldPath::Address(AddressField::City),
        FieldPath::Address(AddressField::Zipcode),
        FieldPath::Geo(GeoField::Lat),
        FieldPath::Geo(GeoField::Lng),
        FieldPath::Company(CompanyField::Name),
        FieldPath::Company(CompanyField::CatchPhrase),
        FieldPath::Company(CompanyField::Bs),
    ];

    /// Canonical dotted form
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldPath::Top(TopLevelField::Name) => "name",
            FieldPath::Top(TopLevelField::Username) => "username",
            FieldPath::Top(TopLevelField::Email) => "email",
            FieldPath::Top(TopLevelField::Phone) => "phone",
            FieldPath::Top(TopLevelField::Website) => "website",
            FieldPath::Address(AddressField::Street) => "address.street",
            FieldPath::Address(AddressField::Suite) => "address.suite",
            FieldPath::Address(AddressField::City) => "address.city",
            FieldPath::Address(AddressField::Zipcode) => "address.zipcode",
            FieldPath::Geo(GeoField::Lat) => "address.lat",
            FieldPath::Geo(GeoField::Lng) => "address.lng",
            FieldPath::Company(CompanyField::Name) => "company.name",
            FieldPath::Company(CompanyField::CatchPhrase) => "company.catchPhrase",
            FieldPath::Company(CompanyField::Bs) => "company.bs",
        }
    }

    /// Human-readable label for form prompts
    pub fn label(&self) -> &'static str {
        match self {
            FieldPath::Top(TopLevelField::Name) => "Name",
            FieldPath::Top(TopLevelField::Username) => "Username",
            FieldPath::Top(TopLevelField::Email) => "Email",
            FieldPath::Top(TopLevelField::Phone) => "Phone",
            FieldPath::Top(TopLevelField::Website) => "Website",
            FieldPath::Address(AddressField::Street) => "Street",
            FieldPath::Address(AddressField::Suite) => "Suite",
            FieldPath::Address(AddressField::City) => "City",
            FieldPath::Address(AddressField::Zipcode) => "Zipcode",
            FieldPath::Geo(GeoField::Lat) => "Latitude",
            FieldPath::Geo(GeoField::Lng) => "Longitude",
            FieldPath::Company(CompanyField::Name) => "Company name",
            FieldPath::Company(CompanyField::CatchPhrase) => "Catchphrase",
            FieldPath::Company(CompanyField::Bs) => "Business slogan",
        }
    }

    /// Form section the leaf belongs to
    pub fn section(&self) -> &'static str {
        match self {
            FieldPath::Top(_) => "Basic",
            FieldPath::Address(_) => "Address",
            FieldPath::Geo(_) => "Coordinates",
            FieldPath::Company(_) => "Company Info",
        }
    }

    /// Read the addressed leaf
    pub fn read<'a>(&self, user: &'a UserData) -> &'a str {
        match self {
            FieldPath::Top(TopLevelField::Name) => &user.name,
            FieldPath::Top(TopLevelField::Username) => &user.username,
            FieldPath::Top(TopLevelField::Email) => &user.email,
            FieldPath::Top(TopLevelField::Phone) => &user.phone,
            FieldPath::Top(TopLevelField::Website) => &user.website,
            FieldPath::Address(AddressField::Street) => &user.address.street,
            FieldPath::Address(AddressField::Suite) => &user.address.suite,
            FieldPath::Address(AddressField::City) => &user.address.city,
            FieldPath::Address(AddressField::Zipcode) => &user.address.zipcode,
            FieldPath::Geo(GeoField::Lat) => &user.address.geo.lat,
            FieldPath::Geo(GeoField::Lng) => &user.address.geo.lng,
            FieldPath::Company(CompanyField::Name) => &user.company.name,
            FieldPath::Company(CompanyField::CatchPhrase) => &user.company.catch_phrase,
            FieldPath::Company(CompanyField::Bs) => &user.company.bs,
        }
    }

    /// Mutable access to the addressed leaf
    pub(crate) fn slot<'a>(&self, user: &'a mut UserData) -> &'a mut String {
        match self {
            FieldPath::Top(TopLevelField::Name) => &mut user.name,
            FieldPath::Top(TopLevelField::Username) => &mut user.username,
            FieldPath::Top(TopLevelField::Email) => &mut user.email,
            FieldPath::Top(TopLevelField::Phone) => &mut user.phone,
            FieldPath::Top(TopLevelField::Website) => &mut user.website,
            FieldPath::Address(AddressField::Street) => &mut user.address.street,
            FieldPath::Address(AddressField::Suite) => &mut user.address.suite,
            FieldPath::Address(AddressField::City) => &mut user.address.city,
            FieldPath::Address(AddressField::Zipcode) => &mut user.address.zipcode,
            FieldPath::Geo(GeoField::Lat) => &mut user.address.geo.lat,
            FieldPath::Geo(GeoField::Lng) => &mut user.address.geo.lng,
            FieldPath::Company(CompanyField::Name) => &mut user.company.name,
            FieldPath::Company(CompanyField::CatchPhrase) => &mut user.company.catch_phrase,
            FieldPath::Company(CompanyField::Bs) => &mut user.company.bs,
        }
    }
}

impl FromStr for FieldPath {
    type Err = Error;

    fn from_str(path: &str) -> Result<Self> {
        let parsed = match path.split_once('.') {
            None => TopLevelField::from_name(path).map(FieldPath::Top),
            Some(("address", "lat")) => Some(FieldPath::Geo(GeoField::Lat)),
            Some(("address", "lng")) => Some(FieldPath::Geo(GeoField::Lng)),
            Some(("address", leaf)) => AddressField::from_name(leaf).map(FieldPath::Address),
            Some(("company", leaf)) => CompanyField::from_name(leaf).map(FieldPath::Company),
            Some(_) => None,
        };

        parsed.ok_or_else(|| Error::unknown_field_path(path))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_paths_round_trip() {
        for path in FieldPath::ALL {
            let parsed: FieldPath = path.as_str().parse().unwrap();
            assert_eq!(parsed, path);
        }
    }

    #[test]
    fn test_geo_routing_exception() {
        assert_eq!("address.lat".parse::<FieldPath>().unwrap(), FieldPath::Geo(GeoField::Lat));
        assert_eq!("address.lng".parse::<FieldPath>().unwrap(), FieldPath::Geo(GeoField::Lng));
    }

    #[test]
    fn test_company_aliases() {
        assert_eq!(
            "company.catchphrase".parse::<FieldPath>().unwrap(),
            FieldPath::Company(CompanyField::CatchPhrase)
        );
        assert_eq!(
            "company.slogan".parse::<FieldPath>().unwrap(),
            FieldPath::Company(CompanyField::Bs)
        );
    }

    #[test]
    fn test_unknown_paths_rejected() {
        for bad in [
            "",
            "foo",
            "id",
            "address",
            "company",
            "address.",
            "address.country",
            "address.geo",
            "address.geo.lat",
            "company.address",
            "geo.lat",
            "Name",
            "name.first",
        ] {
            let err = bad.parse::<FieldPath>().unwrap_err();
            assert!(
                matches!(err, Error::UnknownFieldPath(ref p) if p == bad),
                "expected rejection for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_read_reaches_nested_leaves() {
        let mut user = UserData::empty();
        user.address.geo.lng = "81.1496".to_string();
        user.company.bs = "harness real-time e-markets".to_string();

        assert_eq!(FieldPath::Geo(GeoField::Lng).read(&user), "81.1496");
        assert_eq!(
            FieldPath::Company(CompanyField::Bs).read(&user),
            "harness real-time e-markets"
        );
        assert_eq!(FieldPath::Top(TopLevelField::Name).read(&user), "");
    }

    #[test]
    fn test_serde_as_string() {
        let path = FieldPath::Company(CompanyField::CatchPhrase);
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"company.catchPhrase\"");

        let parsed: FieldPath = serde_json::from_str("\"address.zipcode\"").unwrap();
        assert_eq!(parsed, FieldPath::Address(AddressField::Zipcode));

        assert!(serde_json::from_str::<FieldPath>("\"address.country\"").is_err());
    }
}
