//! DTOs for decoding JSONPlaceholder responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into port
//! records in one pass. The four core user fields and every comment field
//! are required; nested user details default when the upstream omits them.

use serde::Deserialize;

use crate::domain::ports::{Address, CommentRecord, Company, Geo, UserRecord};

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    pub(super) id: u64,
    pub(super) name: String,
    pub(super) username: String,
    pub(super) email: String,
    pub(super) address: Option<AddressDto>,
    pub(super) phone: Option<String>,
    pub(super) website: Option<String>,
    pub(super) company: Option<CompanyDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AddressDto {
    #[serde(default)]
    pub(super) street: String,
    #[serde(default)]
    pub(super) suite: String,
    #[serde(default)]
    pub(super) city: String,
    #[serde(default)]
    pub(super) zipcode: String,
    pub(super) geo: Option<GeoDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeoDto {
    #[serde(default)]
    pub(super) lat: String,
    #[serde(default)]
    pub(super) lng: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct CompanyDto {
    #[serde(default)]
    pub(super) name: String,
    #[serde(default, rename = "catchPhrase")]
    pub(super) catch_phrase: String,
    #[serde(default)]
    pub(super) bs: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct CommentDto {
    #[serde(rename = "postId")]
    pub(super) post_id: u64,
    pub(super) id: u64,
    pub(super) name: String,
    pub(super) email: String,
    pub(super) body: String,
}

impl UserDto {
    pub(super) fn into_record(self) -> UserRecord {
        UserRecord {
            id: self.id,
            name: self.name,
            username: self.username,
            email: self.email,
            address: self.address.map(AddressDto::into_record),
            phone: self.phone,
            website: self.website,
            company: self.company.map(CompanyDto::into_record),
        }
    }
}

impl AddressDto {
    fn into_record(self) -> Address {
        Address {
            street: self.street,
            suite: self.suite,
            city: self.city,
            zipcode: self.zipcode,
            geo: self.geo.map(|geo| Geo {
                lat: geo.lat,
                lng: geo.lng,
            }),
        }
    }
}

impl CompanyDto {
    fn into_record(self) -> Company {
        Company {
            name: self.name,
            catch_phrase: self.catch_phrase,
            bs: self.bs,
        }
    }
}

impl CommentDto {
    pub(super) fn into_record(self) -> CommentRecord {
        CommentRecord {
            post_id: self.post_id,
            id: self.id,
            name: self.name,
            email: self.email,
            body: self.body,
        }
    }
}
