/*
 * Copyright (c) 2026 Medial Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::{Serialize, Serializer};
use strum_macros::{Display, EnumString};

// The service owns these vocabularies and grows them without notice, so
// every enum keeps a passthrough variant instead of rejecting unknown
// values. Serialization goes through Display to keep the wire strings
// exact.
macro_rules! serialize_as_display {
    ($($t:ty),+) => {$(
        impl Serialize for $t {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }
    )+};
}

/// Kind of entity a post or like attaches to.
#[derive(Debug, Clone, PartialEq, Eq, Default, EnumString, Display)]
pub enum ReferenceType {
    #[default]
    #[strum(to_string = "POD")]
    Pod,
    #[strum(to_string = "POST")]
    Post,
    #[strum(default)]
    Other(String),
}

/// Kind of identity attributed as the author of a post.
#[derive(Debug, Clone, PartialEq, Eq, Default, EnumString, Display)]
pub enum CreatorType {
    #[default]
    #[strum(to_string = "USER")]
    User,
    #[strum(default)]
    Other(String),
}

/// Feed ordering accepted by the posts endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, EnumString, Display)]
pub enum PostFilter {
    #[default]
    #[strum(to_string = "trending")]
    Trending,
    #[strum(to_string = "latest")]
    Latest,
    #[strum(default)]
    Other(String),
}

serialize_as_display!(ReferenceType, CreatorType, PostFilter);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn known_values_round_trip() {
        assert_eq!(ReferenceType::Pod.to_string(), "POD");
        assert_eq!(ReferenceType::from_str("POST").unwrap(), ReferenceType::Post);
        assert_eq!(PostFilter::Latest.to_string(), "latest");
    }

    #[test]
    fn unknown_values_pass_through() {
        let parsed = CreatorType::from_str("BOT").unwrap();
        assert_eq!(parsed, CreatorType::Other("BOT".into()));
        assert_eq!(parsed.to_string(), "BOT");
    }

    #[test]
    fn serializes_to_wire_string() {
        assert_eq!(serde_json::to_string(&ReferenceType::Pod).unwrap(), "\"POD\"");
        assert_eq!(
            serde_json::to_string(&ReferenceType::Other("EVENT".into())).unwrap(),
            "\"EVENT\""
        );
    }
}
