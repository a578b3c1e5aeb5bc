use super::HumanName;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Serializes as a map of every component (empty components included), plus
/// an `additional` list when other names were split from the same input.
impl Serialize for HumanName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let components = self.as_map(true);
        let len = components.len() + usize::from(!self.additional.is_empty());

        let mut map = serializer.serialize_map(Some(len))?;
        for (key, value) in &components {
            map.serialize_entry(key, value)?;
        }
        if !self.additional.is_empty() {
            map.serialize_entry("additional", &self.additional)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;
    use serde_json::json;

    #[test]
    fn single_name() {
        let name = HumanName::parse("Mr. Jones");
        assert_eq!(
            json!({
                "title": "Mr.",
                "first": "",
                "middle": "",
                "last": "Jones",
                "lastbase": "Jones",
                "lastprefixes": "",
                "suffix": "",
                "nickname": "",
            }),
            serde_json::to_value(&name).unwrap()
        );
    }

    #[test]
    fn additional_names() {
        let name = Parser::new()
            .multiple_names(true)
            .parse("John & Jane Smith");
        let value = serde_json::to_value(&name).unwrap();
        assert_eq!("John", value["first"]);
        assert_eq!("Smith", value["last"]);
        assert_eq!("Jane", value["additional"][0]["first"]);
        assert_eq!("Smith", value["additional"][0]["last"]);
        assert!(value["additional"][0].get("additional").is_none());
    }
}
