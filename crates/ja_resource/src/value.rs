use core::any::Any;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Type-erased view of a record field.
///
/// Implemented for every `Serialize + DeserializeOwned` type, which is what
/// `#[derive(Resource)]` requires of tagged and untagged fields alike.
pub trait FieldValue: Any + Send + Sync {
    /// The value as an object-safe serde serializer.
    fn as_serialize(&self) -> &dyn erased_serde::Serialize;

    /// Replaces the value with one decoded from raw JSON text.
    fn assign_json(&mut self, raw: &str) -> serde_json::Result<()>;

    /// Upcast for downcasting to the concrete field type.
    fn as_any(&self) -> &dyn Any;
}

impl<T> FieldValue for T
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    #[inline]
    fn as_serialize(&self) -> &dyn erased_serde::Serialize {
        self
    }

    fn assign_json(&mut self, raw: &str) -> serde_json::Result<()> {
        *self = serde_json::from_str(raw)?;
        Ok(())
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::FieldValue;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn assign_and_serialize() {
        let mut value: Vec<u32> = Vec::new();
        let erased: &mut dyn FieldValue = &mut value;
        erased.assign_json("[1,2,3]").unwrap();
        assert_eq!(serde_json::to_string(erased.as_serialize()).unwrap(), "[1,2,3]");
        assert_eq!(erased.as_any().downcast_ref::<Vec<u32>>(), Some(&vec![1, 2, 3]));

        let mut name = String::from("keep");
        assert!(name.assign_json("12").is_err());
        assert_eq!(name, "keep");
    }
}
