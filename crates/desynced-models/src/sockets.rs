use desynced_cargo::{impl_cargo_record, CargoRecord, CargoType, RecordDescriptor, Value};

/// Attachment sockets of an entity, counted per size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sockets {
    pub large_sockets: i32,
    pub medium_sockets: i32,
    pub small_sockets: i32,
    pub internal_sockets: i32,
}

impl Sockets {
    /// Count one socket of the given size.
    ///
    /// Returns `false` for sizes with no counter.
    pub fn increment(&mut self, size: &str) -> bool {
        let counter = match size.to_ascii_lowercase().as_str() {
            "large" => &mut self.large_sockets,
            "medium" => &mut self.medium_sockets,
            "small" => &mut self.small_sockets,
            "internal" => &mut self.internal_sockets,
            _ => return false,
        };
        *counter += 1;
        true
    }

    pub fn total(&self) -> i32 {
        self.large_sockets + self.medium_sockets + self.small_sockets + self.internal_sockets
    }
}

impl CargoRecord for Sockets {
    fn descriptor() -> RecordDescriptor {
        RecordDescriptor::new("Sockets")
            .field::<i32>("large_sockets")
            .field::<i32>("medium_sockets")
            .field::<i32>("small_sockets")
            .field::<i32>("internal_sockets")
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "large_sockets" => Some(self.large_sockets.to_value()),
            "medium_sockets" => Some(self.medium_sockets.to_value()),
            "small_sockets" => Some(self.small_sockets.to_value()),
            "internal_sockets" => Some(self.internal_sockets.to_value()),
            _ => None,
        }
    }
}

impl_cargo_record!(Sockets);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment() {
        let mut sockets = Sockets::default();
        assert!(sockets.increment("Small"));
        assert!(sockets.increment("small"));
        assert!(sockets.increment("Internal"));
        assert!(!sockets.increment("Huge"));
        assert_eq!(sockets.small_sockets, 2);
        assert_eq!(sockets.internal_sockets, 1);
        assert_eq!(sockets.total(), 3);
    }
}
