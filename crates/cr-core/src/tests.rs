//! Unit tests for cr-core primitives.

#[cfg(test)]
mod ids {
    use crate::LocationId;

    #[test]
    fn index_roundtrip() {
        let id = LocationId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(LocationId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(LocationId(0) < LocationId(1));
        assert!(LocationId(100) > LocationId(99));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(LocationId::INVALID.0, u32::MAX);
        assert_eq!(LocationId::default(), LocationId::INVALID);
    }

    #[test]
    fn display_is_bare_integer() {
        assert_eq!(LocationId(7).to_string(), "7");
    }
}
