use kernel::id::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventMarker;
pub type EventId = Id<EventMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_id_new() {
        let event_id = EventId::new();
        assert_eq!(event_id.as_uuid().get_version_num(), 4); // UUIDv4
    }
}
