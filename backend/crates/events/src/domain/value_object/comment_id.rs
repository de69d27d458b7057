use kernel::id::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentMarker;
pub type CommentId = Id<CommentMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_id_new() {
        let comment_id = CommentId::new();
        assert_eq!(comment_id.as_uuid().get_version_num(), 4); // UUIDv4
    }
}
