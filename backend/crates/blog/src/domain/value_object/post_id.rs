use kernel::id::Id;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostMarker;
pub type PostId = Id<PostMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_id_new() {
        let post_id = PostId::new();
        assert_eq!(post_id.as_uuid().get_version_num(), 4); // UUIDv4
    }
}
