use kernel::id::Id;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentMarker;
pub type CommentId = Id<CommentMarker>;
