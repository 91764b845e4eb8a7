use alloc::boxed::Box;
use alloc::vec::Vec;

/// Error returned by a lifecycle hook.
///
/// [`ErrorItem`](crate::document::ErrorItem) and
/// [`ErrorSet`](crate::document::ErrorSet) convert into it, so hooks can
/// report validation failures with `?`.
pub type HookError = Box<dyn core::error::Error + Send + Sync>;

/// Optional lifecycle hooks of a [`Resource`](crate::Resource).
///
/// Every method has a no-op default. `#[derive(Resource)]` emits an empty
/// implementation unless the type is marked `#[jsonapi(hooks)]`, in which
/// case the type implements this trait itself.
///
/// # Examples
///
/// ```
/// use ja_resource::{HookError, ResourceHooks, derive::Resource};
///
/// #[derive(Resource, Default)]
/// #[jsonapi(hooks)]
/// struct Post {
///     #[jsonapi(id = "posts")]
///     id: u64,
///     #[jsonapi(link = "self")]
///     url: String,
/// }
///
/// impl ResourceHooks for Post {
///     fn before_encode(&mut self) -> Result<(), HookError> {
///         self.url = format!("/posts/{}", self.id);
///         Ok(())
///     }
/// }
///
/// let bytes = ja_resource::encode(&mut Post { id: 7, url: String::new() }).unwrap();
/// assert_eq!(bytes, br#"{"id":"7","type":"posts","links":{"self":"/posts/7"}}"#);
/// ```
pub trait ResourceHooks {
    /// Runs before the record is serialized; it may mutate the record.
    fn before_encode(&mut self) -> Result<(), HookError> {
        Ok(())
    }

    /// Replaces field-by-field encoding when it returns `Some`.
    ///
    /// The bytes are written to the output verbatim.
    fn encode_override(&self) -> Option<Result<Vec<u8>, HookError>> {
        None
    }

    /// Replaces field-by-field decoding when it returns `Some`.
    fn decode_override(&mut self, _input: &[u8]) -> Option<Result<(), HookError>> {
        None
    }

    /// Runs after all decoded attributes were applied.
    fn after_decode(&mut self) -> Result<(), HookError> {
        Ok(())
    }

    /// Resource type name used when the `id` tag does not name one.
    fn resource_type_name() -> Option<&'static str>
    where
        Self: Sized,
    {
        None
    }

    /// Declared name of the identifier field, for types without an `id` tag.
    fn identifier_field() -> Option<&'static str>
    where
        Self: Sized,
    {
        None
    }
}
