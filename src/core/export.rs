/// Conversion from a raw wire entity into its public domain entity.
///
/// Infallible: anything that survived decoding can be exported.
pub(crate) trait Export {
    type Output;

    fn export(self) -> Self::Output;
}
