/// Host-provided view of the application's class space.
///
/// The resolver itself performs no reflection; everything it needs to know
/// about a candidate class comes through this trait. Implementations are
/// expected to treat class names case-insensitively, matching how the host
/// runtime looks classes up.
pub trait TypeRegistry {
    /// Case-insensitive existence check. Returns the class name in its
    /// registered casing so the resolver can detect caller-side case
    /// mismatches; `None` means no such class.
    fn lookup(&self, class: &str) -> Option<String>;

    /// Whether the class fulfills the named capability, i.e. implements the
    /// role the host expects of a resolvable handler.
    fn satisfies_capability(&self, class: &str, capability: &str) -> bool;

    /// Whether the class is abstract and therefore not instantiable.
    fn is_abstract(&self, class: &str) -> bool;
}
