//! Model capability declarations for full-text search.
//!
//! This module provides:
//! - The [`FullText`] trait models implement to declare searchable columns
//! - Runtime [`ModelDescriptor`]s used by the registry and the query compiler

mod descriptor;

pub use descriptor::ModelDescriptor;

/// Capability trait for models backed by a MySQL table with a FULLTEXT index.
///
/// Implementors declare the backing table and the ordered set of columns the
/// index covers. The column list must be non-empty before the table is
/// created; registration fails loudly otherwise.
///
/// ```rust,ignore
/// use fulltext_core::FullText;
///
/// struct Article;
///
/// impl FullText for Article {
///     fn table_name() -> &'static str {
///         "articles"
///     }
///
///     fn columns() -> &'static [&'static str] {
///         &["title", "body"]
///     }
/// }
/// ```
///
/// Codebases that manage schema through external migration tooling override
/// `auto_index` to return `false` and build the index explicitly via
/// `FulltextIndex::for_model`.
pub trait FullText {
    /// Name of the backing table.
    fn table_name() -> &'static str;

    /// Ordered columns covered by the FULLTEXT index.
    fn columns() -> &'static [&'static str];

    /// Whether index DDL is queued automatically at registration time.
    fn auto_index() -> bool {
        true
    }

    /// Short type name, used in descriptors and error messages.
    fn model_name() -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// Build the runtime descriptor for this model.
    fn descriptor() -> ModelDescriptor {
        ModelDescriptor::new(Self::model_name(), Self::table_name(), Self::columns())
            .with_auto_index(Self::auto_index())
    }
}
